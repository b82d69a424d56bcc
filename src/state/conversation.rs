//! Conversation history and send/loading state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The history is append-only: order is display order is chronological
//! order. Each bot answer records the question that produced it, so feedback
//! correlation never depends on list positions.
//!
//! STATE MACHINE
//! =============
//! `Idle --begin_send--> Sending --finish_send--> Idle`. The human message is
//! appended in `begin_send` before any request is dispatched, which keeps it
//! ahead of its answer regardless of network timing.

#[cfg(test)]
#[path = "conversation_test.rs"]
mod conversation_test;

use crate::net::api::ApiError;

/// Bot message shown when the greeting fetch fails.
pub const GREETING_FALLBACK: &str = "Sorry, I can't reach the assistant right now. Please try again in a moment.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    Human,
    Bot,
}

impl Sender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Bot => "bot",
        }
    }
}

/// A single chat message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
    /// Originating question for bot answers; `None` for human messages and
    /// for bot messages not produced by a question (greeting, fallback).
    pub question: Option<String>,
}

impl Message {
    pub fn human(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Human, question: None }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot, question: None }
    }

    pub fn answer(question: impl Into<String>, text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot, question: Some(question.into()) }
    }

    pub fn is_bot(&self) -> bool {
        self.sender == Sender::Bot
    }

    /// Feedback is offered only on bot answers with a known question.
    pub fn accepts_feedback(&self) -> bool {
        self.is_bot() && self.question.is_some()
    }
}

/// Why a submit did not start a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Input was empty or whitespace only.
    Empty,
    /// A request is already in flight.
    Busy,
}

/// State for the chat page.
///
/// Fields are private so the history can only grow through `append`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    loading: bool,
}

impl ConversationState {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn append(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Seed the empty history with the greeting, or the fallback on failure.
    ///
    /// Returns `false` without changes if the history already has messages.
    pub fn seed_greeting(&mut self, greeting: Result<String, ApiError>) -> bool {
        if !self.messages.is_empty() {
            return false;
        }
        let text = greeting.unwrap_or_else(|_| GREETING_FALLBACK.to_owned());
        self.append(Message::bot(text));
        true
    }

    /// Validate and record a submission, entering the sending state.
    ///
    /// Returns the trimmed question to dispatch.
    pub fn begin_send(&mut self, input: &str) -> Result<String, IgnoreReason> {
        let question = input.trim();
        if question.is_empty() {
            return Err(IgnoreReason::Empty);
        }
        if self.loading {
            return Err(IgnoreReason::Busy);
        }
        self.append(Message::human(question));
        self.loading = true;
        Ok(question.to_owned())
    }

    /// Settle the in-flight request. Failures leave the history untouched.
    pub fn finish_send(&mut self, question: &str, result: &Result<String, ApiError>) {
        if let Ok(answer) = result {
            self.append(Message::answer(question, answer.clone()));
        }
        self.loading = false;
    }

    /// Question correlated with the bot answer at `index`.
    pub fn question_for(&self, index: usize) -> Option<&str> {
        let message = self.messages.get(index)?;
        if !message.is_bot() {
            return None;
        }
        message.question.as_deref()
    }
}
