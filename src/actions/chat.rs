//! Greeting seed and the send pipeline.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::api::{ApiError, ChatApi};
use crate::state::conversation::{ConversationState, IgnoreReason};
use crate::util::session::SessionContext;
use crate::util::shared::SharedState;

/// Result of a single submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Nothing was appended and no request was made.
    Ignored(IgnoreReason),
    /// The answer was appended.
    Answered,
    /// The request failed; the human message stays, no answer is appended.
    Failed(ApiError),
    /// The conversation state was disposed before the request could start.
    Detached,
}

/// Fetch the greeting once and seed the conversation with it.
///
/// A failed fetch seeds the fallback apology instead of leaving the
/// history empty. If the user already submitted while the fetch was in
/// flight, the greeting (or fallback) is dropped and logged.
pub async fn load_greeting<A, S>(api: &A, store: &S)
where
    A: ChatApi,
    S: SharedState<ConversationState>,
{
    let greeting = api.greeting().await;
    if let Err(e) = &greeting {
        leptos::logging::warn!("greeting fetch failed: {e}");
    }
    if store.modify(|c| c.seed_greeting(greeting)) == Some(false) {
        leptos::logging::log!("greeting dropped: conversation already started");
    }
}

/// Submit user text: append it, ask the backend, append the answer.
///
/// At most one request is issued per call, and none while another submit is
/// still in flight.
pub async fn submit_question<A, S>(api: &A, session: &SessionContext, store: &S, input: &str) -> SendOutcome
where
    A: ChatApi,
    S: SharedState<ConversationState>,
{
    let question = match store.modify(|c| c.begin_send(input)) {
        Some(Ok(question)) => question,
        Some(Err(reason)) => return SendOutcome::Ignored(reason),
        None => return SendOutcome::Detached,
    };

    let result = api.ask(&question, &session.id).await;
    store.modify(|c| c.finish_send(&question, &result));

    match result {
        Ok(_) => SendOutcome::Answered,
        Err(e) => {
            leptos::logging::warn!("ask failed: {e}");
            SendOutcome::Failed(e)
        }
    }
}
