//! In-memory `ChatApi` for action tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::net::api::{ApiError, ChatApi};
use crate::net::types::{AgentStatus, FeedbackEvent};
use crate::state::conversation::ConversationState;

#[derive(Default)]
pub struct FakeApi {
    pub greeting: RefCell<Option<Result<String, ApiError>>>,
    pub answers: RefCell<VecDeque<Result<String, ApiError>>>,
    pub agents: RefCell<Option<Result<Vec<AgentStatus>, ApiError>>>,
    pub feedback_result: RefCell<Option<ApiError>>,
    /// When set, the next `ask` waits for this gate instead of `answers`.
    pub gate: RefCell<Option<oneshot::Receiver<Result<String, ApiError>>>>,
    /// Conversation observed from inside `ask`, to check in-flight state.
    pub probe: RefCell<Option<Rc<RefCell<ConversationState>>>>,
    pub observed_loading: RefCell<Vec<bool>>,
    pub asks: RefCell<Vec<(String, String)>>,
    pub feedback_sent: RefCell<Vec<FeedbackEvent>>,
    pub calls: Cell<usize>,
}

impl FakeApi {
    pub fn answering(answers: impl IntoIterator<Item = Result<String, ApiError>>) -> Self {
        let api = Self::default();
        api.answers.borrow_mut().extend(answers);
        api
    }
}

impl ChatApi for FakeApi {
    async fn greeting(&self) -> Result<String, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.greeting.borrow_mut().take().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn ask(&self, question: &str, session_id: &str) -> Result<String, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.asks.borrow_mut().push((question.to_owned(), session_id.to_owned()));
        if let Some(store) = self.probe.borrow().as_ref() {
            self.observed_loading.borrow_mut().push(store.borrow().loading());
        }
        let gate = self.gate.borrow_mut().take();
        if let Some(gate) = gate {
            return gate.await.unwrap_or(Err(ApiError::Transport("gate dropped".to_owned())));
        }
        self.answers.borrow_mut().pop_front().unwrap_or(Err(ApiError::Unavailable))
    }

    async fn feedback(&self, event: &FeedbackEvent) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.feedback_sent.borrow_mut().push(event.clone());
        match self.feedback_result.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn agents(&self) -> Result<Vec<AgentStatus>, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.agents.borrow_mut().take().unwrap_or(Err(ApiError::Unavailable))
    }
}
