//! REST API client for the chatbot backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns `ApiError::Unavailable`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed `Result` instead of panicking so actions can
//! log the failure and settle the UI into a neutral state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AgentStatus, AnswerResponse, FeedbackEvent};
use crate::config::AppConfig;

pub const GREETINGS_PATH: &str = "/api/greetings";
pub const ASK_PATH: &str = "/api/ask";
pub const FEEDBACK_PATH: &str = "/api/feedback";
pub const AGENTS_PATH: &str = "/api/agents";

/// Failure modes of a backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was malformed or missing a required field.
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("backend is only reachable from the browser")]
    Unavailable,
}

/// Backend operations the chat UI depends on.
///
/// Actions are generic over this trait so tests can substitute an in-memory
/// fake for the HTTP client.
#[allow(async_fn_in_trait)]
pub trait ChatApi {
    /// `GET /api/greetings`, returning the greeting text.
    async fn greeting(&self) -> Result<String, ApiError>;

    /// `POST /api/ask`, returning the answer text.
    async fn ask(&self, question: &str, session_id: &str) -> Result<String, ApiError>;

    /// `POST /api/feedback`. The acknowledgement body is not interpreted.
    async fn feedback(&self, event: &FeedbackEvent) -> Result<(), ApiError>;

    /// `GET /api/agents`.
    async fn agents(&self) -> Result<Vec<AgentStatus>, ApiError>;
}

/// `ChatApi` over HTTP against the configured backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpChatApi {
    config: AppConfig,
}

impl HttpChatApi {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

/// Extract the `answer` field from a greeting or ask response body.
pub fn decode_answer(raw: &str) -> Result<String, ApiError> {
    serde_json::from_str::<AnswerResponse>(raw)
        .map(|body| body.answer)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Parse the agent health list from a `GET /api/agents` body.
pub fn decode_agents(raw: &str) -> Result<Vec<AgentStatus>, ApiError> {
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn read_success_body(resp: gloo_net::http::Response) -> Result<String, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.text().await.map_err(transport_error)
}

impl ChatApi for HttpChatApi {
    async fn greeting(&self) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(GREETINGS_PATH))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(transport_error)?;
            decode_answer(&read_success_body(resp).await?)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn ask(&self, question: &str, session_id: &str) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let payload = super::types::AskRequest { question: question.to_owned(), session_id: session_id.to_owned() };
            let resp = gloo_net::http::Request::post(&self.url(ASK_PATH))
                .json(&payload)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            decode_answer(&read_success_body(resp).await?)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (question, session_id);
            Err(ApiError::Unavailable)
        }
    }

    async fn feedback(&self, event: &FeedbackEvent) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&self.url(FEEDBACK_PATH))
                .json(event)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            let ack = read_success_body(resp).await?;
            leptos::logging::log!("feedback acknowledged: {ack}");
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = event;
            Err(ApiError::Unavailable)
        }
    }

    async fn agents(&self) -> Result<Vec<AgentStatus>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.url(AGENTS_PATH))
                .header("Content-Type", "application/json")
                .send()
                .await
                .map_err(transport_error)?;
            decode_agents(&read_success_body(resp).await?)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}
