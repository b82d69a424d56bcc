//! JSON DTOs for the chatbot backend endpoints.
//!
//! DESIGN
//! ======
//! Field names mirror the backend payloads exactly. Field order on outbound
//! bodies matters to the backend's request logging, so structs are declared
//! in wire order.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /api/ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub session_id: String,
}

/// Response of `POST /api/ask` and `GET /api/greetings`.
///
/// The ask endpoint also echoes `question`; it is ignored here.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Body of `POST /api/feedback`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    /// Human question the rated answer responded to.
    pub question: String,
    /// Bot answer being rated.
    pub answer: String,
    /// `true` for thumbs up, `false` for thumbs down.
    pub like: bool,
    pub session_id: String,
}

/// Health of a single backend agent as reported by `GET /api/agents`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStatus {
    #[serde(rename = "agent")]
    pub name: String,
    pub healthy: bool,
}
