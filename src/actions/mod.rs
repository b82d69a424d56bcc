//! Async actions that drive state through the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call these from event handlers (wrapped in `spawn_local`).
//! Each action is generic over `ChatApi` and `SharedState`, catches its own
//! failures, logs them, and leaves state settled: no action can leave a
//! spinner running after its request has resolved.

pub mod agents;
pub mod chat;
pub mod feedback;

#[cfg(test)]
#[path = "fake_api_test.rs"]
pub(crate) mod fake_api;
