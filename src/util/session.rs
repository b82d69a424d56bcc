//! Session identity for correlating requests from one browser profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identifier is created once, persisted under a fixed storage key and
//! reused across reloads. The resulting `SessionContext` is constructed
//! explicitly and handed to the UI through Leptos context, so nothing reads
//! session state from ambient globals.
//!
//! TRADE-OFFS
//! ==========
//! When storage is unavailable the session degrades to a per-activation id:
//! continuity is lost, the page keeps working.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use super::storage::KeyValueStore;

pub const SESSION_STORAGE_KEY: &str = "chatbot_session_id";

/// Opaque session identifier shared by ask and feedback requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionContext {
    pub id: String,
}

impl SessionContext {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Reuse the stored session id, or create and persist a fresh one.
    pub fn establish<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(SESSION_STORAGE_KEY) {
            Ok(Some(id)) if !id.trim().is_empty() => return Self::new(id),
            Ok(_) => {}
            Err(e) => {
                leptos::logging::warn!("session storage read failed: {e}");
                return Self::new(generate_session_id());
            }
        }

        let id = generate_session_id();
        if let Err(e) = store.set(SESSION_STORAGE_KEY, &id) {
            leptos::logging::warn!("session storage write failed: {e}");
        }
        Self::new(id)
    }
}

fn generate_session_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
