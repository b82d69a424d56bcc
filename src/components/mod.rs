//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the chat surface and navbar while reading/writing
//! shared state from Leptos context providers.

pub mod agent_icon;
pub mod chat_history;
pub mod chat_input;
pub mod chat_message;
pub mod navbar;
