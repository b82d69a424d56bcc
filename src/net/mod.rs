//! Networking modules for the chatbot REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `ChatApi` seam and its HTTP implementation, and `types`
//! defines the JSON wire schema shared with the backend.

pub mod api;
pub mod types;
