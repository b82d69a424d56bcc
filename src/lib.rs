//! # ragchat-client
//!
//! Leptos + WASM frontend for the retrieval-augmented chatbot.
//!
//! This crate contains pages, components, the conversation state machine,
//! the async actions that drive it, and the REST client for the chatbot
//! backend. Everything except the browser glue compiles and tests natively;
//! the `csr` feature switches on the real `localStorage` and `gloo-net`
//! implementations.

pub mod actions;
pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
