//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, clock,
//! session identity) from page and component logic to improve reuse and
//! testability.

pub mod clock;
pub mod markdown;
pub mod session;
pub mod shared;
pub mod storage;
