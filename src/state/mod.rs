//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`conversation`, `feedback`, `agents`) so
//! individual components can depend on small focused models. Components
//! hold these in `RwSignal`s; the transitions themselves are plain methods.

pub mod agents;
pub mod conversation;
pub mod feedback;
