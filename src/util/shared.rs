//! Uniform mutation access over shared state containers.
//!
//! DESIGN
//! ======
//! Components hold state in `RwSignal`s provided via context, while tests
//! drive the same actions against `Rc<RefCell<_>>`. Actions are written
//! against `SharedState` so both run the identical state machine.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update};

pub trait SharedState<T> {
    /// Mutate the state, returning `None` if it no longer exists.
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> SharedState<T> for RwSignal<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> SharedState<T> for Rc<RefCell<T>> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
