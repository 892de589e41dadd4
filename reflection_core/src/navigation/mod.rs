//! Navigation module - the ordered stack of logical screens.
//!
//! An empty stack means the implicit welcome root, which is never itself a
//! stack entry. Transitions happen only when a screen controller reacts to
//! a gesture; nothing here is driven by timers or background work.

mod coordinator;
mod route;

pub use coordinator::*;
pub use route::*;
