//! Input mapping: platform keys are translated to [`Key`], then bound to
//! viewer [`Action`]s or held [`Movement`] flags.
//!
//! # Invariants
//! - The viewer consumes actions, never raw window events.
//! - A key is bound either to a movement or to an action, not both.

pub mod action;
pub mod bindings;

pub use action::{Action, Key, Movement, MovementState};
pub use bindings::{Binding, KeyBindings, MouseButton};
