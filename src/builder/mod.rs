//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders for states and transitions with
//! fail-fast validation: a transition without a target, or without a guard
//! in the general form, refuses to build.

pub mod error;
pub mod state;
pub mod transition;

pub use error::BuildError;
pub use state::StateBuilder;
pub use transition::TransitionBuilder;

use crate::core::{State, Transition};

/// Create a transition guarded by a single event identifier.
pub fn event_transition(event: impl Into<String>, target: &State) -> Transition {
    TransitionBuilder::new()
        .guarded_by(event)
        .to(target)
        .build()
        .expect("Event transition should always build")
}

/// Create a wildcard transition that matches every event.
///
/// The single-transition convenience form: a state whose only transition
/// is unguarded leaves on whatever event arrives next.
pub fn unguarded_transition(target: &State) -> Transition {
    TransitionBuilder::new()
        .on_any_event()
        .to(target)
        .build()
        .expect("Unguarded transition should always build")
}
