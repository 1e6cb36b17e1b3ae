//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Action, Guard, State, StateRef, Transition};

/// Builder for transitions with a fluent API.
///
/// A target is always required. The general form also requires a guard;
/// the wildcard must be requested explicitly with `on_any_event`, so a
/// forgotten guard fails the build instead of silently matching
/// everything.
pub struct TransitionBuilder {
    name: Option<String>,
    guard: Option<Guard>,
    target: Option<StateRef>,
    effect: Option<Action>,
}

impl TransitionBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            name: None,
            guard: None,
            target: None,
            effect: None,
        }
    }

    /// Set the display name (optional, graph export only).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Guard on a single event identifier.
    pub fn guarded_by(mut self, event: impl Into<String>) -> Self {
        self.guard = Some(Guard::event(event));
        self
    }

    /// Match every event.
    pub fn on_any_event(mut self) -> Self {
        self.guard = Some(Guard::Any);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, target: &State) -> Self {
        self.target = Some(target.state_ref());
        self
    }

    /// Set the side effect performed when the transition is taken
    /// (optional).
    pub fn effect(mut self, effect: Action) -> Self {
        self.effect = Some(effect);
        self
    }

    /// Build the transition.
    /// Returns an error if the target or the guard is missing.
    pub fn build(self) -> Result<Transition, BuildError> {
        let target = self.target.ok_or(BuildError::MissingTarget)?;
        let guard = self.guard.ok_or(BuildError::MissingGuard)?;

        Ok(Transition::new(self.name, guard, target, self.effect))
    }
}

impl Default for TransitionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
