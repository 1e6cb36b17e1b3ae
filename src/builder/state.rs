//! Builder for constructing states.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{Action, State, Transition};

/// Builder for simple states with a fluent API.
///
/// Terminal states need no builder; use
/// [`State::final_state`](crate::State::final_state).
pub struct StateBuilder {
    name: String,
    entry: Option<Action>,
    exit: Option<Action>,
    transitions: Vec<Transition>,
}

impl StateBuilder {
    /// Create a builder for a state with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entry: None,
            exit: None,
            transitions: Vec::new(),
        }
    }

    /// Set the entry action (optional).
    pub fn on_entry(mut self, action: Action) -> Self {
        self.entry = Some(action);
        self
    }

    /// Set the exit action (optional).
    pub fn on_exit(mut self, action: Action) -> Self {
        self.exit = Some(action);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple pre-built transitions at once.
    pub fn transitions(mut self, transitions: Vec<Transition>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Build the state. Transition order is preserved; first match wins at
    /// dispatch time.
    pub fn build(self) -> State {
        State::simple(self.name, self.entry, self.exit, self.transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_bare_state() {
        let state = StateBuilder::new("OffHook").build();

        assert_eq!(state.name(), "OffHook");
        assert!(!state.is_final());
        assert!(state.transitions().is_empty());
        assert!(state.entry().is_none());
        assert!(state.exit().is_none());
    }

    #[test]
    fn transition_validation_is_eager() {
        let result = StateBuilder::new("From")
            .transition(TransitionBuilder::new().guarded_by("Go"));

        assert!(matches!(result, Err(BuildError::MissingTarget)));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let a = StateBuilder::new("A").build();
        let b = StateBuilder::new("B").build();

        let state = StateBuilder::new("From")
            .transition(TransitionBuilder::new().guarded_by("First").to(&a))
            .unwrap()
            .transition(TransitionBuilder::new().guarded_by("Second").to(&b))
            .unwrap()
            .build();

        let targets: Vec<&str> = state
            .transitions()
            .iter()
            .map(|t| t.target().name())
            .collect();
        assert_eq!(targets, vec!["A", "B"]);
    }

    #[test]
    fn entry_label_surfaces_for_export() {
        let state = StateBuilder::new("OffHook")
            .on_entry(Action::labeled("StartDialtone", || {}))
            .build();

        assert_eq!(state.entry_label(), Some("StartDialtone"));
    }
}
