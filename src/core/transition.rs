//! Guarded transitions and first-match resolution.

use crate::core::action::Action;
use crate::core::guard::Guard;
use crate::core::state::StateRef;

/// A guarded edge from one state to another.
///
/// Transitions are immutable once built and owned by exactly one source
/// state. The target is a non-owning [`StateRef`]; several transitions may
/// point at the same state, and cycles are expected. The optional effect
/// runs only when the transition is actually taken; the optional display
/// name exists for diagnostics and graph export and is irrelevant to
/// matching.
#[derive(Debug)]
pub struct Transition {
    name: Option<String>,
    guard: Guard,
    target: StateRef,
    effect: Option<Action>,
}

impl Transition {
    pub(crate) fn new(
        name: Option<String>,
        guard: Guard,
        target: StateRef,
        effect: Option<Action>,
    ) -> Self {
        Transition {
            name,
            guard,
            target,
            effect,
        }
    }

    /// The display name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The guard this transition requires.
    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    /// The target state identity.
    pub fn target(&self) -> &StateRef {
        &self.target
    }

    /// The side effect performed when the transition is taken.
    pub fn effect(&self) -> Option<&Action> {
        self.effect.as_ref()
    }

    /// Whether the incoming event satisfies this transition's guard.
    pub fn matches(&self, event: &str) -> bool {
        self.guard.matches(event)
    }
}

/// Scan transitions in declaration order and return the first whose guard
/// matches the event, or `None` if no transition matches.
///
/// Declaration order is the only tie-break: when several transitions would
/// match, later ones are unreachable. Resolution is pure; the caller runs
/// side effects after a match is confirmed.
pub fn resolve_transition<'a>(transitions: &'a [Transition], event: &str) -> Option<&'a Transition> {
    transitions.iter().find(|t| t.matches(event))
}
