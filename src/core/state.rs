//! Named states with entry/exit hooks and outgoing transitions.

use tracing::debug;

use crate::builder::BuildError;
use crate::core::action::Action;
use crate::core::guard::Guard;
use crate::core::transition::{resolve_transition, Transition};

/// The reserved event identifier that, by convention, guards transitions
/// into final states.
pub const FINAL_EVENT: &str = "FinalEvent";

/// A non-owning identity of a state: its name plus whether it is final.
///
/// Transitions store a `StateRef` as their target, which keeps the graph
/// free of ownership cycles; the machine resolves the name against its
/// registered set at dispatch time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateRef {
    name: String,
    is_final: bool,
}

impl StateRef {
    /// The referenced state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the referenced state is a final state.
    pub fn is_final(&self) -> bool {
        self.is_final
    }
}

impl From<&State> for StateRef {
    fn from(state: &State) -> Self {
        state.state_ref()
    }
}

#[derive(Debug)]
enum StateKind {
    Simple { transitions: Vec<Transition> },
    Final,
}

/// A named state in a machine.
///
/// States come in two variants. Simple states carry an ordered list of
/// outgoing transitions and participate in normal dispatch; final states
/// are terminal, carry no transitions, and never match an event. Both may
/// be registered with a [`StateMachine`](crate::StateMachine); names are
/// unique within a machine.
///
/// Entry and exit actions are optional. `execute` with no matching
/// transition is a normal "event ignored" outcome, not an error, and is
/// distinct from a transition to self, which still fires exit and entry.
#[derive(Debug)]
pub struct State {
    name: String,
    entry: Option<Action>,
    exit: Option<Action>,
    kind: StateKind,
}

impl State {
    pub(crate) fn simple(
        name: String,
        entry: Option<Action>,
        exit: Option<Action>,
        transitions: Vec<Transition>,
    ) -> Self {
        State {
            name,
            entry,
            exit,
            kind: StateKind::Simple { transitions },
        }
    }

    /// Create a terminal state. It has no outgoing transitions and ignores
    /// every event.
    pub fn final_state(name: impl Into<String>) -> Self {
        State {
            name: name.into(),
            entry: None,
            exit: None,
            kind: StateKind::Final,
        }
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a terminal state.
    pub fn is_final(&self) -> bool {
        matches!(self.kind, StateKind::Final)
    }

    /// This state's identity, for use as a transition target.
    pub fn state_ref(&self) -> StateRef {
        StateRef {
            name: self.name.clone(),
            is_final: self.is_final(),
        }
    }

    /// The entry action, if any.
    pub fn entry(&self) -> Option<&Action> {
        self.entry.as_ref()
    }

    /// The exit action, if any.
    pub fn exit(&self) -> Option<&Action> {
        self.exit.as_ref()
    }

    /// The entry action's display label, if the action exists and has one.
    pub fn entry_label(&self) -> Option<&str> {
        self.entry.as_ref().and_then(|a| a.label())
    }

    /// Outgoing transitions in declaration order. Empty for final states.
    pub fn transitions(&self) -> &[Transition] {
        match &self.kind {
            StateKind::Simple { transitions } => transitions,
            StateKind::Final => &[],
        }
    }

    /// Perform the entry action if present; no-op otherwise.
    pub fn on_entry(&self) {
        if let Some(action) = &self.entry {
            action.perform();
        }
    }

    /// Perform the exit action if present; no-op otherwise.
    pub fn on_exit(&self) {
        if let Some(action) = &self.exit {
            action.perform();
        }
    }

    /// Pure first-match lookup over this state's transitions.
    pub fn resolve(&self, event: &str) -> Option<&Transition> {
        resolve_transition(self.transitions(), event)
    }

    /// Resolve the event; on a match, perform the transition's effect and
    /// return the target identity. `None` means the event is ignored here.
    pub fn execute(&self, event: &str) -> Option<&StateRef> {
        let transition = match self.resolve(event) {
            Some(t) => t,
            None => {
                debug!(state = %self.name, event, "no transition match");
                return None;
            }
        };

        debug!(
            state = %self.name,
            event,
            target = %transition.target().name(),
            "transition match"
        );
        if let Some(effect) = transition.effect() {
            effect.perform();
        }
        Some(transition.target())
    }

    /// Whether this state has a transition guarded by [`FINAL_EVENT`] that
    /// targets a final state. A topology probe; dispatch never calls it.
    pub fn transitions_to_final_state(&self) -> bool {
        self.transitions()
            .iter()
            .any(|t| matches!(t.guard(), Guard::Event(id) if id == FINAL_EVENT) && t.target().is_final())
    }

    /// Append an outgoing transition. Rejected on final states.
    ///
    /// Needed to close cycles: a back-edge can only be built after its
    /// target exists.
    pub fn add_transition(&mut self, transition: Transition) -> Result<(), BuildError> {
        self.add_transitions(vec![transition])
    }

    /// Append outgoing transitions in order. Rejected on final states.
    pub fn add_transitions(&mut self, new: Vec<Transition>) -> Result<(), BuildError> {
        match &mut self.kind {
            StateKind::Simple { transitions } => {
                transitions.extend(new);
                Ok(())
            }
            StateKind::Final => Err(BuildError::FinalStateTransition(self.name.clone())),
        }
    }
}
