//! The state machine engine: registered states, one active state, and
//! synchronous event dispatch.
//!
//! The engine performs no I/O of its own. All side effects are delegated
//! to caller-supplied entry/exit/transition actions, and each `execute`
//! call runs to completion before the next event is accepted.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::builder::BuildError;
use crate::core::State;

/// Errors raised by engine operations. Fatal to the call, not to the
/// machine: a failed call leaves the active state unchanged.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error("No active state")]
    NoActiveState,

    #[error("No state named '{0}' is registered. Add all states to the machine before selecting one")]
    UnknownState(String),
}

/// Outcome of a single dispatch.
///
/// `Ignored` is the normal no-match outcome, not an error: the event had
/// no matching transition in the active state and the machine is
/// untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A transition was taken.
    Transitioned { from: String, to: String },
    /// No transition matched; the machine is unchanged.
    Ignored,
}

/// An event-driven state machine.
///
/// A machine starts uninitialized: states may be registered, but dispatch
/// and configuration queries fail with [`MachineError::NoActiveState`]
/// until an active state is set. Once ready, every `execute` resolves the
/// active state's first matching transition and, when one is found, runs
/// the transition effect, the outgoing state's exit action, and the new
/// state's entry action, in that order, around the active-state swap.
///
/// # Example
///
/// ```rust
/// use stately::{event_transition, StateBuilder, StateMachine};
///
/// let mut on = StateBuilder::new("On").build();
/// let off = StateBuilder::new("Off")
///     .add_transition(event_transition("PowerPressed", &on))
///     .build();
/// // Close the cycle after both states exist.
/// let back_to_off = event_transition("PowerPressed", &off);
/// on.add_transition(back_to_off)?;
///
/// let mut machine = StateMachine::new("Switch");
/// machine.add_states(vec![off, on])?;
/// machine.set_active_state("Off")?;
///
/// machine.execute("PowerPressed")?;
/// assert_eq!(machine.configuration()?, "On");
/// machine.execute("PowerPressed")?;
/// assert_eq!(machine.configuration()?, "Off");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct StateMachine {
    name: String,
    states: Vec<State>,
    active: Option<usize>,
}

impl StateMachine {
    /// Create an empty, uninitialized machine.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            states: Vec::new(),
            active: None,
        }
    }

    /// The machine's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All registered states, in registration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The active state, if one has been set.
    pub fn active_state(&self) -> Option<&State> {
        self.active.map(|index| &self.states[index])
    }

    /// Register states. Names must be unique: a duplicate, against the
    /// already-registered set or within the batch, fails the whole batch
    /// and registers nothing.
    pub fn add_states(&mut self, states: Vec<State>) -> Result<(), BuildError> {
        let mut batch = HashSet::new();
        for state in &states {
            if self.index_of(state.name()).is_some() || !batch.insert(state.name()) {
                return Err(BuildError::DuplicateState(state.name().to_string()));
            }
        }
        self.states.extend(states);
        Ok(())
    }

    /// Set the initial active state by name and perform its entry action.
    ///
    /// This is the assembly-time initializer. To restore a persisted
    /// configuration without re-running side effects, use
    /// [`restore_configuration`](Self::restore_configuration) instead.
    pub fn set_active_state(&mut self, name: &str) -> Result<(), MachineError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| MachineError::UnknownState(name.to_string()))?;

        self.active = Some(index);
        self.states[index].on_entry();
        Ok(())
    }

    /// Confirm the machine is ready to dispatch events.
    pub fn validate(&self) -> Result<(), MachineError> {
        if self.active.is_none() {
            return Err(MachineError::NoActiveState);
        }
        Ok(())
    }

    /// The active state's name: the machine's externally visible
    /// configuration, suitable for persistence and comparison.
    pub fn configuration(&self) -> Result<&str, MachineError> {
        self.active
            .map(|index| self.states[index].name())
            .ok_or(MachineError::NoActiveState)
    }

    /// Set the active state by name WITHOUT performing entry or exit
    /// actions.
    ///
    /// This is the restore path for configurations persisted with
    /// [`configuration`](Self::configuration): side effects already
    /// happened in the run that was persisted and must not fire again.
    /// Fails, leaving the active state untouched, if no such state is
    /// registered.
    pub fn restore_configuration(&mut self, name: &str) -> Result<(), MachineError> {
        let index = self
            .index_of(name)
            .ok_or_else(|| MachineError::UnknownState(name.to_string()))?;

        self.active = Some(index);
        debug!(machine = %self.name, state = name, "active state configuration restored");
        Ok(())
    }

    /// Dispatch one event against the active state.
    ///
    /// If no transition matches, returns [`Dispatch::Ignored`] and the
    /// machine is fully inert: no hook or effect runs. If a transition
    /// matches, its target is resolved against the registered set, then
    /// the transition effect, the outgoing state's exit action, the
    /// active-state swap, and the new state's entry action run in that
    /// exact order. A matched target that was never registered is a
    /// configuration defect and fails before any side effect runs.
    pub fn execute(&mut self, event: &str) -> Result<Dispatch, MachineError> {
        let active = self.active.ok_or(MachineError::NoActiveState)?;
        debug!(
            machine = %self.name,
            state = %self.states[active].name(),
            event,
            "dispatching event"
        );

        let Some(transition) = self.states[active].resolve(event) else {
            debug!(
                machine = %self.name,
                state = %self.states[active].name(),
                event,
                "no transition match"
            );
            return Ok(Dispatch::Ignored);
        };

        let target_name = transition.target().name();
        let target = self
            .index_of(target_name)
            .ok_or_else(|| MachineError::UnknownState(target_name.to_string()))?;

        if let Some(effect) = transition.effect() {
            effect.perform();
        }
        let from = self.states[active].name().to_string();
        let to = self.states[target].name().to_string();

        self.states[active].on_exit();
        self.active = Some(target);
        self.states[target].on_entry();

        debug!(machine = %self.name, %from, %to, "transition taken");
        Ok(Dispatch::Transitioned { from, to })
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.states.iter().position(|state| state.name() == name)
    }
}
