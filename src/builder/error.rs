//! Build errors for state and transition assembly.

use thiserror::Error;

/// Errors raised while assembling a machine. All are fatal to assembly:
/// a failed build must never produce a partially usable value.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition target not specified. Call .to(state) before .build()")]
    MissingTarget,

    #[error("Transition guard not specified. Call .guarded_by(event) or .on_any_event() before .build()")]
    MissingGuard,

    #[error("A state named '{0}' is already registered")]
    DuplicateState(String),

    #[error("Final state '{0}' cannot have outgoing transitions")]
    FinalStateTransition(String),
}
