//! Side-effect actions for state hooks and transitions.
//!
//! Actions are the only place a machine performs side effects. The engine
//! itself does no I/O; it invokes caller-supplied actions at well-defined
//! points: state entry, state exit, and taken transitions.

use std::fmt;

/// A zero-argument side-effecting operation with an optional display label.
///
/// The label is carried for diagnostics and graph export only; it plays no
/// part in dispatch. Operations must be `Send + Sync` so machines can be
/// handed between threads (dispatch itself is single-threaded).
///
/// # Example
///
/// ```rust
/// use stately::Action;
///
/// let greet = Action::new(|| println!("hello"));
/// greet.perform();
/// assert!(greet.label().is_none());
///
/// let muzak = Action::labeled("PlayMuzak", || println!("la la la"));
/// assert_eq!(muzak.label(), Some("PlayMuzak"));
/// ```
pub struct Action {
    operation: Box<dyn Fn() + Send + Sync>,
    label: Option<String>,
}

impl Action {
    /// Create an unlabeled action from a closure.
    pub fn new<F>(operation: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Action {
            operation: Box::new(operation),
            label: None,
        }
    }

    /// Create an action with a human-readable label.
    ///
    /// Labels show up in graph export as `Entry:<label>` annotations.
    pub fn labeled<F>(label: impl Into<String>, operation: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Action {
            operation: Box::new(operation),
            label: Some(label.into()),
        }
    }

    /// The display label, if one was given.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Run the operation.
    pub fn perform(&self) {
        (self.operation)()
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}
