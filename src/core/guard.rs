//! Guards controlling which events a transition matches.
//!
//! A guard is compared against each incoming event identifier during
//! transition resolution. Matching is pure; no side effects.

/// The event predicate of a transition.
///
/// `Event` matches exactly one event identifier by equality. `Any` is the
/// wildcard used by the single-transition convenience form: it matches
/// every event, so a state whose only transition is unguarded always
/// leaves on the next event.
///
/// # Example
///
/// ```rust
/// use stately::Guard;
///
/// let guard = Guard::event("CallDialed");
/// assert!(guard.matches("CallDialed"));
/// assert!(!guard.matches("HungUp"));
///
/// assert!(Guard::Any.matches("anything at all"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Matches every event.
    Any,
    /// Matches events equal to the identifier.
    Event(String),
}

impl Guard {
    /// Guard on a single event identifier.
    pub fn event(id: impl Into<String>) -> Self {
        Guard::Event(id.into())
    }

    /// Whether the incoming event satisfies this guard.
    pub fn matches(&self, event: &str) -> bool {
        match self {
            Guard::Any => true,
            Guard::Event(id) => id == event,
        }
    }
}
