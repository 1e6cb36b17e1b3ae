//! Stately: an embeddable event-driven finite state machine library
//!
//! Stately machines are assembled from named states connected by guarded,
//! event-driven transitions, then driven by feeding events one at a time.
//! Dispatch is synchronous: each event runs to completion, including all
//! entry/exit and transition side effects, before the next is accepted.
//!
//! # Core Concepts
//!
//! - **State**: a named node with optional entry/exit actions and an
//!   ordered list of outgoing transitions (first match wins)
//! - **Guard**: the event identifier a transition requires, or a wildcard
//!   that matches every event
//! - **Active state**: the single state dispatch is relative to; its name
//!   is the machine's externally visible configuration
//!
//! # Example
//!
//! ```rust
//! use stately::{event_transition, StateBuilder, StateMachine};
//!
//! let archived = StateBuilder::new("Archived").build();
//! let published = StateBuilder::new("Published")
//!     .add_transition(event_transition("Retire", &archived))
//!     .build();
//! let draft = StateBuilder::new("Draft")
//!     .add_transition(event_transition("Publish", &published))
//!     .build();
//!
//! let mut machine = StateMachine::new("Document");
//! machine.add_states(vec![draft, published, archived])?;
//! machine.set_active_state("Draft")?;
//!
//! machine.execute("Publish")?;
//! assert_eq!(machine.configuration()?, "Published");
//!
//! // An event with no matching transition is ignored, not an error.
//! machine.execute("Publish")?;
//! assert_eq!(machine.configuration()?, "Published");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod core;
mod dot;
pub mod machine;
pub mod snapshot;

// Re-export commonly used types
pub use crate::builder::{
    event_transition, unguarded_transition, BuildError, StateBuilder, TransitionBuilder,
};
pub use crate::core::{resolve_transition, Action, Guard, State, StateRef, Transition, FINAL_EVENT};
pub use crate::machine::{Dispatch, MachineError, StateMachine};
pub use crate::snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
