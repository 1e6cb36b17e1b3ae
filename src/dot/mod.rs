//! DOT graph description language export.
//!
//! Renders the state/transition graph for visualization with Graphviz.
//! The export is read-only: it walks the registered states and their
//! transitions through accessors and never mutates the machine.
//!
//! Node and digraph identifiers collapse whitespace runs to a single `_`
//! so the textual format stays well-formed; node labels carry the raw
//! state name, annotated with `Entry:<label>` when the entry action has
//! one.

use crate::core::State;
use crate::machine::{MachineError, StateMachine};

impl StateMachine {
    /// Render the machine as a DOT digraph.
    ///
    /// The active state's node is emitted first and, when `show_active` is
    /// set, filled lightblue. Requires an active state.
    pub fn to_dot(&self, show_active: bool) -> Result<String, MachineError> {
        let active = self.active_state().ok_or(MachineError::NoActiveState)?;

        let mut out = String::new();
        out.push_str("digraph ");
        out.push_str(&node_id(self.name()));
        out.push_str(" { \n");

        write_node(&mut out, active, show_active);
        write_edges(&mut out, active);

        for state in self.states().iter().filter(|s| s.name() != active.name()) {
            write_node(&mut out, state, false);
            write_edges(&mut out, state);
        }

        out.push_str("} \n");
        Ok(out)
    }
}

fn node_id(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}

fn write_node(out: &mut String, state: &State, highlight: bool) {
    out.push_str(&node_id(state.name()));
    out.push_str("[label=\"");
    out.push_str(state.name());
    if let Some(label) = state.entry_label() {
        out.push_str("\\nEntry:");
        out.push_str(label);
    }
    out.push('"');
    if highlight {
        out.push_str(", style=filled, fillcolor=lightblue");
    }
    out.push_str("];\n");
}

fn write_edges(out: &mut String, state: &State) {
    for transition in state.transitions() {
        out.push_str(&node_id(state.name()));
        out.push_str(" -> ");
        out.push_str(&node_id(transition.target().name()));
        if let Some(name) = transition.name() {
            out.push_str(" [label=\"");
            out.push_str(name);
            out.push_str("\"];");
        }
        out.push('\n');
    }
}
