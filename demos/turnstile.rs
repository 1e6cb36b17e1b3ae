//! Turnstile State Machine
//!
//! This example demonstrates a minimal cyclic machine and configuration
//! persistence.
//!
//! Key concepts:
//! - Two states in a cycle (Locked <-> Unlocked)
//! - Ignored events (pushing a locked turnstile does nothing)
//! - Snapshot round-trip to restore a configuration silently
//!
//! Run with: cargo run --example turnstile

use stately::{event_transition, Snapshot, StateBuilder, StateMachine};

fn build_turnstile() -> Result<StateMachine, Box<dyn std::error::Error>> {
    let mut unlocked = StateBuilder::new("Unlocked").build();
    let locked = StateBuilder::new("Locked")
        .add_transition(event_transition("Coin", &unlocked))
        .build();
    let relock = event_transition("Push", &locked);
    unlocked.add_transition(relock)?;

    let mut turnstile = StateMachine::new("Turnstile");
    turnstile.add_states(vec![locked, unlocked])?;
    Ok(turnstile)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Turnstile State Machine ===\n");

    let mut turnstile = build_turnstile()?;
    turnstile.set_active_state("Locked")?;

    for event in ["Push", "Coin", "Coin", "Push"] {
        let outcome = turnstile.execute(event)?;
        println!(
            "{event:>6} -> {outcome:?} (now {})",
            turnstile.configuration()?
        );
    }

    // Persist the configuration and bring up a fresh machine in the same
    // place, without replaying any side effects.
    let saved = turnstile.snapshot()?.to_json()?;
    println!("\nSaved configuration: {saved}");

    let mut restored = build_turnstile()?;
    restored.restore_snapshot(&Snapshot::from_json(&saved)?)?;
    println!("Restored machine is {}", restored.configuration()?);

    println!("\n=== Example Complete ===");
    Ok(())
}
