//! Phone Line State Machine
//!
//! This example demonstrates a complete event-driven machine:
//!
//! Key concepts:
//! - Guarded transitions with side effects
//! - Entry actions on states
//! - Cycles (hanging up always returns to OffHook)
//! - A terminal state with no way out
//! - DOT graph export for visualization
//!
//! Run with: cargo run --example phone

use stately::{Action, StateBuilder, StateMachine, TransitionBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Phone Line State Machine ===\n");

    let mut off_hook = StateBuilder::new("OffHook")
        .on_entry(Action::labeled("StartDialtone", || println!("  * dialtone hums")))
        .build();
    let phone_destroyed = StateBuilder::new("PhoneDestroyed").build();
    let mut connected = StateBuilder::new("Connected").build();
    let on_hold = StateBuilder::new("OnHold")
        .transition(
            TransitionBuilder::new()
                .named("HurlPhone")
                .guarded_by("PhoneHurledAgainstWall")
                .to(&phone_destroyed),
        )?
        .transition(
            TransitionBuilder::new()
                .named("HangUp")
                .guarded_by("HungUp")
                .to(&off_hook),
        )?
        .transition(
            TransitionBuilder::new()
                .named("TakeOffHold")
                .effect(Action::labeled("StopMuzak", || println!("  * muzak stops")))
                .guarded_by("TookOffHold")
                .to(&connected),
        )?
        .build();
    connected.add_transitions(vec![
        TransitionBuilder::new()
            .named("PlaceOnHold")
            .effect(Action::labeled("PlayMuzak", || println!("  * muzak plays")))
            .guarded_by("PlacedOnHold")
            .to(&on_hold)
            .build()?,
        TransitionBuilder::new()
            .named("HangUp")
            .guarded_by("HungUp")
            .to(&off_hook)
            .build()?,
    ])?;
    let ringing = StateBuilder::new("Ringing")
        .transition(
            TransitionBuilder::new()
                .named("ConnectCall")
                .guarded_by("CallConnected")
                .to(&connected),
        )?
        .transition(
            TransitionBuilder::new()
                .named("HangUp")
                .guarded_by("HungUp")
                .to(&off_hook),
        )?
        .build();
    off_hook.add_transition(
        TransitionBuilder::new()
            .named("CallDial")
            .guarded_by("CallDialed")
            .to(&ringing)
            .build()?,
    )?;

    let mut phone = StateMachine::new("PhoneStateMachine");
    phone.add_states(vec![off_hook, phone_destroyed, on_hold, connected, ringing])?;
    phone.set_active_state("OffHook")?;
    phone.validate()?;

    println!("Initial configuration: {}\n", phone.configuration()?);

    for event in [
        "CallDialed",
        "CallConnected",
        "PlacedOnHold",
        "TookOffHold",
        "PlacedOnHold",
        "PhoneHurledAgainstWall",
        "CallDialed", // ignored: the phone is gone
    ] {
        let outcome = phone.execute(event)?;
        println!("{event:>24} -> {:?} (now {})", outcome, phone.configuration()?);
    }

    println!("\nGraph in DOT format:\n");
    println!("{}", phone.to_dot(true)?);

    println!("=== Example Complete ===");
    Ok(())
}
