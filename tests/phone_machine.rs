//! Scenario tests driving a complete phone-line machine.
//!
//! States and transitions:
//!
//! state OffHook:   CallDialed            >> Ringing
//! state Ringing:   CallConnected         >> Connected
//!                  HungUp                >> OffHook
//! state Connected: PlacedOnHold          >> OnHold   (plays muzak)
//!                  HungUp                >> OffHook
//!                  MessageLeft           >> OffHook
//! state OnHold:    PhoneHurledAgainstWall >> PhoneDestroyed
//!                  HungUp                >> OffHook
//!                  TookOffHold           >> Connected (stops muzak)
//! state PhoneDestroyed (no way back)

use std::sync::{Arc, Mutex};

use stately::{
    Action, Dispatch, State, StateBuilder, StateMachine, TransitionBuilder, FINAL_EVENT,
};

// State names
const OFF_HOOK: &str = "OffHook";
const RINGING: &str = "Ringing";
const CONNECTED: &str = "Connected";
const ON_HOLD: &str = "OnHold";
const PHONE_DESTROYED: &str = "PhoneDestroyed";

// Event names
const CALL_DIALED: &str = "CallDialed";
const HUNG_UP: &str = "HungUp";
const CALL_CONNECTED: &str = "CallConnected";
const MESSAGE_LEFT: &str = "MessageLeft";
const PLACED_ON_HOLD: &str = "PlacedOnHold";
const TOOK_OFF_HOLD: &str = "TookOffHold";
const PHONE_HURLED_AGAINST_WALL: &str = "PhoneHurledAgainstWall";

type Journal = Arc<Mutex<Vec<String>>>;

fn recording(journal: &Journal, label: &str) -> Action {
    let journal = Arc::clone(journal);
    let entry = label.to_string();
    Action::labeled(label, move || journal.lock().unwrap().push(entry.clone()))
}

fn phone_machine() -> (StateMachine, Journal) {
    let journal: Journal = Arc::new(Mutex::new(Vec::new()));

    let mut off_hook = StateBuilder::new(OFF_HOOK)
        .on_entry(recording(&journal, "StartDialtone"))
        .build();
    let phone_destroyed = StateBuilder::new(PHONE_DESTROYED).build();
    let mut connected = StateBuilder::new(CONNECTED).build();
    let on_hold = StateBuilder::new(ON_HOLD)
        .transition(
            TransitionBuilder::new()
                .named("HurlPhone")
                .guarded_by(PHONE_HURLED_AGAINST_WALL)
                .to(&phone_destroyed),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .named("HangUp")
                .guarded_by(HUNG_UP)
                .to(&off_hook),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .named("TakeOffHold")
                .effect(recording(&journal, "StopMuzak"))
                .guarded_by(TOOK_OFF_HOLD)
                .to(&connected),
        )
        .unwrap()
        .build();
    connected
        .add_transitions(vec![
            TransitionBuilder::new()
                .named("PlaceOnHold")
                .effect(recording(&journal, "PlayMuzak"))
                .guarded_by(PLACED_ON_HOLD)
                .to(&on_hold)
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .named("HangUp")
                .guarded_by(HUNG_UP)
                .to(&off_hook)
                .build()
                .unwrap(),
            TransitionBuilder::new()
                .named("LeaveMessage")
                .guarded_by(MESSAGE_LEFT)
                .to(&off_hook)
                .build()
                .unwrap(),
        ])
        .unwrap();
    let ringing = StateBuilder::new(RINGING)
        .transition(
            TransitionBuilder::new()
                .named("ConnectCall")
                .guarded_by(CALL_CONNECTED)
                .to(&connected),
        )
        .unwrap()
        .transition(
            TransitionBuilder::new()
                .named("HangUp")
                .guarded_by(HUNG_UP)
                .to(&off_hook),
        )
        .unwrap()
        .build();
    off_hook
        .add_transitions(vec![TransitionBuilder::new()
            .named("CallDial")
            .guarded_by(CALL_DIALED)
            .to(&ringing)
            .build()
            .unwrap()])
        .unwrap();

    let mut machine = StateMachine::new("PhoneStateMachine");
    machine
        .add_states(vec![off_hook, phone_destroyed, on_hold, connected, ringing])
        .unwrap();
    machine.set_active_state(OFF_HOOK).unwrap();
    machine.validate().unwrap();

    (machine, journal)
}

#[test]
fn one_transition() {
    let (mut phone, _journal) = phone_machine();

    phone.execute(CALL_DIALED).unwrap();

    assert_eq!(phone.configuration().unwrap(), RINGING);
}

#[test]
fn no_transition() {
    let (mut phone, _journal) = phone_machine();

    let outcome = phone.execute(HUNG_UP).unwrap();

    assert_eq!(outcome, Dispatch::Ignored);
    assert_eq!(phone.configuration().unwrap(), OFF_HOOK);
}

#[test]
fn to_state_phone_destroyed() {
    let (mut phone, _journal) = phone_machine();

    phone.execute(CALL_DIALED).unwrap();
    phone.execute(CALL_CONNECTED).unwrap();
    phone.execute(PLACED_ON_HOLD).unwrap();
    phone.execute(PHONE_HURLED_AGAINST_WALL).unwrap();

    assert_eq!(phone.configuration().unwrap(), PHONE_DESTROYED);

    // Nothing ever leaves the wreckage.
    for event in [CALL_DIALED, HUNG_UP, TOOK_OFF_HOLD] {
        assert_eq!(phone.execute(event).unwrap(), Dispatch::Ignored);
        assert_eq!(phone.configuration().unwrap(), PHONE_DESTROYED);
    }
}

#[test]
fn transition_back_to_same_state() {
    let (mut phone, _journal) = phone_machine();

    phone.execute(CALL_DIALED).unwrap();
    phone.execute(HUNG_UP).unwrap();

    assert_eq!(phone.configuration().unwrap(), OFF_HOOK);
}

#[test]
fn start_with_ringing_active_state() {
    let (mut phone, _journal) = phone_machine();
    phone.restore_configuration(RINGING).unwrap();

    phone.execute(CALL_CONNECTED).unwrap();

    assert_eq!(phone.configuration().unwrap(), CONNECTED);
}

#[test]
fn through_all_states_using_all_transitions() {
    let (mut phone, _journal) = phone_machine();

    phone.execute(CALL_DIALED).unwrap();
    phone.execute(HUNG_UP).unwrap();
    assert_eq!(phone.configuration().unwrap(), OFF_HOOK);

    phone.execute(CALL_DIALED).unwrap();
    phone.execute(CALL_CONNECTED).unwrap();
    phone.execute(HUNG_UP).unwrap();
    assert_eq!(phone.configuration().unwrap(), OFF_HOOK);

    phone.execute(CALL_DIALED).unwrap();
    phone.execute(CALL_CONNECTED).unwrap();
    phone.execute(MESSAGE_LEFT).unwrap();
    assert_eq!(phone.configuration().unwrap(), OFF_HOOK);

    phone.execute(CALL_DIALED).unwrap();
    phone.execute(CALL_CONNECTED).unwrap();
    phone.execute(PLACED_ON_HOLD).unwrap();
    phone.execute(PHONE_HURLED_AGAINST_WALL).unwrap();

    assert_eq!(phone.configuration().unwrap(), PHONE_DESTROYED);
}

#[test]
fn transitions_from_on_hold_state() {
    let (mut phone, _journal) = phone_machine();
    phone.restore_configuration(ON_HOLD).unwrap();

    phone.execute(TOOK_OFF_HOLD).unwrap();
    assert_eq!(phone.configuration().unwrap(), CONNECTED);

    phone.restore_configuration(ON_HOLD).unwrap();
    phone.execute(HUNG_UP).unwrap();

    assert_eq!(phone.configuration().unwrap(), OFF_HOOK);
}

#[test]
fn muzak_plays_on_hold_and_stops_after() {
    let (mut phone, journal) = phone_machine();

    phone.execute(CALL_DIALED).unwrap();
    phone.execute(CALL_CONNECTED).unwrap();
    phone.execute(PLACED_ON_HOLD).unwrap();
    phone.execute(TOOK_OFF_HOLD).unwrap();

    let journal = journal.lock().unwrap();
    let muzak: Vec<&str> = journal
        .iter()
        .filter(|entry| entry.contains("Muzak"))
        .map(String::as_str)
        .collect();
    assert_eq!(muzak, vec!["PlayMuzak", "StopMuzak"]);
}

#[test]
fn initial_state_entry_fires_once_at_assembly() {
    let (_phone, journal) = phone_machine();

    assert_eq!(*journal.lock().unwrap(), vec!["StartDialtone".to_string()]);
}

#[test]
fn restoring_a_configuration_is_silent() {
    let (mut phone, journal) = phone_machine();
    journal.lock().unwrap().clear();

    phone.restore_configuration(CONNECTED).unwrap();

    assert_eq!(phone.configuration().unwrap(), CONNECTED);
    assert!(journal.lock().unwrap().is_empty());
}

#[test]
fn dot_export_describes_the_graph() {
    let (phone, _journal) = phone_machine();

    let dot = phone.to_dot(true).unwrap();

    assert!(dot.starts_with("digraph PhoneStateMachine { \n"));
    assert!(dot.contains("OffHook[label=\"OffHook\\nEntry:StartDialtone\", style=filled, fillcolor=lightblue];\n"));
    assert!(dot.contains("OffHook -> Ringing [label=\"CallDial\"];\n"));
    assert!(dot.contains("OnHold -> PhoneDestroyed [label=\"HurlPhone\"];\n"));
    assert!(dot.contains("Connected -> OnHold [label=\"PlaceOnHold\"];\n"));
    assert!(dot.ends_with("} \n"));
}

#[test]
fn final_event_reaches_final_state() {
    let done = State::final_state("Closed");
    let line = StateBuilder::new("Open")
        .transition(
            TransitionBuilder::new()
                .named("Final")
                .guarded_by(FINAL_EVENT)
                .to(&done),
        )
        .unwrap()
        .build();

    assert!(line.transitions_to_final_state());

    let mut machine = StateMachine::new("Lifecycle");
    machine.add_states(vec![line, done]).unwrap();
    machine.set_active_state("Open").unwrap();

    machine.execute(FINAL_EVENT).unwrap();
    assert_eq!(machine.configuration().unwrap(), "Closed");

    // A final state has no outgoing transitions; everything is ignored.
    assert_eq!(machine.execute(FINAL_EVENT).unwrap(), Dispatch::Ignored);
    assert_eq!(machine.execute("Reopen").unwrap(), Dispatch::Ignored);
    assert_eq!(machine.configuration().unwrap(), "Closed");
}
