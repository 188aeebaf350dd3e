//! End-to-end tests of the controller protocol: loading, stepping,
//! serialization, and trace verification.

use physim::prelude::*;
use serde_json::{Value, json};
use std::cell::Cell;
use std::rc::Rc;

fn controller(dt: Scalar, law: Box<dyn ForceLaw>) -> Controller {
    let simulator = PhysicsSimulator::new(law, dt).unwrap();
    Controller::new(simulator, standard_body_factory())
}

fn drifting_controller(dt: Scalar) -> Controller {
    controller(dt, Box::new(NoForce))
}

fn two_body_load() -> Value {
    json!({"bodies": [
        {"type": "basic", "id": "a", "p": [0.0, 0.0], "v": [0.0, 0.0], "m": 1.0},
        {"type": "basic", "id": "b", "p": [10.0, 0.0], "v": [0.0, 0.0], "m": 1.0},
    ]})
}

fn emitted(out: &[u8]) -> Vec<Value> {
    String::from_utf8(out.to_vec())
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn run_zero_steps_emits_one_record_without_advancing() {
    let mut ctl = drifting_controller(1.0);
    ctl.load_bodies(&two_body_load()).unwrap();

    let mut out = Vec::new();
    ctl.run(0, &mut out, None, None).unwrap();

    let records = emitted(&out);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["time"], json!(0.0));
    assert_eq!(ctl.simulator().elapsed_time(), 0.0);
}

#[test]
fn run_emits_one_record_per_step() {
    let mut ctl = drifting_controller(0.5);
    ctl.load_bodies(&two_body_load()).unwrap();

    let mut out = Vec::new();
    ctl.run(3, &mut out, None, None).unwrap();

    let records = emitted(&out);
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["time"], json!(0.5));
    assert_eq!(records[1]["time"], json!(1.0));
    assert_eq!(records[2]["time"], json!(1.5));

    // Bodies serialize in load order
    assert_eq!(records[0]["bodies"][0]["id"], json!("a"));
    assert_eq!(records[0]["bodies"][1]["id"], json!("b"));
}

#[test]
fn duplicate_id_aborts_the_whole_load() {
    let mut ctl = drifting_controller(1.0);
    let load = json!({"bodies": [
        {"type": "basic", "id": "a", "p": [0.0, 0.0], "v": [0.0, 0.0], "m": 1.0},
        {"type": "basic", "id": "a", "p": [1.0, 0.0], "v": [0.0, 0.0], "m": 2.0},
    ]});

    let err = ctl.load_bodies(&load).unwrap_err();
    assert!(matches!(
        err,
        ControlError::Construction(ConstructionError::DuplicateBodyId(_))
    ));
    assert_eq!(ctl.simulator().body_count(), 0);
}

#[test]
fn decoding_failure_aborts_the_whole_load() {
    let mut ctl = drifting_controller(1.0);
    let load = json!({"bodies": [
        {"type": "basic", "id": "a", "p": [0.0, 0.0], "v": [0.0, 0.0], "m": 1.0},
        {"type": "basic", "id": "b", "p": [1.0, 0.0], "v": [0.0, 0.0]},
    ]});

    let err = ctl.load_bodies(&load).unwrap_err();
    assert!(matches!(err, ControlError::Decoding(_)));
    assert_eq!(ctl.simulator().body_count(), 0);
}

#[test]
fn load_rejects_ids_already_in_the_simulator() {
    let mut ctl = drifting_controller(1.0);
    ctl.load_bodies(&two_body_load()).unwrap();

    let second = json!({"bodies": [
        {"type": "basic", "id": "a", "p": [5.0, 5.0], "v": [0.0, 0.0], "m": 1.0},
    ]});
    assert!(ctl.load_bodies(&second).is_err());
    assert_eq!(ctl.simulator().body_count(), 2);
}

#[test]
fn two_bodies_fall_toward_each_other() {
    let mut ctl = controller(1.0, Box::new(NewtonUniversalGravitation::new(6.67e-11)));
    ctl.load_bodies(&json!({"bodies": [
        {"type": "basic", "id": "a", "p": [0.0, 0.0], "v": [0.0, 0.0], "m": 1.0e10},
        {"type": "basic", "id": "b", "p": [10.0, 0.0], "v": [0.0, 0.0], "m": 1.0e10},
    ]}))
    .unwrap();

    let mut out = Vec::new();
    ctl.run(1, &mut out, None, None).unwrap();

    let records = emitted(&out);
    assert_eq!(records[0]["time"], json!(1.0));
    assert!(records[0]["bodies"][0]["v"][0].as_f64().unwrap() > 0.0);
    assert!(records[0]["bodies"][1]["v"][0].as_f64().unwrap() < 0.0);
}

#[test]
fn decoded_bodies_round_trip_through_the_state_record() {
    let mut ctl = drifting_controller(1.0);
    ctl.load_bodies(&json!({"bodies": [
        {"type": "basic", "id": "a", "p": [1.25, -2.5], "v": [0.5, 0.75], "m": 42.0},
    ]}))
    .unwrap();

    let mut out = Vec::new();
    ctl.run(0, &mut out, None, None).unwrap();

    let records = emitted(&out);
    assert_eq!(records[0]["bodies"][0]["p"], json!([1.25, -2.5]));
    assert_eq!(records[0]["bodies"][0]["v"], json!([0.5, 0.75]));
    assert_eq!(records[0]["bodies"][0]["m"], json!(42.0));
}

#[test]
fn matching_trace_verifies_cleanly() {
    // Record a reference run, then verify an identical run against it
    let mut reference = drifting_controller(1.0);
    reference.load_bodies(&two_body_load()).unwrap();
    let mut out = Vec::new();
    reference.run(3, &mut out, None, None).unwrap();
    let trace = json!({"states": emitted(&out)});

    let mut ctl = drifting_controller(1.0);
    ctl.load_bodies(&two_body_load()).unwrap();
    let mut verified_out = Vec::new();
    ctl.run(3, &mut verified_out, Some(&trace), None).unwrap();
    assert_eq!(emitted(&verified_out).len(), 3);
}

#[test]
fn divergence_at_step_two_stops_the_run_there() {
    let mut reference = drifting_controller(1.0);
    reference.load_bodies(&two_body_load()).unwrap();
    let mut out = Vec::new();
    reference.run(3, &mut out, None, None).unwrap();

    let mut states = emitted(&out);
    states[1]["bodies"][0]["p"] = json!([999.0, 999.0]);
    let trace = json!({"states": states});

    let mut ctl = drifting_controller(1.0);
    ctl.load_bodies(&two_body_load()).unwrap();
    let mut verified_out = Vec::new();
    let err = ctl
        .run(3, &mut verified_out, Some(&trace), None)
        .unwrap_err();

    assert!(matches!(
        err,
        ControlError::Verification(VerificationFailure { step: 2 })
    ));
    // Steps 1 and 2 were emitted before the failure; step 3 never ran
    assert_eq!(emitted(&verified_out).len(), 2);
    assert_eq!(ctl.simulator().elapsed_time(), 2.0);
}

#[test]
fn trace_shorter_than_the_run_fails_at_the_first_missing_step() {
    let mut reference = drifting_controller(1.0);
    reference.load_bodies(&two_body_load()).unwrap();
    let mut out = Vec::new();
    reference.run(2, &mut out, None, None).unwrap();
    let trace = json!({"states": emitted(&out)});

    let mut ctl = drifting_controller(1.0);
    ctl.load_bodies(&two_body_load()).unwrap();
    let mut verified_out = Vec::new();
    let err = ctl
        .run(3, &mut verified_out, Some(&trace), None)
        .unwrap_err();

    assert!(matches!(
        err,
        ControlError::Verification(VerificationFailure { step: 3 })
    ));
}

#[test]
fn mass_losing_bodies_decay_during_a_run() {
    let mut ctl = drifting_controller(1.0);
    ctl.load_bodies(&json!({"bodies": [
        {"type": "mlb", "id": "a", "p": [0.0, 0.0], "v": [0.0, 0.0], "m": 8.0,
         "freq": 2.0, "factor": 0.5},
    ]}))
    .unwrap();

    let mut out = Vec::new();
    ctl.run(4, &mut out, None, None).unwrap();

    let records = emitted(&out);
    assert_eq!(records[1]["bodies"][0]["m"], json!(4.0));
    assert_eq!(records[3]["bodies"][0]["m"], json!(2.0));
}

struct CountingObserver {
    added: Rc<Cell<usize>>,
    advanced: Rc<Cell<usize>>,
    resets: Rc<Cell<usize>>,
}

impl SimulationObserver for CountingObserver {
    fn on_body_added(&mut self, _state: &StepState) {
        self.added.set(self.added.get() + 1);
    }

    fn on_advance(&mut self, state: &StepState) {
        assert!(state.time > 0.0);
        self.advanced.set(self.advanced.get() + 1);
    }

    fn on_reset(&mut self, state: &StepState) {
        assert!(state.bodies.is_empty());
        self.resets.set(self.resets.get() + 1);
    }
}

#[test]
fn observers_see_every_mutating_operation() {
    let added = Rc::new(Cell::new(0));
    let advanced = Rc::new(Cell::new(0));
    let resets = Rc::new(Cell::new(0));

    let mut ctl = drifting_controller(1.0);
    ctl.add_observer(Box::new(CountingObserver {
        added: added.clone(),
        advanced: advanced.clone(),
        resets: resets.clone(),
    }));

    ctl.load_bodies(&two_body_load()).unwrap();
    let mut out = Vec::new();
    ctl.run(3, &mut out, None, None).unwrap();
    ctl.reset();

    assert_eq!(added.get(), 2);
    assert_eq!(advanced.get(), 3);
    assert_eq!(resets.get(), 1);
}
