//! Step-driven orchestration of a simulation run
//!
//! The controller owns the simulator, feeds it bodies decoded through the
//! factory, drives the integration loop, serializes each step to an output
//! sink, and optionally verifies every step against an expected trace.

use crate::control::comparator::{EpsilonComparator, StateComparator};
use crate::errors::{ConstructionError, ControlError, DecodingError, VerificationFailure};
use crate::factories::Factory;
use crate::physics::body::Body;
use crate::physics::simulator::PhysicsSimulator;
use crate::physics::state::StepState;
use serde_json::Value;
use std::collections::HashSet;
use std::io::Write;

/// Narrow event contract for external presentation layers
///
/// Callbacks run synchronously after each mutating operation with a fresh
/// snapshot. Default implementations ignore everything, so observers only
/// implement what they care about.
pub trait SimulationObserver {
    fn on_body_added(&mut self, _state: &StepState) {}
    fn on_advance(&mut self, _state: &StepState) {}
    fn on_reset(&mut self, _state: &StepState) {}
}

/// Drives the simulator through load / run / reset
pub struct Controller {
    simulator: PhysicsSimulator,
    body_factory: Factory<Body>,
    observers: Vec<Box<dyn SimulationObserver>>,
}

impl Controller {
    pub fn new(simulator: PhysicsSimulator, body_factory: Factory<Body>) -> Self {
        Self {
            simulator,
            body_factory,
            observers: Vec::new(),
        }
    }

    pub fn simulator(&self) -> &PhysicsSimulator {
        &self.simulator
    }

    pub fn add_observer(&mut self, observer: Box<dyn SimulationObserver>) {
        self.observers.push(observer);
    }

    /// Decode `{"bodies": [...]}` and add every body to the simulator
    ///
    /// The whole batch is decoded and id-checked before anything is added,
    /// so a decoding or duplicate-id failure leaves the simulator exactly
    /// as it was.
    pub fn load_bodies(&mut self, record: &Value) -> Result<usize, ControlError> {
        let declarations = record
            .get("bodies")
            .and_then(Value::as_array)
            .ok_or_else(|| DecodingError::mistyped("load", "bodies", "an array of body records"))?;

        let mut batch = Vec::with_capacity(declarations.len());
        for declaration in declarations {
            batch.push(self.body_factory.create(declaration)?);
        }

        let mut ids = HashSet::new();
        for body in &batch {
            if self.simulator.contains(body.id()) || !ids.insert(body.id().to_string()) {
                return Err(ConstructionError::DuplicateBodyId(body.id().to_string()).into());
            }
        }

        let count = batch.len();
        for body in batch {
            self.simulator.add_body(body)?;
            let state = self.simulator.state();
            for observer in &mut self.observers {
                observer.on_body_added(&state);
            }
        }

        log::info!("loaded {count} bodies");
        Ok(count)
    }

    /// Advance `steps` times, emitting one serialized snapshot per step
    ///
    /// With `steps == 0` a single snapshot of the current state is emitted
    /// and nothing advances. When an expected trace (`{"states": [...]}`)
    /// is supplied, each emitted step is compared positionally against it;
    /// the first mismatch aborts with a [`VerificationFailure`] carrying the
    /// 1-based step index. Output already written stays written.
    pub fn run(
        &mut self,
        steps: usize,
        out: &mut dyn Write,
        expected: Option<&Value>,
        comparator: Option<&dyn StateComparator>,
    ) -> Result<(), ControlError> {
        if steps == 0 {
            let state = self.simulator.state();
            writeln!(out, "{}", serde_json::to_string(&state)?)?;
            return Ok(());
        }

        let expected_states = match expected {
            Some(trace) => Some(trace.get("states").and_then(Value::as_array).ok_or_else(
                || DecodingError::mistyped("trace", "states", "an array of state records"),
            )?),
            None => None,
        };

        let default_comparator = EpsilonComparator::default();
        let comparator = comparator.unwrap_or(&default_comparator);

        for step in 1..=steps {
            self.simulator.advance();
            let state = self.simulator.state();

            for observer in &mut self.observers {
                observer.on_advance(&state);
            }
            writeln!(out, "{}", serde_json::to_string(&state)?)?;

            if let Some(states) = expected_states {
                let matched = states
                    .get(step - 1)
                    .is_some_and(|record| comparator.equal(&state, record));
                if !matched {
                    log::warn!("trace verification failed at step {step}");
                    return Err(VerificationFailure { step }.into());
                }
            }
        }

        log::debug!("run finished, elapsed time {}", self.simulator.elapsed_time());
        Ok(())
    }

    /// Clear the simulator and notify observers
    pub fn reset(&mut self) {
        self.simulator.reset();
        let state = self.simulator.state();
        for observer in &mut self.observers {
            observer.on_reset(&state);
        }
    }
}
