//! The fixed-step integration engine

use crate::errors::ConstructionError;
use crate::math::Scalar;
use crate::physics::body::Body;
use crate::physics::force_laws::ForceLaw;
use crate::physics::state::StepState;

/// Owns the ordered body list and the active force law
///
/// `dt` is fixed at construction; `elapsed_time` is always
/// `dt * number_of_advance_calls`. Insertion order of bodies is significant
/// only for serialization, not for the physics.
#[derive(Debug)]
pub struct PhysicsSimulator {
    bodies: Vec<Body>,
    force_law: Box<dyn ForceLaw>,
    dt: Scalar,
    elapsed_time: Scalar,
}

impl PhysicsSimulator {
    pub fn new(force_law: Box<dyn ForceLaw>, dt: Scalar) -> Result<Self, ConstructionError> {
        if dt < 0.0 {
            return Err(ConstructionError::NegativeTimestep(dt));
        }
        Ok(Self {
            bodies: Vec::new(),
            force_law,
            dt,
            elapsed_time: 0.0,
        })
    }

    /// Append a body, rejecting duplicate ids
    ///
    /// Bodies added between advances join the timeline from the current
    /// step; they do not retroactively receive earlier steps.
    pub fn add_body(&mut self, body: Body) -> Result<(), ConstructionError> {
        if self.contains(body.id()) {
            return Err(ConstructionError::DuplicateBodyId(body.id().to_string()));
        }
        log::debug!("adding body '{}'", body.id());
        self.bodies.push(body);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.bodies.iter().any(|b| b.id() == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn dt(&self) -> Scalar {
        self.dt
    }

    pub fn elapsed_time(&self) -> Scalar {
        self.elapsed_time
    }

    pub fn force_law_name(&self) -> &str {
        self.force_law.name()
    }

    /// Advance the simulation by one fixed step
    ///
    /// Resets every accumulator, applies the force law once over the whole
    /// list, then moves every body. No body moves before all forces for the
    /// step are accumulated; reordering these phases changes results.
    pub fn advance(&mut self) {
        for body in &mut self.bodies {
            body.reset_force();
        }

        self.force_law.apply(&mut self.bodies);

        for body in &mut self.bodies {
            body.step(self.dt);
        }

        self.elapsed_time += self.dt;
    }

    /// Detached snapshot of the current state, in insertion order
    pub fn state(&self) -> StepState {
        StepState {
            time: self.elapsed_time,
            bodies: self.bodies.iter().map(Body::state).collect(),
        }
    }

    /// Drop all bodies and rewind the clock to zero
    pub fn reset(&mut self) {
        log::debug!("resetting simulator");
        self.bodies.clear();
        self.elapsed_time = 0.0;
    }
}
