//! Simulation bodies and per-variant evolution hooks

use crate::errors::ConstructionError;
use crate::math::{Scalar, Vec2};
use crate::physics::state::BodyState;
use std::fmt;

/// Hook run after a body's kinematic update each step
///
/// Variants use this to evolve internal properties (a decaying mass, for
/// example) as a function of accumulated simulated time. New variants are
/// added by registering a new factory builder; neither `Body` nor the
/// simulator needs to know their names.
pub trait EvolutionHook: Send + Sync + fmt::Debug {
    fn after_move(&mut self, body: &mut Body, dt: Scalar);
}

/// A point mass with identity, kinematic state, and an accumulated force
#[derive(Debug)]
pub struct Body {
    id: String,
    position: Vec2,
    velocity: Vec2,
    force: Vec2,
    mass: Scalar,
    evolution: Option<Box<dyn EvolutionHook>>,
}

impl Body {
    /// Construct a body, validating its invariants
    ///
    /// The id must be non-empty and the mass strictly positive.
    pub fn new(
        id: impl Into<String>,
        position: Vec2,
        velocity: Vec2,
        mass: Scalar,
    ) -> Result<Self, ConstructionError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConstructionError::EmptyBodyId);
        }
        if !(mass > 0.0) {
            return Err(ConstructionError::NonPositiveMass { id, mass });
        }
        Ok(Self {
            id,
            position,
            velocity,
            force: Vec2::ZERO,
            mass,
            evolution: None,
        })
    }

    /// Attach a per-variant evolution hook
    pub fn with_evolution(mut self, hook: Box<dyn EvolutionHook>) -> Self {
        self.evolution = Some(hook);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn mass(&self) -> Scalar {
        self.mass
    }

    pub fn force(&self) -> Vec2 {
        self.force
    }

    /// Overwrite the mass; callers must keep it strictly positive
    pub fn set_mass(&mut self, mass: Scalar) {
        debug_assert!(mass > 0.0);
        self.mass = mass;
    }

    /// Zero the accumulated force; called once per step before any law runs
    pub fn reset_force(&mut self) {
        self.force = Vec2::ZERO;
    }

    /// Accumulate a force contribution for the current step
    pub fn add_force(&mut self, f: Vec2) {
        self.force += f;
    }

    /// Advance kinematics by one step of semi-implicit Euler
    ///
    /// The velocity is updated first and the position then uses the updated
    /// velocity; reordering the two changes numerical results. Afterwards
    /// the evolution hook, when present, gets to adjust internal state.
    pub fn step(&mut self, dt: Scalar) {
        let acceleration = self.force * (1.0 / self.mass);
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;

        // Take the hook out so it can borrow the body mutably
        if let Some(mut hook) = self.evolution.take() {
            hook.after_move(self, dt);
            self.evolution = Some(hook);
        }
    }

    /// Detached snapshot of this body
    pub fn state(&self) -> BodyState {
        BodyState {
            id: self.id.clone(),
            p: self.position,
            v: self.velocity,
            m: self.mass,
        }
    }
}

/// Scales a body's mass by `factor` every `freq` units of simulated time
#[derive(Debug, Clone)]
pub struct PeriodicMassLoss {
    freq: Scalar,
    factor: Scalar,
    counter: Scalar,
}

impl PeriodicMassLoss {
    /// `freq` must be positive and `factor` in (0, 1] so the mass invariant
    /// survives every application.
    pub fn new(freq: Scalar, factor: Scalar) -> Result<Self, ConstructionError> {
        if !(freq > 0.0) {
            return Err(ConstructionError::InvalidParameter {
                name: "freq",
                value: freq,
            });
        }
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConstructionError::InvalidParameter {
                name: "factor",
                value: factor,
            });
        }
        Ok(Self {
            freq,
            factor,
            counter: 0.0,
        })
    }
}

impl EvolutionHook for PeriodicMassLoss {
    fn after_move(&mut self, body: &mut Body, dt: Scalar) {
        self.counter += dt;
        while self.counter >= self.freq {
            body.set_mass(body.mass() * self.factor);
            self.counter -= self.freq;
        }
    }
}
