//! Physim prelude
//!
//! Re-exports the most commonly used types and traits across the crate to
//! reduce import boilerplate.

pub use crate::config::SimulationConfig;
pub use crate::control::comparator::{EpsilonComparator, StateComparator};
pub use crate::control::controller::{Controller, SimulationObserver};
pub use crate::errors::{
    ConstructionError, ControlError, DecodingError, DomainError, VerificationFailure,
};
pub use crate::factories::{Builder, Factory, standard_body_factory, standard_force_law_factory};
pub use crate::math::{Scalar, Vec2};
pub use crate::physics::body::{Body, EvolutionHook, PeriodicMassLoss};
pub use crate::physics::force_laws::{
    ForceLaw, MovingTowardsFixedPoint, NewtonUniversalGravitation, NoForce,
};
pub use crate::physics::simulator::PhysicsSimulator;
pub use crate::physics::state::{BodyState, StepState};
