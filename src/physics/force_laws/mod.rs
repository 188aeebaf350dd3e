//! Force law strategies
//!
//! A force law computes the force contributions for one step over the full
//! ordered body list. Which law is active is a per-simulation configuration
//! decision made once, through the factory registry; the simulator only sees
//! the trait.

use crate::physics::body::Body;

pub mod fixed_point;
pub mod newton_gravitation;
pub mod no_force;

pub use fixed_point::MovingTowardsFixedPoint;
pub use newton_gravitation::NewtonUniversalGravitation;
pub use no_force::NoForce;

/// Strategy computing force contributions for a body set
///
/// Implementations may only ever add into each body's accumulator (the
/// simulator resets the accumulators before the law runs) and must not
/// reorder bodies.
pub trait ForceLaw: Send + Sync + std::fmt::Debug {
    /// Add this law's contribution for the current step into every body
    fn apply(&self, bodies: &mut [Body]);

    /// Human-readable name of this law
    fn name(&self) -> &str;
}
