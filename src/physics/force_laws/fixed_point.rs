//! Constant acceleration toward a fixed point

use super::ForceLaw;
use crate::math::{Scalar, Vec2};
use crate::physics::body::Body;

/// Default acceleration magnitude (standard gravity)
pub const DEFAULT_ACCELERATION: Scalar = 9.81;

/// Pulls every body toward a fixed point with constant acceleration `g`
///
/// The force on each body is `m * g` along the unit direction from the body
/// to the point; a body sitting exactly at the point gets no contribution.
#[derive(Debug, Clone)]
pub struct MovingTowardsFixedPoint {
    point: Vec2,
    g: Scalar,
}

impl MovingTowardsFixedPoint {
    pub fn new(point: Vec2, g: Scalar) -> Self {
        Self { point, g }
    }
}

impl Default for MovingTowardsFixedPoint {
    fn default() -> Self {
        Self::new(Vec2::ZERO, DEFAULT_ACCELERATION)
    }
}

impl ForceLaw for MovingTowardsFixedPoint {
    fn apply(&self, bodies: &mut [Body]) {
        for body in bodies.iter_mut() {
            if let Ok(direction) = (self.point - body.position()).direction() {
                body.add_force(direction * (self.g * body.mass()));
            }
        }
    }

    fn name(&self) -> &str {
        "Moving towards a fixed point"
    }
}
