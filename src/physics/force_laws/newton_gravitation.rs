//! Newton's law of universal gravitation

use super::ForceLaw;
use crate::math::Scalar;
use crate::physics::body::Body;

/// Default gravitational constant, in SI units
pub const DEFAULT_G: Scalar = 6.67e-11;

/// Pairwise attraction between all body pairs, O(n²) per step
///
/// Each pair contributes `G * mi * mj / d²` along the separation direction,
/// pulling both bodies toward each other. Coincident bodies contribute
/// nothing to each other.
#[derive(Debug, Clone)]
pub struct NewtonUniversalGravitation {
    g: Scalar,
}

impl NewtonUniversalGravitation {
    pub fn new(g: Scalar) -> Self {
        Self { g }
    }
}

impl Default for NewtonUniversalGravitation {
    fn default() -> Self {
        Self::new(DEFAULT_G)
    }
}

impl ForceLaw for NewtonUniversalGravitation {
    fn apply(&self, bodies: &mut [Body]) {
        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let delta = bodies[j].position() - bodies[i].position();
                let distance = delta.magnitude();
                if distance == 0.0 {
                    continue;
                }

                let magnitude =
                    self.g * bodies[i].mass() * bodies[j].mass() / (distance * distance);
                let pull = delta * (magnitude / distance);

                bodies[i].add_force(pull);
                bodies[j].add_force(-pull);
            }
        }
    }

    fn name(&self) -> &str {
        "Newton's law of universal gravitation"
    }
}
