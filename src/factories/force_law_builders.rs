//! Builders for force laws
//!
//! Parameter values live under the record's `"data"` object, the same shape
//! the schema uses for descriptions. All parameters are optional and fall
//! back to each law's defaults.

use super::{Builder, optional_params, optional_scalar, optional_vec2};
use crate::errors::DecodingError;
use crate::math::Vec2;
use crate::physics::force_laws::{
    ForceLaw, MovingTowardsFixedPoint, NewtonUniversalGravitation, NoForce,
    fixed_point::DEFAULT_ACCELERATION, newton_gravitation::DEFAULT_G,
};
use serde_json::{Value, json};

/// Builds [`NewtonUniversalGravitation`] (tag `nlug`)
pub struct NewtonUniversalGravitationBuilder;

impl Builder<Box<dyn ForceLaw>> for NewtonUniversalGravitationBuilder {
    fn type_tag(&self) -> &'static str {
        "nlug"
    }

    fn description(&self) -> &'static str {
        "Newton's law of universal gravitation"
    }

    fn data_schema(&self) -> Value {
        json!({
            "G": "the gravitational constant (a number)",
        })
    }

    fn build(&self, record: &Value) -> Result<Box<dyn ForceLaw>, DecodingError> {
        let tag = self.type_tag();
        let g = match optional_params(record, tag)? {
            Some(data) => optional_scalar(data, tag, "G")?.unwrap_or(DEFAULT_G),
            None => DEFAULT_G,
        };
        Ok(Box::new(NewtonUniversalGravitation::new(g)))
    }
}

/// Builds [`MovingTowardsFixedPoint`] (tag `mtfp`)
pub struct MovingTowardsFixedPointBuilder;

impl Builder<Box<dyn ForceLaw>> for MovingTowardsFixedPointBuilder {
    fn type_tag(&self) -> &'static str {
        "mtfp"
    }

    fn description(&self) -> &'static str {
        "Moving towards a fixed point"
    }

    fn data_schema(&self) -> Value {
        json!({
            "c": "the point towards which bodies move (an array of two numbers)",
            "g": "the magnitude of the acceleration (a number)",
        })
    }

    fn build(&self, record: &Value) -> Result<Box<dyn ForceLaw>, DecodingError> {
        let tag = self.type_tag();
        let (point, g) = match optional_params(record, tag)? {
            Some(data) => (
                optional_vec2(data, tag, "c")?.unwrap_or(Vec2::ZERO),
                optional_scalar(data, tag, "g")?.unwrap_or(DEFAULT_ACCELERATION),
            ),
            None => (Vec2::ZERO, DEFAULT_ACCELERATION),
        };
        Ok(Box::new(MovingTowardsFixedPoint::new(point, g)))
    }
}

/// Builds [`NoForce`] (tag `ng`)
pub struct NoForceBuilder;

impl Builder<Box<dyn ForceLaw>> for NoForceBuilder {
    fn type_tag(&self) -> &'static str {
        "ng"
    }

    fn description(&self) -> &'static str {
        "No force"
    }

    fn data_schema(&self) -> Value {
        json!({})
    }

    fn build(&self, _record: &Value) -> Result<Box<dyn ForceLaw>, DecodingError> {
        Ok(Box::new(NoForce))
    }
}
