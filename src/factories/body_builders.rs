//! Builders for body variants

use super::{Builder, require_scalar, require_str, require_vec2};
use crate::errors::DecodingError;
use crate::physics::body::{Body, PeriodicMassLoss};
use serde_json::{Value, json};

/// Builds plain point masses (tag `basic`)
///
/// Record shape: `{"type": "basic", "id": <string>, "p": [x, y],
/// "v": [x, y], "m": <number>}`.
pub struct BasicBodyBuilder;

impl Builder<Body> for BasicBodyBuilder {
    fn type_tag(&self) -> &'static str {
        "basic"
    }

    fn description(&self) -> &'static str {
        "Basic body"
    }

    fn data_schema(&self) -> Value {
        json!({
            "id": "the identifier",
            "p": "the position",
            "v": "the velocity",
            "m": "the mass",
        })
    }

    fn build(&self, record: &Value) -> Result<Body, DecodingError> {
        let tag = self.type_tag();
        let id = require_str(record, tag, "id")?;
        let p = require_vec2(record, tag, "p")?;
        let v = require_vec2(record, tag, "v")?;
        let m = require_scalar(record, tag, "m")?;

        Ok(Body::new(id, p, v, m)?)
    }
}

/// Builds bodies that periodically lose mass (tag `mlb`)
///
/// Adds `freq` and `factor` to the basic record shape.
pub struct MassLosingBodyBuilder;

impl Builder<Body> for MassLosingBodyBuilder {
    fn type_tag(&self) -> &'static str {
        "mlb"
    }

    fn description(&self) -> &'static str {
        "Mass losing body"
    }

    fn data_schema(&self) -> Value {
        json!({
            "id": "the identifier",
            "p": "the position",
            "v": "the velocity",
            "m": "the mass",
            "freq": "the mass loss frequency",
            "factor": "the mass loss factor",
        })
    }

    fn build(&self, record: &Value) -> Result<Body, DecodingError> {
        let tag = self.type_tag();
        let id = require_str(record, tag, "id")?;
        let p = require_vec2(record, tag, "p")?;
        let v = require_vec2(record, tag, "v")?;
        let m = require_scalar(record, tag, "m")?;
        let freq = require_scalar(record, tag, "freq")?;
        let factor = require_scalar(record, tag, "factor")?;

        let hook = PeriodicMassLoss::new(freq, factor)?;
        Ok(Body::new(id, p, v, m)?.with_evolution(Box::new(hook)))
    }
}
