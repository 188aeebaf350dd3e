//! Floating-point-tolerant structural comparison of state snapshots
//!
//! Re-serialized doubles may differ in their last bits, so trace
//! verification never uses exact equality. The expected side stays a raw
//! record on purpose: a malformed expected state (missing field, wrong
//! count) simply compares unequal instead of raising an error.

use crate::math::{Scalar, Vec2};
use crate::physics::state::StepState;
use serde_json::Value;

/// Default absolute tolerance for trace verification
pub const DEFAULT_EPSILON: Scalar = 1e-6;

/// Structural equality between a produced snapshot and an expected record
pub trait StateComparator {
    fn equal(&self, actual: &StepState, expected: &Value) -> bool;
}

/// Compares snapshots with a configurable absolute or relative tolerance
#[derive(Debug, Clone, Copy)]
pub struct EpsilonComparator {
    epsilon: Scalar,
    relative: bool,
}

impl EpsilonComparator {
    /// `|a - b| <= epsilon`
    pub fn absolute(epsilon: Scalar) -> Self {
        Self {
            epsilon,
            relative: false,
        }
    }

    /// `|a - b| <= epsilon * max(|a|, |b|)`
    pub fn relative(epsilon: Scalar) -> Self {
        Self {
            epsilon,
            relative: true,
        }
    }

    fn close(&self, a: Scalar, b: Scalar) -> bool {
        let diff = (a - b).abs();
        if self.relative {
            diff <= self.epsilon * a.abs().max(b.abs())
        } else {
            diff <= self.epsilon
        }
    }

    fn vec2_close(&self, a: Vec2, expected: &Value) -> bool {
        let Some(components) = expected.as_array() else {
            return false;
        };
        if components.len() != 2 {
            return false;
        }
        match (components[0].as_f64(), components[1].as_f64()) {
            (Some(x), Some(y)) => self.close(a.x, x) && self.close(a.y, y),
            _ => false,
        }
    }
}

impl Default for EpsilonComparator {
    fn default() -> Self {
        Self::absolute(DEFAULT_EPSILON)
    }
}

impl StateComparator for EpsilonComparator {
    fn equal(&self, actual: &StepState, expected: &Value) -> bool {
        let Some(time) = expected.get("time").and_then(Value::as_f64) else {
            return false;
        };
        if !self.close(actual.time, time) {
            return false;
        }

        let Some(bodies) = expected.get("bodies").and_then(Value::as_array) else {
            return false;
        };
        if bodies.len() != actual.bodies.len() {
            return false;
        }

        actual.bodies.iter().zip(bodies).all(|(body, record)| {
            record.get("id").and_then(Value::as_str) == Some(body.id.as_str())
                && record
                    .get("m")
                    .and_then(Value::as_f64)
                    .is_some_and(|m| self.close(body.m, m))
                && record
                    .get("p")
                    .is_some_and(|p| self.vec2_close(body.p, p))
                && record
                    .get("v")
                    .is_some_and(|v| self.vec2_close(body.v, v))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::state::BodyState;
    use serde_json::json;

    fn snapshot() -> StepState {
        StepState {
            time: 1.0,
            bodies: vec![BodyState {
                id: "a".to_string(),
                p: Vec2::new(1.0, 2.0),
                v: Vec2::new(0.5, -0.5),
                m: 3.0,
            }],
        }
    }

    fn matching_record() -> Value {
        json!({
            "time": 1.0,
            "bodies": [{"id": "a", "p": [1.0, 2.0], "v": [0.5, -0.5], "m": 3.0}],
        })
    }

    #[test]
    fn matches_its_own_serialization() {
        let state = snapshot();
        let record = serde_json::to_value(&state).unwrap();
        assert!(EpsilonComparator::default().equal(&state, &record));
    }

    #[test]
    fn absolute_tolerance_bounds_the_difference() {
        let cmp = EpsilonComparator::absolute(1e-3);
        let mut record = matching_record();

        record["bodies"][0]["m"] = json!(3.0005);
        assert!(cmp.equal(&snapshot(), &record));

        record["bodies"][0]["m"] = json!(3.1);
        assert!(!cmp.equal(&snapshot(), &record));
    }

    #[test]
    fn relative_tolerance_scales_with_magnitude() {
        let cmp = EpsilonComparator::relative(1e-3);
        let state = StepState {
            time: 0.0,
            bodies: vec![BodyState {
                id: "a".to_string(),
                p: Vec2::new(1e9, 0.0),
                v: Vec2::ZERO,
                m: 1.0,
            }],
        };

        let record = json!({
            "time": 0.0,
            "bodies": [{"id": "a", "p": [1.0000005e9, 0.0], "v": [0.0, 0.0], "m": 1.0}],
        });
        assert!(cmp.equal(&state, &record));

        // The same absolute difference fails on a small magnitude
        let small = snapshot();
        let mut small_record = matching_record();
        small_record["bodies"][0]["p"] = json!([1.5, 2.0]);
        assert!(!cmp.equal(&small, &small_record));
    }

    #[test]
    fn shape_mismatches_compare_unequal_not_error() {
        let cmp = EpsilonComparator::default();
        let state = snapshot();

        assert!(!cmp.equal(&state, &json!({})));
        assert!(!cmp.equal(&state, &json!({"time": 1.0})));
        assert!(!cmp.equal(&state, &json!({"time": 1.0, "bodies": []})));
        assert!(!cmp.equal(&state, &json!({"time": 1.0, "bodies": "none"})));

        let mut missing_field = matching_record();
        missing_field["bodies"][0].as_object_mut().unwrap().remove("v");
        assert!(!cmp.equal(&state, &missing_field));
    }

    #[test]
    fn ids_must_match_in_order() {
        let cmp = EpsilonComparator::default();
        let mut record = matching_record();
        record["bodies"][0]["id"] = json!("b");
        assert!(!cmp.equal(&snapshot(), &record));
    }

    #[test]
    fn time_is_compared_within_tolerance() {
        let cmp = EpsilonComparator::absolute(1e-9);
        let mut record = matching_record();
        record["time"] = json!(1.5);
        assert!(!cmp.equal(&snapshot(), &record));
    }
}
