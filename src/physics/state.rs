//! Detached snapshots of simulation state
//!
//! Snapshots are the only thing the engine exposes to the outside: they are
//! plain data, never alias live bodies, and serialize to the wire record
//! format (`{"time": t, "bodies": [{"id", "p", "v", "m"}, ...]}`).

use crate::math::{Scalar, Vec2};
use serde::{Deserialize, Serialize};

/// State of a single body at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub id: String,
    pub p: Vec2,
    pub v: Vec2,
    pub m: Scalar,
}

/// State of the whole simulation at one point in time
///
/// Bodies appear in the order they were added to the simulator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepState {
    pub time: Scalar,
    pub bodies: Vec<BodyState>,
}
