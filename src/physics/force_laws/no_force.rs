//! The trivial force law

use super::ForceLaw;
use crate::physics::body::Body;

/// Contributes nothing; bodies drift with whatever velocity they have
///
/// Useful for drift tests and for producing reference traces where only the
/// integration step matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoForce;

impl ForceLaw for NoForce {
    fn apply(&self, _bodies: &mut [Body]) {}

    fn name(&self) -> &str {
        "No force"
    }
}
