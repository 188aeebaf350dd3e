//! Math primitives for the simulation

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// Immutable 2D vector used for positions, velocities, and forces
///
/// Every operation returns a new vector; the serialized form is a
/// two-element array `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[Scalar; 2]", into = "[Scalar; 2]")]
pub struct Vec2 {
    pub x: Scalar,
    pub y: Scalar,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Euclidean norm
    pub fn magnitude(&self) -> Scalar {
        libm::sqrt(self.x * self.x + self.y * self.y)
    }

    /// Unit vector pointing the same way as `self`
    ///
    /// The direction of the zero vector is undefined and reported as a
    /// [`DomainError`] instead of dividing by zero.
    pub fn direction(&self) -> Result<Vec2, DomainError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(DomainError::ZeroMagnitudeDirection);
        }
        Ok(*self * (1.0 / magnitude))
    }

    /// Distance between two points
    pub fn distance_to(&self, other: &Vec2) -> Scalar {
        (*other - *self).magnitude()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<Scalar> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Scalar) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl From<[Scalar; 2]> for Vec2 {
    fn from(value: [Scalar; 2]) -> Self {
        Vec2::new(value[0], value[1])
    }
}

impl From<Vec2> for [Scalar; 2] {
    fn from(value: Vec2) -> Self {
        [value.x, value.y]
    }
}
