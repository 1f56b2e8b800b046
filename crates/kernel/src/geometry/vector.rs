use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};
use std::ops::{Div, Mul, Neg};

/// A vector in the local east/north/vertical frame.
///
/// `x` points east, `y` points north. The sign of `z` is set by whoever builds
/// the vector: drillhole directions use negative-down, plane normals use
/// positive-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const EAST: Self = Self {
        x: 1.0,
        y: 0.0,
        z: 0.0,
    };
    pub const NORTH: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    pub const UP: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Scale to unit length, or `None` when the length is below `min_length`
    /// (or not finite).
    pub fn normalized(&self, min_length: f64) -> Option<Self> {
        let len = self.length();
        if !len.is_finite() || len < min_length {
            None
        } else {
            Some(*self / len)
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Angle to `other` in radians, in [0, pi].
    ///
    /// Assumes both vectors are already unit length; the cosine is clamped to
    /// [-1, 1] so roundoff never pushes `acos` outside its domain.
    pub fn angle_to_unit(&self, other: &Self) -> f64 {
        self.dot(other).clamp(-1.0, 1.0).acos()
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vec3 {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl AbsDiffEq for Vec3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}
