//! 2D vector helpers on top of nalgebra.
//!
//! nalgebra already provides addition, subtraction, negation, scaling,
//! `dot`, `norm` and `norm_squared`; this module fills in the handful of
//! planar operations the arc construction needs.

use nalgebra::Rotation2;

use super::{Point2, Vector2};

/// Planar operations on [`Vector2`].
pub trait Vector2Ext {
    /// Unit vector in the same direction, or the zero vector when the
    /// magnitude is zero.
    fn unit_or_zero(&self) -> Vector2;

    /// Rotates the vector counter-clockwise by `theta` radians.
    fn rotated(&self, theta: f64) -> Vector2;

    /// Perpendicular vector (rotated by +90°).
    fn perpendicular(&self) -> Vector2;

    /// Polar angle `atan2(y, x)` in `(-π, π]`.
    fn polar_angle(&self) -> f64;
}

impl Vector2Ext for Vector2 {
    fn unit_or_zero(&self) -> Vector2 {
        self.try_normalize(0.0).unwrap_or_else(Vector2::zeros)
    }

    fn rotated(&self, theta: f64) -> Vector2 {
        Rotation2::new(theta) * *self
    }

    fn perpendicular(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    fn polar_angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

/// Linear interpolation between two points: `a + (b - a) * t`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}
