use crate::math::Vector2;
use nalgebra as na;
use std::fmt;
use std::ops::Mul;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A 2x2 rotation matrix.
///
/// Constructed from an angle theta it holds
/// (cos theta, -sin theta; sin theta, cos theta). For pure rotations the
/// transpose is the inverse.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix2 {
    pub m00: f64,
    pub m01: f64,
    pub m10: f64,
    pub m11: f64,
}

impl Matrix2 {
    /// Creates the identity rotation
    #[inline]
    pub fn identity() -> Self {
        Self {
            m00: 1.0,
            m01: 0.0,
            m10: 0.0,
            m11: 1.0,
        }
    }

    /// Creates a rotation matrix from an angle in radians
    #[inline]
    pub fn from_angle(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            m00: cos,
            m01: -sin,
            m10: sin,
            m11: cos,
        }
    }

    /// Resets the matrix to the rotation for the given angle in radians
    #[inline]
    pub fn set_angle(&mut self, radians: f64) {
        *self = Self::from_angle(radians);
    }

    /// Rotates a vector by this matrix
    #[inline]
    pub fn multiply_vector(&self, v: Vector2) -> Vector2 {
        Vector2::new(
            self.m00 * v.x + self.m01 * v.y,
            self.m10 * v.x + self.m11 * v.y,
        )
    }

    /// Composes two rotations
    #[inline]
    pub fn multiply_matrix(&self, other: &Self) -> Self {
        Self {
            m00: self.m00 * other.m00 + self.m01 * other.m10,
            m01: self.m00 * other.m01 + self.m01 * other.m11,
            m10: self.m10 * other.m00 + self.m11 * other.m10,
            m11: self.m10 * other.m01 + self.m11 * other.m11,
        }
    }

    /// Returns the transpose, which is the inverse rotation
    #[inline]
    pub fn transpose(&self) -> Self {
        Self {
            m00: self.m00,
            m01: self.m10,
            m10: self.m01,
            m11: self.m11,
        }
    }

    /// Convert to nalgebra Matrix2
    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix2<f64> {
        na::Matrix2::new(self.m00, self.m01, self.m10, self.m11)
    }

    /// Convert from nalgebra Matrix2
    #[inline]
    pub fn from_nalgebra(m: &na::Matrix2<f64>) -> Self {
        Self {
            m00: m[(0, 0)],
            m01: m[(0, 1)],
            m10: m[(1, 0)],
            m11: m[(1, 1)],
        }
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply_matrix(&rhs)
    }
}

impl Mul<Vector2> for Matrix2 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        self.multiply_vector(rhs)
    }
}

impl fmt::Display for Matrix2 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{} {}; {} {}]",
            self.m00, self.m01, self.m10, self.m11
        )
    }
}
