//! The quaternion value type
//!
//! A quaternion q = w + xi + yj + zk where i² = j² = k² = -1,
//! ij = k, jk = i, ki = j. Unit quaternions represent 3D rotations;
//! the sandwich product q·v·q* rotates a vector v.

use crate::error::{QuatError, QuatResult};
use serde::{Deserialize, Serialize};

/// Tolerance for the post-normalization unit-norm check.
///
/// The check guards against a degenerate scaling, not against ordinary
/// rounding: a freshly normalized quaternion can land a few ulps off 1.0,
/// so exact comparison would reject almost every input.
pub const NORM_TOLERANCE: f64 = 1e-12;

/// A quaternion q = w + xi + yj + zk
///
/// The value is immutable by convention: every operation returns a new
/// quaternion and leaves its operands untouched. Equality (`==`) is exact
/// componentwise f64 comparison; use [`Quaternion::approx_eq`] when a
/// tolerance is wanted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// Scalar (real) component
    pub w: f64,
    /// i component
    pub x: f64,
    /// j component
    pub y: f64,
    /// k component
    pub z: f64,
}

impl Quaternion {
    /// Create a new quaternion
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Identity quaternion (1, 0, 0, 0)
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Zero quaternion
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Create from array [w, x, y, z]
    pub const fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to array [w, x, y, z]
    pub const fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// The imaginary triple [x, y, z]
    pub const fn vector(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Replace the imaginary triple in one call, keeping the real part
    pub const fn with_vector(&self, v: [f64; 3]) -> Self {
        Self::new(self.w, v[0], v[1], v[2])
    }

    /// Create from axis-angle representation (unit rotation quaternion)
    pub fn from_axis_angle(axis: [f64; 3], angle: f64) -> Self {
        let half_angle = angle / 2.0;
        let sin_half = half_angle.sin();
        let norm = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();

        if norm < 1e-10 {
            return Self::identity();
        }

        Self::new(
            half_angle.cos(),
            axis[0] / norm * sin_half,
            axis[1] / norm * sin_half,
            axis[2] / norm * sin_half,
        )
    }

    /// Squared norm (w² + x² + y² + z²)
    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Norm (magnitude)
    #[inline]
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale to unit norm, returning a new quaternion.
    ///
    /// Errors with [`QuatError::ZeroNorm`] when the norm is exactly zero,
    /// and with [`QuatError::Denormalized`] when the scaled result fails
    /// the unit-norm re-check. The re-check uses [`NORM_TOLERANCE`] rather
    /// than exact equality to 1.0; see DESIGN.md for the rationale.
    pub fn normalized(&self) -> QuatResult<Self> {
        let n = self.norm();
        if n == 0.0 {
            return Err(QuatError::ZeroNorm);
        }
        let scaled = Self::new(self.w / n, self.x / n, self.y / n, self.z / n);

        let check = scaled.norm();
        if (check - 1.0).abs() > NORM_TOLERANCE {
            return Err(QuatError::Denormalized { norm: check });
        }
        Ok(scaled)
    }

    /// Conjugate (w, -x, -y, -z)
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotate a 3D vector by this quaternion: v' = q·v·q*
    ///
    /// The vector is lifted to a pure quaternion (w = 0) and sandwiched
    /// between q and its conjugate. Only meaningful for unit q.
    pub fn rotate_vector(&self, v: [f64; 3]) -> [f64; 3] {
        let qv = Quaternion::new(0.0, v[0], v[1], v[2]);
        let rotated = *self * qv * self.conjugate();
        [rotated.x, rotated.y, rotated.z]
    }

    /// Check approximate equality per component
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.w - other.w).abs() < epsilon
            && (self.x - other.x).abs() < epsilon
            && (self.y - other.y).abs() < epsilon
            && (self.z - other.z).abs() < epsilon
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Display for Quaternion {
    /// Canonical form `"<w> + <x>i + <y>j + <z>k"`, default f64 formatting
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {}i + {}j + {}k", self.w, self.x, self.y, self.z)
    }
}
