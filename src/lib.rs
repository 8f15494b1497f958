//! # quat-core
//!
//! Hamilton quaternion algebra for 3D rotation.
//!
//! This library implements a four-component hypercomplex value type
//! `q = w + xi + yj + zk` with the algebraic primitives used to represent
//! rotations: addition, subtraction, the Hamilton product, scalar
//! multiplication, conjugation, inversion, division, normalization and
//! equality. Values are immutable; every operation returns a new quaternion.
//!
//! It is deliberately not a general linear-algebra or rotation-interpolation
//! library: no matrices, no SLERP, only the algebraic primitives.
//!
//! ## Example
//!
//! ```rust
//! use quat_core::Quaternion;
//! use std::f64::consts::FRAC_PI_4;
//!
//! // 90° rotation about the i-axis as a unit quaternion
//! let q = Quaternion::new(FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0.0, 0.0);
//!
//! // A vector lifted to a pure quaternion (real part zero)
//! let v = Quaternion::new(0.0, 3.0, 5.0, -2.0);
//!
//! // Sandwich product q·v·q⁻¹ performs the rotation
//! let iq = q.inverse().unwrap();
//! let rotated = q * v * iq;
//!
//! assert!(rotated.w.abs() < 1e-12);
//! assert!((rotated.x - 3.0).abs() < 1e-12);
//! assert!((rotated.y - 2.0).abs() < 1e-12);
//! assert!((rotated.z - 5.0).abs() < 1e-12);
//! ```

pub mod error;
pub mod ops;
pub mod quaternion;

// Re-exports for convenience
pub use error::{QuatError, QuatResult};
pub use quaternion::{Quaternion, NORM_TOLERANCE};
