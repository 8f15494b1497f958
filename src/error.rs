//! Quaternion error types

use thiserror::Error;

/// Errors that can occur in quaternion operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QuatError {
    /// Normalization, inversion or division attempted on a zero-norm value
    #[error("quaternion has zero norm, cannot divide by it")]
    ZeroNorm,

    /// Post-normalization sanity check failed
    #[error("normalization produced a non-unit quaternion (norm = {norm})")]
    Denormalized { norm: f64 },
}

/// Result type for quaternion operations
pub type QuatResult<T> = Result<T, QuatError>;
