//! Error types for coordinate handling.
//!
//! [`CoreError`] covers the two ways a sky coordinate can be unusable:
//! it is not a finite number, or it lies outside the physical domain of
//! the quantity it claims to be. Both are caller bugs, not runtime
//! conditions — nothing here is retried.

use thiserror::Error;

/// Unified error type for angle and coordinate validation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CoreError {
    /// Value is NaN or infinite.
    #[error("{quantity} is not finite")]
    NotFinite { quantity: String },

    /// Value is finite but outside the valid domain.
    #[error("{quantity} {value:.6}\u{b0} out of range {range}")]
    OutOfRange {
        quantity: String,
        value: f64,
        range: String,
    },
}

/// Convenience alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Creates a [`NotFinite`](Self::NotFinite) error.
    pub fn not_finite(quantity: &str) -> Self {
        Self::NotFinite {
            quantity: quantity.to_string(),
        }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error. `value` is in degrees.
    pub fn out_of_range(quantity: &str, value: f64, range: &str) -> Self {
        Self::OutOfRange {
            quantity: quantity.to_string(),
            value,
            range: range.to_string(),
        }
    }
}
