//! Error type for the validating constructors.
//!
//! The sidereal computation itself never fails: non-finite inputs propagate
//! as non-finite outputs. Callers that want rejection instead of propagation
//! use the `validated` constructors on the value types, which return
//! [`SiderealResult`].

use thiserror::Error;

/// Rejection reasons reported by validating constructors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiderealError {
    /// Input value is NaN or infinite.
    #[error("{quantity} must be finite, got {value}")]
    NotFinite { quantity: &'static str, value: f64 },

    /// Value outside the range a validating constructor accepts.
    #[error("{quantity} {value} outside valid range [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience alias for `Result<T, SiderealError>`.
pub type SiderealResult<T> = Result<T, SiderealError>;

impl SiderealError {
    /// Creates a [`NotFinite`](Self::NotFinite) error.
    pub fn not_finite(quantity: &'static str, value: f64) -> Self {
        Self::NotFinite { quantity, value }
    }

    /// Creates an [`OutOfRange`](Self::OutOfRange) error.
    pub fn out_of_range(quantity: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            quantity,
            value,
            min,
            max,
        }
    }
}
