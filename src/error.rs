//! Error types for healthy-coder operations.
//!
//! The BMI engine has a single failure mode: a zero height.

use thiserror::Error;

/// Result type alias for healthy-coder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for BMI computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Height was zero, so `weight / height²` is undefined.
    #[error("division by zero: BMI undefined for height 0 (weight {weight})")]
    DivisionByZero {
        /// Weight of the individual whose BMI was requested.
        weight: f64,
    },
}

impl Error {
    /// Returns true for the division-by-zero variant.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }
}
