//! Coder representation.
//!
//! A coder is the plain record the BMI engine reads: a height in meters and
//! a weight in kilograms. Values are never validated here.

use serde::{Deserialize, Serialize};

/// An individual whose BMI can be computed.
///
/// # Examples
///
/// ```
/// use healthy_coder::core::Coder;
///
/// let coder = Coder::new(1.82, 98.0);
/// assert_eq!(coder.height(), 1.82);
/// assert_eq!(coder.weight(), 98.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coder {
    /// Height in meters.
    height: f64,

    /// Weight in kilograms.
    weight: f64,
}

impl Coder {
    /// Creates a new coder from a height (meters) and weight (kilograms).
    #[must_use]
    pub const fn new(height: f64, weight: f64) -> Self {
        Self { height, weight }
    }

    /// Returns the height in meters.
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the weight in kilograms.
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }
}

impl From<(f64, f64)> for Coder {
    /// Builds a coder from a `(height, weight)` pair.
    fn from((height, weight): (f64, f64)) -> Self {
        Self::new(height, weight)
    }
}
