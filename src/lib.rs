//! # healthy-coder
//!
//! Body Mass Index statistics for coders.
//!
//! healthy-coder is a pure computation library: given individuals described
//! by height (meters) and weight (kilograms) it decides whether a diet is
//! recommended, finds the individual with the worst BMI, and computes every
//! individual's BMI.
//!
//! ## Features
//!
//! - **Diet recommendation**: fixed 25.0 BMI cutoff
//! - **Worst BMI lookup**: single linear pass, first maximum wins
//! - **BMI scores**: per-coder values in input order, optionally rounded
//! - **Explicit errors**: zero height is reported, never turned into NaN

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod bmi;
pub mod core;
pub mod error;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core domain types
pub use crate::core::Coder;

// Re-export engine operations
pub use bmi::{
    DIET_THRESHOLD, bmi, compute_bmi_scores, compute_rounded_bmi_scores, find_worst_bmi_coder,
    is_diet_recommended, round_to_hundredths,
};
