//! Core domain models for healthy-coder.
//!
//! Pure data with no I/O dependencies. The BMI engine only ever reads
//! these values.

pub mod coder;

pub use coder::Coder;
