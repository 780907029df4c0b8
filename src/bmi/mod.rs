//! BMI engine.
//!
//! Stateless functions computing Body Mass Index (`weight / height²`) for
//! single individuals and for collections of [`Coder`]s. Every call
//! recomputes from its inputs; nothing is cached.
//!
//! A zero height is the only rejected input and surfaces as
//! [`Error::DivisionByZero`]. Negative or zero weights are accepted and
//! produce the arithmetically consistent result.

use tracing::{debug, trace};

use crate::core::Coder;
use crate::error::{Error, Result};

/// BMI at or above which a diet is recommended ("overweight" cutoff).
pub const DIET_THRESHOLD: f64 = 25.0;

/// Computes `weight / height²`.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `height` is zero (either sign).
///
/// # Examples
///
/// ```
/// use healthy_coder::bmi::bmi;
///
/// let value = bmi(100.0, 2.0).unwrap();
/// assert!((value - 25.0).abs() < f64::EPSILON);
/// assert!(bmi(80.0, 0.0).is_err());
/// ```
pub fn bmi(weight: f64, height: f64) -> Result<f64> {
    // Checked before dividing so infinity/NaN never reaches a comparison.
    if height == 0.0 {
        debug!(weight, "rejecting BMI computation for zero height");
        return Err(Error::DivisionByZero { weight });
    }

    let value = weight / (height * height);
    trace!(weight, height, bmi = value, "computed BMI");
    Ok(value)
}

/// Returns whether a diet is recommended, i.e. whether the BMI reaches
/// [`DIET_THRESHOLD`].
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if `height` is zero.
///
/// # Examples
///
/// ```
/// use healthy_coder::bmi::is_diet_recommended;
///
/// assert!(is_diet_recommended(100.0, 1.72).unwrap());
/// assert!(!is_diet_recommended(80.0, 1.8).unwrap());
/// ```
pub fn is_diet_recommended(weight: f64, height: f64) -> Result<bool> {
    Ok(bmi(weight, height)? >= DIET_THRESHOLD)
}

/// Finds the coder with the highest BMI.
///
/// Scans left to right in a single pass; on ties the earliest coder wins.
/// An empty slice yields `Ok(None)`.
///
/// A NaN BMI (from a NaN weight) never compares greater, so it is skipped
/// unless it comes first, in which case that coder is returned.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if any coder has a zero height.
///
/// # Examples
///
/// ```
/// use healthy_coder::bmi::find_worst_bmi_coder;
/// use healthy_coder::core::Coder;
///
/// let coders = vec![
///     Coder::new(1.80, 60.0),
///     Coder::new(1.82, 98.0),
///     Coder::new(1.82, 64.7),
/// ];
/// let worst = find_worst_bmi_coder(&coders).unwrap();
/// assert_eq!(worst, Some(&coders[1]));
/// ```
pub fn find_worst_bmi_coder(coders: &[Coder]) -> Result<Option<&Coder>> {
    let mut worst: Option<(usize, f64)> = None;

    for (index, coder) in coders.iter().enumerate() {
        let value = bmi(coder.weight(), coder.height())?;
        // Strict comparison keeps the first maximum.
        if worst.is_none_or(|(_, best)| value > best) {
            worst = Some((index, value));
        }
    }

    debug!(
        count = coders.len(),
        index = worst.map(|(index, _)| index),
        bmi = worst.map(|(_, value)| value),
        "selected worst BMI coder"
    );

    Ok(worst.map(|(index, _)| &coders[index]))
}

/// Computes the BMI of every coder, preserving input order.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if any coder has a zero height.
///
/// # Examples
///
/// ```
/// use healthy_coder::bmi::compute_bmi_scores;
/// use healthy_coder::core::Coder;
///
/// let scores = compute_bmi_scores(&[Coder::new(2.0, 100.0), Coder::new(1.0, 20.0)]).unwrap();
/// assert_eq!(scores, vec![25.0, 20.0]);
/// assert!(compute_bmi_scores(&[]).unwrap().is_empty());
/// ```
pub fn compute_bmi_scores(coders: &[Coder]) -> Result<Vec<f64>> {
    let scores = coders
        .iter()
        .map(|coder| bmi(coder.weight(), coder.height()))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = scores.len(), "computed BMI scores");
    Ok(scores)
}

/// Rounds a value half away from zero to two decimal places.
///
/// Negative values mirror positive ones: `-0.125` rounds to `-0.13`.
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Like [`compute_bmi_scores`], with each score rounded to two decimals.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if any coder has a zero height.
pub fn compute_rounded_bmi_scores(coders: &[Coder]) -> Result<Vec<f64>> {
    Ok(compute_bmi_scores(coders)?
        .into_iter()
        .map(round_to_hundredths)
        .collect())
}
