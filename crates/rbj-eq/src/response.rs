//! Closed-form magnitude response of a biquad.
//!
//! Uses RBJ's real-valued identity for `|H(e^jw)|`: with `phi = sin^2(w/2)`,
//! each coefficient triple contributes
//!
//! ```text
//! (0.5 * (c0 + c1 + c2))^2 - phi * (4 * c0 * c2 * (1 - phi) + c1 * (c0 + c2))
//! ```
//!
//! and the magnitude is the square root of the numerator term over the
//! denominator term. The identity is scale-invariant, so raw (unnormalized)
//! coefficients are used directly.

use std::f64::consts::TAU;

use crate::coeffs::CoefficientPair;
use crate::error::{EqError, EqResult};
use crate::validation::validate_finite;

/// Ratios this far below zero are treated as round-off at a response null.
const RADICAND_TOLERANCE: f64 = 1e-12;

fn energy(c: &[f64; 3], phi: f64) -> f64 {
    let t1 = 0.5 * (c[0] + c[1] + c[2]);
    let t2 = -phi * (4.0 * c[0] * c[2] * (1.0 - phi) + c[1] * (c[0] + c[2]));
    t1 * t1 + t2
}

/// Returns the gain magnitude of `pair` at angular frequency `w` (radians/sample).
///
/// The meaningful domain is `[0, pi]`; other finite values are accepted and
/// follow the periodic, even extension of the response.
///
/// # Errors
/// [`EqError::NumericDomain`] if `w` is not finite, the denominator term is
/// zero, or the radicand is negative (or NaN) beyond round-off.
///
/// # Example
/// ```
/// use rbj_eq::{design, magnitude, FilterType, WidthSpec};
///
/// let pair = design(FilterType::LowPass, 0.1, WidthSpec::Q(0.707)).unwrap();
/// assert!((magnitude(&pair, 0.0).unwrap() - 1.0).abs() < 1e-9);
/// ```
pub fn magnitude(pair: &CoefficientPair, w: f64) -> EqResult<f64> {
    validate_finite("w", w)?;

    let phi = (0.5 * w).sin();
    let phi = phi * phi;

    let numerator = energy(pair.numerator(), phi);
    let denominator = energy(pair.denominator(), phi);
    if denominator == 0.0 {
        return Err(EqError::domain(
            "magnitude",
            format!("denominator response is zero at w = {}", w),
        ));
    }

    let ratio = numerator / denominator;
    if ratio.is_nan() || ratio < -RADICAND_TOLERANCE {
        return Err(EqError::domain(
            "magnitude",
            format!("negative radicand {} at w = {}", ratio, w),
        ));
    }
    Ok(ratio.max(0.0).sqrt())
}

/// Samples the magnitude response at `points` evenly spaced normalized
/// frequencies from 0 to 0.5 inclusive.
///
/// Returns `(fc, magnitude)` pairs with `fc` in cycles/sample.
///
/// # Errors
/// [`EqError::NumericDomain`] if `points < 2`, or if any sample fails as in
/// [`magnitude`].
pub fn frequency_response(pair: &CoefficientPair, points: usize) -> EqResult<Vec<(f64, f64)>> {
    if points < 2 {
        return Err(EqError::domain(
            "points",
            format!("need at least 2 points, got {}", points),
        ));
    }

    let last = (points - 1) as f64;
    (0..points)
        .map(|i| {
            let fc = 0.5 * i as f64 / last;
            magnitude(pair, TAU * fc).map(|m| (fc, m))
        })
        .collect()
}
