//! Biquad coefficient containers.

use serde::{Deserialize, Serialize};

use crate::error::EqResult;
use crate::filter::FilterState;
use crate::response;

/// Raw biquad coefficients as produced by [`design`](crate::design()).
///
/// The denominator's leading entry is the unnormalized feedback gain `a0`;
/// it is only divided out when a [`FilterState`] is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoefficientPair {
    numerator: [f64; 3],
    denominator: [f64; 3],
}

impl CoefficientPair {
    /// Creates a coefficient pair from numerator `[b0, b1, b2]` and
    /// denominator `[a0, a1, a2]`.
    pub fn new(numerator: [f64; 3], denominator: [f64; 3]) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Feed-forward coefficients `[b0, b1, b2]`.
    pub fn numerator(&self) -> &[f64; 3] {
        &self.numerator
    }

    /// Feedback coefficients `[a0, a1, a2]`, with `a0` not yet divided out.
    pub fn denominator(&self) -> &[f64; 3] {
        &self.denominator
    }

    /// Returns a copy with every coefficient multiplied by `factor`.
    ///
    /// The filter described is unchanged for any nonzero factor.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            numerator: self.numerator.map(|c| c * factor),
            denominator: self.denominator.map(|c| c * factor),
        }
    }

    /// Divides every coefficient by `a0`.
    pub fn normalized(&self) -> NormalizedCoeffs {
        let a_inv = 1.0 / self.denominator[0];
        NormalizedCoeffs {
            g: self.numerator[0] * a_inv,
            b1: self.numerator[1] * a_inv,
            b2: self.numerator[2] * a_inv,
            a1: self.denominator[1] * a_inv,
            a2: self.denominator[2] * a_inv,
        }
    }

    /// Builds a fresh filter with zeroed history from these coefficients.
    pub fn to_filter(&self) -> FilterState {
        FilterState::from_coefficients(*self)
    }

    /// Gain magnitude at angular frequency `w` (radians/sample).
    pub fn magnitude(&self, w: f64) -> EqResult<f64> {
        response::magnitude(self, w)
    }

    /// Gain magnitude at normalized frequency `fc` (cycles/sample).
    pub fn magnitude_at(&self, fc: f64) -> EqResult<f64> {
        response::magnitude(self, std::f64::consts::TAU * fc)
    }

    /// Gain in dB at angular frequency `w`. A zero gain yields negative infinity.
    pub fn magnitude_db(&self, w: f64) -> EqResult<f64> {
        Ok(20.0 * self.magnitude(w)?.log10())
    }
}

/// Coefficients divided through by `a0`.
///
/// Difference equation:
/// ```text
/// y[n] = g*x[n] + b1*x[n-1] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedCoeffs {
    /// Gain applied to the current input (`b0 / a0`).
    pub g: f64,
    /// Feed-forward coefficient for `x[n-1]`.
    pub b1: f64,
    /// Feed-forward coefficient for `x[n-2]`.
    pub b2: f64,
    /// Feedback coefficient for `y[n-1]` (negated in the difference equation).
    pub a1: f64,
    /// Feedback coefficient for `y[n-2]` (negated in the difference equation).
    pub a2: f64,
}
