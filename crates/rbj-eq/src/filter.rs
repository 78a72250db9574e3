//! Stateful biquad evaluation.
//!
//! [`FilterState`] runs the Direct Form I recursion over normalized
//! coefficients, one sample at a time. Each instance owns its history and is
//! meant to be driven by a single stream of samples; cloning yields an
//! independent filter with a copy of the current history.

use crate::coeffs::{CoefficientPair, NormalizedCoeffs};

/// Biquad filter state.
#[derive(Debug, Clone)]
pub struct FilterState {
    coeffs: NormalizedCoeffs,
    // Previous inputs: x[n-1], x[n-2]
    xs: [f64; 2],
    // Previous outputs: y[n-1], y[n-2]
    ys: [f64; 2],
}

impl FilterState {
    /// Creates a filter from raw coefficients, dividing them through by `a0`.
    ///
    /// History starts at zero. Degenerate coefficients (e.g. `a0 == 0`) are
    /// not rejected; they propagate non-finite values through [`step`](Self::step).
    pub fn from_coefficients(pair: CoefficientPair) -> Self {
        Self {
            coeffs: pair.normalized(),
            xs: [0.0; 2],
            ys: [0.0; 2],
        }
    }

    /// Alias for [`FilterState::from_coefficients`].
    pub fn new(pair: CoefficientPair) -> Self {
        Self::from_coefficients(pair)
    }

    /// Returns the normalized coefficients this filter runs on.
    pub fn coefficients(&self) -> &NormalizedCoeffs {
        &self.coeffs
    }

    /// Clears the input and output history, keeping the coefficients.
    pub fn reset(&mut self) {
        self.xs = [0.0; 2];
        self.ys = [0.0; 2];
    }

    /// Processes a single sample through the filter.
    #[inline]
    pub fn step(&mut self, x: f64) -> f64 {
        let c = &self.coeffs;
        let y = c.g * x + c.b1 * self.xs[0] + c.b2 * self.xs[1]
            - c.a1 * self.ys[0]
            - c.a2 * self.ys[1];

        // Shift history only after y is computed from the previous values.
        self.xs[1] = self.xs[0];
        self.xs[0] = x;
        self.ys[1] = self.ys[0];
        self.ys[0] = y;

        y
    }

    /// Processes a buffer of samples in place.
    pub fn process_buffer(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.step(*sample);
        }
    }

    /// Processes a buffer of samples, returning a new buffer.
    pub fn process_buffer_copy(&mut self, input: &[f64]) -> Vec<f64> {
        input.iter().map(|&s| self.step(s)).collect()
    }
}

impl From<CoefficientPair> for FilterState {
    fn from(pair: CoefficientPair) -> Self {
        Self::from_coefficients(pair)
    }
}
