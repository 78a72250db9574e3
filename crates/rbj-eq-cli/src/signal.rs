//! Test signal generation.
//!
//! Provides the excitation signals fed through a filter by the `sweep`
//! command: a linear chirp and a unit impulse.

use std::f64::consts::TAU;

/// Generates a linear chirp whose instantaneous frequency moves from
/// `start_hz` to `end_hz` over `len` samples.
///
/// Phase follows `2π(c·t² + f0·t)` with `c = (f1 - f0) / (2T)`, where `T` is
/// the duration of the whole signal in seconds.
///
/// # Example
/// ```
/// use rbj_eq_cli::signal::linear_chirp;
///
/// let chirp = linear_chirp(100.0, 1000.0, 8000.0, 8000);
/// assert_eq!(chirp.len(), 8000);
/// assert_eq!(chirp[0], 0.0);
/// ```
pub fn linear_chirp(start_hz: f64, end_hz: f64, sample_rate: f64, len: usize) -> Vec<f64> {
    if len == 0 {
        return Vec::new();
    }
    let duration = len as f64 / sample_rate;
    let c = 0.5 * (end_hz - start_hz) / duration;
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (TAU * (c * t * t + start_hz * t)).sin()
        })
        .collect()
}

/// Generates a unit impulse: `1.0` followed by `len - 1` zeros.
pub fn impulse(len: usize) -> Vec<f64> {
    let mut signal = vec![0.0; len];
    if let Some(first) = signal.first_mut() {
        *first = 1.0;
    }
    signal
}
