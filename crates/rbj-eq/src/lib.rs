//! RBJ cookbook biquad filters.
//!
//! This crate designs second-order ("biquad") IIR filters from Robert
//! Bristow-Johnson's *Audio EQ Cookbook*, runs them sample by sample, and
//! evaluates their magnitude response in closed form.
//!
//! # Overview
//!
//! - [`design()`] turns a [`FilterType`], a normalized center frequency and a
//!   [`WidthSpec`] into a raw [`CoefficientPair`].
//! - [`FilterState`] normalizes a pair and applies the recursion one sample at
//!   a time.
//! - [`magnitude()`] evaluates `|H(e^jw)|` directly from a pair, without
//!   complex arithmetic.
//!
//! Frequencies are normalized to the sample rate: `fc` is in cycles per sample
//! and lies in (0, 0.5); `w` is in radians per sample.
//!
//! # Example
//!
//! ```
//! use rbj_eq::{design, FilterState, FilterType, WidthSpec};
//!
//! // A signal at Nyquist.
//! let samples: Vec<f64> = (0..128)
//!     .map(|i| if i % 2 == 0 { 1.0 } else { -1.0 })
//!     .collect();
//!
//! let pair = design(FilterType::LowPass, 0.1, WidthSpec::Q(0.707)).unwrap();
//! let mut filter = FilterState::from_coefficients(pair);
//! let filtered = filter.process_buffer_copy(&samples);
//!
//! // Nyquist is fully rejected once the filter settles.
//! assert!(filtered[100..].iter().all(|y| y.abs() < 0.01));
//! assert!(pair.magnitude(std::f64::consts::PI).unwrap() < 1e-6);
//! ```
//!
//! # Crate Structure
//!
//! - [`design`](mod@design) - Coefficient design for all nine filter types
//! - [`filter`] - Per-sample filter state
//! - [`response`] - Closed-form magnitude response
//! - [`types`] - Filter type and width specification
//! - [`validation`] - Parameter range checks

pub mod coeffs;
pub mod design;
pub mod error;
pub mod filter;
pub mod response;
pub mod types;
pub mod validation;

// Re-export main types at crate root
pub use coeffs::{CoefficientPair, NormalizedCoeffs};
pub use design::{design, design_filter};
pub use error::{EqError, EqResult};
pub use filter::FilterState;
pub use response::{frequency_response, magnitude};
pub use types::{FilterFamily, FilterType, WidthSpec};
