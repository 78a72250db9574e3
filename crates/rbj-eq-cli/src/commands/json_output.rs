//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json` and then prints a single
//! [`CommandOutput`] document instead of colored text, so scripts can parse
//! results and errors programmatically.

use rbj_eq::{CoefficientPair, EqError, FilterType, NormalizedCoeffs, WidthSpec};
use serde::{Deserialize, Serialize};

use crate::cli_args::FilterArgs;

/// Error codes for CLI operations.
///
/// These codes are stable and can be used for programmatic error handling.
/// Format: CLI_XXX for CLI-level errors; filter design errors pass through
/// their `EQ_XXX` codes.
pub mod error_codes {
    /// WAV file could not be written
    pub const WAV_WRITE: &str = "CLI_001";
    /// Requested sweep is longer than the sweep limit
    pub const SIGNAL_LENGTH: &str = "CLI_002";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "EQ_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Suggestion for fixing the error (if available)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Adds a suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl From<&EqError> for JsonError {
    fn from(err: &EqError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}

/// Top-level document printed by every command in `--json` mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Command result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(result: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    /// Creates a failed output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// The filter a command ran with, echoed back in every result.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterSummary {
    pub filter_type: FilterType,
    pub freq_hz: f64,
    pub sample_rate: f64,
    /// Center frequency in cycles per sample
    pub normalized_freq: f64,
    pub width: WidthSpec,
}

impl From<&FilterArgs> for FilterSummary {
    fn from(args: &FilterArgs) -> Self {
        Self {
            filter_type: args.filter,
            freq_hz: args.freq,
            sample_rate: args.sample_rate,
            normalized_freq: args.normalized_freq(),
            width: args.width_spec(),
        }
    }
}

/// Excitation signal used by `sweep`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignalKind {
    Chirp,
    Impulse,
}

/// Result of `sweep`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub filter: FilterSummary,
    pub signal: SignalKind,
    /// WAV file the output was written to (if requested)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wav: Option<String>,
    /// Filtered samples
    pub samples: Vec<f64>,
}

/// Unit of the magnitudes reported by `transfer`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeUnit {
    Linear,
    Db,
}

/// One evaluated frequency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferPoint {
    pub frequency_hz: f64,
    pub normalized_freq: f64,
    /// Magnitude in [`TransferResult::unit`]; `None` (`null`) when it is not
    /// finite, such as a zero magnitude in dB
    pub magnitude: Option<f64>,
}

/// Result of `transfer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferResult {
    pub filter: FilterSummary,
    pub unit: MagnitudeUnit,
    pub points: Vec<TransferPoint>,
}

/// Result of `coeffs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoeffsResult {
    pub filter: FilterSummary,
    /// Coefficients as designed, before dividing by `a0`
    pub raw: CoefficientPair,
    pub normalized: NormalizedCoeffs,
}
