//! Error types for filter design and response evaluation.

use thiserror::Error;

/// Result type for filter operations.
pub type EqResult<T> = Result<T, EqError>;

/// Errors that can occur while designing or evaluating a filter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EqError {
    /// Width tag is not one of `q`, `bandwidth` or `slope`.
    #[error("invalid width kind: '{kind}' (expected q, bandwidth or slope)")]
    InvalidWidthKind {
        /// The unrecognized tag.
        kind: String,
    },

    /// Filter name does not match any known filter type.
    #[error("invalid filter type: '{name}'")]
    InvalidFilterType {
        /// The unrecognized filter name.
        name: String,
    },

    /// A parameter is outside its numeric domain, or a result would be imaginary.
    #[error("numeric domain error in '{name}': {message}")]
    NumericDomain {
        /// Parameter or quantity name.
        name: String,
        /// Error message.
        message: String,
    },
}

impl EqError {
    /// Creates a numeric domain error.
    pub fn domain(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NumericDomain {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the stable error code string (e.g., "EQ_001").
    pub fn code(&self) -> &'static str {
        match self {
            EqError::InvalidWidthKind { .. } => "EQ_001",
            EqError::InvalidFilterType { .. } => "EQ_002",
            EqError::NumericDomain { .. } => "EQ_003",
        }
    }
}
