//! Parameter validation shared by the designer and the magnitude evaluator.
//!
//! Each helper returns [`EqError::NumericDomain`] naming the offending
//! parameter, so callers can decide whether to abort or substitute a default.

use crate::error::{EqError, EqResult};

/// Validate that a value is finite (not NaN or infinite).
///
/// # Example
/// ```
/// use rbj_eq::validation::validate_finite;
///
/// assert!(validate_finite("gain_db", -6.0).is_ok());
/// assert!(validate_finite("gain_db", f64::NAN).is_err());
/// ```
pub fn validate_finite(name: &str, value: f64) -> EqResult<()> {
    if !value.is_finite() {
        return Err(EqError::domain(
            name,
            format!("must be finite, got {}", value),
        ));
    }
    Ok(())
}

/// Validate that a value is finite and strictly positive (> 0).
///
/// # Example
/// ```
/// use rbj_eq::validation::validate_positive;
///
/// assert!(validate_positive("q", 0.707).is_ok());
/// assert!(validate_positive("q", 0.0).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> EqResult<()> {
    validate_finite(name, value)?;
    if value <= 0.0 {
        return Err(EqError::domain(
            name,
            format!("must be positive, got {}", value),
        ));
    }
    Ok(())
}

/// Validate a normalized frequency: cycles per sample in the open interval (0, 0.5).
///
/// # Example
/// ```
/// use rbj_eq::validation::validate_normalized_frequency;
///
/// assert!(validate_normalized_frequency("fc", 0.1).is_ok());
/// assert!(validate_normalized_frequency("fc", 0.5).is_err());
/// ```
pub fn validate_normalized_frequency(name: &str, value: f64) -> EqResult<()> {
    validate_finite(name, value)?;
    if value <= 0.0 || value >= 0.5 {
        return Err(EqError::domain(
            name,
            format!("must be in (0, 0.5) cycles/sample, got {}", value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_finite() {
        assert!(validate_finite("x", 0.0).is_ok());
        assert!(validate_finite("x", -1e300).is_ok());
        assert!(validate_finite("x", f64::INFINITY).is_err());
        assert!(validate_finite("x", f64::NEG_INFINITY).is_err());
        assert!(validate_finite("x", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("slope", 1e-12).is_ok());
        assert!(validate_positive("slope", 0.0).is_err());
        assert!(validate_positive("slope", -0.5).is_err());

        let err = validate_positive("slope", -0.5).unwrap_err();
        assert!(err.to_string().contains("slope"));
        assert!(err.to_string().contains("-0.5"));
    }

    #[test]
    fn test_validate_normalized_frequency_bounds() {
        assert!(validate_normalized_frequency("fc", 1e-6).is_ok());
        assert!(validate_normalized_frequency("fc", 0.499_999).is_ok());
        assert!(validate_normalized_frequency("fc", 0.0).is_err());
        assert!(validate_normalized_frequency("fc", 0.5).is_err());
        assert!(validate_normalized_frequency("fc", -0.1).is_err());
        assert!(validate_normalized_frequency("fc", f64::NAN).is_err());
    }
}
