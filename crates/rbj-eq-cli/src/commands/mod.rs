//! CLI command implementations

pub mod coeffs;
pub mod json_output;
pub mod sweep;
pub mod transfer;

use anyhow::Result;
use rbj_eq::{CoefficientPair, EqError};
use serde::Serialize;
use std::process::ExitCode;

use crate::cli_args::FilterArgs;
use json_output::{CommandOutput, JsonError};

/// Suggests a fix for common filter design mistakes.
fn design_hint(args: &FilterArgs, err: &EqError) -> Option<String> {
    let EqError::NumericDomain { name, .. } = err else {
        return None;
    };
    match name.as_str() {
        "fc" => Some(format!(
            "--freq must lie strictly between 0 and half the sample rate ({} Hz)",
            0.5 * args.sample_rate
        )),
        "slope" => Some("--slope must be positive and small enough for the gain".to_string()),
        "gain_db" | "coefficients" => {
            Some("reduce --gain-db or widen the filter (--q, --bandwidth)".to_string())
        }
        "width" if args.filter.requires_gain() => Some(format!(
            "{} filters need --gain-db (optionally with --slope)",
            args.filter
        )),
        _ => None,
    }
}

/// Designs the filter for a human-readable command, attaching a hint to
/// design errors.
pub(crate) fn design_or_bail(args: &FilterArgs) -> Result<CoefficientPair> {
    args.design().map_err(|err| match design_hint(args, &err) {
        Some(hint) => anyhow::anyhow!("{}\n  hint: {}", err, hint),
        None => anyhow::Error::new(err),
    })
}

/// Converts a design error into its JSON form.
pub(crate) fn design_json_error(args: &FilterArgs, err: &EqError) -> JsonError {
    let error = JsonError::from(err);
    match design_hint(args, err) {
        Some(hint) => error.with_suggestion(hint),
        None => error,
    }
}

/// Prints a JSON document and maps its success flag to an exit code.
pub(crate) fn emit_json<T: Serialize>(output: &CommandOutput<T>) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(output)?);
    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}
