//! Transfer command implementation
//!
//! Evaluates the closed-form magnitude response of a filter at evenly spaced
//! frequencies from DC to Nyquist.

use anyhow::Result;
use colored::Colorize;
use rbj_eq::{frequency_response, CoefficientPair, EqResult};
use std::process::ExitCode;

use crate::cli_args::FilterArgs;

use super::coeffs::print_filter_header;
use super::json_output::{
    CommandOutput, FilterSummary, MagnitudeUnit, TransferPoint, TransferResult,
};
use super::{design_json_error, design_or_bail, emit_json};

/// Run the transfer command
///
/// # Arguments
/// * `args` - Filter design arguments
/// * `points` - Number of frequencies to evaluate (at least 2)
/// * `db` - Report magnitudes in decibels
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &FilterArgs, points: usize, db: bool, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args, points, db)
    } else {
        run_human(args, points, db)
    }
}

/// Run transfer with human-readable (colored) output
fn run_human(args: &FilterArgs, points: usize, db: bool) -> Result<ExitCode> {
    let pair = design_or_bail(args)?;
    let unit = unit_for(db);
    let rows = transfer_points(&pair, args.sample_rate, points, unit)?;

    print_filter_header(args);
    let heading = match unit {
        MagnitudeUnit::Linear => "Magnitude response:",
        MagnitudeUnit::Db => "Magnitude response (dB):",
    };
    println!("\n{}", heading.cyan().bold());
    for row in &rows {
        println!(
            "{:>12.3} {}",
            row.frequency_hz,
            format_magnitude(row.magnitude, unit)
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Run transfer with machine-readable JSON output
fn run_json(args: &FilterArgs, points: usize, db: bool) -> Result<ExitCode> {
    let unit = unit_for(db);
    let result = args.design().and_then(|pair| {
        transfer_points(&pair, args.sample_rate, points, unit).map(|rows| TransferResult {
            filter: FilterSummary::from(args),
            unit,
            points: rows,
        })
    });
    let output = match result {
        Ok(result) => CommandOutput::success(result),
        Err(err) => CommandOutput::failure(vec![design_json_error(args, &err)]),
    };
    emit_json(&output)
}

fn unit_for(db: bool) -> MagnitudeUnit {
    if db {
        MagnitudeUnit::Db
    } else {
        MagnitudeUnit::Linear
    }
}

/// Evaluates `points` frequencies spanning `[0, sample_rate / 2]`.
///
/// Magnitudes that are not finite are reported as `None`.
pub fn transfer_points(
    pair: &CoefficientPair,
    sample_rate: f64,
    points: usize,
    unit: MagnitudeUnit,
) -> EqResult<Vec<TransferPoint>> {
    let response = frequency_response(pair, points)?;
    Ok(response
        .into_iter()
        .map(|(fc, magnitude)| TransferPoint {
            frequency_hz: fc * sample_rate,
            normalized_freq: fc,
            magnitude: Some(match unit {
                MagnitudeUnit::Linear => magnitude,
                MagnitudeUnit::Db => 20.0 * magnitude.log10(),
            })
            .filter(|m| m.is_finite()),
        })
        .collect())
}

fn format_magnitude(value: Option<f64>, unit: MagnitudeUnit) -> String {
    match (value, unit) {
        (Some(m), _) => format!("{:.9}", m),
        (None, MagnitudeUnit::Db) => "-inf".to_string(),
        (None, MagnitudeUnit::Linear) => "inf".to_string(),
    }
}
