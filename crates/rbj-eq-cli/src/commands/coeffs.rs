//! Coeffs command implementation
//!
//! Prints the raw coefficient pair of a designed filter together with its
//! normalized form (everything divided through by `a0`).

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;

use crate::cli_args::FilterArgs;

use super::json_output::{CoeffsResult, CommandOutput, FilterSummary};
use super::{design_json_error, design_or_bail, emit_json};

/// Run the coeffs command
///
/// # Arguments
/// * `args` - Filter design arguments
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(args: &FilterArgs, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(args)
    } else {
        run_human(args)
    }
}

/// Run coeffs with human-readable (colored) output
fn run_human(args: &FilterArgs) -> Result<ExitCode> {
    let pair = design_or_bail(args)?;
    let normalized = pair.normalized();

    print_filter_header(args);

    println!("\n{}", "Raw coefficients:".cyan().bold());
    println!("  {} {}", "b:".dimmed(), format_triple(pair.numerator()));
    println!("  {} {}", "a:".dimmed(), format_triple(pair.denominator()));

    println!("\n{}", "Normalized (a0 = 1):".cyan().bold());
    println!("  {} {:.12}", "g: ".dimmed(), normalized.g);
    println!("  {} {:.12}", "b1:".dimmed(), normalized.b1);
    println!("  {} {:.12}", "b2:".dimmed(), normalized.b2);
    println!("  {} {:.12}", "a1:".dimmed(), normalized.a1);
    println!("  {} {:.12}", "a2:".dimmed(), normalized.a2);

    Ok(ExitCode::SUCCESS)
}

/// Run coeffs with machine-readable JSON output
fn run_json(args: &FilterArgs) -> Result<ExitCode> {
    let output = match args.design() {
        Ok(pair) => CommandOutput::success(CoeffsResult {
            filter: FilterSummary::from(args),
            raw: pair,
            normalized: pair.normalized(),
        }),
        Err(err) => CommandOutput::failure(vec![design_json_error(args, &err)]),
    };
    emit_json(&output)
}

/// Prints the colored filter description shared by the human-readable commands.
pub(crate) fn print_filter_header(args: &FilterArgs) {
    println!(
        "{} {} @ {} Hz",
        "Filter:".cyan().bold(),
        args.filter.to_string().green(),
        args.freq
    );
    println!(
        "  {} {} Hz (fc = {:.6})",
        "Sample rate:".dimmed(),
        args.sample_rate,
        args.normalized_freq()
    );
    println!("  {} {:?}", "Width:".dimmed(), args.width_spec());
}

fn format_triple(values: &[f64; 3]) -> String {
    format!("[{:.12}, {:.12}, {:.12}]", values[0], values[1], values[2])
}
