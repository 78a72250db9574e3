//! rbj-eq CLI - Command-line interface for RBJ cookbook biquad filters
//!
//! This binary designs a filter from command-line arguments and either runs a
//! test signal through it, prints its magnitude response, or dumps its
//! coefficients.

use clap::Parser;
use std::process::ExitCode;

use rbj_eq_cli::cli_args::{Cli, Commands};
use rbj_eq_cli::commands;
use rbj_eq_cli::commands::sweep::SweepSignal;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Sweep {
            filter,
            samples,
            start_freq,
            end_freq,
            impulse,
            wav,
            json,
        } => {
            let signal = SweepSignal::new(samples, start_freq, end_freq, impulse, filter.sample_rate);
            commands::sweep::run(&filter, &signal, wav.as_deref(), json)
        }
        Commands::Transfer {
            filter,
            points,
            db,
            json,
        } => commands::transfer::run(&filter, points, db, json),
        Commands::Coeffs { filter, json } => commands::coeffs::run(&filter, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
