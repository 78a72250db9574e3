//! Sweep command implementation
//!
//! Runs a linear chirp (or a unit impulse) through a filter and prints one
//! filtered sample per line, optionally writing the result to a WAV file.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rbj_eq::CoefficientPair;
use std::path::Path;
use std::process::ExitCode;

use crate::cli_args::FilterArgs;
use crate::signal::{impulse, linear_chirp};

use super::json_output::{
    error_codes, CommandOutput, FilterSummary, JsonError, SignalKind, SweepResult,
};
use super::{design_json_error, design_or_bail, emit_json};

/// Longest signal a sweep will generate (ten minutes at 48 kHz).
pub const MAX_SWEEP_SAMPLES: usize = 28_800_000;

const LENGTH_HINT: &str = "pass a smaller --samples or --sample-rate";

/// Excitation settings for a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSignal {
    pub kind: SignalKind,
    /// Number of samples to generate
    pub len: usize,
    pub start_hz: f64,
    pub end_hz: f64,
}

impl SweepSignal {
    /// Builds the settings from command-line values; the length defaults to
    /// one second of audio.
    pub fn new(
        samples: Option<usize>,
        start_hz: f64,
        end_hz: f64,
        use_impulse: bool,
        sample_rate: f64,
    ) -> Self {
        Self {
            kind: if use_impulse {
                SignalKind::Impulse
            } else {
                SignalKind::Chirp
            },
            len: samples.unwrap_or(sample_rate.round().max(0.0) as usize),
            start_hz,
            end_hz,
        }
    }

    /// Checks that the signal fits under [`MAX_SWEEP_SAMPLES`].
    pub fn check_len(&self) -> Result<()> {
        if self.len > MAX_SWEEP_SAMPLES {
            bail!(
                "Sweep of {} samples exceeds the limit of {} samples",
                self.len,
                MAX_SWEEP_SAMPLES
            );
        }
        Ok(())
    }

    /// Generates the excitation signal.
    pub fn generate(&self, sample_rate: f64) -> Vec<f64> {
        match self.kind {
            SignalKind::Chirp => linear_chirp(self.start_hz, self.end_hz, sample_rate, self.len),
            SignalKind::Impulse => impulse(self.len),
        }
    }
}

/// Run the sweep command
///
/// # Arguments
/// * `args` - Filter design arguments
/// * `signal` - Excitation settings
/// * `wav` - Optional WAV output path
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    args: &FilterArgs,
    signal: &SweepSignal,
    wav: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(args, signal, wav)
    } else {
        run_human(args, signal, wav)
    }
}

/// Run sweep with human-readable output
///
/// Samples go to stdout one per line so the output can be piped; the colored
/// summary goes to stderr.
fn run_human(args: &FilterArgs, signal: &SweepSignal, wav: Option<&str>) -> Result<ExitCode> {
    let pair = design_or_bail(args)?;
    signal
        .check_len()
        .map_err(|e| anyhow::anyhow!("{}\n  hint: {}", e, LENGTH_HINT))?;
    let output = filter_signal(&pair, &signal.generate(args.sample_rate));

    if let Some(path) = wav {
        write_wav(Path::new(path), &output, args.sample_rate)?;
    }

    for y in &output {
        println!("{}", y);
    }

    eprintln!(
        "{} {} samples through {} @ {} Hz",
        "Filtered".green().bold(),
        output.len(),
        args.filter,
        args.freq
    );
    if let Some(path) = wav {
        eprintln!("  {} {}", "Wrote:".dimmed(), path);
    }

    Ok(ExitCode::SUCCESS)
}

/// Run sweep with machine-readable JSON output
fn run_json(args: &FilterArgs, signal: &SweepSignal, wav: Option<&str>) -> Result<ExitCode> {
    let pair = match args.design() {
        Ok(pair) => pair,
        Err(err) => {
            let output: CommandOutput<SweepResult> =
                CommandOutput::failure(vec![design_json_error(args, &err)]);
            return emit_json(&output);
        }
    };
    if let Err(e) = signal.check_len() {
        let error = JsonError::new(error_codes::SIGNAL_LENGTH, e.to_string())
            .with_suggestion(LENGTH_HINT);
        let output: CommandOutput<SweepResult> = CommandOutput::failure(vec![error]);
        return emit_json(&output);
    }
    let samples = filter_signal(&pair, &signal.generate(args.sample_rate));

    if let Some(path) = wav {
        if let Err(e) = write_wav(Path::new(path), &samples, args.sample_rate) {
            let error = JsonError::new(error_codes::WAV_WRITE, format!("{:#}", e)).with_suggestion(
                "check that the output directory exists and that --sample-rate fits a WAV header",
            );
            let output: CommandOutput<SweepResult> = CommandOutput::failure(vec![error]);
            return emit_json(&output);
        }
    }

    emit_json(&CommandOutput::success(SweepResult {
        filter: FilterSummary::from(args),
        signal: signal.kind,
        wav: wav.map(str::to_string),
        samples,
    }))
}

/// Runs `input` through a fresh filter built from `pair`.
pub fn filter_signal(pair: &CoefficientPair, input: &[f64]) -> Vec<f64> {
    pair.to_filter().process_buffer_copy(input)
}

/// Writes mono samples as a 32-bit float WAV file.
pub fn write_wav(path: &Path, samples: &[f64], sample_rate: f64) -> Result<()> {
    let rounded = sample_rate.round();
    if !(1.0..=f64::from(u32::MAX)).contains(&rounded) {
        bail!(
            "Sample rate {} Hz cannot be stored in a WAV header",
            sample_rate
        );
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: rounded as u32,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;
    for &sample in samples {
        writer
            .write_sample(sample as f32)
            .with_context(|| format!("Failed to write WAV file: {}", path.display()))?;
    }
    writer
        .finalize()
        .with_context(|| format!("Failed to finalize WAV file: {}", path.display()))?;
    Ok(())
}
