//! CLI argument definitions for the rbj-eq command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use rbj_eq::validation::validate_positive;
use rbj_eq::{design, CoefficientPair, EqResult, FilterType, WidthSpec};

/// rbj-eq - RBJ cookbook biquad filters
#[derive(Parser)]
#[command(name = "rbj-eq")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a linear chirp (or an impulse) through a filter and print the output
    Sweep {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of samples to generate (default: one second)
        #[arg(long)]
        samples: Option<usize>,

        /// Chirp start frequency in Hz
        #[arg(long, default_value_t = 100.0)]
        start_freq: f64,

        /// Chirp end frequency in Hz
        #[arg(long, default_value_t = 23_900.0)]
        end_freq: f64,

        /// Use a unit impulse instead of the chirp
        #[arg(long)]
        impulse: bool,

        /// Also write the filtered signal to a 32-bit float WAV file
        #[arg(long)]
        wav: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the magnitude response of a filter from DC to Nyquist
    Transfer {
        #[command(flatten)]
        filter: FilterArgs,

        /// Number of evenly spaced frequencies to evaluate
        #[arg(long, default_value_t = 64)]
        points: usize,

        /// Print magnitudes in decibels
        #[arg(long)]
        db: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the raw and normalized coefficients of a filter
    Coeffs {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

/// Filter design arguments shared by every command.
#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Filter type (low_pass, high_pass, band_pass_q, band_pass_c, band_notch,
    /// all_pass, peaking, low_shelf, high_shelf)
    #[arg(long)]
    pub filter: FilterType,

    /// Center or corner frequency in Hz
    #[arg(long)]
    pub freq: f64,

    /// Sample rate in Hz
    #[arg(long, default_value_t = 48_000.0)]
    pub sample_rate: f64,

    #[command(flatten)]
    pub width: WidthArgs,

    /// Shelf/peak slope, used together with --gain-db
    #[arg(long, default_value_t = 1.0)]
    pub slope: f64,
}

/// Filter width: exactly one of Q, bandwidth, or gain (with --slope).
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct WidthArgs {
    /// Quality factor
    #[arg(long)]
    pub q: Option<f64>,

    /// Bandwidth in octaves
    #[arg(long)]
    pub bandwidth: Option<f64>,

    /// Gain in dB for peaking and shelf filters
    #[arg(long, allow_hyphen_values = true)]
    pub gain_db: Option<f64>,
}

impl FilterArgs {
    /// Center frequency in cycles per sample.
    pub fn normalized_freq(&self) -> f64 {
        self.freq / self.sample_rate
    }

    /// Builds the width specification from whichever width flag was given.
    pub fn width_spec(&self) -> WidthSpec {
        match (self.width.q, self.width.bandwidth, self.width.gain_db) {
            (Some(q), _, _) => WidthSpec::Q(q),
            (None, Some(bw), _) => WidthSpec::Bandwidth(bw),
            (None, None, gain_db) => WidthSpec::Slope {
                gain_db: gain_db.unwrap_or(0.0),
                slope: self.slope,
            },
        }
    }

    /// Designs the coefficient pair described by these arguments.
    pub fn design(&self) -> EqResult<CoefficientPair> {
        validate_positive("sample_rate", self.sample_rate)?;
        design(self.filter, self.normalized_freq(), self.width_spec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_cli_parses_sweep() {
        let cli = parse(&[
            "rbj-eq",
            "sweep",
            "--filter",
            "band_pass_q",
            "--freq",
            "1000",
            "--q",
            "1.414",
        ]);
        match cli.command {
            Commands::Sweep {
                filter,
                samples,
                start_freq,
                end_freq,
                impulse,
                wav,
                json,
            } => {
                assert_eq!(filter.filter, FilterType::BandPassQ);
                assert_eq!(filter.freq, 1000.0);
                assert_eq!(filter.sample_rate, 48_000.0);
                assert_eq!(filter.width_spec(), WidthSpec::Q(1.414));
                assert_eq!(samples, None);
                assert_eq!(start_freq, 100.0);
                assert_eq!(end_freq, 23_900.0);
                assert!(!impulse);
                assert!(wav.is_none());
                assert!(!json);
            }
            _ => panic!("expected sweep command"),
        }
    }

    #[test]
    fn test_cli_parses_transfer_with_negative_gain() {
        let cli = parse(&[
            "rbj-eq",
            "transfer",
            "--filter",
            "peaking",
            "--freq",
            "2400",
            "--sample-rate",
            "24000",
            "--gain-db",
            "-6",
            "--slope",
            "0.5",
            "--points",
            "16",
            "--db",
        ]);
        match cli.command {
            Commands::Transfer {
                filter,
                points,
                db,
                json,
            } => {
                assert_eq!(filter.normalized_freq(), 0.1);
                assert_eq!(
                    filter.width_spec(),
                    WidthSpec::Slope {
                        gain_db: -6.0,
                        slope: 0.5
                    }
                );
                assert_eq!(points, 16);
                assert!(db);
                assert!(!json);
            }
            _ => panic!("expected transfer command"),
        }
    }

    #[test]
    fn test_cli_accepts_lenient_filter_names() {
        let cli = parse(&[
            "rbj-eq", "coeffs", "--filter", "High-Shelf", "--freq", "500", "--gain-db", "3",
        ]);
        match cli.command {
            Commands::Coeffs { filter, .. } => assert_eq!(filter.filter, FilterType::HighShelf),
            _ => panic!("expected coeffs command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_filter() {
        let err = Cli::try_parse_from([
            "rbj-eq", "coeffs", "--filter", "comb", "--freq", "500", "--q", "1",
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("comb"));
    }

    #[test]
    fn test_cli_requires_a_width() {
        let result = Cli::try_parse_from(["rbj-eq", "coeffs", "--filter", "low_pass", "--freq", "500"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_rejects_two_widths() {
        let result = Cli::try_parse_from([
            "rbj-eq",
            "coeffs",
            "--filter",
            "low_pass",
            "--freq",
            "500",
            "--q",
            "0.7",
            "--bandwidth",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_filter_args_design() {
        let cli = parse(&[
            "rbj-eq", "coeffs", "--filter", "low_pass", "--freq", "4800", "--q", "0.70710678",
        ]);
        let Commands::Coeffs { filter, .. } = cli.command else {
            panic!("expected coeffs command");
        };
        let pair = filter.design().unwrap();
        let expected = design(FilterType::LowPass, 0.1, WidthSpec::Q(0.70710678)).unwrap();
        assert_eq!(pair, expected);
    }

    #[test]
    fn test_filter_args_design_rejects_nyquist() {
        let cli = parse(&[
            "rbj-eq", "coeffs", "--filter", "low_pass", "--freq", "24000", "--q", "0.7",
        ]);
        let Commands::Coeffs { filter, .. } = cli.command else {
            panic!("expected coeffs command");
        };
        assert_eq!(filter.design().unwrap_err().code(), "EQ_003");
    }

    #[test]
    fn test_filter_args_design_rejects_zero_sample_rate() {
        let cli = parse(&[
            "rbj-eq", "coeffs", "--filter", "low_pass", "--freq", "100", "--sample-rate", "0",
            "--q", "0.7",
        ]);
        let Commands::Coeffs { filter, .. } = cli.command else {
            panic!("expected coeffs command");
        };
        let err = filter.design().unwrap_err();
        assert!(err.to_string().contains("sample_rate"), "{}", err);
    }
}
