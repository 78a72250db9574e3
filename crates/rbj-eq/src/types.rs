//! Filter shape and width specification types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EqError, EqResult};

/// Filter topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterType {
    /// Low-pass filter.
    LowPass,
    /// High-pass filter.
    HighPass,
    /// Band-pass filter with constant skirt gain (peak gain = Q).
    BandPassQ,
    /// Band-pass filter with constant 0 dB peak gain.
    BandPassC,
    /// Band-reject (notch) filter.
    BandNotch,
    /// All-pass filter.
    AllPass,
    /// Peaking EQ filter.
    Peaking,
    /// Low shelf filter.
    LowShelf,
    /// High shelf filter.
    HighShelf,
}

/// Grouping of filter types by whether they take a gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterFamily {
    /// Gain-independent filters; accept any width form.
    Basic,
    /// EQ filters; require [`WidthSpec::Slope`] to supply a gain.
    Gain,
}

impl FilterType {
    /// All filter types, basic family first.
    pub const ALL: [FilterType; 9] = [
        FilterType::LowPass,
        FilterType::HighPass,
        FilterType::BandPassQ,
        FilterType::BandPassC,
        FilterType::BandNotch,
        FilterType::AllPass,
        FilterType::Peaking,
        FilterType::LowShelf,
        FilterType::HighShelf,
    ];

    /// Returns the snake_case name used for parsing and serialization.
    pub fn name(&self) -> &'static str {
        match self {
            FilterType::LowPass => "low_pass",
            FilterType::HighPass => "high_pass",
            FilterType::BandPassQ => "band_pass_q",
            FilterType::BandPassC => "band_pass_c",
            FilterType::BandNotch => "band_notch",
            FilterType::AllPass => "all_pass",
            FilterType::Peaking => "peaking",
            FilterType::LowShelf => "low_shelf",
            FilterType::HighShelf => "high_shelf",
        }
    }

    /// Returns the family this filter type belongs to.
    pub fn family(&self) -> FilterFamily {
        match self {
            FilterType::LowPass
            | FilterType::HighPass
            | FilterType::BandPassQ
            | FilterType::BandPassC
            | FilterType::BandNotch
            | FilterType::AllPass => FilterFamily::Basic,
            FilterType::Peaking | FilterType::LowShelf | FilterType::HighShelf => {
                FilterFamily::Gain
            }
        }
    }

    /// Returns true if this filter type needs a gain (and so a slope width).
    pub fn requires_gain(&self) -> bool {
        self.family() == FilterFamily::Gain
    }
}

impl fmt::Display for FilterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterType {
    type Err = EqError;

    /// Parses a filter name. Hyphens and case are ignored, so `"Low-Pass"`
    /// and `"low_pass"` are equivalent.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FilterType::ALL
            .iter()
            .copied()
            .find(|ft| ft.name() == normalized)
            .ok_or_else(|| EqError::InvalidFilterType {
                name: s.to_string(),
            })
    }
}

/// Width (and, for EQ filters, gain) specification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthSpec {
    /// Quality factor, q > 0.
    Q(f64),
    /// Bandwidth in octaves.
    Bandwidth(f64),
    /// Peak/shelf gain in dB together with the shelf slope S > 0.
    Slope {
        /// Gain in dB.
        gain_db: f64,
        /// Shelf slope; 1.0 is the steepest slope that stays monotonic.
        slope: f64,
    },
}

impl WidthSpec {
    /// Builds a width from a tag and its positional parameters.
    ///
    /// Accepted tags are `q` (one parameter), `bw` or `bandwidth` (one
    /// parameter) and `slope` (gain in dB, then slope).
    ///
    /// # Example
    /// ```
    /// use rbj_eq::WidthSpec;
    ///
    /// let width = WidthSpec::from_tag("slope", &[6.0, 1.0]).unwrap();
    /// assert_eq!(width, WidthSpec::Slope { gain_db: 6.0, slope: 1.0 });
    /// assert!(WidthSpec::from_tag("octaves", &[1.0]).is_err());
    /// ```
    pub fn from_tag(tag: &str, params: &[f64]) -> EqResult<Self> {
        let kind = tag.trim().to_ascii_lowercase();
        let expected = match kind.as_str() {
            "q" | "bw" | "bandwidth" => 1,
            "slope" => 2,
            _ => {
                return Err(EqError::InvalidWidthKind {
                    kind: tag.to_string(),
                })
            }
        };
        if params.len() != expected {
            return Err(EqError::domain(
                kind,
                format!("expected {} parameter(s), got {}", expected, params.len()),
            ));
        }
        Ok(match kind.as_str() {
            "q" => WidthSpec::Q(params[0]),
            "slope" => WidthSpec::Slope {
                gain_db: params[0],
                slope: params[1],
            },
            _ => WidthSpec::Bandwidth(params[0]),
        })
    }

    /// Returns the tag name of this width form.
    pub fn kind(&self) -> &'static str {
        match self {
            WidthSpec::Q(_) => "q",
            WidthSpec::Bandwidth(_) => "bandwidth",
            WidthSpec::Slope { .. } => "slope",
        }
    }

    /// Returns the gain in dB, if this width form carries one.
    pub fn gain_db(&self) -> Option<f64> {
        match self {
            WidthSpec::Slope { gain_db, .. } => Some(*gain_db),
            WidthSpec::Q(_) | WidthSpec::Bandwidth(_) => None,
        }
    }
}
