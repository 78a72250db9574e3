//! Biquad coefficient design using the Audio EQ Cookbook formulas.
//!
//! All frequencies are normalized: `fc` is in cycles per sample and must lie
//! in the open interval (0, 0.5).

use std::f64::consts::TAU;

use crate::coeffs::CoefficientPair;
use crate::error::{EqError, EqResult};
use crate::filter::FilterState;
use crate::types::{FilterType, WidthSpec};
use crate::validation::{validate_finite, validate_normalized_frequency, validate_positive};

/// Bandwidth term and, for slope widths, the square root of the linear gain.
struct ResolvedWidth {
    alpha: f64,
    sqrt_gain: Option<f64>,
}

fn validate_width(width: &WidthSpec) -> EqResult<()> {
    match *width {
        WidthSpec::Q(q) => validate_positive("q", q),
        WidthSpec::Bandwidth(bw) => validate_positive("bandwidth", bw),
        WidthSpec::Slope { gain_db, slope } => {
            validate_finite("gain_db", gain_db)?;
            validate_positive("slope", slope)
        }
    }
}

fn resolve_width(width: WidthSpec, w0: f64, sin_w0: f64) -> EqResult<ResolvedWidth> {
    let resolved = match width {
        WidthSpec::Q(q) => ResolvedWidth {
            alpha: 0.5 * sin_w0 / q,
            sqrt_gain: None,
        },
        WidthSpec::Bandwidth(bw) => ResolvedWidth {
            alpha: sin_w0 * (0.5 * 2.0_f64.ln() * bw * w0 / sin_w0).sinh(),
            sqrt_gain: None,
        },
        WidthSpec::Slope { gain_db, slope } => {
            let a0 = 10.0_f64.powf(gain_db / 80.0);
            let a = a0 * a0;
            if !a.is_finite() || a == 0.0 {
                return Err(EqError::domain(
                    "gain_db",
                    format!("a gain of {} dB is outside the representable range", gain_db),
                ));
            }
            let radicand = (a + 1.0 / a) * (1.0 / slope - 1.0) + 2.0;
            // Steep slopes are only realizable for small gains.
            if radicand.is_nan() || radicand < 0.0 {
                return Err(EqError::domain(
                    "slope",
                    format!("slope {} is too steep for a gain of {} dB", slope, gain_db),
                ));
            }
            ResolvedWidth {
                alpha: sin_w0 * 0.5 * radicand.sqrt(),
                sqrt_gain: Some(a0),
            }
        }
    };
    if !resolved.alpha.is_finite() {
        return Err(EqError::domain(
            width.kind(),
            format!("{:?} gives a non-finite alpha at w0 = {}", width, w0),
        ));
    }
    Ok(resolved)
}

/// Computes raw biquad coefficients for a filter shape.
///
/// # Arguments
/// * `filter_type` - Filter topology
/// * `fc` - Center (or corner) frequency in cycles/sample, in (0, 0.5)
/// * `width` - Width specification; EQ filters (peaking and shelves) require
///   [`WidthSpec::Slope`]
///
/// # Returns
/// A [`CoefficientPair`] whose denominator still carries `a0`.
///
/// # Errors
/// [`EqError::NumericDomain`] if `fc` is outside (0, 0.5), a width parameter
/// is out of range or not finite, a slope is too steep for its gain, an
/// EQ filter is given a width without a gain, or the parameters overflow to
/// non-finite coefficients.
///
/// # Example
/// ```
/// use rbj_eq::{design, FilterType, WidthSpec};
///
/// let pair = design(FilterType::Peaking, 0.05, WidthSpec::Slope { gain_db: 6.0, slope: 1.0 })
///     .unwrap();
/// let peak = pair.magnitude_at(0.05).unwrap();
/// assert!((peak - 10.0_f64.powf(6.0 / 20.0)).abs() < 1e-9);
/// ```
pub fn design(filter_type: FilterType, fc: f64, width: WidthSpec) -> EqResult<CoefficientPair> {
    validate_normalized_frequency("fc", fc)?;
    validate_width(&width)?;

    let w0 = TAU * fc;
    let sin_w0 = w0.sin();
    let cos_w0 = w0.cos();
    let cos_2m = -2.0 * cos_w0;
    let ResolvedWidth { alpha, sqrt_gain } = resolve_width(width, w0, sin_w0)?;

    let sin_p2 = 0.5 * sin_w0;
    let sin_m2 = -sin_p2;
    let cos_1m = 1.0 - cos_w0;
    let cos_1pm = -(1.0 + cos_w0);
    let cos_1m2 = 0.5 * cos_1m;
    let cos_1p2 = 0.5 + 0.5 * cos_w0;
    let basic = [1.0 + alpha, cos_2m, 1.0 - alpha];

    let gain_factor = || {
        sqrt_gain.ok_or_else(|| {
            EqError::domain(
                "width",
                format!(
                    "{} requires a slope width with a gain, got {}",
                    filter_type,
                    width.kind()
                ),
            )
        })
    };

    let (numerator, denominator) = match filter_type {
        FilterType::LowPass => ([cos_1m2, cos_1m, cos_1m2], basic),
        FilterType::HighPass => ([cos_1p2, cos_1pm, cos_1p2], basic),
        FilterType::BandPassQ => ([sin_p2, 0.0, sin_m2], basic),
        FilterType::BandPassC => ([alpha, 0.0, -alpha], basic),
        FilterType::BandNotch => ([1.0, cos_2m, 1.0], basic),
        FilterType::AllPass => ([1.0 - alpha, cos_2m, 1.0 + alpha], basic),
        FilterType::Peaking => {
            let a0 = gain_factor()?;
            let a = a0 * a0;
            (
                [1.0 + alpha * a, cos_2m, 1.0 - alpha * a],
                [1.0 + alpha / a, cos_2m, 1.0 - alpha / a],
            )
        }
        FilterType::LowShelf => {
            let shelf = ShelfTerms::new(gain_factor()?, alpha, cos_w0);
            let ShelfTerms { a, ap, am, apc, amc, s2 } = shelf;
            (
                [
                    a * (ap - amc + s2),
                    2.0 * a * (am - apc),
                    a * (ap - amc + s2),
                ],
                [ap + amc + s2, 2.0 * (am - apc), ap + amc - s2],
            )
        }
        FilterType::HighShelf => {
            let shelf = ShelfTerms::new(gain_factor()?, alpha, cos_w0);
            let ShelfTerms { a, ap, am, apc, amc, s2 } = shelf;
            (
                [
                    a * (ap + amc + s2),
                    -2.0 * a * (am + apc),
                    a * (ap + amc - s2),
                ],
                [ap - amc + s2, 2.0 * (am - apc), ap - amc - s2],
            )
        }
    };

    if numerator.iter().chain(&denominator).any(|c| !c.is_finite()) {
        return Err(EqError::domain(
            "coefficients",
            format!("{} design overflowed for {:?} at fc = {}", filter_type, width, fc),
        ));
    }
    Ok(CoefficientPair::new(numerator, denominator))
}

/// Shared sub-terms of the shelf formulas, from the square root of the linear gain.
struct ShelfTerms {
    a: f64,
    ap: f64,
    am: f64,
    apc: f64,
    amc: f64,
    s2: f64,
}

impl ShelfTerms {
    fn new(sqrt_gain: f64, alpha: f64, cos_w0: f64) -> Self {
        let a = sqrt_gain * sqrt_gain;
        let ap = a + 1.0;
        let am = a - 1.0;
        Self {
            a,
            ap,
            am,
            apc: ap * cos_w0,
            amc: am * cos_w0,
            s2: 2.0 * sqrt_gain * alpha,
        }
    }
}

/// Designs a filter and returns it ready to process samples.
///
/// Shorthand for [`design`] followed by [`FilterState::from_coefficients`].
pub fn design_filter(filter_type: FilterType, fc: f64, width: WidthSpec) -> EqResult<FilterState> {
    design(filter_type, fc, width).map(FilterState::from_coefficients)
}
