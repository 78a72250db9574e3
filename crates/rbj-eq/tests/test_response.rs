//! Magnitude response integration tests.

use std::f64::consts::{PI, TAU};

use rbj_eq::{design, frequency_response, magnitude, FilterType, WidthSpec};

const TOLERANCE: f64 = 1e-9;

fn sample_points(count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| PI * i as f64 / (count - 1) as f64)
}

fn slope(gain_db: f64, slope: f64) -> WidthSpec {
    WidthSpec::Slope { gain_db, slope }
}

// ============================================================================
// DC and Nyquist behavior
// ============================================================================

#[test]
fn test_lowpass_unity_dc_gain() {
    for fc in [0.01, 0.1, 0.25, 0.4, 0.49] {
        for width in [
            WidthSpec::Q(0.5),
            WidthSpec::Q(0.707),
            WidthSpec::Q(10.0),
            WidthSpec::Bandwidth(0.5),
            WidthSpec::Bandwidth(2.0),
        ] {
            let pair = design(FilterType::LowPass, fc, width).unwrap();
            let dc = magnitude(&pair, 0.0).unwrap();
            assert!(
                (dc - 1.0).abs() < TOLERANCE,
                "fc = {}, width = {:?}: dc gain {}",
                fc,
                width,
                dc
            );
        }
    }
}

#[test]
fn test_highpass_zero_dc_gain() {
    for fc in [0.01, 0.1, 0.25, 0.4] {
        for width in [WidthSpec::Q(0.707), WidthSpec::Bandwidth(1.0)] {
            let pair = design(FilterType::HighPass, fc, width).unwrap();
            let dc = magnitude(&pair, 0.0).unwrap();
            assert!(dc.abs() < TOLERANCE, "fc = {}: dc gain {}", fc, dc);
            let nyquist = magnitude(&pair, PI).unwrap();
            assert!((nyquist - 1.0).abs() < TOLERANCE);
        }
    }
}

#[test]
fn test_lowpass_butterworth_half_power_at_cutoff() {
    let pair = design(
        FilterType::LowPass,
        0.25,
        WidthSpec::Q(std::f64::consts::FRAC_1_SQRT_2),
    )
    .unwrap();
    let at_cutoff = pair.magnitude_at(0.25).unwrap();
    assert!((at_cutoff - std::f64::consts::FRAC_1_SQRT_2).abs() < TOLERANCE);
    assert!(magnitude(&pair, PI).unwrap() < 1e-6);
}

// ============================================================================
// Flat responses
// ============================================================================

#[test]
fn test_allpass_is_flat() {
    for fc in [0.02, 0.15, 0.3, 0.45] {
        for width in [WidthSpec::Q(0.3), WidthSpec::Q(4.0), WidthSpec::Bandwidth(1.5)] {
            let pair = design(FilterType::AllPass, fc, width).unwrap();
            for w in sample_points(16) {
                let m = magnitude(&pair, w).unwrap();
                assert!((m - 1.0).abs() < TOLERANCE, "fc = {}, w = {}: {}", fc, w, m);
            }
        }
    }
}

#[test]
fn test_neutral_peaking_is_flat() {
    for s in [0.1, 0.5, 1.0, 2.0] {
        let pair = design(FilterType::Peaking, 0.12, slope(0.0, s)).unwrap();
        for w in sample_points(16) {
            let m = magnitude(&pair, w).unwrap();
            assert!((m - 1.0).abs() < TOLERANCE, "S = {}, w = {}: {}", s, w, m);
        }
    }
}

#[test]
fn test_neutral_high_shelf_is_flat() {
    let pair = design(FilterType::HighShelf, 0.2, slope(0.0, 1.0)).unwrap();
    for w in sample_points(12) {
        assert!((magnitude(&pair, w).unwrap() - 1.0).abs() < TOLERANCE);
    }
}

// ============================================================================
// Band filters
// ============================================================================

#[test]
fn test_band_pass_c_unity_peak() {
    for q in [0.5, 2.0, 8.0] {
        let pair = design(FilterType::BandPassC, 0.1, WidthSpec::Q(q)).unwrap();
        let peak = pair.magnitude_at(0.1).unwrap();
        assert!((peak - 1.0).abs() < TOLERANCE, "Q = {}: {}", q, peak);
        assert!(magnitude(&pair, 0.0).unwrap() < TOLERANCE);
        assert!(magnitude(&pair, PI).unwrap() < 1e-6);
    }
}

#[test]
fn test_band_pass_q_peak_equals_q() {
    for q in [0.5, 2.0, 8.0] {
        let pair = design(FilterType::BandPassQ, 0.1, WidthSpec::Q(q)).unwrap();
        let peak = pair.magnitude_at(0.1).unwrap();
        assert!((peak - q).abs() < 1e-9 * q.max(1.0), "Q = {}: {}", q, peak);
    }
}

#[test]
fn test_notch_rejects_center() {
    let pair = design(FilterType::BandNotch, 0.1, WidthSpec::Bandwidth(1.0)).unwrap();
    assert!(pair.magnitude_at(0.1).unwrap() < 1e-6);
    assert!((magnitude(&pair, 0.0).unwrap() - 1.0).abs() < TOLERANCE);
    assert!((magnitude(&pair, PI).unwrap() - 1.0).abs() < TOLERANCE);
}

// ============================================================================
// Gain filters
// ============================================================================

#[test]
fn test_peaking_gain_at_center() {
    for gain_db in [-12.0, -3.0, 3.0, 6.0, 15.0] {
        let pair = design(FilterType::Peaking, 0.1, slope(gain_db, 1.0)).unwrap();
        let expected = 10.0_f64.powf(gain_db / 20.0);
        let center = magnitude(&pair, TAU * 0.1).unwrap();
        assert!(
            (center - expected).abs() < 1e-9,
            "gain {} dB: {} vs {}",
            gain_db,
            center,
            expected
        );
        assert!((magnitude(&pair, 0.0).unwrap() - 1.0).abs() < TOLERANCE);
    }
}

#[test]
fn test_peaking_db_helper() {
    let pair = design(FilterType::Peaking, 0.1, slope(6.0, 1.0)).unwrap();
    let db = pair.magnitude_db(TAU * 0.1).unwrap();
    assert!((db - 6.0).abs() < 1e-9);
}

#[test]
fn test_high_shelf_gain_at_nyquist() {
    let pair = design(FilterType::HighShelf, 0.1, slope(6.0, 1.0)).unwrap();
    let expected = 10.0_f64.powf(6.0 / 20.0);
    assert!((magnitude(&pair, PI).unwrap() - expected).abs() < 1e-9);
    assert!((magnitude(&pair, 0.0).unwrap() - 1.0).abs() < 1e-9);
}

#[test]
fn test_low_shelf_response_values() {
    let pair = design(FilterType::LowShelf, 0.1, slope(6.0, 1.0)).unwrap();
    assert!((magnitude(&pair, 0.0).unwrap() - 1.7875404021635326).abs() < 1e-9);
    assert!((magnitude(&pair, PI).unwrap() - 1.5181588948347062).abs() < 1e-9);
}

// ============================================================================
// Gain family without a gain
// ============================================================================

#[test]
fn test_gain_family_with_q_is_domain_error() {
    for ft in FilterType::ALL.iter().filter(|ft| ft.requires_gain()) {
        let err = design(*ft, 0.1, WidthSpec::Q(0.707)).unwrap_err();
        assert_eq!(err.code(), "EQ_003", "{}", ft);
    }
}

// ============================================================================
// Sweeps
// ============================================================================

#[test]
fn test_every_filter_type_has_finite_response() {
    for ft in FilterType::ALL {
        let width = if ft.requires_gain() {
            slope(4.0, 0.8)
        } else {
            WidthSpec::Q(1.2)
        };
        let pair = design(ft, 0.07, width).unwrap();
        let response = frequency_response(&pair, 65).unwrap();
        assert_eq!(response.len(), 65);
        assert_eq!(response[0].0, 0.0);
        assert_eq!(response[64].0, 0.5);
        for (fc, m) in response {
            assert!(m.is_finite() && m >= 0.0, "{} at {}: {}", ft, fc, m);
        }
    }
}

#[test]
fn test_response_is_even_and_periodic() {
    let pair = design(FilterType::Peaking, 0.2, slope(-6.0, 0.7)).unwrap();
    for w in [0.3, 1.1, 2.5] {
        let base = magnitude(&pair, w).unwrap();
        assert!((magnitude(&pair, -w).unwrap() - base).abs() < TOLERANCE);
        assert!((magnitude(&pair, w + TAU).unwrap() - base).abs() < 1e-8);
    }
}
