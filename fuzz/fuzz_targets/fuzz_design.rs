#![no_main]

use libfuzzer_sys::fuzz_target;
use rbj_eq::{design, magnitude, FilterType, WidthSpec};

fn f64_at(data: &[u8], index: usize) -> f64 {
    let mut bytes = [0u8; 8];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = data.get(index * 8 + i).copied().unwrap_or(0);
    }
    f64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let filter_type = FilterType::ALL[selector as usize % FilterType::ALL.len()];
    let fc = f64_at(rest, 0);
    let width = match (selector / 16) % 3 {
        0 => WidthSpec::Q(f64_at(rest, 1)),
        1 => WidthSpec::Bandwidth(f64_at(rest, 1)),
        _ => WidthSpec::Slope {
            gain_db: f64_at(rest, 1),
            slope: f64_at(rest, 2),
        },
    };

    // Any input either fails with an error or yields a usable filter.
    let Ok(pair) = design(filter_type, fc, width) else {
        return;
    };
    assert!(
        pair.numerator()
            .iter()
            .chain(pair.denominator())
            .all(|c| c.is_finite()),
        "{:?} {} {:?} gave {:?}",
        filter_type,
        fc,
        width,
        pair
    );
    let _ = magnitude(&pair, f64_at(rest, 3));

    let mut filter = pair.to_filter();
    for i in 0..16 {
        let _ = filter.step(f64_at(rest, 4 + i));
    }
});
