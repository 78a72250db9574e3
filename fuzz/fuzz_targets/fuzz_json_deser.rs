#![no_main]

use libfuzzer_sys::fuzz_target;
use rbj_eq::{design, CoefficientPair, FilterType, WidthSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary JSON must never panic the deserializers.
    let _ = serde_json::from_str::<FilterType>(text);
    let _ = serde_json::from_str::<CoefficientPair>(text);

    if let Ok(width) = serde_json::from_str::<WidthSpec>(text) {
        for filter_type in FilterType::ALL {
            let _ = design(filter_type, 0.1, width);
        }
    }

    // Lenient name parsing is total.
    let _ = text.parse::<FilterType>();
});
