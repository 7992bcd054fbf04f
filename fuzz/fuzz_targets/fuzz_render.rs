//! Fuzz target for view rendering and HTML serialization.
//!
//! Arbitrary record contents must render without panicking and without
//! leaking unescaped markup.

#![no_main]

use cardform::{render, CardFieldValues, CardInputState, FormConfig, RuleTable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let values = CardFieldValues {
        number: Some(data.to_string()),
        name: Some(data.to_string()),
        month: Some(data.to_string()),
        year: Some(data.to_string()),
        ccv: Some(data.to_string()),
    };

    let mut state = CardInputState::new();
    for _ in 0..2 {
        let tree = render(
            &FormConfig::default(),
            &values,
            &state,
            &RuleTable::default(),
        );
        let html = tree.to_html();

        // Field values may not smuggle tags into the output
        assert!(!html.contains("<script"));
        state.focus_ccv();
    }
});
