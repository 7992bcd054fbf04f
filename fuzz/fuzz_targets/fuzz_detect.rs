//! Fuzz target for brand classification.
//!
//! Detection is a total function; no input may panic or return different
//! answers across calls.

#![no_main]

use cardform::{brand_of, detect};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let rule = detect(Some(data));
    let again = detect(Some(data));
    assert_eq!(rule, again);

    // The fallback bounds must always be usable for capping
    assert!(rule.lengths.min <= rule.lengths.max);
    assert!(rule.ccv_length == 3 || rule.ccv_length == 4);

    let _ = brand_of(data);
    let _ = detect(None);
});
