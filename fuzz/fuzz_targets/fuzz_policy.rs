//! Fuzz target for the input masking policy and update loop.
//!
//! No edit sequence may panic, and a rejected edit must leave the record
//! untouched.

#![no_main]

use cardform::{
    apply, detect, policy, CardFieldValues, CardInputState, Msg, RuleTable,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let rule = detect(Some(data));
    let masked = policy::mask_number(rule, data);
    assert!(masked.len() <= policy::number_capacity(rule));
    assert_eq!(policy::mask_number(rule, &masked), masked);

    let _ = policy::mask_ccv(rule, data);
    let _ = policy::accept_month(data);
    let _ = policy::accept_year(data);

    // Drive the whole update loop with the same hostile string
    let table = RuleTable::default();
    let mut state = CardInputState::new();
    let mut values = CardFieldValues::new();
    for msg in [
        Msg::NumberEdited(data.to_string()),
        Msg::MonthEdited(data.to_string()),
        Msg::YearEdited(data.to_string()),
        Msg::CcvEdited(data.to_string()),
        Msg::NameEdited(data.to_string()),
    ] {
        let before = values.clone();
        let (next, outcome) = apply(&msg, &values, &mut state, &table);
        if !outcome.is_applied() {
            assert_eq!(next, before);
        }
        values = next;
    }
});
