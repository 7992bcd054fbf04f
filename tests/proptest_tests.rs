//! Property-based tests using proptest.
//!
//! The core contract here is totality: classification, masking, and
//! rendering must accept any string the host throws at them, produce the
//! same answer every time, and never panic.

use cardform::{
    apply, detect, policy, render, CardBrand, CardFieldValues, CardInputState, FormConfig,
    Msg, RuleTable,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Digit strings of a length within range.
fn digit_string(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    range.prop_flat_map(|len| {
        proptest::collection::vec(proptest::char::range('0', '9'), len)
            .prop_map(|chars| chars.into_iter().collect())
    })
}

/// A known-brand prefix plus its expected classification.
fn branded_prefix() -> impl Strategy<Value = (String, CardBrand)> {
    prop_oneof![
        Just(("4".to_string(), CardBrand::Visa)),
        (51u32..=55).prop_map(|p| (p.to_string(), CardBrand::Mastercard)),
        (2221u32..=2720).prop_map(|p| (p.to_string(), CardBrand::Mastercard)),
        prop_oneof![Just(34u32), Just(37u32)].prop_map(|p| (p.to_string(), CardBrand::Amex)),
        prop_oneof![
            Just("6011".to_string()),
            (644u32..=649).prop_map(|p| p.to_string()),
            Just("65".to_string()),
        ]
        .prop_map(|p| (p, CardBrand::Discover)),
        prop_oneof![
            (300u32..=305).prop_map(|p| p.to_string()),
            Just("36".to_string()),
            Just("38".to_string()),
        ]
        .prop_map(|p| (p, CardBrand::DinersClub)),
        (3528u32..=3589).prop_map(|p| (p.to_string(), CardBrand::Jcb)),
    ]
}

// =============================================================================
// CLASSIFICATION PROPERTIES
// =============================================================================

proptest! {
    /// Every configured prefix classifies to its brand, whatever digits
    /// follow within the length bound.
    #[test]
    fn prefixes_classify_to_their_brand(
        (prefix, brand) in branded_prefix(),
        suffix in digit_string(0..=10),
    ) {
        let rule = detect(Some(&prefix));
        prop_assert_eq!(rule.brand, brand);

        // Suffix within the brand's bound cannot change the answer
        let max = rule.lengths.max as usize;
        let number: String = format!("{}{}", prefix, suffix)
            .chars()
            .take(max)
            .collect();
        prop_assert_eq!(detect(Some(&number)).brand, brand);
    }

    /// Detection is total: no input string panics.
    #[test]
    fn detect_never_panics(input in ".*") {
        let _ = detect(Some(&input));
        let _ = detect(None);
    }

    /// Detection is deterministic.
    #[test]
    fn detect_is_deterministic(input in ".*") {
        prop_assert_eq!(detect(Some(&input)), detect(Some(&input)));
    }

    /// Separators and noise never change the classification of the
    /// underlying digits.
    #[test]
    fn noise_does_not_change_classification(
        digits in digit_string(1..=19),
        noise in "[ \\-x]{0,5}",
    ) {
        let mut noisy = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i == 1 {
                noisy.push_str(&noise);
            }
            noisy.push(c);
        }
        prop_assert_eq!(detect(Some(&noisy)).brand, detect(Some(&digits)).brand);
    }
}

// =============================================================================
// MASKING POLICY PROPERTIES
// =============================================================================

proptest! {
    /// Masked numbers are always digits-only and within the brand cap.
    #[test]
    fn mask_number_output_is_bounded_digits(input in ".*") {
        let rule = detect(Some(&input));
        let masked = policy::mask_number(rule, &input);
        prop_assert!(masked.len() <= policy::number_capacity(rule));
        prop_assert!(masked.chars().all(|c| c.is_ascii_digit()));
    }

    /// Masking is idempotent — a masked value passes through unchanged.
    #[test]
    fn mask_number_is_idempotent(input in ".*") {
        let rule = detect(Some(&input));
        let once = policy::mask_number(rule, &input);
        prop_assert_eq!(policy::mask_number(rule, &once), once.clone());
    }

    /// CCV masking respects the 3/4 capacity split.
    #[test]
    fn mask_ccv_is_bounded(input in ".*", number in digit_string(0..=19)) {
        let rule = detect(Some(&number));
        let masked = policy::mask_ccv(rule, &input);
        prop_assert!(masked.len() <= 4);
        prop_assert!(masked.len() <= policy::ccv_capacity(rule));
    }

    /// The month gate accepts exactly 1-12.
    #[test]
    fn month_gate_accepts_exactly_1_to_12(input in ".*") {
        let accepted = policy::accept_month(&input);
        let expected = input.len() <= 2
            && !input.is_empty()
            && input.bytes().all(|b| b.is_ascii_digit())
            && matches!(input.parse::<u8>(), Ok(1..=12));
        prop_assert_eq!(accepted, expected);
    }

    /// The year gate accepts exactly 1-9999.
    #[test]
    fn year_gate_accepts_exactly_1_to_9999(input in ".*") {
        let accepted = policy::accept_year(&input);
        let expected = !input.is_empty()
            && input.bytes().all(|b| b.is_ascii_digit())
            && matches!(input.parse::<u16>(), Ok(1..=9999));
        prop_assert_eq!(accepted, expected);
    }
}

// =============================================================================
// UPDATE LOOP PROPERTIES
// =============================================================================

proptest! {
    /// apply() is total over arbitrary edits and never panics.
    #[test]
    fn apply_never_panics(
        number in ".*",
        name in ".*",
        month in ".*",
        year in ".*",
        ccv in ".*",
    ) {
        let table = RuleTable::default();
        let mut state = CardInputState::new();
        let mut values = CardFieldValues::new();
        for msg in [
            Msg::NumberEdited(number),
            Msg::NameEdited(name),
            Msg::MonthEdited(month),
            Msg::YearEdited(year),
            Msg::CcvEdited(ccv),
            Msg::CcvFocused,
            Msg::CcvBlurred,
        ] {
            let (next, _) = apply(&msg, &values, &mut state, &table);
            values = next;
        }
    }

    /// A rejected edit returns a record equal to the input record.
    #[test]
    fn rejected_edits_change_nothing(month in ".*") {
        prop_assume!(!policy::accept_month(&month) && !month.is_empty());

        let table = RuleTable::default();
        let mut state = CardInputState::new();
        let values = CardFieldValues::new();
        let (next, outcome) =
            apply(&Msg::MonthEdited(month), &values, &mut state, &table);
        prop_assert!(!outcome.is_applied());
        prop_assert_eq!(next, values);
    }

    /// After a number edit the record always holds a policy-clean value.
    #[test]
    fn record_number_is_always_clean(input in ".*") {
        let table = RuleTable::default();
        let mut state = CardInputState::new();
        let (values, _) = apply(
            &Msg::NumberEdited(input),
            &CardFieldValues::new(),
            &mut state,
            &table,
        );
        let number = values.number.as_deref().unwrap_or("");
        prop_assert!(number.chars().all(|c| c.is_ascii_digit()));
        prop_assert!(number.len() <= 19);
    }
}

// =============================================================================
// RENDERING PROPERTIES
// =============================================================================

proptest! {
    /// Rendering is total over arbitrary record contents.
    #[test]
    fn render_never_panics(
        number in proptest::option::of(".*"),
        name in proptest::option::of(".*"),
        month in proptest::option::of(".*"),
        year in proptest::option::of(".*"),
        ccv in proptest::option::of(".*"),
    ) {
        let values = CardFieldValues {
            number,
            name,
            month,
            year,
            ccv,
        };
        let html = render(
            &FormConfig::default(),
            &values,
            &CardInputState::new(),
            &RuleTable::default(),
        )
        .to_html();
        prop_assert!(!html.is_empty());
    }

    /// Serialized HTML never leaks raw angle brackets from field values.
    #[test]
    fn html_escapes_field_values(name in "[<>\"&a-z]{1,20}") {
        let values = CardFieldValues {
            name: Some(name),
            ..Default::default()
        };
        let html = render(
            &FormConfig::default(),
            &values,
            &CardInputState::new(),
            &RuleTable::default(),
        )
        .to_html();
        // Every '<' in the output opens a real tag, and the only tags we
        // emit are these:
        for fragment in html.split('<').skip(1) {
            prop_assert!(
                ["div", "/div", "span", "/span", "label", "/label", "input"]
                    .iter()
                    .any(|tag| fragment.starts_with(tag)),
                "unexpected tag start: {}",
                fragment
            );
        }
    }
}
