//! Display masking for the card preview and for logs.
//!
//! Two consumers: the preview face renders not-yet-entered digit slots with
//! the configured mask character, and the `Debug` impls use [`mask_string`]
//! so a card number never lands in a log line verbatim.

use crate::rules::BrandRule;

/// Builds the preview's digit groups for the card front.
///
/// Entered digits fill the brand's grouping pattern left to right; the
/// remaining slots show `mask_char`. A half-typed Visa renders as
/// `["4111", "11••", "••••", "••••"]`.
///
/// # Example
///
/// ```
/// use cardform::{detect, mask};
///
/// let rule = detect(Some("378282"));
/// let groups = mask::preview_groups("378282", rule, '•');
/// assert_eq!(groups, vec!["3782", "82••••", "•••••"]);
/// ```
pub fn preview_groups(number: &str, rule: &BrandRule, mask_char: char) -> Vec<String> {
    let digits: Vec<char> = number.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut groups = Vec::with_capacity(rule.groups.len());
    let mut pos = 0usize;

    for &size in rule.groups {
        let mut group = String::new();
        for _ in 0..size {
            match digits.get(pos) {
                Some(&d) => group.push(d),
                None => group.push(mask_char),
            }
            pos += 1;
        }
        groups.push(group);
    }

    groups
}

/// Joined form of [`preview_groups`], separated by single spaces.
pub fn preview_line(number: &str, rule: &BrandRule, mask_char: char) -> String {
    preview_groups(number, rule, mask_char).join(" ")
}

/// Masks all but the last four digits of a raw number string.
///
/// Used by the `Debug` impls; safe to log. Inputs of four digits or fewer
/// are masked entirely.
pub fn mask_string(input: &str) -> String {
    let digits: Vec<char> = input.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }

    let mut masked = String::with_capacity(digits.len());
    for _ in 0..digits.len() - 4 {
        masked.push('*');
    }
    masked.extend(&digits[digits.len() - 4..]);
    masked
}
