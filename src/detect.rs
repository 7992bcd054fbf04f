//! Card brand classification from a (partial) number.
//!
//! Detection is a total function: every input, including absent, empty, or
//! non-numeric strings, resolves to exactly one [`BrandRule`]. Input is
//! normalized by stripping non-digit characters, then matched against the
//! ordered rule table; the first matching rule wins and unmatched input
//! gets the table's fallback.
//!
//! # Performance
//!
//! One pass to extract digits, one walk over a six-entry table. No
//! allocation beyond the digit buffer, no I/O, no state.

use crate::rules::{BrandRule, RuleTable, DEFAULT_RULES, UNKNOWN_RULE};
use crate::CardBrand;

/// Extracts digit values (0-9) from raw input, dropping everything else.
pub(crate) fn digit_values(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .map(|c| (c as u8) - b'0')
        .collect()
}

impl RuleTable {
    /// Classifies a possibly partial, possibly absent card number.
    ///
    /// Returns the first rule whose prefix set claims the number's leading
    /// digits, or the table's fallback when nothing matches.
    ///
    /// # Example
    ///
    /// ```
    /// use cardform::{CardBrand, RuleTable};
    ///
    /// let table = RuleTable::default();
    /// assert_eq!(table.detect(Some("4111 1111")).brand, CardBrand::Visa);
    /// assert_eq!(table.detect(None).brand, CardBrand::Unknown);
    /// ```
    pub fn detect(&self, number: Option<&str>) -> &BrandRule {
        let digits = digit_values(number.unwrap_or(""));
        self.detect_digits(&digits)
    }

    /// Classifies a pre-extracted digit sequence.
    pub fn detect_digits(&self, digits: &[u8]) -> &BrandRule {
        self.rules()
            .iter()
            .find(|rule| rule.matches(digits))
            .unwrap_or_else(|| self.fallback())
    }
}

/// Classifies against the built-in table.
///
/// Total and side-effect-free: absent, empty, and unrecognized input all
/// yield the permissive [`UNKNOWN_RULE`].
///
/// # Example
///
/// ```
/// use cardform::{detect, CardBrand};
///
/// assert_eq!(detect(Some("4111111111111111")).brand, CardBrand::Visa);
/// assert_eq!(detect(Some("371449635398431")).brand, CardBrand::Amex);
/// assert_eq!(detect(Some("garbage")).brand, CardBrand::Unknown);
/// assert_eq!(detect(None).brand, CardBrand::Unknown);
/// ```
pub fn detect(number: Option<&str>) -> &'static BrandRule {
    let digits = digit_values(number.unwrap_or(""));
    DEFAULT_RULES
        .iter()
        .find(|rule| rule.matches(&digits))
        .unwrap_or(&UNKNOWN_RULE)
}

/// Shorthand for `detect(Some(number)).brand`.
#[inline]
pub fn brand_of(number: &str) -> CardBrand {
    detect(Some(number)).brand
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(brand_of("4"), CardBrand::Visa);
        assert_eq!(brand_of("4111111111111111"), CardBrand::Visa);
        assert_eq!(brand_of("4222222222222"), CardBrand::Visa);
    }

    #[test]
    fn test_mastercard_detection() {
        // Classic 51-55 block
        assert_eq!(brand_of("5100000000000000"), CardBrand::Mastercard);
        assert_eq!(brand_of("5500000000000004"), CardBrand::Mastercard);
        // 2-series range
        assert_eq!(brand_of("2221000000000000"), CardBrand::Mastercard);
        assert_eq!(brand_of("2720990000000000"), CardBrand::Mastercard);
        // Just outside the 2-series
        assert_eq!(brand_of("2220000000000000"), CardBrand::Unknown);
        assert_eq!(brand_of("2721000000000000"), CardBrand::Unknown);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(brand_of("34"), CardBrand::Amex);
        assert_eq!(brand_of("371449635398431"), CardBrand::Amex);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(brand_of("6011111111111117"), CardBrand::Discover);
        assert_eq!(brand_of("6445644564456445"), CardBrand::Discover);
        assert_eq!(brand_of("65"), CardBrand::Discover);
    }

    #[test]
    fn test_diners_detection() {
        assert_eq!(brand_of("30569309025904"), CardBrand::DinersClub);
        assert_eq!(brand_of("36"), CardBrand::DinersClub);
        assert_eq!(brand_of("38520000023237"), CardBrand::DinersClub);
        assert_eq!(brand_of("306"), CardBrand::Unknown);
    }

    #[test]
    fn test_jcb_detection() {
        assert_eq!(brand_of("3528"), CardBrand::Jcb);
        assert_eq!(brand_of("3589000000000000"), CardBrand::Jcb);
        assert_eq!(brand_of("3527000000000000"), CardBrand::Unknown);
        assert_eq!(brand_of("3590000000000000"), CardBrand::Unknown);
    }

    #[test]
    fn test_partial_input_falls_back() {
        // One digit of a two-digit prefix is not yet a match
        assert_eq!(brand_of("3"), CardBrand::Unknown);
        assert_eq!(brand_of("5"), CardBrand::Unknown);
        assert_eq!(brand_of("6"), CardBrand::Unknown);
        // But one digit of Visa's one-digit prefix is
        assert_eq!(brand_of("4"), CardBrand::Visa);
    }

    #[test]
    fn test_absent_and_empty() {
        assert_eq!(detect(None).brand, CardBrand::Unknown);
        assert_eq!(detect(Some("")).brand, CardBrand::Unknown);
        assert_eq!(detect(None).lengths.min, 12);
        assert_eq!(detect(None).lengths.max, 19);
    }

    #[test]
    fn test_non_numeric_input() {
        assert_eq!(brand_of("abc"), CardBrand::Unknown);
        // Separators are stripped before matching
        assert_eq!(brand_of("4111-1111-1111-1111"), CardBrand::Visa);
        assert_eq!(brand_of("  37 14  "), CardBrand::Amex);
        // Non-digit noise around a valid prefix still classifies
        assert_eq!(brand_of("x4x1x"), CardBrand::Visa);
    }

    #[test]
    fn test_detection_is_deterministic() {
        for input in ["4111111111111111", "", "abc", "5", "9999999999999999"] {
            let a = detect(Some(input)).brand;
            let b = detect(Some(input)).brand;
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_custom_table_detection() {
        use crate::rules::{BrandRule, DigitRange, Prefix, RuleTable};

        const PREFIXES: &[Prefix] = &[Prefix::exact(9, 1)];
        let table = RuleTable::custom(vec![BrandRule {
            brand: CardBrand::Visa,
            prefixes: PREFIXES,
            lengths: DigitRange::new(16, 16),
            ccv_length: 3,
            groups: &[4, 4, 4, 4],
        }]);
        assert_eq!(table.detect(Some("9000")).brand, CardBrand::Visa);
        assert_eq!(table.detect(Some("4000")).brand, CardBrand::Unknown);
    }

    #[test]
    fn test_digit_values_strips_noise() {
        assert_eq!(digit_values("4a1-1 "), vec![4, 1, 1]);
        assert_eq!(digit_values(""), Vec::<u8>::new());
    }
}
