//! Keystroke-level input masking policy.
//!
//! These are masking rules, not form validation: they bound what characters
//! may enter a field, nothing more. A keystroke the policy turns away is
//! silently dropped and the field keeps its previous contents; no error
//! ever reaches the caller. Whether the finished record names a real,
//! currently valid card is the host's problem.
//!
//! Number and CCV capacities come from the [`BrandRule`] the classifier
//! picked; month and year gates are brand-independent.

use crate::rules::BrandRule;

/// Result of pushing one edit through the masking policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The edit passed and the record was updated.
    Applied,
    /// The edit was dropped; the record is unchanged.
    Rejected,
}

impl EditOutcome {
    /// Returns true if the edit went through.
    #[inline]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Maximum digits the number field accepts under `rule`.
#[inline]
pub fn number_capacity(rule: &BrandRule) -> usize {
    rule.lengths.max as usize
}

/// Maximum digits the CCV field accepts under `rule`.
///
/// 4 for American Express, 3 for every other default-table brand.
#[inline]
pub fn ccv_capacity(rule: &BrandRule) -> usize {
    rule.ccv_length as usize
}

/// Masks raw number input: digits only, capped at the brand's max length.
///
/// Digits past the cap are ignored, not an error — the user simply cannot
/// type an 18th digit into a 16-digit brand.
///
/// # Example
///
/// ```
/// use cardform::{detect, policy};
///
/// let visa = detect(Some("4111"));
/// assert_eq!(policy::mask_number(visa, "4111-1111"), "41111111");
/// assert_eq!(
///     policy::mask_number(visa, "41111111111111112222"),
///     "4111111111111111",
/// );
/// ```
pub fn mask_number(rule: &BrandRule, input: &str) -> String {
    take_digits(input, number_capacity(rule))
}

/// Masks raw CCV input: digits only, capped at the brand's CCV length.
pub fn mask_ccv(rule: &BrandRule, input: &str) -> String {
    take_digits(input, ccv_capacity(rule))
}

fn take_digits(input: &str, cap: usize) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(cap)
        .collect()
}

/// Month gate: exactly the two-character-or-fewer digit strings parsing to
/// 1-12.
///
/// `"00"`, `"13"`, and `"abc"` are all turned away. The empty string is
/// rejected here too; clearing a field is handled one level up, in
/// [`crate::form::apply`].
///
/// # Example
///
/// ```
/// use cardform::policy::accept_month;
///
/// assert!(accept_month("1"));
/// assert!(accept_month("09"));
/// assert!(accept_month("12"));
/// assert!(!accept_month("0"));
/// assert!(!accept_month("13"));
/// assert!(!accept_month("+9"));
/// ```
pub fn accept_month(input: &str) -> bool {
    !input.is_empty()
        && input.len() <= 2
        && input.bytes().all(|b| b.is_ascii_digit())
        && matches!(input.parse::<u8>(), Ok(1..=12))
}

/// Year gate: digit strings parsing to an integer in 1-9999.
pub fn accept_year(input: &str) -> bool {
    !input.is_empty()
        && input.bytes().all(|b| b.is_ascii_digit())
        && matches!(input.parse::<u16>(), Ok(1..=9999))
}
