//! The brand rule table: prefix patterns, length bounds, CCV lengths, and
//! display groupings.
//!
//! Rules live in an explicit ordered list and detection walks it top to
//! bottom, first match wins. Overlapping patterns are resolved by listing
//! the more specific rule earlier, so the table order is part of the
//! contract.
//!
//! The table is configuration, not business logic. Embedders with a
//! different acceptance policy (extra regional networks, tightened length
//! bounds) build their own with [`RuleTable::custom`]; everyone else uses
//! [`RuleTable::default`].

use crate::CardBrand;
use std::borrow::Cow;

/// A pattern over a card number's leading digits.
///
/// Covers both an exact prefix (`34`) and an inclusive range (`51` through
/// `55`), always over a fixed digit count. Stored numerically so the
/// default table can be a `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prefix {
    low: u32,
    high: u32,
    digits: u8,
}

impl Prefix {
    /// An exact leading-digit sequence, e.g. `Prefix::exact(6011, 4)`.
    #[inline]
    pub const fn exact(value: u32, digits: u8) -> Self {
        Self {
            low: value,
            high: value,
            digits,
        }
    }

    /// An inclusive range over the first `digits` digits,
    /// e.g. `Prefix::range(644, 649, 3)`.
    #[inline]
    pub const fn range(low: u32, high: u32, digits: u8) -> Self {
        Self { low, high, digits }
    }

    /// Number of leading digits this pattern inspects.
    #[inline]
    pub const fn digit_count(&self) -> usize {
        self.digits as usize
    }

    /// Returns true if `digits` starts with this pattern.
    ///
    /// Inputs carrying fewer digits than the pattern never match; a
    /// half-typed number falls through to later rules or the fallback.
    pub fn matches(&self, digits: &[u8]) -> bool {
        let n = self.digits as usize;
        if digits.len() < n {
            return false;
        }
        let mut value = 0u32;
        let mut i = 0;
        while i < n {
            value = value * 10 + digits[i] as u32;
            i += 1;
        }
        self.low <= value && value <= self.high
    }
}

/// Inclusive total digit-length bounds for a brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitRange {
    /// Fewest digits a complete number may have.
    pub min: u8,
    /// Most digits the number field will accept.
    pub max: u8,
}

impl DigitRange {
    /// Creates a new range. `min` must not exceed `max`.
    #[inline]
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Returns true if `len` lies within the bounds.
    #[inline]
    pub const fn contains(&self, len: usize) -> bool {
        self.min as usize <= len && len <= self.max as usize
    }
}

/// Immutable per-brand rule.
///
/// The grouping pattern is used only for display formatting, never for
/// validation; the length bounds cap live input in the number field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrandRule {
    /// Brand this rule classifies.
    pub brand: CardBrand,
    /// Accepted prefix patterns, checked in order.
    pub prefixes: &'static [Prefix],
    /// Total digit-length bounds.
    pub lengths: DigitRange,
    /// CCV digit length: 4 for American Express, 3 elsewhere.
    pub ccv_length: u8,
    /// Digit grouping for display, e.g. `[4, 4, 4, 4]` or `[4, 6, 5]`.
    pub groups: &'static [u8],
}

impl BrandRule {
    /// Returns true if any of this rule's prefixes claims `digits`.
    #[inline]
    pub fn matches(&self, digits: &[u8]) -> bool {
        self.prefixes.iter().any(|p| p.matches(digits))
    }
}

/// The fallback rule for unrecognized numbers.
///
/// Deliberately permissive: 12-19 digits covers every network the default
/// table knows plus some margin, so length capping keeps working while the
/// user is still typing an unrecognized prefix.
pub const UNKNOWN_RULE: BrandRule = BrandRule {
    brand: CardBrand::Unknown,
    prefixes: &[],
    lengths: DigitRange::new(12, 19),
    ccv_length: 3,
    groups: &[4, 4, 4, 4],
};

/// The built-in rule table, most specific prefixes first.
///
/// Mastercard's 2221-2720 2-series range is included alongside the classic
/// 51-55 block. Network prefix assignments shift over time; embedders who
/// track them closely should supply their own table.
pub const DEFAULT_RULES: &[BrandRule] = &[
    BrandRule {
        brand: CardBrand::Amex,
        prefixes: &[Prefix::exact(34, 2), Prefix::exact(37, 2)],
        lengths: DigitRange::new(15, 15),
        ccv_length: 4,
        groups: &[4, 6, 5],
    },
    BrandRule {
        brand: CardBrand::DinersClub,
        prefixes: &[
            Prefix::range(300, 305, 3),
            Prefix::exact(36, 2),
            Prefix::exact(38, 2),
        ],
        lengths: DigitRange::new(14, 16),
        ccv_length: 3,
        groups: &[4, 6, 4],
    },
    BrandRule {
        brand: CardBrand::Jcb,
        prefixes: &[Prefix::range(3528, 3589, 4)],
        lengths: DigitRange::new(16, 19),
        ccv_length: 3,
        groups: &[4, 4, 4, 4],
    },
    BrandRule {
        brand: CardBrand::Discover,
        prefixes: &[
            Prefix::exact(6011, 4),
            Prefix::range(644, 649, 3),
            Prefix::exact(65, 2),
        ],
        lengths: DigitRange::new(16, 19),
        ccv_length: 3,
        groups: &[4, 4, 4, 4],
    },
    BrandRule {
        brand: CardBrand::Mastercard,
        prefixes: &[Prefix::range(51, 55, 2), Prefix::range(2221, 2720, 4)],
        lengths: DigitRange::new(16, 16),
        ccv_length: 3,
        groups: &[4, 4, 4, 4],
    },
    BrandRule {
        brand: CardBrand::Visa,
        prefixes: &[Prefix::exact(4, 1)],
        lengths: DigitRange::new(13, 16),
        ccv_length: 3,
        groups: &[4, 4, 4, 4],
    },
];

/// An ordered rule list plus its fallback.
///
/// `RuleTable::default()` borrows [`DEFAULT_RULES`]; custom tables own
/// their rules. Either way, [`RuleTable::detect`](crate::detect) walks the
/// list in order and falls back when nothing matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Cow<'static, [BrandRule]>,
    fallback: BrandRule,
}

impl RuleTable {
    /// Builds a table from caller-supplied rules, keeping the standard
    /// permissive fallback.
    pub fn custom(rules: Vec<BrandRule>) -> Self {
        Self {
            rules: Cow::Owned(rules),
            fallback: UNKNOWN_RULE,
        }
    }

    /// Builds a table with both rules and fallback supplied by the caller.
    pub fn custom_with_fallback(rules: Vec<BrandRule>, fallback: BrandRule) -> Self {
        Self {
            rules: Cow::Owned(rules),
            fallback,
        }
    }

    /// The ordered rules, fallback excluded.
    #[inline]
    pub fn rules(&self) -> &[BrandRule] {
        &self.rules
    }

    /// The rule returned when nothing matches.
    #[inline]
    pub fn fallback(&self) -> &BrandRule {
        &self.fallback
    }

    /// Looks up the first rule for a brand, if the table carries one.
    pub fn rule_for(&self, brand: CardBrand) -> Option<&BrandRule> {
        self.rules.iter().find(|r| r.brand == brand)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            rules: Cow::Borrowed(DEFAULT_RULES),
            fallback: UNKNOWN_RULE,
        }
    }
}
