//! Card brand identification.
//!
//! A brand is the issuing network a card number belongs to, inferred from
//! its leading digits. The prefix patterns, length bounds, and CCV lengths
//! for each brand live in the [`crate::rules`] table; classification itself
//! is in [`crate::detect`].

use std::fmt;

/// Issuing networks the default rule table recognizes.
///
/// `Unknown` is a first-class member: every input classifies to *some*
/// brand, and numbers that match no prefix (including the empty input)
/// classify to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    /// Visa - prefix 4
    Visa,
    /// Mastercard - prefix 51-55, 2221-2720
    Mastercard,
    /// American Express - prefix 34, 37
    Amex,
    /// Discover - prefix 6011, 644-649, 65
    Discover,
    /// Diners Club - prefix 300-305, 36, 38
    DinersClub,
    /// JCB - prefix 3528-3589
    Jcb,
    /// No prefix matched, or nothing entered yet
    Unknown,
}

impl CardBrand {
    /// Returns a human-readable name for the card brand.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns true for every brand except the `Unknown` fallback.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
