//! Host-owned field values and transient focus state.
//!
//! The record/state split mirrors who owns what: [`CardFieldValues`] is the
//! durable record the host application stores and round-trips, while
//! [`CardInputState`] is per-mount UI state that dies with the widget.

use crate::mask;
use std::fmt;
use zeroize::Zeroize;

/// The editable card record.
///
/// Every field is tri-state: `None` means the user has not touched the
/// field yet, `Some("")` means they entered it and cleared it again, and
/// `Some(value)` is the masked input so far. The distinction matters to
/// hosts that style untouched and emptied fields differently.
///
/// The host owns this record and stores it next to its own application
/// state; the widget reads it and hands back updated copies through the
/// change callback. `Debug` masks the number and CCV, the whole record
/// wipes with [`Zeroize`], and a mounted [`crate::form::CardInput`] wipes
/// its copy when it unmounts.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CardFieldValues {
    /// Card number; digits only once it has been through the mask.
    pub number: Option<String>,
    /// Cardholder name, free text.
    pub name: Option<String>,
    /// Expiry month, "1" through "12".
    pub month: Option<String>,
    /// Expiry year.
    pub year: Option<String>,
    /// Card verification value.
    pub ccv: Option<String>,
}

impl CardFieldValues {
    /// An all-absent record: nothing entered yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entered number, or `""` when absent. Convenient for detection.
    #[inline]
    pub fn number_or_empty(&self) -> &str {
        self.number.as_deref().unwrap_or("")
    }

    /// Returns true if no field has ever been edited.
    pub fn is_untouched(&self) -> bool {
        self.number.is_none()
            && self.name.is_none()
            && self.month.is_none()
            && self.year.is_none()
            && self.ccv.is_none()
    }
}

impl fmt::Debug for CardFieldValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Number is masked and the CCV reduced to its length; the record
        // must be safe to log wholesale.
        f.debug_struct("CardFieldValues")
            .field(
                "number",
                &self.number.as_deref().map(mask::mask_string),
            )
            .field("name", &self.name)
            .field("month", &self.month)
            .field("year", &self.year)
            .field("ccv", &self.ccv.as_deref().map(|c| "*".repeat(c.len())))
            .finish()
    }
}

impl Zeroize for CardFieldValues {
    fn zeroize(&mut self) {
        // The whole record is cardholder data; wipe every entered string
        // but keep the entered/absent shape intact.
        for field in [
            &mut self.number,
            &mut self.name,
            &mut self.month,
            &mut self.year,
            &mut self.ccv,
        ] {
            if let Some(value) = field.as_mut() {
                value.zeroize();
            }
        }
    }
}

/// Whether the CCV field currently holds input focus.
///
/// Two states, two transitions. This exists to flip the card preview to
/// its back face while the CCV is being typed; nothing else reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CcvFocus {
    /// CCV unfocused; the preview shows the card front.
    #[default]
    Blank,
    /// CCV focused; the preview shows the card back.
    Focused,
}

impl CcvFocus {
    /// Transition taken on a focus-gain event.
    #[inline]
    pub const fn focus(self) -> Self {
        Self::Focused
    }

    /// Transition taken on a focus-loss event.
    #[inline]
    pub const fn blur(self) -> Self {
        Self::Blank
    }

    /// Returns true in the focused state.
    #[inline]
    pub const fn is_focused(&self) -> bool {
        matches!(self, Self::Focused)
    }
}

/// Transient per-mount widget state.
///
/// Created when the form mounts, mutated only by focus events, never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardInputState {
    /// Current CCV focus.
    pub ccv_focus: CcvFocus,
}

impl CardInputState {
    /// Fresh mount state: CCV unfocused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a CCV focus-gain event.
    pub fn focus_ccv(&mut self) {
        self.ccv_focus = self.ccv_focus.focus();
    }

    /// Applies a CCV focus-loss event.
    pub fn blur_ccv(&mut self) {
        self.ccv_focus = self.ccv_focus.blur();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_absent() {
        let values = CardFieldValues::new();
        assert!(values.is_untouched());
        assert_eq!(values.number, None);
        assert_eq!(values.number_or_empty(), "");
    }

    #[test]
    fn test_absent_vs_empty() {
        let absent = CardFieldValues::new();
        let cleared = CardFieldValues {
            month: Some(String::new()),
            ..Default::default()
        };
        assert_ne!(absent, cleared);
        assert!(!cleared.is_untouched());
    }

    #[test]
    fn test_debug_masks_number_and_ccv() {
        let values = CardFieldValues {
            number: Some("4111111111111111".into()),
            ccv: Some("123".into()),
            name: Some("A CARDHOLDER".into()),
            ..Default::default()
        };
        let debug = format!("{:?}", values);
        assert!(!debug.contains("4111111111111111"));
        assert!(!debug.contains("123"));
        assert!(debug.contains("1111"));
        assert!(debug.contains("***"));
        // Name is not sensitive in this record
        assert!(debug.contains("A CARDHOLDER"));
    }

    #[test]
    fn test_zeroize_wipes_entered_strings() {
        let mut values = CardFieldValues {
            number: Some("4111111111111111".into()),
            name: Some("JANE DOE".into()),
            ccv: Some("123".into()),
            ..Default::default()
        };
        values.zeroize();
        // Shape survives, contents do not
        assert_eq!(values.number.as_deref(), Some(""));
        assert_eq!(values.name.as_deref(), Some(""));
        assert_eq!(values.ccv.as_deref(), Some(""));
        assert_eq!(values.month, None);
    }

    #[test]
    fn test_ccv_focus_transitions() {
        let focus = CcvFocus::Blank;
        assert!(!focus.is_focused());
        let focus = focus.focus();
        assert!(focus.is_focused());
        // Re-entrant events are no-ops
        assert!(focus.focus().is_focused());
        let focus = focus.blur();
        assert!(!focus.is_focused());
        assert!(!focus.blur().is_focused());
    }

    #[test]
    fn test_input_state() {
        let mut state = CardInputState::new();
        assert!(!state.ccv_focus.is_focused());
        state.focus_ccv();
        assert!(state.ccv_focus.is_focused());
        state.blur_ccv();
        assert!(!state.ccv_focus.is_focused());
    }

    #[test]
    fn test_values_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardFieldValues>();
        assert_send_sync::<CardInputState>();
    }
}
