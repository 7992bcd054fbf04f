//! The widget's update loop: messages in, updated record out.
//!
//! Hosts forward raw UI events as [`Msg`] values. [`apply`] pushes each
//! one through the masking policy and returns a new [`CardFieldValues`];
//! rejected edits come back with the record unchanged. [`CardInput`] wraps
//! the same loop in an owned component that invokes a host-supplied change
//! callback after every applied update, for hosts that prefer a callback
//! boundary over threading records by hand.

use crate::config::FormConfig;
use crate::policy::{self, EditOutcome};
use crate::rules::{BrandRule, RuleTable};
use crate::state::{CardFieldValues, CardInputState};
use crate::view::{self, ViewNode};
use std::fmt;
use zeroize::Zeroize;

/// Events the host forwards from its UI layer.
///
/// Edit payloads carry the raw input value as the user left it; masking
/// happens inside [`apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Number field edited.
    NumberEdited(String),
    /// Name field edited.
    NameEdited(String),
    /// Month field edited.
    MonthEdited(String),
    /// Year field edited.
    YearEdited(String),
    /// CCV field edited.
    CcvEdited(String),
    /// CCV field gained focus.
    CcvFocused,
    /// CCV field lost focus.
    CcvBlurred,
}

impl Msg {
    /// Name of the field the message touches, for logging.
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::NumberEdited(_) => "number",
            Self::NameEdited(_) => "name",
            Self::MonthEdited(_) => "month",
            Self::YearEdited(_) => "year",
            Self::CcvEdited(_) | Self::CcvFocused | Self::CcvBlurred => "ccv",
        }
    }
}

/// Applies one message to the record and focus state.
///
/// Number and CCV edits are re-classified against `table` before masking,
/// so a paste that changes brands is capped by the new brand's rule. An
/// empty edit string always applies and clears the field to the
/// entered-but-empty state; month and year edits otherwise pass through
/// their gates or are dropped.
///
/// Focus messages only touch `state`, but still count as applied so hosts
/// re-render the flipped preview.
///
/// # Example
///
/// ```
/// use cardform::{apply, CardFieldValues, CardInputState, Msg, RuleTable};
///
/// let table = RuleTable::default();
/// let mut state = CardInputState::new();
/// let values = CardFieldValues::new();
///
/// let (values, outcome) =
///     apply(&Msg::NumberEdited("4111 1111".into()), &values, &mut state, &table);
/// assert!(outcome.is_applied());
/// assert_eq!(values.number.as_deref(), Some("41111111"));
///
/// let (values, outcome) =
///     apply(&Msg::MonthEdited("13".into()), &values, &mut state, &table);
/// assert!(!outcome.is_applied());
/// assert_eq!(values.month, None);
/// ```
pub fn apply(
    msg: &Msg,
    values: &CardFieldValues,
    state: &mut CardInputState,
    table: &RuleTable,
) -> (CardFieldValues, EditOutcome) {
    let mut next = values.clone();
    let outcome = match msg {
        Msg::NumberEdited(raw) => {
            let rule = table.detect(Some(raw));
            next.number = Some(policy::mask_number(rule, raw));
            EditOutcome::Applied
        }
        Msg::NameEdited(raw) => {
            next.name = Some(raw.clone());
            EditOutcome::Applied
        }
        Msg::MonthEdited(raw) => gated_edit(&mut next.month, raw, policy::accept_month),
        Msg::YearEdited(raw) => gated_edit(&mut next.year, raw, policy::accept_year),
        Msg::CcvEdited(raw) => {
            let rule = table.detect(values.number.as_deref());
            next.ccv = Some(policy::mask_ccv(rule, raw));
            EditOutcome::Applied
        }
        Msg::CcvFocused => {
            state.focus_ccv();
            EditOutcome::Applied
        }
        Msg::CcvBlurred => {
            state.blur_ccv();
            EditOutcome::Applied
        }
    };

    #[cfg(feature = "tracing")]
    if !outcome.is_applied() {
        tracing::debug!(field = msg.field_name(), "edit rejected by input mask");
    }

    (next, outcome)
}

fn gated_edit(
    slot: &mut Option<String>,
    raw: &str,
    accept: fn(&str) -> bool,
) -> EditOutcome {
    if raw.is_empty() {
        // Clearing is always allowed: entered-but-empty, not absent.
        *slot = Some(String::new());
        EditOutcome::Applied
    } else if accept(raw) {
        *slot = Some(raw.to_string());
        EditOutcome::Applied
    } else {
        EditOutcome::Rejected
    }
}

/// A mounted card form: record, focus state, config, rules, and the host
/// change callback.
///
/// # Example
///
/// ```
/// use cardform::{CardInput, FormConfig, Msg};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut form = CardInput::new(FormConfig::default())
///     .on_change(move |values| sink.borrow_mut().push(values.clone()));
///
/// form.update(Msg::NumberEdited("4111".into()));
/// form.update(Msg::MonthEdited("13".into())); // rejected, no callback
///
/// assert_eq!(seen.borrow().len(), 1);
/// assert_eq!(seen.borrow()[0].number.as_deref(), Some("4111"));
/// ```
pub struct CardInput {
    values: CardFieldValues,
    state: CardInputState,
    config: FormConfig,
    table: RuleTable,
    on_change: Option<Box<dyn FnMut(&CardFieldValues)>>,
}

impl CardInput {
    /// Mounts a fresh form with the default rule table.
    pub fn new(config: FormConfig) -> Self {
        Self::with_table(config, RuleTable::default())
    }

    /// Mounts a fresh form with a caller-supplied rule table.
    pub fn with_table(config: FormConfig, table: RuleTable) -> Self {
        Self {
            values: CardFieldValues::new(),
            state: CardInputState::new(),
            config,
            table,
            on_change: None,
        }
    }

    /// Seeds the form with an existing host record, e.g. on re-mount.
    pub fn with_values(mut self, values: CardFieldValues) -> Self {
        self.values = values;
        self
    }

    /// Registers the host callback invoked with the updated full record
    /// after every applied update.
    pub fn on_change(mut self, callback: impl FnMut(&CardFieldValues) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// The current record.
    pub fn values(&self) -> &CardFieldValues {
        &self.values
    }

    /// The current transient state.
    pub fn state(&self) -> &CardInputState {
        &self.state
    }

    /// The rule the current number classifies to.
    pub fn rule(&self) -> &BrandRule {
        self.table.detect(self.values.number.as_deref())
    }

    /// Feeds one message through the masking policy.
    ///
    /// On an applied update the record is replaced and the change callback
    /// runs; on a rejected one nothing happens at all.
    pub fn update(&mut self, msg: Msg) -> EditOutcome {
        let (next, outcome) = apply(&msg, &self.values, &mut self.state, &self.table);
        if outcome.is_applied() {
            self.values = next;
            if let Some(callback) = self.on_change.as_mut() {
                callback(&self.values);
            }
        }
        outcome
    }

    /// Renders the widget in its current state.
    pub fn view(&self) -> ViewNode {
        view::render(&self.config, &self.values, &self.state, &self.table)
    }
}

impl Drop for CardInput {
    fn drop(&mut self) {
        // Unmounting must not leave card data in freed memory
        self.values.zeroize();
    }
}

impl fmt::Debug for CardInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardInput")
            .field("values", &self.values)
            .field("state", &self.state)
            .field("brand", &self.rule().brand)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}
