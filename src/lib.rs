//! # cardform
//!
//! Framework-agnostic core of a credit card input form: a card preview
//! plus number/name/month/year/CCV fields.
//!
//! ## Features
//!
//! - Card brand detection from digit prefixes (ordered table, first match
//!   wins, total — unknown input classifies to a permissive fallback)
//! - Keystroke-level input masking: per-brand number and CCV length caps,
//!   month and year range gates
//! - A plain-data view tree with HTML serialization, so any host framework
//!   can render the widget
//! - Host-owned state: the form hands every applied edit back through a
//!   change callback and keeps nothing the host can't round-trip
//!
//! ## Quick Start
//!
//! ```rust
//! use cardform::{CardInput, FormConfig, Msg, CardBrand};
//!
//! let mut form = CardInput::new(FormConfig::default());
//!
//! form.update(Msg::NumberEdited("4111 1111 1111 1111".into()));
//! form.update(Msg::MonthEdited("7".into()));
//!
//! assert_eq!(form.rule().brand, CardBrand::Visa);
//! assert_eq!(form.values().number.as_deref(), Some("4111111111111111"));
//!
//! // Rejected keystrokes simply don't happen
//! form.update(Msg::MonthEdited("13".into()));
//! assert_eq!(form.values().month.as_deref(), Some("7"));
//!
//! let html = form.view().to_html();
//! assert!(html.contains("data-brand=\"Visa\""));
//! ```
//!
//! ## Classification
//!
//! ```rust
//! use cardform::{detect, CardBrand};
//!
//! let rule = detect(Some("371449635398431"));
//! assert_eq!(rule.brand, CardBrand::Amex);
//! assert_eq!(rule.ccv_length, 4);
//!
//! // Total: anything at all yields a usable rule
//! assert_eq!(detect(None).brand, CardBrand::Unknown);
//! assert_eq!(detect(Some("not a number")).lengths.max, 19);
//! ```
//!
//! ## Rendering without the component
//!
//! The component wrapper is optional; hosts that own their own update loop
//! call the pure pieces directly:
//!
//! ```rust
//! use cardform::{render, CardFieldValues, CardInputState, FormConfig, RuleTable};
//!
//! let values = CardFieldValues {
//!     number: Some("5500000000000004".into()),
//!     ..Default::default()
//! };
//! let tree = render(
//!     &FormConfig::default(),
//!     &values,
//!     &CardInputState::new(),
//!     &RuleTable::default(),
//! );
//! assert!(tree.to_html().contains("data-brand=\"Mastercard\""));
//! ```
//!
//! ## Default rule table
//!
//! | Brand | Prefix | Length | CCV | Grouping |
//! |-------|--------|--------|-----|----------|
//! | Visa | 4 | 13-16 | 3 | 4-4-4-4 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 3 | 4-4-4-4 |
//! | American Express | 34, 37 | 15 | 4 | 4-6-5 |
//! | Discover | 6011, 644-649, 65 | 16-19 | 3 | 4-4-4-4 |
//! | Diners Club | 300-305, 36, 38 | 14-16 | 3 | 4-6-4 |
//! | JCB | 3528-3589 | 16-19 | 3 | 4-4-4-4 |
//! | Unknown | anything else | 12-19 | 3 | 4-4-4-4 |
//!
//! Prefix assignments drift as networks grow; the table is plain
//! configuration and [`RuleTable::custom`] swaps it out wholesale.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | (De)serialization for the record, config, and brand |
//! | `tracing` | Debug-level logs for rejected edits |
//! | `cli` | `cardform` command-line demo tool |
//! | `wasm` | WebAssembly bindings for JS hosts |
//!
//! ## Security
//!
//! The record is built to be logged and dropped without leaking:
//!
//! - `Debug` masks the card number and never prints the CCV
//! - The record wipes with `Zeroize`, and a mounted [`CardInput`] wipes
//!   its copy on unmount
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod brand;
pub mod config;
pub mod detect;
pub mod form;
pub mod mask;
pub mod policy;
pub mod rules;
pub mod state;
pub mod view;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use brand::CardBrand;
pub use config::{FieldConfig, FormConfig};
pub use detect::{brand_of, detect};
pub use form::{apply, CardInput, Msg};
pub use policy::EditOutcome;
pub use rules::{BrandRule, DigitRange, Prefix, RuleTable, DEFAULT_RULES, UNKNOWN_RULE};
pub use state::{CardFieldValues, CardInputState, CcvFocus};
pub use view::{render, ViewNode};
