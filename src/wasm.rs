//! WebAssembly bindings for the card form core.
//!
//! JavaScript-friendly wrappers around detection, the masking policy, and
//! HTML rendering, for hosts that run the widget logic in the browser.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { detect_card, mask_number_input, accept_month } from 'cardform';
//!
//! await init();
//!
//! const rule = detect_card("4111 1111 1111 1111");
//! console.log(rule.brand);           // "Visa"
//! console.log(rule.number_capacity); // 16
//! console.log(rule.ccv_capacity);    // 3
//!
//! // Cap a number input as the user types
//! const masked = mask_number_input("41111111111111112222");
//!
//! // Gate month keystrokes
//! if (!accept_month(value)) { /* keep the old value */ }
//! ```

#![cfg(feature = "wasm")]

use crate::state::{CardFieldValues, CardInputState};
use crate::{detect, policy, render, FormConfig, RuleTable};
use wasm_bindgen::prelude::*;

/// Classification result handed to JavaScript.
#[wasm_bindgen]
pub struct DetectedRule {
    brand: String,
    known: bool,
    number_capacity: u32,
    ccv_capacity: u32,
}

#[wasm_bindgen]
impl DetectedRule {
    /// Brand name, e.g. `"Visa"` or `"Unknown"`.
    #[wasm_bindgen(getter)]
    pub fn brand(&self) -> String {
        self.brand.clone()
    }

    /// False for the Unknown fallback.
    #[wasm_bindgen(getter)]
    pub fn known(&self) -> bool {
        self.known
    }

    /// Maximum digits the number field accepts.
    #[wasm_bindgen(getter)]
    pub fn number_capacity(&self) -> u32 {
        self.number_capacity
    }

    /// Maximum digits the CCV field accepts.
    #[wasm_bindgen(getter)]
    pub fn ccv_capacity(&self) -> u32 {
        self.ccv_capacity
    }
}

/// Classifies a possibly partial card number.
#[wasm_bindgen]
pub fn detect_card(number: Option<String>) -> DetectedRule {
    let rule = detect(number.as_deref());
    DetectedRule {
        brand: rule.brand.name().to_string(),
        known: rule.brand.is_known(),
        number_capacity: policy::number_capacity(rule) as u32,
        ccv_capacity: policy::ccv_capacity(rule) as u32,
    }
}

/// Masks raw number input against its own detected brand.
#[wasm_bindgen]
pub fn mask_number_input(input: &str) -> String {
    policy::mask_number(detect(Some(input)), input)
}

/// Masks raw CCV input against the brand of `number`.
#[wasm_bindgen]
pub fn mask_ccv_input(number: Option<String>, input: &str) -> String {
    policy::mask_ccv(detect(number.as_deref()), input)
}

/// Month gate: true for strings parsing to 1-12.
#[wasm_bindgen]
pub fn accept_month(input: &str) -> bool {
    policy::accept_month(input)
}

/// Year gate: true for strings parsing to 1-9999.
#[wasm_bindgen]
pub fn accept_year(input: &str) -> bool {
    policy::accept_year(input)
}

/// Preview digit groups for the card front, as a JS array of strings.
#[wasm_bindgen]
pub fn preview_groups(number: &str, mask_char: Option<String>) -> js_sys::Array {
    let mask = mask_char
        .and_then(|s| s.chars().next())
        .unwrap_or('\u{2022}');
    let rule = detect(Some(number));
    crate::mask::preview_groups(number, rule, mask)
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Renders the whole form to an HTML string with the default config.
#[wasm_bindgen]
pub fn render_form_html(
    number: Option<String>,
    name: Option<String>,
    month: Option<String>,
    year: Option<String>,
    ccv: Option<String>,
    ccv_focused: bool,
) -> String {
    let values = CardFieldValues {
        number,
        name,
        month,
        year,
        ccv,
    };
    let mut state = CardInputState::new();
    if ccv_focused {
        state.focus_ccv();
    }
    render(
        &FormConfig::default(),
        &values,
        &state,
        &RuleTable::default(),
    )
    .to_html()
}
