//! Static form configuration.
//!
//! Everything presentational that does not change while the form is
//! mounted: labels, placeholders, CSS class names, whether labels render at
//! all, and the character standing in for digits not yet entered in the
//! preview. Hosts build one of these once and keep it alongside the widget.

/// Presentation settings for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldConfig {
    /// Visible label text, rendered when [`FormConfig::show_labels`] is set.
    pub label: String,
    /// Placeholder shown while the field is empty.
    pub placeholder: String,
    /// CSS class on the input element.
    pub class: String,
}

impl FieldConfig {
    /// Builds a field config from its three presentation strings.
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            class: class.into(),
        }
    }
}

/// Presentation settings for the whole form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormConfig {
    /// CSS class on the root element.
    pub class: String,
    /// Render the per-field labels.
    pub show_labels: bool,
    /// Stand-in character for preview digits not yet entered.
    pub mask_char: char,
    /// Number field presentation.
    pub number: FieldConfig,
    /// Name field presentation.
    pub name: FieldConfig,
    /// Month field presentation.
    pub month: FieldConfig,
    /// Year field presentation.
    pub year: FieldConfig,
    /// CCV field presentation.
    pub ccv: FieldConfig,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            class: "cardform".into(),
            show_labels: true,
            mask_char: '\u{2022}',
            number: FieldConfig::new("Card number", "0000 0000 0000 0000", "cardform-number"),
            name: FieldConfig::new("Name on card", "Full name", "cardform-name"),
            month: FieldConfig::new("Month", "MM", "cardform-month"),
            year: FieldConfig::new("Year", "YY", "cardform-year"),
            ccv: FieldConfig::new("CCV", "CCV", "cardform-ccv"),
        }
    }
}
