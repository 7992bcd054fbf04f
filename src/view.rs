//! The renderable view tree.
//!
//! The widget renders to plain data, not to any particular framework. A
//! [`ViewNode`] tree carries tag names, attributes, and children; hosts
//! either walk it and build their own widgets, or serialize it with
//! [`ViewNode::to_html`] and hand the string to a DOM. Class names,
//! labels, and placeholders all come from [`FormConfig`].
//!
//! Rendering is a pure function of `(config, values, focus, rule)` — the
//! same inputs always produce the same tree.

use crate::config::{FieldConfig, FormConfig};
use crate::mask;
use crate::policy;
use crate::rules::{BrandRule, RuleTable};
use crate::state::{CardFieldValues, CardInputState, CcvFocus};

/// A node in the rendered markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewNode {
    /// An element with a tag name, attributes, and children.
    Element {
        /// Tag name, e.g. `"div"` or `"input"`.
        tag: &'static str,
        /// Attribute name/value pairs in render order.
        attrs: Vec<(&'static str, String)>,
        /// Child nodes.
        children: Vec<ViewNode>,
    },
    /// A text node.
    Text(String),
}

impl ViewNode {
    /// An empty element.
    pub fn element(tag: &'static str) -> Self {
        Self::Element {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A text node.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Adds an attribute. No-op on text nodes.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let Self::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }

    /// Adds a child node. No-op on text nodes.
    pub fn child(mut self, node: ViewNode) -> Self {
        if let Self::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    /// Adds a child only when `condition` holds.
    pub fn child_if(self, condition: bool, node: ViewNode) -> Self {
        if condition {
            self.child(node)
        } else {
            self
        }
    }

    /// Serializes the tree to an HTML string.
    ///
    /// Text and attribute values are escaped, so field contents cannot
    /// inject markup.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Text(value) => escape_into(out, value),
            Self::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(out, value);
                    out.push('"');
                }
                if children.is_empty() && *tag == "input" {
                    out.push_str("/>");
                } else {
                    out.push('>');
                    for node in children {
                        node.write_html(out);
                    }
                    out.push_str("</");
                    out.push_str(tag);
                    out.push('>');
                }
            }
        }
    }
}

fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Renders the whole widget: preview plus fields.
pub fn render(
    config: &FormConfig,
    values: &CardFieldValues,
    state: &CardInputState,
    table: &RuleTable,
) -> ViewNode {
    let rule = table.detect(values.number.as_deref());
    ViewNode::element("div")
        .attr("class", config.class.clone())
        .child(render_preview(config, values, state.ccv_focus, rule))
        .child(render_fields(config, values, rule))
}

/// Renders the card preview: front face normally, back face while the CCV
/// field has focus.
pub fn render_preview(
    config: &FormConfig,
    values: &CardFieldValues,
    focus: CcvFocus,
    rule: &BrandRule,
) -> ViewNode {
    let face = if focus.is_focused() {
        preview_back(config, values, rule)
    } else {
        preview_front(config, values, rule)
    };
    ViewNode::element("div")
        .attr("class", "cardform-preview")
        .attr("data-brand", rule.brand.name())
        .child(face)
}

fn preview_front(config: &FormConfig, values: &CardFieldValues, rule: &BrandRule) -> ViewNode {
    let number = ViewNode::element("div").attr("class", "cardform-preview-number");
    let number = mask::preview_groups(values.number_or_empty(), rule, config.mask_char)
        .into_iter()
        .fold(number, |node, group| {
            node.child(
                ViewNode::element("span")
                    .attr("class", "cardform-preview-group")
                    .child(ViewNode::text(group)),
            )
        });

    let name = values
        .name
        .as_deref()
        .filter(|n| !n.is_empty())
        .unwrap_or(&config.name.placeholder);

    ViewNode::element("div")
        .attr("class", "cardform-preview-front")
        .child(number)
        .child(
            ViewNode::element("div")
                .attr("class", "cardform-preview-name")
                .child(ViewNode::text(name)),
        )
        .child(
            ViewNode::element("div")
                .attr("class", "cardform-preview-expiry")
                .child(ViewNode::text(expiry_text(values, config.mask_char))),
        )
}

fn preview_back(config: &FormConfig, values: &CardFieldValues, rule: &BrandRule) -> ViewNode {
    // The back shows typed CCV digits, padding the remaining slots the
    // same way the front pads the number.
    let capacity = policy::ccv_capacity(rule);
    let mut ccv = String::with_capacity(capacity);
    let mut typed = values.ccv.as_deref().unwrap_or("").chars();
    for _ in 0..capacity {
        ccv.push(typed.next().unwrap_or(config.mask_char));
    }

    ViewNode::element("div")
        .attr("class", "cardform-preview-back")
        .child(
            ViewNode::element("div")
                .attr("class", "cardform-preview-ccv")
                .child(ViewNode::text(ccv)),
        )
}

/// `07/26`-style expiry line; mask characters stand in for missing parts.
fn expiry_text(values: &CardFieldValues, mask_char: char) -> String {
    let mask2: String = [mask_char, mask_char].iter().collect();

    let month = match values.month.as_deref() {
        Some(m) if !m.is_empty() => {
            if m.chars().count() == 1 {
                format!("0{}", m)
            } else {
                m.to_string()
            }
        }
        _ => mask2.clone(),
    };

    // Char-based so host-constructed records can't slice mid-codepoint
    let year = match values.year.as_deref() {
        Some(y) if !y.is_empty() => {
            let chars: Vec<char> = y.chars().collect();
            if chars.len() >= 2 {
                chars[chars.len() - 2..].iter().collect()
            } else {
                format!("{}{}", mask_char, chars[0])
            }
        }
        _ => mask2,
    };

    format!("{}/{}", month, year)
}

/// Renders the five input fields.
///
/// Numeric fields carry `maxlength` attributes derived from the masking
/// policy, so well-behaved hosts cap input before it even reaches
/// [`crate::form::apply`].
pub fn render_fields(config: &FormConfig, values: &CardFieldValues, rule: &BrandRule) -> ViewNode {
    ViewNode::element("div")
        .attr("class", "cardform-fields")
        .child(field(
            &config.number,
            config.show_labels,
            "number",
            values.number.as_deref(),
            Some(policy::number_capacity(rule)),
            true,
        ))
        .child(field(
            &config.name,
            config.show_labels,
            "name",
            values.name.as_deref(),
            None,
            false,
        ))
        .child(field(
            &config.month,
            config.show_labels,
            "month",
            values.month.as_deref(),
            Some(2),
            true,
        ))
        .child(field(
            &config.year,
            config.show_labels,
            "year",
            values.year.as_deref(),
            Some(4),
            true,
        ))
        .child(field(
            &config.ccv,
            config.show_labels,
            "ccv",
            values.ccv.as_deref(),
            Some(policy::ccv_capacity(rule)),
            true,
        ))
}

fn field(
    cfg: &FieldConfig,
    show_label: bool,
    data_field: &'static str,
    value: Option<&str>,
    maxlength: Option<usize>,
    numeric: bool,
) -> ViewNode {
    let mut input = ViewNode::element("input")
        .attr("type", "text")
        .attr("class", cfg.class.clone())
        .attr("data-field", data_field)
        .attr("placeholder", cfg.placeholder.clone());
    if numeric {
        input = input.attr("inputmode", "numeric");
    }
    if let Some(max) = maxlength {
        input = input.attr("maxlength", max.to_string());
    }
    // Absent fields render without a value attribute at all; cleared
    // fields render value="".
    if let Some(value) = value {
        input = input.attr("value", value);
    }

    ViewNode::element("div")
        .attr("class", "cardform-field")
        .child_if(
            show_label,
            ViewNode::element("label").child(ViewNode::text(cfg.label.clone())),
        )
        .child(input)
}
