//! Text leaves and the inline tags that format them
//!
//! Format tags (`b`, `em`, `span`, …) never produce nodes. They register a child
//! transform that sets their flag and merges their colors into every text node created
//! below them, outermost tag first, so an inner tag overrides only what it sets.
//!
//! Export goes the other way: a text leaf inside `<span>` (or `<code>`), styled with the
//! node's colors, then one wrapper per flag, innermost first:
//!
//!     bold + italic  ->  <i><b><span>text</span></b></i>

use crate::convert::{
    dom, ChildConversion, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput,
    TEXT_NODE_TAG,
};
use crate::document::{Node, TextFormat, TextFormatType, TextNode};
use crate::error::ConversionError;
use crate::style::{self, NodeStyle};
use markup5ever_rcdom::Handle;
use std::rc::Rc;

/// Wrapper tags in nesting order, innermost first.
const FORMAT_WRAPPERS: [(TextFormatType, &str); 6] = [
    (TextFormatType::Bold, "b"),
    (TextFormatType::Italic, "i"),
    (TextFormatType::Strikethrough, "s"),
    (TextFormatType::Underline, "u"),
    (TextFormatType::Subscript, "sub"),
    (TextFormatType::Superscript, "sup"),
];

pub fn import_dom() -> ConversionMap {
    ConversionMap::from([
        (TEXT_NODE_TAG, convert_text as ConversionFn),
        ("b", convert_bold as ConversionFn),
        ("strong", convert_bold as ConversionFn),
        ("em", convert_italic as ConversionFn),
        ("i", convert_italic as ConversionFn),
        ("s", convert_strikethrough as ConversionFn),
        ("u", convert_underline as ConversionFn),
        ("code", convert_code as ConversionFn),
        ("sub", convert_subscript as ConversionFn),
        ("sup", convert_superscript as ConversionFn),
        ("mark", convert_styled as ConversionFn),
        ("span", convert_styled as ConversionFn),
    ])
}

fn convert_text(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    let raw = dom::text(handle).unwrap_or_default();

    let text = if dom::is_preformatted(handle) {
        raw.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        match collapse_whitespace(handle, &raw) {
            Some(text) => text,
            None => return Ok(DomConversionOutput::empty()),
        }
    };

    if text.is_empty() {
        return Ok(DomConversionOutput::empty());
    }
    Ok(DomConversionOutput::node(Node::text(text)))
}

/// Collapses whitespace runs the way a browser lays out normal text. Returns `None`
/// when nothing visible is left.
fn collapse_whitespace(handle: &Handle, raw: &str) -> Option<String> {
    let mut text = String::with_capacity(raw.len());
    let mut in_space = false;
    for c in raw.chars() {
        if c.is_ascii_whitespace() {
            if !in_space {
                text.push(' ');
            }
            in_space = true;
        } else {
            text.push(c);
            in_space = false;
        }
    }

    let starts_line = at_line_edge(handle, false);
    let ends_line = at_line_edge(handle, true);

    if text == " " {
        return (!starts_line && !ends_line).then_some(text);
    }
    if starts_line {
        text = text.trim_start_matches(' ').to_string();
    }
    if ends_line {
        text.truncate(text.trim_end_matches(' ').len());
    }
    Some(text)
}

/// Whether the text starts (`forward = false`) or ends its line. Inline ancestors with
/// nothing else on that side are climbed, so in `<p><b>x </b></p>` the text ends at `</p>`.
fn at_line_edge(handle: &Handle, forward: bool) -> bool {
    let mut current = handle.clone();
    loop {
        if let Some(sibling) = dom::content_sibling(&current, forward) {
            return dom::is_block_dom_node(&sibling)
                || dom::tag_name(&sibling).as_deref() == Some("br");
        }
        let Some(parent) = dom::parent(&current) else {
            return false;
        };
        if dom::is_block_dom_node(&parent) || dom::tag_name(&parent).as_deref() == Some("body") {
            return true;
        }
        if !dom::is_element(&parent) {
            return false;
        }
        current = parent;
    }
}

fn convert_bold(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, Some(TextFormatType::Bold)))
}

fn convert_italic(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, Some(TextFormatType::Italic)))
}

fn convert_strikethrough(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, Some(TextFormatType::Strikethrough)))
}

fn convert_underline(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, Some(TextFormatType::Underline)))
}

fn convert_code(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, Some(TextFormatType::Code)))
}

fn convert_subscript(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, Some(TextFormatType::Subscript)))
}

fn convert_superscript(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, Some(TextFormatType::Superscript)))
}

fn convert_styled(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(format_children(handle, None))
}

fn format_children(handle: &Handle, format: Option<TextFormatType>) -> DomConversionOutput {
    let css = dom::attribute(handle, "style").unwrap_or_default();
    let style = NodeStyle::decode(&css);
    let hints = FormatHints::from_css(&css);

    let transform: ChildConversion = Rc::new(
        move |mut node: Node, _parent: Option<&Node>| -> Result<Option<Node>, ConversionError> {
            if let Node::Text(text) = &mut node {
                text.style.merge(&style);
                if let Some(format) = format {
                    text.format.set(format, true);
                }
                hints.apply(&mut text.format);
            }
            Ok(Some(node))
        },
    );

    DomConversionOutput::for_child(transform)
}

/// Format flags implied by inline CSS, as pasted from word processors.
///
/// `Some(false)` clears a flag, so `<b style="font-weight: normal">` is not bold.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct FormatHints {
    bold: Option<bool>,
    italic: Option<bool>,
    underline: Option<bool>,
    strikethrough: Option<bool>,
    vertical: Option<TextFormatType>,
}

impl FormatHints {
    fn from_css(css: &str) -> Self {
        let mut hints = FormatHints::default();

        for (key, value) in style::declarations(css) {
            let value = value.to_ascii_lowercase();
            match key.as_str() {
                "font-weight" => hints.bold = parse_font_weight(&value),
                "font-style" => match value.as_str() {
                    "italic" | "oblique" => hints.italic = Some(true),
                    "normal" => hints.italic = Some(false),
                    _ => {}
                },
                "text-decoration" | "text-decoration-line" => {
                    for line in value.split_ascii_whitespace() {
                        match line {
                            "underline" => hints.underline = Some(true),
                            "line-through" => hints.strikethrough = Some(true),
                            "none" => {
                                hints.underline = Some(false);
                                hints.strikethrough = Some(false);
                            }
                            _ => {}
                        }
                    }
                }
                "vertical-align" => match value.as_str() {
                    "sub" => hints.vertical = Some(TextFormatType::Subscript),
                    "super" => hints.vertical = Some(TextFormatType::Superscript),
                    _ => {}
                },
                _ => {}
            }
        }

        hints
    }

    fn apply(&self, format: &mut TextFormat) {
        let flags = [
            (TextFormatType::Bold, self.bold),
            (TextFormatType::Italic, self.italic),
            (TextFormatType::Underline, self.underline),
            (TextFormatType::Strikethrough, self.strikethrough),
        ];
        for (flag, value) in flags {
            if let Some(value) = value {
                format.set(flag, value);
            }
        }
        if let Some(vertical) = self.vertical {
            format.set(vertical, true);
        }
    }
}

fn parse_font_weight(value: &str) -> Option<bool> {
    match value {
        "bold" | "bolder" => Some(true),
        "normal" | "lighter" => Some(false),
        numeric => numeric.parse::<u16>().ok().map(|weight| weight >= 600),
    }
}

pub fn export_dom(node: &TextNode) -> DomExportOutput {
    if node.text.is_empty() || node.is_placeholder() {
        return DomExportOutput::nothing();
    }

    let tag = if node.format.code { "code" } else { "span" };
    let mut element = dom::create_element(tag, vec![]);
    if let Some(css) = node.style.to_node_style().encode() {
        dom::set_attribute(&element, "style", &css);
    }
    dom::append_child(&element, dom::create_text(&node.text));

    for (flag, wrapper) in FORMAT_WRAPPERS {
        if node.format.has(flag) {
            element = dom::wrap(element, wrapper);
        }
    }

    DomExportOutput::element(element)
}
