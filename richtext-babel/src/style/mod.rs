//! Style codec
//!
//! The editor understands a deliberately small style vocabulary. It travels through
//! markup as the inline `style` attribute and is decoded into [`NodeStyle`]:
//!
//! | Property               | Value                                  | Model               |
//! |------------------------|----------------------------------------|---------------------|
//! | `padding-inline-start` | `<n>px`                                | indent = n / 40     |
//! | `text-align`           | left, right, center, justify, start, end | block alignment   |
//! | `color`                | `#rrggbb[aa]`, `rgb()`, `rgba()`       | text foreground     |
//! | `background-color`     | same as `color`                        | text background     |
//!
//! Anything else in a `style` attribute is ignored. A malformed segment only loses
//! that one property; the rest of the attribute still decodes.
//!
//! Encoding is the reverse, restricted to the keys that are present, always emitted
//! in the order of the table above. Colors lose their alpha channel on the way out.

pub mod color;

pub use color::Color;

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Pixels of `padding-inline-start` per indent level.
pub const INDENT_PX: u32 = 40;

/// Horizontal alignment of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
    Start,
    End,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
            TextAlign::Justify => "justify",
            TextAlign::Start => "start",
            TextAlign::End => "end",
        }
    }
}

impl FromStr for TextAlign {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(TextAlign::Left),
            "right" => Ok(TextAlign::Right),
            "center" => Ok(TextAlign::Center),
            "justify" => Ok(TextAlign::Justify),
            "start" => Ok(TextAlign::Start),
            "end" => Ok(TextAlign::End),
            other => Err(ConversionError::MalformedStyleProperty(format!(
                "text-align:{other}"
            ))),
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded form of a `style` attribute, restricted to the known keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStyle {
    /// Start padding in pixels.
    pub padding_inline_start: Option<u32>,
    pub text_align: Option<TextAlign>,
    pub color: Option<Color>,
    pub background_color: Option<Color>,
}

/// One recognized `key:value` pair.
#[derive(Debug, Clone, PartialEq)]
enum StyleProperty {
    PaddingInlineStart(u32),
    TextAlign(TextAlign),
    Color(Color),
    BackgroundColor(Color),
}

impl NodeStyle {
    /// Decodes a `style` attribute. Never fails: unknown keys and malformed segments
    /// are skipped.
    pub fn decode(text: &str) -> Self {
        let mut style = NodeStyle::default();

        for segment in text.split(';') {
            if segment.trim().is_empty() {
                continue;
            }
            match parse_property(segment) {
                Ok(Some(property)) => style.apply(property),
                Ok(None) => {}
                Err(err) => debug!("dropping style property: {err}"),
            }
        }

        style
    }

    /// Encodes the present keys as `key:value` pairs joined by `;`.
    ///
    /// Returns `None` for an empty style so callers can omit the attribute.
    pub fn encode(&self) -> Option<String> {
        let mut parts = Vec::new();

        if let Some(px) = self.padding_inline_start {
            parts.push(format!("padding-inline-start:{px}px"));
        }
        if let Some(align) = self.text_align {
            parts.push(format!("text-align:{align}"));
        }
        if let Some(color) = self.color {
            parts.push(format!("color:{color}"));
        }
        if let Some(color) = self.background_color {
            parts.push(format!("background-color:{color}"));
        }

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(";"))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.padding_inline_start.is_none()
            && self.text_align.is_none()
            && self.color.is_none()
            && self.background_color.is_none()
    }

    /// Indent level derived from the start padding.
    pub fn indent(&self) -> u32 {
        self.padding_inline_start.unwrap_or(0) / INDENT_PX
    }

    /// Overlays the keys present in `other`, leaving the rest untouched.
    pub fn merge(&mut self, other: &NodeStyle) {
        if other.padding_inline_start.is_some() {
            self.padding_inline_start = other.padding_inline_start;
        }
        if other.text_align.is_some() {
            self.text_align = other.text_align;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.background_color.is_some() {
            self.background_color = other.background_color;
        }
    }

    fn apply(&mut self, property: StyleProperty) {
        match property {
            StyleProperty::PaddingInlineStart(px) => self.padding_inline_start = Some(px),
            StyleProperty::TextAlign(align) => self.text_align = Some(align),
            StyleProperty::Color(color) => self.color = Some(color),
            StyleProperty::BackgroundColor(color) => self.background_color = Some(color),
        }
    }
}

impl fmt::Display for NodeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode().unwrap_or_default())
    }
}

/// Splits a declaration into a lower-cased key and a trimmed value.
///
/// Shared with the text converter, which reads a few extra keys as format hints.
pub(crate) fn split_declaration(segment: &str) -> Option<(String, &str)> {
    let (key, value) = segment.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_ascii_lowercase(), value.trim()))
}

/// Iterates the declarations of a `style` attribute, skipping empty or key-less
/// segments.
pub(crate) fn declarations(text: &str) -> impl Iterator<Item = (String, &str)> {
    text.split(';').filter_map(split_declaration)
}

fn parse_property(segment: &str) -> Result<Option<StyleProperty>, ConversionError> {
    let malformed = || ConversionError::MalformedStyleProperty(segment.trim().to_string());
    let (key, value) = split_declaration(segment).ok_or_else(malformed)?;

    let property = match key.as_str() {
        "padding-inline-start" => StyleProperty::PaddingInlineStart(
            parse_pixels(value).ok_or_else(malformed)?,
        ),
        "text-align" => StyleProperty::TextAlign(value.parse().map_err(|_| malformed())?),
        "color" => StyleProperty::Color(Color::parse(value).ok_or_else(malformed)?),
        "background-color" => {
            StyleProperty::BackgroundColor(Color::parse(value).ok_or_else(malformed)?)
        }
        _ => return Ok(None),
    };

    Ok(Some(property))
}

/// Parses `40px`, `40` or `40.5px` into whole pixels.
fn parse_pixels(value: &str) -> Option<u32> {
    let number = value
        .strip_suffix("px")
        .unwrap_or(value)
        .trim();

    if let Ok(px) = number.parse::<u32>() {
        return Some(px);
    }

    let px = number.parse::<f64>().ok()?;
    if px.is_finite() && px >= 0.0 {
        Some(px.trunc() as u32)
    } else {
        None
    }
}
