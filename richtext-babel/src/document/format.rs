//! Inline text formatting flags

use serde::{Deserialize, Serialize};

/// A single inline format flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextFormatType {
    Bold,
    Italic,
    Underline,
    Strikethrough,
    Code,
    Subscript,
    Superscript,
}

impl TextFormatType {
    pub const ALL: [TextFormatType; 7] = [
        TextFormatType::Bold,
        TextFormatType::Italic,
        TextFormatType::Underline,
        TextFormatType::Strikethrough,
        TextFormatType::Code,
        TextFormatType::Subscript,
        TextFormatType::Superscript,
    ];
}

/// The set of format flags active on a text node.
///
/// Subscript and superscript exclude each other: setting one clears the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFormat {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub code: bool,
    pub subscript: bool,
    pub superscript: bool,
}

impl TextFormat {
    pub fn has(&self, format: TextFormatType) -> bool {
        match format {
            TextFormatType::Bold => self.bold,
            TextFormatType::Italic => self.italic,
            TextFormatType::Underline => self.underline,
            TextFormatType::Strikethrough => self.strikethrough,
            TextFormatType::Code => self.code,
            TextFormatType::Subscript => self.subscript,
            TextFormatType::Superscript => self.superscript,
        }
    }

    pub fn set(&mut self, format: TextFormatType, value: bool) {
        match format {
            TextFormatType::Bold => self.bold = value,
            TextFormatType::Italic => self.italic = value,
            TextFormatType::Underline => self.underline = value,
            TextFormatType::Strikethrough => self.strikethrough = value,
            TextFormatType::Code => self.code = value,
            TextFormatType::Subscript => {
                self.subscript = value;
                if value {
                    self.superscript = false;
                }
            }
            TextFormatType::Superscript => {
                self.superscript = value;
                if value {
                    self.subscript = false;
                }
            }
        }
    }

    /// Builder-style variant of [`TextFormat::set`] with `true`.
    pub fn with(mut self, format: TextFormatType) -> Self {
        self.set(format, true);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == TextFormat::default()
    }

    /// Active flags in declaration order.
    pub fn active(&self) -> impl Iterator<Item = TextFormatType> + '_ {
        TextFormatType::ALL.into_iter().filter(|f| self.has(*f))
    }
}
