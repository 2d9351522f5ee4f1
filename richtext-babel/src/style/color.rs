//! CSS color values
//!
//! Only the notations the editor itself produces or commonly receives from pasted
//! content are understood: `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)` and
//! `rgba(r, g, b, a)`. Channels are in `[0, 255]`, alpha in `[0, 1]`.

use crate::error::ConversionError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An sRGB color with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Opaque color from its channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parses any of the supported notations, returning `None` when the value is not
    /// a color this codec understands.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else {
            Self::from_rgb_function(value)
        }
    }

    /// `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let digits = value.trim().strip_prefix('#')?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                f32::from(channel(6)?) / 255.0,
            )),
            _ => None,
        }
    }

    /// `rgb(r, g, b)` or `rgba(r, g, b, a)`.
    pub fn from_rgb_function(value: &str) -> Option<Self> {
        let lowered = value.trim().to_ascii_lowercase();
        let (inner, has_alpha) = if let Some(rest) = lowered.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = lowered.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return None;
        };
        let inner = inner.strip_suffix(')')?;

        let components = inner
            .split(',')
            .map(|part| part.trim().parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;

        let expected = if has_alpha { 4 } else { 3 };
        if components.len() != expected {
            return None;
        }

        let channel = |v: f64| -> Option<u8> {
            if (0.0..=255.0).contains(&v) {
                Some(v.round() as u8)
            } else {
                None
            }
        };
        let r = channel(components[0])?;
        let g = channel(components[1])?;
        let b = channel(components[2])?;

        if has_alpha {
            let a = components[3];
            if !(0.0..=1.0).contains(&a) {
                return None;
            }
            Some(Self::rgba(r, g, b, a as f32))
        } else {
            Some(Self::rgb(r, g, b))
        }
    }

    /// Serializes as `#rrggbb`. Alpha is not representable and is dropped.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ConversionError::MalformedStyleProperty(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
