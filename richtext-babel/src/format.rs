//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform interface for reading and writing rich documents.

use crate::document::Node;
use crate::error::ConversionError;
use std::collections::HashMap;

/// Trait for document formats
///
/// Implementors convert between a string representation and the top-level nodes of a
/// rich document. Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, nodes: &[Node]) -> Result<String, ConversionError> {
///         Ok(nodes.iter().map(Node::text_content).collect())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "html", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["html", "htm"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → nodes)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (nodes → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse source text into top-level document nodes
    ///
    /// Default implementation returns NotSupported error.
    fn parse(&self, _source: &str) -> Result<Vec<Node>, ConversionError> {
        Err(ConversionError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize document nodes into source text
    ///
    /// Default implementation returns NotSupported error.
    fn serialize(&self, _nodes: &[Node]) -> Result<String, ConversionError> {
        Err(ConversionError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize with extra parameters (`--extra-<key> <value>` on the command line).
    ///
    /// The default implementation delegates to [`Format::serialize`] and refuses any
    /// parameter it would silently ignore.
    fn serialize_with_options(
        &self,
        nodes: &[Node],
        options: &HashMap<String, String>,
    ) -> Result<String, ConversionError> {
        if options.is_empty() {
            self.serialize(nodes)
        } else {
            Err(ConversionError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}

/// Reads a boolean extra parameter. Anything but `false`/`0`/`no` counts as true.
pub(crate) fn option_flag(options: &HashMap<String, String>, key: &str) -> Option<bool> {
    options
        .get(key)
        .map(|value| !matches!(value.to_ascii_lowercase().as_str(), "false" | "0" | "no"))
}

/// Rejects parameters outside `known`.
pub(crate) fn check_options(
    format: &str,
    options: &HashMap<String, String>,
    known: &[&str],
) -> Result<(), ConversionError> {
    let mut unknown: Vec<_> = options
        .keys()
        .filter(|key| !known.contains(&key.as_str()))
        .cloned()
        .collect();
    if unknown.is_empty() {
        return Ok(());
    }
    unknown.sort();
    Err(ConversionError::NotSupported(format!(
        "Format '{format}' does not support parameter(s): {}",
        unknown.join(", ")
    )))
}
