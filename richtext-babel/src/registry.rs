//! Named formats and conversion between them
//!
//! The CLI never touches a format type directly: it asks the registry for formats by
//! name or by file extension and runs `parse` on one and `serialize` on the other.
//! HTML parsing depends on which node kinds take part in import, so the registry is
//! built from a [`NodeRegistry`].

use crate::convert::NodeRegistry;
use crate::document::Node;
use crate::error::ConversionError;
use crate::format::Format;
use crate::formats::{HtmlFormat, JsonFormat, TreevizFormat};
use std::collections::{BTreeMap, HashMap};

/// Operation a format is asked to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Parse,
    Serialize,
}

/// Formats by name, listed in name order.
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let json = registry.convert("<p>Hello</p>", "html", "json", &HashMap::new())?;
/// ```
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// A registry without any format.
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// HTML, JSON and treeviz, with HTML importing every node kind.
    pub fn with_defaults() -> Self {
        Self::with_node_registry(NodeRegistry::with_defaults())
    }

    /// HTML, JSON and treeviz, with HTML importing only the kinds in `nodes`.
    pub fn with_node_registry(nodes: NodeRegistry) -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat::new(nodes));
        registry.register(JsonFormat::default());
        registry.register(TreevizFormat);
        registry
    }

    /// Adds `format`, replacing any format of the same name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats.insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, ConversionError> {
        self.formats
            .get(name)
            .map(|format| format.as_ref())
            .ok_or_else(|| ConversionError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Format claiming the file's extension. Extensions compare case-insensitively.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()?
            .to_str()?
            .to_ascii_lowercase();

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension.as_str()))
            .map(|format| format.name().to_string())
    }

    fn capable(&self, name: &str, direction: Direction) -> Result<&dyn Format, ConversionError> {
        let format = self.get(name)?;
        let supported = match direction {
            Direction::Parse => format.supports_parsing(),
            Direction::Serialize => format.supports_serialization(),
        };
        if !supported {
            let operation = match direction {
                Direction::Parse => "parsing",
                Direction::Serialize => "serialization",
            };
            return Err(ConversionError::NotSupported(format!(
                "Format '{name}' does not support {operation}"
            )));
        }
        Ok(format)
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<Node>, ConversionError> {
        self.capable(format, Direction::Parse)?.parse(source)
    }

    pub fn serialize(&self, nodes: &[Node], format: &str) -> Result<String, ConversionError> {
        self.serialize_with_options(nodes, format, &HashMap::new())
    }

    pub fn serialize_with_options(
        &self,
        nodes: &[Node],
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ConversionError> {
        self.capable(format, Direction::Serialize)?
            .serialize_with_options(nodes, options)
    }

    /// Parses `source` as `from` and serializes the tree as `to`. Both formats are
    /// checked before any parsing happens.
    pub fn convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, ConversionError> {
        let reader = self.capable(from, Direction::Parse)?;
        let writer = self.capable(to, Direction::Serialize)?;
        let nodes = reader.parse(source)?;
        writer.serialize_with_options(&nodes, options)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
