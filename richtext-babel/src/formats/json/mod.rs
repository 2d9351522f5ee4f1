//! JSON format implementation
//!
//! The serde form of the node tree: an array of top-level nodes, each tagged with its
//! `type`.
//!
//! ```json
//! [{ "type": "paragraph", "children": [{ "type": "text", "text": "Hi" }] }]
//! ```

use crate::document::Node;
use crate::error::ConversionError;
use crate::format::{check_options, option_flag, Format};
use std::collections::HashMap;

/// Format implementation for the JSON node tree
pub struct JsonFormat {
    pretty: bool,
}

impl Default for JsonFormat {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonFormat {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json(nodes: &[Node], pretty: bool) -> Result<String, ConversionError> {
        let json = if pretty {
            serde_json::to_string_pretty(nodes)
        } else {
            serde_json::to_string(nodes)
        };
        json.map_err(|e| ConversionError::SerializationError(format!("JSON serialization failed: {e}")))
    }
}

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Document tree as JSON"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Node>, ConversionError> {
        serde_json::from_str(source)
            .map_err(|e| ConversionError::ParseError(format!("Invalid document JSON: {e}")))
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, ConversionError> {
        Self::to_json(nodes, self.pretty)
    }

    fn serialize_with_options(
        &self,
        nodes: &[Node],
        options: &HashMap<String, String>,
    ) -> Result<String, ConversionError> {
        check_options(self.name(), options, &["pretty"])?;
        Self::to_json(nodes, option_flag(options, "pretty").unwrap_or(self.pretty))
    }
}
