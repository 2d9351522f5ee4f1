//! HTML format implementation
//!
//! Bidirectional conversion between rich document nodes and HTML, built on the
//! conversion engine in `crate::convert`.
//!
//! # Library Choice
//!
//! We use the `html5ever` + `markup5ever_rcdom` ecosystem for parsing and serialization:
//! - `html5ever`: Browser-grade HTML5 parser from the Servo project
//! - `markup5ever_rcdom`: Reference-counted DOM tree implementation
//!
//! Malformed markup is repaired the way browsers repair it, so import never fails on
//! bad HTML; unknown tags are simply transparent.
//!
//! # Element Mapping Table
//!
//! | Node       | HTML export                                  | HTML import                          |
//! |------------|----------------------------------------------|--------------------------------------|
//! | Heading    | `<h1>`..`<h6>`                               | `h1`..`h6`                           |
//! | Paragraph  | `<p style="…">`, `<p><br></p>` when empty    | `p`, synthesized around inline runs  |
//! | Quote      | `<blockquote>`                               | `blockquote`                         |
//! | List       | `<ol start>` / `<ul>`                        | `ol`, `ul`                           |
//! | ListItem   | `<li value style>`                           | `li`                                 |
//! | Link       | `<a href>`                                   | `a` with `href`                      |
//! | LineBreak  | `<br>`                                       | `br`, empty blocks                   |
//! | Text       | `<span style>` or `<code>` + `b i s u sub sup` | text, `b strong em i s u code sub sup mark span` |
//!
//! # Output
//!
//! By default serialization produces a fragment. With `standalone` the fragment is
//! wrapped in a complete HTML5 document with a `<title>`.

mod document;

use crate::convert::{self, NodeRegistry};
use crate::document::Node;
use crate::error::ConversionError;
use crate::format::{check_options, option_flag, Format};
use std::collections::HashMap;

pub use document::wrap_in_document;

/// Serialization options for HTML export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Wrap the fragment in a full document
    pub standalone: bool,
    /// Document title, used when standalone
    pub title: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            title: "Document".to_string(),
        }
    }
}

/// Format implementation for HTML
pub struct HtmlFormat {
    nodes: NodeRegistry,
    options: HtmlOptions,
}

impl Default for HtmlFormat {
    fn default() -> Self {
        Self::new(NodeRegistry::with_defaults())
    }
}

impl HtmlFormat {
    /// Create an HTML format importing with the given node kinds
    pub fn new(nodes: NodeRegistry) -> Self {
        Self {
            nodes,
            options: HtmlOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HtmlOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    fn serialize_with(&self, nodes: &[Node], options: &HtmlOptions) -> Result<String, ConversionError> {
        let body = convert::export_html(nodes)?;
        if options.standalone {
            Ok(wrap_in_document(&body, &options.title))
        } else {
            Ok(body)
        }
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragments with inline styles"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Vec<Node>, ConversionError> {
        convert::import_html(&self.nodes, source)
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, ConversionError> {
        self.serialize_with(nodes, &self.options)
    }

    fn serialize_with_options(
        &self,
        nodes: &[Node],
        options: &HashMap<String, String>,
    ) -> Result<String, ConversionError> {
        check_options(self.name(), options, &["standalone", "title"])?;

        let mut resolved = self.options.clone();
        if let Some(standalone) = option_flag(options, "standalone") {
            resolved.standalone = standalone;
        }
        if let Some(title) = options.get("title") {
            resolved.title = title.clone();
        }
        self.serialize_with(nodes, &resolved)
    }
}
