//! Icon mapping for tree visualization

use crate::document::NodeKind;

/// Get the Unicode icon for a node kind
///
/// Returns a single Unicode character that visually represents the node kind.
pub fn get_icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Heading => "§",
        NodeKind::Paragraph => "¶",
        NodeKind::Quote => "❝",
        NodeKind::LineBreak => "↵",
        NodeKind::List => "☰",
        NodeKind::ListItem => "•",
        NodeKind::Link => "⊕",
        NodeKind::Text => "◦",
    }
}

/// Icon for the document root.
pub const DOCUMENT_ICON: &str = "⧉";
