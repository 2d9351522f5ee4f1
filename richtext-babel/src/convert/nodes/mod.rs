//! Per-kind converters
//!
//! Each module pairs `import_dom()`, the tags the kind claims, with `export_dom()`, the
//! element a node of that kind turns into.

pub mod heading;
pub mod line_break;
pub mod link;
pub mod list;
pub mod list_item;
pub mod paragraph;
pub mod quote;
pub mod text;

use super::ConversionMap;
use crate::document::NodeKind;

/// Tags claimed by a node kind.
pub fn import_dom(kind: NodeKind) -> ConversionMap {
    match kind {
        NodeKind::Heading => heading::import_dom(),
        NodeKind::Paragraph => paragraph::import_dom(),
        NodeKind::Quote => quote::import_dom(),
        NodeKind::LineBreak => line_break::import_dom(),
        NodeKind::List => list::import_dom(),
        NodeKind::ListItem => list_item::import_dom(),
        NodeKind::Link => link::import_dom(),
        NodeKind::Text => text::import_dom(),
    }
}
