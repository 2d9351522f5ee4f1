//! Document tree to HTML

use super::nodes::{heading, line_break, link, list, list_item, paragraph, quote, text};
use super::{dom, DomExportOutput};
use crate::document::Node;
use crate::error::ConversionError;
use markup5ever_rcdom::Handle;

/// Builds the element for `node` and its subtree. `None` when the node has no markup,
/// as for empty text.
pub fn export_node(node: &Node) -> Result<Option<Handle>, ConversionError> {
    let DomExportOutput { after, element } = match node {
        Node::Heading(heading) => heading::export_dom(heading),
        Node::Paragraph(paragraph) => paragraph::export_dom(paragraph),
        Node::Quote(quote) => quote::export_dom(quote),
        Node::LineBreak => line_break::export_dom(),
        Node::List(list) => list::export_dom(list),
        Node::ListItem(item) => list_item::export_dom(item),
        Node::Link(link) => link::export_dom(link),
        Node::Text(text) => text::export_dom(text),
    };

    let Some(element) = element else {
        return Ok(None);
    };

    for child in node.children().unwrap_or_default() {
        if let Some(child_element) = export_node(child)? {
            dom::append_child(&element, child_element);
        }
    }

    Ok(match after {
        Some(after) => after(node, element),
        None => Some(element),
    })
}

pub fn export_nodes(nodes: &[Node]) -> Result<Vec<Handle>, ConversionError> {
    let mut elements = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Some(element) = export_node(node)? {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Serializes `nodes` as an HTML fragment.
pub fn export_html(nodes: &[Node]) -> Result<String, ConversionError> {
    dom::serialize_nodes(&export_nodes(nodes)?)
}
