//! Shared helpers for the integration tests.

use richtext_babel::convert::{self, NodeRegistry};
use richtext_babel::formats::treeviz::to_treeviz_str;
use richtext_babel::Node;

/// Imports `html` with every node kind registered.
pub fn import(html: &str) -> Vec<Node> {
    convert::import_html(&NodeRegistry::with_defaults(), html).unwrap()
}

pub fn export(nodes: &[Node]) -> String {
    convert::export_html(nodes).unwrap()
}

/// Imports and renders the result as a treeviz string.
pub fn import_tree(html: &str) -> String {
    to_treeviz_str(&import(html))
}

pub fn paragraph(children: Vec<Node>) -> Node {
    Node::paragraph().with_children(children)
}
