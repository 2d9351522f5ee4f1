use crate::convert::{dom, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput};
use crate::document::{ListItemNode, ListNode, ListType, Node};
use crate::error::ConversionError;
use markup5ever_rcdom::Handle;

pub fn import_dom() -> ConversionMap {
    ConversionMap::from([
        ("ol", convert_list as ConversionFn),
        ("ul", convert_list as ConversionFn),
    ])
}

fn convert_list(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    let list_type = match dom::tag_name(handle).as_deref() {
        Some("ol") => ListType::Number,
        _ => ListType::Bullet,
    };
    let start = dom::attribute(handle, "start")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(1);

    Ok(DomConversionOutput::node(Node::list(list_type, start)).with_after(wrap_in_list_items))
}

/// Lists only hold list items; anything else found directly under `<ol>`/`<ul>` gets an
/// item of its own.
fn wrap_in_list_items(children: Vec<Node>) -> Vec<Node> {
    children
        .into_iter()
        .map(|child| match child {
            Node::ListItem(_) => child,
            other => Node::ListItem(ListItemNode {
                children: vec![other],
                ..ListItemNode::default()
            }),
        })
        .collect()
}

pub fn export_dom(node: &ListNode) -> DomExportOutput {
    let tag = match node.list_type {
        ListType::Number => "ol",
        ListType::Bullet => "ul",
    };
    let element = dom::create_element(tag, vec![]);
    if node.start != 1 {
        dom::set_attribute(&element, "start", &node.start.to_string());
    }
    DomExportOutput::element(element)
}
