use crate::convert::{dom, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput};
use crate::document::{BlockStyle, ListItemNode, Node};
use crate::error::ConversionError;
use crate::style::NodeStyle;
use markup5ever_rcdom::Handle;

pub fn import_dom() -> ConversionMap {
    ConversionMap::from([("li", convert_list_item as ConversionFn)])
}

fn convert_list_item(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    let value = dom::attribute(handle, "value")
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(0);
    let block = dom::attribute(handle, "style")
        .map(|style| BlockStyle::from_node_style(&NodeStyle::decode(&style)))
        .unwrap_or_default();

    Ok(DomConversionOutput::node(Node::ListItem(ListItemNode {
        value,
        block,
        children: Vec::new(),
    })))
}

pub fn export_dom(node: &ListItemNode) -> DomExportOutput {
    let element = dom::create_element("li", vec![]);
    if node.value > 0 {
        dom::set_attribute(&element, "value", &node.value.to_string());
    }
    if let Some(style) = node.block.to_node_style().encode() {
        dom::set_attribute(&element, "style", &style);
    }
    DomExportOutput::element(element)
}
