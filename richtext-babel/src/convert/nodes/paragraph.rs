use crate::convert::{dom, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput};
use crate::document::{BlockStyle, Node, ParagraphNode};
use crate::error::ConversionError;
use crate::style::NodeStyle;
use markup5ever_rcdom::Handle;

pub fn import_dom() -> ConversionMap {
    ConversionMap::from([("p", convert_paragraph as ConversionFn)])
}

/// A `<p>` without content produces nothing, which the import pipeline turns into a
/// line break.
fn convert_paragraph(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    if !dom::has_content_children(handle) {
        return Ok(DomConversionOutput::empty());
    }

    let mut paragraph = ParagraphNode::default();
    if let Some(style) = dom::attribute(handle, "style") {
        paragraph.block = BlockStyle::from_node_style(&NodeStyle::decode(&style));
    }
    Ok(DomConversionOutput::node(Node::Paragraph(paragraph)))
}

pub fn export_dom(node: &ParagraphNode) -> DomExportOutput {
    let element = dom::create_element("p", vec![]);
    if let Some(style) = node.block.to_node_style().encode() {
        dom::set_attribute(&element, "style", &style);
    }
    DomExportOutput::element(element).with_after(fill_empty_line)
}

fn fill_empty_line(_node: &Node, element: Handle) -> Option<Handle> {
    if element.children.borrow().is_empty() {
        dom::append_child(&element, dom::create_element("br", vec![]));
    }
    Some(element)
}
