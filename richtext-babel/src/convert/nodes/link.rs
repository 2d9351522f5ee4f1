use crate::convert::{dom, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput};
use crate::document::{LinkNode, Node};
use crate::error::ConversionError;
use markup5ever_rcdom::Handle;

pub fn import_dom() -> ConversionMap {
    ConversionMap::from([("a", convert_anchor as ConversionFn)])
}

/// Anchors without an `href` are transparent.
fn convert_anchor(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    match dom::attribute(handle, "href") {
        Some(href) if !href.trim().is_empty() => {
            Ok(DomConversionOutput::node(Node::link(href.trim())))
        }
        _ => Ok(DomConversionOutput::empty()),
    }
}

pub fn export_dom(node: &LinkNode) -> DomExportOutput {
    DomExportOutput::element(dom::create_element("a", vec![("href", node.url.as_str())]))
}
