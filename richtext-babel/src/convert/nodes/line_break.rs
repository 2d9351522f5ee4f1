use crate::convert::{dom, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput};
use crate::document::Node;
use crate::error::ConversionError;
use markup5ever_rcdom::Handle;

pub fn import_dom() -> ConversionMap {
    ConversionMap::from([("br", convert_line_break as ConversionFn)])
}

/// A trailing `<br>` in a block only keeps an empty line open in browsers and carries
/// no content of its own.
fn convert_line_break(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    let parent_is_block = dom::parent(handle).is_some_and(|parent| dom::is_block_dom_node(&parent));
    if parent_is_block && dom::content_sibling(handle, true).is_none() {
        return Ok(DomConversionOutput::empty());
    }
    Ok(DomConversionOutput::node(Node::LineBreak))
}

pub fn export_dom() -> DomExportOutput {
    DomExportOutput::element(dom::create_element("br", vec![]))
}
