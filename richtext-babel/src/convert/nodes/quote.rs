use crate::convert::{dom, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput};
use crate::document::{Node, QuoteNode};
use crate::error::ConversionError;
use markup5ever_rcdom::Handle;

pub fn import_dom() -> ConversionMap {
    ConversionMap::from([("blockquote", convert_quote as ConversionFn)])
}

fn convert_quote(_handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    Ok(DomConversionOutput::node(Node::quote()))
}

pub fn export_dom(_node: &QuoteNode) -> DomExportOutput {
    DomExportOutput::element(dom::create_element("blockquote", vec![]))
}
