use crate::convert::{dom, ConversionFn, ConversionMap, DomConversionOutput, DomExportOutput};
use crate::document::{HeadingNode, HeadingTag, Node};
use crate::error::ConversionError;
use markup5ever_rcdom::Handle;

pub fn import_dom() -> ConversionMap {
    ["h1", "h2", "h3", "h4", "h5", "h6"]
        .into_iter()
        .map(|tag| (tag, convert_heading as ConversionFn))
        .collect()
}

fn convert_heading(handle: &Handle) -> Result<DomConversionOutput, ConversionError> {
    let tag = dom::tag_name(handle).unwrap_or_default();
    let level = HeadingTag::from_tag(&tag)
        .ok_or_else(|| ConversionError::UnsupportedMarkup(format!("<{tag}> is not a heading")))?;
    Ok(DomConversionOutput::node(Node::heading(level)))
}

pub fn export_dom(node: &HeadingNode) -> DomExportOutput {
    DomExportOutput::element(dom::create_element(node.tag.as_str(), vec![]))
}
