//! HTML to document tree
//!
//! A single recursive pass over the DOM below `<body>`. Every DOM node is looked up in
//! the [`ConversionTable`]; unknown tags are transparent and only contribute their
//! children. Child transforms registered by format tags accumulate on the way down in a
//! [`TransformTable`], copied whenever a level adds one so siblings and ancestors never
//! see it.
//!
//! On the way back up, inline runs directly under block-level markup are wrapped in
//! synthesized paragraphs, so a block node never holds both blocks and inline content.

use super::registry::{ConversionTable, NodeRegistry};
use super::{dom, ChildConversion, DomConversionOutput};
use crate::document::{Node, ParagraphNode};
use crate::error::ConversionError;
use indexmap::IndexMap;
use markup5ever_rcdom::{Handle, RcDom};
use std::borrow::Cow;
use tracing::{debug, trace};

/// Parses `source` and converts the body content.
pub fn import_html(registry: &NodeRegistry, source: &str) -> Result<Vec<Node>, ConversionError> {
    let dom = dom::parse_html(source);
    import_dom(registry, &dom)
}

/// Converts the children of `<body>`. Text left at the top level is dropped.
pub fn import_dom(registry: &NodeRegistry, document: &RcDom) -> Result<Vec<Node>, ConversionError> {
    let body = dom::find_body(document)
        .ok_or_else(|| ConversionError::ParseError("document has no <body>".to_string()))?;
    let table = registry.conversion_table();
    let transforms = TransformTable::default();

    let mut nodes = Vec::new();
    for child in body.children.borrow().iter() {
        for node in convert_node(&table, child, false, &transforms, None)? {
            if let Node::Text(text) = &node {
                debug!("dropping top-level text {:?}", text.text);
                continue;
            }
            nodes.push(node);
        }
    }
    Ok(nodes)
}

/// Child transforms in effect for a subtree, keyed by the tag that registered them and
/// applied in registration order.
#[derive(Clone, Default)]
pub struct TransformTable {
    transforms: IndexMap<String, ChildConversion>,
}

impl TransformTable {
    /// Copy of this table with `transform` registered for `tag`. A tag that is already
    /// present keeps its position and gets the new transform.
    pub fn extended(&self, tag: &str, transform: ChildConversion) -> Self {
        let mut next = self.clone();
        next.transforms.insert(tag.to_string(), transform);
        next
    }

    /// Runs every transform over `node`. `None` means one of them dropped it.
    pub fn apply(&self, node: Node, parent: Option<&Node>) -> Result<Option<Node>, ConversionError> {
        let mut current = node;
        for (tag, transform) in &self.transforms {
            match transform(current, parent)? {
                Some(node) => current = node,
                None => {
                    debug!("node dropped by the <{tag}> transform");
                    return Ok(None);
                }
            }
        }
        Ok(Some(current))
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

fn convert_node(
    table: &ConversionTable,
    handle: &Handle,
    has_block_ancestor: bool,
    transforms: &TransformTable,
    parent: Option<&Node>,
) -> Result<Vec<Node>, ConversionError> {
    if dom::is_ignored(handle) {
        return Ok(Vec::new());
    }
    let name = dom::node_name(handle);

    let mut output = match table.lookup(handle) {
        Some(convert) => convert(handle)?,
        None => {
            if let Some(tag) = &name {
                trace!("no converter for <{tag}>, passing through");
            }
            DomConversionOutput::empty()
        }
    };

    let mut produced = Vec::new();
    let mut current = None;
    if let Some(last) = output.nodes.pop() {
        if let Some(node) = transforms.apply(last, parent)? {
            produced = output.nodes;
            current = Some(node);
        }
    }

    let child_transforms = match (output.for_child.take(), &name) {
        (Some(transform), Some(tag)) => Cow::Owned(transforms.extended(tag, transform)),
        _ => Cow::Borrowed(transforms),
    };
    let has_block_ancestor = has_block_ancestor || current.as_ref().is_some_and(Node::is_element);

    let mut children = Vec::new();
    for child in handle.children.borrow().iter() {
        children.extend(convert_node(
            table,
            child,
            has_block_ancestor,
            &child_transforms,
            current.as_ref(),
        )?);
    }

    if let Some(after) = output.after {
        children = after(children);
    }

    let is_block = dom::is_block_dom_node(handle);
    if is_block && (!has_block_ancestor || is_mixed(&children)) {
        children = wrap_continuous_inlines(children);
    }

    match current {
        None if children.is_empty() && is_block => Ok(vec![Node::LineBreak]),
        None => Ok(children),
        Some(mut node) => {
            if node.is_element() {
                node.append(children)?;
            }
            produced.push(node);
            Ok(produced)
        }
    }
}

fn is_mixed(nodes: &[Node]) -> bool {
    nodes.iter().any(Node::is_block) && nodes.iter().any(Node::is_inline)
}

/// Gathers each run of consecutive inline nodes into a new paragraph. Block nodes keep
/// their position.
pub(crate) fn wrap_continuous_inlines(nodes: Vec<Node>) -> Vec<Node> {
    let mut wrapped = Vec::with_capacity(nodes.len());
    let mut run = Vec::new();

    for node in nodes {
        if node.is_block() {
            flush_inline_run(&mut wrapped, &mut run);
            wrapped.push(node);
        } else {
            run.push(node);
        }
    }
    flush_inline_run(&mut wrapped, &mut run);

    wrapped
}

fn flush_inline_run(wrapped: &mut Vec<Node>, run: &mut Vec<Node>) {
    if !run.is_empty() {
        wrapped.push(Node::Paragraph(ParagraphNode {
            children: std::mem::take(run),
            ..ParagraphNode::default()
        }));
    }
}
