//! Helpers over the html5ever reference-counted DOM
//!
//! Import reads `markup5ever_rcdom` handles produced by `html5ever::parse_document`;
//! export builds fresh handles and hands them to `html5ever::serialize`.

use super::TEXT_NODE_TAG;
use crate::error::ConversionError;
use html5ever::tendril::TendrilSink;
use html5ever::{
    ns, parse_document, serialize, serialize::SerializeOpts, serialize::TraversalScope,
    Attribute, LocalName, ParseOpts, QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Tags whose content has no document meaning. They are skipped along with their
/// whole subtree.
pub const IGNORE_TAGS: [&str; 2] = ["style", "script"];

const BLOCK_TAGS: [&str; 40] = [
    "address",
    "article",
    "aside",
    "blockquote",
    "canvas",
    "dd",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "footer",
    "form",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "header",
    "hr",
    "li",
    "main",
    "nav",
    "noscript",
    "ol",
    "p",
    "pre",
    "section",
    "table",
    "tbody",
    "td",
    "tfoot",
    "th",
    "thead",
    "tr",
    "ul",
    "video",
    "caption",
];

/// Parse an HTML string into a DOM. html5ever never fails; malformed markup is
/// repaired the way browsers do.
pub fn parse_html(source: &str) -> RcDom {
    parse_document(RcDom::default(), ParseOpts::default()).one(source)
}

/// Locate `<body>` under the document root.
pub fn find_body(dom: &RcDom) -> Option<Handle> {
    find_element(&dom.document, "body")
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    for child in handle.children.borrow().iter() {
        if tag_name(child).as_deref() == Some(tag) {
            return Some(child.clone());
        }
        if let Some(found) = find_element(child, tag) {
            return Some(found);
        }
    }
    None
}

/// Lower-cased tag name of an element, `None` for anything else.
pub fn tag_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_ascii_lowercase().to_string()),
        _ => None,
    }
}

/// Registry lookup key: the tag name for elements, [`TEXT_NODE_TAG`] for text.
pub fn node_name(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(name.local.to_ascii_lowercase().to_string()),
        NodeData::Text { .. } => Some(TEXT_NODE_TAG.to_string()),
        _ => None,
    }
}

pub fn is_element(handle: &Handle) -> bool {
    matches!(handle.data, NodeData::Element { .. })
}

pub fn is_text(handle: &Handle) -> bool {
    matches!(handle.data, NodeData::Text { .. })
}

pub fn is_ignored(handle: &Handle) -> bool {
    tag_name(handle).is_some_and(|tag| IGNORE_TAGS.contains(&tag.as_str()))
}

pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

pub fn is_block_dom_node(handle: &Handle) -> bool {
    tag_name(handle).is_some_and(|tag| is_block_tag(&tag))
}

/// Value of an attribute (attribute names are matched case-insensitively).
pub fn attribute(handle: &Handle, name: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|attr| (*attr.name.local).eq_ignore_ascii_case(name))
            .map(|attr| attr.value.to_string()),
        _ => None,
    }
}

/// Contents of a text leaf.
pub fn text(handle: &Handle) -> Option<String> {
    match &handle.data {
        NodeData::Text { contents } => Some(contents.borrow().to_string()),
        _ => None,
    }
}

pub fn parent(handle: &Handle) -> Option<Handle> {
    let weak = handle.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    handle.parent.set(weak);
    parent
}

/// Whether the node has anything to convert: an element that is not ignored, or text.
pub fn is_content(handle: &Handle) -> bool {
    is_text(handle) || (is_element(handle) && !is_ignored(handle))
}

/// Nearest sibling before (`forward = false`) or after the node that carries content.
/// Comments and ignored subtrees are skipped.
pub fn content_sibling(handle: &Handle, forward: bool) -> Option<Handle> {
    let parent = parent(handle)?;
    let siblings = parent.children.borrow();
    let index = siblings.iter().position(|s| Rc::ptr_eq(s, handle))?;

    if forward {
        siblings[index + 1..].iter().find(|s| is_content(s)).cloned()
    } else {
        siblings[..index].iter().rev().find(|s| is_content(s)).cloned()
    }
}

pub fn has_content_children(handle: &Handle) -> bool {
    handle.children.borrow().iter().any(is_content)
}

/// Whether the node sits inside preformatted content: a `<pre>` or an element whose
/// style sets `white-space: pre*`.
pub fn is_preformatted(handle: &Handle) -> bool {
    let mut current = parent(handle);
    while let Some(node) = current {
        if tag_name(&node).as_deref() == Some("pre") {
            return true;
        }
        if let Some(style) = attribute(&node, "style") {
            let pre = crate::style::declarations(&style)
                .any(|(key, value)| key == "white-space" && value.starts_with("pre"));
            if pre {
                return true;
            }
        }
        current = parent(&node);
    }
    false
}

/// Create an HTML element with attributes
pub fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
pub fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

pub fn set_attribute(handle: &Handle, name: &str, value: &str) {
    if let NodeData::Element { attrs, .. } = &handle.data {
        let mut attrs = attrs.borrow_mut();
        match attrs.iter_mut().find(|attr| &*attr.name.local == name) {
            Some(existing) => existing.value = value.to_string().into(),
            None => attrs.push(Attribute {
                name: QualName::new(None, ns!(), LocalName::from(name)),
                value: value.to_string().into(),
            }),
        }
    }
}

pub fn append_child(parent: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(parent)));
    parent.children.borrow_mut().push(child);
}

/// Wrap `handle` in a new `tag` element and return the wrapper.
pub fn wrap(handle: Handle, tag: &str) -> Handle {
    let wrapper = create_element(tag, vec![]);
    append_child(&wrapper, handle);
    wrapper
}

/// Serialize each handle (element and children) and concatenate the results.
pub fn serialize_nodes(handles: &[Handle]) -> Result<String, ConversionError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for handle in handles {
        let serializable = SerializableHandle::from(handle.clone());
        serialize(&mut output, &serializable, opts.clone()).map_err(|e| {
            ConversionError::SerializationError(format!("HTML serialization failed: {e}"))
        })?;
    }

    String::from_utf8(output)
        .map_err(|e| ConversionError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}
