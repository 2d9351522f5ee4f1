//! Conversion between HTML DOM trees and the rich document tree
//!
//!     Import walks an html5ever DOM and asks a [`ConversionTable`] what each tag turns
//!     into. Tag knowledge lives with the node kinds (see ./nodes): every kind exposes
//!     `import_dom()`, a map of the tags it understands, and `export_dom()`, which turns
//!     one of its nodes back into an element. The [`NodeRegistry`] decides which kinds
//!     take part in a conversion and merges their maps.
//!
//!     A converter answers with a [`DomConversionOutput`]:
//!         - `nodes`: the nodes created for the tag (often one, none for pure format tags)
//!         - `for_child`: a transform applied to every node created below the tag
//!         - `after`: a post-processing step over the converted children
//!
//!     `for_child` is how `<b><span style="color: …">text</span></b>` ends up as a single
//!     bold, colored text node: neither tag produces a node, both leave a transform
//!     behind that the text node picks up on creation.
//!
//!     Export is a plain match on the node kind (./export.rs); the set of kinds is closed,
//!     so there is no lookup to do.

pub mod dom;
pub mod export;
pub mod import;
pub mod nodes;
pub mod registry;

pub use export::{export_html, export_node, export_nodes};
pub use import::{import_dom, import_html};
pub use registry::{ConversionTable, NodeRegistry};

use crate::document::Node;
use crate::error::ConversionError;
use markup5ever_rcdom::Handle;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// Lookup key used for DOM text leaves.
pub const TEXT_NODE_TAG: &str = "#text";

/// Transform applied to each node created below the tag that registered it.
///
/// Receives the new node and the node it will be attached to. Returning `None` drops
/// the node.
pub type ChildConversion =
    Rc<dyn Fn(Node, Option<&Node>) -> Result<Option<Node>, ConversionError>>;

/// Post-processing over the converted children of a node, before they are attached.
pub type AfterConversion = fn(Vec<Node>) -> Vec<Node>;

/// Converter for a single DOM node.
pub type ConversionFn = fn(&Handle) -> Result<DomConversionOutput, ConversionError>;

/// Tag (or [`TEXT_NODE_TAG`]) to converter.
pub type ConversionMap = HashMap<&'static str, ConversionFn>;

/// Hook run on an exported element once its children have been appended.
pub type ExportAfter = fn(&Node, Handle) -> Option<Handle>;

/// Result of converting one DOM node.
#[derive(Default)]
pub struct DomConversionOutput {
    pub nodes: Vec<Node>,
    pub for_child: Option<ChildConversion>,
    pub after: Option<AfterConversion>,
}

impl DomConversionOutput {
    /// Produces nothing, the tag behaves as transparent.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn node(node: Node) -> Self {
        Self {
            nodes: vec![node],
            ..Self::default()
        }
    }

    /// Produces no node but transforms everything created below.
    pub fn for_child(transform: ChildConversion) -> Self {
        Self {
            for_child: Some(transform),
            ..Self::default()
        }
    }

    pub fn with_after(mut self, after: AfterConversion) -> Self {
        self.after = Some(after);
        self
    }
}

impl fmt::Debug for DomConversionOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomConversionOutput")
            .field("nodes", &self.nodes)
            .field("for_child", &self.for_child.is_some())
            .field("after", &self.after.is_some())
            .finish()
    }
}

/// Result of exporting one node: the element, plus an optional hook run after the
/// node's children are appended to it.
pub struct DomExportOutput {
    pub after: Option<ExportAfter>,
    pub element: Option<Handle>,
}

impl DomExportOutput {
    pub fn element(element: Handle) -> Self {
        Self {
            after: None,
            element: Some(element),
        }
    }

    pub fn nothing() -> Self {
        Self {
            after: None,
            element: None,
        }
    }

    pub fn with_after(mut self, after: ExportAfter) -> Self {
        self.after = Some(after);
        self
    }
}
