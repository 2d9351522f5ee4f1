//! Node kind registry and the merged conversion table

use super::{dom, nodes, ConversionFn};
use crate::document::NodeKind;
use markup5ever_rcdom::Handle;
use std::collections::HashMap;
use tracing::debug;

/// The node kinds taking part in conversion, in registration order.
///
/// Built once when an editor is set up and handed to every import; nothing about it is
/// global. Kinds that are not registered simply have no tags, so their markup is
/// treated as transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRegistry {
    kinds: Vec<NodeKind>,
}

impl NodeRegistry {
    /// An empty registry: every tag is transparent.
    pub fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Every node kind, in declaration order.
    pub fn with_defaults() -> Self {
        Self::from_kinds(NodeKind::ALL)
    }

    pub fn from_kinds(kinds: impl IntoIterator<Item = NodeKind>) -> Self {
        let mut registry = Self::new();
        for kind in kinds {
            registry.register(kind);
        }
        registry
    }

    /// Registers a kind. Registering the same kind twice keeps the first position.
    pub fn register(&mut self, kind: NodeKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    pub fn is_registered(&self, kind: NodeKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn kinds(&self) -> &[NodeKind] {
        &self.kinds
    }

    /// Merges the tag maps of all registered kinds. When two kinds claim the same tag,
    /// the one registered first keeps it.
    pub fn conversion_table(&self) -> ConversionTable {
        let mut entries: HashMap<&'static str, ConversionFn> = HashMap::new();

        for kind in &self.kinds {
            for (tag, convert) in nodes::import_dom(*kind) {
                if entries.contains_key(tag) {
                    debug!("<{tag}> already claimed, ignoring the {kind} converter");
                    continue;
                }
                entries.insert(tag, convert);
            }
        }

        ConversionTable { entries }
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Tag to converter lookup for one conversion run.
#[derive(Clone)]
pub struct ConversionTable {
    entries: HashMap<&'static str, ConversionFn>,
}

impl ConversionTable {
    /// Sets the converter for `tag`, replacing the registered one.
    pub fn insert(&mut self, tag: &'static str, convert: ConversionFn) {
        self.entries.insert(tag, convert);
    }

    pub fn get(&self, tag: &str) -> Option<ConversionFn> {
        self.entries.get(tag).copied()
    }

    /// Converter for a DOM node: text leaves by the text sentinel, elements by
    /// lower-cased tag name.
    pub fn lookup(&self, handle: &Handle) -> Option<ConversionFn> {
        dom::node_name(handle).and_then(|name| self.get(&name))
    }

    pub fn has(&self, tag: &str) -> bool {
        self.entries.contains_key(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.entries.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
