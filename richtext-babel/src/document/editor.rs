//! Editor and transactions
//!
//! The editor owns a document and the [`NodeRegistry`] used to import markup into it.
//! Every change runs inside [`Editor::update`]: the closure works on a copy of the
//! document, and the copy replaces the live one only when the closure returns `Ok`.

use super::nodes::Node;
use crate::convert::{self, import::wrap_continuous_inlines, NodeRegistry};
use crate::error::ConversionError;
use tracing::debug;

/// Caret position between top-level blocks: the block at index `block` is the one the
/// caret is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub block: usize,
}

impl Selection {
    pub fn at(block: usize) -> Self {
        Self { block }
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    registry: NodeRegistry,
    root: Vec<Node>,
    selection: Option<Selection>,
}

impl Editor {
    /// An empty document with no selection.
    pub fn new(registry: NodeRegistry) -> Self {
        Self {
            registry,
            root: Vec::new(),
            selection: None,
        }
    }

    /// An editor over an existing document, with the caret in its first block.
    pub fn with_document(registry: NodeRegistry, root: Vec<Node>) -> Self {
        Self {
            registry,
            root,
            selection: Some(Selection::at(0)),
        }
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn root(&self) -> &[Node] {
        &self.root
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    /// Runs `f` against a working copy of the document. The copy is committed only when
    /// `f` succeeds; on error the document and selection are left as they were.
    pub fn update<T>(
        &mut self,
        f: impl FnOnce(&mut Transaction<'_>) -> Result<T, ConversionError>,
    ) -> Result<T, ConversionError> {
        let mut txn = Transaction {
            registry: &self.registry,
            root: self.root.clone(),
            selection: self.selection,
        };
        let value = f(&mut txn)?;

        let Transaction {
            root, selection, ..
        } = txn;
        self.root = root;
        self.selection = selection;
        Ok(value)
    }

    /// Imports `html` and inserts the result at the selection.
    pub fn import_html(&mut self, html: &str, at_selection_start: bool) -> Result<bool, ConversionError> {
        self.update(|txn| {
            let nodes = txn.generate_nodes_from_html(html)?;
            txn.insert_nodes(nodes, at_selection_start)
        })
    }

    /// Serializes the whole document.
    pub fn export_html(&self) -> Result<String, ConversionError> {
        convert::export_html(&self.root)
    }
}

/// Working copy of a document inside [`Editor::update`].
pub struct Transaction<'a> {
    registry: &'a NodeRegistry,
    root: Vec<Node>,
    selection: Option<Selection>,
}

impl Transaction<'_> {
    pub fn root(&self) -> &[Node] {
        &self.root
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub fn generate_nodes_from_html(&self, html: &str) -> Result<Vec<Node>, ConversionError> {
        convert::import_html(self.registry, html)
    }

    /// Inserts imported nodes before (`at_selection_start`) or after the selected block
    /// and moves the caret to the last inserted block.
    ///
    /// Inline runs are wrapped in paragraphs. Returns `Ok(false)` and leaves the
    /// document alone when a node cannot live at the top level.
    pub fn insert_nodes(&mut self, nodes: Vec<Node>, at_selection_start: bool) -> Result<bool, ConversionError> {
        let selection = self.selection.ok_or(ConversionError::InvalidSelectionState)?;

        if nodes.iter().any(|node| matches!(node, Node::ListItem(_))) {
            debug!("insertion rejected: list items need a list parent");
            return Ok(false);
        }

        let blocks = wrap_continuous_inlines(nodes);
        if blocks.is_empty() {
            return Ok(true);
        }

        let index = if at_selection_start {
            selection.block
        } else {
            selection.block + 1
        }
        .min(self.root.len());

        let count = blocks.len();
        self.root.splice(index..index, blocks);
        self.selection = Some(Selection::at(index + count - 1));
        Ok(true)
    }

    /// Replaces the top-level block at `index`.
    pub fn replace_block(&mut self, index: usize, node: Node) -> Result<Node, ConversionError> {
        if node.is_inline() || matches!(node, Node::ListItem(_)) {
            return Err(ConversionError::TreeMutationRejected(format!(
                "a {} node cannot be a top-level block",
                node.kind()
            )));
        }
        let len = self.root.len();
        let slot = self.root.get_mut(index).ok_or_else(|| {
            ConversionError::TreeMutationRejected(format!(
                "block index {index} out of bounds for {len} blocks"
            ))
        })?;
        Ok(std::mem::replace(slot, node))
    }
}
