//! Rich document tree
//!
//! [`Node`] is the in-memory document: block containers (headings, paragraphs, quotes,
//! lists) holding inline content (text, line breaks, links). [`Editor`] owns a tree and
//! applies changes through transactions.

pub mod editor;
pub mod format;
pub mod nodes;

pub use editor::{Editor, Selection, Transaction};
pub use format::{TextFormat, TextFormatType};
pub use nodes::{
    BlockStyle, HeadingNode, HeadingTag, LinkNode, ListItemNode, ListNode, ListType, Node,
    NodeKind, ParagraphNode, QuoteNode, TextNode, TextStyle, PLACEHOLDER_TEXT,
};
