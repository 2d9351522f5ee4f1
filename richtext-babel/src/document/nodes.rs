//! Core data structures for the rich document tree.

use super::format::{TextFormat, TextFormatType};
use crate::error::ConversionError;
use crate::style::{Color, NodeStyle, TextAlign, INDENT_PX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text that only holds a caret position and carries no content.
pub const PLACEHOLDER_TEXT: &str = "\u{200B}";

/// A node of the rich document tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    Heading(HeadingNode),
    Paragraph(ParagraphNode),
    Quote(QuoteNode),
    LineBreak,
    List(ListNode),
    ListItem(ListItemNode),
    Link(LinkNode),
    Text(TextNode),
}

/// Discriminant of [`Node`], used to register converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Heading,
    Paragraph,
    Quote,
    LineBreak,
    List,
    ListItem,
    Link,
    Text,
}

impl NodeKind {
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Heading,
        NodeKind::Paragraph,
        NodeKind::Quote,
        NodeKind::LineBreak,
        NodeKind::List,
        NodeKind::ListItem,
        NodeKind::Link,
        NodeKind::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Heading => "heading",
            NodeKind::Paragraph => "paragraph",
            NodeKind::Quote => "quote",
            NodeKind::LineBreak => "line-break",
            NodeKind::List => "list",
            NodeKind::ListItem => "list-item",
            NodeKind::Link => "link",
            NodeKind::Text => "text",
        }
    }

    /// Element kinds own children.
    pub fn is_element(&self) -> bool {
        !matches!(self, NodeKind::LineBreak | NodeKind::Text)
    }

    /// Block kinds start a new line and may not be mixed with inline siblings.
    pub fn is_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Heading
                | NodeKind::Paragraph
                | NodeKind::Quote
                | NodeKind::List
                | NodeKind::ListItem
        )
    }
}

impl FromStr for NodeKind {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ConversionError::NotSupported(format!("Unknown node kind '{s}'")))
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Indentation and alignment shared by block nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockStyle {
    pub indent: u32,
    pub align: TextAlign,
}

impl BlockStyle {
    pub fn from_node_style(style: &NodeStyle) -> Self {
        Self {
            indent: style.indent(),
            align: style.text_align.unwrap_or_default(),
        }
    }

    /// Left alignment and zero indent are defaults and are left out.
    pub fn to_node_style(&self) -> NodeStyle {
        NodeStyle {
            padding_inline_start: (self.indent > 0)
                .then(|| self.indent.saturating_mul(INDENT_PX)),
            text_align: (self.align != TextAlign::Left).then_some(self.align),
            ..NodeStyle::default()
        }
    }
}

/// Colors carried by a text node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub color: Option<Color>,
    pub background_color: Option<Color>,
}

impl TextStyle {
    pub fn from_node_style(style: &NodeStyle) -> Self {
        Self {
            color: style.color,
            background_color: style.background_color,
        }
    }

    pub fn to_node_style(&self) -> NodeStyle {
        NodeStyle {
            color: self.color,
            background_color: self.background_color,
            ..NodeStyle::default()
        }
    }

    /// Overlays the colors present in `style`.
    pub fn merge(&mut self, style: &NodeStyle) {
        if style.color.is_some() {
            self.color = style.color;
        }
        if style.background_color.is_some() {
            self.background_color = style.background_color;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.background_color.is_none()
    }
}

/// Heading levels h1 through h6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingTag {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingTag::H1 => "h1",
            HeadingTag::H2 => "h2",
            HeadingTag::H3 => "h3",
            HeadingTag::H4 => "h4",
            HeadingTag::H5 => "h5",
            HeadingTag::H6 => "h6",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            HeadingTag::H1 => 1,
            HeadingTag::H2 => 2,
            HeadingTag::H3 => 3,
            HeadingTag::H4 => 4,
            HeadingTag::H5 => 5,
            HeadingTag::H6 => 6,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(HeadingTag::H1),
            2 => Some(HeadingTag::H2),
            3 => Some(HeadingTag::H3),
            4 => Some(HeadingTag::H4),
            5 => Some(HeadingTag::H5),
            6 => Some(HeadingTag::H6),
            _ => None,
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let level = tag.strip_prefix('h')?.parse().ok()?;
        Self::from_level(level)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingNode {
    pub tag: HeadingTag,
    #[serde(default)]
    pub block: BlockStyle,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphNode {
    #[serde(default)]
    pub block: BlockStyle,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteNode {
    #[serde(default)]
    pub block: BlockStyle,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Number,
    #[default]
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    pub list_type: ListType,
    #[serde(default = "default_list_start")]
    pub start: u32,
    #[serde(default)]
    pub block: BlockStyle,
    #[serde(default)]
    pub children: Vec<Node>,
}

fn default_list_start() -> u32 {
    1
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItemNode {
    /// Ordinal value; 0 means "follow the list".
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub block: BlockStyle,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkNode {
    pub url: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    #[serde(default)]
    pub format: TextFormat,
    #[serde(default)]
    pub style: TextStyle,
}

impl TextNode {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.text == PLACEHOLDER_TEXT
    }
}

impl Node {
    pub fn heading(tag: HeadingTag) -> Self {
        Node::Heading(HeadingNode {
            tag,
            block: BlockStyle::default(),
            children: Vec::new(),
        })
    }

    pub fn paragraph() -> Self {
        Node::Paragraph(ParagraphNode::default())
    }

    pub fn quote() -> Self {
        Node::Quote(QuoteNode::default())
    }

    pub fn list(list_type: ListType, start: u32) -> Self {
        Node::List(ListNode {
            list_type,
            start,
            block: BlockStyle::default(),
            children: Vec::new(),
        })
    }

    pub fn list_item() -> Self {
        Node::ListItem(ListItemNode::default())
    }

    pub fn link(url: impl Into<String>) -> Self {
        Node::Link(LinkNode {
            url: url.into(),
            children: Vec::new(),
        })
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextNode::new(text))
    }

    /// Text node with the given format flags set.
    pub fn formatted_text(text: impl Into<String>, formats: &[TextFormatType]) -> Self {
        let mut node = TextNode::new(text);
        for format in formats {
            node.format.set(*format, true);
        }
        Node::Text(node)
    }

    /// Builder used mostly by tests: appends `children` and returns the node.
    ///
    /// Panics if the node is not an element kind.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        let kind = self.kind();
        match self.children_mut() {
            Some(existing) => existing.extend(children),
            None => panic!("{kind} nodes cannot have children"),
        }
        self
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Heading(_) => NodeKind::Heading,
            Node::Paragraph(_) => NodeKind::Paragraph,
            Node::Quote(_) => NodeKind::Quote,
            Node::LineBreak => NodeKind::LineBreak,
            Node::List(_) => NodeKind::List,
            Node::ListItem(_) => NodeKind::ListItem,
            Node::Link(_) => NodeKind::Link,
            Node::Text(_) => NodeKind::Text,
        }
    }

    pub fn is_element(&self) -> bool {
        self.kind().is_element()
    }

    pub fn is_block(&self) -> bool {
        self.kind().is_block()
    }

    /// Text, line breaks and links: everything that flows inside a block.
    pub fn is_inline(&self) -> bool {
        !self.is_block()
    }

    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Heading(n) => Some(&n.children),
            Node::Paragraph(n) => Some(&n.children),
            Node::Quote(n) => Some(&n.children),
            Node::List(n) => Some(&n.children),
            Node::ListItem(n) => Some(&n.children),
            Node::Link(n) => Some(&n.children),
            Node::LineBreak | Node::Text(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Heading(n) => Some(&mut n.children),
            Node::Paragraph(n) => Some(&mut n.children),
            Node::Quote(n) => Some(&mut n.children),
            Node::List(n) => Some(&mut n.children),
            Node::ListItem(n) => Some(&mut n.children),
            Node::Link(n) => Some(&mut n.children),
            Node::LineBreak | Node::Text(_) => None,
        }
    }

    pub fn block_style(&self) -> Option<&BlockStyle> {
        match self {
            Node::Heading(n) => Some(&n.block),
            Node::Paragraph(n) => Some(&n.block),
            Node::Quote(n) => Some(&n.block),
            Node::List(n) => Some(&n.block),
            Node::ListItem(n) => Some(&n.block),
            _ => None,
        }
    }

    pub fn block_style_mut(&mut self) -> Option<&mut BlockStyle> {
        match self {
            Node::Heading(n) => Some(&mut n.block),
            Node::Paragraph(n) => Some(&mut n.block),
            Node::Quote(n) => Some(&mut n.block),
            Node::List(n) => Some(&mut n.block),
            Node::ListItem(n) => Some(&mut n.block),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Appends children, refusing when the node cannot own any.
    pub fn append(&mut self, nodes: Vec<Node>) -> Result<(), ConversionError> {
        if nodes.is_empty() {
            return Ok(());
        }
        let kind = self.kind();
        let children = self.children_mut().ok_or_else(|| {
            ConversionError::TreeMutationRejected(format!("cannot append children to a {kind} node"))
        })?;
        children.extend(nodes);
        Ok(())
    }

    /// Replaces the child at `index`, returning the previous one.
    pub fn replace_child(&mut self, index: usize, node: Node) -> Result<Node, ConversionError> {
        let kind = self.kind();
        let children = self.children_mut().ok_or_else(|| {
            ConversionError::TreeMutationRejected(format!("{kind} nodes have no children"))
        })?;
        let len = children.len();
        let slot = children.get_mut(index).ok_or_else(|| {
            ConversionError::TreeMutationRejected(format!(
                "child index {index} out of bounds for {len} children"
            ))
        })?;
        Ok(std::mem::replace(slot, node))
    }

    /// Splits a text node at a character offset, keeping the head in place and
    /// returning the tail with the same format and style.
    pub fn split_text(&mut self, offset: usize) -> Result<Node, ConversionError> {
        let kind = self.kind();
        let text = self.as_text_mut().ok_or_else(|| {
            ConversionError::TreeMutationRejected(format!("cannot split a {kind} node"))
        })?;
        let byte_offset = match text.text.char_indices().nth(offset) {
            Some((index, _)) => index,
            None if offset == text.text.chars().count() => text.text.len(),
            None => {
                return Err(ConversionError::TreeMutationRejected(format!(
                    "split offset {offset} is past the end of the text"
                )))
            }
        };
        let tail = text.text.split_off(byte_offset);
        Ok(Node::Text(TextNode {
            text: tail,
            format: text.format,
            style: text.style,
        }))
    }

    /// Concatenated text of this node and its descendants.
    pub fn text_content(&self) -> String {
        let mut output = String::new();
        self.collect_text(&mut output);
        output
    }

    fn collect_text(&self, output: &mut String) {
        match self {
            Node::Text(text) => output.push_str(&text.text),
            Node::LineBreak => output.push('\n'),
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.collect_text(output);
                }
            }
        }
    }
}
