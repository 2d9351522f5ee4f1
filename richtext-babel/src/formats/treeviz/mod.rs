//! Treeviz formatter for document nodes
//!
//! Treeviz is a visual representation of the document tree, one node per line, with the
//! structure drawn as connectors:
//!
//! <prefix><connector> <icon> <label>
//!
//! Example:
//!
//! ⧉ Document (2 blocks)
//! ├─ § h1 Title
//! │ └─ ◦ "Title"
//! └─ ¶ Some bold text
//!   ├─ ◦ "Some "
//!   └─ ◦ "bold" [bold]
//!
//! Labels of element nodes preview their text content, truncated to 30 characters.

use super::icons::{get_icon, DOCUMENT_ICON};
use crate::document::{ListType, Node};
use crate::error::ConversionError;
use crate::format::Format;

const LABEL_WIDTH: usize = 30;

fn truncate(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LABEL_WIDTH).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}

fn preview(node: &Node) -> String {
    truncate(node.text_content().replace('\n', " ").trim())
}

fn label(node: &Node) -> String {
    match node {
        Node::Heading(heading) => format!("{} {}", heading.tag.as_str(), preview(node)),
        Node::Paragraph(_) | Node::Quote(_) => preview(node),
        Node::LineBreak => "line break".to_string(),
        Node::List(list) => {
            let kind = match list.list_type {
                ListType::Number => "numbered",
                ListType::Bullet => "bulleted",
            };
            let start = if list.start != 1 {
                format!(", from {}", list.start)
            } else {
                String::new()
            };
            format!("{kind} list ({} items{start})", list.children.len())
        }
        Node::ListItem(item) if item.value > 0 => format!("{}. {}", item.value, preview(node)),
        Node::ListItem(_) => preview(node),
        Node::Link(link) => format!("{} → {}", preview(node), link.url),
        Node::Text(text) => {
            let mut label = format!("{:?}", truncate(&text.text));
            let formats: Vec<_> = text
                .format
                .active()
                .map(|f| format!("{f:?}").to_lowercase())
                .collect();
            if !formats.is_empty() {
                label.push_str(&format!(" [{}]", formats.join(", ")));
            }
            if let Some(css) = text.style.to_node_style().encode() {
                label.push_str(&format!(" {{{css}}}"));
            }
            label
        }
    }
}

fn format_node(node: &Node, prefix: &str, is_last: bool, output: &mut String) {
    let connector = if is_last { "└─" } else { "├─" };
    let icon = get_icon(node.kind());
    let line = format!("{prefix}{connector} {icon} {}", label(node));
    output.push_str(line.trim_end());
    output.push('\n');

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    format_children(node.children().unwrap_or_default(), &child_prefix, output);
}

fn format_children(children: &[Node], prefix: &str, output: &mut String) {
    let child_count = children.len();
    for (i, child) in children.iter().enumerate() {
        format_node(child, prefix, i + 1 == child_count, output);
    }
}

pub fn to_treeviz_str(nodes: &[Node]) -> String {
    let mut output = format!("{DOCUMENT_ICON} Document ({} blocks)\n", nodes.len());
    format_children(nodes, "", &mut output);
    output
}

/// Format implementation for treeviz format
pub struct TreevizFormat;

impl Format for TreevizFormat {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with indentation and Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, nodes: &[Node]) -> Result<String, ConversionError> {
        Ok(to_treeviz_str(nodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{HeadingTag, TextFormatType};
    use crate::style::Color;

    #[test]
    fn draws_the_tree() {
        let mut colored = Node::formatted_text("bold", &[TextFormatType::Bold]);
        colored.as_text_mut().unwrap().style.color = Some(Color::rgb(255, 0, 0));

        let nodes = vec![
            Node::heading(HeadingTag::H1).with_children(vec![Node::text("Title")]),
            Node::paragraph().with_children(vec![Node::text("Some "), colored]),
        ];

        insta::assert_snapshot!(to_treeviz_str(&nodes), @r#"
        ⧉ Document (2 blocks)
        ├─ § h1 Title
        │ └─ ◦ "Title"
        └─ ¶ Some bold
          ├─ ◦ "Some "
          └─ ◦ "bold" [bold] {color:#ff0000}
        "#);
    }

    #[test]
    fn lists_and_links() {
        let nodes = vec![Node::list(ListType::Number, 3).with_children(vec![Node::list_item()
            .with_children(vec![
                Node::link("https://example.com").with_children(vec![Node::text("site")]),
                Node::LineBreak,
            ])])];

        insta::assert_snapshot!(to_treeviz_str(&nodes), @r#"
        ⧉ Document (1 blocks)
        └─ ☰ numbered list (1 items, from 3)
          └─ • site
            ├─ ⊕ site → https://example.com
            │ └─ ◦ "site"
            └─ ↵ line break
        "#);
    }

    #[test]
    fn long_labels_are_truncated() {
        let text = "x".repeat(40);
        let nodes = vec![Node::paragraph().with_children(vec![Node::text(text.clone())])];
        let output = to_treeviz_str(&nodes);
        assert!(output.contains(&format!("¶ {}…", "x".repeat(30))));
    }
}
