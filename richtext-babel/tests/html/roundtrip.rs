//! Property-based round trips: export a tree, import the HTML, compare.
//!
//! Only trees the import side can reproduce exactly are generated: one paragraph,
//! non-empty text without leading, trailing or repeated whitespace.

use crate::common::{export, import, paragraph};
use proptest::prelude::*;
use richtext_babel::document::{BlockStyle, Node, TextFormatType, TextNode};
use richtext_babel::style::{Color, NodeStyle, TextAlign};

/// Formats that can be combined freely.
const COMBINABLE: [TextFormatType; 5] = [
    TextFormatType::Bold,
    TextFormatType::Italic,
    TextFormatType::Underline,
    TextFormatType::Strikethrough,
    TextFormatType::Code,
];

fn format_subset_strategy() -> impl Strategy<Value = Vec<TextFormatType>> {
    prop::collection::vec(any::<bool>(), COMBINABLE.len()).prop_map(|mask| {
        COMBINABLE
            .iter()
            .zip(mask)
            .filter_map(|(flag, on)| on.then_some(*flag))
            .collect()
    })
}

fn align_strategy() -> impl Strategy<Value = TextAlign> {
    prop_oneof![
        Just(TextAlign::Left),
        Just(TextAlign::Right),
        Just(TextAlign::Center),
        Just(TextAlign::Justify),
    ]
}

/// Words joined by single spaces, including characters that need escaping.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9&<>\"']{1,8}", 1..6).prop_map(|words| words.join(" "))
}

fn roundtrip(nodes: &[Node]) -> Vec<Node> {
    import(&export(nodes))
}

proptest! {
    #[test]
    fn test_format_flags_survive(flags in format_subset_strategy()) {
        let nodes = vec![paragraph(vec![Node::formatted_text("x", &flags)])];
        prop_assert_eq!(roundtrip(&nodes), nodes);
    }

    #[test]
    fn test_vertical_alignment_survives(
        flags in format_subset_strategy(),
        vertical in prop_oneof![Just(TextFormatType::Subscript), Just(TextFormatType::Superscript)],
    ) {
        let mut all = flags;
        all.push(vertical);
        let nodes = vec![paragraph(vec![Node::formatted_text("x", &all)])];
        prop_assert_eq!(roundtrip(&nodes), nodes);
    }

    #[test]
    fn test_block_style_codec(indent in 0u32..20, align in align_strategy()) {
        let block = BlockStyle { indent, align };
        let encoded = block.to_node_style().encode();

        if let Some(css) = &encoded {
            prop_assert!(!css.contains("text-align:left"));
        }
        let decoded = NodeStyle::decode(encoded.as_deref().unwrap_or(""));
        prop_assert_eq!(BlockStyle::from_node_style(&decoded), block);
    }

    #[test]
    fn test_block_style_survives(indent in 0u32..20, align in align_strategy()) {
        let mut node = paragraph(vec![Node::text("x")]);
        *node.block_style_mut().unwrap() = BlockStyle { indent, align };
        let nodes = vec![node];
        prop_assert_eq!(roundtrip(&nodes), nodes);
    }

    #[test]
    fn test_text_survives_escaping(text in text_strategy()) {
        let nodes = vec![paragraph(vec![Node::text(text)])];
        prop_assert_eq!(roundtrip(&nodes), nodes);
    }

    #[test]
    fn test_colors_survive(
        fg in any::<(u8, u8, u8)>(),
        bg in proptest::option::of(any::<(u8, u8, u8)>()),
    ) {
        let mut text = TextNode::new("x");
        text.style.color = Some(Color::rgb(fg.0, fg.1, fg.2));
        text.style.background_color = bg.map(|(r, g, b)| Color::rgb(r, g, b));

        let nodes = vec![paragraph(vec![Node::Text(text)])];
        prop_assert_eq!(roundtrip(&nodes), nodes);
    }

    #[test]
    fn test_hex_parse_matches_channels(r: u8, g: u8, b: u8) {
        let color = Color::rgb(r, g, b);
        prop_assert_eq!(Color::parse(&color.to_hex()), Some(color));
    }
}
