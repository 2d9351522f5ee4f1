//! Export tests (document tree → HTML)

use crate::common::{export, import, paragraph};
use richtext_babel::document::{
    BlockStyle, HeadingTag, ListItemNode, ListType, Node, TextFormatType, TextNode,
};
use richtext_babel::format::Format;
use richtext_babel::formats::html::{HtmlFormat, HtmlOptions};
use richtext_babel::formats::JsonFormat;
use richtext_babel::style::{Color, TextAlign};

#[test]
fn test_heading_and_quote() {
    let nodes = vec![
        Node::heading(HeadingTag::H3).with_children(vec![Node::text("Title")]),
        Node::quote().with_children(vec![Node::text("Quoted")]),
    ];
    assert_eq!(
        export(&nodes),
        "<h3><span>Title</span></h3><blockquote><span>Quoted</span></blockquote>"
    );
}

#[test]
fn test_paragraph_block_style() {
    let mut node = paragraph(vec![Node::text("x")]);
    *node.block_style_mut().unwrap() = BlockStyle {
        indent: 2,
        align: TextAlign::Center,
    };
    assert_eq!(
        export(&[node]),
        r#"<p style="padding-inline-start:80px;text-align:center"><span>x</span></p>"#
    );
}

#[test]
fn test_left_alignment_is_never_written() {
    let mut node = paragraph(vec![Node::text("x")]);
    *node.block_style_mut().unwrap() = BlockStyle {
        indent: 0,
        align: TextAlign::Left,
    };
    assert_eq!(export(&[node]), "<p><span>x</span></p>");
}

#[test]
fn test_huge_indent_from_json_exports() {
    let nodes = JsonFormat::default()
        .parse(r#"[{"type":"paragraph","block":{"indent":200000000},"children":[]}]"#)
        .unwrap();
    assert_eq!(
        export(&nodes),
        r#"<p style="padding-inline-start:4294967295px"><br></p>"#
    );
}

#[test]
fn test_empty_paragraph_keeps_its_line() {
    assert_eq!(export(&[Node::paragraph()]), "<p><br></p>");
}

#[test]
fn test_bold_italic_nesting_order() {
    let nodes = vec![paragraph(vec![Node::formatted_text(
        "x",
        &[TextFormatType::Bold, TextFormatType::Italic],
    )])];
    assert_eq!(export(&nodes), "<p><i><b><span>x</span></b></i></p>");
}

#[test]
fn test_strikethrough_inside_underline() {
    let nodes = vec![paragraph(vec![Node::formatted_text(
        "x",
        &[TextFormatType::Underline, TextFormatType::Strikethrough],
    )])];
    assert_eq!(export(&nodes), "<p><u><s><span>x</span></s></u></p>");
}

#[test]
fn test_code_replaces_span() {
    let mut text = TextNode::new("let x");
    text.format.code = true;
    text.style.background_color = Some(Color::rgb(0xee, 0xee, 0xee));
    assert_eq!(
        export(&[paragraph(vec![Node::Text(text)])]),
        r#"<p><code style="background-color:#eeeeee">let x</code></p>"#
    );
}

#[test]
fn test_text_is_escaped() {
    let nodes = vec![paragraph(vec![Node::text("a & b <c>")])];
    assert_eq!(export(&nodes), "<p><span>a &amp; b &lt;c&gt;</span></p>");
}

#[test]
fn test_lists() {
    let mut item = ListItemNode {
        value: 5,
        ..ListItemNode::default()
    };
    item.block.align = TextAlign::Justify;
    item.children.push(Node::text("five"));

    let nodes = vec![
        Node::list(ListType::Number, 3).with_children(vec![Node::ListItem(item)]),
        Node::list(ListType::Bullet, 1)
            .with_children(vec![Node::list_item().with_children(vec![Node::text("dot")])]),
    ];
    assert_eq!(
        export(&nodes),
        r#"<ol start="3"><li value="5" style="text-align:justify"><span>five</span></li></ol><ul><li><span>dot</span></li></ul>"#
    );
}

#[test]
fn test_list_round_trip_keeps_start_and_value() {
    let html = export(&import(r#"<ol start="3"><li value="5">x</li></ol>"#));
    assert_eq!(html, r#"<ol start="3"><li value="5"><span>x</span></li></ol>"#);
}

#[test]
fn test_color_fidelity() {
    let html = export(&import(
        r#"<p><span style="color: rgb(65,117,5)">x</span></p>"#,
    ));
    assert_eq!(html, r#"<p><span style="color:#417505">x</span></p>"#);
}

#[test]
fn test_alpha_is_dropped_on_export() {
    let html = export(&import(
        r#"<p><span style="background-color: #11223380">x</span></p>"#,
    ));
    assert_eq!(html, r#"<p><span style="background-color:#112233">x</span></p>"#);
}

#[test]
fn test_link() {
    let nodes = vec![paragraph(vec![
        Node::link("https://example.com").with_children(vec![Node::formatted_text(
            "site",
            &[TextFormatType::Italic],
        )]),
    ])];
    assert_eq!(
        export(&nodes),
        r#"<p><a href="https://example.com"><i><span>site</span></i></a></p>"#
    );
}

#[test]
fn test_standalone_document() {
    let format = HtmlFormat::default().with_options(HtmlOptions {
        standalone: true,
        title: "Notes".to_string(),
    });
    let html = format
        .serialize(&[paragraph(vec![Node::text("x")])])
        .unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Notes</title>"));
    assert!(html.contains("<p><span>x</span></p>"));

    // The wrapper reads back as the same content.
    assert_eq!(format.parse(&html).unwrap(), vec![paragraph(vec![Node::text("x")])]);
}
