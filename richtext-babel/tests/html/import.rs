//! Import tests (HTML → document tree)

use crate::common::{import, import_tree, paragraph};
use insta::assert_snapshot;
use richtext_babel::convert::{self, dom, NodeRegistry};
use richtext_babel::document::{HeadingTag, ListType, TextFormatType};
use richtext_babel::style::{Color, TextAlign};
use richtext_babel::{Node, NodeKind};

fn bold(text: &str) -> Node {
    Node::formatted_text(text, &[TextFormatType::Bold])
}

// ============================================================================
// STRUCTURE
// ============================================================================

#[test]
fn test_mixed_document_shape() {
    let tree = import_tree(
        r#"<h1>Title</h1><p>Some <b>bold</b> and <a href="https://example.com">a link</a>.</p><ul><li>one</li><li>two</li></ul>"#,
    );

    assert_snapshot!(tree, @r#"
    ⧉ Document (3 blocks)
    ├─ § h1 Title
    │ └─ ◦ "Title"
    ├─ ¶ Some bold and a link.
    │ ├─ ◦ "Some "
    │ ├─ ◦ "bold" [bold]
    │ ├─ ◦ " and "
    │ ├─ ⊕ a link → https://example.com
    │ │ └─ ◦ "a link"
    │ └─ ◦ "."
    └─ ☰ bulleted list (2 items)
      ├─ • one
      │ └─ ◦ "one"
      └─ • two
        └─ ◦ "two"
    "#);
}

#[test]
fn test_heading_levels() {
    let nodes = import("<h2>Two</h2><h6>Six</h6>");
    assert_eq!(
        nodes,
        vec![
            Node::heading(HeadingTag::H2).with_children(vec![Node::text("Two")]),
            Node::heading(HeadingTag::H6).with_children(vec![Node::text("Six")]),
        ]
    );
}

#[test]
fn test_quote() {
    let nodes = import("<blockquote>quoted</blockquote>");
    assert_eq!(
        nodes,
        vec![Node::quote().with_children(vec![Node::text("quoted")])]
    );
}

#[test]
fn test_ordered_list_attributes() {
    let nodes = import(r#"<ol start="3"><li value="5">x</li></ol>"#);
    match &nodes[..] {
        [Node::List(list)] => {
            assert_eq!(list.list_type, ListType::Number);
            assert_eq!(list.start, 3);
            match &list.children[..] {
                [Node::ListItem(item)] => {
                    assert_eq!(item.value, 5);
                    assert_eq!(item.children, vec![Node::text("x")]);
                }
                other => panic!("unexpected list children {other:?}"),
            }
        }
        other => panic!("unexpected nodes {other:?}"),
    }
}

#[test]
fn test_paragraph_block_style() {
    let nodes = import(r#"<p style="padding-inline-start: 120px; text-align: right">x</p>"#);
    let block = nodes[0].block_style().unwrap();
    assert_eq!(block.indent, 3);
    assert_eq!(block.align, TextAlign::Right);
}

#[test]
fn test_link_inside_paragraph() {
    let nodes = import(r#"<p>see <a href="https://example.com">here</a></p>"#);
    assert_eq!(
        nodes,
        vec![paragraph(vec![
            Node::text("see "),
            Node::link("https://example.com").with_children(vec![Node::text("here")]),
        ])]
    );
}

// ============================================================================
// EMPTY BLOCKS AND LINE BREAKS
// ============================================================================

#[test]
fn test_empty_paragraph_is_a_line_break() {
    assert_eq!(import("<p></p>"), vec![Node::LineBreak]);
}

#[test]
fn test_empty_div_is_a_line_break() {
    assert_eq!(import("<div></div>"), vec![Node::LineBreak]);
    assert_eq!(import("<div><br></div>"), vec![Node::LineBreak]);
}

#[test]
fn test_exported_empty_paragraph_reads_back_as_paragraph() {
    assert_eq!(import("<p><br></p>"), vec![Node::paragraph()]);
}

#[test]
fn test_line_breaks_between_text() {
    assert_eq!(
        import("<p>a<br>b</p>"),
        vec![paragraph(vec![Node::text("a"), Node::LineBreak, Node::text("b")])]
    );
}

// ============================================================================
// TRANSPARENT AND IGNORED MARKUP
// ============================================================================

#[test]
fn test_unknown_inline_tags_are_transparent() {
    assert_eq!(
        import("<p><font face=\"serif\">hi</font></p>"),
        vec![paragraph(vec![Node::text("hi")])]
    );
}

#[test]
fn test_unknown_block_tags_wrap_their_text() {
    assert_eq!(
        import("<section><article>x</article></section>"),
        vec![paragraph(vec![Node::text("x")])]
    );
}

#[test]
fn test_style_and_script_are_skipped() {
    assert_eq!(
        import("<p>a<style>p { color: red }</style><script>alert(1)</script>b</p>"),
        vec![paragraph(vec![Node::text("a"), Node::text("b")])]
    );
}

#[test]
fn test_ignored_tags_match_removed_subtrees() {
    let sources = [
        "<p>one <script>x()</script>two</p>",
        "<div><style>.a{}</style><p>para</p>tail</div>",
        "<ul><li>a<script>y()</script></li><style></style><li>b</li></ul>",
        "<blockquote><p><b>x<style>b{}</style></b></p></blockquote>",
    ];
    let registry = NodeRegistry::with_defaults();

    for source in sources {
        let with_ignored = convert::import_html(&registry, source).unwrap();

        let stripped = dom::parse_html(source);
        remove_ignored(&stripped.document);
        let without = convert::import_dom(&registry, &stripped).unwrap();

        assert_eq!(with_ignored, without, "source: {source}");
    }
}

fn remove_ignored(handle: &markup5ever_rcdom::Handle) {
    handle.children.borrow_mut().retain(|child| !dom::is_ignored(child));
    for child in handle.children.borrow().iter() {
        remove_ignored(child);
    }
}

#[test]
fn test_top_level_text_is_dropped() {
    assert_eq!(
        import("loose<p>kept</p>"),
        vec![paragraph(vec![Node::text("kept")])]
    );
}

#[test]
fn test_unregistered_kinds_are_transparent() {
    let registry = NodeRegistry::from_kinds([NodeKind::Paragraph, NodeKind::Text]);
    let nodes = convert::import_html(&registry, "<h1>x</h1><p><a href=\"/y\">y</a></p>").unwrap();
    assert_eq!(
        nodes,
        vec![
            paragraph(vec![Node::text("x")]),
            paragraph(vec![Node::text("y")]),
        ]
    );
}

// ============================================================================
// INLINE WRAPPING
// ============================================================================

#[test]
fn test_inline_runs_get_paragraphs() {
    assert_eq!(
        import("<div>text<p>para</p>more</div>"),
        vec![
            paragraph(vec![Node::text("text")]),
            paragraph(vec![Node::text("para")]),
            paragraph(vec![Node::text("more")]),
        ]
    );
}

#[test]
fn test_block_containers_never_mix_children() {
    let sources = [
        "<blockquote>text<p>para</p></blockquote>",
        "<blockquote><div>a</div>b<br>c<div>d</div></blockquote>",
        "<ul><li>item<div>nested</div></li></ul>",
        "<div><div>x<p>y</p></div>z</div>",
    ];
    for source in sources {
        for node in import(source) {
            assert_not_mixed(&node, source);
        }
    }
}

fn assert_not_mixed(node: &Node, source: &str) {
    let Some(children) = node.children() else {
        return;
    };
    if node.is_block() {
        let blocks = children.iter().filter(|child| child.is_block()).count();
        assert!(
            blocks == 0 || blocks == children.len(),
            "mixed children in {:?} from {source}",
            node.kind()
        );
    }
    for child in children {
        assert_not_mixed(child, source);
    }
}

// ============================================================================
// WHITESPACE
// ============================================================================

#[test]
fn test_whitespace_between_blocks_is_dropped() {
    let nodes = import("<ul>\n  <li>one</li>\n  <li>two</li>\n</ul>\n<p>\n  after\n</p>");
    assert_eq!(
        nodes,
        vec![
            Node::list(ListType::Bullet, 1).with_children(vec![
                Node::list_item().with_children(vec![Node::text("one")]),
                Node::list_item().with_children(vec![Node::text("two")]),
            ]),
            paragraph(vec![Node::text("after")]),
        ]
    );
}

#[test]
fn test_whitespace_runs_collapse() {
    assert_eq!(
        import("<p>  a \t\n  b  </p>"),
        vec![paragraph(vec![Node::text("a b")])]
    );
}

#[test]
fn test_line_edges_reach_through_inline_tags() {
    assert_eq!(
        import("<p><b>hello </b></p>"),
        vec![paragraph(vec![Node::formatted_text("hello", &[TextFormatType::Bold])])]
    );
    assert_eq!(
        import("<p><i><b> lead</b></i>x</p>"),
        vec![paragraph(vec![
            Node::formatted_text("lead", &[TextFormatType::Bold, TextFormatType::Italic]),
            Node::text("x"),
        ])]
    );
    assert_eq!(
        import("<p><b>a </b>b<br><i>c </i></p>"),
        vec![paragraph(vec![
            Node::formatted_text("a ", &[TextFormatType::Bold]),
            Node::text("b"),
            Node::LineBreak,
            Node::formatted_text("c", &[TextFormatType::Italic]),
        ])]
    );
}

#[test]
fn test_space_between_inline_siblings_is_kept() {
    assert_eq!(
        import("<p><b>a</b> <i>b</i></p>"),
        vec![paragraph(vec![
            bold("a"),
            Node::text(" "),
            Node::formatted_text("b", &[TextFormatType::Italic]),
        ])]
    );
}

#[test]
fn test_preformatted_text_is_kept() {
    assert_eq!(
        import("<pre>a\r\n  b</pre>"),
        vec![paragraph(vec![Node::text("a\n  b")])]
    );
}

// ============================================================================
// TEXT FORMAT AND STYLE
// ============================================================================

#[test]
fn test_format_tags() {
    let nodes = import(
        "<p><strong>s</strong><em>e</em><u>u</u><s>x</s><code>c</code>H<sub>2</sub>O<sup>n</sup></p>",
    );
    assert_eq!(
        nodes,
        vec![paragraph(vec![
            bold("s"),
            Node::formatted_text("e", &[TextFormatType::Italic]),
            Node::formatted_text("u", &[TextFormatType::Underline]),
            Node::formatted_text("x", &[TextFormatType::Strikethrough]),
            Node::formatted_text("c", &[TextFormatType::Code]),
            Node::text("H"),
            Node::formatted_text("2", &[TextFormatType::Subscript]),
            Node::text("O"),
            Node::formatted_text("n", &[TextFormatType::Superscript]),
        ])]
    );
}

#[test]
fn test_format_transforms_are_scoped_to_their_subtree() {
    assert_eq!(
        import("<p><b>a</b>c</p>"),
        vec![paragraph(vec![bold("a"), Node::text("c")])]
    );
}

#[test]
fn test_nested_formats_accumulate() {
    let nodes = import("<p><i><b>x</b></i></p>");
    assert_eq!(
        nodes,
        vec![paragraph(vec![Node::formatted_text(
            "x",
            &[TextFormatType::Bold, TextFormatType::Italic]
        )])]
    );
}

#[test]
fn test_nested_span_replaces_outer_span_style() {
    let nodes = import(
        r#"<p><span style="color: #ff0000">r<span style="background-color: rgba(0, 255, 0, 0.5)">g</span></span></p>"#,
    );
    let children = nodes[0].children().unwrap();

    let red = children[0].as_text().unwrap();
    assert_eq!(red.text, "r");
    assert_eq!(red.style.color, Some(Color::rgb(255, 0, 0)));
    assert_eq!(red.style.background_color, None);

    // The inner <span> transform takes the outer one's place for its subtree.
    let green = children[1].as_text().unwrap();
    assert_eq!(green.style.color, None);
    assert_eq!(green.style.background_color, Some(Color::rgba(0, 255, 0, 0.5)));
}

#[test]
fn test_styles_merge_across_tags() {
    let nodes = import(
        r#"<p><mark style="color: #ff0000"><span style="background-color: #00ff00">x</span></mark></p>"#,
    );
    let text = nodes[0].children().unwrap()[0].as_text().unwrap();
    assert_eq!(text.style.color, Some(Color::rgb(255, 0, 0)));
    assert_eq!(text.style.background_color, Some(Color::rgb(0, 255, 0)));
}

#[test]
fn test_inner_color_overrides_outer() {
    let nodes = import(
        r#"<p><span style="color: #ff0000"><span style="color: #0000ff">x</span></span></p>"#,
    );
    let text = nodes[0].children().unwrap()[0].as_text().unwrap();
    assert_eq!(text.style.color, Some(Color::rgb(0, 0, 255)));
}

#[test]
fn test_normal_weight_bold_tag_is_not_bold() {
    let nodes = import(r#"<p><b style="font-weight: normal">x</b></p>"#);
    assert_eq!(nodes, vec![paragraph(vec![Node::text("x")])]);
}

#[test]
fn test_css_format_hints() {
    let nodes = import(
        r#"<p><span style="font-weight: 700; font-style: italic; text-decoration: underline">x</span></p>"#,
    );
    assert_eq!(
        nodes,
        vec![paragraph(vec![Node::formatted_text(
            "x",
            &[
                TextFormatType::Bold,
                TextFormatType::Italic,
                TextFormatType::Underline
            ]
        )])]
    );
}

#[test]
fn test_malformed_style_keeps_valid_properties() {
    let nodes = import(r#"<p><span style="color: rgb(300, 0, 0); background-color: #00ff00">x</span></p>"#);
    let text = nodes[0].children().unwrap()[0].as_text().unwrap();
    assert_eq!(text.style.color, None);
    assert_eq!(text.style.background_color, Some(Color::rgb(0, 255, 0)));
}
