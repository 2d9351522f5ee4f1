//! Pasting HTML into a live document

use crate::common::paragraph;
use richtext_babel::convert::NodeRegistry;
use richtext_babel::document::{Editor, NodeKind, Selection};
use richtext_babel::{ConversionError, Node};

fn editor() -> Editor {
    Editor::with_document(
        NodeRegistry::with_defaults(),
        vec![paragraph(vec![Node::text("first")]), paragraph(vec![Node::text("last")])],
    )
}

#[test]
fn test_paste_after_selection() {
    let mut editor = editor();
    assert!(editor.import_html("<div>pasted <b>text</b></div>", false).unwrap());

    assert_eq!(
        editor.export_html().unwrap(),
        "<p><span>first</span></p><p><span>pasted </span><b><span>text</span></b></p><p><span>last</span></p>"
    );
    assert_eq!(editor.selection(), Some(Selection::at(1)));
}

#[test]
fn test_paste_before_selection() {
    let mut editor = editor();
    editor.set_selection(Some(Selection::at(1)));
    assert!(editor.import_html("<h2>a</h2><p>b</p>", true).unwrap());

    let kinds: Vec<_> = editor.root().iter().map(Node::kind).collect();
    assert_eq!(
        kinds,
        vec![
            NodeKind::Paragraph,
            NodeKind::Heading,
            NodeKind::Paragraph,
            NodeKind::Paragraph
        ]
    );
    assert_eq!(editor.root()[3], paragraph(vec![Node::text("last")]));
    assert_eq!(editor.selection(), Some(Selection::at(2)));
}

#[test]
fn test_paste_uses_editor_registry() {
    let mut editor = Editor::new(NodeRegistry::from_kinds([NodeKind::Paragraph, NodeKind::Text]));
    editor.set_selection(Some(Selection::at(0)));
    assert!(editor.import_html("<ul><li>one</li></ul>", true).unwrap());

    // Lists are not registered, so their text lands in a paragraph.
    assert_eq!(editor.root(), &[paragraph(vec![Node::text("one")])]);
}

#[test]
fn test_paste_without_selection_fails() {
    let mut editor = Editor::new(NodeRegistry::with_defaults());
    let err = editor.import_html("<p>x</p>", true).unwrap_err();
    assert_eq!(err, ConversionError::InvalidSelectionState);
    assert!(editor.root().is_empty());
}

#[test]
fn test_update_rolls_back_on_error() {
    let mut editor = editor();
    let before = editor.root().to_vec();

    let result = editor.update(|txn| {
        let nodes = txn.generate_nodes_from_html("<p>new</p>")?;
        txn.insert_nodes(nodes, true)?;
        assert_eq!(txn.root().len(), 3);
        txn.replace_block(0, Node::list_item())
    });

    assert!(matches!(result, Err(ConversionError::TreeMutationRejected(_))));
    assert_eq!(editor.root(), before.as_slice());
}
