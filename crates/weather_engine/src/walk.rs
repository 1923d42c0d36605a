//! Depth-first helpers over a parsed HTML tree.
//!
//! Traversal follows first-child and next-sibling links only and stops at the
//! first missing link, so partial trees are walked as far as they go.

use ego_tree::NodeRef;
use scraper::node::Node;

/// All element descendants of `root` named `tag`, in document (pre-order) order.
///
/// `root` itself is never part of the result. Tag names compare ASCII
/// case-insensitively.
pub fn find_descendants_by_tag<'a>(root: NodeRef<'a, Node>, tag: &str) -> Vec<NodeRef<'a, Node>> {
    let mut found = Vec::new();
    collect_descendants(root, tag, &mut found);
    found
}

fn collect_descendants<'a>(node: NodeRef<'a, Node>, tag: &str, found: &mut Vec<NodeRef<'a, Node>>) {
    let mut child = node.first_child();
    while let Some(current) = child {
        if let Node::Element(element) = current.value() {
            if element.name().eq_ignore_ascii_case(tag) {
                found.push(current);
            }
            collect_descendants(current, tag, found);
        }
        child = current.next_sibling();
    }
}

/// Concatenated text of a node.
///
/// Text nodes yield their literal text, elements the text of their children
/// in document order, anything else (or `None`) an empty string.
pub fn text_content(node: Option<NodeRef<'_, Node>>) -> String {
    let mut out = String::new();
    if let Some(node) = node {
        append_text(node, &mut out);
    }
    out
}

fn append_text(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => out.push_str(text),
        Node::Element(_) => {
            let mut child = node.first_child();
            while let Some(current) = child {
                append_text(current, out);
                child = current.next_sibling();
            }
        }
        _ => {}
    }
}
