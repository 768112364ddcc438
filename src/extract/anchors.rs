// src/extract/anchors.rs
// =============================================================================
// Finds the anchor (<a>) elements of a tree in document order.
//
// An anchor is a leaf for this search: we never look inside one for more
// anchors. Nested links are invalid HTML, and if a malformed document has
// them the inner one is just part of the outer link's text.
//
// The walk is a pre-order depth-first search with an explicit stack, so a
// deeply nested document can't overflow the call stack.
// =============================================================================

use crate::dom::{Element, Node};

/// Every anchor reachable from `roots`, in pre-order.
pub fn collect_anchors(roots: &[Node]) -> Vec<&Element> {
    let mut anchors = Vec::new();

    // Children are pushed in reverse so the first child is popped first
    let mut pending: Vec<&Node> = roots.iter().rev().collect();

    while let Some(node) = pending.pop() {
        if let Node::Element(element) = node {
            if element.is_anchor() {
                anchors.push(element);
            } else {
                pending.extend(element.children.iter().rev());
            }
        }
    }

    anchors
}

/// Anchors inside (or equal to) a single node.
pub fn anchors_in(root: &Node) -> Vec<&Element> {
    collect_anchors(std::slice::from_ref(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor(href: &str) -> Element {
        Element::new("a").with_attr("href", href)
    }

    fn hrefs(anchors: &[&Element]) -> Vec<String> {
        anchors
            .iter()
            .map(|a| a.attr("href").unwrap_or("").to_string())
            .collect()
    }

    #[test]
    fn test_preorder_document_order() {
        let root: Node = Element::new("body")
            .with_child(
                Element::new("div")
                    .with_child(anchor("/1"))
                    .with_child(Element::new("p").with_child(anchor("/2"))),
            )
            .with_child(Node::text("between"))
            .with_child(anchor("/3"))
            .into();

        assert_eq!(hrefs(&anchors_in(&root)), vec!["/1", "/2", "/3"]);
    }

    #[test]
    fn test_root_anchor_is_collected() {
        let root: Node = anchor("/self").into();
        assert_eq!(hrefs(&anchors_in(&root)), vec!["/self"]);
    }

    #[test]
    fn test_does_not_descend_into_anchor() {
        let root: Node = Element::new("p")
            .with_child(anchor("/outer").with_child(anchor("/inner")))
            .with_child(anchor("/after"))
            .into();
        assert_eq!(hrefs(&anchors_in(&root)), vec!["/outer", "/after"]);
    }

    #[test]
    fn test_leaves_yield_nothing() {
        let roots = vec![Node::text("a"), Node::comment("<a href='/x'>"), Node::Other];
        assert!(collect_anchors(&roots).is_empty());
    }

    #[test]
    fn test_deeply_nested_tree() {
        let mut current = anchor("/deep");
        for _ in 0..200_000 {
            current = Element::new("span").with_child(current);
        }
        let root: Node = current.into();
        assert_eq!(hrefs(&anchors_in(&root)), vec!["/deep"]);
    }
}
