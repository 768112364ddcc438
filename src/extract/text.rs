// src/extract/text.rs
// =============================================================================
// Visible text of a subtree.
//
// Rules:
// - Text nodes contribute their content unchanged
// - Comments and other non-element nodes contribute nothing
// - An element concatenates its children's text, then collapses every run
//   of whitespace to one space and trims the ends
//
// Collapsing happens at every element, not once at the top. That is
// observable: "<b>x </b>y" gives "xy" because the space is trimmed off
// the <b> before "y" is appended.
// =============================================================================

use crate::dom::{Element, Node};
use std::slice;

/// Visible text of `node`.
pub fn text_of(node: &Node) -> String {
    match node {
        Node::Text(content) => content.clone(),
        Node::Element(element) => element_text(element),
        Node::Comment(_) | Node::Other => String::new(),
    }
}

/// Replaces each maximal whitespace run with a single space and trims
/// both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

// One element being reduced: the children not yet visited and the text
// gathered from the ones that were
struct Frame<'a> {
    children: slice::Iter<'a, Node>,
    text: String,
}

impl<'a> Frame<'a> {
    fn new(element: &'a Element) -> Self {
        Frame {
            children: element.children.iter(),
            text: String::new(),
        }
    }
}

// Same result as the recursive definition, but nesting depth lives on the
// heap
pub(crate) fn element_text(root: &Element) -> String {
    let mut stack = vec![Frame::new(root)];

    while let Some(frame) = stack.last_mut() {
        match frame.children.next() {
            Some(Node::Text(content)) => frame.text.push_str(content),
            Some(Node::Element(child)) => stack.push(Frame::new(child)),
            Some(Node::Comment(_) | Node::Other) => {}
            None => {
                let collapsed = collapse_whitespace(&frame.text);
                stack.pop();
                match stack.last_mut() {
                    Some(parent) => parent.text.push_str(&collapsed),
                    None => return collapsed,
                }
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  dog \n\t cat  "), "dog cat");
        assert_eq!(collapse_whitespace("one"), "one");
        assert_eq!(collapse_whitespace(" \n "), "");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_text_node_is_raw() {
        assert_eq!(text_of(&Node::text("  raw  text ")), "  raw  text ");
    }

    #[test]
    fn test_comment_and_other_are_empty() {
        assert_eq!(text_of(&Node::comment("hidden")), "");
        assert_eq!(text_of(&Node::Other), "");
    }

    #[test]
    fn test_element_excludes_comments() {
        let el: Node = Element::new("a")
            .with_child(Node::text("dog cat\n        "))
            .with_child(Node::comment(" commented text "))
            .with_child(Node::text("\n    "))
            .into();
        assert_eq!(text_of(&el), "dog cat");
    }

    #[test]
    fn test_nested_elements_in_child_order() {
        let el: Node = Element::new("a")
            .with_child(Node::text("Hello "))
            .with_child(Element::new("b").with_child(Node::text("big")))
            .with_child(Node::text("  "))
            .with_child(
                Element::new("span")
                    .with_child(Element::new("i").with_child(Node::text(" wide ")))
                    .with_child(Node::text(" world")),
            )
            .into();
        assert_eq!(text_of(&el), "Hello big wide world");
    }

    #[test]
    fn test_collapses_per_element() {
        let el: Node = Element::new("a")
            .with_child(Element::new("b").with_child(Node::text("x ")))
            .with_child(Node::text("y"))
            .into();
        assert_eq!(text_of(&el), "xy");
    }

    #[test]
    fn test_empty_element() {
        assert_eq!(text_of(&Element::new("a").into()), "");
    }

    #[test]
    fn test_deep_nesting() {
        let mut current = Element::new("b").with_child(Node::text(" core "));
        for i in 0..200_000 {
            current = Element::new("span")
                .with_child(Node::text(if i % 2 == 0 { "" } else { " " }))
                .with_child(current);
        }
        assert_eq!(text_of(&current.into()), "core");
    }
}
