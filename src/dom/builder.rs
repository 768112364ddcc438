// src/dom/builder.rs
// =============================================================================
// Builds a Document from a flat stream of "open element", "leaf node" and
// "close element" steps.
//
// Both providers see their input as events (quick-xml emits them directly,
// ego_tree's traverse() yields Open/Close edges), so a stack of unfinished
// elements is all we need. No recursion means no stack overflow on deeply
// nested documents.
// =============================================================================

use super::{Document, Element, Node};
use crate::provider::ParseError;

#[derive(Debug, Default)]
pub struct TreeBuilder {
    // Elements whose end tag has not been seen yet, outermost first
    open: Vec<Element>,
    // Finished top-level nodes
    roots: Vec<Node>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new element; following nodes become its children.
    pub fn open(&mut self, element: Element) {
        self.open.push(element);
    }

    /// Appends a complete node to the innermost open element.
    pub fn push(&mut self, node: Node) {
        match self.open.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    /// Closes the innermost open element, which must be named `tag`.
    pub fn close(&mut self, tag: &str) -> Result<(), ParseError> {
        let mut element = self.open.pop().ok_or_else(|| ParseError::UnmatchedEndTag {
            tag: tag.to_string(),
        })?;

        if element.tag != tag {
            return Err(ParseError::MismatchedEndTag {
                expected: std::mem::take(&mut element.tag),
                found: tag.to_string(),
            });
        }

        self.push(Node::Element(element));
        Ok(())
    }

    /// Finishes the document. Fails if any element is still open.
    pub fn finish(mut self) -> Result<Document, ParseError> {
        // Report the innermost one, that's where the input stopped
        if let Some(mut element) = self.open.pop() {
            return Err(ParseError::Unclosed {
                tag: std::mem::take(&mut element.tag),
            });
        }
        Ok(Document::new(self.roots))
    }
}
