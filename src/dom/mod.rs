// src/dom/mod.rs
// =============================================================================
// The node tree consumed by the extractor.
//
// Providers build it, the extractor only reads it. Children are owned
// vectors kept in source order, which is the only ordering the output uses.
//
// Submodules:
// - builder: assembles a tree from open/close events without recursion
// =============================================================================

mod builder;

pub use builder::TreeBuilder;

/// One node of a parsed markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// A run of character data, exactly as the parser produced it.
    Text(String),
    Comment(String),
    /// Doctype, processing instruction or XML declaration.
    Other,
}

impl Node {
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    pub fn comment(content: impl Into<String>) -> Self {
        Node::Comment(content.into())
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A markup element with its attributes and children.
///
/// Attributes are a list, not a map: a document may repeat a key and
/// lookups must see the first occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds an attribute after any existing ones.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    /// Appends a child node.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Value of the first attribute named `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// True for hyperlink elements (`<a>`).
    pub fn is_anchor(&self) -> bool {
        self.tag == "a"
    }
}

// The derived drop would recurse once per nesting level and overflow the
// stack on deeply nested documents. Descendants are moved onto a heap
// work-list instead, so each element is dropped with no children left.
impl Drop for Element {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Root of a parsed document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Document { children }
    }
}
