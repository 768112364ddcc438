// src/provider/html.rs
// =============================================================================
// Lenient HTML5 provider.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever (Mozilla's HTML parser)
// - Recovers from any malformed input the way a browser would
//
// scraper keeps its DOM in an ego_tree::Tree. We copy it into our own
// dom::Node tree by walking traverse(), which yields an Open edge when a
// node is entered and a Close edge when it is left, without recursion.
// =============================================================================

use super::{read_source, ParseError, TreeProvider};
use crate::dom::{Document, Element, Node, TreeBuilder};
use ego_tree::iter::Edge;
use scraper::Html;
use std::io::Read;
use tracing::debug;

/// Parses HTML the way a browser does. Malformed markup is repaired, not
/// rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct Html5Provider;

impl Html5Provider {
    /// Parses markup that is already in memory.
    ///
    /// html5ever always yields a balanced tree, so the only errors are
    /// TreeBuilder rejecting that tree, which would be a bug here.
    pub fn parse_str(&self, markup: &str) -> Result<Document, ParseError> {
        let html = Html::parse_document(markup);

        // html5ever records every recovery it made; useful when a link
        // shows up somewhere unexpected
        if !html.errors.is_empty() {
            debug!(
                recoveries = html.errors.len(),
                first = %html.errors[0],
                "html5ever repaired malformed markup"
            );
        }

        let mut builder = TreeBuilder::new();
        for edge in html.tree.root().traverse() {
            match edge {
                Edge::Open(node) => match node.value() {
                    scraper::Node::Element(el) => {
                        let mut element = Element::new(el.name());
                        for (key, value) in el.attrs() {
                            element.attributes.push((key.to_string(), value.to_string()));
                        }
                        builder.open(element);
                    }
                    scraper::Node::Text(text) => builder.push(Node::text(&**text)),
                    scraper::Node::Comment(comment) => builder.push(Node::comment(&**comment)),
                    scraper::Node::Doctype(_) | scraper::Node::ProcessingInstruction(_) => {
                        builder.push(Node::Other)
                    }
                    // The document root itself has no counterpart in our tree
                    scraper::Node::Document | scraper::Node::Fragment => {}
                },
                Edge::Close(node) => {
                    if let scraper::Node::Element(el) = node.value() {
                        builder.close(el.name())?;
                    }
                }
            }
        }

        builder.finish()
    }
}

impl TreeProvider for Html5Provider {
    fn name(&self) -> &'static str {
        "html5"
    }

    fn parse(&self, source: &mut dyn Read) -> Result<Document, ParseError> {
        let markup = read_source(source)?;
        self.parse_str(&markup)
    }
}
