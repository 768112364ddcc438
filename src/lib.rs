// src/lib.rs
// =============================================================================
// link-extract: find every <a> element in a document and report its href
// and visible text, in document order.
//
// Layout:
// - dom: the owned node tree the extractor walks
// - provider: adapters that turn raw markup into that tree
//   (html5ever via scraper, quick-xml, pulldown-cmark)
// - extract: anchor collection, text extraction and the parse() entry point
// =============================================================================

pub mod dom;
pub mod extract;
pub mod provider;

pub use extract::{links_in, parse, parse_with, Link};
pub use provider::{Html5Provider, MarkdownProvider, ParseError, TreeProvider, XmlProvider};
