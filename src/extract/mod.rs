// src/extract/mod.rs
// =============================================================================
// Link extraction.
//
// Submodules:
// - anchors: finds every <a> element in document order
// - text: reduces a subtree to its visible, whitespace-collapsed text
// - link: turns one <a> element into a Link
//
// parse() is the entry point: provider -> tree -> anchors -> links. Only the
// provider step can fail; everything after it is a plain function of the tree.
// =============================================================================

mod anchors;
mod link;
mod text;

pub use anchors::{anchors_in, collect_anchors};
pub use link::{build_link, Link};
pub use text::{collapse_whitespace, text_of};

use crate::dom::Document;
use crate::provider::{Html5Provider, ParseError, TreeProvider};
use std::io::Read;
use tracing::debug;

/// Extracts every link from an HTML document.
///
/// Uses the lenient HTML5 provider, so this only fails if `source` cannot
/// be read as UTF-8.
///
/// ```
/// let links = link_extract::parse(r#"<a href="/x">X</a><a href="/y">Y  Z</a>"#.as_bytes()).unwrap();
/// assert_eq!(links[1].text, "Y Z");
/// ```
pub fn parse<R: Read>(source: R) -> Result<Vec<Link>, ParseError> {
    parse_with(&Html5Provider, source)
}

/// Extracts every link using the given provider. Provider errors are
/// returned unchanged and no partial result is produced.
pub fn parse_with<R: Read>(provider: &dyn TreeProvider, mut source: R) -> Result<Vec<Link>, ParseError> {
    let document = provider.parse(&mut source)?;
    let links = links_in(&document);
    debug!(provider = provider.name(), links = links.len(), "extracted links");
    Ok(links)
}

/// Links of an already parsed document, in document order.
pub fn links_in(document: &Document) -> Vec<Link> {
    collect_anchors(&document.children)
        .into_iter()
        .map(build_link)
        .collect()
}
