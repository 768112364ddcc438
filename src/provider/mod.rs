// src/provider/mod.rs
// =============================================================================
// Tree providers: turn raw markup into a dom::Document.
//
// Submodules:
// - html: lenient HTML5 parsing with scraper (html5ever), never rejects markup
// - xml: strict XHTML/XML parsing with quick-xml, rejects malformed input
// - markdown: renders CommonMark with pulldown-cmark, then parses as HTML
//
// This is the only place in the crate where anything can fail. Once a
// Document exists, extracting links from it is infallible.
// =============================================================================

mod html;
mod markdown;
mod xml;

pub use html::Html5Provider;
pub use markdown::MarkdownProvider;
pub use xml::XmlProvider;

use crate::dom::Document;
use std::io::Read;
use thiserror::Error;

/// Why a provider could not build a tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The source could not be read, or was not valid UTF-8.
    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// quick-xml rejected the markup.
    #[error("malformed markup at byte {position}: {source}")]
    Markup {
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    #[error("mismatched end tag: expected </{expected}>, found </{found}>")]
    MismatchedEndTag { expected: String, found: String },

    #[error("end tag </{tag}> has no matching start tag")]
    UnmatchedEndTag { tag: String },

    #[error("element <{tag}> is never closed")]
    Unclosed { tag: String },
}

/// Something that can parse a markup source into a node tree.
pub trait TreeProvider {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn parse(&self, source: &mut dyn Read) -> Result<Document, ParseError>;
}

// Reads the whole source as UTF-8. Invalid UTF-8 surfaces as an io::Error
// of kind InvalidData.
fn read_source(source: &mut dyn Read) -> Result<String, ParseError> {
    let mut markup = String::new();
    source.read_to_string(&mut markup)?;
    Ok(markup)
}
