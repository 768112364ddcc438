// src/provider/markdown.rs
// =============================================================================
// Markdown provider.
//
// We use the `pulldown-cmark` crate to render CommonMark to HTML, then hand
// the result to the HTML5 provider. Inline links, autolinks and any raw
// <a> tags written in the Markdown all end up as anchor elements.
// =============================================================================

use super::{read_source, Html5Provider, ParseError, TreeProvider};
use crate::dom::Document;
use pulldown_cmark::{html, Options, Parser};
use std::io::Read;

#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownProvider;

impl MarkdownProvider {
    pub fn parse_str(&self, markdown: &str) -> Result<Document, ParseError> {
        let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
        let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut rendered, parser);
        Html5Provider.parse_str(&rendered)
    }
}

impl TreeProvider for MarkdownProvider {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn parse(&self, source: &mut dyn Read) -> Result<Document, ParseError> {
        let markdown = read_source(source)?;
        self.parse_str(&markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::links_in;

    #[test]
    fn test_markdown_links_become_anchors() {
        let doc = MarkdownProvider.parse_str(
            "Check out [Rust *lang*](https://www.rust-lang.org) and <https://crates.io>.",
        )
        .unwrap();
        let links = links_in(&doc);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].href, "https://www.rust-lang.org");
        assert_eq!(links[0].text, "Rust lang");
        assert_eq!(links[1].href, "https://crates.io");
        assert_eq!(links[1].text, "https://crates.io");
    }

    #[test]
    fn test_relative_links_are_kept_verbatim() {
        let doc = MarkdownProvider.parse_str("See [docs](./docs/README.md)").unwrap();
        let links = links_in(&doc);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].href, "./docs/README.md");
    }

    #[test]
    fn test_plain_markdown_has_no_links() {
        let doc = MarkdownProvider.parse_str("# Title\n\nJust text.").unwrap();
        assert!(links_in(&doc).is_empty());
    }
}
