// src/extract/link.rs
// =============================================================================
// The Link record and how one anchor element becomes one.
// =============================================================================

use super::text::element_text;
use crate::dom::Element;
use serde::Serialize;

/// A hyperlink found in a document.
///
/// #[derive(Serialize)] lets the CLI print it as JSON
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    /// The href attribute exactly as written, or "" if there was none
    pub href: String,
    /// Visible text with whitespace collapsed and comments removed
    pub text: String,
}

/// Builds the Link for an anchor element.
pub fn build_link(anchor: &Element) -> Link {
    Link {
        href: anchor.attr("href").unwrap_or("").to_string(),
        text: element_text(anchor),
    }
}
