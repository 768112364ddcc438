// src/provider/xml.rs
// =============================================================================
// Strict XHTML/XML provider built on quick-xml.
//
// Unlike the HTML5 provider this one refuses broken documents: syntax
// errors, unquoted attribute values, unknown entities, mismatched or
// missing end tags all become a ParseError. Use it when the input is
// supposed to be well-formed and silently repaired output would hide bugs.
// =============================================================================

use super::{read_source, ParseError, TreeProvider};
use crate::dom::{Document, Element, Node, TreeBuilder};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::Read;

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlProvider;

impl XmlProvider {
    pub fn parse_str(&self, markup: &str) -> Result<Document, ParseError> {
        let mut reader = Reader::from_str(markup);
        // End tag matching is done by TreeBuilder so the error says which
        // element was left open
        reader.config_mut().check_end_names = false;

        let mut builder = TreeBuilder::new();
        loop {
            let event = reader.read_event().map_err(|e| ParseError::Markup {
                position: reader.error_position() as u64,
                source: e,
            })?;

            // Errors raised while decoding an event's content point at the
            // end of that event
            let markup_error = |source: quick_xml::Error| ParseError::Markup {
                position: reader.buffer_position() as u64,
                source,
            };

            match event {
                Event::Start(start) => builder.open(element(&start).map_err(markup_error)?),
                Event::Empty(start) => {
                    builder.push(Node::Element(element(&start).map_err(markup_error)?))
                }
                Event::End(end) => builder.close(&String::from_utf8_lossy(end.name().as_ref()))?,
                Event::Text(text) => {
                    let content = text.unescape().map_err(markup_error)?;
                    builder.push(Node::text(content));
                }
                Event::CData(data) => builder.push(Node::text(String::from_utf8_lossy(&data))),
                Event::Comment(comment) => {
                    builder.push(Node::comment(String::from_utf8_lossy(&comment)))
                }
                Event::Decl(_) | Event::PI(_) | Event::DocType(_) => builder.push(Node::Other),
                Event::Eof => return builder.finish(),
            }
        }
    }
}

impl TreeProvider for XmlProvider {
    fn name(&self) -> &'static str {
        "xml"
    }

    fn parse(&self, source: &mut dyn Read) -> Result<Document, ParseError> {
        let markup = read_source(source)?;
        self.parse_str(&markup)
    }
}

// Builds an element (without children) from a start tag. Duplicate
// attribute checks are off: repeated keys are kept and lookups take the
// first one.
fn element(start: &BytesStart) -> Result<Element, quick_xml::Error> {
    let mut element = Element::new(String::from_utf8_lossy(start.name().as_ref()));
    for attr in start.attributes().with_checks(false) {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}
