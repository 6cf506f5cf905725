//! XML parser implementation.
//!
//! A recursive-descent parser over a byte [`Cursor`]:
//! - an optional `<?xml ...?>` declaration whose attributes land on the root
//! - zero or more top-level elements
//! - mixed content: child elements interleaved with character data
//! - comments wherever whitespace is allowed between tokens
//!
//! Constructs that may legitimately be absent report [`Match::NoMatch`];
//! anything malformed aborts the parse and drops the partial document.

use tracing::{debug, trace};

use super::config::{ParserConfig, ParsingContext};
use super::cursor::Cursor;
use super::scanner::{
    name_to_string, scan_attribute, scan_character_data, scan_element_name, Match,
};
use crate::document::{Document, NodeId};
use crate::error::{Result, SyntaxError};

/// Parser for XML documents
#[derive(Debug)]
pub struct XmlParser<'a> {
    cursor: Cursor<'a>,
    config: ParserConfig,
    context: ParsingContext,
}

impl<'a> XmlParser<'a> {
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: ParserConfig) -> Self {
        Self {
            cursor: Cursor::new(input),
            config,
            context: ParsingContext::new(),
        }
    }

    /// Parses a complete document
    /// # Returns
    /// - Ok(Document) owning every parsed node
    /// - Err if any part of the input is malformed or exceeds a limit
    pub fn parse(&mut self) -> Result<Document> {
        self.config.validate_input_size(self.cursor.len())?;

        let mut document = Document::new();
        let root = document.root_id();

        self.cursor.skip_whitespace_and_comments();
        if self.cursor.consume_literal(b"<?xml") {
            self.parse_attributes(&mut document, root)?;
            self.cursor.skip_whitespace_and_comments();
            if !self.cursor.consume_literal(b"?>") {
                return Err(self.cursor.error(SyntaxError::MissingDeclarationEnd));
            }
            self.cursor.skip_whitespace_and_comments();
            debug!(
                attributes = document.attribute_count(root),
                "parsed xml declaration"
            );
        }

        let top_level = self.parse_children(&mut document, root)?;

        self.cursor.skip_whitespace_and_comments();
        if !self.cursor.is_eof() {
            return Err(self.cursor.error(SyntaxError::TrailingContent));
        }

        debug!(top_level, nodes = document.len(), "document parsed");
        Ok(document)
    }

    /// Match elements until one fails to start, attaching each under `parent`
    fn parse_children(&mut self, document: &mut Document, parent: NodeId) -> Result<usize> {
        let mut count = 0;
        while let Match::Matched(child) = self.parse_element(document)? {
            document.append_child(parent, child);
            count += 1;
        }
        Ok(count)
    }

    fn parse_attributes(&mut self, document: &mut Document, id: NodeId) -> Result<()> {
        while let Match::Matched(attribute) = scan_attribute(&mut self.cursor)? {
            self.config
                .validate_attribute_count(document.attribute_count(id) + 1)
                .map_err(|e| e.with_location(self.cursor.location()))?;
            document.push_attribute(id, attribute);
        }
        Ok(())
    }

    /// Parse one element starting at `<`, including its content and end tag.
    ///
    /// The new node is returned detached; the caller attaches it.
    fn parse_element(&mut self, document: &mut Document) -> Result<Match<NodeId>> {
        let checkpoint = self.cursor;
        self.cursor.skip_whitespace_and_comments();

        if !self.cursor.consume(b'<') {
            self.cursor = checkpoint;
            return Ok(Match::NoMatch);
        }
        let Some(name) = scan_element_name(&mut self.cursor) else {
            self.cursor = checkpoint;
            return Ok(Match::NoMatch);
        };

        self.context
            .enter_nested(&self.config)
            .map_err(|e| e.with_location(self.cursor.location()))?;

        let id = document.create_element(name_to_string(name));

        self.cursor.skip_whitespace_and_comments();
        self.parse_attributes(document, id)?;
        self.cursor.skip_whitespace_and_comments();

        let self_closing = self.cursor.consume(b'/');
        self.cursor.expect(b'>')?;
        self.cursor.skip_whitespace_and_comments();

        if !self_closing {
            self.parse_content(document, id)?;
            self.parse_end_tag(name)?;
        }

        trace!(
            name = %String::from_utf8_lossy(name),
            depth = self.context.depth(),
            self_closing,
            "element parsed"
        );
        self.context.exit_nested();
        Ok(Match::Matched(id))
    }

    /// Alternate between child elements and character data until `</` or
    /// the end of input.
    fn parse_content(&mut self, document: &mut Document, id: NodeId) -> Result<()> {
        let mut body = Vec::new();

        while !self.cursor.is_eof() && !self.cursor.starts_with(b"</") {
            let start = self.cursor.pos();

            self.parse_children(document, id)?;
            self.cursor.skip_whitespace_and_comments();
            scan_character_data(&mut self.cursor, &mut body);

            if self.cursor.pos() == start {
                return Err(self.cursor.error(SyntaxError::NoProgress));
            }
        }

        // Absent rather than empty when no character data was seen
        if !body.is_empty() {
            body.shrink_to_fit();
            document.set_body(id, body);
        }
        Ok(())
    }

    /// `</name>` with no whitespace before `>`, then trailing whitespace
    fn parse_end_tag(&mut self, name: &[u8]) -> Result<()> {
        self.cursor.skip_whitespace_and_comments();

        if self.cursor.is_eof() {
            let name = String::from_utf8_lossy(name).into_owned();
            return Err(self.cursor.error(SyntaxError::UnexpectedEof(name)));
        }

        let matched = self.cursor.consume_literal(b"</")
            && self.cursor.consume_literal(name)
            && self.cursor.consume(b'>');
        if !matched {
            let name = String::from_utf8_lossy(name).into_owned();
            return Err(self.cursor.error(SyntaxError::MismatchedEndTag(name)));
        }

        self.cursor.skip_whitespace_and_comments();
        Ok(())
    }
}
