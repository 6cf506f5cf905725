//! Token-level scanners shared by the element matcher and the document driver.
//!
//! Each scanner either consumes a complete token, reports [`Match::NoMatch`]
//! with the cursor left where it was, or fails with a syntax error.

use super::cursor::Cursor;
use crate::document::Attribute;
use crate::error::{Result, SyntaxError};

/// Outcome of trying to recognise a construct at the current position
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Match<T> {
    Matched(T),
    /// Nothing of this kind starts here; try something else
    NoMatch,
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_element_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_attribute_name_char(b: u8) -> bool {
    is_element_name_char(b) || b == b'-'
}

fn scan_identifier<'a>(
    cursor: &mut Cursor<'a>,
    is_name_char: fn(u8) -> bool,
) -> Option<&'a [u8]> {
    let start = cursor.pos();
    if !cursor.current().is_some_and(is_name_start) {
        return None;
    }
    cursor.advance();
    while cursor.current().is_some_and(is_name_char) {
        cursor.advance();
    }
    Some(cursor.slice_from(start))
}

/// Element names: a letter or `_`, then letters, digits and `_`
pub fn scan_element_name<'a>(cursor: &mut Cursor<'a>) -> Option<&'a [u8]> {
    scan_identifier(cursor, is_element_name_char)
}

/// Attribute names also allow `-` after the first byte
pub fn scan_attribute_name<'a>(cursor: &mut Cursor<'a>) -> Option<&'a [u8]> {
    scan_identifier(cursor, is_attribute_name_char)
}

/// Scan one `name="value"` pair plus the whitespace and comments after it.
///
/// The value is kept raw: no entity decoding is applied inside quotes.
pub fn scan_attribute(cursor: &mut Cursor<'_>) -> Result<Match<Attribute>> {
    let checkpoint = *cursor;
    cursor.skip_whitespace_and_comments();

    let Some(name) = scan_attribute_name(cursor) else {
        *cursor = checkpoint;
        return Ok(Match::NoMatch);
    };

    cursor.expect(b'=')?;
    cursor.expect(b'"')?;

    let start = cursor.pos();
    while cursor.current().is_some_and(|b| b != b'"') {
        cursor.advance();
    }
    let value = cursor.slice_from(start);
    if !cursor.consume(b'"') {
        return Err(cursor.error(SyntaxError::UnterminatedValue));
    }

    cursor.skip_whitespace_and_comments();

    Ok(Match::Matched(Attribute::new(name_to_string(name), value.to_vec())))
}

/// Consume character data up to the next `<` or end of input, appending the
/// decoded bytes to `body`. Returns the number of input bytes consumed.
pub fn scan_character_data(cursor: &mut Cursor<'_>, body: &mut Vec<u8>) -> usize {
    let start = cursor.pos();
    while let Some(b) = cursor.current() {
        if b == b'<' {
            break;
        }
        cursor.advance();
        if b == b'&' {
            if let Some((len, decoded)) = match_entity(cursor.remaining()) {
                cursor.advance_by(len);
                body.push(decoded);
                continue;
            }
        }
        body.push(b);
    }
    cursor.pos() - start
}

/// Recognise one of the five predefined entities (without the leading `&`).
fn match_entity(rest: &[u8]) -> Option<(usize, u8)> {
    const ENTITIES: [(&[u8], u8); 5] = [
        (b"quot;", b'"'),
        (b"apos;", b'\''),
        (b"lt;", b'<'),
        (b"gt;", b'>'),
        (b"amp;", b'&'),
    ];

    ENTITIES
        .iter()
        .find(|(name, _)| rest.starts_with(name))
        .map(|(name, decoded)| (name.len(), *decoded))
}

/// Names only ever hold ASCII identifier bytes
pub fn name_to_string(name: &[u8]) -> String {
    name.iter().copied().map(char::from).collect()
}
