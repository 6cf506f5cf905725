//! ctxml: a small, read-only XML tree parser
//!
//! This crate provides functionality to:
//! - Parse a restricted XML subset into an owned document tree
//! - Transcode UTF-16 input (detected by its byte-order mark) before parsing
//! - Query the tree by first-match child and attribute lookup
//!
//! Supported input is elements, `name="value"` attributes, mixed text with
//! the five predefined entities, comments, and one optional leading
//! `<?xml ...?>` declaration.
//!
//! # Examples
//! ```
//! use ctxml::{parse_str, Result};
//!
//! fn example() -> Result<()> {
//!     let doc = parse_str(r#"<?xml version="1.0"?><config><name lang="en">ctxml</name></config>"#)?;
//!     let name = doc.root().child("config").and_then(|c| c.child("name"));
//!     assert_eq!(name.and_then(|n| n.attribute("lang")), Some("en"));
//!     assert_eq!(name.and_then(|n| n.body()), Some("ctxml"));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

use std::path::Path;

use tracing::{debug, instrument};

pub mod document;
pub mod error;
pub mod parser;
pub mod test_utils;
pub mod transcode;
pub mod utils;

// Re-exports
pub use document::{Attribute, Document, Node, NodeId};
pub use error::{ParseError, ParseErrorKind, Result};
pub use parser::{ParserConfig, XmlParser};
pub use transcode::decode_utf16_bom;

/// Parse a byte buffer holding XML text
pub fn parse(source: &[u8]) -> Result<Document> {
    utils::parse_xml(source)
}

/// Parse XML text
pub fn parse_str(source: &str) -> Result<Document> {
    utils::parse_xml(source.as_bytes())
}

/// Parse with custom limits
pub fn parse_with_config(source: &[u8], config: ParserConfig) -> Result<Document> {
    utils::parse_xml_with_config(source, config)
}

/// Read and parse a file, transcoding it first when it starts with a UTF-16
/// byte-order mark.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let bytes = utils::read_file(path.as_ref())?;
    debug!(bytes = bytes.len(), "file read");

    let result = decode_utf16_bom(&bytes).and_then(|decoded| match decoded {
        Some(text) => {
            debug!(utf8_bytes = text.len(), "transcoded utf-16 input");
            parse(text.as_bytes())
        }
        None => parse(&bytes),
    });

    if let Err(err) = &result {
        debug!(%err, "parse failed");
    }
    result
}
