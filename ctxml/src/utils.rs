use std::{fs, io, path::Path};

use crate::{
    document::Document,
    error::{IOError, ParseError, Result},
    parser::{ParserConfig, XmlParser},
};

/// Read a whole file and append two zero bytes as the scan sentinel, so the
/// buffer is terminated whether it holds byte text or UTF-16 units.
///
/// A file with no content is a read error.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    let display = path.display().to_string();
    let mut bytes = fs::read(path).map_err(|e| {
        let kind = match e.kind() {
            io::ErrorKind::NotFound => IOError::FileNotFound(display.clone()),
            io::ErrorKind::PermissionDenied => IOError::PermissionDenied(display.clone()),
            _ => IOError::ReadError(display.clone()),
        };
        ParseError::io(kind).with_source(e)
    })?;
    if bytes.is_empty() {
        return Err(ParseError::io(IOError::ReadError(display)).with_context("file is empty"));
    }
    bytes.extend_from_slice(&[0, 0]);
    Ok(bytes)
}

pub fn parse_xml(source: &[u8]) -> Result<Document> {
    XmlParser::new(source).parse()
}

pub fn parse_xml_with_config(source: &[u8], config: ParserConfig) -> Result<Document> {
    XmlParser::with_config(source, config).parse()
}
