//! Error handling types for the parser
//!
//! Every failure produced by this crate is a [`ParseError`]. The kind tells
//! callers which stage rejected the input; the location and context are
//! diagnostics only. A parse either yields a complete document or an error,
//! never a partially built tree.

use std::{error::Error as StdError, fmt};

use thiserror::Error;

/// Main error type for parsing operations
#[derive(Debug)]
pub struct ParseError {
    /// The specific kind of error
    kind: ParseErrorKind,
    /// Location where the error occurred
    location: Option<Location>,
    /// Source error that caused this error
    source: Option<Box<dyn StdError + Send + Sync>>,
    /// Additional context for the error
    context: Option<String>,
}

/// Represents a location in the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    /// Byte offset from the start of the input
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
}

impl Location {
    pub const fn new(offset: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Top-level error categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    Encoding(EncodingError),
    IO(IOError),
    Security(SecurityError),
    Syntax(SyntaxError),
}

/// Structural and lexical mismatches in the XML text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("expected '{0}'")]
    ExpectedByte(char),
    #[error("unterminated attribute value")]
    UnterminatedValue,
    #[error("end tag does not match '<{0}>'")]
    MismatchedEndTag(String),
    #[error("missing '?>' after the xml declaration")]
    MissingDeclarationEnd,
    #[error("unexpected content after the last element")]
    TrailingContent,
    #[error("unexpected end of input inside '<{0}>'")]
    UnexpectedEof(String),
    #[error("markup that is neither an element nor an end tag")]
    NoProgress,
}

/// UTF-16 transcoding failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("unpaired surrogate 0x{0:04X}")]
    UnpairedSurrogate(u16),
    #[error("input ends in the middle of a UTF-16 code unit")]
    TruncatedUnit,
}

/// Resource limit violations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SecurityError {
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,
    #[error("maximum input size exceeded")]
    MaxSizeExceeded,
    #[error("maximum number of attributes on one element exceeded")]
    MaxAttributesExceeded,
}

/// IO operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IOError {
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("read error: {0}")]
    ReadError(String),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            source: None,
            context: None,
        }
    }

    pub fn syntax(err: SyntaxError) -> Self {
        Self::new(ParseErrorKind::Syntax(err))
    }

    pub fn encoding(err: EncodingError) -> Self {
        Self::new(ParseErrorKind::Encoding(err))
    }

    pub fn security(err: SecurityError) -> Self {
        Self::new(ParseErrorKind::Security(err))
    }

    pub fn io(err: IOError) -> Self {
        Self::new(ParseErrorKind::IO(err))
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// True when the input itself was rejected, as opposed to a limit or
    /// file access problem.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::Syntax(_) | ParseErrorKind::Encoding(_)
        )
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }

    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encoding(err) => write!(f, "{err}"),
            Self::IO(err) => write!(f, "{err}"),
            Self::Security(err) => write!(f, "{err}"),
            Self::Syntax(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = &self.location {
            write!(f, "at {}: {}", loc, self.kind)?;
        } else {
            write!(f, "Error: {}", self.kind)?;
        }

        if let Some(ctx) = &self.context {
            write!(f, "\nContext: {ctx}")?;
        }

        if let Some(source) = &self.source {
            write!(f, "\nCaused by: {source}")?;
        }

        Ok(())
    }
}

impl StdError for ParseError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        let source: &(dyn StdError + 'static) = self.source.as_deref()?;
        Some(source)
    }
}

impl From<SyntaxError> for ParseError {
    fn from(err: SyntaxError) -> Self {
        Self::syntax(err)
    }
}

impl From<EncodingError> for ParseError {
    fn from(err: EncodingError) -> Self {
        Self::encoding(err)
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_location() {
        let err = ParseError::syntax(SyntaxError::ExpectedByte('>'))
            .with_location(Location::new(7, 2, 3));
        assert_eq!(err.to_string(), "at line 2, column 3: expected '>'");
    }

    #[test]
    fn test_display_without_location() {
        let err = ParseError::encoding(EncodingError::UnpairedSurrogate(0xD800));
        assert_eq!(err.to_string(), "Error: unpaired surrogate 0xD800");
    }

    #[test]
    fn test_display_context_and_source() {
        let io = std::io::Error::other("disk on fire");
        let err = ParseError::io(IOError::ReadError("a.xml".to_string()))
            .with_context("loading fixture")
            .with_source(io);
        let text = err.to_string();
        assert!(text.contains("read error: a.xml"));
        assert!(text.contains("Context: loading fixture"));
        assert!(text.contains("Caused by: disk on fire"));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn test_malformed_classification() {
        assert!(ParseError::syntax(SyntaxError::TrailingContent).is_malformed());
        assert!(ParseError::encoding(EncodingError::TruncatedUnit).is_malformed());
        assert!(!ParseError::security(SecurityError::MaxDepthExceeded).is_malformed());
        assert!(!ParseError::io(IOError::FileNotFound("x".into())).is_malformed());
    }
}
