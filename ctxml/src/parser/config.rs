use std::fmt;

use crate::error::{ParseError, Result, SecurityError};

/// Maximum element nesting depth; keeps the recursive matcher off the end of the stack
pub const DEFAULT_MAX_DEPTH: usize = 256;
/// Maximum input size (64MB)
pub const DEFAULT_MAX_SIZE: usize = 64 * 1024 * 1024;
/// Maximum number of attributes on a single element or declaration
pub const DEFAULT_MAX_ATTRIBUTES: usize = 1_024;

/// Configuration for parser limits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum nesting depth of elements
    pub max_depth: usize,
    /// Maximum input size in bytes
    pub max_size: usize,
    /// Maximum attributes per element
    pub max_attributes: usize,
}

/// Tracks nesting depth during parsing
#[derive(Debug)]
pub struct ParsingContext {
    current_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_size: DEFAULT_MAX_SIZE,
            max_attributes: DEFAULT_MAX_ATTRIBUTES,
        }
    }
}

impl fmt::Display for ParserConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParserConfig {{ max_depth: {}, max_size: {}, max_attributes: {} }}",
            self.max_depth, self.max_size, self.max_attributes
        )
    }
}

impl ParserConfig {
    pub fn validate_input_size(&self, size: usize) -> Result<()> {
        if size > self.max_size {
            return Err(
                ParseError::security(SecurityError::MaxSizeExceeded).with_context(format!(
                    "input size ({} bytes) exceeds maximum allowed ({})",
                    size, self.max_size
                )),
            );
        }
        Ok(())
    }

    pub fn validate_attribute_count(&self, count: usize) -> Result<()> {
        if count > self.max_attributes {
            return Err(ParseError::security(SecurityError::MaxAttributesExceeded));
        }
        Ok(())
    }
}

impl Default for ParsingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ParsingContext {
    pub fn new() -> Self {
        Self { current_depth: 0 }
    }

    pub fn depth(&self) -> usize {
        self.current_depth
    }

    pub fn enter_nested(&mut self, config: &ParserConfig) -> Result<()> {
        self.current_depth += 1;
        if self.current_depth > config.max_depth {
            return Err(ParseError::security(SecurityError::MaxDepthExceeded));
        }
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        if self.current_depth > 0 {
            self.current_depth -= 1;
        }
    }
}
