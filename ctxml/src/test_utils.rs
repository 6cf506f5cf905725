mod comparison;
mod data;
mod fixtures;
mod helpers;

pub use comparison::{assert_documents_equal, compare_nodes};
pub use data::TestData;
pub use fixtures::{INVALID_XML_SAMPLES, TEST_FILES};
pub use helpers::{encode_utf16, tmp_file_path};

// Re-export common test types/traits
pub use crate::{
    document::{Attribute, Document, Node, NodeId},
    error::{
        EncodingError, IOError, Location, ParseError, ParseErrorKind, Result, SecurityError,
        SyntaxError,
    },
    parse, parse_file, parse_str, parse_with_config,
    parser::{
        config::{ParserConfig, DEFAULT_MAX_ATTRIBUTES, DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE},
        XmlParser,
    },
    transcode::{decode_utf16, decode_utf16_bom, Endian},
    utils::read_file,
};
