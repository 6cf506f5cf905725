pub mod config;
pub mod cursor;
pub mod scanner;
pub mod xml;

pub use config::ParserConfig;
pub use scanner::Match;
pub use xml::XmlParser;
