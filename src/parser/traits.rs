//! Metadata parser trait definition

use std::path::Path;

use pep508_rs::pep440_rs::VersionParseError;

use crate::library::error::FormatError;
use crate::library::reference::LibraryReference;
use crate::parser::types::SourceType;

/// Trait for parsing library metadata files
pub trait MetadataParser {
    /// Returns the source type this parser handles
    fn source_type(&self) -> SourceType;

    /// Parse the file content and extract the library reference
    fn parse(&self, content: &str) -> Result<LibraryReference, ParseError>;

    /// Read and parse a metadata file
    fn parse_file(&self, path: &Path) -> Result<LibraryReference, ParseError> {
        let content = std::fs::read_to_string(path)?;
        self.parse(content.trim_start_matches('\u{feff}'))
    }
}

/// Error type for parsing operations
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The metadata file could not be read
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML
    #[error("Invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute
    #[error("Invalid XML attribute: {0}")]
    Attribute(#[from] quick_xml::events::attributes::AttrError),

    /// A required element is absent or empty
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// A required attribute is absent
    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    /// The version text is not a numeric version
    #[error("Invalid version: \"{text}\"")]
    InvalidVersion {
        text: String,
        #[source]
        source: VersionParseError,
    },

    /// The reference string does not follow the library format
    #[error(transparent)]
    Format(#[from] FormatError),
}
