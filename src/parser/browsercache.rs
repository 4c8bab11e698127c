//! browsercache parser for library repository folders
//!
//! The library manager writes one `browsercache` XML file per installed
//! library. Its root element carries the full reference string in the
//! `Name` attribute, e.g. `Tc2_Standard, 3.3.3.0 (Beckhoff Automation GmbH)`.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

use crate::library::reference::LibraryReference;
use crate::parser::traits::{MetadataParser, ParseError};
use crate::parser::types::SourceType;

const NAME_ATTRIBUTE: &str = "Name";

/// Parser for browsercache files
pub struct BrowsercacheParser;

impl BrowsercacheParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowsercacheParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataParser for BrowsercacheParser {
    fn source_type(&self) -> SourceType {
        SourceType::RepositoryFolder
    }

    fn parse(&self, content: &str) -> Result<LibraryReference, ParseError> {
        let full_name = self.read_root_name(content).inspect_err(|e| {
            warn!("Failed to read browsercache root: {}", e);
        })?;

        Ok(LibraryReference::from_string(&full_name)?)
    }
}

impl BrowsercacheParser {
    /// Return the `Name` attribute of the root element
    fn read_root_name(&self, content: &str) -> Result<String, ParseError> {
        let mut reader = Reader::from_str(content);

        loop {
            match reader.read_event()? {
                Event::Start(root) | Event::Empty(root) => {
                    let name = root
                        .try_get_attribute(NAME_ATTRIBUTE)?
                        .ok_or_else(|| ParseError::MissingAttribute(NAME_ATTRIBUTE.to_string()))?;
                    return Ok(name.unescape_value()?.into_owned());
                }
                Event::Eof => return Err(ParseError::MissingElement("root".to_string())),
                _ => {}
            }
        }
    }
}
