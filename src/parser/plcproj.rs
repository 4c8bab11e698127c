//! .plcproj parser for library projects
//!
//! Reads `Title`, `ProjectVersion` and `Company` from a `PropertyGroup`
//! directly below the root element. Namespaces are ignored and the first
//! occurrence of each element wins.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::warn;

use crate::library::reference::LibraryReference;
use crate::library::version::LibraryVersion;
use crate::parser::traits::{MetadataParser, ParseError};
use crate::parser::types::SourceType;

const PROPERTY_GROUP: &[u8] = b"PropertyGroup";

/// Parser for .plcproj files
pub struct PlcprojParser;

impl PlcprojParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlcprojParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
enum Property {
    Title,
    ProjectVersion,
    Company,
}

impl Property {
    fn from_local_name(name: &[u8]) -> Option<Self> {
        match name {
            b"Title" => Some(Property::Title),
            b"ProjectVersion" => Some(Property::ProjectVersion),
            b"Company" => Some(Property::Company),
            _ => None,
        }
    }

    fn element_path(&self) -> &'static str {
        match self {
            Property::Title => "PropertyGroup/Title",
            Property::ProjectVersion => "PropertyGroup/ProjectVersion",
            Property::Company => "PropertyGroup/Company",
        }
    }
}

#[derive(Default)]
struct ProjectProperties {
    title: Option<String>,
    version: Option<String>,
    company: Option<String>,
}

impl ProjectProperties {
    /// Record a property unless an earlier element already set it
    fn record(&mut self, property: Property, value: &str) {
        let slot = match property {
            Property::Title => &mut self.title,
            Property::ProjectVersion => &mut self.version,
            Property::Company => &mut self.company,
        };
        if slot.is_none() {
            *slot = Some(value.trim().to_string());
        }
    }

    fn require(value: Option<String>, property: Property) -> Result<String, ParseError> {
        value
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ParseError::MissingElement(property.element_path().to_string()))
    }
}

impl MetadataParser for PlcprojParser {
    fn source_type(&self) -> SourceType {
        SourceType::ProjectFile
    }

    fn parse(&self, content: &str) -> Result<LibraryReference, ParseError> {
        let properties = self.read_properties(content).inspect_err(|e| {
            warn!("Failed to read project properties: {}", e);
        })?;

        let title = ProjectProperties::require(properties.title, Property::Title)?;
        let version = ProjectProperties::require(properties.version, Property::ProjectVersion)?;
        let company = ProjectProperties::require(properties.company, Property::Company)?;

        // Project files always carry a concrete version
        let version = LibraryVersion::parse_fixed(&version)
            .map_err(|source| ParseError::InvalidVersion {
                text: version.clone(),
                source,
            })?;

        Ok(LibraryReference::new(title, version, company))
    }
}

impl PlcprojParser {
    /// Walk the document and collect the first value of each property
    fn read_properties(&self, content: &str) -> Result<ProjectProperties, ParseError> {
        let mut reader = Reader::from_str(content);
        let mut properties = ProjectProperties::default();

        // Depth 1 is the root, 2 a PropertyGroup, 3 a property element
        let mut depth = 0usize;
        let mut in_property_group = false;
        let mut current: Option<Property> = None;
        let mut text = String::new();

        loop {
            match reader.read_event()? {
                Event::Start(element) => {
                    depth += 1;
                    match depth {
                        2 => in_property_group = element.local_name().as_ref() == PROPERTY_GROUP,
                        3 if in_property_group => {
                            current = Property::from_local_name(element.local_name().as_ref());
                            text.clear();
                        }
                        _ => {}
                    }
                }
                Event::Empty(element) if depth == 2 && in_property_group => {
                    if let Some(property) = Property::from_local_name(element.local_name().as_ref()) {
                        properties.record(property, "");
                    }
                }
                Event::Text(value) if depth == 3 && current.is_some() => {
                    text.push_str(&value.unescape()?);
                }
                Event::CData(value) if depth == 3 && current.is_some() => {
                    text.push_str(&String::from_utf8_lossy(&value));
                }
                Event::End(_) => {
                    match depth {
                        3 => {
                            if let Some(property) = current.take() {
                                properties.record(property, &text);
                            }
                        }
                        2 => in_property_group = false,
                        _ => {}
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(properties)
    }
}
