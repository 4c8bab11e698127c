//! A library bound to a unique filesystem path

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::library::error::LibraryError;
use crate::library::reference::LibraryReference;
use crate::library::registry::{PathClaim, PathRegistry};
use crate::library::version::LibraryVersion;
use crate::parser::{
    BrowsercacheParser, MetadataParser, PlcprojParser, SourceType, detect_source_type,
};

/// A library read from a `.plcproj` file or a library repository folder
///
/// Each instance holds a claim on its canonical path in a [`PathRegistry`];
/// a second library for the same path cannot be created while this one is
/// alive. Comparisons delegate to the inner [`LibraryReference`].
#[derive(Debug)]
pub struct Library {
    reference: LibraryReference,
    claim: PathClaim,
}

impl Library {
    /// Open a repository folder or a `.plcproj` file, depending on what `path` is.
    pub fn open(path: &Path, registry: &PathRegistry) -> Result<Self, LibraryError> {
        if !path.exists() {
            return Err(LibraryError::not_found(path, "Path does not exist"));
        }

        match detect_source_type(path) {
            Some(SourceType::RepositoryFolder) => Self::from_repository_folder(path, registry),
            Some(SourceType::ProjectFile) => Self::from_project_file(path, registry),
            None => Err(LibraryError::UnsupportedSource {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Read a library from its `.plcproj` project file.
    pub fn from_project_file(path: &Path, registry: &PathRegistry) -> Result<Self, LibraryError> {
        let claim = registry.claim(path)?;
        let source = SourceType::ProjectFile.metadata_path(path);

        let reference = PlcprojParser::new()
            .parse_file(&source)
            .map_err(|e| LibraryError::invalid_library(&source, e))?;

        debug!("Loaded {} from {:?}", reference, claim.path());
        Ok(Self { reference, claim })
    }

    /// Read a library from a repository folder holding a `browsercache` file.
    pub fn from_repository_folder(
        path: &Path,
        registry: &PathRegistry,
    ) -> Result<Self, LibraryError> {
        let claim = registry.claim(path)?;
        let browsercache = SourceType::RepositoryFolder.metadata_path(path);

        if !browsercache.exists() {
            return Err(LibraryError::not_found(
                path,
                "Missing browsercache file in directory",
            ));
        }

        let reference = BrowsercacheParser::new()
            .parse_file(&browsercache)
            .map_err(|e| LibraryError::invalid_library(&browsercache, e))?;

        debug!("Loaded {} from {:?}", reference, claim.path());
        Ok(Self { reference, claim })
    }

    /// Canonical path the library was read from
    pub fn path(&self) -> &Path {
        self.claim.path()
    }

    pub fn reference(&self) -> &LibraryReference {
        &self.reference
    }

    /// Detach the reference from the path binding
    pub fn as_reference(&self) -> LibraryReference {
        self.reference.clone()
    }

    pub fn title(&self) -> &str {
        self.reference.title()
    }

    pub fn version(&self) -> &LibraryVersion {
        self.reference.version()
    }

    pub fn company(&self) -> &str {
        self.reference.company()
    }

    pub fn is_any_version(&self) -> bool {
        self.reference.is_any_version()
    }

    pub fn is_newer_than(&self, other: &LibraryReference) -> bool {
        self.reference.is_newer_than(other)
    }
}

impl AsRef<LibraryReference> for Library {
    fn as_ref(&self) -> &LibraryReference {
        &self.reference
    }
}

impl PartialEq for Library {
    fn eq(&self, other: &Self) -> bool {
        self.reference == other.reference
    }
}

impl PartialEq<LibraryReference> for Library {
    fn eq(&self, other: &LibraryReference) -> bool {
        &self.reference == other
    }
}

impl PartialEq<Library> for LibraryReference {
    fn eq(&self, other: &Library) -> bool {
        self == &other.reference
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reference, f)
    }
}
