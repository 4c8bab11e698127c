use std::path::PathBuf;

use pep508_rs::pep440_rs::VersionParseError;
use thiserror::Error;

use crate::parser::ParseError;

/// A string that does not follow the `"<title>, <version> (<company>)"` format
#[derive(Debug, Error)]
#[error("Invalid library string: \"{input}\"")]
pub struct FormatError {
    input: String,
    #[source]
    source: Option<VersionParseError>,
}

impl FormatError {
    pub(crate) fn mismatch(input: &str) -> Self {
        Self {
            input: input.to_string(),
            source: None,
        }
    }

    pub(crate) fn version(input: &str, source: VersionParseError) -> Self {
        Self {
            input: input.to_string(),
            source: Some(source),
        }
    }

    /// The string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    InvalidFormat(#[from] FormatError),

    #[error("Not a valid library: \"{}\"", path.display())]
    InvalidLibrary {
        path: PathBuf,
        #[source]
        source: ParseError,
    },

    #[error("{message}: '{}'", path.display())]
    FileNotFound { path: PathBuf, message: &'static str },

    #[error("Library references do not have matching title and company")]
    MismatchedLibrary,

    #[error("Path is already bound to a library: \"{}\"", path.display())]
    DuplicatePath { path: PathBuf },

    #[error("Not a library folder or .plcproj file: \"{}\"", path.display())]
    UnsupportedSource { path: PathBuf },

    #[error("Failed to resolve path \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LibraryError {
    pub(crate) fn not_found(path: impl Into<PathBuf>, message: &'static str) -> Self {
        Self::FileNotFound {
            path: path.into(),
            message,
        }
    }

    pub(crate) fn invalid_library(path: impl Into<PathBuf>, source: impl Into<ParseError>) -> Self {
        Self::InvalidLibrary {
            path: path.into(),
            source: source.into(),
        }
    }
}
