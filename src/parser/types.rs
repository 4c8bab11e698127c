//! Common types for parsers

use std::path::{Path, PathBuf};

use crate::config::{BROWSERCACHE_FILE_NAME, PROJECT_FILE_EXTENSION};

/// Kind of source a library is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// PLC project file (`*.plcproj`)
    ProjectFile,
    /// Library repository folder holding a `browsercache` file
    RepositoryFolder,
}

impl SourceType {
    /// Path of the file holding the metadata for a source at `path`
    pub fn metadata_path(&self, path: &Path) -> PathBuf {
        match self {
            SourceType::ProjectFile => path.to_path_buf(),
            SourceType::RepositoryFolder => path.join(BROWSERCACHE_FILE_NAME),
        }
    }
}

/// Detect the source type of an existing path
pub fn detect_source_type(path: &Path) -> Option<SourceType> {
    if path.is_dir() {
        Some(SourceType::RepositoryFolder)
    } else if is_project_file(path) {
        Some(SourceType::ProjectFile)
    } else {
        None
    }
}

fn is_project_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| extension.eq_ignore_ascii_case(PROJECT_FILE_EXTENSION))
}
