//! Library repository scanning and latest-version lookup

use std::ffi::OsStr;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::{BROWSERCACHE_FILE_NAME, ScanConfig};
use crate::library::error::LibraryError;
use crate::library::installed::Library;
use crate::library::reference::LibraryReference;
use crate::library::registry::PathRegistry;

/// Return every library installed below `root`.
pub fn scan_repository(root: &Path, registry: &PathRegistry) -> Result<Vec<Library>, LibraryError> {
    scan_repository_with_config(&ScanConfig::with_root(root), registry)
}

/// Scan the configured repository root (see [`crate::config::repository_root`]).
pub fn scan_default_repository(registry: &PathRegistry) -> Result<Vec<Library>, LibraryError> {
    scan_repository_with_config(&ScanConfig::default(), registry)
}

/// Find every `browsercache` file below the configured root and read one
/// library per containing folder, in traversal order.
///
/// Unreadable directory entries are skipped; an invalid `browsercache`
/// file fails the whole scan.
pub fn scan_repository_with_config(
    config: &ScanConfig,
    registry: &PathRegistry,
) -> Result<Vec<Library>, LibraryError> {
    let root = &config.repository_path;
    if !root.exists() {
        return Err(LibraryError::not_found(root, "Path does not exist"));
    }

    info!("Scanning library repository at {:?}", root);

    let mut libraries = Vec::new();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .follow_links(config.follow_links)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable repository entry: {}", e);
                continue;
            }
        };

        if entry.file_name() != OsStr::new(BROWSERCACHE_FILE_NAME) || !is_file_entry(&entry) {
            continue;
        }
        let Some(folder) = entry.path().parent() else {
            continue;
        };

        libraries.push(Library::from_repository_folder(folder, registry)?);
    }

    info!("Found {} libraries", libraries.len());
    Ok(libraries)
}

/// A regular file, or a symlink to one when links are not followed
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Return the newest library matching `reference`.
///
/// Matching follows reference equality: title and company ignore case and
/// a wildcard version matches every installed version. When several
/// libraries tie at the newest version the last one wins.
pub fn find_latest<'a>(
    libraries: &'a [Library],
    reference: &LibraryReference,
) -> Option<&'a Library> {
    let latest = libraries
        .iter()
        .filter(|library| library.reference() == reference)
        .max_by(|left, right| left.version().cmp(right.version()));

    debug!("Latest match for {}: {:?}", reference, latest.map(Library::path));
    latest
}
