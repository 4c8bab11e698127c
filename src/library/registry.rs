//! Registry of filesystem paths bound to live [`Library`](crate::library::Library) instances

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::library::error::LibraryError;

/// Tracks which canonical paths are held by a live library.
///
/// Cloning the registry yields another handle to the same set. Each
/// library keeps a [`PathClaim`] that releases its path when dropped.
#[derive(Clone, Default)]
pub struct PathRegistry {
    paths: Arc<Mutex<HashSet<PathBuf>>>,
}

impl PathRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the path set. The set stays consistent even if a holder
    /// panicked, so a poisoned lock is recovered.
    fn lock_paths(&self) -> MutexGuard<'_, HashSet<PathBuf>> {
        self.paths
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Claim a path, failing if another live claim already holds it.
    ///
    /// The path is canonicalized first so different spellings of the same
    /// location collide.
    pub fn claim(&self, path: &Path) -> Result<PathClaim, LibraryError> {
        let canonical = std::fs::canonicalize(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                LibraryError::not_found(path, "Path does not exist")
            } else {
                LibraryError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        if !self.lock_paths().insert(canonical.clone()) {
            return Err(LibraryError::DuplicatePath { path: canonical });
        }
        debug!("Claimed library path {:?}", canonical);

        Ok(PathClaim {
            path: canonical,
            registry: self.clone(),
        })
    }

    pub fn contains(&self, path: &Path) -> bool {
        std::fs::canonicalize(path)
            .map(|canonical| self.lock_paths().contains(&canonical))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.lock_paths().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_paths().is_empty()
    }
}

impl fmt::Debug for PathRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.lock_paths().iter()).finish()
    }
}

/// Exclusive hold on a canonical path, released on drop
pub struct PathClaim {
    path: PathBuf,
    registry: PathRegistry,
}

impl PathClaim {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Debug for PathClaim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathClaim").field(&self.path).finish()
    }
}

impl Drop for PathClaim {
    fn drop(&mut self) {
        self.registry.lock_paths().remove(&self.path);
        debug!("Released library path {:?}", self.path);
    }
}
