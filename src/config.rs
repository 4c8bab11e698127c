use serde::Deserialize;
use std::path::PathBuf;

// =============================================================================
// Repository layout constants
// =============================================================================

/// Default installation root of the library repository
pub const DEFAULT_REPOSITORY_PATH: &str = r"C:\TwinCAT\3.1\Components\Plc\Managed Libraries";

/// Environment variable overriding the repository root
pub const REPOSITORY_ENV_VAR: &str = "TC_LIBRARY_REPOSITORY";

/// Metadata file written by the library manager into each installed library folder
pub const BROWSERCACHE_FILE_NAME: &str = "browsercache";

/// Extension of PLC project files
pub const PROJECT_FILE_EXTENSION: &str = "plcproj";

/// Repository scan configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScanConfig {
    /// Root folder searched for `browsercache` files
    pub repository_path: PathBuf,
    /// Whether symbolic links to directories are followed while walking the
    /// tree. A `browsercache` symlink to a file is read either way.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            repository_path: repository_root(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    /// Build a configuration scanning the given root with default options.
    pub fn with_root(repository_path: impl Into<PathBuf>) -> Self {
        Self {
            repository_path: repository_path.into(),
            follow_links: false,
        }
    }
}

/// Returns the library repository root.
/// Uses $TC_LIBRARY_REPOSITORY if it is set to a non-empty value,
/// otherwise falls back to the default Managed Libraries folder.
pub fn repository_root() -> PathBuf {
    repository_root_with_env(std::env::var(REPOSITORY_ENV_VAR).ok())
}

fn repository_root_with_env(repository_env: Option<String>) -> PathBuf {
    repository_env
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_REPOSITORY_PATH))
}
