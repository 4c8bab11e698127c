//! Library model
//!
//! # Modules
//!
//! - [`version`]: Numeric version or `*` wildcard
//! - [`reference`]: `LibraryReference` value type, parsing and latest selection
//! - [`registry`]: Path registry enforcing one live library per path
//! - [`installed`]: `Library` read from a project file or repository folder
//! - [`repository`]: Repository scan and latest-version lookup
//! - [`error`]: Error types

pub mod error;
pub mod installed;
pub mod reference;
pub mod registry;
pub mod repository;
pub mod version;

pub use error::{FormatError, LibraryError};
pub use installed::Library;
pub use reference::LibraryReference;
pub use registry::{PathClaim, PathRegistry};
pub use repository::{
    find_latest, scan_default_repository, scan_repository, scan_repository_with_config,
};
pub use version::{ANY_VERSION, LibraryVersion};
