//! Parse, compare and locate versioned TwinCAT PLC libraries.
//!
//! A [`LibraryReference`] identifies a library by title, version and
//! company and reads and writes the `"<title>, <version> (<company>)"`
//! format. A [`Library`] is a reference bound to the `.plcproj` file or
//! repository folder it was read from.
//!
//! ```no_run
//! use std::path::Path;
//! use tc_library::{LibraryReference, PathRegistry, find_latest, scan_repository};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = PathRegistry::new();
//! let libraries = scan_repository(Path::new("Managed Libraries"), &registry)?;
//! let wanted: LibraryReference = "Tc2_Standard, * (Beckhoff Automation GmbH)".parse()?;
//! if let Some(library) = find_latest(&libraries, &wanted) {
//!     println!("{library} at {}", library.path().display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod library;
pub mod parser;

pub use library::{
    FormatError, Library, LibraryError, LibraryReference, LibraryVersion, PathRegistry,
    find_latest, scan_default_repository, scan_repository,
};
pub use parser::ParseError;
