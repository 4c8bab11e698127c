//! Parser layer
//! - traits.rs: MetadataParser trait and ParseError
//! - types.rs: Common types (SourceType) and source detection
//! - plcproj.rs: .plcproj project file parser
//! - browsercache.rs: Library repository browsercache parser

pub mod browsercache;
pub mod plcproj;
pub mod traits;
pub mod types;

pub use browsercache::BrowsercacheParser;
pub use plcproj::PlcprojParser;
pub use traits::{MetadataParser, ParseError};
pub use types::{SourceType, detect_source_type};
