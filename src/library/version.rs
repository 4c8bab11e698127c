//! Library version: a numeric version or the `*` wildcard

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use pep508_rs::pep440_rs::{Version, VersionParseError};

/// Marker used in reference strings for "any version"
pub const ANY_VERSION: &str = "*";

/// Version of a library reference
///
/// Ordered numerically between fixed versions. `Any` sorts above every
/// fixed version so that a wildcard reference always wins a latest-version
/// selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LibraryVersion {
    /// Dotted-numeric version (e.g. `3.3.3.0`)
    Fixed(Version),
    /// Wildcard matching any version
    Any,
}

impl LibraryVersion {
    /// Parse a version, accepting the `*` wildcard.
    pub fn parse(text: &str) -> Result<Self, VersionParseError> {
        if text == ANY_VERSION {
            return Ok(Self::Any);
        }
        Self::parse_fixed(text)
    }

    /// Parse a numeric version, rejecting the wildcard.
    pub fn parse_fixed(text: &str) -> Result<Self, VersionParseError> {
        Version::from_str(text).map(Self::Fixed)
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn as_fixed(&self) -> Option<&Version> {
        match self {
            Self::Fixed(version) => Some(version),
            Self::Any => None,
        }
    }
}

impl From<Version> for LibraryVersion {
    fn from(version: Version) -> Self {
        Self::Fixed(version)
    }
}

impl FromStr for LibraryVersion {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(version) => write!(f, "{version}"),
            Self::Any => f.write_str(ANY_VERSION),
        }
    }
}

impl Ord for LibraryVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Any, Self::Any) => Ordering::Equal,
            (Self::Any, Self::Fixed(_)) => Ordering::Greater,
            (Self::Fixed(_), Self::Any) => Ordering::Less,
            (Self::Fixed(left), Self::Fixed(right)) => left.cmp(right),
        }
    }
}

impl PartialOrd for LibraryVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
