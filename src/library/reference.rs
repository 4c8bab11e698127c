//! Library reference in the `"<title>, <version> (<company>)"` format

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::library::error::{FormatError, LibraryError};
use crate::library::version::LibraryVersion;

/// Regex for a reference string: `Tc2_Standard, 3.3.3.0 (Beckhoff Automation GmbH)`
static LIBRARY_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*), (.*) \((.*)\)").expect("library reference regex"));

/// Reference to a library by title, version and company
///
/// Equality ignores case on title and company and treats a wildcard
/// version as equal to any version. Because the wildcard makes equality
/// non-transitive the type is `PartialEq` only; ordering is exposed through
/// [`LibraryReference::is_newer_than`] rather than `PartialOrd`.
///
/// Rendering is not an exact inverse of parsing: a title or company
/// containing `", "` or parentheses may split differently when read back.
#[derive(Clone)]
pub struct LibraryReference {
    title: String,
    version: LibraryVersion,
    company: String,
}

impl LibraryReference {
    pub fn new(
        title: impl Into<String>,
        version: LibraryVersion,
        company: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            version,
            company: company.into(),
        }
    }

    /// Split a reference string into title, version and company.
    ///
    /// A version of `*` is kept as [`LibraryVersion::Any`]; anything else
    /// must parse as a numeric version.
    pub fn parse(text: &str) -> Result<(String, LibraryVersion, String), FormatError> {
        let captures = LIBRARY_REF_RE
            .captures(text)
            .ok_or_else(|| FormatError::mismatch(text))?;

        let title = &captures[1];
        let version = LibraryVersion::parse(&captures[2])
            .map_err(|source| FormatError::version(text, source))?;
        let company = &captures[3];

        Ok((title.to_string(), version, company.to_string()))
    }

    pub fn from_string(text: &str) -> Result<Self, FormatError> {
        let (title, version, company) = Self::parse(text)?;
        Ok(Self::new(title, version, company))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn version(&self) -> &LibraryVersion {
        &self.version
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn is_any_version(&self) -> bool {
        self.version.is_any()
    }

    /// True when title and company match, ignoring case
    pub fn same_library(&self, other: &Self) -> bool {
        self.title.to_lowercase() == other.title.to_lowercase()
            && self.company.to_lowercase() == other.company.to_lowercase()
    }

    /// True when both refer to the same library and `self` is a wildcard or
    /// has a numerically greater version.
    pub fn is_newer_than(&self, other: &Self) -> bool {
        (self.is_any_version() || self.version > other.version) && self.same_library(other)
    }

    pub fn is_at_least(&self, other: &Self) -> bool {
        self.is_newer_than(other) || self == other
    }

    /// Return the entry with the latest version.
    ///
    /// All entries must share exactly the same title and company. When
    /// several entries tie at the latest version the last one wins.
    pub fn select_latest<T: AsRef<LibraryReference>>(
        references: &[T],
    ) -> Result<Option<&T>, LibraryError> {
        let Some(first) = references.first() else {
            return Ok(None);
        };
        if references.len() == 1 {
            return Ok(Some(first));
        }

        let head = first.as_ref();
        let mismatched = references
            .iter()
            .map(AsRef::as_ref)
            .any(|reference| reference.title != head.title || reference.company != head.company);
        if mismatched {
            return Err(LibraryError::MismatchedLibrary);
        }

        Ok(references
            .iter()
            .max_by(|left, right| left.as_ref().version.cmp(&right.as_ref().version)))
    }
}

impl AsRef<LibraryReference> for LibraryReference {
    fn as_ref(&self) -> &LibraryReference {
        self
    }
}

impl FromStr for LibraryReference {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for LibraryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {} ({})", self.title, self.version, self.company)
    }
}

impl fmt::Debug for LibraryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LibraryReference(\"{}\", \"{}\", \"{}\")",
            self.title, self.version, self.company
        )
    }
}

impl PartialEq for LibraryReference {
    fn eq(&self, other: &Self) -> bool {
        (self.version == other.version || self.is_any_version() || other.is_any_version())
            && self.same_library(other)
    }
}

// Version is left out: a wildcard equals every version.
impl Hash for LibraryReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.to_lowercase().hash(state);
        self.company.to_lowercase().hash(state);
    }
}

impl Serialize for LibraryReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for LibraryReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_string(&text).map_err(serde::de::Error::custom)
    }
}
