//! Identifier and comparison-mode types.
//!
//! These sit at the string boundary of the API: [`FileId`] carries the
//! "identifiers are numeric" contract, and [`CheckType`] closes the set of
//! comparison modes the service recognizes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CheckError;

/// Identifier of a document stored in the checking service.
///
/// Identifiers are numeric. Numeric values convert with `From`; strings go
/// through `FromStr`, which rejects anything non-numeric with
/// [`CheckError::InvalidFileId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FileId(u64);

impl FileId {
    /// Create a file id from a raw numeric value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for FileId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for FileId {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| CheckError::InvalidFileId(s.to_string()))
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The corpus a check compares the subject document against.
///
/// The service recognizes five comparison modes. [`CheckType::DocVsDocs`]
/// carries its target documents directly, so a versus-list can never
/// accompany any other mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckType {
    /// The caller's private document library.
    MyLibrary,
    /// The public web. This is the service default.
    #[default]
    Web,
    /// A connected external database.
    ExternalDatabase,
    /// An explicit set of library documents to compare against.
    DocVsDocs(Vec<FileId>),
    /// The public web and the private library combined.
    WebAndMyLibrary,
}

impl CheckType {
    /// Every wire name the service recognizes.
    pub const WIRE_NAMES: [&'static str; 5] = [
        "my_library",
        "web",
        "external_database",
        "doc_vs_docs",
        "web_and_my_library",
    ];

    /// The wire name of this comparison mode.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MyLibrary => "my_library",
            Self::Web => "web",
            Self::ExternalDatabase => "external_database",
            Self::DocVsDocs(_) => "doc_vs_docs",
            Self::WebAndMyLibrary => "web_and_my_library",
        }
    }

    /// The comparison targets for `doc_vs_docs`, `None` for every other mode.
    pub fn versus_files(&self) -> Option<&[FileId]> {
        match self {
            Self::DocVsDocs(files) => Some(files),
            _ => None,
        }
    }
}

impl fmt::Display for CheckType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CheckType {
    type Err = CheckError;

    /// Parses a wire name into a comparison mode.
    ///
    /// `doc_vs_docs` parses to an empty target set; the targets must be
    /// filled in before the value passes parameter validation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "my_library" => Ok(Self::MyLibrary),
            "web" => Ok(Self::Web),
            "external_database" => Ok(Self::ExternalDatabase),
            "doc_vs_docs" => Ok(Self::DocVsDocs(Vec::new())),
            "web_and_my_library" => Ok(Self::WebAndMyLibrary),
            other => Err(CheckError::UnknownCheckType {
                given: other.to_string(),
            }),
        }
    }
}
