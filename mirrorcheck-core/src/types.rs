//! Domain types for mirrorcheck.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem
//! paths. Records are derived per run by the scanner and discarded at end of
//! run — nothing here persists across invocations.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Checksum
// ---------------------------------------------------------------------------

/// A lowercase SHA-256 hex digest of a file's full byte content.
///
/// Equal checksums identify byte-identical content regardless of path,
/// modification time, or permissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Checksum(pub String);

impl fmt::Display for Checksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for Checksum {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Checksum {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// File records
// ---------------------------------------------------------------------------

/// One regular file found under a scanned root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Full path used for I/O.
    pub path: PathBuf,
    /// Path relative to the scanned root — the portable identifier.
    pub relative: PathBuf,
    /// Base filename, used by name matching and name-duplicate grouping.
    pub file_name: String,
}

impl FileRecord {
    /// Build a record for `path` found under `root`.
    pub fn new(root: &Path, path: PathBuf) -> Self {
        let relative = path
            .strip_prefix(root)
            .unwrap_or(path.as_path())
            .to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            relative,
            file_name,
        }
    }
}

/// A file record paired with its content checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedFile {
    pub record: FileRecord,
    pub checksum: Checksum,
}

/// A file whose checksum could not be computed.
///
/// Kept alongside the hashed files so later stages report it instead of
/// silently dropping it from the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashFailure {
    pub record: FileRecord,
    pub message: String,
}

/// The hashed file set of one tree root: every checksum computed once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashedSet {
    pub files: Vec<HashedFile>,
    pub failures: Vec<HashFailure>,
}

impl HashedSet {
    /// Number of files found by the scan, hashable or not.
    pub fn scanned(&self) -> usize {
        self.files.len() + self.failures.len()
    }

    /// Every scanned record, hashable or not.
    pub fn iter_records(&self) -> impl Iterator<Item = &FileRecord> {
        self.files
            .iter()
            .map(|f| &f.record)
            .chain(self.failures.iter().map(|f| &f.record))
    }
}

// ---------------------------------------------------------------------------
// Matching strategy
// ---------------------------------------------------------------------------

/// How a source file is matched against the target set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    /// Match on basename plus checksum anywhere in the target tree.
    ///
    /// Tolerates files that moved within the tree as long as name and
    /// content are unchanged; cannot distinguish two same-named files in
    /// different subdirectories.
    #[default]
    NameAndContent,
    /// Match on the exact relative path only.
    RelativePath,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::NameAndContent => write!(f, "name"),
            MatchStrategy::RelativePath => write!(f, "path"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
