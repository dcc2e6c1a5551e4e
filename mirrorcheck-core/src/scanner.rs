//! Recursive tree scanner.
//!
//! [`scan`] enumerates every regular file under a root and returns one
//! [`FileRecord`] per file, identified by its path relative to that root.
//! Symbolic links are never followed. The source and target scans are fully
//! independent — callers invoke `scan` once per root.

use std::path::Path;

use walkdir::WalkDir;

use crate::error::ScanError;
use crate::types::FileRecord;

/// Enumerate all regular files under `root`, in traversal order.
///
/// Fails with [`ScanError::RootNotFound`] / [`ScanError::RootNotADirectory`]
/// before any traversal when `root` is unusable. An entry that cannot be
/// read is logged and skipped; it does not abort the scan. An empty tree
/// yields an empty vec.
pub fn scan(root: &Path) -> Result<Vec<FileRecord>, ScanError> {
    if !root.exists() {
        return Err(ScanError::RootNotFound {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(ScanError::RootNotADirectory {
            path: root.to_path_buf(),
        });
    }

    let mut records = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("skipping unreadable entry under '{}': {err}", root.display());
                continue;
            }
        };
        // Directories, symlinks, and special files are not part of the set.
        if !entry.file_type().is_file() {
            continue;
        }
        records.push(FileRecord::new(root, entry.into_path()));
    }
    Ok(records)
}
