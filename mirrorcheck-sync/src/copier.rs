//! Repair copier — tmp-write + rename with metadata carry-over.
//!
//! ## Copy protocol
//!
//! 1. Create the destination's parent directories.
//! 2. Copy source bytes to `<dest>.mirrorcheck.tmp`.
//! 3. Carry the source modification time onto the tmp file.
//! 4. Rename to the final path (atomic on POSIX).
//!
//! A failure at any step removes the tmp file and leaves the destination
//! absent or unchanged — never partially written.

use std::fs;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use crate::error::SyncError;

/// Copy `from` to `to`, overwriting any existing destination.
pub fn copy_file(from: &Path, to: &Path) -> Result<(), SyncError> {
    let tmp = PathBuf::from(format!("{}.mirrorcheck.tmp", to.display()));
    let result = copy_via_tmp(from, to, &tmp);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result.map_err(|source| SyncError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

fn copy_via_tmp(from: &Path, to: &Path, tmp: &Path) -> std::io::Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(from, tmp)?;

    let metadata = fs::metadata(from)?;
    filetime::set_file_mtime(tmp, FileTime::from_last_modification_time(&metadata))?;

    fs::rename(tmp, to)?;
    tracing::debug!("copied '{}' -> '{}'", from.display(), to.display());
    Ok(())
}
