//! Error types for mirrorcheck-sync.

use std::path::PathBuf;

use thiserror::Error;

use mirrorcheck_core::ScanError;

/// All errors that can arise from a verification run.
///
/// Only [`SyncError::Scan`] aborts a run; a failed repair copy is caught at
/// the file boundary and folded into the run summary instead.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A tree root could not be scanned.
    #[error("scan error: {0}")]
    Scan(#[from] ScanError),

    /// A repair copy failed, with both endpoints for context.
    #[error("copy '{from}' -> '{to}' failed: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
