//! Error types for mirrorcheck-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from scanning a tree root.
///
/// Both variants are fatal to a run: they are reported before any traversal
/// of the tree proceeds. Problems with individual entries inside a valid
/// root are logged and skipped by the scanner instead.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The given root does not exist.
    #[error("root '{path}' does not exist")]
    RootNotFound { path: PathBuf },

    /// The given root exists but is not a directory.
    #[error("root '{path}' is not a directory")]
    RootNotADirectory { path: PathBuf },
}

/// Errors from hashing one file's content.
#[derive(Debug, Error)]
pub enum HashError {
    /// The file could not be opened or read (permissions, deleted in
    /// flight). Recorded against the file; never aborts the run.
    #[error("cannot read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
