//! Chunked SHA-256 content hashing.
//!
//! A file's checksum depends only on its bytes — never on path, mtime, or
//! permissions. Content is streamed through the digest in fixed-size chunks
//! so memory use is independent of file size.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::HashError;
use crate::types::{Checksum, FileRecord, HashFailure, HashedFile, HashedSet};

const CHUNK_SIZE: usize = 8 * 1024;

/// Compute the SHA-256 checksum of the file at `path`.
pub fn hash_file(path: &Path) -> Result<Checksum, HashError> {
    let mut file = File::open(path).map_err(|source| HashError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    let mut buf = [0u8; CHUNK_SIZE];
    loop {
        let read = file.read(&mut buf).map_err(|source| HashError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        hasher.update(&buf[..read]);
    }
    Ok(Checksum(hex::encode(hasher.finalize())))
}

/// Hash every record exactly once, folding per-file failures into the set.
///
/// A file that cannot be read is excluded from `files` but kept as a
/// [`HashFailure`] so later stages report it instead of silently dropping it
/// from the run.
pub fn hash_set(records: Vec<FileRecord>) -> HashedSet {
    let mut files = Vec::with_capacity(records.len());
    let mut failures = Vec::new();
    for record in records {
        match hash_file(&record.path) {
            Ok(checksum) => files.push(HashedFile { record, checksum }),
            Err(err) => {
                tracing::warn!("{err}");
                failures.push(HashFailure {
                    record,
                    message: err.to_string(),
                });
            }
        }
    }
    HashedSet { files, failures }
}
