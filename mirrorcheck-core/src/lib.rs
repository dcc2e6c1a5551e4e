//! mirrorcheck core library — domain types, tree scanner, hasher, log sink.
//!
//! Public API surface:
//! - [`types`] — file records, checksums, hashed sets
//! - [`error`] — [`ScanError`], [`HashError`]
//! - [`scanner`] — recursive regular-file enumeration
//! - [`hasher`] — chunked SHA-256 content digests
//! - [`sink`] — the [`LogSink`] line-sink abstraction

pub mod error;
pub mod hasher;
pub mod scanner;
pub mod sink;
pub mod types;

pub use error::{HashError, ScanError};
pub use sink::{LogSink, MemorySink};
pub use types::{Checksum, FileRecord, HashFailure, HashedFile, HashedSet, MatchStrategy};
