//! # mirrorcheck-sync
//!
//! The hashing-and-reconciliation engine: target indexing, per-source-file
//! classification, repair copies, and run summaries.
//!
//! Call [`pipeline::run`] for a full verification run over two roots, or
//! [`reconcile::reconcile`] directly with pre-hashed file sets.

pub mod copier;
pub mod error;
pub mod index;
pub mod pipeline;
pub mod reconcile;
pub mod report;

pub use error::SyncError;
pub use reconcile::{reconcile, ReconcileOptions};
pub use report::{FileFailure, FileStatus, RunSummary};
