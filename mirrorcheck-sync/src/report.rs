//! Run summary accumulation and rendering.

use std::path::PathBuf;

use serde::Serialize;

use mirrorcheck_core::LogSink;

// ---------------------------------------------------------------------------
// Summary types
// ---------------------------------------------------------------------------

/// Outcome class for one classified source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// A target match with identical content exists.
    Ok,
    /// No match in the target at all.
    Missing,
    /// An identity match exists but content differs.
    Mismatch,
}

/// A per-file operation that failed without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregated result of one verification run.
///
/// Invariant: `ok + missing.len() + mismatched.len() == checked`, the number
/// of source files that were hashed and classified. Files that could not be
/// hashed appear in `failures` instead — a distinct outcome, never silently
/// reclassified.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Source files hashed and classified.
    pub checked: usize,
    /// Files with a content-identical match in the target.
    pub ok: usize,
    /// Relative paths classified MISSING.
    pub missing: Vec<PathBuf>,
    /// Relative paths classified MISMATCH.
    pub mismatched: Vec<PathBuf>,
    /// Missing files copied into the target this run.
    pub copied: usize,
    /// Mismatched target files overwritten this run.
    pub overwritten: usize,
    /// Per-file hash and copy failures.
    pub failures: Vec<FileFailure>,
}

impl RunSummary {
    /// MISSING and MISMATCH classifications not repaired this run.
    pub fn unresolved(&self) -> usize {
        self.missing.len() + self.mismatched.len() - self.copied - self.overwritten
    }

    /// True when nothing drifted and nothing failed.
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.mismatched.is_empty() && self.failures.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render the end-of-run summary into the sink.
///
/// Pure formatting over already-accumulated counts; nothing is recomputed.
pub fn render(summary: &RunSummary, sink: &mut dyn LogSink) {
    sink.append("summary:");
    sink.append(&format!(
        "  total source files checked: {}",
        summary.checked
    ));
    sink.append(&format!("  missing files: {}", summary.missing.len()));
    sink.append(&format!(
        "  mismatched files: {}",
        summary.mismatched.len()
    ));

    if !summary.missing.is_empty() {
        sink.append("  missing file list:");
        for path in &summary.missing {
            sink.append(&format!("    {}", path.display()));
        }
    }
    if !summary.mismatched.is_empty() {
        sink.append("  mismatch file list:");
        for path in &summary.mismatched {
            sink.append(&format!("    {}", path.display()));
        }
    }

    if summary.copied > 0 {
        sink.append(&format!("  copied to target: {}", summary.copied));
    }
    if summary.overwritten > 0 {
        sink.append(&format!("  overwritten in target: {}", summary.overwritten));
    }
    if !summary.failures.is_empty() {
        sink.append(&format!("  errors: {}", summary.failures.len()));
        for failure in &summary.failures {
            sink.append(&format!("    {}: {}", failure.path.display(), failure.message));
        }
    }

    if summary.is_clean() {
        sink.append("  all files present and matching by checksum.");
    }
    sink.append(&"-".repeat(60));
}
