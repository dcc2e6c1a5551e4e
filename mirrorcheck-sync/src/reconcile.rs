//! Matcher / reconciler — classifies every source file against the target
//! set and optionally repairs drift.
//!
//! Classification per source file, under [`MatchStrategy::NameAndContent`]:
//! 1. OK — some target file shares the basename *and* the checksum.
//! 2. MISMATCH — at least one target file shares the basename, none the
//!    checksum. With `overwrite_mismatched`, the source bytes overwrite the
//!    target at the source's relative path.
//! 3. MISSING — no basename match at all. With `sync_missing`, the source
//!    file is copied to the same relative path.
//!
//! Under [`MatchStrategy::RelativePath`] the identity is the exact relative
//! path instead of the basename.
//!
//! Each file is classified independently; order across files affects only
//! log ordering. Exactly one classification is produced per hashed source
//! file, so the OK/MISSING/MISMATCH counts always sum to the checked total.

use std::path::Path;

use mirrorcheck_core::{HashedFile, HashedSet, LogSink, MatchStrategy};

use crate::copier;
use crate::index::TargetIndex;
use crate::report::{FileFailure, FileStatus, RunSummary};

/// Flags and strategy for one verification run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconcileOptions {
    /// Copy files classified MISSING into the target.
    pub sync_missing: bool,
    /// Overwrite target files classified MISMATCH with the source bytes.
    pub overwrite_mismatched: bool,
    /// How source files are matched against the target set.
    pub strategy: MatchStrategy,
}

/// Classify every hashed source file against `target` and optionally repair.
///
/// Repairs mutate the tree under `target_root`; nothing else does. Per-file
/// hash and copy failures are folded into the summary — only a bad root
/// aborts a run, and that happens before this function is reached.
pub fn reconcile(
    source: &HashedSet,
    target: &HashedSet,
    target_root: &Path,
    options: &ReconcileOptions,
    sink: &mut dyn LogSink,
) -> RunSummary {
    let index = TargetIndex::build(target);
    let mut summary = RunSummary::default();

    // Unreadable files surface as errors, never as MISSING.
    for failure in &source.failures {
        sink.append(&format!(
            "[ERROR] could not read '{}': {}",
            failure.record.relative.display(),
            failure.message
        ));
        summary.failures.push(FileFailure {
            path: failure.record.relative.clone(),
            message: failure.message.clone(),
        });
    }
    for failure in &target.failures {
        sink.append(&format!(
            "[ERROR] could not read target file '{}': {}",
            failure.record.relative.display(),
            failure.message
        ));
        summary.failures.push(FileFailure {
            path: failure.record.relative.clone(),
            message: failure.message.clone(),
        });
    }

    summary.checked = source.files.len();
    for file in &source.files {
        classify_one(file, &index, target_root, options, &mut summary, sink);
    }
    summary
}

fn classify_one(
    file: &HashedFile,
    index: &TargetIndex<'_>,
    target_root: &Path,
    options: &ReconcileOptions,
    summary: &mut RunSummary,
    sink: &mut dyn LogSink,
) {
    let relative = &file.record.relative;
    let status = match options.strategy {
        MatchStrategy::NameAndContent => {
            if index.has_name_with_content(&file.record.file_name, &file.checksum) {
                FileStatus::Ok
            } else if index.has_name(&file.record.file_name) {
                FileStatus::Mismatch
            } else {
                FileStatus::Missing
            }
        }
        MatchStrategy::RelativePath => match index.at_relative(relative) {
            Some(existing) if existing.checksum == file.checksum => FileStatus::Ok,
            Some(_) => FileStatus::Mismatch,
            None => FileStatus::Missing,
        },
    };

    match status {
        FileStatus::Ok => {
            summary.ok += 1;
            sink.append(&format!("[OK] found match for '{}'", relative.display()));
        }
        FileStatus::Missing => {
            summary.missing.push(relative.clone());
            sink.append(&format!("[MISSING] {}", relative.display()));
            if options.sync_missing {
                let dest = target_root.join(relative);
                match copier::copy_file(&file.record.path, &dest) {
                    Ok(()) => {
                        summary.copied += 1;
                        sink.append(&format!("  -> copied to '{}'", dest.display()));
                    }
                    Err(err) => {
                        sink.append(&format!("[ERROR] {err}"));
                        summary.failures.push(FileFailure {
                            path: relative.clone(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
        FileStatus::Mismatch => {
            summary.mismatched.push(relative.clone());
            sink.append(&format!(
                "[MISMATCH] {} (filename exists but no checksum match)",
                relative.display()
            ));
            if options.overwrite_mismatched {
                let dest = target_root.join(relative);
                match copier::copy_file(&file.record.path, &dest) {
                    Ok(()) => {
                        summary.overwritten += 1;
                        sink.append(&format!("  -> overwrote '{}'", dest.display()));
                    }
                    Err(err) => {
                        sink.append(&format!("[ERROR] {err}"));
                        summary.failures.push(FileFailure {
                            path: relative.clone(),
                            message: err.to_string(),
                        });
                    }
                }
            }
        }
    }
}
