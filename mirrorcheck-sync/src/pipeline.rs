//! Shared verification pipeline entrypoint used by the CLI and library
//! callers.
//!
//! Scan both roots → hash each set once → report duplicates within the
//! source → classify every source file → render the summary. Duplicate
//! detection runs over the source tree only.

use std::path::Path;

use mirrorcheck_core::{hasher, scanner, LogSink};
use mirrorcheck_detector as detector;

use crate::reconcile::{reconcile, ReconcileOptions};
use crate::report::{self, RunSummary};
use crate::SyncError;

/// Run the full verification pipeline for one source/target pair.
///
/// Fails only when a root cannot be scanned; every per-file problem is
/// folded into the returned [`RunSummary`].
pub fn run(
    source_root: &Path,
    target_root: &Path,
    options: &ReconcileOptions,
    sink: &mut dyn LogSink,
) -> Result<RunSummary, SyncError> {
    sink.append(&format!(
        "started verification from '{}' to '{}'",
        source_root.display(),
        target_root.display()
    ));

    let source_records = scanner::scan(source_root)?;
    let target_records = scanner::scan(target_root)?;
    tracing::info!(
        "scanned {} source and {} target files",
        source_records.len(),
        target_records.len()
    );

    let source = hasher::hash_set(source_records);
    let target = hasher::hash_set(target_records);

    let duplicates = detector::find_duplicates(&source);
    detector::report(&duplicates, sink);

    let summary = reconcile(&source, &target, target_root, options, sink);
    report::render(&summary, sink);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use mirrorcheck_core::MemorySink;

    use super::*;

    #[test]
    fn end_to_end_missing_file_is_synced() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::create_dir_all(source.path().join("docs")).unwrap();
        fs::create_dir_all(source.path().join("img")).unwrap();
        fs::write(source.path().join("docs/readme.txt"), "A").unwrap();
        fs::write(source.path().join("img/logo.png"), "B").unwrap();
        fs::create_dir_all(target.path().join("docs")).unwrap();
        fs::write(target.path().join("docs/readme.txt"), "A").unwrap();

        let options = ReconcileOptions {
            sync_missing: true,
            ..Default::default()
        };
        let mut sink = MemorySink::new();
        let summary = run(source.path(), target.path(), &options, &mut sink).unwrap();

        assert_eq!(summary.checked, 2);
        assert_eq!(summary.missing.len(), 1);
        assert_eq!(summary.mismatched.len(), 0);
        assert_eq!(
            fs::read_to_string(target.path().join("img/logo.png")).unwrap(),
            "B"
        );
        assert!(sink.contains("started verification"));
        assert!(sink.contains("[MISSING] img/logo.png"));
        assert!(sink.contains("total source files checked: 2"));
    }

    #[test]
    fn duplicates_are_reported_for_source_only() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        fs::write(source.path().join("a.txt"), "same").unwrap();
        fs::write(source.path().join("b.txt"), "same").unwrap();
        // The target tree has its own duplicates — they must not be reported.
        fs::write(target.path().join("t1.txt"), "tgt").unwrap();
        fs::write(target.path().join("t2.txt"), "tgt").unwrap();
        fs::write(target.path().join("a.txt"), "same").unwrap();
        fs::write(target.path().join("b.txt"), "same").unwrap();

        let mut sink = MemorySink::new();
        let summary = run(
            source.path(),
            target.path(),
            &ReconcileOptions::default(),
            &mut sink,
        )
        .unwrap();

        assert!(summary.is_clean());
        assert!(sink.contains("duplicate files by checksum:"));
        assert!(sink.contains("a.txt"));
        assert!(!sink.contains("t1.txt"), "target duplicates must stay unreported");
    }

    #[test]
    fn missing_source_root_aborts_before_any_work() {
        let target = TempDir::new().unwrap();
        let mut sink = MemorySink::new();
        let err = run(
            Path::new("/definitely/not/here"),
            target.path(),
            &ReconcileOptions::default(),
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, SyncError::Scan(_)));
    }

    #[test]
    fn empty_trees_produce_clean_summary() {
        let source = TempDir::new().unwrap();
        let target = TempDir::new().unwrap();
        let mut sink = MemorySink::new();
        let summary = run(
            source.path(),
            target.path(),
            &ReconcileOptions::default(),
            &mut sink,
        )
        .unwrap();
        assert_eq!(summary.checked, 0);
        assert!(summary.is_clean());
        assert!(sink.contains("all files present and matching by checksum."));
    }
}
