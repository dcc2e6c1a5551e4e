//! Duplicate detection for a scanned source tree.
//!
//! [`find_duplicates`] groups one hashed file set two ways: by content
//! checksum and by base filename. The groupings are independent — a pair of
//! files may be a content duplicate, a name duplicate, both, or neither.
//! Every reported group has at least two members; singletons never appear.
//! Files whose checksum could not be computed participate in name grouping
//! only.
//!
//! This is a whole-set analysis: it runs over the fully materialized source
//! set before classification begins, and only ever over the source tree.

use std::collections::HashMap;

use serde::Serialize;

use mirrorcheck_core::{Checksum, FileRecord, HashedSet, LogSink};

// ---------------------------------------------------------------------------
// Report types
// ---------------------------------------------------------------------------

/// Two or more files sharing one content checksum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentGroup {
    pub checksum: Checksum,
    pub files: Vec<FileRecord>,
}

/// Two or more files sharing one base filename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameGroup {
    pub name: String,
    pub files: Vec<FileRecord>,
}

/// All duplicate groups found within one tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DuplicateReport {
    pub by_content: Vec<ContentGroup>,
    pub by_name: Vec<NameGroup>,
}

impl DuplicateReport {
    pub fn is_empty(&self) -> bool {
        self.by_content.is_empty() && self.by_name.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Detection
// ---------------------------------------------------------------------------

/// Group `set` by checksum and by basename, keeping only groups of two or
/// more members.
///
/// Hash failures are excluded from content grouping (there is no checksum to
/// group on) but still counted for name grouping. Groups are sorted by key,
/// and members by relative path, so output is stable across runs.
pub fn find_duplicates(set: &HashedSet) -> DuplicateReport {
    let mut by_checksum: HashMap<&Checksum, Vec<&FileRecord>> = HashMap::new();
    for file in &set.files {
        by_checksum.entry(&file.checksum).or_default().push(&file.record);
    }

    let mut by_name: HashMap<&str, Vec<&FileRecord>> = HashMap::new();
    for record in set.iter_records() {
        by_name.entry(record.file_name.as_str()).or_default().push(record);
    }

    let mut by_content: Vec<ContentGroup> = by_checksum
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(checksum, members)| ContentGroup {
            checksum: checksum.clone(),
            files: sorted_members(members),
        })
        .collect();
    by_content.sort_by(|a, b| a.checksum.0.cmp(&b.checksum.0));

    let mut by_name: Vec<NameGroup> = by_name
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(name, members)| NameGroup {
            name: name.to_owned(),
            files: sorted_members(members),
        })
        .collect();
    by_name.sort_by(|a, b| a.name.cmp(&b.name));

    DuplicateReport {
        by_content,
        by_name,
    }
}

fn sorted_members(members: Vec<&FileRecord>) -> Vec<FileRecord> {
    let mut files: Vec<FileRecord> = members.into_iter().cloned().collect();
    files.sort_by(|a, b| a.relative.cmp(&b.relative));
    files
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a duplicate report as log lines.
pub fn report(duplicates: &DuplicateReport, sink: &mut dyn LogSink) {
    if duplicates.by_content.is_empty() {
        sink.append("no duplicate content found in source.");
    } else {
        sink.append("duplicate files by checksum:");
        for group in &duplicates.by_content {
            sink.append(&format!("  checksum {}:", group.checksum));
            for file in &group.files {
                sink.append(&format!("    {}", file.relative.display()));
            }
        }
    }

    if duplicates.by_name.is_empty() {
        sink.append("no duplicate filenames found in source.");
    } else {
        sink.append("duplicate files by name:");
        for group in &duplicates.by_name {
            sink.append(&format!("  filename '{}':", group.name));
            for file in &group.files {
                sink.append(&format!("    {}", file.relative.display()));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
