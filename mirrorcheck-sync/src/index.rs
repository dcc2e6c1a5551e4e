//! Prebuilt lookup index over the target file set.
//!
//! Checksums are computed once when a set is hashed; matching then costs a
//! map lookup instead of re-reading target files per source candidate.

use std::collections::HashMap;
use std::path::Path;

use mirrorcheck_core::{Checksum, HashedFile, HashedSet};

/// Name and relative-path lookups over one hashed target set.
pub struct TargetIndex<'a> {
    by_name: HashMap<&'a str, Vec<&'a HashedFile>>,
    by_relative: HashMap<&'a Path, &'a HashedFile>,
}

impl<'a> TargetIndex<'a> {
    pub fn build(set: &'a HashedSet) -> Self {
        let mut by_name: HashMap<&str, Vec<&HashedFile>> = HashMap::new();
        let mut by_relative: HashMap<&Path, &HashedFile> = HashMap::new();
        for file in &set.files {
            by_name
                .entry(file.record.file_name.as_str())
                .or_default()
                .push(file);
            by_relative.insert(file.record.relative.as_path(), file);
        }
        Self {
            by_name,
            by_relative,
        }
    }

    /// Does any target file share this basename?
    pub fn has_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Does any target file share this basename with equal content?
    pub fn has_name_with_content(&self, name: &str, checksum: &Checksum) -> bool {
        self.by_name
            .get(name)
            .is_some_and(|candidates| candidates.iter().any(|f| &f.checksum == checksum))
    }

    /// The target file at exactly this relative path, if present.
    pub fn at_relative(&self, relative: &Path) -> Option<&HashedFile> {
        self.by_relative.get(relative).copied()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mirrorcheck_core::FileRecord;

    use super::*;

    fn set_of(entries: &[(&str, &str)]) -> HashedSet {
        let root = Path::new("/target");
        HashedSet {
            files: entries
                .iter()
                .map(|(rel, checksum)| HashedFile {
                    record: FileRecord::new(root, root.join(rel)),
                    checksum: Checksum::from(*checksum),
                })
                .collect(),
            failures: vec![],
        }
    }

    #[test]
    fn name_lookup_spans_subdirectories() {
        let set = set_of(&[("docs/a.txt", "aa"), ("img/logo.png", "bb")]);
        let index = TargetIndex::build(&set);
        assert!(index.has_name("a.txt"));
        assert!(index.has_name("logo.png"));
        assert!(!index.has_name("missing.txt"));
    }

    #[test]
    fn name_and_content_requires_both() {
        let set = set_of(&[("docs/a.txt", "aa")]);
        let index = TargetIndex::build(&set);
        assert!(index.has_name_with_content("a.txt", &Checksum::from("aa")));
        assert!(!index.has_name_with_content("a.txt", &Checksum::from("zz")));
        assert!(!index.has_name_with_content("b.txt", &Checksum::from("aa")));
    }

    #[test]
    fn any_candidate_with_matching_content_counts() {
        let set = set_of(&[("x/a.txt", "old"), ("y/a.txt", "new")]);
        let index = TargetIndex::build(&set);
        assert!(index.has_name_with_content("a.txt", &Checksum::from("old")));
        assert!(index.has_name_with_content("a.txt", &Checksum::from("new")));
    }

    #[test]
    fn relative_lookup_is_exact() {
        let set = set_of(&[("docs/a.txt", "aa")]);
        let index = TargetIndex::build(&set);
        assert!(index.at_relative(&PathBuf::from("docs/a.txt")).is_some());
        assert!(index.at_relative(&PathBuf::from("a.txt")).is_none());
    }
}
