use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn mirrorcheck(source: &Path, target: &Path, log_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mirrorcheck").unwrap();
    cmd.arg(source)
        .arg(target)
        .arg("--log-file")
        .arg(log_dir.join("run.log"));
    cmd
}

#[test]
fn missing_file_reported_with_nonzero_exit() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    write(source.path(), "docs/readme.txt", "A");
    write(source.path(), "img/logo.png", "B");
    write(target.path(), "docs/readme.txt", "A");

    mirrorcheck(source.path(), target.path(), logs.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("[MISSING] img/logo.png"))
        .stdout(predicate::str::contains("total source files checked: 2"))
        .stdout(predicate::str::contains("missing files: 1"))
        .stdout(predicate::str::contains("mismatched files: 0"));

    assert!(
        !target.path().join("img/logo.png").exists(),
        "no repair without --sync-missing"
    );
}

#[test]
fn sync_missing_repairs_and_second_run_is_clean() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    write(source.path(), "docs/readme.txt", "A");
    write(source.path(), "img/logo.png", "B");
    write(target.path(), "docs/readme.txt", "A");

    mirrorcheck(source.path(), target.path(), logs.path())
        .arg("--sync-missing")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> copied to"));
    assert_eq!(
        fs::read_to_string(target.path().join("img/logo.png")).unwrap(),
        "B"
    );

    mirrorcheck(source.path(), target.path(), logs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "all files present and matching by checksum.",
        ));
}

#[test]
fn overwrite_mismatched_replaces_target_content() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    write(source.path(), "a.txt", "A");
    write(target.path(), "a.txt", "Z");

    mirrorcheck(source.path(), target.path(), logs.path())
        .arg("--overwrite-mismatched")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[MISMATCH] a.txt (filename exists but no checksum match)",
        ))
        .stdout(predicate::str::contains("-> overwrote"));
    assert_eq!(fs::read_to_string(target.path().join("a.txt")).unwrap(), "A");
}

#[test]
fn mismatch_without_flag_exits_nonzero_and_preserves_target() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    write(source.path(), "a.txt", "A");
    write(target.path(), "a.txt", "Z");

    mirrorcheck(source.path(), target.path(), logs.path())
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(target.path().join("a.txt")).unwrap(), "Z");
}

#[test]
fn moved_file_matches_by_name_but_not_by_path() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    write(source.path(), "x/a.txt", "identical");
    write(target.path(), "y/a.txt", "identical");

    mirrorcheck(source.path(), target.path(), logs.path())
        .assert()
        .success();

    mirrorcheck(source.path(), target.path(), logs.path())
        .arg("--match-by")
        .arg("path")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[MISSING] x/a.txt"));
}

#[test]
fn source_duplicates_are_reported() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    write(source.path(), "one/copy.dat", "same bytes");
    write(source.path(), "two/copy.dat", "same bytes");
    write(target.path(), "one/copy.dat", "same bytes");
    write(target.path(), "two/copy.dat", "same bytes");

    mirrorcheck(source.path(), target.path(), logs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("duplicate files by checksum:"))
        .stdout(predicate::str::contains("duplicate files by name:"))
        .stdout(predicate::str::contains("filename 'copy.dat':"));
}
