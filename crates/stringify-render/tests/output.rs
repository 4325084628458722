//! Tests for the idempotent output step.

use std::fs;

use stringify_render::{RenderError, WriteOutcome, is_up_to_date, write_if_changed};

#[test]
fn second_identical_write_is_skipped() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("PrlStringifyConsts.cpp");

    assert_eq!(
        write_if_changed(&path, "content\n").expect("first write"),
        WriteOutcome::Written
    );
    let modified = fs::metadata(&path).and_then(|m| m.modified()).expect("mtime");

    assert_eq!(
        write_if_changed(&path, "content\n").expect("second write"),
        WriteOutcome::Unchanged
    );
    let modified_again = fs::metadata(&path).and_then(|m| m.modified()).expect("mtime");
    assert_eq!(modified, modified_again);
    assert_eq!(fs::read_to_string(&path).expect("read"), "content\n");
}

#[test]
fn different_content_is_overwritten() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.cpp");
    fs::write(&path, "old").expect("seed");

    assert!(!is_up_to_date(&path, "new").expect("compare"));
    assert_eq!(
        write_if_changed(&path, "new").expect("write"),
        WriteOutcome::Written
    );
    assert_eq!(fs::read_to_string(&path).expect("read"), "new");
    assert!(is_up_to_date(&path, "new").expect("compare"));
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("generated/nested/out.cpp");

    assert_eq!(
        write_if_changed(&path, "x").expect("write"),
        WriteOutcome::Written
    );
    assert!(path.is_file());
}

#[test]
fn unwritable_target_is_an_output_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    // A directory where the file should be cannot be overwritten.
    let path = dir.path().join("out.cpp");
    fs::create_dir(&path).expect("create dir");

    let err = write_if_changed(&path, "x").expect_err("target is a directory");
    assert!(matches!(err, RenderError::OutputWrite { .. }));
}

#[test]
fn missing_output_is_not_up_to_date() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.cpp");
    assert!(!is_up_to_date(&path, "x").expect("missing file is not an error"));
}

#[test]
fn unreadable_output_is_reported_not_treated_as_different() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Reading a directory fails with something other than NotFound.
    let path = dir.path().join("out.cpp");
    fs::create_dir(&path).expect("create dir");

    let err = is_up_to_date(&path, "x").expect_err("unreadable existing output");
    match err {
        RenderError::OutputWrite { path: reported, source } => {
            assert_eq!(reported, path);
            assert_ne!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected output error, got {other:?}"),
    }
}

#[test]
fn outcome_display() {
    assert_eq!(WriteOutcome::Written.to_string(), "written");
    assert_eq!(WriteOutcome::Unchanged.to_string(), "unchanged");
}
