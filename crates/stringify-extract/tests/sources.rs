//! Tests for header loading.

use std::fs;

use stringify_extract::{ExtractError, HeaderFiles, HeaderSources};

fn write_headers(dir: &std::path::Path, files: &HeaderFiles) {
    fs::write(dir.join(&files.errors), "#ifndef E\n").expect("write errors");
    fs::write(dir.join(&files.events), " PET_A\n").expect("write events");
    fs::write(dir.join(&files.enums), "\tPHT_A,\n").expect("write enums");
}

#[test]
fn loads_all_three_headers() {
    let dir = tempfile::tempdir().expect("temp dir");
    let files = HeaderFiles::default();
    write_headers(dir.path(), &files);

    let sources = HeaderSources::load(dir.path(), &files).expect("load headers");
    assert_eq!(sources.errors, "#ifndef E\n");
    assert_eq!(sources.events, " PET_A\n");
    assert_eq!(sources.enums, "\tPHT_A,\n");
}

#[test]
fn missing_events_header_is_reported_with_its_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let files = HeaderFiles::default();
    write_headers(dir.path(), &files);
    fs::remove_file(dir.path().join(&files.events)).expect("remove events");

    let err = HeaderSources::load(dir.path(), &files).expect_err("events header is missing");
    match err {
        ExtractError::MissingInput { path, source } => {
            assert_eq!(path, dir.path().join("PrlEventsValues.h"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected missing input, got {other:?}"),
    }
}

#[test]
fn custom_file_names_are_used() {
    let dir = tempfile::tempdir().expect("temp dir");
    let files = HeaderFiles {
        errors: "errors.h".to_string(),
        events: "events.h".to_string(),
        enums: "enums.h".to_string(),
    };
    write_headers(dir.path(), &files);

    let [errors, events, enums] = files.paths(dir.path());
    assert!(errors.ends_with("errors.h"));
    assert!(events.ends_with("events.h"));
    assert!(enums.ends_with("enums.h"));
    assert!(HeaderSources::load(dir.path(), &files).is_ok());
}
