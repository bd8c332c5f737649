use super::CsvPublisher;
use crate::error::CleanError;
use polars::prelude::*;
use std::fs;

fn cleaned_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("BCR".into(), vec!["BCR1", "BCR2"]),
        Column::new("BirdName".into(), vec!["Robin", "Jay, Blue"]),
        Column::new("BirdScientificName".into(), vec!["Turdus migratorius", "Cyanocitta"]),
        Column::new("BirdCount".into(), vec![5i64, 0]),
    ])
    .unwrap()
}

#[test]
fn writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("cleaned_data.csv");

    CsvPublisher::publish(&mut cleaned_frame(), &out, true).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "BCR,BirdName,BirdScientificName,BirdCount");
    assert_eq!(lines[1], "BCR1,Robin,Turdus migratorius,5");
    assert_eq!(lines[2], "BCR2,\"Jay, Blue\",Cyanocitta,0");
    assert_eq!(lines.len(), 3);
}

#[test]
fn empty_frame_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("empty.csv");
    let mut empty = cleaned_frame().head(Some(0));

    CsvPublisher::publish(&mut empty, &out, true).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.trim_end(), "BCR,BirdName,BirdScientificName,BirdCount");
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    fs::write(&out, "stale").unwrap();

    CsvPublisher::publish(&mut cleaned_frame(), &out, true).unwrap();

    assert!(fs::read_to_string(&out).unwrap().starts_with("BCR,"));
}

#[test]
fn refuses_existing_output_without_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out.csv");
    fs::write(&out, "keep me").unwrap();

    let result = CsvPublisher::publish(&mut cleaned_frame(), &out, false);

    match result {
        Err(CleanError::Io { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::AlreadyExists)
        }
        other => panic!("expected io error, got {:?}", other),
    }
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn directory_at_output_path_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("shards");
    fs::create_dir(&out).unwrap();
    fs::write(out.join("part-0000.csv"), "x").unwrap();

    let result = CsvPublisher::publish(&mut cleaned_frame(), &out, true);

    assert!(matches!(result, Err(CleanError::Io { .. })));
    assert!(out.join("part-0000.csv").exists());
}

#[test]
fn creates_missing_parent_and_leaves_no_staging_files() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("nested").join("deeper").join("out.csv");

    CsvPublisher::publish(&mut cleaned_frame(), &out, true).unwrap();

    let entries: Vec<_> = fs::read_dir(out.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("out.csv")]);
}
