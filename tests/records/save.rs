use std::path::PathBuf;

use people_registry::{Database, RecordsError};

use crate::helpers::{populated_database, TestFile};

#[test]
fn writes_six_fields_per_line_with_normalized_dates() {
    let test_file = TestFile::new("writes_six_fields_per_line_with_normalized_dates");

    populated_database()
        .save_to_file(test_file.path())
        .expect("failed to save");

    let contents = test_file.contents();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(
        lines,
        [
            "Anna,Smith,Maria,01.01.1990,,f",
            "Hannah,Lee,,02.02.1985,,f",
            "Bob,Jones,,03.03.1930,15.06.2010,m",
        ]
    );
}

#[test]
fn overwrites_existing_file() {
    let test_file = TestFile::with_contents("overwrites_existing_file", "stale,line\nmore,stale\n");
    let mut database = Database::new();
    database
        .add_person("Anna", "", "", "01.01.1990", "", "f")
        .expect("valid person");

    database.save_to_file(test_file.path()).expect("failed to save");

    assert_eq!(test_file.contents().lines().collect::<Vec<_>>(), ["Anna,,,01.01.1990,,f"]);
}

#[test]
fn empty_database_writes_empty_file() {
    let test_file = TestFile::new("empty_database_writes_empty_file");

    let saved = Database::new()
        .save_to_file(test_file.path())
        .expect("failed to save");

    assert_eq!(saved, 0);
    assert_eq!(test_file.contents(), "");
}

#[test]
fn unwritable_path_is_reported() {
    let missing_directory: PathBuf = TestFile::new("unwritable_path_is_reported")
        .path()
        .join("people.csv");

    let result = populated_database().save_to_file(&missing_directory);

    assert!(matches!(
        result,
        Err(RecordsError::FileNotFound(_)) | Err(RecordsError::Io { .. })
    ));
}
