use people_registry::{Database, Gender};

use crate::helpers::{populated_database, TestFile};

#[test]
fn save_then_load_reproduces_records() {
    let test_file = TestFile::new("save_then_load_reproduces_records");
    let database = populated_database();

    let saved = database.save_to_file(test_file.path()).expect("failed to save");
    let mut reloaded = Database::new();
    let loaded = reloaded.load_from_file(test_file.path()).expect("failed to load");

    assert_eq!(saved, 3);
    assert_eq!(loaded, 3);
    assert_eq!(reloaded.records(), database.records());
}

#[test]
fn names_containing_the_delimiter_survive() {
    let test_file = TestFile::new("names_containing_the_delimiter_survive");
    let mut database = Database::new();
    database
        .add_person("Smith, Jr.", "O\"Brien", "", "01.01.1990", "", "m")
        .expect("valid person");

    database.save_to_file(test_file.path()).expect("failed to save");
    let mut reloaded = Database::new();
    reloaded.load_from_file(test_file.path()).expect("failed to load");

    let person = reloaded.get(0).expect("a person in the file");
    assert_eq!(person.first_name, "Smith, Jr.");
    assert_eq!(person.last_name, "O\"Brien");
}

#[test]
fn unusual_gender_codes_survive() {
    let test_file = TestFile::new("unusual_gender_codes_survive");
    let mut database = Database::new();
    database
        .add_person("Alex", "", "", "01.01.1990", "", "x")
        .expect("valid person");

    database.save_to_file(test_file.path()).expect("failed to save");
    let mut reloaded = Database::new();
    reloaded.load_from_file(test_file.path()).expect("failed to load");

    assert_eq!(
        reloaded.get(0).map(|person| &person.gender),
        Some(&Gender::Other(String::from("x")))
    );
}

#[test]
fn search_order_survives_a_reload() {
    let test_file = TestFile::new("search_order_survives_a_reload");
    populated_database()
        .save_to_file(test_file.path())
        .expect("failed to save");

    let mut reloaded = Database::new();
    reloaded.load_from_file(test_file.path()).expect("failed to load");
    let found: Vec<&str> = reloaded
        .search("ann")
        .iter()
        .map(|person| person.first_name.as_str())
        .collect();

    assert_eq!(found, ["Anna", "Hannah"]);
}
