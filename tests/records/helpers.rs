use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use people_registry::Database;

/// A file path under the system temp dir, unique per call, removed on drop.
pub struct TestFile {
    pub path: PathBuf,
}

impl TestFile {
    pub fn new(test_name: &str) -> Self {
        let file_name = format!("test-{}-{}.csv", test_name, ulid::Ulid::new());
        TestFile {
            path: env::temp_dir().join(file_name),
        }
    }

    pub fn with_contents(test_name: &str, contents: &str) -> Self {
        let test_file = Self::new(test_name);
        fs::write(&test_file.path, contents).expect("failed to write test file");
        test_file
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> String {
        fs::read_to_string(&self.path).expect("failed to read test file")
    }
}

impl Drop for TestFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub fn populated_database() -> Database {
    let mut database = Database::new();
    database
        .add_person("Anna", "Smith", "Maria", "01.01.1990", "", "f")
        .expect("valid person");
    database
        .add_person("Hannah", "Lee", "", "02 02 1985", "", "f")
        .expect("valid person");
    database
        .add_person("Bob", "Jones", "", "03/03/1930", "15-06-2010", "m")
        .expect("valid person");
    database
}
