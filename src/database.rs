use std::fs::File;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::RecordsError;
use crate::structs::person::Person;
use crate::structs::record::{PersonRow, FIELD_COUNT};

/// In-memory people store, in insertion (or file) order.
#[derive(Debug, Default)]
pub struct Database {
    records: Vec<Person>,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[Person] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&Person> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new person; duplicates are allowed.
    #[instrument(skip_all)]
    pub fn add_person(
        &mut self,
        first_name: &str,
        last_name: &str,
        middle_name: &str,
        birth_date: &str,
        death_date: &str,
        gender: &str,
    ) -> Result<&Person, RecordsError> {
        let person =
            Person::new(first_name, last_name, middle_name, birth_date, death_date, gender)
                .map_err(|error| {
                    warn!("rejected person: {}", error);
                    error
                })?;
        self.records.push(person);
        info!("{} records", self.records.len());
        Ok(self.records.last().expect("record was just pushed"))
    }

    /// Case-insensitive substring match against first, last and middle names.
    #[instrument(skip(self))]
    pub fn search(&self, query: &str) -> Vec<&Person> {
        let query = query.to_lowercase();
        let found: Vec<&Person> = self
            .records
            .iter()
            .filter(|person| person.matches(&query))
            .collect();

        info!("{} of {} records matched", found.len(), self.records.len());
        found
    }

    /// Replaces every record with the file's contents. Nothing changes unless
    /// every line parses.
    #[instrument(skip(self, path), fields(file = %path.as_ref().display()))]
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, RecordsError> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|error| RecordsError::from_io(path.to_path_buf(), error))?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut loaded = Vec::new();
        for result in reader.records() {
            let record = result?;
            if record.len() != FIELD_COUNT {
                let line = record
                    .position()
                    .map(|position| position.line())
                    .unwrap_or_default();
                warn!("line {} has {} fields", line, record.len());
                return Err(RecordsError::MalformedRecord {
                    line,
                    fields: record.len(),
                });
            }
            let row: PersonRow = record.deserialize(None)?;
            loaded.push(row.into_person()?);
        }

        info!("loaded {} records", loaded.len());
        self.records = loaded;
        Ok(self.records.len())
    }

    /// Overwrites `path` with one line per record.
    #[instrument(skip(self, path), fields(file = %path.as_ref().display()))]
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<usize, RecordsError> {
        let path = path.as_ref();
        let file =
            File::create(path).map_err(|error| RecordsError::from_io(path.to_path_buf(), error))?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);

        for person in &self.records {
            writer.serialize(PersonRow::from(person))?;
        }
        writer
            .flush()
            .map_err(|error| RecordsError::from_io(path.to_path_buf(), error))?;

        info!("saved {} records", self.records.len());
        Ok(self.records.len())
    }
}
