use serde::{Deserialize, Serialize};

use crate::error::RecordsError;
use crate::structs::person::Person;

pub const FIELD_COUNT: usize = 6;

/// One line of the data file, fields in file order.
#[derive(Debug, PartialEq, Deserialize, Serialize)]
pub struct PersonRow {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub birth_date: String,
    pub death_date: String,
    pub gender: String,
}

impl PersonRow {
    pub fn into_person(self) -> Result<Person, RecordsError> {
        Person::new(
            &self.first_name,
            &self.last_name,
            &self.middle_name,
            &self.birth_date,
            &self.death_date,
            &self.gender,
        )
    }
}

impl From<&Person> for PersonRow {
    fn from(person: &Person) -> Self {
        PersonRow {
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
            middle_name: person.middle_name.clone(),
            birth_date: Person::format_date(person.birth_date),
            death_date: person.death_date.map(Person::format_date).unwrap_or_default(),
            gender: person.gender.code().to_owned(),
        }
    }
}
