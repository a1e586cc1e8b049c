use std::fmt;

use chrono::NaiveDate;

use crate::error::RecordsError;

/// Separator and format, tried in this order; the first one that parses wins.
const ACCEPTED_DATE_FORMATS: [(u8, &str); 4] = [
    (b'.', "%d.%m.%Y"),
    (b' ', "%d %m %Y"),
    (b'/', "%d/%m/%Y"),
    (b'-', "%d-%m-%Y"),
];

const DISPLAY_DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    /// Any code other than `m`/`f`, kept verbatim.
    Other(String),
}

impl Gender {
    pub fn from_code(code: &str) -> Self {
        match code {
            "m" => Gender::Male,
            "f" => Gender::Female,
            other => Gender::Other(other.to_owned()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
            Gender::Other(code) => code,
        }
    }

    pub fn display_token(&self) -> &'static str {
        match self {
            Gender::Male => "чоловік",
            Gender::Female | Gender::Other(_) => "жінка",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_token())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub middle_name: String,
    pub birth_date: NaiveDate,
    pub death_date: Option<NaiveDate>,
    pub gender: Gender,
}

impl Person {
    /// Builds a person from raw field text. An empty `death_date` means still alive.
    pub fn new(
        first_name: &str,
        last_name: &str,
        middle_name: &str,
        birth_date: &str,
        death_date: &str,
        gender: &str,
    ) -> Result<Self, RecordsError> {
        let birth_date = Self::parse_date(birth_date)?;
        let death_date = if death_date.is_empty() {
            None
        } else {
            Some(Self::parse_date(death_date)?)
        };

        Ok(Person {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            middle_name: middle_name.to_owned(),
            birth_date,
            death_date,
            gender: Gender::from_code(gender),
        })
    }

    /// `dd?mm?yyyy` where `?` is one of `.`, space, `/` or `-`, used twice.
    pub fn parse_date(text: &str) -> Result<NaiveDate, RecordsError> {
        ACCEPTED_DATE_FORMATS
            .iter()
            .filter(|(separator, _)| has_date_shape(text, *separator))
            .find_map(|(_, format)| NaiveDate::parse_from_str(text, format).ok())
            .ok_or_else(|| RecordsError::InvalidDateFormat(text.to_owned()))
    }

    pub fn format_date(date: NaiveDate) -> String {
        date.format(DISPLAY_DATE_FORMAT).to_string()
    }

    /// Whole years as `days / 365`, floored, measured up to the death date when there is one.
    pub fn age(&self, today: NaiveDate) -> i64 {
        let end_date = self.death_date.unwrap_or(today);
        (end_date - self.birth_date).num_days().div_euclid(365)
    }

    pub fn format_display(&self, today: NaiveDate) -> String {
        let mut display = format!(
            "{} {} {} {} років, {}. Народився: {}.",
            self.first_name,
            self.last_name,
            self.middle_name,
            self.age(today),
            self.gender,
            Self::format_date(self.birth_date),
        );
        if let Some(death_date) = self.death_date {
            display.push_str(&format!(" Помер: {}", Self::format_date(death_date)));
        }
        display
    }

    pub fn matches(&self, lowercase_query: &str) -> bool {
        [&self.first_name, &self.last_name, &self.middle_name]
            .iter()
            .any(|name| name.to_lowercase().contains(lowercase_query))
    }
}

/// Two-digit day and month, four-digit year. chrono alone would also take
/// short or signed years and optional whitespace.
fn has_date_shape(text: &str, separator: u8) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes[2] == separator
        && bytes[5] == separator
        && [0, 1, 3, 4, 6, 7, 8, 9]
            .iter()
            .all(|&index| bytes[index].is_ascii_digit())
}
