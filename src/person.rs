//! Person records built from raw input text.
//!
//! The original text of each date is kept alongside the parsed value so that
//! output CSVs re-emit dates exactly as they were entered, never normalized.

use chrono::NaiveDate;
use log::warn;

use crate::date::parse_flexible_date;

#[derive(Debug, Clone)]
pub struct Person {
    pub name: String,
    pub birthdate_text: String,
    pub death_date_text: String,
    pub birthdate: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
}

impl Person {
    /// Builds a person from raw text fields. Unparseable dates log a warning
    /// and leave the parsed value absent; they never fail construction.
    pub fn new(name: &str, birthdate: &str, death_date: Option<&str>) -> Self {
        let death_text = death_date.unwrap_or("");
        Person {
            name: name.to_string(),
            birthdate_text: birthdate.to_string(),
            death_date_text: death_text.to_string(),
            birthdate: parse_optional(birthdate),
            death_date: parse_optional(death_text),
        }
    }
}

fn parse_optional(value: &str) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    match parse_flexible_date(value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!("Could not parse date '{value}': {err}");
            None
        }
    }
}
