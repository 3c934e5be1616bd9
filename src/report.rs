//! Result rendering and CSV serialization.
//!
//! The output header is fixed: `Name, Birthdate, Death Date, Current Age,
//! Deceased Age, Status`. Dates are re-emitted as their original input text.
//! An unparseable birthdate surfaces as the literal `Invalid birthdate` in
//! the Current Age column rather than failing the run.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::{age, io_utils, person::Person, table};

pub const INVALID_BIRTHDATE: &str = "Invalid birthdate";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ResultRow {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Birthdate")]
    pub birthdate: String,
    #[serde(rename = "Death Date")]
    pub death_date: String,
    #[serde(rename = "Current Age")]
    pub current_age: String,
    #[serde(rename = "Deceased Age")]
    pub deceased_age: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl ResultRow {
    pub fn from_person(person: &Person, reference: NaiveDate) -> Self {
        let summary = age::compute_ages(person, reference);
        ResultRow {
            name: person.name.clone(),
            birthdate: person.birthdate_text.clone(),
            death_date: person.death_date_text.clone(),
            current_age: summary
                .current_age
                .map(|a| a.to_string())
                .unwrap_or_else(|| INVALID_BIRTHDATE.to_string()),
            deceased_age: summary
                .deceased_age
                .map(|a| a.to_string())
                .unwrap_or_default(),
            status: if summary.is_deceased {
                "Deceased".to_string()
            } else {
                "Living".to_string()
            },
        }
    }
}

pub fn write_results(path: &Path, people: &[Person], reference: NaiveDate) -> Result<()> {
    let mut writer = io_utils::open_csv_writer(Some(path))?;
    for person in people {
        let row = ResultRow::from_person(person, reference);
        writer
            .serialize(row)
            .with_context(|| format!("Writing result row for '{}'", person.name))?;
    }
    writer
        .flush()
        .with_context(|| format!("Flushing output file {path:?}"))?;
    Ok(())
}

pub fn print_results_table(people: &[Person], reference: NaiveDate) {
    let headers = vec![
        "Name".to_string(),
        "Birthdate".to_string(),
        "Death Date".to_string(),
        "Current Age".to_string(),
        "Deceased Age".to_string(),
        "Status".to_string(),
    ];
    let rows = people
        .iter()
        .map(|person| {
            let row = ResultRow::from_person(person, reference);
            vec![
                row.name,
                row.birthdate,
                row.death_date,
                row.current_age,
                row.deceased_age,
                row.status,
            ]
        })
        .collect::<Vec<_>>();
    table::print_table(&headers, &rows);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn living_person_row_has_blank_deceased_age() {
        let person = Person::new("Ada", "2000-01-01", None);
        let row = ResultRow::from_person(&person, reference());
        assert_eq!(row.current_age, "24");
        assert_eq!(row.deceased_age, "");
        assert_eq!(row.status, "Living");
    }

    #[test]
    fn deceased_person_row_carries_both_ages() {
        let person = Person::new("Alan", "1950-05-10", Some("2020-05-09"));
        let row = ResultRow::from_person(&person, reference());
        assert_eq!(row.current_age, "74");
        assert_eq!(row.deceased_age, "69");
        assert_eq!(row.status, "Deceased");
    }

    #[test]
    fn invalid_birthdate_surfaces_as_text() {
        let person = Person::new("Mystery", "circa 1900", None);
        let row = ResultRow::from_person(&person, reference());
        assert_eq!(row.current_age, INVALID_BIRTHDATE);
        assert_eq!(row.birthdate, "circa 1900");
    }

    #[test]
    fn original_date_text_is_not_normalized() {
        let person = Person::new("Grace", "12/09/1906", Some("January 1, 1992"));
        let row = ResultRow::from_person(&person, reference());
        assert_eq!(row.birthdate, "12/09/1906");
        assert_eq!(row.death_date, "January 1, 1992");
    }
}
