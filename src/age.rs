//! Whole-year age arithmetic.

use chrono::{Datelike, NaiveDate};

use crate::person::Person;

/// Ages derived for one person against a reference date. Never cached;
/// recomputed from the person's dates on each call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeSummary {
    /// Age at the reference date, or `None` when the birthdate is invalid.
    /// For deceased people this is the age they would be today.
    pub current_age: Option<i32>,
    /// Age at death; present only for deceased people with a valid birthdate.
    pub deceased_age: Option<i32>,
    pub is_deceased: bool,
}

/// Calendar-anniversary age: year difference, minus one when the end date
/// falls before the anniversary in its year. The `(month, day)` pair
/// comparison handles Feb 29 birthdates without a special case. No ordering
/// precondition; `end` before `start` yields a negative age.
pub fn age_in_years(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut age = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        age -= 1;
    }
    age
}

pub fn compute_ages(person: &Person, reference: NaiveDate) -> AgeSummary {
    let is_deceased = person.death_date.is_some();
    let Some(birth) = person.birthdate else {
        return AgeSummary {
            current_age: None,
            deceased_age: None,
            is_deceased,
        };
    };
    AgeSummary {
        current_age: Some(age_in_years(birth, reference)),
        deceased_age: person.death_date.map(|death| age_in_years(birth, death)),
        is_deceased,
    }
}
