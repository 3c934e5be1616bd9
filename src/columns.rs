//! Header-to-role resolution for tabular input.
//!
//! Input files name their columns however they like; matching is
//! case-insensitive against a fixed synonym list per role, first synonym
//! with a matching header wins. Name and birthdate are required, the death
//! date is optional.

use thiserror::Error;

pub const NAME_SYNONYMS: &[&str] = &["name", "person", "full name", "fullname"];
pub const BIRTH_SYNONYMS: &[&str] =
    &["birthdate", "birth date", "birth_date", "dob", "date of birth"];
pub const DEATH_SYNONYMS: &[&str] = &[
    "death date",
    "deathdate",
    "death_date",
    "dod",
    "date of death",
    "deceased date",
];

/// A header matched to a role: its position in the header row plus the
/// original (un-lowercased) header text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleColumn {
    pub index: usize,
    pub header: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRoles {
    pub name: RoleColumn,
    pub birth: RoleColumn,
    pub death: Option<RoleColumn>,
}

/// Required roles that could not be matched, along with every header the
/// file offered. Callers render this for diagnostics; the resolver itself
/// never prints.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "could not find required column(s) {}; available columns: {}",
    missing.join(", "),
    available.join(", ")
)]
pub struct MissingColumns {
    pub missing: Vec<String>,
    pub available: Vec<String>,
}

pub fn resolve_columns(headers: &[String]) -> Result<ColumnRoles, MissingColumns> {
    let name = match_role(headers, NAME_SYNONYMS);
    let birth = match_role(headers, BIRTH_SYNONYMS);
    let death = match_role(headers, DEATH_SYNONYMS);

    match (name, birth) {
        (Some(name), Some(birth)) => Ok(ColumnRoles { name, birth, death }),
        (name, birth) => {
            let mut missing = Vec::new();
            if name.is_none() {
                missing.push("name".to_string());
            }
            if birth.is_none() {
                missing.push("birthdate".to_string());
            }
            Err(MissingColumns {
                missing,
                available: headers.to_vec(),
            })
        }
    }
}

fn match_role(headers: &[String], synonyms: &[&str]) -> Option<RoleColumn> {
    for synonym in synonyms {
        if let Some(index) = headers
            .iter()
            .position(|h| h.trim().to_lowercase() == *synonym)
        {
            return Some(RoleColumn {
                index,
                header: headers[index].clone(),
            });
        }
    }
    None
}
