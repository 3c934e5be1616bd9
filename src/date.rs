//! Flexible calendar-date parsing.
//!
//! Input dates arrive as free text in whatever convention the source file
//! used. Parsing tries a fixed, ordered list of chrono formats; for ambiguous
//! numeric forms (`01/02/2003`) the month-first format is listed before the
//! day-first one, so ambiguity resolves month-first. Day-first inputs with a
//! day above 12 still parse through the fallback format.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%m-%d-%Y",
    "%d-%m-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

pub fn parse_flexible_date(value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Cannot parse an empty string as a date"));
    }
    for fmt in DATE_FORMATS {
        if let Ok(parsed) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Ok(parsed);
        }
    }
    Err(anyhow!("Failed to parse '{trimmed}' as date"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_iso_and_slash_forms() {
        assert_eq!(parse_flexible_date("2024-05-06").unwrap(), date(2024, 5, 6));
        assert_eq!(parse_flexible_date("2024/05/06").unwrap(), date(2024, 5, 6));
        assert_eq!(parse_flexible_date("5/6/2024").unwrap(), date(2024, 5, 6));
    }

    #[test]
    fn ambiguous_numeric_dates_resolve_month_first() {
        assert_eq!(parse_flexible_date("01/02/2003").unwrap(), date(2003, 1, 2));
        assert_eq!(parse_flexible_date("01-02-2003").unwrap(), date(2003, 1, 2));
    }

    #[test]
    fn day_first_inputs_parse_through_fallback() {
        assert_eq!(
            parse_flexible_date("25/12/1990").unwrap(),
            date(1990, 12, 25)
        );
        assert_eq!(
            parse_flexible_date("25-12-1990").unwrap(),
            date(1990, 12, 25)
        );
    }

    #[test]
    fn parses_textual_month_names() {
        assert_eq!(
            parse_flexible_date("May 6, 2024").unwrap(),
            date(2024, 5, 6)
        );
        assert_eq!(
            parse_flexible_date("6 May 2024").unwrap(),
            date(2024, 5, 6)
        );
        assert_eq!(
            parse_flexible_date("Jan 15, 1980").unwrap(),
            date(1980, 1, 15)
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            parse_flexible_date("  1996-02-29  ").unwrap(),
            date(1996, 2, 29)
        );
    }

    #[test]
    fn rejects_empty_and_garbage_input() {
        assert!(parse_flexible_date("").is_err());
        assert!(parse_flexible_date("   ").is_err());
        assert!(parse_flexible_date("not a date").is_err());
        assert!(parse_flexible_date("2023-02-30").is_err());
    }
}
