//! Structural validation of tournament records.

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::{is_level, is_sport};
use crate::tournament::NewTournament;

/// Date format accepted for `start_date` and `end_date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a record can fail validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    /// A date field is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },
    /// The sport is not in the catalog.
    #[error("unknown sport: {0}")]
    UnknownSport(String),
    /// The level is not in the catalog.
    #[error("unknown level: {0}")]
    UnknownLevel(String),
}

/// Checks a record and returns the first problem found.
///
/// Checks run in order: required fields, dates, sport, level.
/// `start_date <= end_date` is not checked.
pub fn check(record: &NewTournament) -> Result<(), ValidationError> {
    if let Some(field) = record.missing_field() {
        return Err(ValidationError::MissingField(field));
    }

    for (field, value) in [
        ("start_date", &record.start_date),
        ("end_date", &record.end_date),
    ] {
        if !is_date_shaped(value) || NaiveDate::parse_from_str(value, DATE_FORMAT).is_err() {
            return Err(ValidationError::InvalidDate {
                field,
                value: value.clone(),
            });
        }
    }

    if !is_sport(&record.sport) {
        return Err(ValidationError::UnknownSport(record.sport.clone()));
    }
    if !is_level(&record.level) {
        return Err(ValidationError::UnknownLevel(record.level.clone()));
    }

    Ok(())
}

/// Four-digit year, then one- or two-digit month and day, ASCII digits only.
/// chrono's `%Y` also accepts a sign and leading whitespace.
fn is_date_shaped(value: &str) -> bool {
    let mut parts = value.split('-');
    let widths = [4..=4, 1..=2, 1..=2];
    widths.iter().all(|width| {
        parts.next().is_some_and(|part| {
            width.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        })
    }) && parts.next().is_none()
}

/// Returns true if the record is fit for insertion.
///
/// Never panics on malformed input; use [`check`] to learn why a record failed.
#[must_use]
pub fn validate(record: &NewTournament) -> bool {
    check(record).is_ok()
}
