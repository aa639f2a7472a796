//! Calendar-date parsing and whole-day arithmetic.
//!
//! Dates cross the user boundary in the fixed `dd-mm-yyyy` form; internally
//! everything is a `chrono::NaiveDate` (proleptic Gregorian, leap years
//! handled by chrono). There is no time-of-day component anywhere.

use crate::{Error, Result};
use chrono::{Duration, NaiveDate};

/// Boundary date format: two-digit day, two-digit month, four-digit year.
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Parse a `dd-mm-yyyy` date string.
///
/// Input is trimmed; anything that does not parse exactly against the
/// format is rejected with [`Error::InvalidDate`].
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| Error::InvalidDate {
        input: trimmed.to_string(),
        source,
    })
}

/// Render a date in the boundary `dd-mm-yyyy` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Signed day count from `from` to `to` (`to - from`).
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// The calendar date `n` days after `date` (`n` may be negative).
///
/// Month and year overflow normalize per the calendar, e.g. two days after
/// 28-02-2024 is 01-03-2024.
pub fn add_days(date: NaiveDate, n: i64) -> NaiveDate {
    date + Duration::days(n)
}
