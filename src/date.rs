//! The `M/D/YYYY` date strings stored inside a streak record.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// A stored date string that is not a valid `M/D/YYYY` calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid streak date {input:?}: expected M/D/YYYY")]
pub struct DateParseError {
    input: String,
}

impl DateParseError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Format a date the way the en-US locale prints it: month and day without
/// leading zeros, four-digit year.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use streakfold::format_date;
///
/// let date = NaiveDate::from_ymd_opt(2022, 1, 5).unwrap();
/// assert_eq!(format_date(date), "1/5/2022");
/// ```
pub fn format_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}

/// Parse a `M/D/YYYY` string back into a calendar date.
///
/// Month and day may carry a leading zero (`01/05/2022` reads the same as
/// `1/5/2022`). Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`DateParseError`] unless the input is exactly three `/`-separated
/// numbers naming a real calendar day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use streakfold::parse_date;
///
/// assert_eq!(
///     parse_date("12/13/2021").unwrap(),
///     NaiveDate::from_ymd_opt(2021, 12, 13).unwrap()
/// );
/// assert!(parse_date("2/30/2021").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    let err = || DateParseError {
        input: s.to_string(),
    };

    let mut parts = s.trim().split('/');
    let (Some(month), Some(day), Some(year), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(err());
    };

    let month: u32 = month.parse().map_err(|_| err())?;
    let day: u32 = day.parse().map_err(|_| err())?;
    let year: i32 = year.parse().map_err(|_| err())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}

/// Extract only the day-of-month segment (the `D` in `M/D/YYYY`).
///
/// Nothing else in the string is checked, so `"99/5/x"` still yields `5`.
/// Returns `None` when the second segment is missing or not a number.
pub fn day_of_month(s: &str) -> Option<u32> {
    s.split('/').nth(1)?.trim().parse().ok()
}
