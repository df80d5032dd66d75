use crate::date::{format_date, parse_date};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A persisted login streak.
///
/// Serialized as a JSON object with camelCase keys, which is the shape the
/// record has always had in browser storage:
///
/// ```text
/// {"currentCount":2,"startDate":"12/12/2021","lastLoginDate":"12/13/2021"}
/// ```
///
/// Dates are kept as their stored `M/D/YYYY` strings so a record read from a
/// store round-trips byte for byte. Use [`Streak::start`] and
/// [`Streak::last_login`] for parsed values.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use streakfold::Streak;
///
/// let streak = Streak::new(NaiveDate::from_ymd_opt(2021, 12, 12).unwrap());
/// assert_eq!(streak.current_count, 1);
/// assert_eq!(streak.start_date, "12/12/2021");
/// assert_eq!(streak.last_login_date, "12/12/2021");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Streak {
    /// Consecutive days counted so far. Starts at 1.
    pub current_count: u32,

    /// The day the current run began. Only a reset moves it.
    pub start_date: String,

    /// The day of the most recent recorded login.
    pub last_login_date: String,
}

impl Streak {
    /// A brand-new streak starting and last seen on `date`.
    pub fn new(date: NaiveDate) -> Self {
        build_streak(date, StreakOverrides::default())
    }

    /// The parsed start date, or `None` if the stored string is malformed.
    pub fn start(&self) -> Option<NaiveDate> {
        parse_date(&self.start_date).ok()
    }

    /// The parsed last-login date, or `None` if the stored string is malformed.
    pub fn last_login(&self) -> Option<NaiveDate> {
        parse_date(&self.last_login_date).ok()
    }
}

/// Fields to replace when building a [`Streak`].
///
/// Every field left as `None` keeps the default [`build_streak`] computes.
///
/// # Examples
///
/// ```
/// use streakfold::StreakOverrides;
///
/// let overrides = StreakOverrides::default()
///     .with_current_count(5)
///     .with_start_date("12/1/2021");
/// assert_eq!(overrides.current_count, Some(5));
/// assert_eq!(overrides.last_login_date, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakOverrides {
    pub current_count: Option<u32>,
    pub start_date: Option<String>,
    pub last_login_date: Option<String>,
}

impl StreakOverrides {
    pub fn with_current_count(mut self, count: u32) -> Self {
        self.current_count = Some(count);
        self
    }

    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn with_last_login_date(mut self, date: impl Into<String>) -> Self {
        self.last_login_date = Some(date.into());
        self
    }
}

/// Build a streak record for `date`, then apply `overrides` field by field.
///
/// Defaults are a count of 1 with both dates set to `date`. Override values
/// are taken as given; nothing is validated.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use streakfold::{build_streak, StreakOverrides};
///
/// let date = NaiveDate::from_ymd_opt(2021, 12, 13).unwrap();
/// let streak = build_streak(date, StreakOverrides::default().with_current_count(2));
/// assert_eq!(streak.current_count, 2);
/// assert_eq!(streak.start_date, "12/13/2021");
/// ```
pub fn build_streak(date: NaiveDate, overrides: StreakOverrides) -> Streak {
    let formatted = format_date(date);
    Streak {
        current_count: overrides.current_count.unwrap_or(1),
        start_date: overrides.start_date.unwrap_or_else(|| formatted.clone()),
        last_login_date: overrides.last_login_date.unwrap_or(formatted),
    }
}
