use crate::counter::StreakCounter;
use serde::{Deserialize, Serialize};

/// The store key a streak lives under unless configured otherwise.
pub const DEFAULT_KEY: &str = "streak";

/// How the gap between two login days is measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayComparison {
    /// Whole calendar days between the two dates. `1/31` to `2/1` is one day.
    #[default]
    CalendarDate,

    /// Only the day-of-month numbers are subtracted, ignoring month and year.
    ///
    /// Matches records produced by older clients: `1/31` to `2/1` resets and
    /// `1/1` to `2/1` counts as the same day.
    DayOfMonth,
}

/// What to do when the stored value is not a readable streak record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorruptRecordPolicy {
    /// Treat it as a first-ever login and overwrite it with a fresh streak.
    #[default]
    Rebuild,

    /// Return [`StreakError::Parse`](crate::StreakError::Parse) and leave the
    /// store untouched.
    Fail,
}

/// Settings for a [`StreakCounter`].
///
/// Every field has a default, so a partial config deserializes:
///
/// ```
/// use streakfold::{DayComparison, StreakConfig};
///
/// let config: StreakConfig = serde_json::from_str(r#"{"key": "daily"}"#).unwrap();
/// assert_eq!(config.key, "daily");
/// assert_eq!(config.comparison, DayComparison::CalendarDate);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreakConfig {
    /// Store key holding the serialized record.
    pub key: String,
    pub comparison: DayComparison,
    pub on_corrupt: CorruptRecordPolicy,
}

impl Default for StreakConfig {
    fn default() -> Self {
        StreakConfig {
            key: DEFAULT_KEY.to_string(),
            comparison: DayComparison::default(),
            on_corrupt: CorruptRecordPolicy::default(),
        }
    }
}

/// Builder for configuring a [`StreakCounter`].
///
/// # Examples
///
/// ```
/// use streakfold::{CorruptRecordPolicy, DayComparison, StreakCounter};
///
/// let counter = StreakCounter::builder()
///     .key("reading-streak")
///     .comparison(DayComparison::DayOfMonth)
///     .on_corrupt(CorruptRecordPolicy::Fail)
///     .build();
/// assert_eq!(counter.config().key, "reading-streak");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreakCounterBuilder {
    config: StreakConfig,
}

impl StreakCounterBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store key to read and write. Defaults to `"streak"`.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.config.key = key.into();
        self
    }

    pub fn comparison(mut self, comparison: DayComparison) -> Self {
        self.config.comparison = comparison;
        self
    }

    pub fn on_corrupt(mut self, policy: CorruptRecordPolicy) -> Self {
        self.config.on_corrupt = policy;
        self
    }

    pub fn build(self) -> StreakCounter {
        StreakCounter::new(self.config)
    }
}
