use crate::config::{CorruptRecordPolicy, DayComparison, StreakConfig, StreakCounterBuilder};
use crate::date::{day_of_month, parse_date};
use crate::error::{Result, StreakError};
use crate::store::KeyValueStore;
use crate::streak::{Streak, StreakOverrides, build_streak};
use chrono::{Datelike, Local, NaiveDate};
use log::{debug, trace, warn};

/// What an evaluation does to the stored streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The login is the day after the last one; the count goes up.
    Increment,
    /// The run is broken; start over at 1.
    Reset,
    /// Already counted today; nothing changes.
    None,
}

/// Decide how a login on `current` affects a streak last seen on `last_login`.
///
/// A difference of 0 days is [`Transition::None`], 1 day is
/// [`Transition::Increment`], and anything else is [`Transition::Reset`],
/// including a `last_login` in the future or one that does not parse.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use streakfold::{classify, DayComparison, Transition};
///
/// let feb_1 = NaiveDate::from_ymd_opt(2022, 2, 1).unwrap();
/// assert_eq!(
///     classify(feb_1, "1/31/2022", DayComparison::CalendarDate),
///     Transition::Increment
/// );
/// assert_eq!(
///     classify(feb_1, "1/31/2022", DayComparison::DayOfMonth),
///     Transition::Reset
/// );
/// ```
pub fn classify(current: NaiveDate, last_login: &str, comparison: DayComparison) -> Transition {
    let difference = match comparison {
        DayComparison::CalendarDate => parse_date(last_login)
            .ok()
            .map(|last| current.signed_duration_since(last).num_days()),
        DayComparison::DayOfMonth => {
            day_of_month(last_login).map(|day| i64::from(current.day()) - i64::from(day))
        }
    };

    match difference {
        Some(0) => Transition::None,
        Some(1) => Transition::Increment,
        _ => Transition::Reset,
    }
}

/// Evaluates and persists a login streak in a [`KeyValueStore`].
///
/// One counter owns one key. Several counters with different keys can share
/// a store.
#[derive(Debug, Clone, Default)]
pub struct StreakCounter {
    config: StreakConfig,
}

impl StreakCounter {
    pub fn new(config: StreakConfig) -> Self {
        StreakCounter { config }
    }

    pub fn builder() -> StreakCounterBuilder {
        StreakCounterBuilder::new()
    }

    pub fn config(&self) -> &StreakConfig {
        &self.config
    }

    /// Record a login on `date` and return the resulting streak.
    ///
    /// With nothing stored, a fresh streak is written. Otherwise the stored
    /// record is classified against `date`: an increment keeps the original
    /// start date, a reset starts over from `date`, and a same-day login
    /// returns the stored record without writing.
    ///
    /// # Errors
    ///
    /// Returns [`StreakError::Store`] if the store fails, and
    /// [`StreakError::Parse`] if the stored value is unreadable and the
    /// counter is configured with [`CorruptRecordPolicy::Fail`].
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use streakfold::{MemoryStore, StreakCounter};
    ///
    /// let counter = StreakCounter::default();
    /// let mut store = MemoryStore::new();
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2021, 12, d).unwrap();
    /// assert_eq!(counter.evaluate(&mut store, day(12)).unwrap().current_count, 1);
    /// assert_eq!(counter.evaluate(&mut store, day(13)).unwrap().current_count, 2);
    /// assert_eq!(counter.evaluate(&mut store, day(15)).unwrap().current_count, 1);
    /// ```
    pub fn evaluate<S>(&self, store: &mut S, date: NaiveDate) -> Result<Streak>
    where
        S: KeyValueStore + ?Sized,
    {
        let key = &self.config.key;

        let stored = match self.load(store) {
            Ok(stored) => stored,
            Err(StreakError::Parse { key, source })
                if self.config.on_corrupt == CorruptRecordPolicy::Rebuild =>
            {
                warn!("streakfold: stored streak under '{key}' is unreadable ({source}), rebuilding");
                None
            }
            Err(e) => {
                if let StreakError::Parse { source, .. } = &e {
                    warn!("streakfold: stored streak under '{key}' is unreadable ({source})");
                }
                return Err(e);
            }
        };

        let Some(stored) = stored else {
            debug!("streakfold: starting new streak under '{key}'");
            let streak = Streak::new(date);
            self.save(store, &streak)?;
            return Ok(streak);
        };

        let transition = classify(date, &stored.last_login_date, self.config.comparison);
        let streak = match transition {
            Transition::None => {
                debug!(
                    "streakfold: '{key}' already counted on {}, count {}",
                    stored.last_login_date, stored.current_count
                );
                return Ok(stored);
            }
            Transition::Increment => build_streak(
                date,
                StreakOverrides::default()
                    .with_current_count(stored.current_count.saturating_add(1))
                    .with_start_date(stored.start_date.clone()),
            ),
            Transition::Reset => Streak::new(date),
        };

        debug!(
            "streakfold: '{key}' {transition:?}, count {} -> {}",
            stored.current_count, streak.current_count
        );
        self.save(store, &streak)?;
        Ok(streak)
    }

    /// Record a login on today's local calendar date.
    pub fn record_today<S>(&self, store: &mut S) -> Result<Streak>
    where
        S: KeyValueStore + ?Sized,
    {
        self.evaluate(store, Local::now().date_naive())
    }

    /// Read the stored streak without recording a login.
    ///
    /// # Errors
    ///
    /// Returns [`StreakError::Parse`] for an unreadable record regardless of
    /// the corrupt-record policy, since there is nothing to rebuild from.
    pub fn current<S>(&self, store: &S) -> Result<Option<Streak>>
    where
        S: KeyValueStore + ?Sized,
    {
        self.load(store)
    }

    fn load<S>(&self, store: &S) -> Result<Option<Streak>>
    where
        S: KeyValueStore + ?Sized,
    {
        let key = &self.config.key;
        let Some(raw) = store.get(key)? else {
            trace!("streakfold: nothing stored under '{key}'");
            return Ok(None);
        };
        trace!("streakfold: read '{key}' = {raw}");

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StreakError::Parse {
                key: key.clone(),
                source,
            })
    }

    fn save<S>(&self, store: &mut S, streak: &Streak) -> Result<()>
    where
        S: KeyValueStore + ?Sized,
    {
        let json = serde_json::to_string(streak).map_err(StreakError::Serialize)?;
        trace!("streakfold: write '{}' = {json}", self.config.key);
        store.set(&self.config.key, &json)?;
        Ok(())
    }
}

/// Record a login on `date` under the default `"streak"` key.
///
/// Shorthand for `StreakCounter::default().evaluate(store, date)`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use streakfold::{streak_counter, KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// let date = NaiveDate::from_ymd_opt(2021, 12, 12).unwrap();
/// let streak = streak_counter(&mut store, date).unwrap();
///
/// assert_eq!(streak.current_count, 1);
/// assert!(store.get("streak").unwrap().is_some());
/// ```
pub fn streak_counter<S>(store: &mut S, date: NaiveDate) -> Result<Streak>
where
    S: KeyValueStore + ?Sized,
{
    StreakCounter::default().evaluate(store, date)
}
