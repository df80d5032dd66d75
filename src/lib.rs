mod config;
mod counter;
mod date;
mod error;
mod store;
mod streak;

pub use config::{CorruptRecordPolicy, DEFAULT_KEY, DayComparison, StreakConfig, StreakCounterBuilder};
pub use counter::{StreakCounter, Transition, classify, streak_counter};
pub use date::{DateParseError, day_of_month, format_date, parse_date};
pub use error::{Result, StoreError, StreakError};
pub use store::{KeyValueStore, MemoryStore};
pub use streak::{Streak, StreakOverrides, build_streak};
