#![allow(dead_code)]

use chrono::NaiveDate;
use streakfold::{KeyValueStore, MemoryStore, StoreError, Streak};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn dec(day: u32) -> NaiveDate {
    date(2021, 12, day)
}

/// A store already holding a one-day streak from 12/12/2021.
pub fn seeded_store() -> MemoryStore {
    let mut store = MemoryStore::new();
    let streak = Streak {
        current_count: 1,
        start_date: "12/12/2021".to_string(),
        last_login_date: "12/12/2021".to_string(),
    };
    store
        .set("streak", &serde_json::to_string(&streak).unwrap())
        .unwrap();
    store
}

pub fn stored(store: &impl KeyValueStore, key: &str) -> Streak {
    let raw = store.get(key).unwrap().expect("nothing stored");
    serde_json::from_str(&raw).unwrap()
}

/// Wraps a store and counts writes.
#[derive(Default)]
pub struct CountingStore {
    pub inner: MemoryStore,
    pub writes: usize,
}

impl CountingStore {
    pub fn new(inner: MemoryStore) -> Self {
        CountingStore { inner, writes: 0 }
    }
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.writes += 1;
        self.inner.set(key, value)
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.inner.clear()
    }
}

/// A store whose medium has been disabled.
pub struct DisabledStore;

impl KeyValueStore for DisabledStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("storage disabled".to_string()))
    }
}
