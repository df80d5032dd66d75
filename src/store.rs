//! The key-value store a streak is persisted in.

use crate::error::StoreError;
use std::collections::HashMap;

/// A string-to-string store that survives between evaluations.
///
/// This is the shape of browser local storage: values are opaque strings and
/// a missing key reads as `None`. Implementations surface a broken medium as
/// [`StoreError`] instead of panicking.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove every key.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// An in-process [`KeyValueStore`] backed by a `HashMap`.
///
/// An optional quota caps the total bytes of keys plus values, mirroring the
/// per-origin limit browsers put on local storage. Writes that would exceed
/// it fail with [`StoreError::QuotaExceeded`] and leave the store unchanged.
///
/// # Examples
///
/// ```
/// use streakfold::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("greeting", "hello").unwrap();
/// assert_eq!(store.get("greeting").unwrap().as_deref(), Some("hello"));
/// assert_eq!(store.get("missing").unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty store that refuses to hold more than `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        MemoryStore {
            entries: HashMap::new(),
            quota: Some(limit),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total bytes of keys plus values currently held.
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(limit) = self.quota {
            let replaced = self.entries.get(key).map_or(0, |old| key.len() + old.len());
            let needed = self.used_bytes() - replaced + key.len() + value.len();
            if needed > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.entries.clear();
        Ok(())
    }
}
