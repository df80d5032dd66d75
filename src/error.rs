use thiserror::Error;

/// Failures reported by a [`KeyValueStore`](crate::KeyValueStore).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The storage medium cannot be used at all (disabled, missing, revoked).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// A write was refused because it would exceed the store's size limit.
    #[error("writing '{key}' needs {needed} bytes but the store limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
}

/// Errors returned by streak evaluation.
#[derive(Error, Debug)]
pub enum StreakError {
    /// The value stored under `key` is not a valid streak record.
    #[error("failed to parse streak stored under '{key}': {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize streak: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type Result<T, E = StreakError> = std::result::Result<T, E>;
