//! Key-value storage trait backing the favorite flags

#[cfg(test)]
use mockall::automock;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// A string-keyed, string-valued store surviving process restarts.
///
/// Injected into [`FavoriteStore`](crate::favorites::FavoriteStore) so the
/// persistence layer can be faked in tests. Storage failures surface from
/// here; the favorite logic itself has no error conditions of its own.
#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
    /// Read the value for a key, None when absent
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key entirely; removing an absent key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
