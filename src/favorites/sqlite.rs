//! SQLite-backed key-value store

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;
use tracing::{debug, info};

use crate::favorites::store::{KeyValueStore, StoreError};

/// Persistent key-value store on a local SQLite database.
///
/// One table, one row per key. Scoped to the user profile via the database
/// path (see [`crate::config::db_path`]); survives process restarts.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new(db_path: &Path) -> Result<Self, StoreError> {
        info!("Opening preference store at {:?}", db_path);

        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
            [],
        )?;

        debug!("Preference store ready");

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.lock_conn()?;
        let result = conn.query_row(
            "SELECT value FROM preferences WHERE key = ?1",
            [key],
            |row| row.get(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO preferences (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
            (key, value),
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let conn = self.lock_conn()?;
        conn.execute("DELETE FROM preferences WHERE key = ?1", [key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn get_returns_none_for_absent_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(&temp_dir.path().join("prefs.db")).unwrap();

        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(&temp_dir.path().join("prefs.db")).unwrap();

        store.set("docs", "favorite").unwrap();

        assert_eq!(store.get("docs").unwrap(), Some("favorite".to_string()));
    }

    #[test]
    fn set_replaces_existing_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(&temp_dir.path().join("prefs.db")).unwrap();

        store.set("docs", "old").unwrap();
        store.set("docs", "new").unwrap();

        assert_eq!(store.get("docs").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn remove_deletes_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(&temp_dir.path().join("prefs.db")).unwrap();

        store.set("docs", "favorite").unwrap();
        store.remove("docs").unwrap();

        assert_eq!(store.get("docs").unwrap(), None);
    }

    #[test]
    fn remove_of_absent_key_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = SqliteStore::new(&temp_dir.path().join("prefs.db")).unwrap();

        store.remove("never-set").unwrap();
    }

    #[test]
    fn values_survive_a_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("prefs.db");

        {
            let store = SqliteStore::new(&db_path).unwrap();
            store.set("docs", "favorite").unwrap();
        }

        let reopened = SqliteStore::new(&db_path).unwrap();
        assert_eq!(reopened.get("docs").unwrap(), Some("favorite".to_string()));
    }
}
