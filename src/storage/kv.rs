//! Key-value persistence capability.
//!
//! The note pad only needs two records (the current text and the snapshot
//! list), so its storage is a minimal string-to-string interface. The real
//! backend is a table in the crate database; an in-memory map stands in for
//! tests and ephemeral runs.

use std::collections::HashMap;

use chrono::Utc;
use rusqlite::{params, OptionalExtension};

use crate::error::StudyTubeError;
use crate::storage::Database;

/// Minimal persistent string store.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StudyTubeError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StudyTubeError>;

    /// Remove the record under `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    fn remove(&mut self, key: &str) -> Result<(), StudyTubeError>;
}

/// Key-value records in the crate's `SQLite` database.
pub struct SqliteKvStore {
    db: Database,
}

impl SqliteKvStore {
    /// Open the store against the default database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn new() -> Result<Self, StudyTubeError> {
        Ok(Self {
            db: Database::open()?,
        })
    }

    /// Create a store on an existing database connection.
    #[must_use]
    pub const fn with_database(db: Database) -> Self {
        Self { db }
    }
}

impl KeyValueStore for SqliteKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StudyTubeError> {
        self.db
            .connection()
            .query_row("SELECT value FROM kv_records WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(|e| StudyTubeError::Storage(format!("Failed to read '{key}': {e}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StudyTubeError> {
        self.db
            .connection()
            .execute(
                r"INSERT INTO kv_records (key, value, updated_at) VALUES (?1, ?2, ?3)
                  ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value, Utc::now().to_rfc3339()],
            )
            .map_err(|e| StudyTubeError::Storage(format!("Failed to write '{key}': {e}")))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StudyTubeError> {
        self.db
            .connection()
            .execute("DELETE FROM kv_records WHERE key = ?1", [key])
            .map_err(|e| StudyTubeError::Storage(format!("Failed to remove '{key}': {e}")))?;
        Ok(())
    }
}

/// In-memory key-value store.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    entries: HashMap<String, String>,
}

impl MemoryKvStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StudyTubeError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StudyTubeError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StudyTubeError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_store() -> SqliteKvStore {
        SqliteKvStore::with_database(Database::open_in_memory().unwrap())
    }

    #[test]
    fn test_sqlite_set_get_roundtrip() {
        let mut store = sqlite_store();
        assert_eq!(store.get("study-notes").unwrap(), None);

        store.set("study-notes", "abc").unwrap();
        assert_eq!(store.get("study-notes").unwrap(), Some("abc".to_string()));
    }

    #[test]
    fn test_sqlite_set_replaces() {
        let mut store = sqlite_store();
        store.set("k", "first").unwrap();
        store.set("k", "second").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("second".to_string()));
    }

    #[test]
    fn test_sqlite_remove() {
        let mut store = sqlite_store();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Removing a missing key is fine.
        store.remove("k").unwrap();
    }

    #[test]
    fn test_memory_store_matches_sqlite_behavior() {
        let mut store = MemoryKvStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap(), Some("v".to_string()));

        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
