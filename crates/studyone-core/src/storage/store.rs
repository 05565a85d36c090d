//! SQLite-backed key-value store of JSON blobs.
//!
//! Every domain module owns one key; values are whole JSON documents
//! rewritten on each save. There are no partial updates, no schema
//! enforcement and no migrations beyond creating the `kv` table.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::data_dir;
use crate::error::StoreError;

/// Namespaced key-value store.
///
/// Values are JSON text. Typed access goes through [`Store::get_json`] /
/// [`Store::put_json`]; raw access exists for backup and diagnostics.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `<data_dir>/studyone.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open() -> Result<Self, StoreError> {
        Self::open_at(data_dir()?.join("studyone.db"))
    }

    /// Open the store at an explicit path.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_at<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (tests, ephemeral sessions).
    ///
    /// # Errors
    /// Returns an error if the in-memory database cannot be initialized.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(|source| StoreError::OpenFailed {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get the raw JSON text stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Remove `key` and its value. Removing an absent key is a no-op.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    /// All keys currently present, sorted.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT key FROM kv ORDER BY key")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        let mut keys = Vec::new();
        for key in rows {
            keys.push(key?);
        }
        Ok(keys)
    }

    /// Typed read with a defined default.
    ///
    /// An absent key or an unparsable value yields `T::default()`; parse
    /// failures are logged and never surfaced. This is the contract every
    /// domain module relies on: malformed stored state means "empty", not
    /// "error".
    ///
    /// # Errors
    /// Returns an error only if the underlying query fails.
    pub fn get_json<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        match self.get_raw(key)? {
            None => Ok(T::default()),
            Some(text) => match serde_json::from_str(&text) {
                Ok(value) => Ok(value),
                Err(e) => {
                    log::warn!("discarding unparsable value under '{key}': {e}");
                    Ok(T::default())
                }
            },
        }
    }

    /// Typed write; serializes `value` and overwrites the whole key.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let text = serde_json::to_string(value)
            .map_err(|e| StoreError::QueryFailed(format!("serialize '{key}': {e}")))?;
        self.put_raw(key, &text)
    }
}
