//! Persistent key-value primitives over the flat backing store.
//!
//! # Responsibility
//! - Provide synchronous get-or-default / set operations keyed by string.
//! - Encode structured values to JSON text on write and decode on read.
//!
//! # Invariants
//! - `decode(encode(v)) == v` for every JSON value.
//! - A value that fails to decode is surfaced as [`StoreError::Corrupt`],
//!   never silently replaced.
//! - An absent key read with a default persists that default before
//!   returning it (self-healing first read).

use crate::db::{open_store, open_store_in_memory, DbError, DbResult};
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub type StoreResult<T> = Result<T, StoreError>;

/// Errors from persistent store operations.
#[derive(Debug)]
pub enum StoreError {
    /// Backing store bootstrap or transport failure.
    Db(DbError),
    /// The backing store rejected a write (e.g. quota or I/O failure).
    WriteFailed {
        key: String,
        source: rusqlite::Error,
    },
    /// The stored text under a key is not decodable.
    Corrupt {
        key: String,
        source: serde_json::Error,
    },
    /// A value could not be encoded for storage.
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::WriteFailed { key, source } => {
                write!(f, "backing store rejected write for key `{key}`: {source}")
            }
            Self::Corrupt { key, source } => {
                write!(f, "stored value under key `{key}` is corrupt: {source}")
            }
            Self::Encode { key, source } => {
                write!(f, "value for key `{key}` could not be encoded: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::WriteFailed { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous key-value store with JSON text encoding.
///
/// The connection is not `Sync`; all access funnels through one guard.
pub struct PersistentStore {
    conn: Mutex<Connection>,
}

impl PersistentStore {
    /// Wraps an already-bootstrapped connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Opens a file-backed store.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::new(open_store(path)?))
    }

    /// Opens an in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::new(open_store_in_memory()?))
    }

    /// Returns the decoded value under `key`, or `None` when absent.
    pub fn read_key(&self, key: &str) -> StoreResult<Option<Value>> {
        let Some(text) = self.raw_read(key)? else {
            return Ok(None);
        };
        let value = serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Returns the decoded value under `key`; an absent key persists and
    /// returns `default`.
    pub fn read_key_or(&self, key: &str, default: Value) -> StoreResult<Value> {
        match self.read_key(key)? {
            Some(value) => Ok(value),
            None => {
                self.write_key(key, &default)?;
                Ok(default)
            }
        }
    }

    /// Encodes `value` and stores it under `key`, overwriting prior contents.
    pub fn write_key(&self, key: &str, value: &Value) -> StoreResult<()> {
        let text = value.to_string();
        self.conn()
            .execute(
                "INSERT INTO kv_entries (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
                params![key, text],
            )
            .map_err(|source| StoreError::WriteFailed {
                key: key.to_string(),
                source,
            })?;
        Ok(())
    }

    /// Returns the stored text under `key` without decoding it.
    pub fn raw_read(&self, key: &str) -> StoreResult<Option<String>> {
        let text = self
            .conn()
            .query_row("SELECT value FROM kv_entries WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(text)
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().expect("store connection lock poisoned")
    }
}
