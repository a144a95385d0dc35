//! Process-lifetime registry of materialized collections.
//!
//! # Responsibility
//! - Hydrate named collections from [`PersistentStore`] on first access.
//! - Keep every mutation write-through: store first, then cache.
//!
//! # Invariants
//! - Cache and store never diverge after a successful `update`.
//! - A failed store write leaves the cached entry untouched.
//! - Hydrated collections live for the process lifetime.

use crate::store::{PersistentStore, StoreError, StoreResult};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

/// Keyed registry of in-memory collections backed by [`PersistentStore`].
///
/// Constructed once and injected by reference into every component that
/// needs it, so tests can supply isolated instances.
pub struct CollectionCache {
    store: PersistentStore,
    collections: Mutex<HashMap<String, Value>>,
}

impl CollectionCache {
    pub fn new(store: PersistentStore) -> Self {
        Self {
            store,
            collections: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the named collection, hydrating it from the store on first
    /// access. An absent key persists `default` and returns it.
    pub fn get(&self, name: &str, default: Value) -> StoreResult<Value> {
        let mut collections = self.lock();
        if let Some(value) = collections.get(name) {
            return Ok(value.clone());
        }

        let value = self.store.read_key_or(name, default)?;
        debug!("event=collection_hydrate module=cache status=ok name={name}");
        collections.insert(name.to_string(), value.clone());
        Ok(value)
    }

    /// Writes `value` through the store, then refreshes the cache entry.
    pub fn update(&self, name: &str, value: Value) -> StoreResult<()> {
        self.store.write_key(name, &value)?;
        self.lock().insert(name.to_string(), value);
        Ok(())
    }

    /// Typed read of a list-shaped collection, defaulting to the empty list.
    pub fn records<T: DeserializeOwned>(&self, name: &str) -> StoreResult<Vec<T>> {
        let value = self.get(name, Value::Array(Vec::new()))?;
        serde_json::from_value(value).map_err(|source| StoreError::Corrupt {
            key: name.to_string(),
            source,
        })
    }

    /// Typed write-through of a list-shaped collection.
    pub fn put_records<T: Serialize>(&self, name: &str, records: &[T]) -> StoreResult<()> {
        let value = serde_json::to_value(records).map_err(|source| StoreError::Encode {
            key: name.to_string(),
            source,
        })?;
        self.update(name, value)
    }

    /// The underlying store, exposed for raw observation in tests and
    /// diagnostics.
    pub fn store(&self) -> &PersistentStore {
        &self.store
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Value>> {
        self.collections.lock().expect("collection cache lock poisoned")
    }
}
