//! Per-object index/content document blobs.
//!
//! # Responsibility
//! - Read and overwrite the opaque payloads under `index_<id>` and
//!   `content_<id>`.
//!
//! # Invariants
//! - First read of an absent payload persists the baked-in default.
//! - Updates overwrite unconditionally; there is no versioning.

use crate::cache::CollectionCache;
use crate::repo::asset_defaults::{DEFAULT_CONTENT_DOCUMENT, DEFAULT_INDEX_DOCUMENT};
use crate::repo::RepoResult;
use crate::store::StoreError;
use serde_json::Value;
use std::sync::Arc;

/// Accessors for an object's opaque index/content payloads.
pub struct DocumentAssets {
    cache: Arc<CollectionCache>,
}

impl DocumentAssets {
    pub fn new(cache: Arc<CollectionCache>) -> Self {
        Self { cache }
    }

    /// Index page payload, falling back to the built-in default.
    pub fn index(&self, object_id: &str) -> RepoResult<String> {
        self.payload(&index_key(object_id), DEFAULT_INDEX_DOCUMENT)
    }

    /// Content document payload, falling back to the built-in default.
    pub fn content(&self, object_id: &str) -> RepoResult<String> {
        self.payload(&content_key(object_id), DEFAULT_CONTENT_DOCUMENT)
    }

    pub fn update_index(&self, object_id: &str, payload: &str) -> RepoResult<()> {
        Ok(self
            .cache
            .update(&index_key(object_id), Value::String(payload.to_string()))?)
    }

    pub fn update_content(&self, object_id: &str, payload: &str) -> RepoResult<()> {
        Ok(self
            .cache
            .update(&content_key(object_id), Value::String(payload.to_string()))?)
    }

    fn payload(&self, key: &str, default: &str) -> RepoResult<String> {
        let value = self.cache.get(key, Value::String(default.to_string()))?;
        let payload = serde_json::from_value(value).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(payload)
    }
}

fn index_key(object_id: &str) -> String {
    format!("index_{object_id}")
}

fn content_key(object_id: &str) -> String {
    format!("content_{object_id}")
}
