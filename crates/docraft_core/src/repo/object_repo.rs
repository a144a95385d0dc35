//! Content object repository over the `objects` collection.
//!
//! # Responsibility
//! - List, upsert and delete content objects by id.
//! - Assign `dco_<epoch-millis>` ids on first save.
//!
//! # Invariants
//! - Upserting an existing id replaces the entry in place (index preserved).
//! - Deleting an unset or unknown id is a no-op reported as `Ok(None)`,
//!   never an error.

use crate::cache::CollectionCache;
use crate::model::object::{ContentObject, ObjectId};
use crate::repo::RepoResult;
use log::info;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const OBJECTS_KEY: &str = "objects";

/// CRUD access to the `objects` collection.
pub struct ObjectRepository {
    cache: Arc<CollectionCache>,
}

impl ObjectRepository {
    pub fn new(cache: Arc<CollectionCache>) -> Self {
        Self { cache }
    }

    /// Returns the whole collection. Filtering is caller-defined.
    pub fn list(&self) -> RepoResult<Vec<ContentObject>> {
        Ok(self.cache.records(OBJECTS_KEY)?)
    }

    /// Upserts one object by id, assigning an id when unset.
    ///
    /// Returns the (possibly id-assigned) object as persisted.
    pub fn save(&self, mut object: ContentObject) -> RepoResult<ContentObject> {
        let mut objects: Vec<ContentObject> = self.cache.records(OBJECTS_KEY)?;

        let id = match &object.id {
            Some(id) => id.clone(),
            None => {
                let id = generate_object_id();
                object.id = Some(id.clone());
                id
            }
        };

        match objects.iter().position(|entry| entry.id.as_deref() == Some(id.as_str())) {
            Some(index) => objects[index] = object.clone(),
            None => objects.push(object.clone()),
        }

        self.cache.put_records(OBJECTS_KEY, &objects)?;
        info!(
            "event=object_save module=repo status=ok id={id} total={}",
            objects.len()
        );
        Ok(object)
    }

    /// Removes one object by id.
    ///
    /// Returns the removed entry, or `None` when the object has no id or no
    /// entry with that id exists.
    pub fn delete(&self, object: &ContentObject) -> RepoResult<Option<ContentObject>> {
        let Some(id) = object.id.as_deref() else {
            return Ok(None);
        };

        let mut objects: Vec<ContentObject> = self.cache.records(OBJECTS_KEY)?;
        let Some(index) = objects
            .iter()
            .position(|entry| entry.id.as_deref() == Some(id))
        else {
            return Ok(None);
        };

        let removed = objects.remove(index);
        self.cache.put_records(OBJECTS_KEY, &objects)?;
        info!(
            "event=object_delete module=repo status=ok id={id} total={}",
            objects.len()
        );
        Ok(Some(removed))
    }
}

/// Generates `dco_<epoch-millis>`.
///
/// Same-millisecond saves collide; the persisted format keeps this scheme,
/// so collision handling stays with callers that save in tight loops.
fn generate_object_id() -> ObjectId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    format!("dco_{millis}")
}
