//! Local storage provider backed by the flat key-value store.
//!
//! # Responsibility
//! - Wire the repositories to one injected collection cache and adapt them
//!   to the deferred [`StorageProvider`] contract.
//!
//! # Invariants
//! - Resource and asset operations require a saved object (one with an id).
//! - All repositories share the same cache instance; no duplicate state.

use crate::cache::CollectionCache;
use crate::catalog::TemplateCatalog;
use crate::model::object::{ContentObject, ObjectSpec};
use crate::model::resource::{Resource, ResourceDraft};
use crate::model::template::{Template, TemplateFilter};
use crate::repo::asset_repo::DocumentAssets;
use crate::repo::object_repo::ObjectRepository;
use crate::repo::resource_repo::ResourceTree;
use crate::repo::{RepoError, RepoResult};
use crate::service::provider::StorageProvider;
use crate::store::{PersistentStore, StoreError};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Provider over the local, synchronous key-value store.
pub struct LocalStorage {
    objects: ObjectRepository,
    resources: ResourceTree,
    assets: DocumentAssets,
    catalog: TemplateCatalog,
}

impl LocalStorage {
    /// Wires all repositories to one shared collection cache.
    pub fn new(cache: Arc<CollectionCache>) -> Self {
        Self {
            objects: ObjectRepository::new(Arc::clone(&cache)),
            resources: ResourceTree::new(Arc::clone(&cache)),
            assets: DocumentAssets::new(cache),
            catalog: TemplateCatalog::new(),
        }
    }

    /// Opens a file-backed provider.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        let store = PersistentStore::open(path).map_err(StoreError::from)?;
        Ok(Self::new(Arc::new(CollectionCache::new(store))))
    }

    /// Opens an in-memory provider, mainly for tests.
    pub fn open_in_memory() -> RepoResult<Self> {
        let store = PersistentStore::open_in_memory().map_err(StoreError::from)?;
        Ok(Self::new(Arc::new(CollectionCache::new(store))))
    }
}

/// A saved object's id, or `NotFound` for objects never saved.
fn require_id(object: &ContentObject) -> RepoResult<&str> {
    object.id.as_deref().ok_or_else(|| RepoError::NotFound {
        what: "object id (object was never saved)".to_string(),
    })
}

#[async_trait]
impl StorageProvider for LocalStorage {
    fn name(&self) -> &str {
        "LocalStorage"
    }

    async fn list_objects(&self) -> RepoResult<Vec<ContentObject>> {
        self.objects.list()
    }

    async fn save_object(&self, object: ContentObject) -> RepoResult<ContentObject> {
        self.objects.save(object)
    }

    async fn delete_object(&self, object: &ContentObject) -> RepoResult<Option<ContentObject>> {
        self.objects.delete(object)
    }

    async fn resources(&self, object: &ContentObject, path: &str) -> RepoResult<Vec<Resource>> {
        self.resources.list(require_id(object)?, path)
    }

    async fn add_resource(
        &self,
        object: &ContentObject,
        draft: ResourceDraft,
        base_path: &str,
    ) -> RepoResult<Resource> {
        self.resources.add(require_id(object)?, draft, base_path)
    }

    async fn rename_resource(
        &self,
        object: &ContentObject,
        resource: &Resource,
        new_name: &str,
    ) -> RepoResult<Resource> {
        self.resources.rename(require_id(object)?, resource, new_name)
    }

    async fn delete_resource(&self, object: &ContentObject, path: &str) -> RepoResult<bool> {
        self.resources.remove(require_id(object)?, path)
    }

    async fn index_document(&self, object: &ContentObject) -> RepoResult<String> {
        self.assets.index(require_id(object)?)
    }

    async fn update_index_document(
        &self,
        object: &ContentObject,
        payload: &str,
    ) -> RepoResult<()> {
        self.assets.update_index(require_id(object)?, payload)
    }

    async fn content_document(&self, object: &ContentObject) -> RepoResult<String> {
        self.assets.content(require_id(object)?)
    }

    async fn update_content_document(
        &self,
        object: &ContentObject,
        payload: &str,
    ) -> RepoResult<()> {
        self.assets.update_content(require_id(object)?, payload)
    }

    async fn template_categories(&self) -> RepoResult<Vec<String>> {
        Ok(self.catalog.categories())
    }

    async fn templates(&self, filter: &TemplateFilter) -> RepoResult<Vec<Template>> {
        Ok(self.catalog.templates(filter))
    }

    async fn object_specs(&self) -> RepoResult<Vec<ObjectSpec>> {
        Ok(self.catalog.object_specs())
    }
}
