//! Storage provider contract.
//!
//! Every operation completes asynchronously even when the backing store is
//! synchronous, so call sites stay unchanged if a networked provider is
//! swapped in later.

use crate::model::object::{ContentObject, ObjectSpec};
use crate::model::resource::{Resource, ResourceDraft};
use crate::model::template::{Template, TemplateFilter};
use crate::repo::RepoResult;
use async_trait::async_trait;

/// Deferred-result interface consumed by the UI layer.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Display name of this provider.
    fn name(&self) -> &str;

    // Object lifecycle.
    async fn list_objects(&self) -> RepoResult<Vec<ContentObject>>;
    async fn save_object(&self, object: ContentObject) -> RepoResult<ContentObject>;
    /// Returns the removed object, or `None` when there was nothing to do.
    async fn delete_object(&self, object: &ContentObject) -> RepoResult<Option<ContentObject>>;

    // Resource lifecycle.
    async fn resources(&self, object: &ContentObject, path: &str) -> RepoResult<Vec<Resource>>;
    async fn add_resource(
        &self,
        object: &ContentObject,
        draft: ResourceDraft,
        base_path: &str,
    ) -> RepoResult<Resource>;
    async fn rename_resource(
        &self,
        object: &ContentObject,
        resource: &Resource,
        new_name: &str,
    ) -> RepoResult<Resource>;
    async fn delete_resource(&self, object: &ContentObject, path: &str) -> RepoResult<bool>;

    // Document assets.
    async fn index_document(&self, object: &ContentObject) -> RepoResult<String>;
    async fn update_index_document(
        &self,
        object: &ContentObject,
        payload: &str,
    ) -> RepoResult<()>;
    async fn content_document(&self, object: &ContentObject) -> RepoResult<String>;
    async fn update_content_document(
        &self,
        object: &ContentObject,
        payload: &str,
    ) -> RepoResult<()>;

    // Read-only catalogs.
    async fn template_categories(&self) -> RepoResult<Vec<String>>;
    async fn templates(&self, filter: &TemplateFilter) -> RepoResult<Vec<Template>>;
    async fn object_specs(&self) -> RepoResult<Vec<ObjectSpec>>;
}
