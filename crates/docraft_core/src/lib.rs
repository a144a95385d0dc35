//! Local persistence core for digital content objects.
//!
//! Emulates a hierarchical, path-addressed resource tree and an object
//! repository on top of a flat, synchronous key-value store. The public
//! surface is asynchronous throughout, so callers are already written
//! against the shape a networked provider would have.

pub mod cache;
pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use cache::CollectionCache;
pub use catalog::{TemplateCatalog, TEMPLATE_CATEGORIES};
pub use db::{open_store, open_store_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::object::{ContentObject, ObjectId, ObjectSpec};
pub use model::resource::{Resource, ResourceDraft, ResourceKind};
pub use model::template::{Template, TemplateFilter};
pub use repo::asset_repo::DocumentAssets;
pub use repo::object_repo::ObjectRepository;
pub use repo::resource_repo::ResourceTree;
pub use repo::{RepoError, RepoResult};
pub use service::{LocalStorage, ProviderRegistry, ProviderRegistryError, StorageProvider};
pub use store::{PersistentStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
