//! Public service facade.
//!
//! # Responsibility
//! - Expose the collaborator-facing API as deferred (async) operations.
//! - Keep UI-layer callers decoupled from the synchronous store underneath.
//!
//! # Invariants
//! - No failure crosses this boundary as a panic; everything is a typed
//!   `Err` value.

mod local;
mod provider;
mod registry;

pub use local::LocalStorage;
pub use provider::StorageProvider;
pub use registry::{ProviderRegistry, ProviderRegistryError};
