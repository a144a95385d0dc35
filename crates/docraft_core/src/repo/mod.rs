//! Repository layer over the collection cache.
//!
//! # Responsibility
//! - Provide CRUD-style data access for objects, resources and document
//!   assets, all routed through [`crate::cache::CollectionCache`].
//!
//! # Invariants
//! - Repositories hold no collection data of their own; every operation is a
//!   read-modify-write of a whole named collection.
//! - Non-idempotent mutations (add, rename) abort on collision and leave the
//!   stored collection unchanged.

use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod asset_defaults;
pub mod asset_repo;
pub mod object_repo;
pub mod resource_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors from object/resource/asset repository operations.
#[derive(Debug)]
pub enum RepoError {
    /// An add or rename would collide with an existing resource path.
    DuplicatePath { path: String },
    /// A mutation's target does not exist.
    NotFound { what: String },
    /// Underlying store transport, corruption or write failure.
    Store(StoreError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePath { path } => {
                write!(f, "an item with the same path already exists: {path}")
            }
            Self::NotFound { what } => write!(f, "not found: {what}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::DuplicatePath { .. } => None,
            Self::NotFound { .. } => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for RepoError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
