//! Resource entries of an object's virtual path tree.
//!
//! # Responsibility
//! - Define the file/directory records stored in `res_<objectId>`
//!   collections.
//!
//! # Invariants
//! - `path == parent + name` for every resource.
//! - No two resources in one tree share a path.
//! - `parent` always carries a trailing slash.

use serde::{Deserialize, Serialize};

/// File-or-directory discriminator, stored as `"F"` / `"D"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceKind {
    #[serde(rename = "F")]
    File,
    #[serde(rename = "D")]
    Directory,
}

/// One entry in an object's virtual path tree.
///
/// `path` acts as the primary key within the owning tree. Size and date
/// metadata is required for files and optional for directories; actual
/// resource bytes are handled by an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub path: String,
    /// Local segment (basename) of `path`.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    /// Path prefix the resource lives under, including trailing slash.
    pub parent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

impl Resource {
    pub fn is_directory(&self) -> bool {
        self.kind == ResourceKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == ResourceKind::File
    }
}

/// Caller-supplied portion of a new resource; the tree derives `path` and
/// `parent` from the target location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    pub name: String,
    pub kind: ResourceKind,
    pub size: Option<u64>,
    pub created_at: Option<String>,
    pub extension: Option<String>,
}

impl ResourceDraft {
    /// Draft for a file entry with its required metadata.
    pub fn file(
        name: impl Into<String>,
        size: u64,
        created_at: impl Into<String>,
        extension: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ResourceKind::File,
            size: Some(size),
            created_at: Some(created_at.into()),
            extension: Some(extension.into()),
        }
    }

    /// Draft for a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ResourceKind::Directory,
            size: None,
            created_at: None,
            extension: None,
        }
    }
}
