//! Per-object resource tree over `res_<objectId>` collections.
//!
//! # Responsibility
//! - List, add, rename and delete path-addressed resources with cascading
//!   consistency for directory subtrees.
//!
//! # Invariants
//! - Paths are unique within one tree; collisions abort with `DuplicatePath`.
//! - A rename or delete of a directory path applies to every resource whose
//!   path starts with `path + "/"`.
//! - Collections preserve insertion order; nothing is implicitly sorted.
//! - Delete-by-path is idempotent: removing an absent path succeeds.

use crate::cache::CollectionCache;
use crate::model::resource::{Resource, ResourceDraft};
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use std::sync::Arc;

/// Path-tree access to one object's resource collection.
pub struct ResourceTree {
    cache: Arc<CollectionCache>,
}

impl ResourceTree {
    pub fn new(cache: Arc<CollectionCache>) -> Self {
        Self { cache }
    }

    /// Lists direct children: resources whose `parent` equals `path`.
    pub fn list(&self, object_id: &str, path: &str) -> RepoResult<Vec<Resource>> {
        let resources: Vec<Resource> = self.cache.records(&collection_key(object_id))?;
        Ok(resources
            .into_iter()
            .filter(|resource| resource.parent == path)
            .collect())
    }

    /// Adds one resource under `base_path`.
    ///
    /// `base_path` is normalized to end with `/`; the resulting path must not
    /// already exist in the tree.
    pub fn add(
        &self,
        object_id: &str,
        draft: ResourceDraft,
        base_path: &str,
    ) -> RepoResult<Resource> {
        let key = collection_key(object_id);
        let mut resources: Vec<Resource> = self.cache.records(&key)?;

        let parent = normalize_base_path(base_path);
        let path = format!("{parent}{}", draft.name);
        if resources.iter().any(|resource| resource.path == path) {
            warn!("event=resource_add module=repo status=error code=duplicate_path path={path}");
            return Err(RepoError::DuplicatePath { path });
        }

        let resource = Resource {
            path,
            name: draft.name,
            kind: draft.kind,
            parent,
            size: draft.size,
            created_at: draft.created_at,
            extension: draft.extension,
        };
        resources.push(resource.clone());
        self.cache.put_records(&key, &resources)?;
        info!(
            "event=resource_add module=repo status=ok path={} total={}",
            resource.path,
            resources.len()
        );
        Ok(resource)
    }

    /// Renames one resource, rewriting the paths of every descendant.
    ///
    /// The new path is the resource's current parent plus `new_name`. Fails
    /// with `DuplicatePath` when another resource owns that path, and with
    /// `NotFound` when the resource's current path is no longer in the tree.
    pub fn rename(
        &self,
        object_id: &str,
        resource: &Resource,
        new_name: &str,
    ) -> RepoResult<Resource> {
        let key = collection_key(object_id);
        let mut resources: Vec<Resource> = self.cache.records(&key)?;

        let parent = parent_of(&resource.path).to_string();
        let new_path = format!("{parent}{new_name}");
        if resources
            .iter()
            .any(|entry| entry.path == new_path && entry.path != resource.path)
        {
            warn!(
                "event=resource_rename module=repo status=error code=duplicate_path path={new_path}"
            );
            return Err(RepoError::DuplicatePath { path: new_path });
        }

        let Some(index) = resources.iter().position(|entry| entry.path == resource.path) else {
            warn!(
                "event=resource_rename module=repo status=error code=not_found path={}",
                resource.path
            );
            return Err(RepoError::NotFound {
                what: format!("resource at `{}`", resource.path),
            });
        };

        let old_prefix = format!("{}/", resource.path);
        let new_prefix = format!("{new_path}/");
        let mut cascaded = 0usize;
        for entry in resources.iter_mut() {
            if let Some(rest) = entry.path.strip_prefix(&old_prefix) {
                let rebased = format!("{new_prefix}{rest}");
                entry.path = rebased;
                entry.parent = parent_of(&entry.path).to_string();
                cascaded += 1;
            }
        }

        resources[index].name = new_name.to_string();
        resources[index].path = new_path;
        let renamed = resources[index].clone();

        self.cache.put_records(&key, &resources)?;
        info!(
            "event=resource_rename module=repo status=ok path={} descendants={cascaded}",
            renamed.path
        );
        Ok(renamed)
    }

    /// Removes the resource at `path` and every resource nested under it.
    ///
    /// Always reports success; deleting an absent path persists the
    /// collection unchanged.
    pub fn remove(&self, object_id: &str, path: &str) -> RepoResult<bool> {
        let key = collection_key(object_id);
        let resources: Vec<Resource> = self.cache.records(&key)?;

        let prefix = format!("{path}/");
        let before = resources.len();
        let remaining: Vec<Resource> = resources
            .into_iter()
            .filter(|resource| resource.path != path && !resource.path.starts_with(&prefix))
            .collect();

        let removed = before - remaining.len();
        self.cache.put_records(&key, &remaining)?;
        info!("event=resource_delete module=repo status=ok path={path} removed={removed}");
        Ok(true)
    }
}

fn collection_key(object_id: &str) -> String {
    format!("res_{object_id}")
}

fn normalize_base_path(base_path: &str) -> String {
    if base_path.ends_with('/') {
        base_path.to_string()
    } else {
        format!("{base_path}/")
    }
}

/// Path prefix up to and including the last slash.
fn parent_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(index) => &path[..index + 1],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_base_path, parent_of};

    #[test]
    fn base_path_gains_exactly_one_trailing_slash() {
        assert_eq!(normalize_base_path("/content"), "/content/");
        assert_eq!(normalize_base_path("/content/"), "/content/");
        assert_eq!(normalize_base_path("/"), "/");
    }

    #[test]
    fn parent_is_the_prefix_through_the_last_slash() {
        assert_eq!(parent_of("/content/cover.png"), "/content/");
        assert_eq!(parent_of("/content"), "/");
        assert_eq!(parent_of("loose"), "");
    }
}
