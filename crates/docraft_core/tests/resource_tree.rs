use docraft_core::{
    CollectionCache, PersistentStore, RepoError, Resource, ResourceDraft, ResourceTree,
};
use std::sync::Arc;

const OBJECT: &str = "dco_test";

fn tree() -> ResourceTree {
    let store = PersistentStore::open_in_memory().unwrap();
    ResourceTree::new(Arc::new(CollectionCache::new(store)))
}

fn add_dir(tree: &ResourceTree, name: &str, base: &str) -> Resource {
    tree.add(OBJECT, ResourceDraft::directory(name), base).unwrap()
}

fn add_file(tree: &ResourceTree, name: &str, base: &str) -> Resource {
    tree.add(OBJECT, ResourceDraft::file(name, 1024, "2020-02-12", "png"), base)
        .unwrap()
}

fn paths(tree: &ResourceTree, parent: &str) -> Vec<String> {
    tree.list(OBJECT, parent)
        .unwrap()
        .into_iter()
        .map(|resource| resource.path)
        .collect()
}

#[test]
fn add_derives_path_and_parent_from_base() {
    let tree = tree();

    // Base path is normalized to a trailing slash either way.
    let with_slash = add_file(&tree, "a.png", "/content/");
    assert_eq!(with_slash.path, "/content/a.png");
    assert_eq!(with_slash.parent, "/content/");

    let without_slash = add_file(&tree, "b.png", "/content");
    assert_eq!(without_slash.path, "/content/b.png");
    assert_eq!(without_slash.parent, "/content/");
}

#[test]
fn duplicate_path_aborts_and_leaves_the_tree_unchanged() {
    let tree = tree();
    add_file(&tree, "a.png", "/content/");

    let err = tree
        .add(OBJECT, ResourceDraft::file("a.png", 99, "2021-01-01", "png"), "/content/")
        .unwrap_err();
    assert!(matches!(err, RepoError::DuplicatePath { ref path } if path == "/content/a.png"));

    let children = tree.list(OBJECT, "/content/").unwrap();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].size, Some(1024));
}

#[test]
fn list_returns_direct_children_only_in_insertion_order() {
    let tree = tree();
    add_dir(&tree, "a", "/");
    add_dir(&tree, "b", "/a/");
    add_file(&tree, "z.png", "/a/");
    add_file(&tree, "deep.png", "/a/b/");

    assert_eq!(paths(&tree, "/"), ["/a"]);
    // Not sorted: z-then-nothing order is whatever was inserted.
    assert_eq!(paths(&tree, "/a/"), ["/a/b", "/a/z.png"]);
    assert_eq!(paths(&tree, "/a/b/"), ["/a/b/deep.png"]);
}

#[test]
fn rename_cascades_to_every_descendant() {
    let tree = tree();
    add_dir(&tree, "a", "/");
    let b = add_dir(&tree, "b", "/a/");
    add_dir(&tree, "c", "/a/b/");
    add_file(&tree, "d", "/a/b/c/");

    let renamed = tree.rename(OBJECT, &b, "z").unwrap();
    assert_eq!(renamed.path, "/a/z");
    assert_eq!(renamed.name, "z");

    assert_eq!(paths(&tree, "/a/"), ["/a/z"]);
    assert_eq!(paths(&tree, "/a/z/"), ["/a/z/c"]);
    assert_eq!(paths(&tree, "/a/z/c/"), ["/a/z/c/d"]);

    // No resource may keep the old prefix anywhere in the tree.
    for parent in ["/", "/a/", "/a/z/", "/a/z/c/"] {
        for path in paths(&tree, parent) {
            assert!(!path.starts_with("/a/b"), "stale path survived: {path}");
        }
    }
}

#[test]
fn rename_into_an_occupied_path_is_rejected() {
    let tree = tree();
    let old = add_file(&tree, "old.png", "/content/");
    add_file(&tree, "new.png", "/content/");

    let err = tree.rename(OBJECT, &old, "new.png").unwrap_err();
    assert!(matches!(err, RepoError::DuplicatePath { ref path } if path == "/content/new.png"));

    // Both entries still present under their original names.
    assert_eq!(paths(&tree, "/content/"), ["/content/old.png", "/content/new.png"]);
}

#[test]
fn rename_of_a_stale_resource_is_not_found() {
    let tree = tree();
    let file = add_file(&tree, "a.png", "/content/");
    tree.remove(OBJECT, "/content/a.png").unwrap();

    let err = tree.rename(OBJECT, &file, "b.png").unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));
}

#[test]
fn delete_cascades_and_spares_siblings() {
    let tree = tree();
    add_dir(&tree, "a", "/");
    add_file(&tree, "b", "/a/");
    add_file(&tree, "c", "/a/");
    add_dir(&tree, "x", "/");

    assert!(tree.remove(OBJECT, "/a").unwrap());

    assert_eq!(paths(&tree, "/"), ["/x"]);
    assert!(tree.list(OBJECT, "/a/").unwrap().is_empty());
}

#[test]
fn delete_of_an_absent_path_succeeds_unchanged() {
    let tree = tree();
    add_file(&tree, "a.png", "/content/");

    assert!(tree.remove(OBJECT, "/content/ghost.png").unwrap());
    assert_eq!(paths(&tree, "/content/"), ["/content/a.png"]);
}

#[test]
fn trees_of_different_objects_are_independent() {
    let store = PersistentStore::open_in_memory().unwrap();
    let cache = Arc::new(CollectionCache::new(store));
    let tree = ResourceTree::new(cache);

    tree.add("dco_one", ResourceDraft::directory("a"), "/").unwrap();
    tree.add("dco_two", ResourceDraft::directory("b"), "/").unwrap();

    let one: Vec<String> = tree
        .list("dco_one", "/")
        .unwrap()
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(one, ["/a"]);

    let two: Vec<String> = tree
        .list("dco_two", "/")
        .unwrap()
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(two, ["/b"]);
}
