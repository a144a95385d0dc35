use docraft_core::{CollectionCache, ContentObject, ObjectRepository, PersistentStore};
use serde_json::json;
use std::sync::Arc;

fn repo() -> ObjectRepository {
    let store = PersistentStore::open_in_memory().unwrap();
    ObjectRepository::new(Arc::new(CollectionCache::new(store)))
}

fn object(id: &str, title: &str) -> ContentObject {
    ContentObject {
        id: Some(id.to_string()),
        ..ContentObject::new().with_attr("title", title)
    }
}

#[test]
fn save_assigns_an_id_and_appends() {
    let repo = repo();

    let saved = repo.save(ContentObject::new().with_attr("title", "Intro")).unwrap();
    let id = saved.id.clone().expect("save must assign an id");
    assert!(id.starts_with("dco_"));

    let objects = repo.list().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].id.as_deref(), Some(id.as_str()));
    assert_eq!(objects[0].attr("title"), Some(&json!("Intro")));
}

#[test]
fn save_with_existing_id_replaces_in_place() {
    let repo = repo();
    repo.save(object("dco_a", "First")).unwrap();
    repo.save(object("dco_b", "Second")).unwrap();

    repo.save(object("dco_a", "First, revised")).unwrap();

    let objects = repo.list().unwrap();
    assert_eq!(objects.len(), 2);
    // Position preserved: the revised entry still comes before dco_b.
    assert_eq!(objects[0].id.as_deref(), Some("dco_a"));
    assert_eq!(objects[0].attr("title"), Some(&json!("First, revised")));
    assert_eq!(objects[1].id.as_deref(), Some("dco_b"));
}

#[test]
fn delete_returns_the_removed_object() {
    let repo = repo();
    repo.save(object("dco_a", "Keep")).unwrap();
    repo.save(object("dco_b", "Drop")).unwrap();

    let removed = repo.delete(&object("dco_b", "Drop")).unwrap();
    assert_eq!(removed.unwrap().id.as_deref(), Some("dco_b"));

    let objects = repo.list().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(objects[0].id.as_deref(), Some("dco_a"));
}

#[test]
fn delete_without_id_is_a_marked_no_op() {
    let repo = repo();
    repo.save(object("dco_a", "Keep")).unwrap();

    let removed = repo.delete(&ContentObject::new()).unwrap();
    assert!(removed.is_none());
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn delete_of_unknown_id_is_a_marked_no_op() {
    let repo = repo();
    repo.save(object("dco_a", "Keep")).unwrap();

    let removed = repo.delete(&object("dco_zz", "Ghost")).unwrap();
    assert!(removed.is_none());
    assert_eq!(repo.list().unwrap().len(), 1);
}

#[test]
fn caller_defined_fields_survive_the_store() {
    let repo = repo();
    let draft = ContentObject::new()
        .with_attr("title", "Rich")
        .with_attr("meta", json!({"lang": "en", "level": 2}));

    let saved = repo.save(draft).unwrap();
    let listed = repo.list().unwrap();
    assert_eq!(listed[0].attr("meta"), Some(&json!({"lang": "en", "level": 2})));
    assert_eq!(listed[0].id, saved.id);
}
