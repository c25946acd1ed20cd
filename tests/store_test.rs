use blueprint::error::Error;
use blueprint::model::{FolderItem, Template};
use blueprint::store::{
    export_template, export_templates, import_template, import_templates, MemoryStore,
    TemplateStore,
};
use uuid::Uuid;

fn named_template(name: &str) -> Template {
    Template::from_items(name, vec![FolderItem::folder("src")])
}

#[test]
fn test_upsert_get_and_list_keep_insertion_order() {
    let mut store = MemoryStore::new();
    let first = named_template("first");
    let second = named_template("second");
    let first_id = first.id;

    store.upsert(first);
    store.upsert(second);

    assert_eq!(store.get(first_id).unwrap().name, "first");
    let names: Vec<&str> = store.list().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["first", "second"]);
}

#[test]
fn test_upsert_replaces_by_id() {
    let mut store = MemoryStore::new();
    let mut template = named_template("before");
    let id = template.id;
    store.upsert(template.clone());

    template.name = "after".to_string();
    template.touch();
    store.upsert(template);

    assert_eq!(store.list().len(), 1);
    assert_eq!(store.get(id).unwrap().name, "after");
}

#[test]
fn test_delete_returns_the_removed_template() {
    let mut store = MemoryStore::new();
    let template = named_template("doomed");
    let id = template.id;
    store.upsert(template);

    assert_eq!(store.delete(id).unwrap().name, "doomed");
    assert!(store.get(id).is_none());
    assert!(store.delete(id).is_none());
}

#[test]
fn test_require_reports_missing_templates() {
    let store = MemoryStore::new();
    let id = Uuid::new_v4();

    match store.require(id) {
        Err(Error::TemplateNotFound { id: missing }) => assert_eq!(missing, id),
        other => panic!("expected TemplateNotFound, got {:?}", other.map(|t| &t.name)),
    }
}

#[test]
fn test_single_template_round_trip() {
    let template = named_template("solo");
    let json = export_template(&template).unwrap();
    assert_eq!(import_template(&json).unwrap(), template);
}

#[test]
fn test_template_sequence_round_trip() {
    let templates = vec![named_template("one"), named_template("two")];
    let json = export_templates(&templates).unwrap();
    assert_eq!(import_templates(&json).unwrap(), templates);
}

#[test]
fn test_import_rejects_malformed_json() {
    assert!(matches!(import_template("{not json"), Err(Error::SerdeError(_))));
    assert!(matches!(import_templates("[{]"), Err(Error::SerdeError(_))));
}
