// Tests for graph definition parsing and replay

use super::*;
use crate::store::GraphSource;
use std::collections::BTreeSet;

const FIXTURE: &str = r#"
[[items]]
id = 1
value = "db.conf"
type = "ini"
version = "1.0"

[[items]]
id = 2
value = "cache.conf"
type = "ini"

[[modules]]
id = 1
value = "core"
version = "1.0"

[[modules]]
id = 2
value = "extras"

[[associations]]
item = 1
module = 1

[[associations]]
item = 2
module = 2

[[dependencies]]
dependent = 2
dependee = 1
"#;

fn origin() -> PathBuf {
    PathBuf::from("graph.toml")
}

#[test]
fn test_parse_full_definition() {
    let def = GraphDefinition::from_str(FIXTURE, &origin()).unwrap();
    assert_eq!(def.items.len(), 2);
    assert_eq!(def.modules.len(), 2);
    assert_eq!(def.associations.len(), 2);
    assert_eq!(def.dependencies.len(), 1);
    assert_eq!(def.items[1].version, "");
}

#[test]
fn test_empty_definition_is_valid() {
    let def = GraphDefinition::from_str("", &origin()).unwrap();
    let store = def.into_store().unwrap();
    assert!(store.items().unwrap().is_empty());
    assert!(store.modules().unwrap().is_empty());
}

#[test]
fn test_replay_builds_queryable_store() {
    let store = GraphDefinition::from_str(FIXTURE, &origin())
        .unwrap()
        .into_store()
        .unwrap();

    assert_eq!(store.dependees_of(2).unwrap(), BTreeSet::from([1]));
    let items = store.items_of(1).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value, "db.conf");
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let err = GraphDefinition::from_str("[[items]]\nid = \"nope", &origin()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn test_duplicate_item_id_rejected() {
    let content = r#"
[[items]]
id = 1
value = "a"
type = "ini"

[[items]]
id = 1
value = "b"
type = "ini"
"#;
    let err = GraphDefinition::from_str(content, &origin())
        .unwrap()
        .into_store()
        .unwrap_err();
    assert!(matches!(err, LoadError::DuplicateItem { id: 1 }));
}

#[test]
fn test_duplicate_dependency_rejected() {
    let content = r#"
[[dependencies]]
dependent = 1
dependee = 2

[[dependencies]]
dependent = 1
dependee = 2
"#;
    let err = GraphDefinition::from_str(content, &origin())
        .unwrap()
        .into_store()
        .unwrap_err();
    assert!(matches!(
        err,
        LoadError::DuplicateDependency {
            dependent: 1,
            dependee: 2
        }
    ));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_store(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_load_store_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("graph.toml");
    std::fs::write(&path, FIXTURE).unwrap();

    let store = load_store(&path).unwrap();
    assert_eq!(store.modules().unwrap().len(), 2);
}
