// Tests for the in-memory store backend

use super::*;

fn seeded_store() -> MemoryStore {
    let store = MemoryStore::new();
    store.create_item("alpha.conf", "ini", "1.0").unwrap();
    store.create_item("beta.conf", "ini", "1.0").unwrap();
    store.create_module("core", "1.0").unwrap();
    store.create_module("extras", "1.0").unwrap();
    store
}

#[test]
fn test_create_item_generates_sequential_ids() {
    let store = MemoryStore::new();
    assert_eq!(store.create_item("a", "ini", "1").unwrap(), 1);
    assert_eq!(store.create_item("b", "ini", "1").unwrap(), 2);

    let item = store.item(1).unwrap().unwrap();
    assert_eq!(item.value, "a");
    assert_eq!(item.item_type, "ini");
}

#[test]
fn test_missing_rows_are_none() {
    let store = MemoryStore::new();
    assert!(store.item(42).unwrap().is_none());
    assert!(store.module(42).unwrap().is_none());
    assert!(store.item_module(42).unwrap().is_none());
}

#[test]
fn test_delete_reports_affected_rows() {
    let store = seeded_store();
    assert_eq!(store.delete_item(1).unwrap(), 1);
    assert_eq!(store.delete_item(1).unwrap(), 0);
    assert_eq!(store.delete_module(2).unwrap(), 1);
    assert_eq!(store.delete_module(99).unwrap(), 0);
}

#[test]
fn test_items_of_follows_associations() {
    let store = seeded_store();
    store.create_item_module(1, 1).unwrap();
    store.create_item_module(2, 1).unwrap();

    let items = store.items_of(1).unwrap();
    let values: Vec<&str> = items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["alpha.conf", "beta.conf"]);
    assert!(store.items_of(2).unwrap().is_empty());
}

#[test]
fn test_items_of_skips_dangling_associations() {
    let store = seeded_store();
    store.create_item_module(1, 1).unwrap();
    store.create_item_module(2, 1).unwrap();
    store.delete_item(2).unwrap();

    let items = store.items_of(1).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].value, "alpha.conf");
}

#[test]
fn test_items_of_unknown_module_is_empty() {
    let store = seeded_store();
    assert!(store.items_of(999).unwrap().is_empty());
}

#[test]
fn test_dependees_of_unknown_module_is_empty() {
    let store = MemoryStore::new();
    assert!(store.dependees_of(7).unwrap().is_empty());
}

#[test]
fn test_dependency_edges_are_directed() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();

    assert_eq!(store.dependees_of(1).unwrap(), BTreeSet::from([2]));
    assert!(store.dependees_of(2).unwrap().is_empty());
}

#[test]
fn test_duplicate_dependency_is_conflict() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();

    let err = store.create_module_dependency(1, 2).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Conflict {
            dependent: 1,
            dependee: 2
        }
    ));
    // Still exactly one edge.
    assert_eq!(store.module_dependencies().unwrap().len(), 1);
}

#[test]
fn test_reverse_edge_is_not_a_duplicate() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();
    store.create_module_dependency(2, 1).unwrap();
    assert_eq!(store.module_dependencies().unwrap().len(), 2);
}

#[test]
fn test_self_dependency_is_representable() {
    let store = seeded_store();
    store.create_module_dependency(1, 1).unwrap();
    assert_eq!(store.dependees_of(1).unwrap(), BTreeSet::from([1]));
}

#[test]
fn test_dependency_to_unknown_module_is_allowed() {
    let store = seeded_store();
    // Module 50 has no row; the edge still exists in the graph.
    store.create_module_dependency(1, 50).unwrap();
    assert_eq!(store.dependees_of(1).unwrap(), BTreeSet::from([50]));
}

#[test]
fn test_delete_dependency_by_pair() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();

    assert_eq!(store.delete_module_dependency(1, 2).unwrap(), 1);
    assert_eq!(store.delete_module_dependency(1, 2).unwrap(), 0);
    assert!(store.dependees_of(1).unwrap().is_empty());
}

#[test]
fn test_delete_dependencies_by_dependent() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();
    store.create_module_dependency(1, 7).unwrap();
    store.create_module_dependency(2, 1).unwrap();

    assert_eq!(store.delete_dependencies_by_dependent(1).unwrap(), 2);
    assert!(store.dependees_of(1).unwrap().is_empty());
    // The incoming edge from module 2 survives.
    assert_eq!(store.dependees_of(2).unwrap(), BTreeSet::from([1]));
}

#[test]
fn test_delete_dependencies_by_dependee() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();
    store.create_module_dependency(7, 2).unwrap();
    store.create_module_dependency(2, 1).unwrap();

    assert_eq!(store.delete_dependencies_by_dependee(2).unwrap(), 2);
    assert!(store.dependees_of(1).unwrap().is_empty());
    assert_eq!(store.dependees_of(2).unwrap(), BTreeSet::from([1]));
}

#[test]
fn test_dependency_listings_filter_by_endpoint() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();
    store.create_module_dependency(1, 3).unwrap();
    store.create_module_dependency(3, 2).unwrap();

    let by_dependent = store.dependencies_of_dependent(1).unwrap();
    assert_eq!(by_dependent.len(), 2);
    assert!(by_dependent.iter().all(|d| d.dependent == 1));

    let by_dependee = store.dependencies_of_dependee(2).unwrap();
    assert_eq!(by_dependee.len(), 2);
    assert!(by_dependee.iter().all(|d| d.dependee == 2));
}

#[test]
fn test_deleted_module_keeps_its_edges() {
    let store = seeded_store();
    store.create_module_dependency(1, 2).unwrap();
    store.delete_module(2).unwrap();

    // Closure derivation reads the dependency table, not the module table.
    assert_eq!(store.dependees_of(1).unwrap(), BTreeSet::from([2]));
}

#[test]
fn test_insert_preloaded_rows_bump_id_sequence() {
    let store = MemoryStore::new();
    assert!(
        store
            .insert_item(Item {
                id: 10,
                value: "x".to_string(),
                item_type: "ini".to_string(),
                version: "1".to_string(),
            })
            .unwrap()
    );
    assert!(
        !store
            .insert_item(Item {
                id: 10,
                value: "y".to_string(),
                item_type: "ini".to_string(),
                version: "1".to_string(),
            })
            .unwrap()
    );
    assert_eq!(store.create_item("z", "ini", "1").unwrap(), 11);
}

#[test]
fn test_insert_with_max_id_keeps_sequence_in_range() {
    let store = MemoryStore::new();
    assert!(
        store
            .insert_item(Item {
                id: i64::MAX,
                value: "x".to_string(),
                item_type: "ini".to_string(),
                version: "1".to_string(),
            })
            .unwrap()
    );
    // The id sequence saturates instead of wrapping.
    assert!(store.item(i64::MAX).unwrap().is_some());
}

#[test]
fn test_concurrent_reads_share_the_store() {
    use std::sync::Arc;

    let store = Arc::new(seeded_store());
    store.create_item_module(1, 1).unwrap();
    store.create_module_dependency(2, 1).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let dependees = store.dependees_of(2).unwrap();
                assert_eq!(dependees, BTreeSet::from([1]));
                let items = store.items_of(1).unwrap();
                assert_eq!(items.len(), 1);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
