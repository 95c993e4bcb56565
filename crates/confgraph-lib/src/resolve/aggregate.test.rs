// Tests for item aggregation

use super::*;
use crate::store::mocks::{MockGraphSource, value_item};

#[test]
fn test_aggregates_items_across_closure() {
    let source = MockGraphSource::new()
        .with_dependency(1, 2)
        .with_item(1, value_item("root.conf"))
        .with_item(2, value_item("dep.conf"));

    let set = aggregate(&source, &[1], false).unwrap();
    let values: Vec<&str> = set.items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["dep.conf", "root.conf"]);
    assert!(set.modules.is_none());
}

#[test]
fn test_deduplicates_by_value_across_modules() {
    let source = MockGraphSource::new()
        .with_dependency(1, 2)
        .with_item(1, value_item("shared-config"))
        .with_item(2, value_item("shared-config"));

    let set = aggregate(&source, &[1], false).unwrap();
    assert_eq!(set.items.len(), 1);
    assert_eq!(set.items[0].value, "shared-config");
}

#[test]
fn test_deduplicates_by_value_not_by_id() {
    let a = Item {
        id: 10,
        value: "shared-config".to_string(),
        item_type: "ini".to_string(),
        version: "1".to_string(),
    };
    let b = Item {
        id: 20,
        value: "shared-config".to_string(),
        item_type: "ini".to_string(),
        version: "2".to_string(),
    };
    let source = MockGraphSource::new().with_item(1, a).with_item(1, b);

    let set = aggregate(&source, &[1], false).unwrap();
    assert_eq!(set.items.len(), 1);
    // Distinct rows with the same value collapse; last write wins.
    assert_eq!(set.items[0].id, 20);
}

#[test]
fn test_include_modules_returns_full_closure() {
    let source = MockGraphSource::new()
        .with_dependency(1, 2)
        .with_dependency(2, 3)
        .with_item(3, value_item("leaf.conf"));

    let set = aggregate(&source, &[1], true).unwrap();
    let module_ids: Vec<i64> = set.modules.unwrap().iter().map(|m| m.id).collect();
    assert_eq!(module_ids, vec![1, 2, 3]);
    assert_eq!(set.items.len(), 1);
}

#[test]
fn test_empty_roots_yield_empty_sets() {
    let source = MockGraphSource::new().with_item(1, value_item("a"));

    let set = aggregate(&source, &[], true).unwrap();
    assert!(set.items.is_empty());
    assert_eq!(set.modules, Some(Vec::new()));
    assert_eq!(source.call_count(), 0);
}

#[test]
fn test_module_without_items_is_fine() {
    let source = MockGraphSource::new().with_dependency(1, 2);
    let set = aggregate(&source, &[1], false).unwrap();
    assert!(set.items.is_empty());
}

#[test]
fn test_store_error_yields_no_partial_result() {
    let source = MockGraphSource::failing();
    let err = aggregate(&source, &[1], true).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable { .. }));
}
