// Tests for closure resolution

use super::*;
use crate::store::mocks::MockGraphSource;

fn set(ids: &[i64]) -> BTreeSet<i64> {
    ids.iter().copied().collect()
}

#[test]
fn test_every_root_is_in_its_own_closure() {
    let source = MockGraphSource::new()
        .with_dependency(1, 2)
        .with_dependency(3, 4);

    let closure = resolve(&source, &[1, 3, 9]).unwrap();
    assert!(closure.is_superset(&set(&[1, 3, 9])));
}

#[test]
fn test_isolated_root_resolves_to_itself() {
    let source = MockGraphSource::new();
    assert_eq!(resolve(&source, &[5]).unwrap(), set(&[5]));
}

#[test]
fn test_self_dependency_terminates() {
    let source = MockGraphSource::new().with_dependency(5, 5);
    assert_eq!(resolve(&source, &[5]).unwrap(), set(&[5]));
}

#[test]
fn test_chain_is_fully_expanded() {
    // A -> B -> C
    let source = MockGraphSource::new()
        .with_dependency(1, 2)
        .with_dependency(2, 3);

    assert_eq!(resolve(&source, &[1]).unwrap(), set(&[1, 2, 3]));
}

#[test]
fn test_diamond_visits_shared_dependee_once() {
    // A -> B, A -> C, B -> D, C -> D
    let source = MockGraphSource::new()
        .with_dependency(1, 2)
        .with_dependency(1, 3)
        .with_dependency(2, 4)
        .with_dependency(3, 4);

    assert_eq!(resolve(&source, &[1]).unwrap(), set(&[1, 2, 3, 4]));
    // D expanded exactly once despite two inbound paths.
    let expansions = source
        .calls()
        .iter()
        .filter(|c| matches!(c, crate::store::mocks::SourceCall::Dependees(4)))
        .count();
    assert_eq!(expansions, 1);
}

#[test]
fn test_cycle_terminates() {
    let source = MockGraphSource::new()
        .with_dependency(1, 2)
        .with_dependency(2, 3)
        .with_dependency(3, 1);

    assert_eq!(resolve(&source, &[1]).unwrap(), set(&[1, 2, 3]));
}

#[test]
fn test_empty_roots_yield_empty_closure() {
    let source = MockGraphSource::new().with_dependency(1, 2);
    assert!(resolve(&source, &[]).unwrap().is_empty());
    assert_eq!(source.call_count(), 0);
}

#[test]
fn test_unknown_module_contributes_no_edges() {
    let source = MockGraphSource::new().with_dependency(1, 2);
    assert_eq!(resolve(&source, &[1, 77]).unwrap(), set(&[1, 2, 77]));
}

#[test]
fn test_duplicate_roots_collapse() {
    let source = MockGraphSource::new().with_dependency(1, 2);
    assert_eq!(resolve(&source, &[1, 1, 1]).unwrap(), set(&[1, 2]));
}

#[test]
fn test_store_error_aborts_traversal() {
    let source = MockGraphSource::failing();
    let err = resolve(&source, &[1]).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable { .. }));
    // One read attempted, then the traversal was abandoned.
    assert_eq!(source.call_count(), 1);
}
