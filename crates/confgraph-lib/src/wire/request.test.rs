// Tests for request parsing and validation

use super::*;

#[test]
fn test_parses_module_reference_list() {
    let refs = parse_module_refs(br#"[{"id": 1}, {"id": 2}]"#).unwrap();
    assert_eq!(refs, vec![ModuleRef::new(1), ModuleRef::new(2)]);
}

#[test]
fn test_extra_fields_are_ignored() {
    let refs = parse_module_refs(br#"[{"id": 3, "value": "core", "version": "1.0"}]"#).unwrap();
    assert_eq!(refs, vec![ModuleRef::new(3)]);
}

#[test]
fn test_empty_list_is_valid() {
    assert!(parse_module_refs(b"[]").unwrap().is_empty());
}

#[test]
fn test_unparseable_body_is_malformed() {
    let err = parse_module_refs(b"{not json").unwrap_err();
    assert!(matches!(err, RequestError::Malformed { .. }));
}

#[test]
fn test_object_instead_of_array_is_malformed() {
    let err = parse_module_refs(br#"{"id": 1}"#).unwrap_err();
    assert!(matches!(err, RequestError::Malformed { .. }));
}

#[test]
fn test_missing_identity_is_rejected() {
    let err = parse_module_refs(br#"[{"id": 1}, {"value": "core"}]"#).unwrap_err();
    match err {
        RequestError::MissingIdentity { body } => assert!(body.contains("core")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_zero_identity_is_rejected() {
    let err = parse_module_refs(br#"[{"id": 0}]"#).unwrap_err();
    assert!(matches!(err, RequestError::MissingIdentity { .. }));
}

#[test]
fn test_negative_identity_is_rejected() {
    let err = parse_module_refs(br#"[{"id": -5}]"#).unwrap_err();
    assert!(matches!(err, RequestError::MissingIdentity { .. }));
}
