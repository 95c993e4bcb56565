// Tests for the end-to-end request pipeline

use super::*;
use crate::store::mocks::{MockGraphSource, value_item};

fn sample_source() -> MockGraphSource {
    MockGraphSource::new()
        .with_dependency(1, 2)
        .with_item(1, value_item("root.conf"))
        .with_item(2, value_item("dep.conf"))
}

#[test]
fn test_respond_json_items_only() {
    let source = sample_source();
    let (status, payload) = respond(&source, br#"[{"id": 1}]"#, false, Encoding::Json);

    assert_eq!(status, Status::Ok);
    let decoded: InstallResponse = serde_json::from_str(&payload).unwrap();
    let values: Vec<&str> = decoded.items.iter().map(|i| i.value.as_str()).collect();
    assert_eq!(values, vec!["dep.conf", "root.conf"]);
    assert!(decoded.modules.is_empty());
    assert!(decoded.error.is_none());
}

#[test]
fn test_respond_json_with_modules() {
    let source = sample_source();
    let (status, payload) = respond(&source, br#"[{"id": 1}]"#, true, Encoding::Json);

    assert_eq!(status, Status::Ok);
    let decoded: InstallResponse = serde_json::from_str(&payload).unwrap();
    let ids: Vec<i64> = decoded.modules.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[test]
fn test_respond_text_is_line_oriented() {
    let source = sample_source();
    let (status, payload) = respond(&source, br#"[{"id": 1}]"#, false, Encoding::Text);

    assert_eq!(status, Status::Ok);
    assert_eq!(payload, "dep.conf\r\nroot.conf\r\n");
}

#[test]
fn test_respond_empty_roots_is_ok_and_empty() {
    let source = sample_source();
    let (status, payload) = respond(&source, b"[]", false, Encoding::Json);

    assert_eq!(status, Status::Ok);
    assert!(payload.contains(r#""items":[]"#));
}

#[test]
fn test_malformed_body_short_circuits_before_store_access() {
    let source = sample_source();
    let (status, payload) = respond(&source, b"{broken", false, Encoding::Json);

    assert_eq!(status, Status::ClientError);
    assert_eq!(source.call_count(), 0);
    let decoded: InstallResponse = serde_json::from_str(&payload).unwrap();
    assert!(decoded.error.is_some());
    assert!(decoded.items.is_empty());
}

#[test]
fn test_missing_identity_short_circuits_before_store_access() {
    let source = sample_source();
    let (status, _) = respond(&source, br#"[{"value": "core"}]"#, true, Encoding::Text);

    assert_eq!(status, Status::ClientError);
    assert_eq!(source.call_count(), 0);
}

#[test]
fn test_storage_failure_is_generic_server_error() {
    let source = MockGraphSource::failing();
    let (status, payload) = respond(&source, br#"[{"id": 1}]"#, false, Encoding::Json);

    assert_eq!(status, Status::ServerError);
    let decoded: InstallResponse = serde_json::from_str(&payload).unwrap();
    // The cause stays in the logs; the payload carries a generic message.
    assert_eq!(decoded.error.as_deref(), Some("Ups something went wrong"));
}

#[test]
fn test_storage_failure_text_encoding() {
    let source = MockGraphSource::failing();
    let (status, payload) = respond(&source, br#"[{"id": 1}]"#, false, Encoding::Text);

    assert_eq!(status, Status::ServerError);
    assert_eq!(payload, "Ups something went wrong\r\n");
}
