// Tests for response shapes and text rendering

use super::*;
use crate::store::mocks::value_item;

fn sample_set(with_modules: bool) -> InstallSet {
    InstallSet {
        items: vec![value_item("A"), value_item("B")],
        modules: with_modules.then(|| vec![Module::with_id(1), Module::with_id(2)]),
    }
}

#[test]
fn test_text_rendering_is_crlf_terminated() {
    let rendered = render_text(&sample_set(false).items);
    assert_eq!(rendered, "A\r\nB\r\n");
}

#[test]
fn test_text_rendering_of_empty_set_is_empty() {
    assert_eq!(render_text(&[]), "");
}

#[test]
fn test_grouped_rendering_labels_and_separators() {
    let set = sample_set(true);
    let rendered = render_text_grouped(&set.items, set.modules.as_deref().unwrap());

    let sep = "-".repeat(20);
    let expected = format!(
        "items\r\n{sep}\r\nA\r\nB\r\n{sep}\r\nmodules\r\n{sep}\r\n1\r\n2\r\n{sep}\r\n"
    );
    assert_eq!(rendered, expected);
}

#[test]
fn test_grouped_rendering_with_no_data_keeps_structure() {
    let rendered = render_text_grouped(&[], &[]);
    let sep = "-".repeat(20);
    assert_eq!(
        rendered,
        format!("items\r\n{sep}\r\n{sep}\r\nmodules\r\n{sep}\r\n{sep}\r\n")
    );
}

#[test]
fn test_text_error_is_single_line() {
    assert_eq!(render_text_error("nope"), "nope\r\n");
}

#[test]
fn test_empty_success_serializes_explicit_collections() {
    let set = InstallSet {
        items: Vec::new(),
        modules: None,
    };
    let json = serde_json::to_string(&InstallResponse::success(&set)).unwrap();
    assert_eq!(json, r#"{"items":[],"modules":[],"error":null}"#);
}

#[test]
fn test_success_with_modules_serializes_both_collections() {
    let json = serde_json::to_value(InstallResponse::success(&sample_set(true))).unwrap();
    assert_eq!(json["items"].as_array().unwrap().len(), 2);
    assert_eq!(json["modules"][0]["id"], 1);
    assert!(json["error"].is_null());
}

#[test]
fn test_failure_keeps_collections_present_but_empty() {
    let json = serde_json::to_value(InstallResponse::failure("boom")).unwrap();
    assert_eq!(json["error"], "boom");
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
    assert_eq!(json["modules"].as_array().unwrap().len(), 0);
}
