// Tests for core entity types and their wire shapes

use super::*;

#[test]
fn test_item_serializes_all_fields() {
    let item = Item {
        id: 7,
        value: "db-host".to_string(),
        item_type: "ini".to_string(),
        version: "1.2".to_string(),
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["value"], "db-host");
    assert_eq!(json["type"], "ini");
    assert_eq!(json["version"], "1.2");
}

#[test]
fn test_item_empty_fields_are_omitted() {
    let item = Item {
        id: 0,
        value: "db-host".to_string(),
        item_type: String::new(),
        version: String::new(),
    };

    let json = serde_json::to_value(&item).unwrap();
    let obj = json.as_object().unwrap();
    assert!(!obj.contains_key("id"));
    assert!(!obj.contains_key("type"));
    assert!(!obj.contains_key("version"));
    assert_eq!(json["value"], "db-host");
}

#[test]
fn test_module_id_always_serialized() {
    let module = Module::with_id(3);
    let json = serde_json::to_value(&module).unwrap();
    let obj = json.as_object().unwrap();
    assert_eq!(json["id"], 3);
    assert!(!obj.contains_key("value"));
    assert!(!obj.contains_key("version"));
}

#[test]
fn test_module_ref_deserializes_with_extra_fields() {
    let m: ModuleRef = serde_json::from_str(r#"{"id": 4, "value": "core"}"#).unwrap();
    assert_eq!(m.id, 4);
}

#[test]
fn test_module_ref_missing_id_defaults_to_zero() {
    let m: ModuleRef = serde_json::from_str(r#"{"value": "core"}"#).unwrap();
    assert_eq!(m.id, 0);
}

#[test]
fn test_item_display_format() {
    let item = Item {
        id: 1,
        value: "a".to_string(),
        item_type: "json".to_string(),
        version: "2".to_string(),
    };
    assert_eq!(
        item.to_string(),
        r#"ID: 1, Value: "a", Type: "json", Version: "2""#
    );
}

#[test]
fn test_module_display_format() {
    let module = Module {
        id: 9,
        value: "core".to_string(),
        version: "0.1".to_string(),
    };
    assert_eq!(module.to_string(), r#"ID: 9, Value: "core", Version: "0.1""#);
}

#[test]
fn test_log_level_from_verbosity_saturates() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(99), LogLevel::Trace);
}
