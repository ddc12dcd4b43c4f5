//! JSON Boundary Integration Tests
//!
//! Untyped data enters through serde_json and is classified over the
//! typed value model.

use js_value::Value;
use pretty_assertions::assert_eq;
use serde_json::json;
use type_guards::{
    get_type, is_any_object, is_array, is_empty_string, is_full_string, is_number,
    is_plain_object, is_primitive, TypeTag,
};

fn classify_json(json: serde_json::Value) -> TypeTag {
    get_type(&Value::from(json))
}

/// Test: each JSON kind maps to one tag
#[test]
fn test_json_kinds() {
    assert_eq!(classify_json(json!(null)), TypeTag::NULL);
    assert_eq!(classify_json(json!(true)), TypeTag::BOOLEAN);
    assert_eq!(classify_json(json!(1)), TypeTag::NUMBER);
    assert_eq!(classify_json(json!(-2.5)), TypeTag::NUMBER);
    assert_eq!(classify_json(json!("text")), TypeTag::STRING);
    assert_eq!(classify_json(json!([1, 2])), TypeTag::ARRAY);
    assert_eq!(classify_json(json!({"k": "v"})), TypeTag::OBJECT);
}

/// Test: JSON objects are plain, JSON arrays are not objects
#[test]
fn test_json_object_family() {
    let object = Value::from(json!({"nested": {"deep": []}}));
    assert!(is_plain_object(&object));
    assert!(is_any_object(&object));

    let array = Value::from(json!([{}]));
    assert!(is_array(&array));
    assert!(!is_any_object(&array));
}

/// Test: nested values keep their own tags
#[test]
fn test_nested_members() {
    let value = Value::from_json_str(r#"{"list": [1, "a", null], "empty": ""}"#).unwrap();
    let object = value.as_object().unwrap();

    let list = object.get("list").unwrap();
    assert!(is_array(&list));
    let empty = object.get("empty").unwrap();
    assert!(is_empty_string(&empty));
    assert!(!is_full_string(&empty));
    assert_eq!(object.get("missing"), None);
}

/// Test: JSON never produces NaN, so every JSON number passes is_number
#[test]
fn test_json_numbers_are_numbers() {
    for text in ["0", "-0", "1e308", "3.25"] {
        let value = Value::from_json_str(text).unwrap();
        assert!(is_number(&value), "{}", text);
        assert!(is_primitive(&value), "{}", text);
    }
}

/// Test: malformed JSON is an error, not a value
#[test]
fn test_malformed_json() {
    assert!(Value::from_json_str("{\"a\":").is_err());
    assert!(Value::from_json_str("undefined").is_err());
}
