//! Unit tests for the derived predicates

use js_value::{JsObject, Value};
use type_guards::*;

fn lit(text: &str) -> Value {
    Value::parse_literal(text).unwrap_or_else(|e| panic!("{}: {}", text, e))
}

#[test]
fn test_object_family() {
    let plain = lit("{\"a\": 1}");
    let orphan = lit("Object.create(null)");
    let instance = lit("new (class Point {})()");
    let inherited = lit("Object.create({})");
    let date = lit("new Date()");

    assert!(is_plain_object(&plain));
    assert!(is_plain_object(&orphan));
    assert!(!is_plain_object(&instance));
    assert!(!is_plain_object(&inherited));
    assert!(!is_plain_object(&date));

    assert!(is_any_object(&plain));
    assert!(is_any_object(&instance));
    assert!(is_any_object(&inherited));
    assert!(!is_any_object(&date));

    assert!(is_object_like::<()>(&instance));
    assert!(!is_object_like::<()>(&Value::Null));
}

#[test]
fn test_string_family() {
    assert!(is_string(&lit("\"\"")));
    assert!(is_full_string(&lit("\"x\"")));
    assert!(!is_full_string(&lit("\"\"")));
    assert!(is_empty_string(&lit("\"\"")));
    assert!(!is_empty_string(&lit("\"x\"")));
    assert!(!is_string(&lit("Symbol(\"x\")")));
    assert!(is_full_string(&lit("new String(\"boxed\")")));
}

#[test]
fn test_number_family() {
    assert!(is_number(&lit("0")));
    assert!(is_number(&lit("-Infinity")));
    assert!(!is_number(&lit("NaN")));
    assert!(!is_number(&lit("new Number(NaN)")));
    assert!(!is_number(&lit("\"1\"")));
}

#[test]
fn test_dates_and_regexps() {
    assert!(is_date(&lit("new Date(0)")));
    assert!(!is_date(&lit("new Date(\"invalid\")")));
    assert!(is_reg_exp(&lit("/a/g")));
    assert!(!is_reg_exp(&lit("\"/a/g\"")));
}

#[test]
fn test_primitive_set() {
    for text in ["undefined", "null", "1", "NaN", "\"s\"", "false", "Symbol()"] {
        assert!(is_primitive(&lit(text)), "{}", text);
    }
    for text in ["{}", "[]", "() => {}", "1n", "new Date()"] {
        assert!(!is_primitive(&lit(text)), "{}", text);
    }
}

#[test]
fn test_narrowing_agrees_with_predicates() {
    let samples = [
        "undefined", "null", "\"\"", "\"s\"", "1", "NaN", "true", "{}", "[]", "/x/",
        "new Date()", "new Date(\"bad\")", "() => {}", "Symbol()", "new (class A {})()",
    ];
    for text in samples {
        let value = lit(text);
        assert_eq!(as_string(&value).is_some(), is_string(&value), "{}", text);
        assert_eq!(as_number(&value).is_some(), is_number(&value), "{}", text);
        assert_eq!(as_boolean(&value).is_some(), is_boolean(&value), "{}", text);
        assert_eq!(as_symbol(&value).is_some(), is_symbol(&value), "{}", text);
        assert_eq!(as_array(&value).is_some(), is_array(&value), "{}", text);
        assert_eq!(as_date(&value).is_some(), is_date(&value), "{}", text);
        assert_eq!(as_reg_exp(&value).is_some(), is_reg_exp(&value), "{}", text);
        assert_eq!(as_function(&value).is_some(), is_function(&value), "{}", text);
        assert_eq!(as_plain_object(&value).is_some(), is_plain_object(&value), "{}", text);
        assert_eq!(as_any_object(&value).is_some(), is_any_object(&value), "{}", text);
    }
}

#[test]
fn test_object_like_exposes_object() {
    struct Config;
    let obj = JsObject::plain();
    obj.set_property("port", Value::number(8080.0));
    let value = Value::Object(obj);
    let config = object_like::<Config>(&value).unwrap();
    assert_eq!(config.get("port"), Some(Value::number(8080.0)));
}
