//! Unit tests for is_type and TypeDescriptor

use js_value::{Intrinsic, JsObject, Value};
use type_guards::{is_type, matches_type, InvalidDescriptorError, TypeDescriptor, TypeTag};

fn lit(text: &str) -> Value {
    Value::parse_literal(text).unwrap_or_else(|e| panic!("{}: {}", text, e))
}

#[test]
fn test_builtin_table() {
    let cases = [
        ("1", "Number", true),
        ("NaN", "Number", true),
        ("\"a\"", "String", true),
        ("true", "Boolean", true),
        ("[]", "Array", true),
        ("[]", "Object", false),
        ("{}", "Object", true),
        ("null", "Object", false),
        ("undefined", "Object", false),
        ("() => {}", "Function", true),
        ("/a/", "RegExp", true),
        ("new Date()", "Date", true),
        ("new Date(\"bad\")", "Date", true),
        ("Symbol()", "Symbol", true),
        ("new Map()", "Map", true),
        ("new Map()", "Object", false),
        ("new Error()", "Error", true),
        ("Object.create(null)", "Object", true),
        ("new Number(1)", "Number", true),
        ("1", "String", false),
    ];
    for (value, ctor, expected) in cases {
        assert_eq!(
            is_type(&lit(value), &lit(ctor)),
            Ok(expected),
            "is_type({}, {})",
            value,
            ctor
        );
    }
}

#[test]
fn test_invalid_descriptors() {
    let payload = lit("{}");
    let bad = [
        ("\"Object\"", TypeTag::STRING),
        ("42", TypeTag::NUMBER),
        ("null", TypeTag::NULL),
        ("undefined", TypeTag::UNDEFINED),
        ("{}", TypeTag::OBJECT),
        ("[]", TypeTag::ARRAY),
    ];
    for (descriptor, found) in bad {
        assert_eq!(
            is_type(&payload, &lit(descriptor)),
            Err(InvalidDescriptorError::NotAFunction { found }),
            "descriptor {}",
            descriptor
        );
    }
}

#[test]
fn test_non_class_functions_rejected() {
    for descriptor in ["() => {}", "async function f() {}"] {
        assert!(matches!(
            is_type(&lit("{}"), &lit(descriptor)),
            Err(InvalidDescriptorError::NotAClass { .. })
        ));
    }
}

#[test]
fn test_plain_function_is_a_valid_descriptor() {
    let ctor = JsObject::function("Legacy");
    let instance = Value::Object(ctor.construct().unwrap());
    assert_eq!(is_type(&instance, &Value::Object(ctor)), Ok(true));
}

#[test]
fn test_subclassed_builtin() {
    let ctor = lit("class Registry extends Map {}");
    let instance = match &ctor {
        Value::Object(class) => Value::Object(class.construct().unwrap()),
        _ => unreachable!(),
    };
    assert_eq!(is_type(&instance, &ctor), Ok(true));
    assert_eq!(is_type(&instance, &lit("Map")), Ok(true));
}

#[test]
fn test_matches_type_from_intrinsic() {
    let descriptor = TypeDescriptor::from(Intrinsic::Promise);
    assert!(matches_type(&lit("Promise.resolve()"), &descriptor));
    assert!(!matches_type(&lit("{}"), &descriptor));
}

#[test]
fn test_function_borrowing_array_prototype() {
    // function F() {}; F.prototype = Array.prototype
    let ctor = JsObject::function("F");
    ctor.set_function_prototype(js_value::Prototype::Intrinsic(Intrinsic::Array));
    let descriptor = Value::Object(ctor);

    assert_eq!(TypeDescriptor::try_from(&descriptor).unwrap().name(), "F");
    assert_eq!(is_type(&lit("[]"), &descriptor), Ok(false));
    assert_eq!(is_type(&lit("[]"), &lit("Array")), Ok(true));
}
