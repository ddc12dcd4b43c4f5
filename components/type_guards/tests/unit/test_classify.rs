//! Unit tests for get_type

use js_value::{Intrinsic, JsObject, Primitive, Value};
use pretty_assertions::assert_eq;
use type_guards::{get_type, object_to_string, TypeTag};

fn tag(text: &str) -> String {
    let value = Value::parse_literal(text).unwrap_or_else(|e| panic!("{}: {}", text, e));
    get_type(&value).into()
}

#[test]
fn test_tag_table() {
    let cases = [
        ("undefined", "undefined"),
        ("null", "null"),
        ("true", "boolean"),
        ("1", "number"),
        ("NaN", "number"),
        ("-Infinity", "number"),
        ("\"\"", "string"),
        ("Symbol()", "symbol"),
        ("10n", "bigint"),
        ("{}", "object"),
        ("[]", "array"),
        ("/x/", "regexp"),
        ("new Date()", "date"),
        ("new Date(\"nope\")", "date"),
        ("new Map()", "map"),
        ("new Set()", "set"),
        ("new WeakMap()", "weakmap"),
        ("new WeakSet()", "weakset"),
        ("new RangeError(\"r\")", "error"),
        ("Promise.resolve(1)", "promise"),
        ("() => {}", "function"),
        ("class A {}", "function"),
        ("async () => {}", "asyncfunction"),
        ("function* g() {}", "generatorfunction"),
        ("async function* g() {}", "asyncgeneratorfunction"),
        ("new String(\"s\")", "string"),
        ("new Number(3)", "number"),
        ("new Boolean(false)", "boolean"),
        ("Object.create(null)", "object"),
        ("new (class A {})()", "object"),
        ("new (class A extends Map {})()", "map"),
        ("Number", "function"),
    ];
    for (literal, expected) in cases {
        assert_eq!(tag(literal), expected, "tag of {}", literal);
    }
}

#[test]
fn test_boxed_symbol_and_bigint() {
    let symbol = Primitive::Symbol(js_value::SymbolValue::new(None));
    assert_eq!(get_type(&Value::Object(JsObject::boxed(symbol))), TypeTag::SYMBOL);
    let bigint = Primitive::BigInt(js_value::BigInt::from(5));
    assert_eq!(get_type(&Value::Object(JsObject::boxed(bigint))), TypeTag::BIGINT);
}

#[test]
fn test_typeof_disagrees_where_expected() {
    for text in ["null", "[]", "new Date()", "/re/", "new String(\"x\")"] {
        let value = Value::parse_literal(text).unwrap();
        assert_eq!(value.type_of(), "object");
        assert_ne!(get_type(&value), TypeTag::OBJECT, "{}", text);
    }
}

#[test]
fn test_cross_realm_style_intrinsics_classify_alike() {
    // Two independently created constructors describe the same intrinsic
    let a = JsObject::intrinsic_constructor(Intrinsic::Array).construct().unwrap();
    let b = JsObject::array_from(vec![]);
    assert_eq!(get_type(&Value::Object(a)), get_type(&Value::Object(b)));
}

#[test]
fn test_cyclic_graph_classifies() {
    let obj = JsObject::plain();
    obj.set_property("me", Value::Object(obj.clone()));
    let arr = JsObject::array_from(vec![]);
    arr.push(Value::Object(arr.clone()));
    assert_eq!(get_type(&Value::Object(obj)), TypeTag::OBJECT);
    assert_eq!(get_type(&Value::Object(arr)), TypeTag::ARRAY);
}

#[test]
fn test_object_to_string_forms() {
    assert_eq!(object_to_string(&Value::nan()), "[object Number]");
    assert_eq!(
        object_to_string(&Value::parse_literal("async () => {}").unwrap()),
        "[object AsyncFunction]"
    );
}
