//! Unit tests for the Value enum

use js_value::{JsObject, Primitive, Value};

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_undefined() {
        let val = Value::Undefined;
        assert!(matches!(val, Value::Undefined));
    }

    #[test]
    fn test_value_null() {
        let val = Value::Null;
        assert!(matches!(val, Value::Null));
    }

    #[test]
    fn test_value_nan() {
        assert!(matches!(Value::nan(), Value::Number(n) if n.is_nan()));
    }

    #[test]
    fn test_value_from_conversions() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(2.5), Value::Number(2.5));
        assert_eq!(Value::from("s"), Value::String("s".to_string()));
    }

    #[test]
    fn test_symbols_unique() {
        assert_ne!(Value::symbol(Some("k")), Value::symbol(Some("k")));
    }
}

#[cfg(test)]
mod value_type_of_tests {
    use super::*;

    #[test]
    fn test_type_of_conflates_objects() {
        assert_eq!(Value::Null.type_of(), "object");
        assert_eq!(Value::Object(JsObject::plain()).type_of(), "object");
        assert_eq!(Value::Object(JsObject::date_now()).type_of(), "object");
        assert_eq!(
            Value::Object(JsObject::boxed(Primitive::String("x".into()))).type_of(),
            "object"
        );
    }

    #[test]
    fn test_type_of_primitives() {
        assert_eq!(Value::Undefined.type_of(), "undefined");
        assert_eq!(Value::nan().type_of(), "number");
        assert_eq!(Value::bigint(1).type_of(), "bigint");
        assert_eq!(Value::symbol(None).type_of(), "symbol");
    }

    #[test]
    fn test_type_of_callables() {
        assert_eq!(Value::Object(JsObject::class("A")).type_of(), "function");
        assert_eq!(Value::Object(JsObject::async_function("f")).type_of(), "function");
    }
}

#[cfg(test)]
mod value_display_tests {
    use super::*;

    #[test]
    fn test_display_numbers() {
        assert_eq!(Value::nan().to_string(), "NaN");
        assert_eq!(Value::number(3.5).to_string(), "3.5");
        assert_eq!(Value::number(-0.0).to_string(), "0");
    }

    #[test]
    fn test_display_objects() {
        assert_eq!(Value::Object(JsObject::plain()).to_string(), "[object Object]");
        assert_eq!(Value::Object(JsObject::map()).to_string(), "[object Map]");
        let arr = JsObject::array_from(vec![Value::number(1.0), Value::Null, Value::string("a")]);
        assert_eq!(Value::Object(arr).to_string(), "1,,a");
    }

    #[test]
    fn test_display_boxed_matches_primitive() {
        let boxed = JsObject::boxed(Primitive::Number(5.0));
        assert_eq!(Value::Object(boxed).to_string(), "5");
    }
}
