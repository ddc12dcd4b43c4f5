//! Derived predicates.
//!
//! Each predicate pins the classifier to one target tag, adding at most one
//! extra condition (NaN, empty string, invalid date, prototype).

use js_value::{Intrinsic, Primitive, Prototype, Value};

use crate::classify::get_type;
use crate::tag::TypeTag;

/// Returns whether the payload is `undefined`
pub fn is_undefined(payload: &Value) -> bool {
    matches!(payload, Value::Undefined)
}

/// Returns whether the payload is `null`
pub fn is_null(payload: &Value) -> bool {
    matches!(payload, Value::Null)
}

/// Returns whether the payload is a plain object
///
/// Plain means tagged `"object"` with `Object.prototype` (of any realm) or
/// `null` as the immediate prototype. Class instances and objects created
/// with another prototype are excluded.
///
/// ```
/// use js_value::{JsObject, Value};
/// use type_guards::is_plain_object;
///
/// assert!(is_plain_object(&Value::Object(JsObject::plain())));
/// assert!(is_plain_object(&Value::Object(JsObject::null_prototype())));
///
/// let instance = JsObject::class("Point").construct().unwrap();
/// assert!(!is_plain_object(&Value::Object(instance)));
/// ```
pub fn is_plain_object(payload: &Value) -> bool {
    get_type(payload) == TypeTag::OBJECT
        && matches!(
            payload.prototype(),
            Some(Prototype::Null) | Some(Prototype::Intrinsic(Intrinsic::Object))
        )
}

/// Alias of [`is_plain_object`]
pub fn is_object(payload: &Value) -> bool {
    is_plain_object(payload)
}

/// Returns whether the payload is any kind of object tagged `"object"`,
/// class instances and objects with custom prototypes included
pub fn is_any_object(payload: &Value) -> bool {
    get_type(payload) == TypeTag::OBJECT
}

/// Returns whether the payload is an object that the caller treats as `T`
///
/// `T` only documents the expected shape at the call site; at runtime this
/// is exactly [`is_any_object`]. See [`object_like`](crate::object_like)
/// for the narrowing form.
pub fn is_object_like<T: ?Sized>(payload: &Value) -> bool {
    is_any_object(payload)
}

/// Returns whether the payload is callable
///
/// Async, generator, class and bound functions count as functions even
/// though their tags differ.
pub fn is_function(payload: &Value) -> bool {
    matches!(payload, Value::Object(obj) if obj.is_callable())
}

/// Returns whether the payload is an array
pub fn is_array(payload: &Value) -> bool {
    get_type(payload) == TypeTag::ARRAY
}

/// Returns whether the payload is a string, boxed strings included
pub fn is_string(payload: &Value) -> bool {
    get_type(payload) == TypeTag::STRING
}

/// Returns whether the payload is a string, BUT returns false for `""`
///
/// Objects that only claim the `"string"` tag through `Symbol.toStringTag`
/// are never `""`, so they count as full.
pub fn is_full_string(payload: &Value) -> bool {
    is_string(payload) && string_len(payload) != Some(0)
}

/// Returns whether the payload is `""`
pub fn is_empty_string(payload: &Value) -> bool {
    is_string(payload) && string_len(payload) == Some(0)
}

/// Returns whether the payload is a number
///
/// This will return false for NaN, unlike [`get_type`] and
/// [`is_type`](crate::is_type) which treat NaN as a number.
pub fn is_number(payload: &Value) -> bool {
    get_type(payload) == TypeTag::NUMBER && number_value(payload).is_some_and(|n| !n.is_nan())
}

/// Returns whether the payload is a boolean
pub fn is_boolean(payload: &Value) -> bool {
    get_type(payload) == TypeTag::BOOLEAN
}

/// Returns whether the payload is a regular expression
pub fn is_reg_exp(payload: &Value) -> bool {
    get_type(payload) == TypeTag::REGEXP
}

/// Returns whether the payload is a date, and that the date is valid
pub fn is_date(payload: &Value) -> bool {
    get_type(payload) == TypeTag::DATE
        && payload
            .as_object()
            .and_then(|obj| obj.date_value())
            .is_some_and(|time| !time.is_nan())
}

/// Returns whether the payload is a symbol
pub fn is_symbol(payload: &Value) -> bool {
    get_type(payload) == TypeTag::SYMBOL
}

/// Returns whether the payload is a primitive type
/// (boolean, null, undefined, number, string or symbol), judged by tag
pub fn is_primitive(payload: &Value) -> bool {
    let tag = get_type(payload);
    [
        TypeTag::UNDEFINED,
        TypeTag::NULL,
        TypeTag::NUMBER,
        TypeTag::STRING,
        TypeTag::BOOLEAN,
        TypeTag::SYMBOL,
    ]
    .contains(&tag)
}

/// Length in UTF-16 code units of a primitive or boxed string
fn string_len(payload: &Value) -> Option<usize> {
    match payload {
        Value::String(s) => Some(s.encode_utf16().count()),
        Value::Object(obj) => match obj.boxed_primitive() {
            Some(Primitive::String(s)) => Some(s.encode_utf16().count()),
            _ => None,
        },
        _ => None,
    }
}

/// The numeric value of a primitive or boxed number
pub(crate) fn number_value(payload: &Value) -> Option<f64> {
    match payload {
        Value::Number(n) => Some(*n),
        Value::Object(obj) => match obj.boxed_primitive() {
            Some(Primitive::Number(n)) => Some(n),
            _ => None,
        },
        _ => None,
    }
}
