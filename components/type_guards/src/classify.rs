//! The classifier.
//!
//! Routes every value through the `Object.prototype.toString` tag
//! mechanism: `typeof` cannot tell null, arrays, dates and regular
//! expressions apart, while the internal class tag reports one canonical
//! answer however the value was constructed.

use std::borrow::Cow;

use js_value::{FunctionKind, JsObject, ObjectClass, Primitive, Value};
use tracing::trace;

use crate::tag::TypeTag;

/// Returns the canonical type tag of the payload
///
/// Total: every value, the absent-value markers included, gets a non-empty
/// tag. Boxed primitives share the tag of their primitive and NaN is a
/// `"number"`.
///
/// # Examples
///
/// ```
/// use js_value::{JsObject, Primitive, Value};
/// use type_guards::get_type;
///
/// assert_eq!(get_type(&Value::Undefined), "undefined");
/// assert_eq!(get_type(&Value::Null), "null");
/// assert_eq!(get_type(&Value::nan()), "number");
/// assert_eq!(get_type(&Value::Object(JsObject::array_from(vec![]))), "array");
/// assert_eq!(
///     get_type(&Value::Object(JsObject::boxed(Primitive::String("x".into())))),
///     "string"
/// );
/// ```
pub fn get_type(payload: &Value) -> TypeTag {
    let tag = TypeTag::from_class_name(&class_name(payload));
    trace!(%tag, "classified value");
    tag
}

/// `Object.prototype.toString.call(payload)`
///
/// ```
/// use js_value::Value;
/// use type_guards::object_to_string;
///
/// assert_eq!(object_to_string(&Value::Null), "[object Null]");
/// assert_eq!(object_to_string(&Value::string("s")), "[object String]");
/// ```
pub fn object_to_string(payload: &Value) -> String {
    format!("[object {}]", class_name(payload))
}

/// The `X` of `[object X]`, before lower-casing
fn class_name(payload: &Value) -> Cow<'static, str> {
    match payload {
        Value::Undefined => Cow::Borrowed("Undefined"),
        Value::Null => Cow::Borrowed("Null"),
        Value::Boolean(_) => Cow::Borrowed("Boolean"),
        Value::Number(_) => Cow::Borrowed("Number"),
        Value::String(_) => Cow::Borrowed("String"),
        Value::Symbol(_) => Cow::Borrowed("Symbol"),
        Value::BigInt(_) => Cow::Borrowed("BigInt"),
        Value::Object(obj) => match string_tag(obj) {
            Some(custom) => Cow::Owned(custom),
            None => Cow::Borrowed(builtin_tag(&obj.data().class)),
        },
    }
}

/// `Symbol.toStringTag`, own or inherited from a script prototype
///
/// An empty tag is ignored so the result stays non-empty.
fn string_tag(obj: &JsObject) -> Option<String> {
    obj.to_string_tag()
        .into_iter()
        .chain(obj.prototype_chain().iter().filter_map(JsObject::to_string_tag))
        .find(|tag| !tag.is_empty())
}

/// Tag derived from internal slots alone
fn builtin_tag(class: &ObjectClass) -> &'static str {
    match class {
        ObjectClass::Ordinary => "Object",
        ObjectClass::Array(_) => "Array",
        ObjectClass::Arguments(_) => "Arguments",
        ObjectClass::Function(func) => match func.kind {
            FunctionKind::Async => "AsyncFunction",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
            _ => "Function",
        },
        ObjectClass::RegExp(_) => "RegExp",
        ObjectClass::Date(_) => "Date",
        ObjectClass::Map(_) => "Map",
        ObjectClass::Set(_) => "Set",
        ObjectClass::WeakMap => "WeakMap",
        ObjectClass::WeakSet => "WeakSet",
        ObjectClass::Error(_) => "Error",
        ObjectClass::Promise(_) => "Promise",
        ObjectClass::Boxed(primitive) => match primitive {
            Primitive::Boolean(_) => "Boolean",
            Primitive::Number(_) => "Number",
            Primitive::String(_) => "String",
            Primitive::Symbol(_) => "Symbol",
            Primitive::BigInt(_) => "BigInt",
        },
    }
}
