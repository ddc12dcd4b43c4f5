//! Narrowing forms of the predicates.
//!
//! Each `as_*` function returns `Some` exactly when the matching `is_*`
//! predicate returns true, handing back the payload at its narrowed type.

use std::borrow::Cow;
use std::marker::PhantomData;
use std::ops::Deref;

use js_value::{JsObject, Primitive, SymbolValue, Value};

use crate::classify::object_to_string;
use crate::predicates::{
    is_any_object, is_array, is_boolean, is_date, is_function, is_number, is_plain_object,
    is_reg_exp, is_string, is_symbol, number_value,
};

/// The payload as a string, if [`is_string`]
pub fn as_string(payload: &Value) -> Option<Cow<'_, str>> {
    if !is_string(payload) {
        return None;
    }
    match payload {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        // A tagged object stringifies to its `[object String]` form
        Value::Object(obj) => match obj.boxed_primitive() {
            Some(Primitive::String(s)) => Some(Cow::Owned(s)),
            _ => Some(Cow::Owned(object_to_string(payload))),
        },
        _ => None,
    }
}

/// The payload as a number, if [`is_number`] (never NaN)
pub fn as_number(payload: &Value) -> Option<f64> {
    if is_number(payload) {
        number_value(payload)
    } else {
        None
    }
}

/// The payload as a boolean, if [`is_boolean`]
pub fn as_boolean(payload: &Value) -> Option<bool> {
    if !is_boolean(payload) {
        return None;
    }
    match payload {
        Value::Boolean(b) => Some(*b),
        Value::Object(obj) => match obj.boxed_primitive() {
            Some(Primitive::Boolean(b)) => Some(b),
            _ => None,
        },
        _ => None,
    }
}

/// The payload as a symbol, if [`is_symbol`]
pub fn as_symbol(payload: &Value) -> Option<SymbolValue> {
    if !is_symbol(payload) {
        return None;
    }
    match payload {
        Value::Symbol(symbol) => Some(symbol.clone()),
        Value::Object(obj) => match obj.boxed_primitive() {
            Some(Primitive::Symbol(symbol)) => Some(symbol),
            _ => None,
        },
        _ => None,
    }
}

fn object_if(payload: &Value, predicate: fn(&Value) -> bool) -> Option<&JsObject> {
    payload.as_object().filter(|_| predicate(payload))
}

/// The payload as an object, if [`is_plain_object`]
pub fn as_plain_object(payload: &Value) -> Option<&JsObject> {
    object_if(payload, is_plain_object)
}

/// The payload as an object, if [`is_any_object`]
pub fn as_any_object(payload: &Value) -> Option<&JsObject> {
    object_if(payload, is_any_object)
}

/// The payload as an array object, if [`is_array`]
pub fn as_array(payload: &Value) -> Option<&JsObject> {
    object_if(payload, is_array)
}

/// The payload as a callable object, if [`is_function`]
pub fn as_function(payload: &Value) -> Option<&JsObject> {
    object_if(payload, is_function)
}

/// The payload as a valid date object, if [`is_date`]
pub fn as_date(payload: &Value) -> Option<&JsObject> {
    object_if(payload, is_date)
}

/// The payload as a regular expression object, if [`is_reg_exp`]
pub fn as_reg_exp(payload: &Value) -> Option<&JsObject> {
    object_if(payload, is_reg_exp)
}

/// An object the caller has asserted to have shape `T`
///
/// The assertion is not checked: only [`is_any_object`] runs. Dereferences
/// to the underlying [`JsObject`].
#[derive(Debug)]
pub struct ObjectLike<'a, T> {
    object: &'a JsObject,
    _shape: PhantomData<fn() -> T>,
}

impl<'a, T> ObjectLike<'a, T> {
    /// The underlying object
    pub fn object(&self) -> &'a JsObject {
        self.object
    }
}

impl<T> Clone for ObjectLike<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ObjectLike<'_, T> {}

impl<T> Deref for ObjectLike<'_, T> {
    type Target = JsObject;

    fn deref(&self) -> &JsObject {
        self.object
    }
}

/// Narrow the payload to an object of caller-asserted shape `T`
///
/// ```
/// use js_value::{JsObject, Value};
/// use type_guards::object_like;
///
/// struct User;
///
/// let value = Value::Object(JsObject::plain());
/// let user = object_like::<User>(&value).expect("any object passes");
/// assert!(user.get("id").is_none());
/// ```
pub fn object_like<T>(payload: &Value) -> Option<ObjectLike<'_, T>> {
    as_any_object(payload).map(|object| ObjectLike {
        object,
        _shape: PhantomData,
    })
}
