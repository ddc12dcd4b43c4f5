//! Generic descriptor-based matching.

use js_value::{Prototype, Value};
use tracing::trace;

use crate::classify::get_type;
use crate::descriptor::TypeDescriptor;
use crate::error::MatchResult;

/// Does a generic check that the payload is of the given type
///
/// The payload matches when its tag equals the constructor's name, or when
/// the constructor is the payload's own constructor. NaN is therefore a
/// `Number`, while `null` is never an `Object`.
///
/// # Errors
///
/// Returns [`InvalidDescriptorError`](crate::InvalidDescriptorError) when
/// `descriptor` is not a function with its own `prototype`; no comparison
/// is attempted in that case.
///
/// # Examples
///
/// ```
/// use js_value::{Intrinsic, JsObject, Value};
/// use type_guards::is_type;
///
/// let number = Value::Object(JsObject::intrinsic_constructor(Intrinsic::Number));
/// assert_eq!(is_type(&Value::nan(), &number), Ok(true));
///
/// let object = Value::Object(JsObject::intrinsic_constructor(Intrinsic::Object));
/// assert_eq!(is_type(&Value::Null, &object), Ok(false));
///
/// assert!(is_type(&Value::number(1.0), &Value::string("Number")).is_err());
/// ```
pub fn is_type(payload: &Value, descriptor: &Value) -> MatchResult<bool> {
    let descriptor = TypeDescriptor::try_from(descriptor)?;
    Ok(matches_type(payload, &descriptor))
}

/// Match against an already validated descriptor
pub fn matches_type(payload: &Value, descriptor: &TypeDescriptor) -> bool {
    let tag = get_type(payload);
    if tag.as_str() == descriptor.name().to_lowercase() {
        trace!(%tag, descriptor = descriptor.name(), "matched by tag");
        return true;
    }

    // value.constructor === descriptor. A built-in prototype always leads back
    // to the built-in constructor, even when a script function borrowed it.
    match (descriptor, payload.prototype()) {
        (TypeDescriptor::Builtin(expected), Some(Prototype::Intrinsic(actual))) => {
            *expected == actual
        }
        (
            TypeDescriptor::Class {
                prototype: Prototype::Object(expected),
                ..
            },
            Some(Prototype::Object(actual)),
        ) => expected.ptr_eq(&actual),
        _ => false,
    }
}
