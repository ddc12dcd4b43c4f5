//! Runtime type classification for JavaScript values.
//!
//! Two core operations and a family of predicates built on them:
//!
//! - [`get_type`] - canonical lowercase tag for any value
//! - [`is_type`] - match a value against a constructor, rejecting invalid
//!   constructors with [`InvalidDescriptorError`]
//! - `is_*` predicates and their narrowing `as_*` forms
//!
//! Every function is pure; nothing is cached or mutated.
//!
//! # Example
//!
//! ```
//! use js_value::{Intrinsic, JsObject, Value};
//! use type_guards::{get_type, is_number, is_plain_object, is_type};
//!
//! let nan = Value::nan();
//! assert_eq!(get_type(&nan), "number");
//! assert!(!is_number(&nan));
//!
//! let number = Value::Object(JsObject::intrinsic_constructor(Intrinsic::Number));
//! assert_eq!(is_type(&nan, &number), Ok(true));
//!
//! let point = JsObject::class("Point");
//! let instance = Value::Object(point.construct().unwrap());
//! assert!(!is_plain_object(&instance));
//! assert_eq!(is_type(&instance, &Value::Object(point)), Ok(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod classify;
pub mod descriptor;
pub mod error;
pub mod matcher;
pub mod narrow;
pub mod predicates;
pub mod tag;

// Re-export main types for convenience
pub use classify::{get_type, object_to_string};
pub use descriptor::TypeDescriptor;
pub use error::{InvalidDescriptorError, MatchResult};
pub use matcher::{is_type, matches_type};
pub use narrow::{
    as_any_object, as_array, as_boolean, as_date, as_function, as_number, as_plain_object,
    as_reg_exp, as_string, as_symbol, object_like, ObjectLike,
};
pub use predicates::{
    is_any_object, is_array, is_boolean, is_date, is_empty_string, is_full_string, is_function,
    is_null, is_number, is_object, is_object_like, is_plain_object, is_primitive, is_reg_exp,
    is_string, is_symbol, is_undefined,
};
pub use tag::TypeTag;
