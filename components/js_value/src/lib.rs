//! JavaScript value model.
//!
//! This crate provides the closed set of values the type guards classify:
//! primitives, the two absent-value markers and objects with their internal
//! slots and prototype links. Untyped data enters through the JSON and
//! literal boundaries.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`JsObject`] - Shared object handle with identity
//! - [`ObjectClass`] - Internal slots (array, date, function, ...)
//! - [`Prototype`] - The `[[Prototype]]` link
//! - [`Intrinsic`] - Built-in constructors
//! - [`ValueError`] - Construction errors
//!
//! # Examples
//!
//! ```
//! use js_value::{JsObject, Value};
//!
//! let point = JsObject::class("Point");
//! let instance = Value::Object(point.construct().unwrap());
//! assert_eq!(instance.type_of(), "object");
//!
//! let parsed = Value::parse_literal("new Date(0)").unwrap();
//! assert_eq!(parsed.to_string(), "1970-01-01T00:00:00.000Z");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod intrinsic;
mod json;
mod literal;
mod object;
mod symbol;
mod value;

pub use error::{ValueError, ValueResult};
pub use intrinsic::Intrinsic;
pub use object::{
    DateData, ErrorData, ErrorKind, FunctionData, FunctionKind, JsObject, ObjectClass, ObjectData,
    PromiseState, Prototype, RegExpData,
};
pub use symbol::SymbolValue;
pub use value::{Primitive, Value};

// Re-exported so callers can build bigint values without a direct dependency
pub use num_bigint::BigInt;
