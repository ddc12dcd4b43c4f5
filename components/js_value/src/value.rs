//! JavaScript value representation.
//!
//! This module provides the `Value` enum covering every value a script can
//! observe: the two absent-value markers, the primitives and objects.
//! Objects are shared handles ([`JsObject`]) with reference identity.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

use crate::intrinsic::Intrinsic;
use crate::object::{JsObject, Prototype};
use crate::symbol::SymbolValue;

/// Represents any JavaScript value.
///
/// # Examples
///
/// ```
/// use js_value::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::number(42.0);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(number.type_of(), "number");
/// ```
#[derive(Debug, Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// IEEE 754 double-precision number, NaN and infinities included
    Number(f64),
    /// JavaScript string value
    String(String),
    /// Unique symbol
    Symbol(SymbolValue),
    /// Arbitrary precision integer
    BigInt(BigInt),
    /// Any object: plain, array, function, date, boxed primitive, ...
    Object(JsObject),
}

/// A primitive that can be wrapped by `new Boolean(..)`, `new Number(..)`,
/// `new String(..)` or `Object(symbol)` / `Object(bigint)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Boxed boolean
    Boolean(bool),
    /// Boxed number
    Number(f64),
    /// Boxed string
    String(String),
    /// Boxed symbol
    Symbol(SymbolValue),
    /// Boxed bigint
    BigInt(BigInt),
}

impl Primitive {
    /// The built-in constructor whose prototype the wrapper inherits from
    pub fn intrinsic(&self) -> Intrinsic {
        match self {
            Primitive::Boolean(_) => Intrinsic::Boolean,
            Primitive::Number(_) => Intrinsic::Number,
            Primitive::String(_) => Intrinsic::String,
            Primitive::Symbol(_) => Intrinsic::Symbol,
            Primitive::BigInt(_) => Intrinsic::BigInt,
        }
    }

    /// Unwrap into the primitive value (`valueOf`)
    pub fn to_value(&self) -> Value {
        match self {
            Primitive::Boolean(b) => Value::Boolean(*b),
            Primitive::Number(n) => Value::Number(*n),
            Primitive::String(s) => Value::String(s.clone()),
            Primitive::Symbol(s) => Value::Symbol(s.clone()),
            Primitive::BigInt(n) => Value::BigInt(n.clone()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl Value {
    /// Create a number value
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// The NaN sentinel
    pub fn nan() -> Self {
        Value::Number(f64::NAN)
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create a boolean value
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Create a fresh unique symbol
    pub fn symbol(description: Option<&str>) -> Self {
        Value::Symbol(SymbolValue::new(description.map(str::to_string)))
    }

    /// Create a bigint value
    pub fn bigint(n: impl Into<BigInt>) -> Self {
        Value::BigInt(n.into())
    }

    /// Returns the object handle if this value is an object
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// The value's `[[Prototype]]`, as `Object.getPrototypeOf(Object(v))`
    /// would report it.
    ///
    /// Primitives report the prototype of their wrapper constructor.
    /// `undefined` and `null` have none.
    pub fn prototype(&self) -> Option<Prototype> {
        match self {
            Value::Undefined | Value::Null => None,
            Value::Boolean(_) => Some(Prototype::Intrinsic(Intrinsic::Boolean)),
            Value::Number(_) => Some(Prototype::Intrinsic(Intrinsic::Number)),
            Value::String(_) => Some(Prototype::Intrinsic(Intrinsic::String)),
            Value::Symbol(_) => Some(Prototype::Intrinsic(Intrinsic::Symbol)),
            Value::BigInt(_) => Some(Prototype::Intrinsic(Intrinsic::BigInt)),
            Value::Object(obj) => Some(obj.prototype()),
        }
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::nan().is_truthy());
    /// assert!(!Value::string("").is_truthy());
    /// assert!(Value::string("0").is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Number(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(),
            Value::Object(_) => true, // All objects are truthy
        }
    }

    /// Returns the JavaScript `typeof` result for this value.
    ///
    /// This is the coarse native operator: `null`, arrays, dates and boxed
    /// primitives all report `"object"`.
    ///
    /// ```
    /// use js_value::{JsObject, Value};
    ///
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Object(JsObject::array_from(vec![])).type_of(), "object");
    /// assert_eq!(Value::Object(JsObject::arrow_function()).type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Object(obj) if obj.is_callable() => "function",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<JsObject> for Value {
    fn from(obj: JsObject) -> Self {
        Value::Object(obj)
    }
}

/// Formats a number the way `Number.prototype.toString` does for the
/// common cases.
pub(crate) fn format_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        write!(f, "NaN")
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            write!(f, "Infinity")
        } else {
            write!(f, "-Infinity")
        }
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        // Integer-valued doubles display without decimal point
        write!(f, "{}", n as i64)
    } else {
        write!(f, "{}", n)
    }
}

/// Implementation of Display following JavaScript's `String()` conversion
/// for primitives. Objects defer to [`JsObject`]'s formatting.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => format_number(*n, f),
            Value::String(s) => write!(f, "{}", s),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::Object(obj) => write!(f, "{}", obj),
        }
    }
}
