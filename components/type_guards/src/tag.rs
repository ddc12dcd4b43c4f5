//! Canonical type tags.

use std::borrow::Cow;
use std::fmt;

/// Canonical lowercase name of a value's runtime type
///
/// Produced by [`get_type`](crate::get_type); never empty.
///
/// ```
/// use type_guards::TypeTag;
///
/// assert_eq!(TypeTag::REGEXP, "regexp");
/// assert_eq!(TypeTag::from_class_name("AsyncFunction").as_str(), "asyncfunction");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag(Cow<'static, str>);

impl TypeTag {
    /// `undefined`
    pub const UNDEFINED: TypeTag = TypeTag(Cow::Borrowed("undefined"));
    /// `null`
    pub const NULL: TypeTag = TypeTag(Cow::Borrowed("null"));
    /// Booleans and `new Boolean(..)`
    pub const BOOLEAN: TypeTag = TypeTag(Cow::Borrowed("boolean"));
    /// Numbers (NaN included) and `new Number(..)`
    pub const NUMBER: TypeTag = TypeTag(Cow::Borrowed("number"));
    /// Strings and `new String(..)`
    pub const STRING: TypeTag = TypeTag(Cow::Borrowed("string"));
    /// Symbols
    pub const SYMBOL: TypeTag = TypeTag(Cow::Borrowed("symbol"));
    /// BigInts
    pub const BIGINT: TypeTag = TypeTag(Cow::Borrowed("bigint"));
    /// Ordinary objects, class instances included
    pub const OBJECT: TypeTag = TypeTag(Cow::Borrowed("object"));
    /// Arrays
    pub const ARRAY: TypeTag = TypeTag(Cow::Borrowed("array"));
    /// `arguments` objects
    pub const ARGUMENTS: TypeTag = TypeTag(Cow::Borrowed("arguments"));
    /// Plain, arrow, class, bound and native functions
    pub const FUNCTION: TypeTag = TypeTag(Cow::Borrowed("function"));
    /// Async functions
    pub const ASYNC_FUNCTION: TypeTag = TypeTag(Cow::Borrowed("asyncfunction"));
    /// Generator functions
    pub const GENERATOR_FUNCTION: TypeTag = TypeTag(Cow::Borrowed("generatorfunction"));
    /// Async generator functions
    pub const ASYNC_GENERATOR_FUNCTION: TypeTag =
        TypeTag(Cow::Borrowed("asyncgeneratorfunction"));
    /// Regular expressions
    pub const REGEXP: TypeTag = TypeTag(Cow::Borrowed("regexp"));
    /// Dates, valid or not
    pub const DATE: TypeTag = TypeTag(Cow::Borrowed("date"));
    /// Maps
    pub const MAP: TypeTag = TypeTag(Cow::Borrowed("map"));
    /// Sets
    pub const SET: TypeTag = TypeTag(Cow::Borrowed("set"));
    /// WeakMaps
    pub const WEAKMAP: TypeTag = TypeTag(Cow::Borrowed("weakmap"));
    /// WeakSets
    pub const WEAKSET: TypeTag = TypeTag(Cow::Borrowed("weakset"));
    /// Native errors of every kind
    pub const ERROR: TypeTag = TypeTag(Cow::Borrowed("error"));
    /// Promises
    pub const PROMISE: TypeTag = TypeTag(Cow::Borrowed("promise"));

    /// Build a tag from the `X` of an `[object X]` string
    pub fn from_class_name(name: &str) -> TypeTag {
        TypeTag(Cow::Owned(name.to_lowercase()))
    }

    /// The tag text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TypeTag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TypeTag {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TypeTag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<TypeTag> for String {
    fn from(tag: TypeTag) -> String {
        tag.0.into_owned()
    }
}
