//! Built-in constructors and their prototype objects.
//!
//! An [`Intrinsic`] names one of the engine-provided constructors. Objects
//! whose `[[Prototype]]` is `X.prototype` refer to it through
//! [`Prototype::Intrinsic`](crate::Prototype::Intrinsic), so two intrinsics
//! compare equal regardless of which realm created the object.

use std::fmt;

/// A built-in constructor such as `Object`, `Number` or `Date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `Object`
    Object,
    /// `Function`
    Function,
    /// `AsyncFunction` (not a global binding)
    AsyncFunction,
    /// `GeneratorFunction` (not a global binding)
    GeneratorFunction,
    /// `AsyncGeneratorFunction` (not a global binding)
    AsyncGeneratorFunction,
    /// `Array`
    Array,
    /// `Boolean`
    Boolean,
    /// `Number`
    Number,
    /// `String`
    String,
    /// `Symbol`
    Symbol,
    /// `BigInt`
    BigInt,
    /// `RegExp`
    RegExp,
    /// `Date`
    Date,
    /// `Map`
    Map,
    /// `Set`
    Set,
    /// `WeakMap`
    WeakMap,
    /// `WeakSet`
    WeakSet,
    /// `Error` and its native subclasses
    Error,
    /// `Promise`
    Promise,
}

impl Intrinsic {
    /// Every intrinsic, in declaration order
    pub const ALL: [Intrinsic; 19] = [
        Intrinsic::Object,
        Intrinsic::Function,
        Intrinsic::AsyncFunction,
        Intrinsic::GeneratorFunction,
        Intrinsic::AsyncGeneratorFunction,
        Intrinsic::Array,
        Intrinsic::Boolean,
        Intrinsic::Number,
        Intrinsic::String,
        Intrinsic::Symbol,
        Intrinsic::BigInt,
        Intrinsic::RegExp,
        Intrinsic::Date,
        Intrinsic::Map,
        Intrinsic::Set,
        Intrinsic::WeakMap,
        Intrinsic::WeakSet,
        Intrinsic::Error,
        Intrinsic::Promise,
    ];

    /// The constructor's `name` property
    pub fn name(&self) -> &'static str {
        match self {
            Intrinsic::Object => "Object",
            Intrinsic::Function => "Function",
            Intrinsic::AsyncFunction => "AsyncFunction",
            Intrinsic::GeneratorFunction => "GeneratorFunction",
            Intrinsic::AsyncGeneratorFunction => "AsyncGeneratorFunction",
            Intrinsic::Array => "Array",
            Intrinsic::Boolean => "Boolean",
            Intrinsic::Number => "Number",
            Intrinsic::String => "String",
            Intrinsic::Symbol => "Symbol",
            Intrinsic::BigInt => "BigInt",
            Intrinsic::RegExp => "RegExp",
            Intrinsic::Date => "Date",
            Intrinsic::Map => "Map",
            Intrinsic::Set => "Set",
            Intrinsic::WeakMap => "WeakMap",
            Intrinsic::WeakSet => "WeakSet",
            Intrinsic::Error => "Error",
            Intrinsic::Promise => "Promise",
        }
    }

    /// Look up an intrinsic by its constructor name (case-sensitive)
    ///
    /// ```
    /// use js_value::Intrinsic;
    ///
    /// assert_eq!(Intrinsic::from_name("Number"), Some(Intrinsic::Number));
    /// assert_eq!(Intrinsic::from_name("number"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Intrinsic> {
        Intrinsic::ALL.iter().copied().find(|i| i.name() == name)
    }
}

impl fmt::Display for Intrinsic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
