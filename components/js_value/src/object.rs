//! Object representation.
//!
//! Every non-primitive value is a [`JsObject`]: a shared handle to
//! [`ObjectData`], compared by identity. The internal slots that decide how
//! an object is classified live in [`ObjectClass`]; the `[[Prototype]]` link
//! lives in [`Prototype`].

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use regex::{Regex, RegexBuilder};

use crate::error::{ValueError, ValueResult};
use crate::intrinsic::Intrinsic;
use crate::value::{Primitive, Value};

/// Largest absolute time value a Date can hold (ECMA-262 TimeClip)
const MAX_TIME_VALUE: f64 = 8.64e15;

/// The `[[Prototype]]` of an object
#[derive(Debug, Clone)]
pub enum Prototype {
    /// `Object.create(null)` and friends
    Null,
    /// `X.prototype` of a built-in constructor
    Intrinsic(Intrinsic),
    /// A script-defined prototype object (e.g. `Foo.prototype` of a class)
    Object(JsObject),
}

impl PartialEq for Prototype {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Prototype::Null, Prototype::Null) => true,
            (Prototype::Intrinsic(a), Prototype::Intrinsic(b)) => a == b,
            (Prototype::Object(a), Prototype::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

/// How a function was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `function f() {}`
    Normal,
    /// `() => {}`
    Arrow,
    /// `{ m() {} }`
    Method,
    /// `class C {}`
    Class,
    /// `async function f() {}` or `async () => {}`
    Async,
    /// `function* g() {}`
    Generator,
    /// `async function* g() {}`
    AsyncGenerator,
    /// `f.bind(x)`
    Bound,
    /// Engine-provided constructor such as `Number`
    Native,
}

impl FunctionKind {
    /// Constructor whose prototype functions of this kind inherit from
    pub fn intrinsic(&self) -> Intrinsic {
        match self {
            FunctionKind::Async => Intrinsic::AsyncFunction,
            FunctionKind::Generator => Intrinsic::GeneratorFunction,
            FunctionKind::AsyncGenerator => Intrinsic::AsyncGeneratorFunction,
            _ => Intrinsic::Function,
        }
    }
}

/// Internal function data
#[derive(Debug, Clone)]
pub struct FunctionData {
    /// The function's `name` property
    pub name: String,
    /// Declaration form
    pub kind: FunctionKind,
    /// Own `prototype` property; `None` for arrows, methods and async functions
    pub prototype: Option<Prototype>,
}

impl FunctionData {
    /// Whether `new` may be applied to this function
    pub fn is_constructor(&self) -> bool {
        self.prototype.is_some()
            && matches!(
                self.kind,
                FunctionKind::Normal | FunctionKind::Class | FunctionKind::Native
            )
    }

    fn display_name(&self) -> String {
        if self.name.is_empty() {
            "anonymous".to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Internal regular expression data
#[derive(Debug, Clone)]
pub struct RegExpData {
    /// Pattern source as written
    pub source: String,
    /// Flags as written, validated
    pub flags: String,
    /// Compiled matcher
    pub regex: Regex,
}

/// Internal date data
#[derive(Debug, Clone, Copy)]
pub struct DateData {
    /// Milliseconds since the Unix epoch; NaN marks an invalid date
    pub time_value: f64,
}

impl DateData {
    /// Whether the time value is not the invalid-date sentinel
    pub fn is_valid(&self) -> bool {
        !self.time_value.is_nan()
    }
}

/// The kind of a native error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// TypeError
    TypeError,
    /// ReferenceError
    ReferenceError,
    /// SyntaxError
    SyntaxError,
    /// RangeError
    RangeError,
    /// URIError
    URIError,
    /// EvalError
    EvalError,
    /// AggregateError
    AggregateError,
}

impl ErrorKind {
    /// Constructor name of this error kind
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::URIError => "URIError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::AggregateError => "AggregateError",
        }
    }

    /// Look up an error kind by constructor name
    pub fn from_name(name: &str) -> Option<ErrorKind> {
        [
            ErrorKind::Error,
            ErrorKind::TypeError,
            ErrorKind::ReferenceError,
            ErrorKind::SyntaxError,
            ErrorKind::RangeError,
            ErrorKind::URIError,
            ErrorKind::EvalError,
            ErrorKind::AggregateError,
        ]
        .into_iter()
        .find(|kind| kind.name() == name)
    }
}

/// Internal error data
#[derive(Debug, Clone)]
pub struct ErrorData {
    /// Which native error constructor created it
    pub kind: ErrorKind,
    /// The `message` property
    pub message: String,
}

/// Settlement state of a promise
#[derive(Debug, Clone)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Resolved with a value
    Fulfilled(Value),
    /// Rejected with a reason
    Rejected(Value),
}

/// Internal slots that identify what kind of object this is
#[derive(Debug, Clone)]
pub enum ObjectClass {
    /// Ordinary object with no special slots
    Ordinary,
    /// Array exotic object
    Array(Vec<Value>),
    /// Arguments exotic object
    Arguments(Vec<Value>),
    /// Callable object
    Function(FunctionData),
    /// Regular expression
    RegExp(RegExpData),
    /// Date
    Date(DateData),
    /// Map entries in insertion order
    Map(Vec<(Value, Value)>),
    /// Set values in insertion order
    Set(Vec<Value>),
    /// WeakMap (entries are not observable)
    WeakMap,
    /// WeakSet (entries are not observable)
    WeakSet,
    /// Native error
    Error(ErrorData),
    /// Promise
    Promise(PromiseState),
    /// Wrapper object around a primitive
    Boxed(Primitive),
}

/// Internal object data
#[derive(Debug, Clone)]
pub struct ObjectData {
    /// Internal slots
    pub class: ObjectClass,
    /// The `[[Prototype]]` link
    pub prototype: Prototype,
    /// String-keyed own properties
    pub properties: HashMap<String, Value>,
    /// Own `Symbol.toStringTag` string, if set
    pub to_string_tag: Option<String>,
}

/// Shared handle to a JavaScript object
///
/// Cloning the handle does not copy the object; both clones observe the same
/// data and compare equal under [`JsObject::ptr_eq`].
#[derive(Clone)]
pub struct JsObject {
    inner: Rc<RefCell<ObjectData>>,
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Shallow on purpose: objects may reference themselves.
        write!(f, "JsObject({:p})", Rc::as_ptr(&self.inner))
    }
}

impl JsObject {
    /// Create an object from its internal slots and prototype
    pub fn new(class: ObjectClass, prototype: Prototype) -> Self {
        JsObject {
            inner: Rc::new(RefCell::new(ObjectData {
                class,
                prototype,
                properties: HashMap::new(),
                to_string_tag: None,
            })),
        }
    }

    /// `{}`
    pub fn plain() -> Self {
        JsObject::new(ObjectClass::Ordinary, Prototype::Intrinsic(Intrinsic::Object))
    }

    /// `Object.create(null)`
    pub fn null_prototype() -> Self {
        JsObject::new(ObjectClass::Ordinary, Prototype::Null)
    }

    /// `Object.create(proto)`
    pub fn with_prototype(proto: &JsObject) -> Self {
        JsObject::new(ObjectClass::Ordinary, Prototype::Object(proto.clone()))
    }

    /// `[a, b, ...]`
    pub fn array_from(values: Vec<Value>) -> Self {
        JsObject::new(
            ObjectClass::Array(values),
            Prototype::Intrinsic(Intrinsic::Array),
        )
    }

    /// The `arguments` object of a non-arrow function
    pub fn arguments(values: Vec<Value>) -> Self {
        JsObject::new(
            ObjectClass::Arguments(values),
            Prototype::Intrinsic(Intrinsic::Object),
        )
    }

    fn make_function(name: &str, kind: FunctionKind, own_prototype: bool) -> Self {
        let prototype = own_prototype.then(|| Prototype::Object(JsObject::plain()));
        JsObject::new(
            ObjectClass::Function(FunctionData {
                name: name.to_string(),
                kind,
                prototype,
            }),
            Prototype::Intrinsic(kind.intrinsic()),
        )
    }

    /// `function name() {}`
    pub fn function(name: &str) -> Self {
        JsObject::make_function(name, FunctionKind::Normal, true)
    }

    /// `() => {}`
    pub fn arrow_function() -> Self {
        JsObject::make_function("", FunctionKind::Arrow, false)
    }

    /// A concise method `{ name() {} }`
    pub fn method(name: &str) -> Self {
        JsObject::make_function(name, FunctionKind::Method, false)
    }

    /// `async function name() {}`
    pub fn async_function(name: &str) -> Self {
        JsObject::make_function(name, FunctionKind::Async, false)
    }

    /// `function* name() {}`
    pub fn generator_function(name: &str) -> Self {
        JsObject::make_function(name, FunctionKind::Generator, true)
    }

    /// `async function* name() {}`
    pub fn async_generator_function(name: &str) -> Self {
        JsObject::make_function(name, FunctionKind::AsyncGenerator, true)
    }

    /// `target.bind(..)`
    pub fn bound_function(target: &JsObject) -> Self {
        let name = match &target.data().class {
            ObjectClass::Function(func) => format!("bound {}", func.name),
            _ => "bound ".to_string(),
        };
        JsObject::make_function(&name, FunctionKind::Bound, false)
    }

    /// `class Name {}`
    ///
    /// The returned constructor owns a fresh `Name.prototype` object that
    /// inherits from `Object.prototype`.
    pub fn class(name: &str) -> Self {
        JsObject::make_function(name, FunctionKind::Class, true)
    }

    /// `class Name extends Parent {}`
    ///
    /// `Parent` may be a script class or a built-in constructor.
    pub fn subclass(name: &str, parent: &JsObject) -> ValueResult<Self> {
        let parent_proto = match &parent.data().class {
            ObjectClass::Function(func) if func.is_constructor() => func.prototype.clone(),
            ObjectClass::Function(func) => {
                return Err(ValueError::NotAConstructor(func.display_name()))
            }
            _ => None,
        }
        .ok_or_else(|| ValueError::NotAConstructor(parent.to_string()))?;

        let proto_object = JsObject::new(ObjectClass::Ordinary, parent_proto);
        Ok(JsObject::new(
            ObjectClass::Function(FunctionData {
                name: name.to_string(),
                kind: FunctionKind::Class,
                prototype: Some(Prototype::Object(proto_object)),
            }),
            Prototype::Object(parent.clone()),
        ))
    }

    /// The built-in constructor `Number`, `Object`, `Date`, ...
    pub fn intrinsic_constructor(intrinsic: Intrinsic) -> Self {
        JsObject::new(
            ObjectClass::Function(FunctionData {
                name: intrinsic.name().to_string(),
                kind: FunctionKind::Native,
                prototype: Some(Prototype::Intrinsic(intrinsic)),
            }),
            Prototype::Intrinsic(Intrinsic::Function),
        )
    }

    /// `new Ctor()` with no arguments
    ///
    /// Instances of classes extending a built-in carry that built-in's
    /// internal slots, so `new (class extends Map {})()` is still a Map.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::NotAConstructor`] when `self` is not a
    /// constructor or names a built-in that cannot be `new`-ed.
    pub fn construct(&self) -> ValueResult<JsObject> {
        let prototype = match &self.data().class {
            ObjectClass::Function(func) if func.is_constructor() => func.prototype.clone(),
            ObjectClass::Function(func) => {
                return Err(ValueError::NotAConstructor(func.display_name()))
            }
            _ => None,
        }
        .ok_or_else(|| ValueError::NotAConstructor(self.to_string()))?;

        match prototype {
            Prototype::Intrinsic(intrinsic) => Ok(JsObject::new(
                instantiate(intrinsic)?,
                Prototype::Intrinsic(intrinsic),
            )),
            Prototype::Object(proto_object) => {
                let class = match base_intrinsic(&proto_object.prototype()) {
                    Some(intrinsic) => instantiate(intrinsic)?,
                    None => ObjectClass::Ordinary,
                };
                Ok(JsObject::new(class, Prototype::Object(proto_object)))
            }
            Prototype::Null => Ok(JsObject::plain()),
        }
    }

    /// `new RegExp(pattern, flags)`
    ///
    /// # Errors
    ///
    /// Fails on unknown or repeated flags and on patterns the engine cannot
    /// compile.
    pub fn regexp(pattern: &str, flags: &str) -> ValueResult<Self> {
        Ok(JsObject::new(
            ObjectClass::RegExp(compile_regexp(pattern, flags)?),
            Prototype::Intrinsic(Intrinsic::RegExp),
        ))
    }

    fn date(time_value: f64) -> Self {
        JsObject::new(
            ObjectClass::Date(DateData { time_value }),
            Prototype::Intrinsic(Intrinsic::Date),
        )
    }

    /// `new Date()`
    pub fn date_now() -> Self {
        JsObject::date(Utc::now().timestamp_millis() as f64)
    }

    /// `new Date(ms)`; out-of-range or non-finite input yields an invalid date
    pub fn date_from_millis(ms: f64) -> Self {
        let time_value = if !ms.is_finite() || ms.abs() > MAX_TIME_VALUE {
            f64::NAN
        } else {
            ms.trunc()
        };
        JsObject::date(time_value)
    }

    /// `new Date(text)`; unparseable text yields an invalid date
    pub fn date_parse(text: &str) -> Self {
        JsObject::date_from_millis(parse_date(text))
    }

    /// `new Date(NaN)`
    pub fn invalid_date() -> Self {
        JsObject::date(f64::NAN)
    }

    /// `new Map()`
    pub fn map() -> Self {
        JsObject::new(
            ObjectClass::Map(Vec::new()),
            Prototype::Intrinsic(Intrinsic::Map),
        )
    }

    /// `new Set()`
    pub fn set() -> Self {
        JsObject::new(
            ObjectClass::Set(Vec::new()),
            Prototype::Intrinsic(Intrinsic::Set),
        )
    }

    /// `new WeakMap()`
    pub fn weak_map() -> Self {
        JsObject::new(ObjectClass::WeakMap, Prototype::Intrinsic(Intrinsic::WeakMap))
    }

    /// `new WeakSet()`
    pub fn weak_set() -> Self {
        JsObject::new(ObjectClass::WeakSet, Prototype::Intrinsic(Intrinsic::WeakSet))
    }

    /// `new TypeError(message)` and siblings
    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        JsObject::new(
            ObjectClass::Error(ErrorData {
                kind,
                message: message.into(),
            }),
            Prototype::Intrinsic(Intrinsic::Error),
        )
    }

    /// A promise in the given state
    pub fn promise(state: PromiseState) -> Self {
        JsObject::new(
            ObjectClass::Promise(state),
            Prototype::Intrinsic(Intrinsic::Promise),
        )
    }

    /// `new String("x")`, `new Number(1)`, `Object(Symbol())`, ...
    pub fn boxed(primitive: Primitive) -> Self {
        let intrinsic = primitive.intrinsic();
        JsObject::new(ObjectClass::Boxed(primitive), Prototype::Intrinsic(intrinsic))
    }

    /// Borrow the object's data
    pub fn data(&self) -> Ref<'_, ObjectData> {
        self.inner.borrow()
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// The `[[Prototype]]` link
    pub fn prototype(&self) -> Prototype {
        self.inner.borrow().prototype.clone()
    }

    /// `Object.setPrototypeOf(self, proto)`
    ///
    /// # Errors
    ///
    /// Rejects a prototype whose chain already contains `self`, the same
    /// way the engine throws on a cyclic `__proto__` value.
    pub fn set_prototype(&self, proto: Prototype) -> ValueResult<()> {
        if let Prototype::Object(candidate) = &proto {
            if candidate.ptr_eq(self) || candidate.prototype_chain().iter().any(|p| p.ptr_eq(self))
            {
                return Err(ValueError::CyclicPrototype);
            }
        }
        self.inner.borrow_mut().prototype = proto;
        Ok(())
    }

    /// `F.prototype = proto`
    ///
    /// Only replaces an existing own `prototype`; arrows, methods and
    /// non-callables are left untouched.
    pub fn set_function_prototype(&self, proto: Prototype) {
        if let ObjectClass::Function(func) = &mut self.inner.borrow_mut().class {
            if func.prototype.is_some() {
                func.prototype = Some(proto);
            }
        }
    }

    /// Script-defined prototype objects from nearest to farthest
    ///
    /// The walk stops at the first built-in prototype or at `null`.
    pub fn prototype_chain(&self) -> Vec<JsObject> {
        let mut chain = Vec::new();
        let mut current = self.prototype();
        while let Prototype::Object(proto) = current {
            current = proto.prototype();
            chain.push(proto);
        }
        chain
    }

    /// Own property lookup
    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.borrow().properties.get(key).cloned()
    }

    /// Own property assignment
    pub fn set_property(&self, key: impl Into<String>, value: Value) {
        self.inner.borrow_mut().properties.insert(key.into(), value);
    }

    /// Own `Symbol.toStringTag`
    pub fn to_string_tag(&self) -> Option<String> {
        self.inner.borrow().to_string_tag.clone()
    }

    /// Define an own `Symbol.toStringTag`
    pub fn set_to_string_tag(&self, tag: impl Into<String>) {
        self.inner.borrow_mut().to_string_tag = Some(tag.into());
    }

    /// Append to an array (no-op for other objects)
    pub fn push(&self, value: Value) {
        if let ObjectClass::Array(elements) = &mut self.inner.borrow_mut().class {
            elements.push(value);
        }
    }

    /// Whether the object has a `[[Call]]` slot
    pub fn is_callable(&self) -> bool {
        matches!(self.inner.borrow().class, ObjectClass::Function(_))
    }

    /// A copy of the function slots, if callable
    pub fn function_data(&self) -> Option<FunctionData> {
        match &self.inner.borrow().class {
            ObjectClass::Function(func) => Some(func.clone()),
            _ => None,
        }
    }

    /// The date's time value, if this is a Date
    pub fn date_value(&self) -> Option<f64> {
        match &self.inner.borrow().class {
            ObjectClass::Date(date) => Some(date.time_value),
            _ => None,
        }
    }

    /// The wrapped primitive, if this is a boxed primitive
    pub fn boxed_primitive(&self) -> Option<Primitive> {
        match &self.inner.borrow().class {
            ObjectClass::Boxed(primitive) => Some(primitive.clone()),
            _ => None,
        }
    }
}

/// Internal slots `new X()` creates for a built-in constructor
fn instantiate(intrinsic: Intrinsic) -> ValueResult<ObjectClass> {
    let class = match intrinsic {
        Intrinsic::Object => ObjectClass::Ordinary,
        Intrinsic::Function => ObjectClass::Function(FunctionData {
            name: "anonymous".to_string(),
            kind: FunctionKind::Normal,
            prototype: Some(Prototype::Object(JsObject::plain())),
        }),
        Intrinsic::AsyncFunction => ObjectClass::Function(FunctionData {
            name: "anonymous".to_string(),
            kind: FunctionKind::Async,
            prototype: None,
        }),
        Intrinsic::GeneratorFunction => ObjectClass::Function(FunctionData {
            name: "anonymous".to_string(),
            kind: FunctionKind::Generator,
            prototype: Some(Prototype::Object(JsObject::plain())),
        }),
        Intrinsic::AsyncGeneratorFunction => ObjectClass::Function(FunctionData {
            name: "anonymous".to_string(),
            kind: FunctionKind::AsyncGenerator,
            prototype: Some(Prototype::Object(JsObject::plain())),
        }),
        Intrinsic::Array => ObjectClass::Array(Vec::new()),
        Intrinsic::Boolean => ObjectClass::Boxed(Primitive::Boolean(false)),
        Intrinsic::Number => ObjectClass::Boxed(Primitive::Number(0.0)),
        Intrinsic::String => ObjectClass::Boxed(Primitive::String(String::new())),
        Intrinsic::Symbol | Intrinsic::BigInt => {
            return Err(ValueError::NotAConstructor(intrinsic.name().to_string()))
        }
        Intrinsic::RegExp => ObjectClass::RegExp(compile_regexp("(?:)", "")?),
        Intrinsic::Date => ObjectClass::Date(DateData {
            time_value: Utc::now().timestamp_millis() as f64,
        }),
        Intrinsic::Map => ObjectClass::Map(Vec::new()),
        Intrinsic::Set => ObjectClass::Set(Vec::new()),
        Intrinsic::WeakMap => ObjectClass::WeakMap,
        Intrinsic::WeakSet => ObjectClass::WeakSet,
        Intrinsic::Error => ObjectClass::Error(ErrorData {
            kind: ErrorKind::Error,
            message: String::new(),
        }),
        Intrinsic::Promise => ObjectClass::Promise(PromiseState::Pending),
    };
    Ok(class)
}

/// The built-in prototype a chain of script prototypes bottoms out in
fn base_intrinsic(proto: &Prototype) -> Option<Intrinsic> {
    let mut current = proto.clone();
    loop {
        match current {
            Prototype::Null => return None,
            Prototype::Intrinsic(intrinsic) => return Some(intrinsic),
            Prototype::Object(obj) => current = obj.prototype(),
        }
    }
}

fn compile_regexp(pattern: &str, flags: &str) -> ValueResult<RegExpData> {
    let mut seen = String::new();
    for flag in flags.chars() {
        if !"dgimsuyv".contains(flag) || seen.contains(flag) {
            return Err(ValueError::InvalidRegExpFlags(flags.to_string()));
        }
        seen.push(flag);
    }
    if seen.contains('u') && seen.contains('v') {
        return Err(ValueError::InvalidRegExpFlags(flags.to_string()));
    }

    let regex = RegexBuilder::new(pattern)
        .case_insensitive(seen.contains('i'))
        .multi_line(seen.contains('m'))
        .dot_matches_new_line(seen.contains('s'))
        .build()
        .map_err(|source| ValueError::InvalidRegExp {
            pattern: pattern.to_string(),
            source,
        })?;

    Ok(RegExpData {
        source: pattern.to_string(),
        flags: flags.to_string(),
        regex,
    })
}

/// Parse the date-time formats accepted by `Date.parse`.
///
/// Strings without an offset are read as UTC. Returns NaN when nothing
/// matches.
fn parse_date(text: &str) -> f64 {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return dt.timestamp_millis() as f64;
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return dt.timestamp_millis() as f64;
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return naive.and_utc().timestamp_millis() as f64;
        }
    }
    if let Some(midnight) = NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return midnight.and_utc().timestamp_millis() as f64;
    }
    f64::NAN
}

thread_local! {
    // Arrays currently being joined; a revisit prints as empty like Array.prototype.join
    static JOIN_STACK: RefCell<Vec<*const RefCell<ObjectData>>> = const { RefCell::new(Vec::new()) };
}

fn join_elements(
    ptr: *const RefCell<ObjectData>,
    elements: &[Value],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    if JOIN_STACK.with(|stack| stack.borrow().contains(&ptr)) {
        return Ok(());
    }
    JOIN_STACK.with(|stack| stack.borrow_mut().push(ptr));
    let mut result = Ok(());
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            result = result.and_then(|_| write!(f, ","));
        }
        if !matches!(element, Value::Undefined | Value::Null) {
            result = result.and_then(|_| write!(f, "{}", element));
        }
    }
    JOIN_STACK.with(|stack| stack.borrow_mut().pop());
    result
}

/// Formats objects roughly as `String(obj)` would without user overrides.
impl fmt::Display for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.inner.borrow();
        match &data.class {
            ObjectClass::Array(elements) => join_elements(Rc::as_ptr(&self.inner), elements, f),
            ObjectClass::Function(func) => {
                write!(f, "function {}() {{ [native code] }}", func.name)
            }
            ObjectClass::RegExp(re) => write!(f, "/{}/{}", re.source, re.flags),
            ObjectClass::Date(date) => {
                let formatted = Utc
                    .timestamp_millis_opt(date.time_value as i64)
                    .single()
                    .filter(|_| date.is_valid())
                    .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true));
                match formatted {
                    Some(text) => write!(f, "{}", text),
                    None => write!(f, "Invalid Date"),
                }
            }
            ObjectClass::Error(err) if err.message.is_empty() => write!(f, "{}", err.kind.name()),
            ObjectClass::Error(err) => write!(f, "{}: {}", err.kind.name(), err.message),
            ObjectClass::Boxed(primitive) => write!(f, "{}", primitive.to_value()),
            ObjectClass::Arguments(_) => write!(f, "[object Arguments]"),
            ObjectClass::Map(_) => write!(f, "[object Map]"),
            ObjectClass::Set(_) => write!(f, "[object Set]"),
            ObjectClass::WeakMap => write!(f, "[object WeakMap]"),
            ObjectClass::WeakSet => write!(f, "[object WeakSet]"),
            ObjectClass::Promise(_) => write!(f, "[object Promise]"),
            ObjectClass::Ordinary => match &data.to_string_tag {
                Some(tag) => write!(f, "[object {}]", tag),
                None => write!(f, "[object Object]"),
            },
        }
    }
}
