//! Literal boundary.
//!
//! JSON cannot express most of the values worth classifying, so this module
//! accepts JSON plus a handful of JavaScript expression forms, each read
//! as a whole (no nesting inside JSON containers):
//!
//! | Form | Value |
//! |---|---|
//! | `undefined`, `NaN`, `Infinity`, `-Infinity` | the primitive |
//! | `12n` | bigint |
//! | `/re/flags` | RegExp |
//! | `Symbol()`, `Symbol("d")` | symbol |
//! | `new Date()`, `new Date(0)`, `new Date("2024-01-01")` | Date |
//! | `new String("x")`, `new Number(1)`, `new Boolean(true)` | boxed primitive |
//! | `new TypeError("m")` and other native errors | Error |
//! | `new Map()`, `new Set()`, `new Array()`, ... | empty built-in instance |
//! | `Promise.resolve(v)`, `Promise.reject(v)` | settled promise |
//! | `Object.create(null)`, `Object.create({...})` | object with that prototype |
//! | `Number`, `Object`, `Date`, ... | built-in constructor |
//! | `() => {}`, `async () => {}` | arrow / async function |
//! | `function f() {}`, `function* g() {}`, `async function h() {}` | function |
//! | `class A {}`, `class B extends Map {}` | class |
//! | `new (class A {})()` | class instance |

use num_bigint::BigInt;

use crate::error::{ValueError, ValueResult};
use crate::intrinsic::Intrinsic;
use crate::object::{ErrorKind, JsObject, PromiseState};
use crate::value::{Primitive, Value};

impl Value {
    /// Parse a JSON document or one of the JavaScript literal forms listed
    /// in the module documentation.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Literal`] for unrecognized text and propagates
    /// construction errors such as an invalid regular expression.
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// assert_eq!(Value::parse_literal("undefined").unwrap(), Value::Undefined);
    /// assert!(Value::parse_literal("/a+/g").is_ok());
    /// assert!(Value::parse_literal("not a value").is_err());
    /// ```
    pub fn parse_literal(text: &str) -> ValueResult<Value> {
        parse(text)
    }
}

fn parse(text: &str) -> ValueResult<Value> {
    let text = text.trim();
    let text = text.strip_suffix(';').unwrap_or(text).trim_end();

    match text {
        "undefined" => return Ok(Value::Undefined),
        "NaN" => return Ok(Value::nan()),
        "Infinity" | "+Infinity" => return Ok(Value::Number(f64::INFINITY)),
        "-Infinity" => return Ok(Value::Number(f64::NEG_INFINITY)),
        _ => {}
    }

    if let Some(intrinsic) = Intrinsic::from_name(text) {
        return Ok(Value::Object(JsObject::intrinsic_constructor(intrinsic)));
    }
    if let Some(value) = parse_bigint(text) {
        return Ok(value);
    }
    if text.starts_with('/') && !text.starts_with("//") {
        return parse_regexp(text);
    }
    if let Some(args) = call_args(text, "Symbol") {
        return parse_symbol(args);
    }
    if let Some(args) = call_args(text, "Object.create") {
        return match parse(args)? {
            Value::Null => Ok(Value::Object(JsObject::null_prototype())),
            Value::Object(proto) => Ok(Value::Object(JsObject::with_prototype(&proto))),
            _ => Err(literal_error(text)),
        };
    }
    if let Some(args) = call_args(text, "Promise.resolve") {
        let value = parse_optional(args)?;
        return Ok(Value::Object(JsObject::promise(PromiseState::Fulfilled(value))));
    }
    if let Some(args) = call_args(text, "Promise.reject") {
        let value = parse_optional(args)?;
        return Ok(Value::Object(JsObject::promise(PromiseState::Rejected(value))));
    }
    if let Some(rest) = text.strip_prefix("new ") {
        return parse_new(rest.trim_start(), text);
    }
    if let Some(callable) = parse_callable(text)? {
        return Ok(Value::Object(callable));
    }

    Value::from_json_str(text).map_err(|_| literal_error(text))
}

fn literal_error(text: &str) -> ValueError {
    ValueError::Literal(text.to_string())
}

/// Inner text of `callee(...)`, or `None` if `text` is not such a call
fn call_args<'a>(text: &'a str, callee: &str) -> Option<&'a str> {
    text.strip_prefix(callee)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
        .map(str::trim)
}

/// An empty argument list reads as `undefined`
fn parse_optional(args: &str) -> ValueResult<Value> {
    if args.is_empty() {
        Ok(Value::Undefined)
    } else {
        parse(args)
    }
}

fn parse_bigint(text: &str) -> Option<Value> {
    let digits = text.strip_suffix('n')?;
    let unsigned = digits.strip_prefix('-').unwrap_or(digits);
    if unsigned.is_empty() || !unsigned.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse::<BigInt>().ok().map(Value::BigInt)
}

fn parse_regexp(text: &str) -> ValueResult<Value> {
    let end = text.rfind('/').filter(|&i| i > 0).ok_or_else(|| literal_error(text))?;
    let pattern = &text[1..end];
    let flags = &text[end + 1..];
    Ok(Value::Object(JsObject::regexp(pattern, flags)?))
}

fn parse_symbol(args: &str) -> ValueResult<Value> {
    match parse_optional(args)? {
        Value::Undefined => Ok(Value::symbol(None)),
        Value::String(description) => Ok(Value::symbol(Some(&description))),
        _ => Err(literal_error(args)),
    }
}

/// `new <rest>`; `whole` is the full text for error messages
fn parse_new(rest: &str, whole: &str) -> ValueResult<Value> {
    // new (class A {})()
    if let Some(inner) = rest
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix("()"))
        .and_then(|r| r.trim_end().strip_suffix(')'))
    {
        return match parse(inner)? {
            Value::Object(ctor) => Ok(Value::Object(ctor.construct()?)),
            _ => Err(literal_error(whole)),
        };
    }

    let open = rest.find('(').ok_or_else(|| literal_error(whole))?;
    let callee = rest[..open].trim();
    let args = call_args(rest, callee).ok_or_else(|| literal_error(whole))?;

    let object = match callee {
        "Date" => match parse_optional(args)? {
            Value::Undefined => JsObject::date_now(),
            Value::Number(ms) => JsObject::date_from_millis(ms),
            Value::String(text) => JsObject::date_parse(&text),
            _ => return Err(literal_error(whole)),
        },
        "String" => match parse_optional(args)? {
            Value::Undefined => JsObject::boxed(Primitive::String(String::new())),
            Value::String(s) => JsObject::boxed(Primitive::String(s)),
            _ => return Err(literal_error(whole)),
        },
        "Number" => match parse_optional(args)? {
            Value::Undefined => JsObject::boxed(Primitive::Number(0.0)),
            Value::Number(n) => JsObject::boxed(Primitive::Number(n)),
            _ => return Err(literal_error(whole)),
        },
        "Boolean" => match parse_optional(args)? {
            Value::Undefined => JsObject::boxed(Primitive::Boolean(false)),
            Value::Boolean(b) => JsObject::boxed(Primitive::Boolean(b)),
            _ => return Err(literal_error(whole)),
        },
        name => {
            if let Some(kind) = ErrorKind::from_name(name) {
                match parse_optional(args)? {
                    Value::Undefined => JsObject::error(kind, ""),
                    Value::String(message) => JsObject::error(kind, message),
                    _ => return Err(literal_error(whole)),
                }
            } else if let Some(intrinsic) = Intrinsic::from_name(name) {
                if !args.is_empty() {
                    return Err(literal_error(whole));
                }
                JsObject::intrinsic_constructor(intrinsic).construct()?
            } else {
                return Err(literal_error(whole));
            }
        }
    };
    Ok(Value::Object(object))
}

fn identifier(text: &str) -> &str {
    let end = text
        .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '$'))
        .unwrap_or(text.len());
    &text[..end]
}

/// Byte offset just past the bracket that closes the one `text` opens with
fn closing_bracket(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '{' | '[' => depth += 1,
            ')' | '}' | ']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(i + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}

/// Whether `text` is exactly one `{ ... }` block
fn is_block(text: &str) -> bool {
    let text = text.trim();
    text.starts_with('{') && closing_bracket(text) == Some(text.len())
}

/// Function, arrow and class forms; `Ok(None)` when `text` is none of them
///
/// Text that starts like one of them but has no body is an error.
fn parse_callable(text: &str) -> ValueResult<Option<JsObject>> {
    if let Some(rest) = text.strip_prefix("class") {
        if !rest.starts_with(|c: char| c.is_whitespace() || c == '{') {
            return Ok(None);
        }
        let rest = rest.trim_start();
        let name = match identifier(rest) {
            "extends" => "",
            name => name,
        };
        let mut body = rest[name.len()..].trim_start();
        let mut parent = None;
        if let Some(after) = body.strip_prefix("extends") {
            let after = after.trim_start();
            let parent_name = identifier(after);
            if parent_name.is_empty() {
                return Err(literal_error(text));
            }
            parent = Some(parent_name);
            body = &after[parent_name.len()..];
        }
        if !is_block(body) {
            return Err(literal_error(text));
        }
        return match parent {
            Some(parent_name) => {
                let intrinsic =
                    Intrinsic::from_name(parent_name).ok_or_else(|| literal_error(text))?;
                let parent_ctor = JsObject::intrinsic_constructor(intrinsic);
                Ok(Some(JsObject::subclass(name, &parent_ctor)?))
            }
            None => Ok(Some(JsObject::class(name))),
        };
    }

    let (is_async, rest) = match text.strip_prefix("async") {
        Some(rest) if rest.starts_with(char::is_whitespace) || rest.starts_with('(') => {
            (true, rest.trim_start())
        }
        _ => (false, text),
    };

    if let Some(rest) = rest.strip_prefix("function") {
        if !rest.starts_with(|c: char| c.is_whitespace() || c == '*' || c == '(') {
            return Ok(None);
        }
        let rest = rest.trim_start();
        let (is_generator, rest) = match rest.strip_prefix('*') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, rest),
        };
        let name = identifier(rest);
        let params = rest[name.len()..].trim_start();
        let has_body = params.starts_with('(')
            && closing_bracket(params).is_some_and(|end| is_block(&params[end..]));
        if !has_body {
            return Err(literal_error(text));
        }
        let function = match (is_async, is_generator) {
            (true, true) => JsObject::async_generator_function(name),
            (true, false) => JsObject::async_function(name),
            (false, true) => JsObject::generator_function(name),
            (false, false) => JsObject::function(name),
        };
        return Ok(Some(function));
    }

    if let Some((params, body)) = rest.split_once("=>") {
        let params = params.trim();
        let params_ok = (params.starts_with('(')
            && closing_bracket(params) == Some(params.len()))
            || (!params.is_empty() && identifier(params) == params);
        if !params_ok {
            return Ok(None);
        }
        if body.trim().is_empty() {
            return Err(literal_error(text));
        }
        let function = if is_async {
            JsObject::async_function("")
        } else {
            JsObject::arrow_function()
        };
        return Ok(Some(function));
    }

    Ok(None)
}
