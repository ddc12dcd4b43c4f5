//! JSON boundary.
//!
//! Untyped data enters the value model here. JSON has no undefined, NaN,
//! dates or functions, so every document maps onto null, booleans, numbers,
//! strings, arrays and plain objects.

use crate::error::ValueResult;
use crate::object::JsObject;
use crate::value::Value;

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            // Every JSON number is representable as f64 (lossy past 2^53)
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Object(JsObject::array_from(
                items.into_iter().map(Value::from).collect(),
            )),
            serde_json::Value::Object(map) => {
                let obj = JsObject::plain();
                for (key, item) in map {
                    obj.set_property(key, Value::from(item));
                }
                Value::Object(obj)
            }
        }
    }
}

impl Value {
    /// Parse a JSON document into a value
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::Json`](crate::ValueError::Json) when the text is
    /// not valid JSON.
    ///
    /// ```
    /// use js_value::Value;
    ///
    /// let value = Value::from_json_str(r#"{"id": 1}"#).unwrap();
    /// assert_eq!(value.type_of(), "object");
    /// ```
    pub fn from_json_str(text: &str) -> ValueResult<Value> {
        let json: serde_json::Value = serde_json::from_str(text)?;
        Ok(Value::from(json))
    }
}
