//! Classification reports

use std::collections::BTreeMap;
use std::fmt;

use js_value::Value;
use serde::Serialize;
use type_guards::{
    get_type, is_any_object, is_array, is_boolean, is_date, is_empty_string, is_full_string,
    is_function, is_null, is_number, is_plain_object, is_primitive, is_reg_exp, is_string,
    is_symbol, is_undefined, matches_type, object_to_string, TypeDescriptor,
};

/// Predicates evaluated for every report, by name
const PREDICATES: [(&str, fn(&Value) -> bool); 15] = [
    ("is_undefined", is_undefined),
    ("is_null", is_null),
    ("is_plain_object", is_plain_object),
    ("is_any_object", is_any_object),
    ("is_function", is_function),
    ("is_array", is_array),
    ("is_string", is_string),
    ("is_full_string", is_full_string),
    ("is_empty_string", is_empty_string),
    ("is_number", is_number),
    ("is_boolean", is_boolean),
    ("is_reg_exp", is_reg_exp),
    ("is_date", is_date),
    ("is_symbol", is_symbol),
    ("is_primitive", is_primitive),
];

/// Everything the classifier says about one value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// `String(value)`
    pub value: String,
    /// Canonical type tag
    pub tag: String,
    /// `Object.prototype.toString.call(value)`
    pub object_to_string: String,
    /// `typeof value`
    pub type_of: &'static str,
    /// Result of each derived predicate
    pub predicates: BTreeMap<&'static str, bool>,
    /// Result of matching against the requested constructor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_type: Option<TypeCheck>,
}

/// A constructor match inside a [`Report`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeCheck {
    /// Constructor name
    pub descriptor: String,
    /// Whether the value matched
    pub matches: bool,
}

impl Report {
    /// Classify `value`, optionally matching it against `descriptor`
    pub fn new(value: &Value, descriptor: Option<&TypeDescriptor>) -> Self {
        Self {
            value: value.to_string(),
            tag: get_type(value).into(),
            object_to_string: object_to_string(value),
            type_of: value.type_of(),
            predicates: PREDICATES
                .iter()
                .map(|(name, predicate)| (*name, predicate(value)))
                .collect(),
            is_type: descriptor.map(|descriptor| TypeCheck {
                descriptor: descriptor.name().to_string(),
                matches: matches_type(value, descriptor),
            }),
        }
    }

    /// Names of the predicates that hold
    pub fn holding(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.predicates
            .iter()
            .filter(|(_, holds)| **holds)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "value:     {}", self.value)?;
        writeln!(f, "type:      {}", self.tag)?;
        writeln!(f, "toString:  {}", self.object_to_string)?;
        writeln!(f, "typeof:    {}", self.type_of)?;
        if let Some(check) = &self.is_type {
            writeln!(f, "is {}: {}", check.descriptor, check.matches)?;
        }
        let holding: Vec<_> = self.holding().collect();
        if holding.is_empty() {
            write!(f, "holds:     (none)")
        } else {
            write!(f, "holds:     {}", holding.join(", "))
        }
    }
}
