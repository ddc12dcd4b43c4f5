//! Type descriptors.
//!
//! A descriptor is the constructor a value is compared against. At the
//! value level it is just a function object, so it is validated into a
//! [`TypeDescriptor`] before any comparison takes place.

use js_value::{FunctionKind, Intrinsic, JsObject, Prototype, Value};
use tracing::debug;

use crate::classify::get_type;
use crate::error::InvalidDescriptorError;

/// A validated comparison target for [`matches_type`](crate::matches_type)
#[derive(Debug, Clone)]
pub enum TypeDescriptor {
    /// A built-in constructor such as `Number` or `Object`
    Builtin(Intrinsic),
    /// A script function or class with its own `prototype` property
    Class {
        /// The function's `name`
        name: String,
        /// Value of its `prototype` property
        prototype: Prototype,
    },
}

impl TypeDescriptor {
    /// The constructor's `name`
    pub fn name(&self) -> &str {
        match self {
            TypeDescriptor::Builtin(intrinsic) => intrinsic.name(),
            TypeDescriptor::Class { name, .. } => name,
        }
    }

    /// The object instances created by this constructor inherit from
    pub fn prototype(&self) -> Prototype {
        match self {
            TypeDescriptor::Builtin(intrinsic) => Prototype::Intrinsic(*intrinsic),
            TypeDescriptor::Class { prototype, .. } => prototype.clone(),
        }
    }

    /// Validate a constructor object
    ///
    /// # Errors
    ///
    /// [`InvalidDescriptorError::NotAFunction`] when `ctor` is not callable,
    /// [`InvalidDescriptorError::NotAClass`] when it has no own `prototype`.
    pub fn from_constructor(ctor: &JsObject) -> Result<Self, InvalidDescriptorError> {
        let func = ctor
            .function_data()
            .ok_or_else(|| InvalidDescriptorError::NotAFunction {
                found: get_type(&Value::Object(ctor.clone())),
            })?;

        // Only the engine's own constructor names a built-in; a script function
        // borrowing `Array.prototype` keeps its own name.
        match func.prototype {
            Some(Prototype::Intrinsic(intrinsic)) if func.kind == FunctionKind::Native => {
                Ok(TypeDescriptor::Builtin(intrinsic))
            }
            Some(prototype) => Ok(TypeDescriptor::Class {
                name: func.name,
                prototype,
            }),
            None => Err(InvalidDescriptorError::NotAClass { name: func.name }),
        }
    }
}

impl From<Intrinsic> for TypeDescriptor {
    fn from(intrinsic: Intrinsic) -> Self {
        TypeDescriptor::Builtin(intrinsic)
    }
}

impl TryFrom<&Value> for TypeDescriptor {
    type Error = InvalidDescriptorError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let result = match value {
            Value::Object(ctor) => TypeDescriptor::from_constructor(ctor),
            other => Err(InvalidDescriptorError::NotAFunction {
                found: get_type(other),
            }),
        };
        if let Err(err) = &result {
            debug!(error = %err, "rejected type descriptor");
        }
        result
    }
}
