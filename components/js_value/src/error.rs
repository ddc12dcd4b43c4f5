//! Errors raised while building values.
//!
//! Classification itself never fails; these errors only come from the
//! constructors that parse or compile something (regular expressions,
//! JSON documents, literal text) and from `new` on a non-constructor.

use thiserror::Error;

/// Error produced while constructing a [`Value`](crate::Value)
#[derive(Debug, Error)]
pub enum ValueError {
    /// The pattern of a regular expression did not compile
    #[error("Invalid regular expression /{pattern}/: {source}")]
    InvalidRegExp {
        /// Pattern as written
        pattern: String,
        /// Underlying compile error
        #[source]
        source: regex::Error,
    },

    /// A regular expression flag was unknown or repeated
    #[error("Invalid regular expression flags '{0}'")]
    InvalidRegExpFlags(String),

    /// `new` was applied to something that has no own `prototype`
    #[error("{0} is not a constructor")]
    NotAConstructor(String),

    /// `Object.setPrototypeOf` would have closed a prototype cycle
    #[error("Cyclic __proto__ value")]
    CyclicPrototype,

    /// The JSON boundary rejected its input
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Literal text could not be turned into a value
    #[error("Unrecognized literal: {0}")]
    Literal(String),
}

/// Result type for value construction
pub type ValueResult<T> = Result<T, ValueError>;
