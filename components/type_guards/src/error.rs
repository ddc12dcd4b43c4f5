//! Descriptor validation errors.

use thiserror::Error;

use crate::tag::TypeTag;

/// The second argument of [`is_type`](crate::is_type) was not a usable type
///
/// Raised instead of answering `false`, so a misplaced string or number
/// cannot masquerade as a failed match.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDescriptorError {
    /// The descriptor is not callable at all
    #[error("Type must be a function, got {found}")]
    NotAFunction {
        /// Tag of the offending descriptor
        found: TypeTag,
    },

    /// The descriptor is callable but owns no `prototype` (arrow functions,
    /// async functions and methods)
    #[error("Type is not a class: '{name}' has no prototype")]
    NotAClass {
        /// The function's name, possibly empty
        name: String,
    },
}

/// Result type for descriptor-based matching
pub type MatchResult<T> = Result<T, InvalidDescriptorError>;
