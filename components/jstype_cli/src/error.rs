//! Error types for the CLI

use js_value::ValueError;
use thiserror::Error;
use type_guards::InvalidDescriptorError;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Input could not be turned into a value
    #[error("Invalid input: {0}")]
    Value(#[from] ValueError),

    /// `--is` named something that cannot be matched against
    #[error("Invalid constructor: {0}")]
    Descriptor(#[from] InvalidDescriptorError),

    /// File I/O error
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization error
    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),

    /// REPL error
    #[error("REPL error: {0}")]
    Repl(String),

    /// Subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
