//! JavaScript type inspector CLI library
//!
//! Provides the Inspector struct and supporting modules for the `jstype`
//! command.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod inspector;
pub mod logging;
pub mod repl;
pub mod report;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use inspector::Inspector;
pub use report::{Report, TypeCheck};
