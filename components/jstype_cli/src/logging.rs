//! Log subscriber setup

use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

/// Default filter for a `-v` count when `RUST_LOG` is unset
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`, falling back to the
/// verbosity flag
pub fn init(verbose: u8) -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}
