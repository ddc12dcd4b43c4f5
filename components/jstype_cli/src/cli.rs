//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Classify JavaScript values the way `Object.prototype.toString` does
#[derive(Debug, Parser)]
#[command(name = "jstype", version, about)]
pub struct Cli {
    /// Classify a literal such as `[1, 2]`, `NaN`, `new Date()` or `class A {}`
    #[arg(short, long, value_name = "LITERAL")]
    pub eval: Option<String>,

    /// Classify the JSON document stored in a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "eval")]
    pub file: Option<PathBuf>,

    /// Also check the value against a constructor, e.g. `Number` or `class A {}`
    #[arg(long = "is", value_name = "CONSTRUCTOR")]
    pub is: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Start an interactive session
    #[arg(short, long)]
    pub repl: bool,

    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
