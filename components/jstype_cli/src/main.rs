//! jstype
//!
//! Entry point for the type inspector. Parses CLI arguments and delegates
//! to the Inspector.

use clap::Parser as ClapParser;
use jstype_cli::{logging, Cli, CliError, Inspector};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    if let Err(e) = run(cli) {
        match e {
            CliError::Io(e) => eprintln!("Error: Could not read file: {}", e),
            CliError::Descriptor(e) => eprintln!("Type Error: {}", e),
            e => eprintln!("Error: {}", e),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut inspector = Inspector::new().with_json(cli.json);
    if let Some(source) = &cli.is {
        inspector = inspector.with_descriptor(source)?;
    }

    let report = if let Some(file) = &cli.file {
        inspector.inspect_file(file)?
    } else if let Some(source) = &cli.eval {
        inspector.inspect_literal(source)?
    } else if cli.repl {
        return inspector.repl();
    } else {
        print_usage();
        return Ok(());
    };

    println!("{}", inspector.render(&report)?);
    Ok(())
}

fn print_usage() {
    println!("jstype {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage:");
    println!("  jstype --eval <LITERAL>     Classify a literal");
    println!("  jstype --file <FILE>        Classify a JSON document");
    println!("  jstype --repl               Start interactive session");
    println!();
    println!("Add --is <CONSTRUCTOR> to match against a constructor, --json for JSON output.");
    println!("Run 'jstype --help' for more options.");
}
