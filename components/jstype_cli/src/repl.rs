//! REPL (Read-Eval-Print Loop) implementation

use crate::error::{CliError, CliResult};
use crate::inspector::Inspector;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive REPL
///
/// Each complete input is parsed as a literal and its report printed.
/// Lines starting with `.` are session commands.
pub fn run_repl(inspector: &mut Inspector) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("jstype {}", env!("CARGO_PKG_VERSION"));
    println!("Type a value, .help for commands or 'exit' to quit.");
    println!();

    let mut line_buffer = String::new();
    let mut in_multiline = false;

    loop {
        let prompt = if in_multiline { "... " } else { "> " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if !in_multiline && (trimmed == "exit" || trimmed == ".exit" || trimmed == "quit") {
                    println!("Goodbye!");
                    break;
                }

                if !in_multiline && trimmed.starts_with('.') {
                    let _ = editor.add_history_entry(trimmed);
                    println!("{}", handle_repl_command(trimmed, inspector));
                    continue;
                }

                if !in_multiline && trimmed.is_empty() {
                    continue;
                }

                if in_multiline {
                    line_buffer.push('\n');
                }
                line_buffer.push_str(&line);

                if !is_input_complete(&line_buffer) {
                    in_multiline = true;
                    continue;
                }
                in_multiline = false;
                let _ = editor.add_history_entry(line_buffer.as_str());

                let rendered = inspector
                    .inspect_literal(&line_buffer)
                    .and_then(|report| inspector.render(&report));
                match rendered {
                    Ok(output) => println!("{}", output),
                    Err(e) => eprintln!("Error: {}", e),
                }
                line_buffer.clear();
            }
            Err(ReadlineError::Interrupted) => {
                if in_multiline {
                    println!("^C");
                    line_buffer.clear();
                    in_multiline = false;
                } else {
                    println!("Press Ctrl-D or type 'exit' to quit");
                }
            }
            Err(ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

/// Handle a session command, returning the text to print
fn handle_repl_command(command: &str, inspector: &mut Inspector) -> String {
    let (name, argument) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, Some(rest.trim()).filter(|rest| !rest.is_empty())),
        None => (command, None),
    };

    match name {
        ".help" => [
            "REPL Commands:",
            "  .is <ctor>  - Match every value against a constructor",
            "  .is         - Show the constructor match",
            "  .noIs       - Stop the constructor match",
            "  .json       - Print reports as JSON",
            "  .text       - Print reports as text",
            "  .clear      - Clear the screen",
            "  .exit       - Exit the REPL",
        ]
        .join("\n"),
        ".is" => match argument {
            Some(source) => match inspector.set_descriptor(Some(source)) {
                Ok(()) => format!("Matching against {}", source),
                Err(e) => format!("Error: {}", e),
            },
            None => match inspector.descriptor_source() {
                Some(source) => format!("Matching against {}", source),
                None => "No constructor set".to_string(),
            },
        },
        ".noIs" => match inspector.set_descriptor(None) {
            Ok(()) => "Constructor match cleared".to_string(),
            Err(e) => format!("Error: {}", e),
        },
        ".json" => {
            inspector.set_json(true);
            "Output: json".to_string()
        }
        ".text" => {
            inspector.set_json(false);
            "Output: text".to_string()
        }
        ".clear" => "\x1B[2J\x1B[1;1H".to_string(),
        _ => format!(
            "Unknown command: {}\nType .help for available commands",
            command
        ),
    }
}

/// Check if the input appears to be complete
///
/// This is a simple heuristic that checks for balanced braces/brackets/parens.
/// A regular expression literal is always one line, and its quotes and
/// brackets are pattern text.
fn is_input_complete(input: &str) -> bool {
    if input.trim_start().starts_with('/') {
        return true;
    }

    let mut depth = 0i32;
    let mut in_string = false;
    let mut string_char = ' ';
    let mut escape_next = false;

    for c in input.chars() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if c == '\\' && in_string {
            escape_next = true;
            continue;
        }

        if !in_string {
            match c {
                '"' | '\'' | '`' => {
                    in_string = true;
                    string_char = c;
                }
                '{' | '[' | '(' => depth += 1,
                '}' | ']' | ')' => depth -= 1,
                _ => {}
            }
        } else if c == string_char {
            in_string = false;
        }
    }

    depth <= 0 && !in_string
}
