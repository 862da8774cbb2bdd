//! Helper functions for CLI apps

use crate::cli::constants::*;
use crate::requests::ValidationRequest;
use std::io::{self, BufRead, Write};

/// **Contains full variants of all existing commands.**
///
/// Wrapped by `help()` so we can unit-test the contents,
/// so that we don't forget to include a newly-added command to help.
fn help_contents_full() -> String {
    format!("{HELP} {VALIDATE} {BATCH} {HEALTH} {QUIT}")
}

/// **Contains short variants of all existing commands.**
fn help_contents_short() -> String {
    "h v b r q".to_string()
}

/// **Prints all existing commands in their full and short variants.**
pub fn help() {
    println!("{}", help_contents_full());
    println!("{}", help_contents_short());
}

/// **One read from the user's input**
#[derive(Debug, PartialEq)]
pub enum Input {
    /// A line with at least one non-blank character
    Line(String),
    /// A blank line, to be ignored (in the main loop)
    Empty,
    /// No more input will come.
    Eof,
}

/// **Prints `label` and reads one line of input.**
///
/// A failed read is reported and treated as the end of input.
///
/// # Errors
/// The prompt can't be written to `output`.
pub fn read_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Input> {
    write!(output, "\n{label}")?;
    output.flush()?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) => Ok(Input::Eof),
        Ok(_) if line.trim().is_empty() => Ok(Input::Empty),
        Ok(_) => Ok(Input::Line(line)),
        Err(err) => {
            eprintln!("[ERROR] Failed to read line: {}", err);
            Ok(Input::Eof)
        }
    }
}

/// **Parses `<routing number> <account number>` out of command words**
///
/// The numbers aren't checked here; the service does that.
///
/// Returns `None` if the count of words is wrong.
pub fn parse_request(words: &[&str]) -> Option<ValidationRequest> {
    match words {
        [routing_number, account_number] => {
            Some(ValidationRequest::new(routing_number, account_number))
        }
        _ => None,
    }
}
