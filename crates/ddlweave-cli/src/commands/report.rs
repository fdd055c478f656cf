//! Error reporting shared by the commands.

use std::fmt::Display;
use std::ops::Range;

use ddlweave_lib::Error;
use ddlweave_lib::sqlite::{self, SqliteParser};

use super::input::Input;

/// An error, optionally tied to the statement of the script it came from.
#[derive(Debug)]
pub struct Failure {
    pub error: Error,
    pub statement: Option<Range<usize>>,
}

impl Failure {
    pub fn new(error: Error) -> Self {
        Self {
            error,
            statement: None,
        }
    }

    pub fn in_statement(error: Error, statement: Range<usize>) -> Self {
        Self {
            error,
            statement: Some(statement),
        }
    }

    /// Render against the script, as a snippet where the error has a location.
    pub fn render(&self, input: &Input, color: bool) -> String {
        let mut printer = self.error.printer().source(&input.text).colored(color);
        if let Some(range) = &self.statement {
            printer = printer.statement(range.clone());
        }
        if let Some(path) = &input.path {
            printer = printer.path(path);
        }

        if printer.has_snippet() {
            printer.render()
        } else {
            format!("error: {}", printer.render())
        }
    }

    pub fn exit(&self, input: &Input, color: bool) -> ! {
        tracing::debug!(error = ?self.error, "command failed");
        eprintln!("{}", self.render(input, color));
        std::process::exit(1);
    }
}

impl From<Error> for Failure {
    fn from(error: Error) -> Self {
        Self::new(error)
    }
}

/// Print `error: {message}` and exit with status 1.
pub fn exit_with(message: impl Display) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

/// The shared SQLite parser. A broken dialect is reported against its grammar.
pub fn dialect(color: bool) -> &'static SqliteParser {
    sqlite::parser().unwrap_or_else(|error| {
        let grammar = Input {
            text: sqlite::GRAMMAR.to_string(),
            path: Some("sqlite/grammar.lisp".to_string()),
        };
        Failure::new(error).exit(&grammar, color)
    })
}
