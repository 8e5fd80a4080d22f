use std::{fmt::Display, path::PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnmatchedCharacter { .. } => "UnmatchedCharacter",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnmatchedCharacter { character } => match character {
                c if c.is_ascii_lowercase() => ErrorTip::Suggestion(String::from(
                    "identifiers must begin with an uppercase letter",
                )),
                '"' | '\'' => ErrorTip::Suggestion(format!(
                    "literal opened with `{}` is not closed on this line",
                    character
                )),
                '.' => ErrorTip::Suggestion(String::from(
                    "a float literal needs digits on both sides of the point",
                )),
                _ => ErrorTip::None,
            },
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unmatched character: {character:?}")]
    UnmatchedCharacter { character: char },
}

/// Failures of the command-line driver. The scanner itself has none.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("error reading file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Receives one notification per unmatched character.
///
/// Reporting is fire-and-forget and cannot influence the scan.
pub trait DiagnosticSink {
    fn report(&mut self, error: Error);
}

/// Default sink: logs every diagnostic through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn report(&mut self, error: Error) {
        let position = error.get_position();
        match error.get_error() {
            ErrorImpl::UnmatchedCharacter { character } => warn!(
                line = position.line,
                column = position.column,
                character = %character.escape_debug(),
                "unrecognized character"
            ),
        }
    }
}

impl DiagnosticSink for Vec<Error> {
    fn report(&mut self, error: Error) {
        self.push(error);
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &mut T {
    fn report(&mut self, error: Error) {
        (**self).report(error);
    }
}

/// Returns the text of the 1-based `line`, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a diagnostic against the buffer it came from.
///
/// ```text
/// Error: UnmatchedCharacter (identifiers must begin with an uppercase letter)
///   |
/// 2 | declare x = 5;
///   | --------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }

    let line_text = get_line(source, position.line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);

    out.push_str(&format!("{:>padding$}\n", "|"));
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (&string[start..], start)
}
