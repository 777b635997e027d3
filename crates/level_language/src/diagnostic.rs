//! Syntax diagnostics.
//!
//! Uses `thiserror` for the error vocabulary. The parser never stops at the
//! first problem; it collects [`Diagnostic`]s and keeps going, so a single
//! pass can report every independent mistake in a script.

use std::fmt::{self, Write};

use thiserror::Error;

use crate::span::Span;

/// How serious a diagnostic is. Syntax analysis only produces errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The script must not be executed.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
        }
    }
}

/// A construct that was opened but never closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Construct {
    /// `"...`
    String,
    /// `/* ...`
    Comment,
    /// `{ ...`
    Block,
    /// `( ...`
    Paren,
    /// `[ ...`
    Bracket,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::String => "string literal",
            Self::Comment => "block comment",
            Self::Block => "block",
            Self::Paren => "parenthesis",
            Self::Bracket => "bracket",
        })
    }
}

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SyntaxError {
    /// A character that starts no token.
    #[error("unrecognized character {found:?}")]
    UnrecognizedToken {
        /// The offending character.
        found: char,
    },

    /// A string escape other than `\" \\ \n \t \r`.
    #[error("invalid escape sequence \\{escape} in string literal")]
    InvalidEscape {
        /// The character after the backslash.
        escape: char,
    },

    /// A number literal too large for the numeric representation.
    #[error("number literal out of range")]
    NumberOutOfRange,

    /// A token that does not fit the grammar here.
    #[error("expected {}, found {found}", expected_list(.expected))]
    UnexpectedToken {
        /// Human-readable names of the acceptable tokens.
        expected: Vec<&'static str>,
        /// Description of the token actually found.
        found: String,
    },

    /// Input ended while something was still open.
    #[error("unterminated {kind} opened at {opened_at}")]
    UnterminatedConstruct {
        /// What was left open.
        kind: Construct,
        /// Where it was opened.
        opened_at: Span,
    },

    /// Statements or expressions nested past the configured limit.
    #[error("nesting too deep (limit is {limit})")]
    NestingTooDeep {
        /// The configured maximum depth.
        limit: usize,
    },

    /// The left side of `=` is not a variable or an indexed element.
    #[error("invalid assignment target")]
    InvalidAssignmentTarget,
}

fn expected_list(expected: &[&'static str]) -> String {
    match expected {
        [] => "something else".to_string(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// A located error report.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Always [`Severity::Error`] at this layer.
    pub severity: Severity,
    /// What went wrong.
    pub error: SyntaxError,
    /// Where it went wrong.
    pub span: Span,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    #[must_use]
    pub const fn error(error: SyntaxError, span: Span) -> Self {
        Self {
            severity: Severity::Error,
            error,
            span,
        }
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    /// 1-based line of the reported location.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.span.line
    }

    /// 1-based column of the reported location.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.span.column
    }

    /// Renders the diagnostic with the offending source line and a caret.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{self}");
        let line = self.span.line_text(source);
        let gutter = self.span.line.to_string();
        let _ = writeln!(out, "{gutter} | {line}");
        let indent = usize::try_from(self.span.column.saturating_sub(1)).unwrap_or(0);
        let first_line = self.span.text(source).lines().next().unwrap_or_default();
        let width = first_line.chars().count().max(1);
        let _ = write!(
            out,
            "{} | {}{}",
            " ".repeat(gutter.len()),
            " ".repeat(indent),
            "^".repeat(width)
        );
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}: {}", self.severity, self.span, self.error)
    }
}

/// Returned by the `Result`-based entry points when a script has syntax
/// errors.
#[derive(Clone, Debug, Error)]
#[error("{}", summary(.diagnostics))]
pub struct Error {
    /// Every diagnostic, in the order they were reported. Never empty.
    pub diagnostics: Vec<Diagnostic>,
}

impl Error {
    /// Wraps a non-empty diagnostic list.
    #[must_use]
    pub const fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// The first reported diagnostic.
    #[must_use]
    pub fn first(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }
}

fn summary(diagnostics: &[Diagnostic]) -> String {
    match diagnostics {
        [] => "syntax error".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{first} (and {} more)", rest.len()),
    }
}

/// Convenience alias for the `Result`-based entry points.
pub type Result<T> = std::result::Result<T, Error>;
