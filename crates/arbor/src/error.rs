use std::fmt;
use std::io;

use thiserror::Error;

/// Category of a parse, validation, or formatting failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    UnexpectedChar,
    InvalidNumber,
    InvalidNumberNan,
    InvalidNumberInfinity,
    UnterminatedString,
    InvalidStringChar,
    InvalidEscape,
    InvalidUnicode,
    ExpectedKey,
    ExpectedColon,
    ExpectedCommaOrBracket,
    ExpectedCommaOrBrace,
    InvalidValue,
    MaxNestingExceeded,
    UnexpectedContent,
    InvalidConfig,
}

/// Structured failure report shared by the parser, the validator, and the
/// formatter.
///
/// `line` and `column` are 1-based input coordinates; formatting diagnostics
/// carry `0, 0` since no input text is involved. `context` is a short window
/// of the input around the failure point, with `...` markers where the window
/// was truncated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub line: usize,
    pub column: usize,
    pub message: String,
    pub context: String,
}

impl Diagnostic {
    pub(crate) fn format_error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            line: 0,
            column: 0,
            message: message.into(),
            context: String::new(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "line {}, column {}: ", self.line, self.column)?;
        }
        f.write_str(&self.message)?;
        if !self.context.is_empty() {
            write!(f, " (near `{}`)", self.context)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("syntax error: {0}")]
    Syntax(Diagnostic),

    #[error("format error: {0}")]
    Format(Diagnostic),
}

impl Error {
    /// The structured diagnostic, when the failure came from parsing,
    /// validation, or formatting (I/O errors carry none).
    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Error::Io(_) => None,
            Error::Syntax(d) | Error::Format(d) => Some(d),
        }
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.diagnostic().map(|d| d.code)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
