use core::fmt;

use thiserror::Error;

/// The reason a translation stopped.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// The lookahead character does not start any JSON value.
    #[error("invalid element")]
    InvalidElement,
    /// An object member does not start with a quoted key.
    #[error("expected '\"' at start of object key")]
    ExpectedPropertyName,
    /// An object key is not followed by `:`.
    #[error("expected ':' after object key")]
    ExpectedColon,
    /// An object is not terminated by `}`.
    #[error("expected '}}' at end of object")]
    ExpectedCloseBrace,
    /// An array is not terminated by `]`.
    #[error("expected ']' at end of array")]
    ExpectedCloseBracket,
    /// The input ended inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
    /// `true`, `false` or `null` was expected but not found.
    #[error("invalid literal")]
    InvalidLiteral,
    /// More arrays and objects are open at once than the configured
    /// maximum depth allows.
    #[error("nesting too deep")]
    NestingTooDeep,
    /// Non-whitespace input remains after the top-level value.
    #[error("unexpected content at end of input")]
    TrailingContent,
}

/// A failure raised by one of the grammar productions.
///
/// `position` is the character offset of the cursor when the production
/// gave up.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct TranslateError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Cursor offset, in characters, at the point of failure.
    pub position: usize,
}

impl TranslateError {
    pub(crate) fn new(kind: ErrorKind, position: usize) -> Self {
        Self { kind, position }
    }
}

/// One entry in the error list of a [`Translation`](crate::Translation).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorRecord {
    /// Cursor offset, in characters, at the point of failure.
    pub position: usize,
    /// The failure kind.
    pub kind: ErrorKind,
}

impl ErrorRecord {
    /// Human-readable message without the position prefix.
    #[must_use]
    pub fn message(&self) -> alloc::string::String {
        use alloc::string::ToString;
        self.kind.to_string()
    }
}

impl From<TranslateError> for ErrorRecord {
    fn from(err: TranslateError) -> Self {
        Self {
            position: err.position,
            kind: err.kind,
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at position {}: {}", self.position, self.kind)
    }
}

impl core::error::Error for ErrorRecord {}
