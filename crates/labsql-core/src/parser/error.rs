//! Parser error types.

use core::fmt;

use crate::lexer::Token;

/// Where in the grammar a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A keyword or punctuation lexeme did not match.
    UnexpectedLexeme,
    /// The current token has the wrong kind.
    UnexpectedKind,
    /// No primary expression starts at the current token.
    ExpectedPrimary,
    /// The current lexeme is not a binary operator.
    ExpectedOperator,
    /// Input remains after a complete statement.
    TrailingInput,
}

impl ParseErrorKind {
    /// Returns a short description of the failure.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnexpectedLexeme => "unexpected token",
            Self::UnexpectedKind => "unexpected token kind",
            Self::ExpectedPrimary => "expected a number, identifier, or parenthesized expression",
            Self::ExpectedOperator => "expected a binary operator",
            Self::TrailingInput => "unexpected trailing input",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parse error.
///
/// `position` indexes the prepared token sequence, i.e. the input with
/// whitespace removed and the end-of-input sentinel appended.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found} at position {position}")]
pub struct ParseError {
    /// The grammar point that failed.
    pub kind: ParseErrorKind,
    /// Index of the offending token.
    pub position: usize,
    /// What the parser expected.
    pub expected: String,
    /// The token actually found.
    pub found: Token,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(
        kind: ParseErrorKind,
        expected: impl Into<String>,
        found: Token,
        position: usize,
    ) -> Self {
        Self {
            kind,
            position,
            expected: expected.into(),
            found,
        }
    }

    /// Returns the short description of the error kind.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.kind.as_str()
    }
}
