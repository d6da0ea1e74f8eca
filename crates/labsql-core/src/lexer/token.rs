//! Token types shared by the lexer and the parser.

use core::fmt;

/// The classification of a lexeme.
///
/// Keywords are not a separate kind: `INSERT`, `VALUES` and friends are
/// identifiers at this layer and the parser recognizes them by lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenKind {
    /// A name: table names, column names and keywords.
    Identifier,
    /// A numeric literal, kept as text.
    Number,
    /// Whitespace or a comment.
    Whitespace,
    /// The synthetic end-of-input sentinel.
    EndOfFile,
    /// Any other character: punctuation and operators.
    Other,
}

impl TokenKind {
    /// Returns a human-readable name for the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Whitespace => "whitespace",
            Self::EndOfFile => "end of input",
            Self::Other => "symbol",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The literal source text of the token.
    pub lexeme: String,
}

impl Token {
    /// Lexeme carried by the end-of-input sentinel.
    pub const EOF_LEXEME: &'static str = "\0";

    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
        }
    }

    /// Creates an identifier token.
    #[must_use]
    pub fn identifier(lexeme: impl Into<String>) -> Self {
        Self::new(TokenKind::Identifier, lexeme)
    }

    /// Creates a number token.
    #[must_use]
    pub fn number(lexeme: impl Into<String>) -> Self {
        Self::new(TokenKind::Number, lexeme)
    }

    /// Creates a whitespace token.
    #[must_use]
    pub fn whitespace(lexeme: impl Into<String>) -> Self {
        Self::new(TokenKind::Whitespace, lexeme)
    }

    /// Creates a punctuation/operator token.
    #[must_use]
    pub fn other(lexeme: impl Into<String>) -> Self {
        Self::new(TokenKind::Other, lexeme)
    }

    /// Creates the end-of-input sentinel.
    #[must_use]
    pub fn eof() -> Self {
        Self::new(TokenKind::EndOfFile, Self::EOF_LEXEME)
    }

    /// Returns true if this is the end-of-input sentinel.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::EndOfFile)
    }

    /// Returns true if this token is whitespace or a comment.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace)
    }

    /// Returns true if the lexeme is exactly `lexeme`.
    #[must_use]
    pub fn is(&self, lexeme: &str) -> bool {
        self.lexeme == lexeme
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            f.write_str(self.kind.as_str())
        } else {
            write!(f, "{} `{}`", self.kind, self.lexeme)
        }
    }
}
