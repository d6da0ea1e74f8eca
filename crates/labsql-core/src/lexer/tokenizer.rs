//! SQL tokenizer implementation.

use super::{Token, TokenKind};

/// A lexer that splits SQL text into tokens.
///
/// The lexer never fails: every character of the input ends up in exactly
/// one token, so concatenating the lexemes reproduces the input. It never
/// produces an `EndOfFile` token; that sentinel belongs to token preparation.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Creates a token from start to current position.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, &self.input[self.start..self.pos])
    }

    fn scan_whitespace(&mut self) -> Token {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        self.make_token(TokenKind::Whitespace)
    }

    /// Scans a `-- ...` comment up to, not including, the newline.
    fn scan_line_comment(&mut self) -> Token {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        self.make_token(TokenKind::Whitespace)
    }

    /// Scans a `/* ... */` comment. An unterminated comment runs to the end.
    fn scan_block_comment(&mut self) -> Token {
        self.advance(); // *
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    break;
                }
                None => break,
                _ => {}
            }
        }
        self.make_token(TokenKind::Whitespace)
    }

    /// Scans a number, with an optional fractional part.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let rest = &self.input[self.pos..];
        let mut chars = rest.chars();
        if chars.next() == Some('.') && chars.next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        self.make_token(TokenKind::Number)
    }

    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        self.make_token(TokenKind::Identifier)
    }

    /// Scans the next token, or returns `None` at the end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        self.start = self.pos;
        let c = self.advance()?;

        let token = match c {
            c if c.is_whitespace() => self.scan_whitespace(),
            '-' if self.peek() == Some('-') => self.scan_line_comment(),
            '/' if self.peek() == Some('*') => self.scan_block_comment(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),
            _ => self.make_token(TokenKind::Other),
        };
        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Tokenizes the entire input.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(input).collect();
    tracing::trace!(bytes = input.len(), tokens = tokens.len(), "tokenized input");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    fn lexemes(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.lexeme).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_run_is_one_token() {
        assert_eq!(token_kinds("   \n\t  "), vec![TokenKind::Whitespace]);
    }

    #[test]
    fn test_insert_statement() {
        assert_eq!(
            lexemes("INSERT INTO t VALUES (1, x)"),
            vec![
                "INSERT", " ", "INTO", " ", "t", " ", "VALUES", " ", "(", "1", ",", " ", "x", ")"
            ]
        );
    }

    #[test]
    fn test_keywords_are_identifiers() {
        assert_eq!(
            token_kinds("SELECT WHERE"),
            vec![
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Identifier,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            lexemes("foo bar_baz _qux t1"),
            vec!["foo", " ", "bar_baz", " ", "_qux", " ", "t1"]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            tokenize("42 3.14 7."),
            vec![
                Token::number("42"),
                Token::whitespace(" "),
                Token::number("3.14"),
                Token::whitespace(" "),
                Token::number("7"),
                Token::other("."),
            ]
        );
    }

    #[test]
    fn test_number_followed_by_identifier() {
        assert_eq!(tokenize("2x"), vec![Token::number("2"), Token::identifier("x")]);
    }

    #[test]
    fn test_operators_are_single_characters() {
        assert_eq!(
            lexemes("a=b-c/d%e"),
            vec!["a", "=", "b", "-", "c", "/", "d", "%", "e"]
        );
        assert_eq!(token_kinds("<="), vec![TokenKind::Other, TokenKind::Other]);
    }

    #[test]
    fn test_single_line_comment() {
        assert_eq!(
            tokenize("a -- comment\nb"),
            vec![
                Token::identifier("a"),
                Token::whitespace(" "),
                Token::whitespace("-- comment"),
                Token::whitespace("\n"),
                Token::identifier("b"),
            ]
        );
    }

    #[test]
    fn test_multi_line_comment() {
        assert_eq!(
            tokenize("4/* two */2"),
            vec![
                Token::number("4"),
                Token::whitespace("/* two */"),
                Token::number("2"),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        assert_eq!(
            tokenize("a /* open"),
            vec![
                Token::identifier("a"),
                Token::whitespace(" "),
                Token::whitespace("/* open"),
            ]
        );
    }

    #[test]
    fn test_single_minus_is_an_operator() {
        assert_eq!(
            tokenize("2-3"),
            vec![Token::number("2"), Token::other("-"), Token::number("3")]
        );
    }

    #[test]
    fn test_unicode_identifier() {
        assert_eq!(tokenize("таблица"), vec![Token::identifier("таблица")]);
    }

    #[test]
    fn test_lexemes_reproduce_input() {
        let input = "INSERT INTO t VALUES ((SELECT x WHERE y = 1.5), a-b/c%d) -- tail\n";
        let rebuilt: String = lexemes(input).concat();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_never_emits_eof() {
        assert!(
            tokenize("INSERT INTO t VALUES (1)")
                .iter()
                .all(|t| !t.is_eof())
        );
    }
}
