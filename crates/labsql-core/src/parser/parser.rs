//! INSERT statement parser implementation.

use super::error::{ParseError, ParseErrorKind};
use super::operator::{is_multiplicative, lexeme_to_binary_operator};
use super::prepare::prepare_tokens;
use crate::ast::{BinaryOperator, Expression, Identifier, Insert, Number, Select};
use crate::lexer::{Token, TokenKind, tokenize};

/// Recursive descent parser for single-row INSERT statements.
///
/// The grammar is LL(1): every decision looks at the current token only and
/// nothing is ever backtracked.
///
/// ```text
/// insert         := "INSERT" "INTO" IDENTIFIER "VALUES" "(" expressions ")"
/// expressions    := expression ("," expression)*
/// expression     := additive ("=" additive)*
/// additive       := multiplicative ("-" multiplicative)*
/// multiplicative := primary (("/" | "%") primary)*
/// primary        := "(" (select | expression) ")" | IDENTIFIER | NUMBER
/// select         := "SELECT" expression ("WHERE" expression)?
/// ```
pub struct Parser {
    /// Prepared tokens; the last one is always the end-of-input sentinel.
    tokens: Vec<Token>,
    /// Cursor into `tokens`.
    pos: usize,
}

impl Parser {
    /// Creates a parser over an already prepared token sequence.
    fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(Token::is_eof));
        Self { tokens, pos: 0 }
    }

    /// Parses a token sequence as one INSERT statement.
    ///
    /// Whitespace tokens are ignored. The whole sequence must be consumed.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` at the first token that does not fit the
    /// grammar, including any token left over after the statement.
    pub fn parse<I>(tokens: I) -> Result<Insert, ParseError>
    where
        I: IntoIterator<Item = Token>,
    {
        let mut parser = Self::new(prepare_tokens(tokens));
        tracing::trace!(tokens = parser.tokens.len(), "parsing INSERT statement");

        let result = parser.parse_insert().and_then(|insert| {
            parser.expect_eof()?;
            Ok(insert)
        });

        match &result {
            Ok(insert) => tracing::trace!(
                table = %insert.table_name,
                values = insert.values.len(),
                "parsed INSERT statement"
            ),
            Err(err) => tracing::debug!(position = err.position, error = %err, "parse failed"),
        }
        result
    }

    /// Tokenizes `input` and parses it as one INSERT statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not a valid INSERT statement.
    pub fn parse_sql(input: &str) -> Result<Insert, ParseError> {
        Self::parse(tokenize(input))
    }

    /// Parses `INSERT INTO table VALUES (expressions)`.
    fn parse_insert(&mut self) -> Result<Insert, ParseError> {
        self.expect("INSERT")?;
        self.expect("INTO")?;
        let table_name = self.parse_identifier()?;
        self.expect("VALUES")?;
        self.expect("(")?;
        let values = self.parse_expressions()?;
        self.expect(")")?;
        Ok(Insert { table_name, values })
    }

    /// Parses a comma-separated list of at least one expression.
    fn parse_expressions(&mut self) -> Result<Vec<Expression>, ParseError> {
        let mut expressions = vec![self.parse_expression()?];
        while self.skip_if(",") {
            expressions.push(self.parse_expression()?);
        }
        Ok(expressions)
    }

    /// Parses the equality level: `additive ("=" additive)*`.
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_additive()?;
        while self.skip_if("=") {
            let right = self.parse_additive()?;
            left = left.binary(BinaryOperator::Equal, right);
        }
        Ok(left)
    }

    /// Parses the additive level: `multiplicative ("-" multiplicative)*`.
    fn parse_additive(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_multiplicative()?;
        while self.skip_if("-") {
            let right = self.parse_multiplicative()?;
            left = left.binary(BinaryOperator::Minus, right);
        }
        Ok(left)
    }

    /// Parses the multiplicative level: `primary (("/" | "%") primary)*`.
    fn parse_multiplicative(&mut self) -> Result<Expression, ParseError> {
        let mut left = self.parse_primary()?;
        while is_multiplicative(&self.current().lexeme) {
            let operator = self.parse_binary_operator()?;
            let right = self.parse_primary()?;
            left = left.binary(operator, right);
        }
        Ok(left)
    }

    /// Parses a primary expression.
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        if self.skip_if("(") {
            let primary = if self.check("SELECT") {
                Expression::Select(Box::new(self.parse_select()?))
            } else {
                self.parse_expression()?
            };
            self.expect(")")?;
            return Ok(primary);
        }

        let kind = self.current().kind;
        match kind {
            TokenKind::Identifier => Ok(Expression::Identifier(self.parse_identifier()?)),
            TokenKind::Number => Ok(Expression::Number(self.parse_number()?)),
            _ => Err(self.error(
                ParseErrorKind::ExpectedPrimary,
                "a number, identifier, or parenthesized expression",
            )),
        }
    }

    /// Parses `SELECT expression [WHERE expression]`.
    fn parse_select(&mut self) -> Result<Select, ParseError> {
        self.expect("SELECT")?;
        let column = self.parse_expression()?;
        let where_clause = if self.skip_if("WHERE") {
            Some(self.parse_expression()?)
        } else {
            None
        };
        Ok(Select::new(column, where_clause))
    }

    /// Resolves and consumes the current binary operator.
    fn parse_binary_operator(&mut self) -> Result<BinaryOperator, ParseError> {
        let operator = lexeme_to_binary_operator(&self.current().lexeme)
            .ok_or_else(|| self.error(ParseErrorKind::ExpectedOperator, "a binary operator"))?;
        self.advance();
        Ok(operator)
    }

    fn parse_identifier(&mut self) -> Result<Identifier, ParseError> {
        self.check_kind(TokenKind::Identifier)?;
        let identifier = Identifier::new(self.current().lexeme.clone());
        self.advance();
        Ok(identifier)
    }

    fn parse_number(&mut self) -> Result<Number, ParseError> {
        self.check_kind(TokenKind::Number)?;
        let number = Number::new(self.current().lexeme.clone());
        self.advance();
        Ok(number)
    }

    // --- Helper methods ---

    /// Returns the token under the cursor.
    fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        debug_assert!(self.pos + 1 < self.tokens.len(), "advanced past end of input");
        self.pos += 1;
    }

    /// Checks if the current lexeme is exactly `lexeme`.
    fn check(&self, lexeme: &str) -> bool {
        self.current().is(lexeme)
    }

    /// Consumes the current token if its lexeme is `lexeme`.
    fn skip_if(&mut self, lexeme: &str) -> bool {
        if self.check(lexeme) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expects the current lexeme to be `lexeme` and consumes it.
    fn expect(&mut self, lexeme: &str) -> Result<(), ParseError> {
        if self.skip_if(lexeme) {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::UnexpectedLexeme, format!("`{lexeme}`")))
        }
    }

    /// Expects the current token to be of the given kind, without consuming it.
    fn check_kind(&self, kind: TokenKind) -> Result<(), ParseError> {
        if self.current().kind == kind {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::UnexpectedKind, kind.as_str()))
        }
    }

    /// Expects the end-of-input sentinel, without consuming it.
    fn expect_eof(&self) -> Result<(), ParseError> {
        if self.current().is_eof() {
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::TrailingInput, TokenKind::EndOfFile.as_str()))
        }
    }

    fn error(&self, kind: ParseErrorKind, expected: impl Into<String>) -> ParseError {
        ParseError::new(kind, expected, self.current().clone(), self.pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Result<Insert, ParseError> {
        Parser::parse_sql(sql)
    }

    fn id(name: &str) -> Expression {
        Expression::identifier(name)
    }

    fn num(literal: &str) -> Expression {
        Expression::number(literal)
    }

    #[test]
    fn test_simple_insert() {
        let insert = parse("INSERT INTO users VALUES (1, name)").unwrap();
        assert_eq!(insert.table_name.name, "users");
        assert_eq!(insert.values, vec![num("1"), id("name")]);
    }

    #[test]
    fn test_expression_precedence() {
        // 2 - 3 / 4 should be parsed as 2 - (3 / 4)
        let insert = parse("INSERT INTO t VALUES (2-3/4)").unwrap();
        assert_eq!(insert.values, vec![num("2").minus(num("3").divide(num("4")))]);
    }

    #[test]
    fn test_equality_chains_left() {
        let insert = parse("INSERT INTO t VALUES (a=b=c)").unwrap();
        assert_eq!(insert.values, vec![id("a").equal(id("b")).equal(id("c"))]);
    }

    #[test]
    fn test_subquery() {
        let insert = parse("INSERT INTO t VALUES ((SELECT x WHERE y))").unwrap();
        assert_eq!(insert.values, vec![Expression::select(id("x"), Some(id("y")))]);
    }

    #[test]
    fn test_parse_external_tokens() {
        let tokens = vec![
            Token::identifier("INSERT"),
            Token::whitespace(" "),
            Token::identifier("INTO"),
            Token::whitespace(" "),
            Token::identifier("t"),
            Token::identifier("VALUES"),
            Token::other("("),
            Token::number("7"),
            Token::other("%"),
            Token::number("2"),
            Token::other(")"),
        ];
        let insert = Parser::parse(tokens).unwrap();
        assert_eq!(insert, Insert::new("t", vec![num("7").modulo(num("2"))]));
    }

    #[test]
    fn test_trailing_input() {
        let err = parse("INSERT INTO t VALUES (1) EXTRA").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::TrailingInput);
        assert_eq!(err.position, 7);
        assert_eq!(err.found, Token::identifier("EXTRA"));
    }

    #[test]
    fn test_empty_values() {
        let err = parse("INSERT INTO t VALUES ()").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedPrimary);
        assert_eq!(err.position, 5);
        assert_eq!(err.found, Token::other(")"));
    }

    #[test]
    fn test_keyword_mismatch() {
        let err = parse("INSERT TO t VALUES (1)").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedLexeme);
        assert_eq!(err.position, 1);
        assert_eq!(err.expected, "`INTO`");
    }

    #[test]
    fn test_table_name_kind() {
        let err = parse("INSERT INTO 42 VALUES (1)").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedKind);
        assert_eq!(err.position, 2);
        assert_eq!(err.expected, "identifier");
    }

    #[test]
    fn test_binary_operator_resolution_fails_off_operator() {
        let mut parser = Parser::new(prepare_tokens(tokenize("+")));
        let err = parser.parse_binary_operator().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::ExpectedOperator);
        assert_eq!(err.position, 0);
        assert_eq!(parser.pos, 0);
    }

    #[test]
    fn test_binary_operator_resolution_consumes() {
        let mut parser = Parser::new(prepare_tokens(tokenize("= 1")));
        assert_eq!(parser.parse_binary_operator(), Ok(BinaryOperator::Equal));
        assert_eq!(parser.pos, 1);
    }

    #[test]
    fn test_skip_if_leaves_cursor_on_mismatch() {
        let mut parser = Parser::new(prepare_tokens(tokenize("a")));
        assert!(!parser.skip_if(","));
        assert_eq!(parser.pos, 0);
        assert!(parser.skip_if("a"));
        assert_eq!(parser.pos, 1);
        assert!(parser.current().is_eof());
    }

    #[test]
    fn test_expect_eof_does_not_advance() {
        let parser = Parser::new(prepare_tokens(Vec::<Token>::new()));
        assert!(parser.expect_eof().is_ok());
        assert_eq!(parser.pos, 0);
    }
}
