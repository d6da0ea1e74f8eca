//! # labsql-core
//!
//! The syntactic front end for single-row SQL `INSERT` statements.
//!
//! This crate provides:
//! - A token model and a hand-written lexer producing it
//! - Token preparation (whitespace removal, end-of-input sentinel)
//! - An LL(1) recursive descent parser with precedence climbing
//! - A closed AST that renders back to canonical SQL
//!
//! ## Parsing
//!
//! ```rust
//! use labsql_core::{Expression, Parser};
//!
//! let insert = Parser::parse_sql("INSERT INTO t VALUES (2 - 3 / 4, (SELECT x WHERE y))").unwrap();
//!
//! assert_eq!(insert.table_name.name, "t");
//! assert_eq!(
//!     insert.values[0],
//!     Expression::number("2").minus(Expression::number("3").divide(Expression::number("4")))
//! );
//! assert_eq!(insert.to_string(), "INSERT INTO t VALUES (2 - 3 / 4, (SELECT x WHERE y))");
//! ```
//!
//! ## Errors
//!
//! Parsing is all-or-nothing. The first token that does not fit the grammar
//! produces a [`ParseError`] carrying its position in the prepared token
//! sequence:
//!
//! ```rust
//! use labsql_core::{ParseErrorKind, Parser};
//!
//! let err = Parser::parse_sql("INSERT INTO t VALUES (1) EXTRA").unwrap_err();
//!
//! assert_eq!(err.kind, ParseErrorKind::TrailingInput);
//! assert_eq!(err.position, 7);
//! assert_eq!(err.found.lexeme, "EXTRA");
//! ```
//!
//! ## External tokenizers
//!
//! [`Parser::parse`] accepts any token sequence, so a different tokenizer can
//! feed the parser directly. It must not emit `EndOfFile` itself.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::{BinaryOperator, Expression, Identifier, Insert, Number, Select};
pub use lexer::{Lexer, Token, TokenKind, tokenize};
pub use parser::{ParseError, ParseErrorKind, Parser, prepare_tokens};
