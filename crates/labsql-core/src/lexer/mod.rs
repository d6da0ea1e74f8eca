//! SQL Lexer/Tokenizer
//!
//! This module defines the token model consumed by the parser and a
//! hand-written lexer that produces it from source text.

mod token;
mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::{Lexer, tokenize};
