//! INSERT Parser
//!
//! A hand-written recursive descent parser with precedence climbing for
//! expressions.

mod error;
mod operator;
#[allow(clippy::module_inception)]
mod parser;
mod prepare;

pub use error::{ParseError, ParseErrorKind};
pub use operator::{is_multiplicative, lexeme_to_binary_operator};
pub use parser::Parser;
pub use prepare::prepare_tokens;
