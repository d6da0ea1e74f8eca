//! Operator lexeme resolution.

use crate::ast::BinaryOperator;

/// Converts a lexeme to a binary operator.
#[must_use]
pub fn lexeme_to_binary_operator(lexeme: &str) -> Option<BinaryOperator> {
    match lexeme {
        "/" => Some(BinaryOperator::Division),
        "%" => Some(BinaryOperator::Module),
        "-" => Some(BinaryOperator::Minus),
        "=" => Some(BinaryOperator::Equal),
        _ => None,
    }
}

/// Returns true if the lexeme is a multiplicative-level operator.
#[must_use]
pub fn is_multiplicative(lexeme: &str) -> bool {
    matches!(lexeme, "/" | "%")
}
