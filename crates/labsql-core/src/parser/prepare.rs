//! Token preparation.

use crate::lexer::Token;

/// Prepares a token sequence for parsing.
///
/// Whitespace tokens are dropped and exactly one end-of-input sentinel is
/// appended. Sentinels already present are dropped too, so preparing a
/// prepared sequence returns it unchanged.
#[must_use]
pub fn prepare_tokens<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let mut prepared: Vec<Token> = tokens
        .into_iter()
        .filter(|token| !token.is_whitespace() && !token.is_eof())
        .collect();
    prepared.push(Token::eof());
    prepared
}
