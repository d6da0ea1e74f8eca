//! Abstract Syntax Tree (AST) types for the INSERT statement.

mod expression;
mod statement;

pub use expression::{BinaryOperator, Expression, Identifier, Number};
pub use statement::{Insert, Select};
