//! SQL statement AST types.

use core::fmt;

use super::expression::{Expression, Identifier};

/// A sub-query: `SELECT column [WHERE condition]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Select {
    /// The selected expression.
    pub column: Expression,
    /// WHERE clause.
    pub where_clause: Option<Expression>,
}

impl Select {
    /// Creates a new sub-query.
    #[must_use]
    pub const fn new(column: Expression, where_clause: Option<Expression>) -> Self {
        Self {
            column,
            where_clause,
        }
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SELECT {}", self.column)?;
        if let Some(where_clause) = &self.where_clause {
            write!(f, " WHERE {where_clause}")?;
        }
        Ok(())
    }
}

/// An INSERT of a single row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insert {
    /// Target table.
    pub table_name: Identifier,
    /// Row values, in source order.
    pub values: Vec<Expression>,
}

impl Insert {
    /// Creates a new INSERT statement.
    #[must_use]
    pub fn new(table_name: impl Into<String>, values: Vec<Expression>) -> Self {
        Self {
            table_name: Identifier::new(table_name),
            values,
        }
    }
}

impl fmt::Display for Insert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO {} VALUES (", self.table_name)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
