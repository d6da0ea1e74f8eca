//! Expression AST types.

use core::fmt;

use super::Select;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    /// `=`
    Equal,
    /// `-`
    Minus,
    /// `/`
    Division,
    /// `%`
    Module,
}

impl BinaryOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::Minus => "-",
            Self::Division => "/",
            Self::Module => "%",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Equal => 1,
            Self::Minus => 2,
            Self::Division | Self::Module => 3,
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name, copied verbatim from its token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A numeric literal.
///
/// The literal is kept as written; interpreting it is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Number {
    /// The literal text.
    pub literal: String,
}

impl Number {
    /// Creates a new number literal.
    #[must_use]
    pub fn new(literal: impl Into<String>) -> Self {
        Self {
            literal: literal.into(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expression {
    /// A bare name.
    Identifier(Identifier),

    /// A numeric literal.
    Number(Number),

    /// A binary expression.
    BinaryOperation {
        /// Left operand.
        left: Box<Self>,
        /// Operator.
        operator: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },

    /// A parenthesized sub-query.
    Select(Box<Select>),
}

impl Expression {
    /// Creates a new identifier expression.
    #[must_use]
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// Creates a new number literal expression.
    #[must_use]
    pub fn number(literal: impl Into<String>) -> Self {
        Self::Number(Number::new(literal))
    }

    /// Creates a sub-query expression.
    #[must_use]
    pub fn select(column: Self, where_clause: Option<Self>) -> Self {
        Self::Select(Box::new(Select::new(column, where_clause)))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, operator: BinaryOperator, right: Self) -> Self {
        Self::BinaryOperation {
            left: Box::new(self),
            operator,
            right: Box::new(right),
        }
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn equal(self, right: Self) -> Self {
        self.binary(BinaryOperator::Equal, right)
    }

    /// Creates a subtraction expression.
    #[must_use]
    pub fn minus(self, right: Self) -> Self {
        self.binary(BinaryOperator::Minus, right)
    }

    /// Creates a division expression.
    #[must_use]
    pub fn divide(self, right: Self) -> Self {
        self.binary(BinaryOperator::Division, right)
    }

    /// Creates a remainder expression.
    #[must_use]
    pub fn modulo(self, right: Self) -> Self {
        self.binary(BinaryOperator::Module, right)
    }

    /// Returns the precedence of the top-level operator, or `None` for
    /// expressions that never need parentheses.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::BinaryOperation { operator, .. } => Some(operator.precedence()),
            Self::Identifier(_) | Self::Number(_) | Self::Select(_) => None,
        }
    }

    /// Writes `operand`, parenthesized when it binds looser than `min`.
    fn fmt_operand(operand: &Self, min: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match operand.precedence() {
            Some(p) if p < min => write!(f, "({operand})"),
            _ => write!(f, "{operand}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let p = operator.precedence();
                Self::fmt_operand(left, p, f)?;
                write!(f, " {operator} ")?;
                // Left associative: an equal-precedence right operand keeps its parens.
                Self::fmt_operand(right, p + 1, f)
            }
            Self::Select(select) => write!(f, "({select})"),
        }
    }
}
