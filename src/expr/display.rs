//! Human-readable rendering of expressions.
//!
//! Variables print bare, negation as a `~` prefix, and binary nodes as a
//! parenthesised infix: `((p v p) -> p)`.

use std::fmt;

use super::tree::Expression;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Negation(operand) => write!(f, "~{operand}"),
            Self::Binary {
                connective,
                left,
                right,
            } => write!(f, "({left} {} {right})", connective.symbol()),
        }
    }
}
