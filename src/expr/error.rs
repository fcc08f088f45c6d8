//! Error types for expression construction.

/// Errors raised while building an [`Expression`](super::Expression).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// A node received the wrong number of operands for its kind.
    #[error("malformed expression: {node} expects {expected} operand(s), found {found}")]
    Arity {
        /// The node kind being built (`variable`, `not`, `or`, `implies`).
        node: &'static str,
        /// The number of operands the node kind requires.
        expected: usize,
        /// The number of operands supplied.
        found: usize,
    },

    /// A variable name failed lexical or reserved-word validation.
    #[error("invalid variable name '{name}': {reason}")]
    InvalidVariableName {
        /// The name that failed validation.
        name: String,
        /// A human-readable explanation of why the name is invalid.
        reason: String,
    },
}
