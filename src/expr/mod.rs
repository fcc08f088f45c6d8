//! Propositional expression trees.
//!
//! An [`Expression`] is a closed sum of variables, negations and binary
//! nodes. Variables carry a validated [`VarName`]; arity-checked
//! construction from a node kind and an operand list goes through
//! [`build`].

mod display;
mod error;
mod metrics;
mod name;
mod tree;

pub use error::ExprError;
pub(crate) use name::is_valid_name_pattern;
pub use name::{VarName, validate_var_name};
pub use tree::{Connective, Expression, NodeKind, build};
