//! Expression builders and generators shared by unit tests.

use proptest::prelude::*;

use crate::expr::Expression;

/// Builds a variable leaf, panicking on an invalid name.
pub(crate) fn var(name: &str) -> Expression {
    Expression::var(name).unwrap_or_else(|e| panic!("invalid test variable {name}: {e}"))
}

/// `not operand`.
pub(crate) fn not(operand: Expression) -> Expression {
    Expression::negation(operand)
}

/// `left v right`.
pub(crate) fn or(left: Expression, right: Expression) -> Expression {
    Expression::or(left, right)
}

/// `left -> right`.
pub(crate) fn implies(left: Expression, right: Expression) -> Expression {
    Expression::implies(left, right)
}

/// Generates expressions over the variables `p`, `q`, `r`, `s` up to a
/// small depth.
pub(crate) fn arb_expression() -> impl Strategy<Value = Expression> {
    let leaf = prop::sample::select(vec!["p", "q", "r", "s"]).prop_map(var);
    leaf.prop_recursive(4, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(not),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| or(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| implies(l, r)),
        ]
    })
}
