//! The expression tree and its constructors.

use super::error::ExprError;
use super::name::VarName;

/// A binary propositional connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Disjunction, rendered as `v`.
    Or,
    /// Material implication, rendered as `->`.
    Implies,
}

impl Connective {
    /// Returns the infix symbol used when rendering.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Or => "v",
            Self::Implies => "->",
        }
    }
}

/// A propositional formula.
///
/// Every node exclusively owns its children; expressions are never shared
/// and cannot contain cycles. Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// An atomic propositional symbol.
    Variable(VarName),
    /// `not operand`.
    Negation(Box<Self>),
    /// `left <connective> right`.
    Binary {
        /// The connective joining both sides.
        connective: Connective,
        /// Left operand (the antecedent of an implication).
        left: Box<Self>,
        /// Right operand (the consequent of an implication).
        right: Box<Self>,
    },
}

impl Expression {
    /// Creates a variable leaf from a validated name.
    #[must_use]
    pub const fn variable(name: VarName) -> Self {
        Self::Variable(name)
    }

    /// Creates a variable leaf, validating the name first.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InvalidVariableName`] if `name` is not a legal
    /// variable name.
    pub fn var(name: &str) -> Result<Self, ExprError> {
        VarName::new(name).map(Self::Variable)
    }

    /// Creates `not operand`.
    #[must_use]
    pub fn negation(operand: Self) -> Self {
        Self::Negation(Box::new(operand))
    }

    /// Creates a binary node.
    #[must_use]
    pub fn binary(connective: Connective, left: Self, right: Self) -> Self {
        Self::Binary {
            connective,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates `left v right`.
    #[must_use]
    pub fn or(left: Self, right: Self) -> Self {
        Self::binary(Connective::Or, left, right)
    }

    /// Creates `left -> right`.
    #[must_use]
    pub fn implies(left: Self, right: Self) -> Self {
        Self::binary(Connective::Implies, left, right)
    }

    /// Returns the antecedent and consequent when the top-level connective
    /// is an implication.
    #[must_use]
    pub fn as_implication(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Binary {
                connective: Connective::Implies,
                left,
                right,
            } => Some((left, right)),
            Self::Variable(_) | Self::Negation(_) | Self::Binary { .. } => None,
        }
    }
}

/// The kind of node requested from [`build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A variable leaf; takes no operands.
    Variable(VarName),
    /// Negation; takes exactly one operand.
    Not,
    /// Disjunction; takes exactly two operands.
    Or,
    /// Implication; takes exactly two operands.
    Implies,
}

impl NodeKind {
    /// Returns the stable label used in error messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Not => "not",
            Self::Or => "or",
            Self::Implies => "implies",
        }
    }

    /// Returns the number of operands this node kind requires.
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Variable(_) => 0,
            Self::Not => 1,
            Self::Or | Self::Implies => 2,
        }
    }
}

/// Builds an expression node from a kind and its operands.
///
/// The operand count must equal [`NodeKind::arity`]; anything else is
/// rejected here rather than surfacing later as a traversal fault.
///
/// # Errors
///
/// Returns [`ExprError::Arity`] when the operand count does not fit the
/// node kind.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::expr::{Expression, NodeKind, VarName, build};
///
/// let p = build(NodeKind::Variable(VarName::new("p").unwrap()), vec![]).unwrap();
/// let not_p = build(NodeKind::Not, vec![p.clone()]).unwrap();
/// assert_eq!(not_p, Expression::negation(p.clone()));
/// assert!(build(NodeKind::Implies, vec![p]).is_err());
/// ```
pub fn build(kind: NodeKind, operands: Vec<Expression>) -> Result<Expression, ExprError> {
    let arity_error = ExprError::Arity {
        node: kind.label(),
        expected: kind.arity(),
        found: operands.len(),
    };

    let built = match kind {
        NodeKind::Variable(name) => operands.is_empty().then_some(Expression::Variable(name)),
        NodeKind::Not => unary_node(operands),
        NodeKind::Or => binary_node(Connective::Or, operands),
        NodeKind::Implies => binary_node(Connective::Implies, operands),
    };
    built.ok_or(arity_error)
}

fn unary_node(operands: Vec<Expression>) -> Option<Expression> {
    let [operand]: [Expression; 1] = operands.try_into().ok()?;
    Some(Expression::negation(operand))
}

fn binary_node(connective: Connective, operands: Vec<Expression>) -> Option<Expression> {
    let [left, right]: [Expression; 2] = operands.try_into().ok()?;
    Some(Expression::binary(connective, left, right))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn p() -> Expression {
        Expression::var("p").expect("valid name")
    }

    fn q() -> Expression {
        Expression::var("q").expect("valid name")
    }

    #[test]
    fn build_variable_without_operands() {
        let name = VarName::new("p").expect("valid name");
        assert_eq!(build(NodeKind::Variable(name), vec![]), Ok(p()));
    }

    #[test]
    fn build_negation_with_one_operand() {
        assert_eq!(
            build(NodeKind::Not, vec![p()]),
            Ok(Expression::negation(p()))
        );
    }

    #[rstest]
    #[case::or(NodeKind::Or, Expression::or(p(), q()))]
    #[case::implies(NodeKind::Implies, Expression::implies(p(), q()))]
    fn build_binary_with_two_operands(#[case] kind: NodeKind, #[case] expected: Expression) {
        assert_eq!(build(kind, vec![p(), q()]), Ok(expected));
    }

    #[rstest]
    #[case::variable_with_child(
        NodeKind::Variable(VarName::new("p").expect("valid")),
        vec![q()],
        "variable expects 0 operand(s), found 1"
    )]
    #[case::negation_empty(NodeKind::Not, vec![], "not expects 1 operand(s), found 0")]
    #[case::negation_two(NodeKind::Not, vec![p(), q()], "not expects 1 operand(s), found 2")]
    #[case::or_missing_right(NodeKind::Or, vec![p()], "or expects 2 operand(s), found 1")]
    #[case::implies_three(
        NodeKind::Implies,
        vec![p(), q(), p()],
        "implies expects 2 operand(s), found 3"
    )]
    fn build_rejects_wrong_arity(
        #[case] kind: NodeKind,
        #[case] operands: Vec<Expression>,
        #[case] fragment: &str,
    ) {
        let msg = build(kind, operands)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(
            msg.contains(fragment),
            "expected '{fragment}' in error, got: {msg}"
        );
    }

    #[test]
    fn as_implication_splits_only_implications() {
        let imp = Expression::implies(p(), q());
        assert_eq!(imp.as_implication(), Some((&p(), &q())));
        assert_eq!(Expression::or(p(), q()).as_implication(), None);
        assert_eq!(Expression::negation(p()).as_implication(), None);
        assert_eq!(p().as_implication(), None);
    }
}
