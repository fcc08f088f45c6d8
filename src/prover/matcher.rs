//! One-way structural matching of a pattern against a concrete formula.
//!
//! Only variables on the pattern side bind. Variables on the concrete side
//! are opaque subtrees, so there is no occurs-check and no unification.

use indexmap::IndexMap;

use crate::expr::{Expression, VarName};

/// Bindings from pattern variables to the subtrees they matched.
///
/// Bindings are kept in insertion order, which is the left-to-right order
/// of first occurrence in the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution(IndexMap<VarName, Expression>);

impl Substitution {
    /// Creates an empty substitution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the expression bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Expression> {
        self.0.get(name)
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&VarName, &Expression)> {
        self.0.iter()
    }

    /// Replaces every bound variable in `pattern` by its binding.
    ///
    /// Unbound variables are left in place.
    #[must_use]
    pub fn apply(&self, pattern: &Expression) -> Expression {
        match pattern {
            Expression::Variable(name) => self.0.get(name).unwrap_or(pattern).clone(),
            Expression::Negation(operand) => Expression::negation(self.apply(operand)),
            Expression::Binary {
                connective,
                left,
                right,
            } => Expression::binary(*connective, self.apply(left), self.apply(right)),
        }
    }
}

/// Extends `bindings` so that substituting into `pattern` yields
/// `concrete`.
///
/// A pattern variable seen for the first time binds to the concrete
/// subtree; a variable already bound only matches a structurally equal
/// subtree. Any other node must agree in kind and connective, and all its
/// children must match against one shared substitution.
///
/// On failure `bindings` may hold partial bindings from the attempt.
pub fn match_into(
    pattern: &Expression,
    concrete: &Expression,
    bindings: &mut Substitution,
) -> bool {
    match (pattern, concrete) {
        (Expression::Variable(name), _) => match bindings.0.get(name) {
            Some(bound) => bound == concrete,
            None => {
                bindings.0.insert(name.clone(), concrete.clone());
                true
            }
        },
        (Expression::Negation(pattern_operand), Expression::Negation(concrete_operand)) => {
            match_into(pattern_operand, concrete_operand, bindings)
        }
        (
            Expression::Binary {
                connective: pattern_connective,
                left: pattern_left,
                right: pattern_right,
            },
            Expression::Binary {
                connective: concrete_connective,
                left: concrete_left,
                right: concrete_right,
            },
        ) => {
            pattern_connective == concrete_connective
                && match_into(pattern_left, concrete_left, bindings)
                && match_into(pattern_right, concrete_right, bindings)
        }
        (Expression::Negation(_) | Expression::Binary { .. }, _) => false,
    }
}

/// Matches `pattern` against `concrete` starting from an empty
/// substitution.
///
/// Returns the bindings on success.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::expr::Expression;
/// use logic_theorist::prover::match_pattern;
///
/// let p = Expression::var("p").unwrap();
/// let a = Expression::var("a").unwrap();
/// let b = Expression::var("b").unwrap();
///
/// let pattern = Expression::or(p.clone(), p);
/// assert!(match_pattern(&pattern, &Expression::or(a.clone(), a.clone())).is_some());
/// assert!(match_pattern(&pattern, &Expression::or(a, b)).is_none());
/// ```
#[must_use]
pub fn match_pattern(pattern: &Expression, concrete: &Expression) -> Option<Substitution> {
    let mut bindings = Substitution::new();
    match_into(pattern, concrete, &mut bindings).then_some(bindings)
}
