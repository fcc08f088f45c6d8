//! Structural metrics over expression trees.
//!
//! [`Expression::depth`] and [`Expression::variables`] are the two shape
//! measurements the similarity filter compares. Both are total: every node
//! kind, negation included, has its own branch.

use indexmap::IndexSet;

use super::name::VarName;
use super::tree::Expression;

impl Expression {
    /// Returns the height of the tree; a lone variable has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Variable(_) => 1,
            Self::Negation(operand) => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Returns the distinct variable names in first-occurrence order.
    ///
    /// Equality on the returned set ignores order.
    #[must_use]
    pub fn variables(&self) -> IndexSet<&VarName> {
        let mut names = IndexSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables<'a>(&'a self, names: &mut IndexSet<&'a VarName>) {
        match self {
            Self::Variable(name) => {
                names.insert(name);
            }
            Self::Negation(operand) => operand.collect_variables(names),
            Self::Binary { left, right, .. } => {
                left.collect_variables(names);
                right.collect_variables(names);
            }
        }
    }
}
