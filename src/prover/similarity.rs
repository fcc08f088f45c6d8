//! Shape-based pre-filter for candidate formulas.
//!
//! Two formulas are similar when they have the same depth and the same
//! number of distinct variables. Counting rather than comparing names keeps
//! renamed copies of a formula similar to each other. The test is cheap and
//! only necessary: similar formulas may still fail to match, since
//! connectives are not compared.
//!
//! The classic formulation compares the variable name sets instead, which
//! rejects `(q v q) -> q` as a candidate instance of `(p v p) -> p`.

use crate::expr::Expression;

/// The measurements compared by the similarity filter.
///
/// Computing a `Shape` once and testing many candidates against it avoids
/// re-measuring the target for every comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    depth: usize,
    variables: usize,
}

impl Shape {
    /// Measures `expr`.
    #[must_use]
    pub fn of(expr: &Expression) -> Self {
        Self {
            depth: expr.depth(),
            variables: expr.variables().len(),
        }
    }

    /// Returns the measured depth.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the number of distinct variables.
    #[must_use]
    pub const fn variables(&self) -> usize {
        self.variables
    }

    /// Returns `true` if `candidate` has the same measurements.
    #[must_use]
    pub fn admits(&self, candidate: &Expression) -> bool {
        Self::of(candidate) == *self
    }
}

/// Returns `true` if `a` and `b` have equal depth and the same number of
/// distinct variables.
#[must_use]
pub fn similar(a: &Expression, b: &Expression) -> bool {
    Shape::of(a).admits(b)
}

/// Returns the members of `pool` similar to `expr`, in pool order.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::expr::Expression;
/// use logic_theorist::prover::find_similar;
///
/// let p = Expression::var("p").unwrap();
/// let q = Expression::var("q").unwrap();
/// let pool = vec![
///     Expression::or(p.clone(), p.clone()),
///     Expression::implies(p.clone(), p.clone()),
///     Expression::or(p.clone(), q),
/// ];
/// let found = find_similar(&Expression::negation(p), &pool);
/// assert_eq!(found.len(), 2);
/// ```
pub fn find_similar<'p, I>(expr: &Expression, pool: I) -> Vec<&'p Expression>
where
    I: IntoIterator<Item = &'p Expression>,
{
    shortlist(expr, pool.into_iter().map(|candidate| ((), candidate)))
        .into_iter()
        .map(|((), candidate)| candidate)
        .collect()
}

/// Keyed form of [`find_similar`]: keeps each candidate's key alongside
/// it so callers can tell which entry survived the filter.
pub(crate) fn shortlist<'p, K, I>(expr: &Expression, pool: I) -> Vec<(K, &'p Expression)>
where
    I: IntoIterator<Item = (K, &'p Expression)>,
{
    let shape = Shape::of(expr);
    pool.into_iter()
        .filter(|(_, candidate)| shape.admits(candidate))
        .collect()
}
