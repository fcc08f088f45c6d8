//! The append-only store of axioms and proved theorems.

use std::fmt;

use tracing::trace;

use super::config::ProverConfig;
use crate::expr::Expression;

/// Identifies one entry of a [`KnowledgeBase`] by section and index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Premise {
    /// The axiom at this zero-based index.
    Axiom(usize),
    /// The theorem at this zero-based index.
    Theorem(usize),
}

impl fmt::Display for Premise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Axiom(index) => write!(f, "axiom {index}"),
            Self::Theorem(index) => write!(f, "theorem {index}"),
        }
    }
}

/// Axioms fixed at construction plus the theorems proved since.
///
/// Nothing is ever removed. Lookups scan axioms first, then theorems, each
/// in insertion order, so the first entry to fire is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    axioms: Vec<Expression>,
    theorems: Vec<Expression>,
    config: ProverConfig,
}

impl KnowledgeBase {
    /// Creates a knowledge base over `axioms` with the default
    /// [`ProverConfig`] and no theorems.
    #[must_use]
    pub fn new(axioms: impl IntoIterator<Item = Expression>) -> Self {
        Self::with_config(axioms, ProverConfig::default())
    }

    /// Creates a knowledge base over `axioms` with an explicit recording
    /// policy.
    #[must_use]
    pub fn with_config(axioms: impl IntoIterator<Item = Expression>, config: ProverConfig) -> Self {
        Self {
            axioms: axioms.into_iter().collect(),
            theorems: Vec::new(),
            config,
        }
    }

    /// Returns the axioms in insertion order.
    #[must_use]
    pub fn axioms(&self) -> &[Expression] {
        &self.axioms
    }

    /// Returns the proved theorems in the order they were recorded.
    #[must_use]
    pub fn theorems(&self) -> &[Expression] {
        &self.theorems
    }

    /// Returns the recording policy.
    #[must_use]
    pub const fn config(&self) -> ProverConfig {
        self.config
    }

    /// Returns the total number of axioms and theorems.
    #[must_use]
    pub fn len(&self) -> usize {
        self.axioms.len() + self.theorems.len()
    }

    /// Returns `true` if there are neither axioms nor theorems.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty() && self.theorems.is_empty()
    }

    /// Returns `true` if `formula` is structurally equal to a known axiom
    /// or theorem.
    #[must_use]
    pub fn contains(&self, formula: &Expression) -> bool {
        self.axioms.contains(formula) || self.theorems.contains(formula)
    }

    /// Returns the entry named by `premise`.
    #[must_use]
    pub fn get(&self, premise: Premise) -> Option<&Expression> {
        match premise {
            Premise::Axiom(index) => self.axioms.get(index),
            Premise::Theorem(index) => self.theorems.get(index),
        }
    }

    /// Iterates over axioms then theorems, each tagged with its
    /// [`Premise`].
    pub fn entries(&self) -> impl Iterator<Item = (Premise, &Expression)> {
        let axioms = self
            .axioms
            .iter()
            .enumerate()
            .map(|(index, formula)| (Premise::Axiom(index), formula));
        let theorems = self
            .theorems
            .iter()
            .enumerate()
            .map(|(index, formula)| (Premise::Theorem(index), formula));
        axioms.chain(theorems)
    }

    /// Appends `formula` to the theorems.
    ///
    /// With deduplication on, a formula that is already a theorem is
    /// skipped. Axioms are not consulted, so a proved axiom still lands in
    /// the theorems once. Returns `true` if the store grew.
    pub(crate) fn record(&mut self, formula: Expression) -> bool {
        if self.config.deduplicate && self.theorems.contains(&formula) {
            trace!(formula = %formula, "already a theorem, not recorded");
            return false;
        }
        trace!(formula = %formula, index = self.theorems.len(), "recorded theorem");
        self.theorems.push(formula);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{implies, not, var};

    fn tautology() -> Expression {
        implies(var("p"), var("p"))
    }

    #[test]
    fn new_knowledge_base_has_no_theorems() {
        let kb = KnowledgeBase::new([tautology()]);
        assert_eq!(kb.axioms(), &[tautology()]);
        assert!(kb.theorems().is_empty());
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.config(), ProverConfig::default());
    }

    #[test]
    fn entries_list_axioms_before_theorems() {
        let mut kb = KnowledgeBase::new([tautology(), var("p")]);
        assert!(kb.record(not(var("q"))));
        let premises: Vec<Premise> = kb.entries().map(|(premise, _)| premise).collect();
        assert_eq!(
            premises,
            vec![Premise::Axiom(0), Premise::Axiom(1), Premise::Theorem(0)]
        );
        assert_eq!(kb.get(Premise::Theorem(0)), Some(&not(var("q"))));
        assert_eq!(kb.get(Premise::Theorem(1)), None);
    }

    #[test]
    fn record_skips_existing_theorems_when_deduplicating() {
        let mut kb = KnowledgeBase::new([tautology()]);
        assert!(kb.record(var("q")));
        assert!(!kb.record(var("q")));
        assert_eq!(kb.theorems(), &[var("q")]);
    }

    #[test]
    fn record_stores_an_axiom_once_as_a_theorem() {
        let mut kb = KnowledgeBase::new([tautology()]);
        assert!(kb.record(tautology()));
        assert!(!kb.record(tautology()));
        assert_eq!(kb.theorems(), &[tautology()]);
    }

    #[test]
    fn record_keeps_duplicates_without_deduplication() {
        let config = ProverConfig {
            deduplicate: false,
            ..ProverConfig::default()
        };
        let mut kb = KnowledgeBase::with_config([tautology()], config);
        assert!(kb.record(tautology()));
        assert!(kb.record(tautology()));
        assert_eq!(kb.theorems().len(), 2);
    }

    #[test]
    fn premise_renders_section_and_index() {
        assert_eq!(Premise::Axiom(0).to_string(), "axiom 0");
        assert_eq!(Premise::Theorem(3).to_string(), "theorem 3");
    }
}
