//! Public knowledge document types.

use super::newtypes::KnowledgeBaseName;
use crate::expr::Expression;
use crate::prover::{KnowledgeBase, ProofOutcome, ProverConfig, prove};

/// A single knowledge document parsed from YAML.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::schema::load_knowledge_docs;
///
/// let yaml = r#"
/// KnowledgeBase: principia
/// About: Principle of tautology
/// Axioms:
///   - formula: { implies: [ { or: [p, p] }, p ] }
///     because: Principia *1.2
/// Goals:
///   - { implies: [ { or: [q, q] }, q ] }
/// "#;
/// let docs = load_knowledge_docs(yaml).unwrap();
/// let doc = &docs[0];
/// let mut kb = doc.knowledge_base();
/// let outcomes = doc.prove_goals(&mut kb);
/// assert!(outcomes[0].is_proved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeDoc {
    /// Knowledge base name.
    pub name: KnowledgeBaseName,
    /// Human-readable description of the axiom set.
    pub about: String,
    /// Metadata tags for filtering and reporting.
    pub tags: Vec<String>,
    /// Recording policy for knowledge bases built from this document.
    pub prover: ProverConfig,
    /// Axioms in declaration order.
    pub axioms: Vec<Axiom>,
    /// Formulas to prove, in declaration order.
    pub goals: Vec<Expression>,
}

/// An axiom and the reason it is trusted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axiom {
    /// The axiom formula.
    pub formula: Expression,
    /// Human-readable justification (source, numbering, or intent).
    pub because: String,
}

impl KnowledgeDoc {
    /// Builds a fresh knowledge base from the axioms and `Prover` settings.
    #[must_use]
    pub fn knowledge_base(&self) -> KnowledgeBase {
        KnowledgeBase::with_config(
            self.axioms.iter().map(|axiom| axiom.formula.clone()),
            self.prover,
        )
    }

    /// Proves each goal in order against `kb`.
    ///
    /// Goals proved earlier are available to later ones.
    pub fn prove_goals(&self, kb: &mut KnowledgeBase) -> Vec<ProofOutcome> {
        self.goals.iter().map(|goal| prove(kb, goal)).collect()
    }
}
