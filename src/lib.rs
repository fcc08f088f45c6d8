//! A small heuristic theorem prover for propositional logic.
//!
//! Formulas are built from variables, negation, disjunction and
//! implication. A [`prover::KnowledgeBase`] holds trusted axioms and the
//! theorems proved so far; [`prover::prove`] tries to establish a target by
//! substitution, detachment, or chaining against it. Axiom sets can also be
//! declared as YAML knowledge documents through [`schema`].

/// Propositional expression trees, variable names, and structural metrics.
pub mod expr;
/// Matching, the knowledge base, and the proof strategies.
pub mod prover;
/// YAML knowledge documents declaring axioms, goals, and prover settings.
pub mod schema;

#[cfg(test)]
mod test_support;
