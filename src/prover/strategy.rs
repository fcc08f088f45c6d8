//! The three proof strategies.
//!
//! Each strategy scans the knowledge base as it stood when the scan began,
//! axioms first. On success it records the target and returns the
//! [`Premise`] that fired; on failure it leaves the knowledge base
//! untouched.
//!
//! Detachment and chaining hand their side obligation (the antecedent, or
//! the bridging implication) to the substitution strategy only. Targets
//! whose side obligation needs detachment or chaining are therefore out of
//! reach.

use tracing::{debug, trace};

use super::knowledge::{KnowledgeBase, Premise};
use super::matcher::match_pattern;
use super::similarity::shortlist;
use crate::expr::Expression;

/// Proves `target` as an instance of a known formula.
///
/// Known formulas with the same shape as `target` are tried in order; the
/// first one that matches `target` as a pattern proves it.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::expr::Expression;
/// use logic_theorist::prover::{KnowledgeBase, Premise, try_substitution};
///
/// let p = Expression::var("p").unwrap();
/// let q = Expression::var("q").unwrap();
/// let mut kb = KnowledgeBase::new([Expression::implies(
///     Expression::or(p.clone(), p.clone()),
///     p,
/// )]);
/// let target = Expression::implies(Expression::or(q.clone(), q.clone()), q);
///
/// assert_eq!(try_substitution(&mut kb, &target), Some(Premise::Axiom(0)));
/// assert_eq!(kb.theorems(), &[target]);
/// ```
pub fn try_substitution(kb: &mut KnowledgeBase, target: &Expression) -> Option<Premise> {
    let premise = substitution_premise(kb, target)?;
    debug!(strategy = "substitution", target = %target, premise = %premise, "proved");
    kb.record(target.clone());
    Some(premise)
}

/// Proves `target` by modus ponens.
///
/// For each known implication `A -> B` whose consequent `B` matches
/// `target`, the antecedent `A` is handed to the substitution strategy. The
/// first antecedent proved that way proves `target`.
pub fn try_detachment(kb: &mut KnowledgeBase, target: &Expression) -> Option<Premise> {
    let candidates: Vec<(Premise, Expression)> = kb
        .entries()
        .filter_map(|(premise, known)| {
            let (antecedent, consequent) = known.as_implication()?;
            match_pattern(consequent, target).map(|_| (premise, antecedent.clone()))
        })
        .collect();
    trace!(strategy = "detachment", target = %target, candidates = candidates.len(), "scanning");

    for (premise, antecedent) in candidates {
        if prove_lemma(kb, &antecedent) {
            debug!(strategy = "detachment", target = %target, premise = %premise, "proved");
            kb.record(target.clone());
            return Some(premise);
        }
    }
    None
}

/// Proves the implication `target` by chaining.
///
/// For each known implication `A -> B` whose antecedent matches the
/// target's antecedent, the bridge `B -> C` (with `C` the target's
/// consequent) is handed to the substitution strategy. The first bridge
/// proved that way proves `target`. A target that is not an implication has
/// no candidates.
pub fn try_chaining(kb: &mut KnowledgeBase, target: &Expression) -> Option<Premise> {
    let (target_antecedent, target_consequent) = target.as_implication()?;
    let candidates: Vec<(Premise, Expression)> = kb
        .entries()
        .filter_map(|(premise, known)| {
            let (antecedent, consequent) = known.as_implication()?;
            match_pattern(antecedent, target_antecedent).map(|_| {
                let bridge = Expression::implies(consequent.clone(), target_consequent.clone());
                (premise, bridge)
            })
        })
        .collect();
    trace!(strategy = "chaining", target = %target, candidates = candidates.len(), "scanning");

    for (premise, bridge) in candidates {
        if prove_lemma(kb, &bridge) {
            debug!(strategy = "chaining", target = %target, premise = %premise, "proved");
            kb.record(target.clone());
            return Some(premise);
        }
    }
    None
}

/// Finds the first known formula of which `target` is an instance.
fn substitution_premise(kb: &KnowledgeBase, target: &Expression) -> Option<Premise> {
    let candidates = shortlist(target, kb.entries());
    trace!(strategy = "substitution", target = %target, candidates = candidates.len(), "scanning");
    candidates
        .into_iter()
        .find(|(_, candidate)| match_pattern(candidate, target).is_some())
        .map(|(premise, _)| premise)
}

/// Discharges a side obligation by substitution, recording it only when
/// the knowledge base keeps lemmas.
fn prove_lemma(kb: &mut KnowledgeBase, lemma: &Expression) -> bool {
    if kb.config().record_lemmas {
        try_substitution(kb, lemma).is_some()
    } else {
        substitution_premise(kb, lemma).is_some()
    }
}
