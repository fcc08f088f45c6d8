//! The proof-search entry point.

use std::fmt;

use tracing::debug;

use super::knowledge::{KnowledgeBase, Premise};
use super::strategy::{try_chaining, try_detachment, try_substitution};
use crate::expr::Expression;

/// A proof strategy, in the order [`prove`] tries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The target is an instance of a known formula.
    Substitution,
    /// Modus ponens from a known implication.
    Detachment,
    /// Transitivity through a known implication.
    Chaining,
}

impl Strategy {
    /// All strategies in priority order.
    pub const ALL: [Self; 3] = [Self::Substitution, Self::Detachment, Self::Chaining];

    /// Returns the stable lowercase name of the strategy.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Substitution => "substitution",
            Self::Detachment => "detachment",
            Self::Chaining => "chaining",
        }
    }

    /// Runs this strategy alone against `kb`.
    pub fn attempt(self, kb: &mut KnowledgeBase, target: &Expression) -> Option<Premise> {
        match self {
            Self::Substitution => try_substitution(kb, target),
            Self::Detachment => try_detachment(kb, target),
            Self::Chaining => try_chaining(kb, target),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a target was proved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proof {
    /// The strategy that succeeded.
    pub strategy: Strategy,
    /// The knowledge-base entry that fired: the matched formula for
    /// substitution, the scanned implication for detachment and chaining.
    pub premise: Premise,
}

/// The result of a proof search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProofOutcome {
    /// The target was proved and is now known to the knowledge base.
    Proved {
        /// The target formula.
        target: Expression,
        /// How it was proved.
        proof: Proof,
    },
    /// Every strategy was exhausted.
    NoProofFound {
        /// The target formula.
        target: Expression,
    },
}

impl ProofOutcome {
    /// Returns `true` if the target was proved.
    #[must_use]
    pub const fn is_proved(&self) -> bool {
        matches!(self, Self::Proved { .. })
    }

    /// Returns the proof, if any.
    #[must_use]
    pub const fn proof(&self) -> Option<Proof> {
        match self {
            Self::Proved { proof, .. } => Some(*proof),
            Self::NoProofFound { .. } => None,
        }
    }

    /// Returns the strategy that proved the target, if any.
    #[must_use]
    pub const fn strategy(&self) -> Option<Strategy> {
        match self {
            Self::Proved { proof, .. } => Some(proof.strategy),
            Self::NoProofFound { .. } => None,
        }
    }

    /// Returns the target this outcome is about.
    #[must_use]
    pub const fn target(&self) -> &Expression {
        match self {
            Self::Proved { target, .. } | Self::NoProofFound { target } => target,
        }
    }
}

impl fmt::Display for ProofOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Proved { target, proof } => write!(f, "proved by {}: {target}", proof.strategy),
            Self::NoProofFound { .. } => f.write_str("no proof found"),
        }
    }
}

/// Tries substitution, then detachment, then chaining, and reports the
/// first success.
///
/// On success the target is known to `kb` afterwards. A failed search
/// leaves `kb` unchanged.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::expr::Expression;
/// use logic_theorist::prover::{KnowledgeBase, Strategy, prove};
///
/// let p = Expression::var("p").unwrap();
/// let q = Expression::var("q").unwrap();
/// let mut kb = KnowledgeBase::new([Expression::implies(
///     Expression::or(p.clone(), p.clone()),
///     p,
/// )]);
///
/// let target = Expression::implies(Expression::or(q.clone(), q.clone()), q.clone());
/// let outcome = prove(&mut kb, &target);
/// assert_eq!(outcome.strategy(), Some(Strategy::Substitution));
/// assert_eq!(outcome.to_string(), "proved by substitution: ((q v q) -> q)");
///
/// assert!(!prove(&mut kb, &Expression::var("z").unwrap()).is_proved());
/// ```
pub fn prove(kb: &mut KnowledgeBase, target: &Expression) -> ProofOutcome {
    for strategy in Strategy::ALL {
        if let Some(premise) = strategy.attempt(kb, target) {
            return ProofOutcome::Proved {
                target: target.clone(),
                proof: Proof { strategy, premise },
            };
        }
    }
    debug!(target = %target, "no proof found");
    ProofOutcome::NoProofFound {
        target: target.clone(),
    }
}
