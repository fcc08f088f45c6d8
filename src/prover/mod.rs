//! Proof search over a knowledge base of axioms and theorems.
//!
//! The pipeline is leaf-first: [`similarity`] shortlists known formulas by
//! shape, [`matcher`] checks that a target is an instance of a candidate,
//! and the strategies in [`strategy`] combine both against a
//! [`KnowledgeBase`]. [`prove`] runs the strategies in priority order.

mod config;
mod knowledge;
pub mod matcher;
mod search;
mod shared;
pub mod similarity;
pub mod strategy;

pub use config::ProverConfig;
pub use knowledge::{KnowledgeBase, Premise};
pub use matcher::{Substitution, match_into, match_pattern};
pub use search::{Proof, ProofOutcome, Strategy, prove};
pub use shared::SharedKnowledgeBase;
pub use similarity::{Shape, find_similar, similar};
pub use strategy::{try_chaining, try_detachment, try_substitution};
