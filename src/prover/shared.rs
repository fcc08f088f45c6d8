//! A knowledge base shared between threads.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::knowledge::KnowledgeBase;
use super::search::{ProofOutcome, prove};
use crate::expr::Expression;

/// A cloneable handle to one [`KnowledgeBase`] guarded by a single lock.
///
/// The lock is held for a whole proof attempt, so every scan and the
/// appends that follow it see one consistent snapshot, and concurrent
/// attempts are serialized.
#[derive(Debug, Clone, Default)]
pub struct SharedKnowledgeBase(Arc<Mutex<KnowledgeBase>>);

impl SharedKnowledgeBase {
    /// Wraps `kb` for shared use.
    #[must_use]
    pub fn new(kb: KnowledgeBase) -> Self {
        Self(Arc::new(Mutex::new(kb)))
    }

    /// Runs [`prove`] under the lock.
    #[must_use]
    pub fn prove(&self, target: &Expression) -> ProofOutcome {
        prove(&mut self.lock(), target)
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> KnowledgeBase {
        self.lock().clone()
    }

    /// Returns the number of theorems recorded so far.
    #[must_use]
    pub fn theorem_count(&self) -> usize {
        self.lock().theorems().len()
    }

    // Appends are single pushes, so a panic elsewhere never leaves the
    // store half-written and a poisoned lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, KnowledgeBase> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
