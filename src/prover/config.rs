//! Recording policy for a knowledge base.

use serde::Deserialize;

/// Controls how successful proofs are written back to the theorem store.
///
/// Deserializable so knowledge documents can carry it under `Prover`;
/// omitted fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ProverConfig {
    /// Skip recording a formula that is already a theorem.
    ///
    /// Defaults to `true`. With `false`, every success appends, so
    /// re-proving a theorem stores a duplicate.
    pub deduplicate: bool,

    /// Also record antecedents and bridge implications proved while
    /// detaching or chaining towards a different target.
    ///
    /// Defaults to `true`. With `false`, those inner formulas are checked
    /// but not stored.
    pub record_lemmas: bool,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            deduplicate: true,
            record_lemmas: true,
        }
    }
}
