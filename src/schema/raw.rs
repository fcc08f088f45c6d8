//! Internal raw document types with source-location capture.
//!
//! These types mirror the public document shape but use
//! `serde_saphyr::Spanned` for selected fields so formula and validation
//! failures can be mapped back to line and column coordinates.

use serde::Deserialize;
use serde_saphyr::{Location, Spanned};

use super::formula::RawFormula;
use super::newtypes::KnowledgeBaseName;
use super::types::{Axiom, KnowledgeDoc};
use crate::expr::Expression;
use crate::prover::ProverConfig;

/// Raw knowledge document with location-carrying fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawKnowledgeDoc {
    #[serde(rename = "KnowledgeBase", alias = "knowledge_base")]
    pub(crate) name: Spanned<KnowledgeBaseName>,
    #[serde(rename = "About", alias = "about")]
    pub(crate) about: Spanned<String>,
    #[serde(rename = "Tags", alias = "tags", default)]
    pub(crate) tags: Vec<String>,
    #[serde(rename = "Prover", alias = "prover", default)]
    pub(crate) prover: ProverConfig,
    #[serde(rename = "Axioms", alias = "axioms")]
    pub(crate) axioms: Vec<RawAxiom>,
    #[serde(rename = "Goals", alias = "goals", default)]
    pub(crate) goals: Vec<Spanned<RawFormula>>,
}

/// Raw axiom with span-aware fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawAxiom {
    pub(crate) formula: Spanned<RawFormula>,
    pub(crate) because: Spanned<String>,
}

/// A formula that could not be built, with where it was written.
#[derive(Debug, Clone)]
pub(crate) struct FormulaFault {
    pub(crate) reason: String,
    pub(crate) location: Location,
}

impl RawKnowledgeDoc {
    /// Converts this raw document into the public document type, building
    /// every formula.
    pub(crate) fn to_knowledge_doc(&self) -> Result<KnowledgeDoc, FormulaFault> {
        let axioms = self
            .axioms
            .iter()
            .enumerate()
            .map(|(i, axiom)| {
                let formula = build_formula(&axiom.formula, &format!("Axiom {}", i + 1))?;
                Ok(Axiom {
                    formula,
                    because: axiom.because.value.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let goals = self
            .goals
            .iter()
            .enumerate()
            .map(|(i, goal)| build_formula(goal, &format!("Goal {}", i + 1)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(KnowledgeDoc {
            name: self.name.value.clone(),
            about: self.about.value.clone(),
            tags: self.tags.clone(),
            prover: self.prover,
            axioms,
            goals,
        })
    }

    /// Returns the canonical document-level fallback location.
    #[must_use]
    pub(crate) const fn name_location(&self) -> Location {
        self.name.referenced
    }

    /// Returns the best-effort field location for a validation error reason.
    #[must_use]
    pub(crate) fn location_for_validation_reason(&self, reason: &str) -> Location {
        self.location_for_reason(reason)
            .unwrap_or_else(|| self.name_location())
    }

    fn location_for_reason(&self, reason: &str) -> Option<Location> {
        if reason.starts_with("About must be non-empty") {
            return Some(self.about.referenced);
        }
        let index = indexed_error_position(reason, "Axiom ")?;
        let axiom = self.axioms.get(index)?;
        if reason.contains(": because ") {
            Some(axiom.because.referenced)
        } else {
            Some(axiom.formula.referenced)
        }
    }
}

fn build_formula(formula: &Spanned<RawFormula>, label: &str) -> Result<Expression, FormulaFault> {
    formula.value.to_expression().map_err(|error| FormulaFault {
        reason: format!("{label}: {error}"),
        location: formula.referenced,
    })
}

/// Parses indexed validation reason prefixes like `Axiom 2: …`.
fn indexed_error_position(reason: &str, prefix: &str) -> Option<usize> {
    let tail = reason.strip_prefix(prefix)?;
    let (raw_index, _) = tail.split_once(':')?;
    let parsed = raw_index.trim().parse::<usize>().ok()?;
    parsed.checked_sub(1)
}
