//! Post-deserialization semantic validation for knowledge documents.
//!
//! These checks enforce constraints that `serde` attributes cannot express,
//! such as "non-empty after trimming" and "at least one axiom". The entry
//! point is [`validate_knowledge_doc`], called by the loader once every
//! formula has been built.

use super::error::SchemaError;
use super::types::KnowledgeDoc;

/// Returns `true` if the string is empty or contains only whitespace.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Constructs a [`SchemaError::ValidationFailed`] for the given document.
fn fail(doc: &KnowledgeDoc, reason: String) -> SchemaError {
    SchemaError::ValidationFailed {
        knowledge_base: doc.name.to_string(),
        reason,
        diagnostic: None,
    }
}

/// Validates a knowledge document.
///
/// Checks applied (in order):
///
/// - `About` is non-empty after trimming.
/// - `Axioms` contains at least one axiom.
/// - Every axiom's `because` is non-empty after trimming.
///
/// # Errors
///
/// Returns [`SchemaError::ValidationFailed`] with the knowledge base name
/// and a deterministic reason string on the first violation.
pub(crate) fn validate_knowledge_doc(doc: &KnowledgeDoc) -> Result<(), SchemaError> {
    if is_blank(&doc.about) {
        return Err(fail(doc, "About must be non-empty after trimming".to_owned()));
    }

    if doc.axioms.is_empty() {
        return Err(fail(
            doc,
            "Axioms section must contain at least one axiom".to_owned(),
        ));
    }

    for (i, axiom) in doc.axioms.iter().enumerate() {
        if is_blank(&axiom.because) {
            return Err(fail(
                doc,
                format!("Axiom {}: because must be non-empty after trimming", i + 1),
            ));
        }
    }

    Ok(())
}
