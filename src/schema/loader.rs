//! Multi-document knowledge file loading.
//!
//! Provides [`load_knowledge_docs`], which deserializes one or more YAML
//! documents from a single string, builds every formula, and enforces
//! structural constraints, and [`load_knowledge_file`], which does the same
//! for a file read through a `cap-std` directory capability.

use camino::Utf8Path;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use super::diagnostic::{SchemaDiagnostic, SchemaDiagnosticCode, SourceLocation};
use super::error::SchemaError;
use super::raw::{FormulaFault, RawKnowledgeDoc};
use super::types::KnowledgeDoc;
use super::validate::validate_knowledge_doc;

/// Synthetic source identifier used by [`load_knowledge_docs`].
const INLINE_SOURCE: &str = "<inline>";

/// Loads one or more knowledge documents from a YAML string.
///
/// Documents are separated by `---`. Each is deserialized with strict
/// unknown-key rejection, its formulas are built with operand counts and
/// variable names checked, and then it is validated: non-blank `About`, at
/// least one axiom, and a non-blank `because` for every axiom.
///
/// # Errors
///
/// Returns [`SchemaError::Deserialize`] if the YAML is malformed or does
/// not match the document schema, [`SchemaError::MalformedFormula`] if a
/// formula cannot be built, and [`SchemaError::ValidationFailed`] if a
/// structural constraint is violated.
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
/// "#;
/// let docs = load_knowledge_docs(yaml).unwrap();
/// assert_eq!(docs.len(), 1);
/// ```
pub fn load_knowledge_docs(input: &str) -> Result<Vec<KnowledgeDoc>, SchemaError> {
    load_knowledge_docs_with_source(INLINE_SOURCE, input)
}

/// Loads knowledge documents from YAML and records diagnostics against an
/// explicit source identifier.
///
/// This function behaves like [`load_knowledge_docs`] but associates
/// parser, formula, and validator diagnostics with `source`.
///
/// # Errors
///
/// Returns [`SchemaError::Deserialize`], [`SchemaError::MalformedFormula`],
/// or [`SchemaError::ValidationFailed`] as described on
/// [`load_knowledge_docs`].
pub fn load_knowledge_docs_with_source(
    source: &str,
    input: &str,
) -> Result<Vec<KnowledgeDoc>, SchemaError> {
    let raw_docs: Vec<RawKnowledgeDoc> = serde_saphyr::from_multiple(input).map_err(|error| {
        let message = error.to_string();
        let diagnostic = error
            .location()
            .map(|location| parse_diagnostic(source, &message, location))
            .map(Box::new);
        SchemaError::Deserialize {
            message,
            diagnostic,
        }
    })?;

    let mut docs = Vec::with_capacity(raw_docs.len());
    for raw_doc in raw_docs {
        let doc = raw_doc
            .to_knowledge_doc()
            .map_err(|fault| malformed_formula(source, &raw_doc, fault))?;
        validate_knowledge_doc(&doc)
            .map_err(|error| attach_validation_diagnostic(error, source, &raw_doc))?;
        debug!(
            source,
            knowledge_base = %doc.name,
            axioms = doc.axioms.len(),
            goals = doc.goals.len(),
            "loaded knowledge document"
        );
        docs.push(doc);
    }

    Ok(docs)
}

/// Loads knowledge documents from `path` inside `dir`.
///
/// The path is used as the diagnostic source.
///
/// # Errors
///
/// Returns [`SchemaError::Io`] if the file cannot be read, otherwise the
/// errors of [`load_knowledge_docs`].
pub fn load_knowledge_file(dir: &Dir, path: &Utf8Path) -> Result<Vec<KnowledgeDoc>, SchemaError> {
    let input = dir.read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.to_owned(),
        source,
    })?;
    load_knowledge_docs_with_source(path.as_str(), &input)
}

fn malformed_formula(source: &str, raw_doc: &RawKnowledgeDoc, fault: FormulaFault) -> SchemaError {
    let diagnostic = SchemaDiagnostic {
        code: SchemaDiagnosticCode::MalformedFormula,
        location: location_for_source(source, fault.location),
        message: fault.reason.clone(),
    };
    SchemaError::MalformedFormula {
        knowledge_base: raw_doc.name.value.to_string(),
        reason: fault.reason,
        diagnostic: Some(Box::new(diagnostic)),
    }
}

fn attach_validation_diagnostic(
    error: SchemaError,
    source: &str,
    raw_doc: &RawKnowledgeDoc,
) -> SchemaError {
    match error {
        SchemaError::ValidationFailed {
            knowledge_base,
            reason,
            ..
        } => {
            let location = raw_doc.location_for_validation_reason(&reason);
            let diagnostic = SchemaDiagnostic {
                code: SchemaDiagnosticCode::ValidationFailure,
                location: location_for_source(source, location),
                message: reason.clone(),
            };
            SchemaError::ValidationFailed {
                knowledge_base,
                reason,
                diagnostic: Some(Box::new(diagnostic)),
            }
        }
        other => other,
    }
}

fn parse_diagnostic(
    source: &str,
    message: &str,
    location: serde_saphyr::Location,
) -> SchemaDiagnostic {
    SchemaDiagnostic {
        code: SchemaDiagnosticCode::ParseFailure,
        location: location_for_source(source, location),
        message: first_line(message),
    }
}

fn location_for_source(source: &str, location: serde_saphyr::Location) -> SourceLocation {
    let line = usize::try_from(location.line()).ok().unwrap_or(usize::MAX);
    let column = usize::try_from(location.column())
        .ok()
        .unwrap_or(usize::MAX);
    SourceLocation {
        source: source.to_owned(),
        line,
        column,
    }
}

fn first_line(message: &str) -> String {
    message.lines().next().unwrap_or(message).to_owned()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
