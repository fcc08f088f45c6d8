//! Error types for knowledge document loading and validation.

use camino::Utf8PathBuf;

use super::diagnostic::SchemaDiagnostic;

/// Errors that can occur when loading or validating knowledge documents.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// YAML deserialization failed (malformed YAML or schema mismatch).
    #[error("YAML deserialization failed: {message}")]
    Deserialize {
        /// The deserializer's message.
        message: String,
        /// Source-located diagnostic, when the parser reported a location.
        diagnostic: Option<Box<SchemaDiagnostic>>,
    },

    /// A knowledge base name failed lexical validation.
    #[error("invalid identifier '{identifier}': {reason}")]
    InvalidIdentifier {
        /// The identifier string that failed validation.
        identifier: String,
        /// A human-readable explanation of why the identifier is invalid.
        reason: String,
    },

    /// A formula could not be built (bad operand count or variable name).
    #[error("malformed formula in knowledge base '{knowledge_base}': {reason}")]
    MalformedFormula {
        /// The knowledge base containing the formula.
        knowledge_base: String,
        /// Which formula failed and why.
        reason: String,
        /// Source-located diagnostic for the formula.
        diagnostic: Option<Box<SchemaDiagnostic>>,
    },

    /// A structural constraint was violated after deserialization.
    #[error("validation failed for knowledge base '{knowledge_base}': {reason}")]
    ValidationFailed {
        /// The knowledge base that failed validation.
        knowledge_base: String,
        /// A human-readable explanation of the violation.
        reason: String,
        /// Source-located diagnostic for the violation.
        diagnostic: Option<Box<SchemaDiagnostic>>,
    },

    /// A knowledge file could not be read.
    #[error("failed to read knowledge file '{path}': {source}")]
    Io {
        /// The path, relative to the directory it was read from.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Returns the structured diagnostic attached to this error, if any.
    #[must_use]
    pub fn diagnostic(&self) -> Option<&SchemaDiagnostic> {
        match self {
            Self::Deserialize { diagnostic, .. }
            | Self::MalformedFormula { diagnostic, .. }
            | Self::ValidationFailed { diagnostic, .. } => diagnostic.as_deref(),
            Self::InvalidIdentifier { .. } | Self::Io { .. } => None,
        }
    }
}
