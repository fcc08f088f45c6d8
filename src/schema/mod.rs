//! Knowledge documents: axiom sets, goals, and prover settings in YAML.
//!
//! A knowledge file holds one or more YAML documents separated by `---`.
//! Each names a knowledge base, lists its axioms with a justification, and
//! may list goals to prove and a `Prover` recording policy. Formulas are
//! structured YAML: a variable is a plain string and a compound formula is
//! a single-key mapping from `not`, `or`, or `implies` to its operand list.
//!
//! Documents are deserialized using `serde-saphyr` with strict unknown-key
//! rejection and support for both TitleCase and lowercase key aliases.
//! Failures carry a [`SchemaDiagnostic`] pointing at the offending source
//! location.

mod diagnostic;
mod error;
mod formula;
mod identifier;
mod loader;
mod newtypes;
mod raw;
mod types;
mod validate;

pub use diagnostic::{SchemaDiagnostic, SchemaDiagnosticCode, SourceLocation};
pub use error::SchemaError;
pub use identifier::validate_identifier;
pub use loader::{load_knowledge_docs, load_knowledge_docs_with_source, load_knowledge_file};
pub use newtypes::KnowledgeBaseName;
pub use types::{Axiom, KnowledgeDoc};
