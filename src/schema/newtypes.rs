//! Validated newtypes for document identifiers.

use std::fmt;

use serde::Deserialize;
use serde::de;

use super::error::SchemaError;
use super::identifier::validate_identifier;

/// A validated knowledge base name.
///
/// Construction (via deserialization or [`KnowledgeBaseName::new`])
/// ensures the contained string matches `^[A-Za-z_][A-Za-z0-9_]*$`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KnowledgeBaseName(String);

impl KnowledgeBaseName {
    /// Creates a new `KnowledgeBaseName` after validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::InvalidIdentifier`] if the string fails
    /// identifier validation.
    pub fn new(s: String) -> Result<Self, SchemaError> {
        validate_identifier(&s)?;
        Ok(Self(s))
    }

    /// Returns the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for KnowledgeBaseName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for KnowledgeBaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for KnowledgeBaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for KnowledgeBaseName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        validate_identifier(&s).map_err(de::Error::custom)?;
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn new_accepts_a_valid_name() {
        let name = KnowledgeBaseName::new("principia".to_owned()).expect("valid name");
        assert_eq!(name, "principia");
        assert_eq!(name.to_string(), "principia");
    }

    #[rstest]
    #[case::empty("", "must not be empty")]
    #[case::leading_digit("1k", "must match the pattern")]
    #[case::hyphen("my-axioms", "must match the pattern")]
    fn new_rejects_invalid_names(#[case] input: &str, #[case] fragment: &str) {
        let (identifier, reason) = match KnowledgeBaseName::new(input.to_owned()) {
            Err(SchemaError::InvalidIdentifier { identifier, reason }) => (identifier, reason),
            other => panic!("expected InvalidIdentifier for '{input}', got: {other:?}"),
        };
        assert_eq!(identifier, input);
        assert!(
            reason.contains(fragment),
            "expected '{fragment}' in reason, got: {reason}"
        );
    }
}
