//! Identifier validation for knowledge base names.
//!
//! Names must match the ASCII pattern `^[A-Za-z_][A-Za-z0-9_]*$`, the same
//! lexical rule as variable names, so they print and log unquoted.

use super::error::SchemaError;
use crate::expr::is_valid_name_pattern;

/// Validates that a string is a legal knowledge base name.
///
/// # Errors
///
/// Returns `SchemaError::InvalidIdentifier` if the string is empty or does
/// not match `^[A-Za-z_][A-Za-z0-9_]*$`.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::schema::validate_identifier;
///
/// assert!(validate_identifier("principia").is_ok());
/// assert!(validate_identifier("_scratch2").is_ok());
/// assert!(validate_identifier("2nd").is_err());
/// assert!(validate_identifier("my-axioms").is_err());
/// ```
pub fn validate_identifier(s: &str) -> Result<(), SchemaError> {
    if s.is_empty() {
        return Err(SchemaError::InvalidIdentifier {
            identifier: s.to_owned(),
            reason: "identifier must not be empty".to_owned(),
        });
    }

    if !is_valid_name_pattern(s) {
        return Err(SchemaError::InvalidIdentifier {
            identifier: s.to_owned(),
            reason: concat!(
                "must match the pattern ",
                "^[A-Za-z_][A-Za-z0-9_]*$ ",
                "(ASCII letters, digits, and underscores; ",
                "must not start with a digit)"
            )
            .to_owned(),
        });
    }

    Ok(())
}
