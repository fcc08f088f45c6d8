//! Validated propositional variable names.
//!
//! Names must match the ASCII pattern `^[A-Za-z_][A-Za-z0-9_]*$` and must
//! not collide with a connective symbol used when rendering formulas.

use std::borrow::Borrow;
use std::fmt;

use super::error::ExprError;

/// Names that render identically to a connective symbol.
///
/// Disjunction prints as `v`, so a variable called `v` would make
/// `(v v v)` ambiguous.
const RESERVED_NAMES: &[&str] = &["v"];

/// Validates that a string is a legal variable name.
///
/// A name must:
/// - Match the pattern `^[A-Za-z_][A-Za-z0-9_]*$`.
/// - Not be a reserved connective symbol.
///
/// # Errors
///
/// Returns [`ExprError::InvalidVariableName`] if the string fails either
/// check.
///
/// # Examples
///
/// ```rust
/// use logic_theorist::expr::validate_var_name;
///
/// assert!(validate_var_name("p").is_ok());
/// assert!(validate_var_name("q_1").is_ok());
/// assert!(validate_var_name("v").is_err());
/// assert!(validate_var_name("1p").is_err());
/// ```
pub fn validate_var_name(s: &str) -> Result<(), ExprError> {
    if s.is_empty() {
        return Err(ExprError::InvalidVariableName {
            name: s.to_owned(),
            reason: "variable name must not be empty".to_owned(),
        });
    }

    if !is_valid_name_pattern(s) {
        return Err(ExprError::InvalidVariableName {
            name: s.to_owned(),
            reason: concat!(
                "must match the pattern ",
                "^[A-Za-z_][A-Za-z0-9_]*$ ",
                "(ASCII letters, digits, and underscores; ",
                "must not start with a digit)"
            )
            .to_owned(),
        });
    }

    if RESERVED_NAMES.contains(&s) {
        return Err(ExprError::InvalidVariableName {
            name: s.to_owned(),
            reason: "this name is the disjunction symbol and cannot be used as a variable"
                .to_owned(),
        });
    }

    Ok(())
}

/// Returns `true` if the string matches `^[A-Za-z_][A-Za-z0-9_]*$`.
pub(crate) fn is_valid_name_pattern(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// A validated propositional variable name.
///
/// Construction through [`VarName::new`] guarantees the contained string
/// passed [`validate_var_name`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarName(String);

impl VarName {
    /// Creates a new `VarName` after validating the input.
    ///
    /// # Errors
    ///
    /// Returns [`ExprError::InvalidVariableName`] if the string fails
    /// validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ExprError> {
        let owned = name.into();
        validate_var_name(&owned)?;
        Ok(Self(owned))
    }

    /// Returns the inner string as a slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for VarName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Borrow<str> for VarName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VarName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
