//! The YAML shape of a formula.
//!
//! `serde-saphyr` has no generic value type, so formulas are read through
//! a dedicated visitor: a string is a variable name, and a mapping with a
//! single `not`, `or`, or `implies` key holds the operand list. Operand
//! counts and names are checked later, when the raw tree is turned into an
//! [`Expression`] through [`build`], so the error names the formula rather
//! than a YAML position deep inside it.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, IgnoredAny, MapAccess, Visitor};

use crate::expr::{ExprError, Expression, NodeKind, build};

/// A connective key in a compound formula mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConnectiveKey {
    Not,
    Or,
    Implies,
}

impl ConnectiveKey {
    const fn node_kind(self) -> NodeKind {
        match self {
            Self::Not => NodeKind::Not,
            Self::Or => NodeKind::Or,
            Self::Implies => NodeKind::Implies,
        }
    }
}

/// A formula as written, before names and arities are checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RawFormula {
    Variable(String),
    Compound {
        connective: ConnectiveKey,
        operands: Vec<Self>,
    },
}

impl RawFormula {
    /// Builds the checked expression tree.
    pub(crate) fn to_expression(&self) -> Result<Expression, ExprError> {
        match self {
            Self::Variable(name) => Expression::var(name),
            Self::Compound {
                connective,
                operands,
            } => {
                let children = operands
                    .iter()
                    .map(Self::to_expression)
                    .collect::<Result<Vec<_>, _>>()?;
                build(connective.node_kind(), children)
            }
        }
    }
}

impl<'de> Deserialize<'de> for RawFormula {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(RawFormulaVisitor)
    }
}

const SINGLE_KEY: &str = "a formula mapping must have exactly one key (not, or, or implies)";

struct RawFormulaVisitor;

impl<'de> Visitor<'de> for RawFormulaVisitor {
    type Value = RawFormula;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(
            "a variable name or a single-key mapping \
             from not, or, or implies to its operands",
        )
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RawFormula::Variable(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(RawFormula::Variable(v))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some(connective) = map.next_key::<ConnectiveKey>()? else {
            return Err(de::Error::custom(SINGLE_KEY));
        };
        let operands: Vec<RawFormula> = map.next_value()?;
        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(SINGLE_KEY));
        }
        Ok(RawFormula::Compound {
            connective,
            operands,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{implies, not, or, var};

    fn variable(name: &str) -> RawFormula {
        RawFormula::Variable(name.to_owned())
    }

    fn compound(connective: ConnectiveKey, operands: Vec<RawFormula>) -> RawFormula {
        RawFormula::Compound {
            connective,
            operands,
        }
    }

    #[test]
    fn nested_raw_formula_builds_expression() {
        let raw = compound(
            ConnectiveKey::Implies,
            vec![
                compound(ConnectiveKey::Or, vec![variable("p"), variable("p")]),
                compound(ConnectiveKey::Not, vec![variable("p")]),
            ],
        );
        assert_eq!(
            raw.to_expression(),
            Ok(implies(or(var("p"), var("p")), not(var("p"))))
        );
    }

    #[test]
    fn wrong_operand_count_is_malformed() {
        let raw = compound(ConnectiveKey::Or, vec![variable("p")]);
        assert!(matches!(
            raw.to_expression(),
            Err(ExprError::Arity {
                node: "or",
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn nested_bad_name_is_reported() {
        let raw = compound(ConnectiveKey::Not, vec![variable("v")]);
        assert!(matches!(
            raw.to_expression(),
            Err(ExprError::InvalidVariableName { .. })
        ));
    }
}
