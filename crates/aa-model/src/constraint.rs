//! Constraint primitives.
//!
//! Each constraint is a pure predicate over a single coerced cell
//! value. Missing values never fail a value-level constraint;
//! nullability is checked separately by the engine.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::value::Value;

/// Diagnostic tag identifying which kind of check a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintKind {
    /// The raw value could not be coerced to the column's semantic type.
    Type,
    /// A missing value in a non-nullable column.
    NotNull,
    Range,
    IsIn,
    Pattern,
    Unique,
    /// The dataset's column set itself did not match the schema.
    SchemaShape,
}

impl ConstraintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::Type => "type",
            ConstraintKind::NotNull => "not-null",
            ConstraintKind::Range => "range",
            ConstraintKind::IsIn => "is-in",
            ConstraintKind::Pattern => "pattern",
            ConstraintKind::Unique => "unique",
            ConstraintKind::SchemaShape => "schema-shape",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value-level check bound to a column specification.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// Inclusive on both ends. Missing values never fail.
    Range { min: Value, max: Value },
    /// Membership of the canonical string form in an allowed set.
    IsIn(BTreeSet<String>),
    /// Full match of the string form against a regex.
    Pattern(Regex),
}

impl Constraint {
    /// Build a range constraint, rejecting inverted or incomparable
    /// bounds at declaration time.
    pub fn range(column: &str, min: Value, max: Value) -> Result<Self, SchemaError> {
        match min.partial_cmp_value(&max) {
            Some(Ordering::Greater) => Err(SchemaError::InvalidRange {
                column: column.to_string(),
                min: min.canonical(),
                max: max.canonical(),
            }),
            Some(_) => Ok(Constraint::Range { min, max }),
            None => Err(SchemaError::IncomparableRange {
                column: column.to_string(),
            }),
        }
    }

    /// Build a set-membership constraint over code strings.
    pub fn is_in<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Constraint::IsIn(codes.into_iter().map(Into::into).collect())
    }

    /// Build a full-match pattern constraint. The regex is anchored so
    /// partial matches do not pass.
    pub fn pattern(pattern: &str) -> Result<Self, SchemaError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Constraint::Pattern(regex))
    }

    pub fn kind(&self) -> ConstraintKind {
        match self {
            Constraint::Range { .. } => ConstraintKind::Range,
            Constraint::IsIn(_) => ConstraintKind::IsIn,
            Constraint::Pattern(_) => ConstraintKind::Pattern,
        }
    }

    /// Evaluate the constraint against a coerced cell value.
    /// Missing always passes; nullability is the engine's concern.
    pub fn evaluate(&self, value: &Value) -> bool {
        if value.is_missing() {
            return true;
        }
        match self {
            Constraint::Range { min, max } => {
                let above_min = value
                    .partial_cmp_value(min)
                    .is_some_and(|ord| ord != Ordering::Less);
                let below_max = value
                    .partial_cmp_value(max)
                    .is_some_and(|ord| ord != Ordering::Greater);
                above_min && below_max
            }
            Constraint::IsIn(allowed) => allowed.contains(&value.canonical()),
            Constraint::Pattern(regex) => regex.is_match(&value.canonical()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = Constraint::range("admiage", Value::Int(18), Value::Int(130)).unwrap();
        assert!(range.evaluate(&Value::Int(18)));
        assert!(range.evaluate(&Value::Int(130)));
        assert!(!range.evaluate(&Value::Int(17)));
        assert!(!range.evaluate(&Value::Int(131)));
        assert!(range.evaluate(&Value::Float(18.0)));
        assert!(range.evaluate(&Value::Missing));
    }

    #[test]
    fn inverted_range_fails_at_declaration() {
        let err = Constraint::range("admiage", Value::Int(130), Value::Int(18)).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidRange { .. }));
    }

    #[test]
    fn incomparable_range_fails_at_declaration() {
        let err =
            Constraint::range("admidate", Value::Int(0), Value::Str("2022".into())).unwrap_err();
        assert!(matches!(err, SchemaError::IncomparableRange { .. }));
    }

    #[test]
    fn is_in_uses_canonical_form() {
        let gender = Constraint::is_in(["1", "2", "9", "X", "0"]);
        assert!(gender.evaluate(&Value::Str("1".into())));
        assert!(gender.evaluate(&Value::Int(1)));
        assert!(!gender.evaluate(&Value::Str("3".into())));
        assert!(gender.evaluate(&Value::Missing));
    }

    #[test]
    fn pattern_requires_full_match() {
        let time = Constraint::pattern("([01]?[0-9]|2[0-3]):[0-5][0-9]").unwrap();
        assert!(time.evaluate(&Value::Str("9:30".into())));
        assert!(time.evaluate(&Value::Str("23:59".into())));
        assert!(!time.evaluate(&Value::Str("24:00".into())));
        assert!(!time.evaluate(&Value::Str("9:30pm".into())));
    }

    #[test]
    fn invalid_pattern_fails_at_declaration() {
        let err = Constraint::pattern("[0-9{2}").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { .. }));
    }
}
