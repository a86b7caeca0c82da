//! Column specifications.
//!
//! A specification binds a constraint list, semantic type, nullability
//! and a name matcher to a logical field. Repeating column groups
//! (`diag_01..diag_20`) are declared once with a pattern matcher and
//! resolved against the actual header at validation time.

use regex::Regex;

use crate::constraint::Constraint;
use crate::error::SchemaError;
use crate::value::{CoercionPolicy, SemanticType, Value};

/// How a specification identifies its column(s) in the dataset header.
#[derive(Debug, Clone)]
pub enum ColumnMatcher {
    /// A single fixed column name.
    Name(String),
    /// A repeating group: every header column fully matching the
    /// pattern is bound to this specification independently.
    Pattern { pattern: String, regex: Regex },
}

impl ColumnMatcher {
    /// The label used in diagnostics and summaries.
    pub fn label(&self) -> &str {
        match self {
            ColumnMatcher::Name(name) => name,
            ColumnMatcher::Pattern { pattern, .. } => pattern,
        }
    }

    pub fn matches(&self, column: &str) -> bool {
        match self {
            ColumnMatcher::Name(name) => name == column,
            ColumnMatcher::Pattern { regex, .. } => regex.is_match(column),
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, ColumnMatcher::Pattern { .. })
    }
}

/// Declarative specification for one logical column (or one repeating
/// column group).
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub matcher: ColumnMatcher,
    pub semantic_type: SemanticType,
    pub nullable: bool,
    pub unique: bool,
    pub constraints: Vec<Constraint>,
    /// Reference back to the external code-system definition,
    /// e.g. an NHS Data Dictionary element URL.
    pub description: Option<String>,
    pub coercion: CoercionPolicy,
}

impl ColumnSpec {
    /// Specification for a fixed named column. Nullable and coercing
    /// by default.
    pub fn new(name: &str, semantic_type: SemanticType) -> Self {
        Self {
            matcher: ColumnMatcher::Name(name.to_string()),
            semantic_type,
            nullable: true,
            unique: false,
            constraints: Vec::new(),
            description: None,
            coercion: CoercionPolicy::Coerce,
        }
    }

    /// Specification for a repeating column group named by a regex.
    /// The pattern is anchored so `diag_[0-9]{2}` does not also bind
    /// `eddiag_01`.
    pub fn pattern(pattern: &str, semantic_type: SemanticType) -> Result<Self, SchemaError> {
        let anchored = format!("^(?:{pattern})$");
        let regex = Regex::new(&anchored).map_err(|source| SchemaError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            matcher: ColumnMatcher::Pattern {
                pattern: pattern.to_string(),
                regex,
            },
            semantic_type,
            nullable: true,
            unique: false,
            constraints: Vec::new(),
            description: None,
            coercion: CoercionPolicy::Coerce,
        })
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn strict_type(mut self) -> Self {
        self.coercion = CoercionPolicy::Strict;
        self
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn range(mut self, min: Value, max: Value) -> Result<Self, SchemaError> {
        let constraint = Constraint::range(self.matcher.label(), min, max)?;
        self.constraints.push(constraint);
        Ok(self)
    }

    pub fn is_in<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.constraints.push(Constraint::is_in(codes));
        self
    }

    pub fn matches(mut self, pattern: &str) -> Result<Self, SchemaError> {
        self.constraints.push(Constraint::pattern(pattern)?);
        Ok(self)
    }

    /// The column name this spec requires to be present, or `None`
    /// for pattern specs and nullable fixed columns. Absence of a
    /// nullable fixed column is not a shape error; absence of a
    /// non-nullable one is.
    pub fn required_name(&self) -> Option<&str> {
        match &self.matcher {
            ColumnMatcher::Name(name) if !self.nullable => Some(name),
            _ => None,
        }
    }
}
