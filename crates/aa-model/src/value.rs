//! Typed cell values and coercion into the declared semantic type.

use std::cmp::Ordering;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// The declared type of a column, per the data specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    Int64,
    Float64,
    Str,
    Date,
    Datetime,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SemanticType::Int64 => "int64",
            SemanticType::Float64 => "float64",
            SemanticType::Str => "str",
            SemanticType::Date => "date",
            SemanticType::Datetime => "datetime",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether raw cells are cast to the semantic type before checking,
/// or checking fails on any type mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoercionPolicy {
    #[default]
    Coerce,
    Strict,
}

/// A single cell after coercion to its column's semantic type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
    Datetime(NaiveDateTime),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Canonical string form used for set membership, pattern checks
    /// and diagnostics. Floats drop trailing zeros so `17.0` and `17`
    /// compare equal against a code set.
    pub fn canonical(&self) -> String {
        match self {
            Value::Int(v) => v.to_string(),
            Value::Float(v) => format_numeric(*v),
            Value::Str(v) => v.clone(),
            Value::Date(v) => v.format("%Y-%m-%d").to_string(),
            Value::Datetime(v) => v.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Value::Missing => String::new(),
        }
    }

    /// Parse a raw string into the given semantic type.
    /// Empty and whitespace-only strings parse to `Missing`.
    pub fn parse_str(raw: &str, ty: SemanticType) -> Option<Value> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(Value::Missing);
        }
        match ty {
            SemanticType::Int64 => trimmed.parse::<i64>().ok().map(Value::Int),
            SemanticType::Float64 => trimmed.parse::<f64>().ok().map(Value::Float),
            SemanticType::Str => Some(Value::Str(trimmed.to_string())),
            SemanticType::Date => parse_date(trimmed).map(Value::Date),
            SemanticType::Datetime => parse_datetime(trimmed).map(Value::Datetime),
        }
    }

    /// Ordering between two values of compatible semantic types.
    /// Int and Float compare numerically across variants.
    pub fn partial_cmp_value(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => (*a as f64).partial_cmp(b),
            (Value::Float(a), Value::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::Datetime(a), Value::Datetime(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Datetime(b)) => {
                Some(a.and_hms_opt(0, 0, 0)?.cmp(b))
            }
            (Value::Datetime(a), Value::Date(b)) => {
                Some(a.cmp(&b.and_hms_opt(0, 0, 0)?))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    // Datetime strings truncate to their date part.
    parse_datetime(raw).map(|dt| dt.date())
}

fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Formats a floating-point number as a string without a trailing
/// fractional part, so `17.0` and `17` compare equal.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}
