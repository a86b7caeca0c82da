//! Structured diagnostics attached to rejected rows.

use serde::{Deserialize, Serialize};

use crate::constraint::ConstraintKind;

/// One recorded failure of one constraint against one cell (or
/// against the whole dataset, for shape errors).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Actual column name, or for shape errors the offending or
    /// missing column name.
    pub column: String,
    pub kind: ConstraintKind,
    /// String form of the offending raw value; empty for missing
    /// values and shape errors.
    pub value: String,
}

impl Violation {
    pub fn new(column: &str, kind: ConstraintKind, value: String) -> Self {
        Self {
            column: column.to_string(),
            kind,
            value,
        }
    }

    /// Synthetic dataset-scoped violation recorded when the column
    /// set itself does not match the schema.
    pub fn schema_shape(column: &str) -> Self {
        Self {
            column: column.to_string(),
            kind: ConstraintKind::SchemaShape,
            value: String::new(),
        }
    }
}

/// All violations accumulated by a single rejected row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowDiagnostics {
    /// Zero-based index of the row in the original dataset.
    pub row_index: usize,
    pub violations: Vec<Violation>,
}
