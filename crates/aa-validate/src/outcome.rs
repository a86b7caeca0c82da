//! Validation results: the partition, its diagnostics and the
//! human-readable summary used for data-quality triage.

use std::collections::BTreeMap;
use std::fmt;

use polars::prelude::{Column, DataFrame};
use serde::Serialize;

use aa_model::{ConstraintKind, RowDiagnostics};

use crate::error::Result;

/// The outcome of validating one dataset against one schema.
///
/// `accepted` and `rejected` are disjoint, order-preserving slices of
/// the input with its original column shape; `diagnostics` parallels
/// `rejected` row for row.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    pub schema_name: String,
    pub accepted: DataFrame,
    pub rejected: DataFrame,
    pub diagnostics: Vec<RowDiagnostics>,
}

impl ValidationOutcome {
    pub fn is_clean(&self) -> bool {
        self.rejected.height() == 0
    }

    /// Total recorded violations across all rejected rows.
    pub fn violation_count(&self) -> usize {
        self.diagnostics
            .iter()
            .map(|row| row.violations.len())
            .sum()
    }

    /// Violation counts grouped by column and constraint kind.
    pub fn summary(&self) -> ValidationSummary {
        let mut groups: BTreeMap<(String, ConstraintKind), u64> = BTreeMap::new();
        for row in &self.diagnostics {
            for violation in &row.violations {
                *groups
                    .entry((violation.column.clone(), violation.kind))
                    .or_default() += 1;
            }
        }
        ValidationSummary {
            schema_name: self.schema_name.clone(),
            accepted: self.accepted.height(),
            rejected: self.rejected.height(),
            groups: groups
                .into_iter()
                .map(|((column, kind), count)| SummaryGroup {
                    column,
                    kind,
                    count,
                })
                .collect(),
        }
    }

    /// Long-form diagnostics frame (one row per violation) for
    /// downstream triage tooling: row_index, column, check, value.
    pub fn failure_cases(&self) -> Result<DataFrame> {
        let mut row_index: Vec<u32> = Vec::new();
        let mut column: Vec<String> = Vec::new();
        let mut check: Vec<&'static str> = Vec::new();
        let mut value: Vec<String> = Vec::new();

        for row in &self.diagnostics {
            for violation in &row.violations {
                row_index.push(row.row_index as u32);
                column.push(violation.column.clone());
                check.push(violation.kind.as_str());
                value.push(violation.value.clone());
            }
        }

        Ok(DataFrame::new(vec![
            Column::new("row_index".into(), row_index),
            Column::new("column".into(), column),
            Column::new("check".into(), check),
            Column::new("value".into(), value),
        ])?)
    }
}

/// Counts of violations grouped by (column, constraint kind).
#[derive(Debug, Clone, Serialize)]
pub struct ValidationSummary {
    #[serde(rename = "schema")]
    pub schema_name: String,
    pub accepted: usize,
    pub rejected: usize,
    pub groups: Vec<SummaryGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryGroup {
    pub column: String,
    pub kind: ConstraintKind,
    pub count: u64,
}

impl fmt::Display for ValidationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} accepted, {} rejected",
            self.schema_name, self.accepted, self.rejected
        )?;
        for group in &self.groups {
            writeln!(
                f,
                "  {:<30} {:<14} {}",
                group.column,
                group.kind.as_str(),
                group.count
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aa_model::Violation;

    fn outcome_with(diagnostics: Vec<RowDiagnostics>) -> ValidationOutcome {
        let rejected_height = diagnostics.len();
        let ids: Vec<i64> = (0..rejected_height as i64).collect();
        ValidationOutcome {
            schema_name: "episode".to_string(),
            accepted: DataFrame::new(vec![Column::new("visit_id".into(), Vec::<i64>::new())])
                .unwrap(),
            rejected: DataFrame::new(vec![Column::new("visit_id".into(), ids)]).unwrap(),
            diagnostics,
        }
    }

    #[test]
    fn summary_groups_by_column_and_kind() {
        let outcome = outcome_with(vec![
            RowDiagnostics {
                row_index: 0,
                violations: vec![
                    Violation::new("admiage", ConstraintKind::Range, "17".into()),
                    Violation::new("gender", ConstraintKind::IsIn, "3".into()),
                ],
            },
            RowDiagnostics {
                row_index: 4,
                violations: vec![Violation::new("admiage", ConstraintKind::Range, "150".into())],
            },
        ]);

        let summary = outcome.summary();
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.groups.len(), 2);
        let age = summary
            .groups
            .iter()
            .find(|group| group.column == "admiage")
            .unwrap();
        assert_eq!(age.count, 2);

        let rendered = summary.to_string();
        assert!(rendered.contains("episode: 0 accepted, 2 rejected"));
        assert!(rendered.contains("admiage"));
        assert!(rendered.contains("range"));
    }

    #[test]
    fn failure_cases_is_one_row_per_violation() {
        let outcome = outcome_with(vec![RowDiagnostics {
            row_index: 3,
            violations: vec![
                Violation::new("admiage", ConstraintKind::Range, "17".into()),
                Violation::new("admitime", ConstraintKind::Pattern, "25:00".into()),
            ],
        }]);
        let cases = outcome.failure_cases().unwrap();
        assert_eq!(cases.height(), 2);
        let names: Vec<String> = cases
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(names, ["row_index", "column", "check", "value"]);
    }
}
