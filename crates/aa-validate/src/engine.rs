//! The validation engine.
//!
//! `validate` evaluates every constraint of a schema against every
//! applicable row and column of a dataset, then partitions the rows
//! into accepted and rejected sets. Evaluation is exhaustive: a row
//! failing three constraints accrues three diagnostics, not one.

use std::collections::BTreeSet;

use polars::prelude::{Column, DataFrame};

use aa_core::{any_to_string, coerce, is_missing_value, take_rows};
use aa_model::{ColumnSpec, ConstraintKind, RowDiagnostics, Schema, Violation};

use crate::error::{Result, ValidateError};
use crate::outcome::ValidationOutcome;

/// Validate a dataset against a schema, partitioning its rows.
///
/// Errors are engine defects only (Polars failures, broken internal
/// invariants); data-quality findings always come back as diagnostics
/// on the rejected partition.
pub fn validate(df: &DataFrame, schema: &Schema) -> Result<ValidationOutcome> {
    let closure = resolve_closure(df, schema);

    if !closure.shape_issues.is_empty() {
        return reject_all(df, schema, &closure.shape_issues);
    }

    let mut row_violations: Vec<Vec<Violation>> = vec![Vec::new(); df.height()];

    // Per-cell evaluation over the resolved closure.
    for bound in &closure.bound {
        let series = df.column(&bound.column)?;
        evaluate_column(series, bound, &mut row_violations);
    }

    // Uniqueness is a whole-column scan for the at-most-one column
    // flagged unique.
    if let Some(spec) = schema.unique_spec()
        && let Some(bound) = closure
            .bound
            .iter()
            .find(|bound| spec.matcher.matches(&bound.column))
    {
        let series = df.column(&bound.column)?;
        evaluate_uniqueness(series, &bound.column, df.height(), &mut row_violations);
    }

    partition(df, schema, row_violations)
}

/// A column specification bound to an actual header column.
struct BoundColumn<'a> {
    column: String,
    spec: &'a ColumnSpec,
}

struct Closure<'a> {
    bound: Vec<BoundColumn<'a>>,
    shape_issues: Vec<String>,
}

/// Resolve the schema's column closure against the actual header.
///
/// Fixed names bind directly; pattern specs bind every matching header
/// column (zero matches is a legitimately absent group). Shape issues
/// are missing non-nullable fixed columns and, for strict schemas,
/// header columns outside the closure.
fn resolve_closure<'a>(df: &DataFrame, schema: &'a Schema) -> Closure<'a> {
    let header: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut bound = Vec::new();
    let mut shape_issues = Vec::new();
    let mut covered: BTreeSet<&str> = BTreeSet::new();

    for spec in schema.specs() {
        let mut matched_any = false;
        for column in &header {
            if spec.matcher.matches(column) {
                matched_any = true;
                covered.insert(column.as_str());
                bound.push(BoundColumn {
                    column: column.clone(),
                    spec,
                });
            }
        }
        if !matched_any
            && let Some(required) = spec.required_name()
        {
            shape_issues.push(required.to_string());
        }
    }

    if schema.is_strict() {
        for column in &header {
            if !covered.contains(column.as_str()) {
                shape_issues.push(column.clone());
            }
        }
    }

    Closure {
        bound,
        shape_issues,
    }
}

/// Shape errors cannot be attributed to any single row: reject the
/// whole dataset, every row carrying one synthetic violation per
/// offending column name, and skip per-cell evaluation entirely.
fn reject_all(df: &DataFrame, schema: &Schema, shape_issues: &[String]) -> Result<ValidationOutcome> {
    tracing::warn!(
        schema = schema.name(),
        columns = ?shape_issues,
        "column set does not match schema; rejecting all rows"
    );
    let violations: Vec<Violation> = shape_issues
        .iter()
        .map(|column| Violation::schema_shape(column))
        .collect();
    let diagnostics: Vec<RowDiagnostics> = (0..df.height())
        .map(|row_index| RowDiagnostics {
            row_index,
            violations: violations.clone(),
        })
        .collect();

    let outcome = ValidationOutcome {
        schema_name: schema.name().to_string(),
        accepted: take_rows(df, &[])?,
        rejected: df.clone(),
        diagnostics,
    };
    check_partition_counts(df, &outcome)?;
    Ok(outcome)
}

/// Evaluate one bound column's coercion, nullability and constraints
/// for every row, appending violations as they are found.
fn evaluate_column(series: &Column, bound: &BoundColumn<'_>, row_violations: &mut [Vec<Violation>]) {
    let spec = bound.spec;
    for (idx, violations) in row_violations.iter_mut().enumerate() {
        let raw = series.get(idx).unwrap_or(polars::prelude::AnyValue::Null);

        let Some(value) = coerce(&raw, spec.semantic_type, spec.coercion) else {
            // An uncoercible cell fails the type check and nothing
            // else; value-level checks are meaningless on it.
            violations.push(Violation::new(
                &bound.column,
                ConstraintKind::Type,
                any_to_string(raw),
            ));
            continue;
        };

        if value.is_missing() {
            if !spec.nullable {
                violations.push(Violation::new(
                    &bound.column,
                    ConstraintKind::NotNull,
                    String::new(),
                ));
            }
            // Value-level constraints never fire on missing cells.
            continue;
        }

        for constraint in &spec.constraints {
            if !constraint.evaluate(&value) {
                violations.push(Violation::new(
                    &bound.column,
                    constraint.kind(),
                    value.canonical(),
                ));
            }
        }
    }
}

/// Rows repeating an earlier non-missing value accrue a uniqueness
/// violation, additive with any cell-level violations.
fn evaluate_uniqueness(
    series: &Column,
    column: &str,
    height: usize,
    row_violations: &mut [Vec<Violation>],
) {
    let mut seen: BTreeSet<String> = BTreeSet::new();
    for idx in 0..height {
        let raw = series.get(idx).unwrap_or(polars::prelude::AnyValue::Null);
        if is_missing_value(&raw) {
            continue;
        }
        let key = any_to_string(raw);
        if !seen.insert(key.clone()) {
            row_violations[idx].push(Violation::new(column, ConstraintKind::Unique, key));
        }
    }
}

/// Stable partition: row order within each side matches the input.
fn partition(
    df: &DataFrame,
    schema: &Schema,
    row_violations: Vec<Vec<Violation>>,
) -> Result<ValidationOutcome> {
    let mut accepted_idx = Vec::new();
    let mut rejected_idx = Vec::new();
    let mut diagnostics = Vec::new();

    for (row_index, violations) in row_violations.into_iter().enumerate() {
        if violations.is_empty() {
            accepted_idx.push(row_index);
        } else {
            rejected_idx.push(row_index);
            diagnostics.push(RowDiagnostics {
                row_index,
                violations,
            });
        }
    }

    let outcome = ValidationOutcome {
        schema_name: schema.name().to_string(),
        accepted: take_rows(df, &accepted_idx)?,
        rejected: take_rows(df, &rejected_idx)?,
        diagnostics,
    };
    check_partition_counts(df, &outcome)?;

    tracing::debug!(
        schema = schema.name(),
        accepted = outcome.accepted.height(),
        rejected = outcome.rejected.height(),
        "validation partition complete"
    );
    Ok(outcome)
}

fn check_partition_counts(df: &DataFrame, outcome: &ValidationOutcome) -> Result<()> {
    let total = outcome.accepted.height() + outcome.rejected.height();
    if total != df.height() || outcome.diagnostics.len() != outcome.rejected.height() {
        return Err(ValidateError::Invariant(format!(
            "partition of {} rows produced {} accepted + {} rejected with {} diagnostics",
            df.height(),
            outcome.accepted.height(),
            outcome.rejected.height(),
            outcome.diagnostics.len()
        )));
    }
    Ok(())
}
