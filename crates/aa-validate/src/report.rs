//! Machine-readable validation report.

use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use aa_model::RowDiagnostics;

use crate::error::Result;
use crate::outcome::{SummaryGroup, ValidationOutcome};

const REPORT_SCHEMA: &str = "avoidable-admissions.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    schema: &'static str,
    schema_version: u32,
    generated_at: String,
    dataset: &'a str,
    validation_schema: &'a str,
    accepted: usize,
    rejected: usize,
    groups: Vec<SummaryGroup>,
    diagnostics: &'a [RowDiagnostics],
}

/// Write `<dataset>_validation_report.json` into `output_dir`,
/// creating the directory when needed. Returns the written path.
pub fn write_report_json(
    output_dir: &Path,
    dataset: &str,
    outcome: &ValidationOutcome,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)?;
    let output_path = output_dir.join(format!("{dataset}_validation_report.json"));
    let summary = outcome.summary();
    let payload = ReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        dataset,
        validation_schema: &outcome.schema_name,
        accepted: summary.accepted,
        rejected: summary.rejected,
        groups: summary.groups,
        diagnostics: &outcome.diagnostics,
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))?;
    Ok(output_path)
}
