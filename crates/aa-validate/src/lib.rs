//! Schema-driven row validation.
//!
//! The engine takes an in-memory dataset and a declared schema,
//! evaluates every constraint exhaustively, and partitions the rows
//! into accepted and rejected sets with per-violation diagnostics
//! attached to the rejected side. Data-quality findings are never
//! errors; callers inspect the diagnostics, fix upstream data and
//! re-validate.

mod engine;
mod error;
mod outcome;
mod report;

pub use engine::validate;
pub use error::{Result, ValidateError};
pub use outcome::{SummaryGroup, ValidationOutcome, ValidationSummary};
pub use report::write_report_json;
