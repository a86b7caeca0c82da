use thiserror::Error;

/// Engine failures. Data-quality problems are never errors; they are
/// surfaced as diagnostics on the rejected partition.
#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("dataframe error: {0}")]
    Polars(#[from] polars::error::PolarsError),
    #[error("report serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

pub type Result<T> = std::result::Result<T, ValidateError>;
