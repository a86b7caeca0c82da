use thiserror::Error;

/// Errors raised while deriving feature columns.
#[derive(Debug, Error)]
pub enum FeatureError {
    /// A required source column is absent from the frame.
    #[error("feature derivation needs column '{0}'")]
    MissingColumn(String),

    /// Underlying DataFrame operation failed.
    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),

    /// A repeating-group pattern failed to compile.
    #[error("invalid column group pattern")]
    InvalidPattern(#[from] regex::Error),
}
