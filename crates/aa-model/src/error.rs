use thiserror::Error;

/// Errors raised while declaring a schema.
///
/// These are programming errors in the schema definition, not data
/// errors, and are surfaced at construction time rather than as
/// per-row diagnostics during validation.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid column pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("invalid range for `{column}`: min {min} exceeds max {max}")]
    InvalidRange {
        column: String,
        min: String,
        max: String,
    },
    #[error("range bounds for `{column}` are not comparable")]
    IncomparableRange { column: String },
    #[error("schema `{schema}` declares more than one unique column: `{first}` and `{second}`")]
    MultipleUniqueColumns {
        schema: String,
        first: String,
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, SchemaError>;
