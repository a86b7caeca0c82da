//! Feature derivation for validated episode records.
//!
//! Each dataset family gets a `build_features` pipeline that appends
//! the derived categorical columns to an accepted episode frame. The
//! output is meant to be validated again against the family's feature
//! schema, so every recoder is total: mapped codes take their
//! category, administrative noise stays missing, and anything else
//! takes the column's documented fallback.

pub mod admitted;
pub mod emergency;
mod error;
pub mod maps;
mod recode;
mod refset;

pub use error::FeatureError;
pub use refset::RefsetCache;
