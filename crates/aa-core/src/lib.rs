//! Shared Polars plumbing for the avoidable-admissions pipeline.
//!
//! - **any_value**: `AnyValue` string/numeric/date conversions and
//!   semantic-type coercion
//! - **frame**: row selection helpers used by the partition step

pub mod any_value;
pub mod frame;

pub use any_value::{
    any_to_f64, any_to_i64, any_to_string, coerce, is_missing_value, parse_f64, parse_i64,
};
pub use frame::take_rows;
