//! Declared schemas for the avoidable admissions study.
//!
//! Two dataset families, each with an episode (pre-feature) and a
//! feature (post-derivation) layer:
//!
//! - **admitted**: admitted care episodes (HES APC)
//! - **emergency**: emergency care attendances (ECDS)
//! - **nhsdd**: NHS Data Dictionary code sets backing the `IsIn`
//!   constraints
//! - **bands**: the adult cohort age bands shared by both families
//!
//! Schema builders run once at startup and return immutable values.

pub mod admitted;
pub mod bands;
pub mod emergency;
pub mod nhsdd;

use chrono::NaiveDate;

pub use admitted::{admitted_episode_schema, admitted_feature_schema};
pub use emergency::{emergency_episode_schema, emergency_feature_schema};
pub use nhsdd::CodeSet;

/// Study window for admissions and attendances, inclusive.
pub const WINDOW_START: (i32, u32, u32) = (2021, 10, 1);
pub const WINDOW_END: (i32, u32, u32) = (2022, 9, 30);

pub const TOWNSEND_URL: &str =
    "https://statistics.ukdataservice.ac.uk/dataset/2011-uk-townsend-deprivation-scores";

pub(crate) fn date((year, month, day): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}
