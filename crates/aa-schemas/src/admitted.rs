//! Admitted care (HES APC) episode and feature schemas.
//!
//! The episode schema mirrors the study's data specification for
//! hospital provider spells; the feature schema extends it with the
//! derived analytic columns and tightens the age bound to the adult
//! cohort.

use aa_model::{ColumnSpec, Schema, SchemaError, SemanticType, Value};

use crate::bands::AGE_BAND_LABELS;
use crate::nhsdd;
use crate::{TOWNSEND_URL, WINDOW_END, WINDOW_START, date};

/// Time-of-day strings as supplied in HES extracts, `H:MM` or `HH:MM`.
pub const TIME_OF_DAY_PATTERN: &str = "([01]?[0-9]|2[0-3]):[0-5][0-9]";

const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Pre-feature-engineering schema for admitted care episodes.
pub fn admitted_episode_schema() -> Result<Schema, SchemaError> {
    let specs = vec![
        ColumnSpec::new("visit_id", SemanticType::Int64).unique(),
        ColumnSpec::new("patient_id", SemanticType::Int64),
        ColumnSpec::new("gender", SemanticType::Str)
            .nullable(false)
            .is_in(nhsdd::GENDER.keys())
            .describe(nhsdd::GENDER.url),
        ColumnSpec::new("ethnos", SemanticType::Str)
            .nullable(false)
            .is_in(nhsdd::ETHNOS.keys())
            .describe(nhsdd::ETHNOS.url),
        ColumnSpec::new("procodet", SemanticType::Str)
            .nullable(false)
            .describe("https://www.datadictionary.nhs.uk/data_elements/organisation_code__code_of_provider_.html"),
        ColumnSpec::new("sitetret", SemanticType::Str)
            .nullable(false)
            .describe("https://www.datadictionary.nhs.uk/data_elements/site_code__of_treatment_.html"),
        ColumnSpec::new("townsend_score_decile", SemanticType::Int64)
            .range(Value::Int(1), Value::Int(10))?
            .describe(TOWNSEND_URL),
        ColumnSpec::new("admimeth", SemanticType::Str)
            .is_in(nhsdd::ADMIMETH.keys())
            .describe(nhsdd::ADMIMETH.url),
        ColumnSpec::new("admisorc", SemanticType::Str)
            .is_in(nhsdd::ADMISORC.keys())
            .describe(nhsdd::ADMISORC.url),
        ColumnSpec::new("admidate", SemanticType::Date)
            .nullable(false)
            .range(
                Value::Date(date(WINDOW_START)),
                Value::Date(date(WINDOW_END)),
            )?,
        ColumnSpec::new("admitime", SemanticType::Str).matches(TIME_OF_DAY_PATTERN)?,
        ColumnSpec::new("disdest", SemanticType::Str)
            .is_in(nhsdd::DISDEST.keys())
            .describe(nhsdd::DISDEST.url),
        ColumnSpec::new("dismeth", SemanticType::Str)
            .is_in(nhsdd::DISMETH.keys())
            .describe(nhsdd::DISMETH.url),
        ColumnSpec::new("length_of_stay", SemanticType::Float64)
            .range(Value::Float(0.0), Value::Float(f64::MAX))?,
        ColumnSpec::new("epiorder", SemanticType::Int64),
        ColumnSpec::new("admiage", SemanticType::Float64)
            .range(Value::Int(0), Value::Int(130))?,
        ColumnSpec::pattern("diag_[0-9]{2}", SemanticType::Str)?,
        ColumnSpec::pattern("opertn_[0-9]{2}", SemanticType::Str)?,
        ColumnSpec::pattern("opdate_[0-9]{2}", SemanticType::Datetime)?,
    ];
    Ok(Schema::new("admitted_care_episode", specs)?.strict())
}

/// Post-feature-engineering schema: episode columns plus the derived
/// categorical columns, with the adult-cohort age bound.
pub fn admitted_feature_schema() -> Result<Schema, SchemaError> {
    let episode = admitted_episode_schema()?;
    let derived = vec![
        ColumnSpec::new("admiage", SemanticType::Float64)
            .range(Value::Int(18), Value::Int(130))?,
        ColumnSpec::new("admiage_cat", SemanticType::Str).is_in(AGE_BAND_LABELS),
        ColumnSpec::new("gender_cat", SemanticType::Str).is_in([
            "Male",
            "Female",
            "Indeterminate",
            "Not Known",
            "Unmapped",
        ]),
        ColumnSpec::new("ethnos_cat", SemanticType::Str).is_in([
            "White",
            "Mixed",
            "Asian or Asian British",
            "Black or Black British",
            "Other Ethnic Groups",
            "Not stated",
            "Not known",
            "Unmapped",
        ]),
        ColumnSpec::new("townsend_score_quintile", SemanticType::Int64)
            .range(Value::Int(1), Value::Int(5))?,
        ColumnSpec::new("admisorc_cat", SemanticType::Str).is_in([
            "Residence",
            "Penal",
            "Medical care",
            "Care Home",
            "Unknown",
            "Unmapped",
        ]),
        ColumnSpec::new("admidayofweek", SemanticType::Str).is_in(WEEKDAYS),
        ColumnSpec::new("diag_seasonal_cat", SemanticType::Str).is_in([
            "Respiratory infection",
            "Chronic disease exacerbation",
        ]),
        ColumnSpec::new("length_of_stay_cat", SemanticType::Str)
            .is_in(["<2 days", ">=2 days"]),
        ColumnSpec::new("disdest_cat", SemanticType::Str).is_in([
            "Residence",
            "Medical care",
            "Penal",
            "Care Home",
            "Died",
            "Unknown",
            "Unmapped",
        ]),
        ColumnSpec::new("dismeth_cat", SemanticType::Str).is_in([
            "Discharged",
            "Died",
            "Not Applicable",
            "Unknown",
            "Unmapped",
        ]),
    ];
    episode.extend("admitted_care_features", derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aa_model::ConstraintKind;

    #[test]
    fn episode_schema_builds_strict_with_unique_visit_id() {
        let schema = admitted_episode_schema().expect("schema builds");
        assert!(schema.is_strict());
        let unique = schema.unique_spec().expect("unique column");
        assert_eq!(unique.matcher.label(), "visit_id");
    }

    #[test]
    fn feature_schema_tightens_age_and_adds_derived_columns() {
        let episode = admitted_episode_schema().unwrap();
        let features = admitted_feature_schema().unwrap();

        // admiage is replaced, not duplicated.
        let age_specs = features
            .specs()
            .iter()
            .filter(|spec| spec.matcher.label() == "admiage")
            .count();
        assert_eq!(age_specs, 1);
        assert_eq!(features.specs().len(), episode.specs().len() + 10);

        let age = features
            .specs()
            .iter()
            .find(|spec| spec.matcher.label() == "admiage")
            .unwrap();
        let range = age
            .constraints
            .iter()
            .find(|c| c.kind() == ConstraintKind::Range)
            .unwrap();
        assert!(!range.evaluate(&aa_model::Value::Int(17)));
        assert!(range.evaluate(&aa_model::Value::Int(18)));
    }
}
