//! Emergency care (ECDS) episode and feature schemas.
//!
//! ECDS codes its clinical fields with SNOMED CT concept IDs, so the
//! coded single columns and repeating groups here are int64. The
//! category groupings for those codes live with the feature maps; the
//! episode layer checks type, nullability and the attendance window.

use aa_model::{ColumnSpec, Schema, SchemaError, SemanticType, Value};

use crate::bands::AGE_BAND_LABELS;
use crate::nhsdd;
use crate::{TOWNSEND_URL, WINDOW_END, WINDOW_START, date};

/// Pre-feature-engineering schema for emergency care attendances.
pub fn emergency_episode_schema() -> Result<Schema, SchemaError> {
    let window_start = date(WINDOW_START)
        .and_hms_opt(0, 0, 0)
        .expect("valid window start");
    let window_end = date(WINDOW_END)
        .and_hms_opt(23, 59, 59)
        .expect("valid window end");

    let mut specs = vec![
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
        ColumnSpec::new("edsitetret", SemanticType::Str)
            .nullable(false)
            .describe("https://www.datadictionary.nhs.uk/data_elements/site_code__of_treatment_.html"),
        ColumnSpec::new("townsend_score_decile", SemanticType::Int64)
            .range(Value::Int(1), Value::Int(10))?
            .describe(TOWNSEND_URL),
        ColumnSpec::new("activage", SemanticType::Float64)
            .range(Value::Int(0), Value::Int(130))?,
        ColumnSpec::new("edarrivaldatetime", SemanticType::Datetime)
            .nullable(false)
            .range(Value::Datetime(window_start), Value::Datetime(window_end))?,
        ColumnSpec::new("edattendcat", SemanticType::Str)
            .is_in(nhsdd::EDATTENDCAT.keys())
            .describe(nhsdd::EDATTENDCAT.url),
        ColumnSpec::new("eddepttype", SemanticType::Str)
            .is_in(nhsdd::EDDEPTTYPE.keys())
            .describe(nhsdd::EDDEPTTYPE.url),
    ];

    // SNOMED CT coded fields; concept IDs are validated for type here
    // and for category coverage at the feature layer.
    for name in [
        "accommodationstatus",
        "edacuity",
        "edarrivalmode",
        "edattendsource",
        "edattenddispatch",
        "edrefservice",
    ] {
        specs.push(ColumnSpec::new(name, SemanticType::Int64));
    }
    for pattern in [
        "eddiag_[0-9]{2}",
        "edcomorb_[0-9]{2}",
        "edinvest_[0-9]{2}",
        "edtreat_[0-9]{2}",
    ] {
        specs.push(ColumnSpec::pattern(pattern, SemanticType::Int64)?);
    }

    Ok(Schema::new("emergency_care_episode", specs)?.strict())
}

/// Post-feature-engineering schema for emergency care.
pub fn emergency_feature_schema() -> Result<Schema, SchemaError> {
    let episode = emergency_episode_schema()?;
    let urgency = ["Urgent", "Non-urgent"];
    let derived = vec![
        ColumnSpec::new("activage", SemanticType::Float64)
            .range(Value::Int(18), Value::Int(130))?,
        ColumnSpec::new("activage_cat", SemanticType::Str).is_in(AGE_BAND_LABELS),
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
        ColumnSpec::new("accommodationstatus_cat", SemanticType::Str)
            .is_in(["Yes", "No", "Unknown", "Unmapped"]),
        ColumnSpec::new("edacuity_cat", SemanticType::Str).is_in([
            "1 - Immediate care level emergency care",
            "2 - Very urgent level emergency care",
            "3 - Urgent level emergency care",
            "4 - Standard level emergency care",
            "5 - Low acuity level emergency care",
            "Unmapped",
        ]),
        ColumnSpec::new("edarrivalmode_cat", SemanticType::Str)
            .is_in(["Walk-In", "Ambulance", "Other", "Unmapped"]),
        ColumnSpec::new("edattendsource_cat", SemanticType::Str).is_in([
            "Community",
            "Personal",
            "Emergency Services",
            "Hospital",
            "Primary Care",
            "Unmapped",
        ]),
        ColumnSpec::new("edattenddispatch_cat", SemanticType::Str).is_in([
            "Ambulatory / Short Stay",
            "Admitted",
            "Transfer",
            "Died",
            "Discharged",
            "Unmapped",
        ]),
        ColumnSpec::new("edrefservice_cat", SemanticType::Str).is_in([
            "Medical",
            "Psychiatric",
            "Surgical",
            "ObGyn",
            "Local Medical",
            "Community / OPD",
            "Critical Care",
            "Other",
        ]),
        ColumnSpec::new("eddiag_seasonal_cat", SemanticType::Str).is_in([
            "Respiratory infection",
            "Chronic disease exacerbation",
        ]),
        ColumnSpec::pattern("edinvest_[0-9]{2}_cat", SemanticType::Str)?.is_in(urgency),
        ColumnSpec::pattern("edtreat_[0-9]{2}_cat", SemanticType::Str)?.is_in(urgency),
    ];
    episode.extend("emergency_care_features", derived)
}
