//! Validate → derive → revalidate, the full pipeline for both
//! dataset families.

use polars::prelude::{Column, DataFrame};

use aa_features::{RefsetCache, admitted, emergency};
use aa_schemas::{
    admitted_episode_schema, admitted_feature_schema, emergency_episode_schema,
    emergency_feature_schema,
};
use aa_validate::validate;

fn admitted_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("visit_id".into(), [1i64, 2]),
        Column::new("gender".into(), ["1", "2"]),
        Column::new("ethnos".into(), ["A", "M"]),
        Column::new("procodet".into(), ["RXN", "RXN"]),
        Column::new("sitetret".into(), ["RXN01", "RXN01"]),
        Column::new("townsend_score_decile".into(), [3i64, 10]),
        Column::new("admisorc".into(), ["19", "51"]),
        Column::new("admidate".into(), ["2021-11-05", "2022-06-14"]),
        Column::new("dismeth".into(), ["1", "4"]),
        Column::new("disdest".into(), ["19", "79"]),
        Column::new("length_of_stay".into(), [0.5f64, 11.0]),
        Column::new("admiage".into(), [45.0f64, 87.0]),
        Column::new("diag_01".into(), ["J18", "I21"]),
        Column::new("diag_02".into(), [None::<&str>, Some("E11")]),
    ])
    .unwrap()
}

fn emergency_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("visit_id".into(), [11i64, 12]),
        Column::new("gender".into(), ["2", "1"]),
        Column::new("ethnos".into(), ["H", "Z"]),
        Column::new("procodet".into(), ["RXN", "RXN"]),
        Column::new("edsitetret".into(), ["RXN02", "RXN02"]),
        Column::new("townsend_score_decile".into(), [7i64, 2]),
        Column::new("activage".into(), [67.0f64, 23.0]),
        Column::new(
            "edarrivaldatetime".into(),
            ["2022-01-15T18:40:00", "2021-12-02T03:05:00"],
        ),
        Column::new("edattendcat".into(), ["1", "2"]),
        Column::new("eddepttype".into(), ["01", "01"]),
        Column::new("accommodationstatus".into(), [Some(160734000i64), Some(0)]),
        Column::new("edacuity".into(), [1064901000000108i64, 1077251000000100]),
        Column::new("edarrivalmode".into(), [2018310000i64, 1048061000000105]),
        Column::new("edrefservice".into(), [Some(183516009i64), None]),
        Column::new("eddiag_01".into(), [36971009i64, 12295008]),
        Column::new("edinvest_01".into(), [Some(167252002i64), None]),
        Column::new("edinvest_02".into(), [Some(1088291000000101i64), Some(252167001)]),
        Column::new("edtreat_01".into(), [266712008i64, 183964008]),
    ])
    .unwrap()
}

#[test]
fn admitted_pipeline_revalidates_clean() {
    let episode = admitted_episode_schema().unwrap();
    let outcome = validate(&admitted_frame(), &episode).unwrap();
    assert!(outcome.is_clean(), "{}", outcome.summary());

    let derived = admitted::build_features(&outcome.accepted).unwrap();
    let features = admitted_feature_schema().unwrap();
    let outcome = validate(&derived, &features).unwrap();
    assert!(outcome.is_clean(), "{}", outcome.summary());
}

#[test]
fn admitted_features_take_expected_categories() {
    let derived = admitted::build_features(&admitted_frame()).unwrap();

    let cat = |name: &str, idx: usize| {
        derived
            .column(name)
            .unwrap()
            .str()
            .unwrap()
            .get(idx)
            .map(str::to_string)
    };

    // Bins are right-inclusive, so 45 still belongs to (40, 45].
    assert_eq!(cat("admiage_cat", 0).as_deref(), Some("40 - 44"));
    assert_eq!(cat("admiage_cat", 1).as_deref(), Some(">85"));
    assert_eq!(cat("gender_cat", 0).as_deref(), Some("Male"));
    assert_eq!(cat("ethnos_cat", 1).as_deref(), Some("Black or Black British"));
    assert_eq!(cat("admisorc_cat", 1).as_deref(), Some("Medical care"));
    assert_eq!(cat("admidayofweek", 0).as_deref(), Some("Friday"));
    assert_eq!(cat("diag_seasonal_cat", 0).as_deref(), Some("Respiratory infection"));
    assert_eq!(cat("diag_seasonal_cat", 1), None);
    assert_eq!(cat("length_of_stay_cat", 0).as_deref(), Some("<2 days"));
    assert_eq!(cat("length_of_stay_cat", 1).as_deref(), Some(">=2 days"));
    assert_eq!(cat("disdest_cat", 1).as_deref(), Some("Died"));
    assert_eq!(cat("dismeth_cat", 1).as_deref(), Some("Died"));

    let quintiles = derived.column("townsend_score_quintile").unwrap();
    assert_eq!(quintiles.i64().unwrap().get(0), Some(2));
    assert_eq!(quintiles.i64().unwrap().get(1), Some(5));
}

#[test]
fn emergency_pipeline_revalidates_clean() {
    let episode = emergency_episode_schema().unwrap();
    let outcome = validate(&emergency_frame(), &episode).unwrap();
    assert!(outcome.is_clean(), "{}", outcome.summary());

    let refsets = RefsetCache::from_static();
    let derived = emergency::build_features(&outcome.accepted, &refsets).unwrap();
    let features = emergency_feature_schema().unwrap();
    let outcome = validate(&derived, &features).unwrap();
    assert!(outcome.is_clean(), "{}", outcome.summary());
}

#[test]
fn emergency_features_take_expected_categories() {
    let refsets = RefsetCache::from_static();
    let derived = emergency::build_features(&emergency_frame(), &refsets).unwrap();

    let cat = |name: &str, idx: usize| {
        derived
            .column(name)
            .unwrap()
            .str()
            .unwrap()
            .get(idx)
            .map(str::to_string)
    };

    assert_eq!(cat("activage_cat", 0).as_deref(), Some("65 - 69"));
    assert_eq!(cat("accommodationstatus_cat", 0).as_deref(), Some("Yes"));
    // concept 0 is not-recorded noise
    assert_eq!(cat("accommodationstatus_cat", 1), None);
    assert_eq!(
        cat("edacuity_cat", 0).as_deref(),
        Some("3 - Urgent level emergency care")
    );
    assert_eq!(cat("edarrivalmode_cat", 0).as_deref(), Some("Ambulance"));
    assert_eq!(cat("edrefservice_cat", 0).as_deref(), Some("Medical"));
    assert_eq!(cat("edrefservice_cat", 1), None);
    assert_eq!(cat("eddiag_seasonal_cat", 0).as_deref(), Some("Respiratory infection"));
    assert_eq!(
        cat("eddiag_seasonal_cat", 1).as_deref(),
        Some("Chronic disease exacerbation")
    );
    assert_eq!(cat("edinvest_01_cat", 0).as_deref(), Some("Non-urgent"));
    assert_eq!(cat("edinvest_01_cat", 1), None);
    assert_eq!(cat("edinvest_02_cat", 0), None);
    assert_eq!(cat("edinvest_02_cat", 1).as_deref(), Some("Urgent"));
    assert_eq!(cat("edtreat_01_cat", 0).as_deref(), Some("Non-urgent"));
    assert_eq!(cat("edtreat_01_cat", 1), None);
}

#[test]
fn missing_required_source_column_errors() {
    let df = admitted_frame().drop("admiage").unwrap();
    let err = admitted::build_features(&df).unwrap_err();
    assert!(
        matches!(err, aa_features::FeatureError::MissingColumn(ref name) if name.as_str() == "admiage")
    );
}
