//! Property tests for the partition contract.

use polars::prelude::{AnyValue, Column, DataFrame};
use proptest::prelude::*;

use aa_model::{ColumnSpec, Schema, SemanticType, Value};
use aa_validate::validate;

fn age_schema() -> Schema {
    Schema::new(
        "prop_episode",
        vec![
            ColumnSpec::new("visit_id", SemanticType::Int64),
            ColumnSpec::new("admiage", SemanticType::Float64)
                .range(Value::Int(18), Value::Int(130))
                .unwrap(),
        ],
    )
    .unwrap()
    .strict()
}

fn ids(df: &DataFrame) -> Vec<i64> {
    let series = df.column("visit_id").unwrap();
    (0..df.height())
        .map(|idx| match series.get(idx).unwrap() {
            AnyValue::Int64(v) => v,
            other => panic!("unexpected visit_id value {other:?}"),
        })
        .collect()
}

proptest! {
    /// accepted ∪ rejected reorders to exactly the input, with no row
    /// duplicated or dropped, and every rejected row carries at least
    /// one diagnostic.
    #[test]
    fn partition_is_lossless(ages in prop::collection::vec(-50.0f64..200.0, 0..60)) {
        let visit_ids: Vec<i64> = (0..ages.len() as i64).collect();
        let df = DataFrame::new(vec![
            Column::new("visit_id".into(), visit_ids.clone()),
            Column::new("admiage".into(), ages),
        ])
        .unwrap();

        let schema = age_schema();
        let outcome = validate(&df, &schema).unwrap();

        prop_assert_eq!(
            outcome.accepted.height() + outcome.rejected.height(),
            df.height()
        );

        let mut recombined = ids(&outcome.accepted);
        recombined.extend(ids(&outcome.rejected));
        recombined.sort_unstable();
        prop_assert_eq!(recombined, visit_ids);

        prop_assert_eq!(outcome.diagnostics.len(), outcome.rejected.height());
        for row in &outcome.diagnostics {
            prop_assert!(!row.violations.is_empty());
        }
    }

    /// Re-validating the accepted output is a fixed point.
    #[test]
    fn accepted_rows_revalidate_clean(ages in prop::collection::vec(0.0f64..200.0, 0..40)) {
        let visit_ids: Vec<i64> = (0..ages.len() as i64).collect();
        let df = DataFrame::new(vec![
            Column::new("visit_id".into(), visit_ids),
            Column::new("admiage".into(), ages),
        ])
        .unwrap();

        let schema = age_schema();
        let outcome = validate(&df, &schema).unwrap();
        let again = validate(&outcome.accepted, &schema).unwrap();
        prop_assert!(again.is_clean());
    }
}
