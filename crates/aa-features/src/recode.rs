//! Recoding primitives shared by both dataset families.
//!
//! Every recoder is total over its input domain: missing stays
//! missing, mapped codes take their category, and anything else takes
//! the column's fallback so the feature schema's `IsIn` constraints
//! hold for all legitimately encoded data.

use chrono::NaiveDate;
use polars::prelude::{AnyValue, Column, DataFrame, PolarsResult};

use aa_core::{any_to_f64, any_to_i64, any_to_string, coerce, is_missing_value};
use aa_model::{CoercionPolicy, SemanticType, Value};

use crate::maps;
use crate::refset::RefsetCache;

/// What an unmapped, non-missing code recodes to.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Fallback {
    /// Recode to missing (e.g. non-seasonal diagnoses).
    Missing,
    /// A fixed category (e.g. referrals to services outside the
    /// grouped list are "Other").
    Label(&'static str),
    /// The reserved flag for codes outside the map and the refset.
    Unmapped,
}

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|column| column.as_str() == name)
}

pub(crate) fn str_cells(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let series = df.column(name)?;
    Ok((0..df.height())
        .map(|idx| {
            let value = series.get(idx).unwrap_or(AnyValue::Null);
            if is_missing_value(&value) {
                None
            } else {
                Some(any_to_string(value).trim().to_string())
            }
        })
        .collect())
}

pub(crate) fn i64_cells(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<i64>>> {
    let series = df.column(name)?;
    Ok((0..df.height())
        .map(|idx| any_to_i64(&series.get(idx).unwrap_or(AnyValue::Null)))
        .collect())
}

pub(crate) fn f64_cells(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let series = df.column(name)?;
    Ok((0..df.height())
        .map(|idx| any_to_f64(&series.get(idx).unwrap_or(AnyValue::Null)))
        .collect())
}

pub(crate) fn date_cells(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<NaiveDate>>> {
    let series = df.column(name)?;
    Ok((0..df.height())
        .map(|idx| {
            let value = series.get(idx).unwrap_or(AnyValue::Null);
            match coerce(&value, SemanticType::Date, CoercionPolicy::Coerce) {
                Some(Value::Date(date)) => Some(date),
                Some(Value::Datetime(stamp)) => Some(stamp.date()),
                _ => None,
            }
        })
        .collect())
}

/// Recode a string-coded column through a static map. Codes outside
/// the map flag as the reserved category.
pub(crate) fn recode_str(
    column: &str,
    cells: &[Option<String>],
    map: &'static [(&'static str, &'static str)],
) -> Vec<Option<&'static str>> {
    cells
        .iter()
        .map(|cell| {
            let code = cell.as_deref()?;
            match maps::lookup_str(map, code) {
                Some(label) => Some(label),
                None => {
                    tracing::warn!(column, code, "code outside feature map");
                    Some(maps::UNMAPPED)
                }
            }
        })
        .collect()
}

/// Recode a SNOMED-coded column through a static map. Concept ID 0 is
/// not-recorded noise and recodes to missing; other unmapped codes
/// take the column's fallback, with a log line when the code is not
/// in the reference set either.
pub(crate) fn recode_snomed(
    column: &str,
    cells: &[Option<i64>],
    map: &'static [(i64, &'static str)],
    fallback: Fallback,
    refsets: &RefsetCache,
) -> Vec<Option<&'static str>> {
    cells
        .iter()
        .map(|cell| {
            let code = (*cell)?;
            if code == 0 {
                return None;
            }
            if let Some(label) = maps::lookup_snomed(map, code) {
                return Some(label);
            }
            if !refsets.contains(code) {
                tracing::warn!(column, code, "concept outside feature map and refset");
            }
            match fallback {
                Fallback::Missing => None,
                Fallback::Label(label) => Some(label),
                Fallback::Unmapped => Some(maps::UNMAPPED),
            }
        })
        .collect()
}

pub(crate) fn push_str_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<&'static str>>,
) -> PolarsResult<()> {
    df.with_column(Column::new(name.into(), values))?;
    Ok(())
}

pub(crate) fn push_i64_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<i64>>,
) -> PolarsResult<()> {
    df.with_column(Column::new(name.into(), values))?;
    Ok(())
}

/// Townsend decile to quintile; deciles outside 1..=10 recode to
/// missing rather than a fabricated quintile.
pub(crate) fn decile_to_quintile(cells: &[Option<i64>]) -> Vec<Option<i64>> {
    cells
        .iter()
        .map(|cell| {
            let decile = (*cell)?;
            if (1..=10).contains(&decile) {
                Some((decile + 1) / 2)
            } else {
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recode_str_flags_unknown_codes() {
        let cells = vec![Some("1".to_string()), Some("7".to_string()), None];
        let recoded = recode_str("gender", &cells, maps::GENDER);
        assert_eq!(recoded, vec![Some("Male"), Some(maps::UNMAPPED), None]);
    }

    #[test]
    fn recode_snomed_applies_fallbacks() {
        let refsets = RefsetCache::from_static();
        let cells = vec![Some(160734000), Some(0), Some(42), None];

        let unmapped = recode_snomed(
            "accommodationstatus",
            &cells,
            maps::ACCOMMODATIONSTATUS,
            Fallback::Unmapped,
            &refsets,
        );
        assert_eq!(unmapped, vec![Some("Yes"), None, Some(maps::UNMAPPED), None]);

        let missing = recode_snomed(
            "eddiag_01",
            &cells,
            maps::EDDIAG_SEASONAL,
            Fallback::Missing,
            &refsets,
        );
        assert_eq!(missing, vec![None, None, None, None]);
    }

    #[test]
    fn quintiles_pair_deciles() {
        let cells: Vec<Option<i64>> =
            vec![Some(1), Some(2), Some(3), Some(10), Some(0), Some(11), None];
        assert_eq!(
            decile_to_quintile(&cells),
            vec![Some(1), Some(1), Some(2), Some(5), None, None, None]
        );
    }
}
