//! Derived analytic columns for emergency care attendances.

use polars::prelude::DataFrame;
use regex::Regex;

use aa_schemas::bands;

use crate::error::FeatureError;
use crate::maps;
use crate::recode::{
    Fallback, decile_to_quintile, f64_cells, has_column, i64_cells, push_i64_column,
    push_str_column, recode_snomed, recode_str, str_cells,
};
use crate::refset::RefsetCache;

/// The SNOMED-coded single columns and their category fallbacks.
/// Referrals outside the grouped services collapse to "Other"; the
/// rest flag as unmapped so coverage gaps surface at validation.
const SNOMED_SINGLES: &[(&str, &[(i64, &str)], Fallback)] = &[
    ("accommodationstatus", maps::ACCOMMODATIONSTATUS, Fallback::Unmapped),
    ("edacuity", maps::EDACUITY, Fallback::Unmapped),
    ("edarrivalmode", maps::EDARRIVALMODE, Fallback::Unmapped),
    ("edattendsource", maps::EDATTENDSOURCE, Fallback::Unmapped),
    ("edattenddispatch", maps::EDATTENDDISPATCH, Fallback::Unmapped),
    ("edrefservice", maps::EDREFSERVICE, Fallback::Label("Other")),
];

/// Append the emergency care feature columns to a validated episode
/// frame. `refsets` supplies the known-concept check used when a code
/// falls outside its category map.
pub fn build_features(df: &DataFrame, refsets: &RefsetCache) -> Result<DataFrame, FeatureError> {
    let mut out = df.clone();

    require(&out, "activage")?;
    let bands = f64_cells(&out, "activage")?
        .iter()
        .map(|age| age.and_then(bands::age_band))
        .collect();
    push_str_column(&mut out, "activage_cat", bands)?;

    require(&out, "gender")?;
    let gender = str_cells(&out, "gender")?;
    push_str_column(&mut out, "gender_cat", recode_str("gender", &gender, maps::GENDER))?;

    require(&out, "ethnos")?;
    let ethnos = str_cells(&out, "ethnos")?;
    push_str_column(&mut out, "ethnos_cat", recode_str("ethnos", &ethnos, maps::ETHNOS))?;

    if has_column(&out, "townsend_score_decile") {
        let deciles = i64_cells(&out, "townsend_score_decile")?;
        push_i64_column(&mut out, "townsend_score_quintile", decile_to_quintile(&deciles))?;
    }

    for &(name, map, fallback) in SNOMED_SINGLES {
        if !has_column(&out, name) {
            continue;
        }
        let codes = i64_cells(&out, name)?;
        let recoded = recode_snomed(name, &codes, map, fallback, refsets);
        push_str_column(&mut out, &format!("{name}_cat"), recoded)?;
    }

    if has_column(&out, "eddiag_01") {
        let codes = i64_cells(&out, "eddiag_01")?;
        let seasonal =
            recode_snomed("eddiag_01", &codes, maps::EDDIAG_SEASONAL, Fallback::Missing, refsets);
        push_str_column(&mut out, "eddiag_seasonal_cat", seasonal)?;
    }

    derive_urgency_group(
        &mut out,
        "edinvest_[0-9]{2}",
        maps::EDINVEST_NON_URGENT,
        maps::EDINVEST_NOISE,
        refsets,
    )?;
    derive_urgency_group(
        &mut out,
        "edtreat_[0-9]{2}",
        maps::EDTREAT_NON_URGENT,
        maps::EDTREAT_NOISE,
        refsets,
    )?;

    Ok(out)
}

/// Recode every instance of a repeating SNOMED group into an urgency
/// category column. Noise concepts ("none" placeholders) stay
/// missing; everything clinical that is not in the non-urgent list
/// counts as urgent.
fn derive_urgency_group(
    df: &mut DataFrame,
    pattern: &str,
    non_urgent: &[i64],
    noise: &[i64],
    refsets: &RefsetCache,
) -> Result<(), FeatureError> {
    let matcher = Regex::new(&format!("^(?:{pattern})$"))?;
    let instances: Vec<String> = df
        .get_column_names()
        .iter()
        .filter(|name| matcher.is_match(name.as_str()))
        .map(|name| name.to_string())
        .collect();

    for name in instances {
        let codes = i64_cells(df, &name)?;
        let recoded = codes
            .iter()
            .map(|cell| {
                let code = (*cell)?;
                if code == 0 || noise.contains(&code) {
                    return None;
                }
                if non_urgent.contains(&code) {
                    return Some("Non-urgent");
                }
                if !refsets.contains(code) {
                    tracing::warn!(column = %name, code, "concept outside urgency refset");
                }
                Some("Urgent")
            })
            .collect();
        push_str_column(df, &format!("{name}_cat"), recoded)?;
    }
    Ok(())
}

fn require(df: &DataFrame, name: &str) -> Result<(), FeatureError> {
    if has_column(df, name) {
        Ok(())
    } else {
        Err(FeatureError::MissingColumn(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    #[test]
    fn urgency_groups_recode_every_instance() {
        let mut df = DataFrame::new(vec![
            Column::new("edinvest_01".into(), [Some(167252002i64), Some(252167001), None]),
            Column::new("edinvest_02".into(), [Some(1088291000000101i64), Some(0), Some(53115007)]),
        ])
        .unwrap();
        let refsets = RefsetCache::from_static();
        derive_urgency_group(
            &mut df,
            "edinvest_[0-9]{2}",
            maps::EDINVEST_NON_URGENT,
            maps::EDINVEST_NOISE,
            &refsets,
        )
        .unwrap();

        let names: Vec<String> =
            df.get_column_names().iter().map(|name| name.to_string()).collect();
        assert!(names.contains(&"edinvest_01_cat".to_string()));
        assert!(names.contains(&"edinvest_02_cat".to_string()));

        let first = df.column("edinvest_01_cat").unwrap();
        assert_eq!(first.str().unwrap().get(0), Some("Non-urgent"));
        assert_eq!(first.str().unwrap().get(1), Some("Urgent"));
        assert_eq!(first.str().unwrap().get(2), None);

        let second = df.column("edinvest_02_cat").unwrap();
        assert_eq!(second.str().unwrap().get(0), None);
        assert_eq!(second.str().unwrap().get(1), None);
        assert_eq!(second.str().unwrap().get(2), Some("Non-urgent"));
    }
}
