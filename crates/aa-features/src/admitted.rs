//! Derived analytic columns for admitted care episodes.

use chrono::{Datelike, Weekday};
use polars::prelude::DataFrame;

use aa_schemas::bands;

use crate::error::FeatureError;
use crate::maps;
use crate::recode::{
    date_cells, decile_to_quintile, f64_cells, has_column, i64_cells, push_i64_column,
    push_str_column, recode_str, str_cells,
};

/// Append the admitted care feature columns to a validated episode
/// frame.
///
/// Columns derived from required episode fields must be present;
/// derivations whose source is nullable are skipped when the source
/// column is absent.
pub fn build_features(df: &DataFrame) -> Result<DataFrame, FeatureError> {
    let mut out = df.clone();

    require(&out, "admiage")?;
    let bands = f64_cells(&out, "admiage")?
        .iter()
        .map(|age| age.and_then(bands::age_band))
        .collect();
    push_str_column(&mut out, "admiage_cat", bands)?;

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

    if has_column(&out, "admisorc") {
        let admisorc = str_cells(&out, "admisorc")?;
        push_str_column(
            &mut out,
            "admisorc_cat",
            recode_str("admisorc", &admisorc, maps::ADMISORC),
        )?;
    }

    require(&out, "admidate")?;
    let weekdays = date_cells(&out, "admidate")?
        .iter()
        .map(|date| date.map(|date| weekday_name(date.weekday())))
        .collect();
    push_str_column(&mut out, "admidayofweek", weekdays)?;

    if has_column(&out, "diag_01") {
        let diagnoses = str_cells(&out, "diag_01")?;
        let seasonal = diagnoses.iter().map(|code| seasonal_category(code.as_deref())).collect();
        push_str_column(&mut out, "diag_seasonal_cat", seasonal)?;
    }

    if has_column(&out, "length_of_stay") {
        let stays = f64_cells(&out, "length_of_stay")?;
        let categories = stays
            .iter()
            .map(|days| days.map(|days| if days < 2.0 { "<2 days" } else { ">=2 days" }))
            .collect();
        push_str_column(&mut out, "length_of_stay_cat", categories)?;
    }

    if has_column(&out, "disdest") {
        let disdest = str_cells(&out, "disdest")?;
        push_str_column(&mut out, "disdest_cat", recode_str("disdest", &disdest, maps::DISDEST))?;
    }

    if has_column(&out, "dismeth") {
        let dismeth = str_cells(&out, "dismeth")?;
        push_str_column(&mut out, "dismeth_cat", recode_str("dismeth", &dismeth, maps::DISMETH))?;
    }

    Ok(out)
}

fn require(df: &DataFrame, name: &str) -> Result<(), FeatureError> {
    if has_column(df, name) {
        Ok(())
    } else {
        Err(FeatureError::MissingColumn(name.to_string()))
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Seasonal grouping of the primary ICD-10 diagnosis. The 4-character
/// code is checked before the 3-character prefix; everything else,
/// malformed codes included, is non-seasonal and stays missing.
fn seasonal_category(code: Option<&str>) -> Option<&'static str> {
    let code = code?.trim().replace('.', "").to_uppercase();
    // `get` rather than slicing: a prefix landing mid-character is a
    // malformed code, not a panic.
    if let Some(prefix) = code.get(..4)
        && let Some(label) = maps::lookup_str(maps::SEASONAL_ICD10_4CHAR, prefix)
    {
        return Some(label);
    }
    maps::lookup_str(maps::SEASONAL_ICD10_3CHAR, code.get(..3)?)
}
