//! Polars `AnyValue` conversions.
//!
//! Helpers for reading cells out of a `DataFrame` and casting them to
//! the schema's semantic types.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use polars::prelude::{AnyValue, TimeUnit};

use aa_model::{CoercionPolicy, SemanticType, Value, format_numeric};

/// Days between 0001-01-01 (CE) and the Unix epoch; Polars dates are
/// day offsets from the epoch.
const EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// Converts a Polars AnyValue to a String representation.
/// Returns empty string for Null, properly formats numeric types.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "Y" } else { "N" }.to_string(),
        other => other.to_string(),
    }
}

/// Converts an AnyValue to f64, returning None for non-numeric or null values.
pub fn any_to_f64(value: &AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(*v)),
        AnyValue::Int16(v) => Some(f64::from(*v)),
        AnyValue::Int32(v) => Some(f64::from(*v)),
        AnyValue::Int64(v) => Some(*v as f64),
        AnyValue::UInt8(v) => Some(f64::from(*v)),
        AnyValue::UInt16(v) => Some(f64::from(*v)),
        AnyValue::UInt32(v) => Some(f64::from(*v)),
        AnyValue::UInt64(v) => Some(*v as f64),
        AnyValue::Float32(v) => Some(f64::from(*v)),
        AnyValue::Float64(v) => Some(*v),
        AnyValue::String(s) => parse_f64(s),
        AnyValue::StringOwned(s) => parse_f64(s),
        _ => None,
    }
}

/// Converts an AnyValue to i64, returning None for non-integral or null values.
pub fn any_to_i64(value: &AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(i64::from(*v)),
        AnyValue::Int16(v) => Some(i64::from(*v)),
        AnyValue::Int32(v) => Some(i64::from(*v)),
        AnyValue::Int64(v) => Some(*v),
        AnyValue::UInt8(v) => Some(i64::from(*v)),
        AnyValue::UInt16(v) => Some(i64::from(*v)),
        AnyValue::UInt32(v) => Some(i64::from(*v)),
        AnyValue::UInt64(v) => i64::try_from(*v).ok(),
        AnyValue::Float32(v) => float_to_i64(f64::from(*v)),
        AnyValue::Float64(v) => float_to_i64(*v),
        AnyValue::String(s) => parse_i64(s),
        AnyValue::StringOwned(s) => parse_i64(s),
        _ => None,
    }
}

/// True for nulls and blank/whitespace-only strings.
pub fn is_missing_value(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::String(s) => s.trim().is_empty(),
        AnyValue::StringOwned(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Coerce a raw cell into the column's semantic type.
///
/// Returns `None` when the value cannot be represented in that type
/// under the given policy; the caller records that as a type
/// violation. Missing cells always coerce to `Value::Missing`.
pub fn coerce(value: &AnyValue<'_>, ty: SemanticType, policy: CoercionPolicy) -> Option<Value> {
    if is_missing_value(value) {
        return Some(Value::Missing);
    }
    match policy {
        CoercionPolicy::Strict => coerce_strict(value, ty),
        CoercionPolicy::Coerce => coerce_lossy(value, ty),
    }
}

fn coerce_strict(value: &AnyValue<'_>, ty: SemanticType) -> Option<Value> {
    match ty {
        SemanticType::Int64 => match value {
            AnyValue::Int8(_)
            | AnyValue::Int16(_)
            | AnyValue::Int32(_)
            | AnyValue::Int64(_)
            | AnyValue::UInt8(_)
            | AnyValue::UInt16(_)
            | AnyValue::UInt32(_)
            | AnyValue::UInt64(_) => any_to_i64(value).map(Value::Int),
            _ => None,
        },
        SemanticType::Float64 => match value {
            AnyValue::Float32(v) => Some(Value::Float(f64::from(*v))),
            AnyValue::Float64(v) => Some(Value::Float(*v)),
            _ => None,
        },
        SemanticType::Str => match value {
            AnyValue::String(s) => Some(Value::Str(s.trim().to_string())),
            AnyValue::StringOwned(s) => Some(Value::Str(s.trim().to_string())),
            _ => None,
        },
        SemanticType::Date => any_to_date(value).map(Value::Date),
        SemanticType::Datetime => any_to_datetime(value).map(Value::Datetime),
    }
}

fn coerce_lossy(value: &AnyValue<'_>, ty: SemanticType) -> Option<Value> {
    match ty {
        SemanticType::Int64 => any_to_i64(value).map(Value::Int),
        SemanticType::Float64 => any_to_f64(value).map(Value::Float),
        SemanticType::Str => Some(Value::Str(any_to_string(value.clone()).trim().to_string())),
        SemanticType::Date => match value {
            AnyValue::String(s) => Value::parse_str(s, SemanticType::Date),
            AnyValue::StringOwned(s) => Value::parse_str(s, SemanticType::Date),
            _ => any_to_date(value).map(Value::Date),
        },
        SemanticType::Datetime => match value {
            AnyValue::String(s) => Value::parse_str(s, SemanticType::Datetime),
            AnyValue::StringOwned(s) => Value::parse_str(s, SemanticType::Datetime),
            _ => any_to_datetime(value).map(Value::Datetime),
        },
    }
}

fn any_to_date(value: &AnyValue<'_>) -> Option<NaiveDate> {
    match value {
        AnyValue::Date(days) => NaiveDate::from_num_days_from_ce_opt(days + EPOCH_DAYS_FROM_CE),
        _ => any_to_datetime(value).map(|dt| dt.date()),
    }
}

fn any_to_datetime(value: &AnyValue<'_>) -> Option<NaiveDateTime> {
    match value {
        AnyValue::Date(days) => NaiveDate::from_num_days_from_ce_opt(days + EPOCH_DAYS_FROM_CE)
            .and_then(|date| date.and_hms_opt(0, 0, 0)),
        AnyValue::Datetime(ts, unit, _) => timestamp_to_datetime(*ts, *unit),
        AnyValue::DatetimeOwned(ts, unit, _) => timestamp_to_datetime(*ts, *unit),
        _ => None,
    }
}

fn timestamp_to_datetime(ts: i64, unit: TimeUnit) -> Option<NaiveDateTime> {
    let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let offset = match unit {
        TimeUnit::Nanoseconds => Duration::nanoseconds(ts),
        TimeUnit::Microseconds => Duration::microseconds(ts),
        TimeUnit::Milliseconds => Duration::milliseconds(ts),
    };
    epoch.checked_add_signed(offset)
}

fn float_to_i64(v: f64) -> Option<i64> {
    if v.fract() == 0.0 && v >= i64::MIN as f64 && v <= i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Parses a string as i64, returning None for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_parses_strings_under_coerce_policy() {
        assert_eq!(
            coerce(&AnyValue::String("17"), SemanticType::Int64, CoercionPolicy::Coerce),
            Some(Value::Int(17))
        );
        assert_eq!(
            coerce(&AnyValue::String("abc"), SemanticType::Int64, CoercionPolicy::Coerce),
            None
        );
        assert_eq!(
            coerce(&AnyValue::Int64(5), SemanticType::Str, CoercionPolicy::Coerce),
            Some(Value::Str("5".to_string()))
        );
    }

    #[test]
    fn coerce_strict_rejects_cross_type_values() {
        assert_eq!(
            coerce(&AnyValue::String("17"), SemanticType::Int64, CoercionPolicy::Strict),
            None
        );
        assert_eq!(
            coerce(&AnyValue::Int64(17), SemanticType::Int64, CoercionPolicy::Strict),
            Some(Value::Int(17))
        );
        assert_eq!(
            coerce(&AnyValue::Int64(17), SemanticType::Float64, CoercionPolicy::Strict),
            None
        );
    }

    #[test]
    fn blank_cells_are_missing_regardless_of_type() {
        for ty in [
            SemanticType::Int64,
            SemanticType::Float64,
            SemanticType::Str,
            SemanticType::Date,
            SemanticType::Datetime,
        ] {
            assert_eq!(
                coerce(&AnyValue::String("  "), ty, CoercionPolicy::Coerce),
                Some(Value::Missing)
            );
            assert_eq!(coerce(&AnyValue::Null, ty, CoercionPolicy::Coerce), Some(Value::Missing));
        }
    }

    #[test]
    fn date_strings_coerce_to_dates() {
        let value = coerce(
            &AnyValue::String("2021-11-05"),
            SemanticType::Date,
            CoercionPolicy::Coerce,
        );
        assert_eq!(
            value,
            Some(Value::Date(NaiveDate::from_ymd_opt(2021, 11, 5).unwrap()))
        );
        assert_eq!(
            coerce(&AnyValue::String("not a date"), SemanticType::Date, CoercionPolicy::Coerce),
            None
        );
    }

    #[test]
    fn integral_floats_coerce_to_int() {
        assert_eq!(
            coerce(&AnyValue::Float64(4.0), SemanticType::Int64, CoercionPolicy::Coerce),
            Some(Value::Int(4))
        );
        assert_eq!(
            coerce(&AnyValue::Float64(4.5), SemanticType::Int64, CoercionPolicy::Coerce),
            None
        );
    }
}
