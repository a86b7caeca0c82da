//! Adult cohort age bands.
//!
//! Bin edges are half-open on the left and closed on the right, so
//! `(17, 20]` holds ages 18 to 20 and `(85, 130]` is the `>85` band.
//! Shared by both dataset families' feature layers.

pub const AGE_BAND_LABELS: [&str; 15] = [
    "18-19",
    "20 - 24",
    "25 - 29",
    "30 - 34",
    "35 - 39",
    "40 - 44",
    "45 - 49",
    "50 - 54",
    "55 - 59",
    "60 - 64",
    "65 - 69",
    "70 - 74",
    "75 - 79",
    "80 - 84",
    ">85",
];

pub const AGE_BAND_EDGES: [f64; 16] = [
    17.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0, 80.0, 85.0,
    130.0,
];

/// The band label for an age, or `None` outside the cohort range.
pub fn age_band(age: f64) -> Option<&'static str> {
    for (idx, label) in AGE_BAND_LABELS.iter().enumerate() {
        if age > AGE_BAND_EDGES[idx] && age <= AGE_BAND_EDGES[idx + 1] {
            return Some(label);
        }
    }
    None
}
