//! DataFrame row selection helpers.

use polars::prelude::{DataFrame, IdxCa, PolarsResult};

/// Materialize the given rows (by original index, in the order given)
/// into a new frame with the same column shape.
pub fn take_rows(df: &DataFrame, indices: &[usize]) -> PolarsResult<DataFrame> {
    let idx: Vec<u32> = indices.iter().map(|&i| i as u32).collect();
    df.take(&IdxCa::from_vec("take".into(), idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    #[test]
    fn take_rows_preserves_order_and_shape() {
        let df = DataFrame::new(vec![
            Column::new("visit_id".into(), [1i64, 2, 3, 4]),
            Column::new("gender".into(), ["1", "2", "9", "X"]),
        ])
        .unwrap();

        let taken = take_rows(&df, &[0, 2]).unwrap();
        assert_eq!(taken.height(), 2);
        assert_eq!(taken.get_column_names(), df.get_column_names());

        let empty = take_rows(&df, &[]).unwrap();
        assert_eq!(empty.height(), 0);
    }
}
