//! Row-major / column-major layouts and the conversions between them
//!
//! A frame keeps its numbers in up to two physical layouts:
//! - RowMajor: one `Array2<f64>` of shape (nrows, ncols), rows contiguous
//! - ColumnMajor: one contiguous `Array1<f64>` per column
//!
//! Either layout can be rebuilt from the other; both carry the same values.

use ndarray::{Array1, Array2, ArrayView2, Axis};

/// Physical layout of frame data
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Rows are contiguous (cheap row slicing)
    RowMajor,

    /// Each column is its own contiguous array (cheap column access)
    ColumnMajor,
}

/// Which layouts a frame currently holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Materialized {
    pub rows: bool,
    pub columns: bool,
}

impl Materialized {
    pub fn has(self, layout: Layout) -> bool {
        match layout {
            Layout::RowMajor => self.rows,
            Layout::ColumnMajor => self.columns,
        }
    }
}

/// Split a row-major matrix into one contiguous array per column
pub fn split_columns(rows: ArrayView2<'_, f64>) -> Vec<Array1<f64>> {
    rows.axis_iter(Axis(1)).map(|col| col.to_owned()).collect()
}

/// Stack per-column arrays into a row-major matrix of shape (nrows, ncols)
///
/// All columns must have length `nrows`.
pub fn stack_columns(columns: &[Array1<f64>], nrows: usize) -> Array2<f64> {
    debug_assert!(columns.iter().all(|c| c.len() == nrows));
    Array2::from_shape_fn((nrows, columns.len()), |(i, j)| columns[j][i])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_split_columns_is_transpose() {
        let rows = array![[0.0, 1.0, 2.0], [10.0, 11.0, 12.0]];
        let cols = split_columns(rows.view());

        assert_eq!(cols.len(), 3);
        assert_eq!(cols[1], array![1.0, 11.0]);
        assert!(cols.iter().all(|c| c.is_standard_layout()));
    }

    #[test]
    fn test_stack_columns_row_major() {
        let cols = vec![array![1.0, 2.0], array![3.0, 4.0]];
        let rows = stack_columns(&cols, 2);

        assert_eq!(rows, array![[1.0, 3.0], [2.0, 4.0]]);
        assert!(rows.is_standard_layout());
    }

    #[test]
    fn test_stack_zero_columns_keeps_row_count() {
        let rows = stack_columns(&[], 4);
        assert_eq!(rows.dim(), (4, 0));
    }

    #[test]
    fn test_split_then_stack() {
        let rows = array![[1.0, f64::NAN], [3.0, 4.0], [5.0, 6.0]];
        let back = stack_columns(&split_columns(rows.view()), 3);
        assert_eq!(back[[2, 1]], 6.0);
        assert!(back[[0, 1]].is_nan());
    }

    #[test]
    fn test_materialized_flags() {
        let m = Materialized { rows: true, columns: false };
        assert!(m.has(Layout::RowMajor));
        assert!(!m.has(Layout::ColumnMajor));
    }
}
