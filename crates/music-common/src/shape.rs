//! Reshaping flat wire payloads into row-major 2D grids.
//!
//! The service sends every grid as a flat list. Depending on the response
//! kind the column count is either derived from the row count (`len / rows`)
//! or taken from the declared latitude/longitude counts.

use ndarray::Array2;

use crate::error::{ShapeError, ShapeResult};

/// Convert a wire count to `usize`, rejecting negative values.
pub fn dimension(value: i32, name: &str) -> ShapeResult<usize> {
    usize::try_from(value).map_err(|_| ShapeError::NegativeDimension {
        name: name.to_string(),
        value: value as i64,
    })
}

/// Derive the column count of a flat sequence of `len` values laid out in `rows` rows.
///
/// An empty payload with zero rows is an empty result set and yields zero columns.
pub fn derive_columns(len: usize, rows: usize) -> ShapeResult<usize> {
    if rows == 0 {
        return if len == 0 {
            Ok(0)
        } else {
            Err(ShapeError::ZeroRows { len })
        };
    }

    if len % rows != 0 {
        return Err(ShapeError::NotDivisible { len, rows });
    }

    Ok(len / rows)
}

/// Reshape `flat` into `rows` rows, deriving the column count from its length.
///
/// When `declared_cols` is given, the derived count must match it.
pub fn reshape_rows<T>(flat: Vec<T>, rows: usize, declared_cols: Option<usize>) -> ShapeResult<Array2<T>> {
    let cols = derive_columns(flat.len(), rows)?;

    if let Some(declared) = declared_cols {
        // An empty result set keeps its declared width.
        if rows == 0 {
            return into_array(flat, 0, declared);
        }
        if cols != declared {
            return Err(ShapeError::ColumnMismatch {
                derived: cols,
                declared,
            });
        }
    }

    into_array(flat, rows, cols)
}

/// Reshape `flat` into exactly `rows` x `cols`.
///
/// `label` names the payload in the error (e.g. "u component").
pub fn reshape_exact<T>(flat: Vec<T>, rows: usize, cols: usize, label: &str) -> ShapeResult<Array2<T>> {
    let expected = rows * cols;
    if flat.len() != expected {
        return Err(ShapeError::LengthMismatch {
            label: label.to_string(),
            expected,
            actual: flat.len(),
            rows,
            cols,
        });
    }

    into_array(flat, rows, cols)
}

fn into_array<T>(flat: Vec<T>, rows: usize, cols: usize) -> ShapeResult<Array2<T>> {
    let len = flat.len();
    Array2::from_shape_vec((rows, cols), flat).map_err(|_| ShapeError::LengthMismatch {
        label: "payload".to_string(),
        expected: rows * cols,
        actual: len,
        rows,
        cols,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_columns() {
        assert_eq!(derive_columns(12, 3), Ok(4));
        assert_eq!(derive_columns(0, 0), Ok(0));
        assert_eq!(derive_columns(0, 4), Ok(0));
    }

    #[test]
    fn test_derive_columns_not_divisible() {
        assert_eq!(
            derive_columns(10, 3),
            Err(ShapeError::NotDivisible { len: 10, rows: 3 })
        );
    }

    #[test]
    fn test_derive_columns_zero_rows() {
        assert_eq!(derive_columns(5, 0), Err(ShapeError::ZeroRows { len: 5 }));
    }

    #[test]
    fn test_reshape_rows_is_row_major() {
        let grid = reshape_rows((0..6).collect::<Vec<i32>>(), 2, None).unwrap();
        assert_eq!(grid.dim(), (2, 3));
        assert_eq!(grid[[0, 2]], 2);
        assert_eq!(grid[[1, 0]], 3);
        assert_eq!(grid[[1, 2]], 5);
    }

    #[test]
    fn test_reshape_rows_round_trip() {
        for (len, rows) in [(12, 3), (12, 4), (7, 7), (7, 1), (100, 10)] {
            let flat: Vec<f64> = (0..len).map(|i| i as f64 * 0.5).collect();
            let grid = reshape_rows(flat.clone(), rows, None).unwrap();
            assert_eq!(grid.dim(), (rows, len / rows));
            assert_eq!(grid.iter().copied().collect::<Vec<_>>(), flat);
        }
    }

    #[test]
    fn test_reshape_rows_declared_column_mismatch() {
        let err = reshape_rows(vec![0.0; 12], 3, Some(5)).unwrap_err();
        assert_eq!(err, ShapeError::ColumnMismatch { derived: 4, declared: 5 });
    }

    #[test]
    fn test_reshape_rows_empty_keeps_declared_width() {
        let grid = reshape_rows(Vec::<f64>::new(), 0, Some(4)).unwrap();
        assert_eq!(grid.dim(), (0, 4));
    }

    #[test]
    fn test_reshape_exact() {
        let grid = reshape_exact(vec![1.0f32; 6], 2, 3, "u component").unwrap();
        assert_eq!(grid.dim(), (2, 3));

        let err = reshape_exact(vec![1.0f32; 5], 2, 3, "u component").unwrap_err();
        assert!(err.to_string().contains("u component"));
        assert!(matches!(err, ShapeError::LengthMismatch { expected: 6, actual: 5, .. }));
    }

    #[test]
    fn test_dimension_rejects_negative() {
        assert_eq!(dimension(3, "lat_count"), Ok(3));
        assert!(matches!(
            dimension(-1, "lat_count"),
            Err(ShapeError::NegativeDimension { value: -1, .. })
        ));
    }
}
