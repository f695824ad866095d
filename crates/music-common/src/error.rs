//! Error types for shape validation.

use thiserror::Error;

/// Result type alias using ShapeError.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// A flat payload could not be laid out with the dimensions it was sent with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("Cannot derive columns from {len} values with zero rows")]
    ZeroRows { len: usize },

    #[error("{len} values cannot be split evenly into {rows} rows")]
    NotDivisible { len: usize, rows: usize },

    #[error("Derived column count {derived} does not match declared column count {declared}")]
    ColumnMismatch { derived: usize, declared: usize },

    #[error("{label} has {actual} values, expected {expected} ({rows} x {cols})")]
    LengthMismatch {
        label: String,
        expected: usize,
        actual: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Dimension '{name}' is negative: {value}")]
    NegativeDimension { name: String, value: i64 },
}
