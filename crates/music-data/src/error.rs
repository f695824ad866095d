//! Error types for response decoding and conversion.

use music_common::ShapeError;
use thiserror::Error;

use crate::response::ResponseKind;

/// Result type for decoding operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while decoding or converting a response.
#[derive(Debug, Error)]
pub enum DataError {
    /// The bytes are not a valid message of the expected kind.
    #[error("Failed to decode {kind} message: {source}")]
    Decode {
        kind: ResponseKind,
        #[source]
        source: prost::DecodeError,
    },

    /// The payload does not fit its declared dimensions.
    #[error("Inconsistent payload shape: {0}")]
    Shape(#[from] ShapeError),

    /// The service reported a failure for the request.
    #[error("Service error {code}: {message}")]
    Service { code: i32, message: String },

    /// A conversion was requested on a response shape that has no such mapping.
    #[error("Conversion '{operation}' is not supported for {shape} responses")]
    UnsupportedConversion {
        operation: &'static str,
        shape: &'static str,
    },

    /// Column labels do not line up with the table's columns.
    #[error("{labels} column names for {columns} columns")]
    ColumnLabelMismatch { labels: usize, columns: usize },

    /// A coordinate axis does not match the grid dimension it labels.
    #[error("{axis} axis has {axis_len} values but the grid has {data_len}")]
    AxisMismatch {
        axis: &'static str,
        axis_len: usize,
        data_len: usize,
    },

    /// Unrecognised response kind name.
    #[error("Unknown response kind: {0}")]
    UnknownKind(String),
}

impl DataError {
    /// Whether the error comes from the service rather than from the bytes or the caller.
    pub fn is_service_error(&self) -> bool {
        matches!(self, DataError::Service { .. })
    }
}
