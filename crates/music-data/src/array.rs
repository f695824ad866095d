//! Table responses (`RetArray2D`).

use bytes::Buf;
use music_common::{dimension, reshape_rows};
use music_proto::RetArray2D;
use ndarray::Array2;
use serde::Serialize;
use tracing::debug;

use crate::error::DataResult;
use crate::metadata::ResponseMetadata;
use crate::response::{decode_message, Response, ResponseKind};

/// Row-major table of values with one name per column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabularArray {
    /// `row_count x col_count` values
    pub values: Array2<f64>,
    pub column_names: Vec<String>,
    pub row_count: usize,
    pub col_count: usize,
}

impl TabularArray {
    pub fn decode<B: Buf>(buf: B) -> DataResult<Response<Self>> {
        let message: RetArray2D = decode_message(ResponseKind::Array2D, buf)?;
        Self::from_message(message)
    }

    /// Build from a parsed message.
    ///
    /// The column count is derived from the payload length and the declared
    /// row count, then checked against the declared column count.
    pub fn from_message(message: RetArray2D) -> DataResult<Response<Self>> {
        let metadata = ResponseMetadata::from_request(message.request.as_ref());

        Response::build(ResponseKind::Array2D, metadata, move |metadata| {
            let rows = dimension(metadata.row_count, "row_count")?;
            let declared_cols = dimension(metadata.col_count, "col_count")?;

            let values = reshape_rows(message.data, rows, Some(declared_cols))?;
            let (row_count, col_count) = values.dim();
            debug!(rows = row_count, cols = col_count, "Decoded table");

            Ok(Self {
                values,
                column_names: message.element_names,
                row_count,
                col_count,
            })
        })
    }
}
