//! Envelope metadata shared by every response kind.

use music_proto::RequestInfo;
use serde::Serialize;

use crate::error::{DataError, DataResult};

/// Bookkeeping copied from a response's `RequestInfo` block.
///
/// `error_code` is 0 on success. For any other value the payload of the
/// response is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResponseMetadata {
    pub error_code: i32,
    pub error_message: String,
    /// Elements requested, comma separated
    pub request_elements: String,
    pub request_params: String,
    pub request_time: String,
    pub response_time: String,
    /// Declared number of rows in the payload
    pub row_count: i32,
    /// Declared number of columns in the payload
    pub col_count: i32,
    /// Server-side processing time in milliseconds
    pub take_time: i32,
}

impl ResponseMetadata {
    /// Copy metadata from an optional wire block. A missing block reads as defaults.
    pub fn from_request(request: Option<&RequestInfo>) -> Self {
        request.map(Self::from).unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.error_code == 0
    }

    /// Turn a service-reported failure into an error.
    pub fn check(&self) -> DataResult<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(DataError::Service {
                code: self.error_code,
                message: self.error_message.clone(),
            })
        }
    }
}

impl From<&RequestInfo> for ResponseMetadata {
    fn from(request: &RequestInfo) -> Self {
        Self {
            error_code: request.error_code,
            error_message: request.error_message.clone(),
            request_elements: request.request_elems.clone(),
            request_params: request.request_params.clone(),
            request_time: request.request_time.clone(),
            response_time: request.response_time.clone(),
            row_count: request.row_count,
            col_count: request.col_count,
            take_time: request.take_time,
        }
    }
}

impl From<RequestInfo> for ResponseMetadata {
    fn from(request: RequestInfo) -> Self {
        Self {
            error_code: request.error_code,
            error_message: request.error_message,
            request_elements: request.request_elems,
            request_params: request.request_params,
            request_time: request.request_time,
            response_time: request.response_time,
            row_count: request.row_count,
            col_count: request.col_count,
            take_time: request.take_time,
        }
    }
}
