//! Named byte blocks (`RetDataBlock`).

use bytes::{Buf, Bytes};
use music_proto::RetDataBlock;
use serde::Serialize;
use tracing::debug;

use crate::error::DataResult;
use crate::metadata::ResponseMetadata;
use crate::response::{decode_message, Response, ResponseKind};

/// Opaque payload passed through as sent, e.g. a radar product file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpaqueBlock {
    pub name: String,
    pub bytes: Bytes,
}

impl OpaqueBlock {
    pub fn decode<B: Buf>(buf: B) -> DataResult<Response<Self>> {
        let message: RetDataBlock = decode_message(ResponseKind::DataBlock, buf)?;
        Self::from_message(message)
    }

    pub fn from_message(message: RetDataBlock) -> DataResult<Response<Self>> {
        let metadata = ResponseMetadata::from_request(message.request.as_ref());

        Response::build(ResponseKind::DataBlock, metadata, move |_| {
            debug!(name = %message.data_name, bytes = message.byte_array.len(), "Decoded data block");
            Ok(Self {
                name: message.data_name,
                bytes: message.byte_array,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
