//! Response kinds and dispatch to the payload decoders.

use std::fmt;
use std::str::FromStr;

use bytes::Buf;
use prost::Message;
use serde::Serialize;
use tracing::{debug, warn};

use crate::array::TabularArray;
use crate::block::OpaqueBlock;
use crate::error::{DataError, DataResult};
use crate::files::FileManifest;
use crate::grid::ScalarGrid;
use crate::metadata::ResponseMetadata;
use crate::vector::VectorGrid;

/// Wire message kinds returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResponseKind {
    /// `RetArray2D`: station/table data
    #[serde(rename = "array2d")]
    Array2D,
    /// `RetDataBlock`: named opaque bytes
    #[serde(rename = "data-block")]
    DataBlock,
    /// `RetFilesInfo`: file listing
    #[serde(rename = "files-info")]
    FilesInfo,
    /// `RetGridArray2D`: scalar grid, columns derived from the row count
    #[serde(rename = "grid-array2d")]
    GridArray2D,
    /// `RetGridScalar2D`: scalar grid with declared lat/lon counts
    #[serde(rename = "grid-scalar2d")]
    GridScalar2D,
    /// `RetGridVector2D`: u/v grid pair
    #[serde(rename = "grid-vector2d")]
    GridVector2D,
}

impl ResponseKind {
    pub const ALL: [ResponseKind; 6] = [
        ResponseKind::Array2D,
        ResponseKind::DataBlock,
        ResponseKind::FilesInfo,
        ResponseKind::GridArray2D,
        ResponseKind::GridScalar2D,
        ResponseKind::GridVector2D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseKind::Array2D => "array2d",
            ResponseKind::DataBlock => "data-block",
            ResponseKind::FilesInfo => "files-info",
            ResponseKind::GridArray2D => "grid-array2d",
            ResponseKind::GridScalar2D => "grid-scalar2d",
            ResponseKind::GridVector2D => "grid-vector2d",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = DataError;

    /// Parse a kind name. Case and `_`/`-` separators are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ResponseKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized || kind.as_str().replace('-', "") == normalized)
            .ok_or_else(|| DataError::UnknownKind(s.to_string()))
    }
}

/// A decoded response: metadata plus a payload that exists only on success.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response<T> {
    /// Wire kind the response was decoded from
    pub kind: ResponseKind,
    pub metadata: ResponseMetadata,
    pub payload: Option<T>,
}

impl<T> Response<T> {
    /// Build a response, running `payload` only when the service reported success.
    pub(crate) fn build<F>(kind: ResponseKind, metadata: ResponseMetadata, payload: F) -> DataResult<Self>
    where
        F: FnOnce(&ResponseMetadata) -> DataResult<T>,
    {
        if !metadata.is_success() {
            warn!(
                kind = %kind,
                error_code = metadata.error_code,
                error_message = %metadata.error_message,
                "Service reported an error, skipping payload"
            );
            return Ok(Self {
                kind,
                metadata,
                payload: None,
            });
        }

        let payload = payload(&metadata)?;
        Ok(Self {
            kind,
            metadata,
            payload: Some(payload),
        })
    }

    pub fn is_success(&self) -> bool {
        self.metadata.is_success()
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// The payload, or the service error when the request failed.
    pub fn into_result(self) -> DataResult<T> {
        self.metadata.check()?;
        // A successful response always carries its payload.
        self.payload.ok_or(DataError::Service {
            code: self.metadata.error_code,
            message: self.metadata.error_message,
        })
    }
}

/// Any decoded response, tagged by payload shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum DecodedResponse {
    #[serde(rename = "array2d")]
    Array2D(Response<TabularArray>),
    DataBlock(Response<OpaqueBlock>),
    FilesInfo(Response<FileManifest>),
    ScalarGrid(Response<ScalarGrid>),
    VectorGrid(Response<VectorGrid>),
}

impl DecodedResponse {
    pub fn metadata(&self) -> &ResponseMetadata {
        match self {
            DecodedResponse::Array2D(r) => &r.metadata,
            DecodedResponse::DataBlock(r) => &r.metadata,
            DecodedResponse::FilesInfo(r) => &r.metadata,
            DecodedResponse::ScalarGrid(r) => &r.metadata,
            DecodedResponse::VectorGrid(r) => &r.metadata,
        }
    }

    /// Kind passed to [`decode`]; tells GridArray2D and GridScalar2D apart.
    pub fn kind(&self) -> ResponseKind {
        match self {
            DecodedResponse::Array2D(r) => r.kind,
            DecodedResponse::DataBlock(r) => r.kind,
            DecodedResponse::FilesInfo(r) => r.kind,
            DecodedResponse::ScalarGrid(r) => r.kind,
            DecodedResponse::VectorGrid(r) => r.kind,
        }
    }

    pub fn is_success(&self) -> bool {
        self.metadata().is_success()
    }

    /// Human readable name of the payload shape.
    pub fn shape_name(&self) -> &'static str {
        match self {
            DecodedResponse::Array2D(_) => "array2d",
            DecodedResponse::DataBlock(_) => "data block",
            DecodedResponse::FilesInfo(_) => "files info",
            DecodedResponse::ScalarGrid(_) => "scalar grid",
            DecodedResponse::VectorGrid(_) => "vector grid",
        }
    }
}

/// Decode `buf` as a message of the given kind.
pub fn decode<B: Buf>(buf: B, kind: ResponseKind) -> DataResult<DecodedResponse> {
    debug!(kind = %kind, bytes = buf.remaining(), "Decoding response");

    let response = match kind {
        ResponseKind::Array2D => DecodedResponse::Array2D(TabularArray::decode(buf)?),
        ResponseKind::DataBlock => DecodedResponse::DataBlock(OpaqueBlock::decode(buf)?),
        ResponseKind::FilesInfo => DecodedResponse::FilesInfo(FileManifest::decode(buf)?),
        ResponseKind::GridArray2D => DecodedResponse::ScalarGrid(ScalarGrid::decode_grid_array(buf)?),
        ResponseKind::GridScalar2D => DecodedResponse::ScalarGrid(ScalarGrid::decode_grid_scalar(buf)?),
        ResponseKind::GridVector2D => DecodedResponse::VectorGrid(VectorGrid::decode(buf)?),
    };

    Ok(response)
}

/// Parse the wire message for `kind` from `buf`.
pub(crate) fn decode_message<M, B>(kind: ResponseKind, buf: B) -> DataResult<M>
where
    M: Message + Default,
    B: Buf,
{
    M::decode(buf).map_err(|source| DataError::Decode { kind, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_name() {
        for kind in ResponseKind::ALL {
            assert_eq!(kind.as_str().parse::<ResponseKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_is_lenient() {
        assert_eq!("GRID_VECTOR2D".parse::<ResponseKind>().unwrap(), ResponseKind::GridVector2D);
        assert_eq!("gridarray2d".parse::<ResponseKind>().unwrap(), ResponseKind::GridArray2D);
        assert_eq!(" Data-Block ".parse::<ResponseKind>().unwrap(), ResponseKind::DataBlock);
    }

    #[test]
    fn test_kind_parse_unknown() {
        let err = "station".parse::<ResponseKind>().unwrap_err();
        assert!(matches!(err, DataError::UnknownKind(ref s) if s == "station"));
    }

    #[test]
    fn test_build_skips_payload_on_error() {
        let metadata = ResponseMetadata {
            error_code: -1,
            ..Default::default()
        };
        let response: Response<u32> =
            Response::build(ResponseKind::Array2D, metadata, |_| panic!("payload must not be built")).unwrap();
        assert!(response.payload.is_none());
        assert_eq!(response.kind, ResponseKind::Array2D);
        assert!(response.into_result().unwrap_err().is_service_error());
    }

    #[test]
    fn test_kind_recorded_on_success() {
        let response: Response<u32> =
            Response::build(ResponseKind::GridScalar2D, ResponseMetadata::default(), |_| Ok(7)).unwrap();
        assert_eq!(response.kind, ResponseKind::GridScalar2D);
        assert_eq!(response.payload(), Some(&7));
    }

    #[test]
    fn test_build_propagates_payload_error() {
        let result: DataResult<Response<u32>> =
            Response::build(ResponseKind::Array2D, ResponseMetadata::default(), |_| {
                Err(DataError::UnknownKind("x".to_string()))
            });
        assert!(result.is_err());
    }
}
