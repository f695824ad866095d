//! Decoding of MUSIC data service responses.
//!
//! The service answers every query with one protobuf message whose shape
//! depends on the interface that was called. Each message embeds a
//! `RequestInfo` block; when its error code is non-zero the payload is
//! meaningless and the decoders stop after reading the metadata.
//!
//! # Response kinds
//!
//! | Kind            | Decoded as       |
//! |-----------------|------------------|
//! | `array2d`       | [`TabularArray`] |
//! | `data-block`    | [`OpaqueBlock`]  |
//! | `files-info`    | [`FileManifest`] |
//! | `grid-array2d`  | [`ScalarGrid`]   |
//! | `grid-scalar2d` | [`ScalarGrid`]   |
//! | `grid-vector2d` | [`VectorGrid`]   |
//!
//! # Example
//!
//! ```ignore
//! use music_data::{decode, to_grid_field, ResponseKind};
//!
//! let response = decode(body, ResponseKind::GridArray2D)?;
//! response.metadata().check()?;
//! let field = to_grid_field(&response)?;
//! ```

pub mod array;
pub mod block;
pub mod convert;
pub mod error;
pub mod files;
pub mod grid;
pub mod metadata;
pub mod response;
pub mod vector;

pub use array::TabularArray;
pub use block::OpaqueBlock;
pub use convert::{to_grid_field, to_tabular, Coordinate, DataVariable, GridField, Table};
pub use error::{DataError, DataResult};
pub use files::{FileEntry, FileManifest};
pub use grid::{GridExtent, ScalarGrid};
pub use metadata::ResponseMetadata;
pub use response::{decode, DecodedResponse, Response, ResponseKind};
pub use vector::VectorGrid;
