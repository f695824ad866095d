//! Common types and utilities shared by the MUSIC response decoders.
//!
//! This crate holds the pieces that do not depend on the wire schema:
//! - flat-to-2D reshaping with dimension checks
//! - coordinate axis reconstruction from explicit lists or (start, step, count)

pub mod axis;
pub mod error;
pub mod shape;

pub use axis::{reconstruct_axis, AxisSpec};
pub use error::{ShapeError, ShapeResult};
pub use shape::{derive_columns, dimension, reshape_exact, reshape_rows};
