//! Scalar lat/lon grids (`RetGridArray2D`, `RetGridScalar2D`).
//!
//! Both messages describe a regular grid with the same extent fields but
//! lay out their values differently:
//! - `RetGridArray2D` rows come from `request.row_count` and the column count
//!   is derived from the payload length
//! - `RetGridScalar2D` uses the declared `lat_count x lon_count` and the
//!   payload length must match it

use bytes::Buf;
use music_common::{dimension, reconstruct_axis, reshape_exact, reshape_rows, AxisSpec, ShapeResult};
use music_proto::{RetGridArray2D, RetGridScalar2D};
use ndarray::Array2;
use serde::Serialize;
use tracing::debug;

use crate::error::DataResult;
use crate::metadata::ResponseMetadata;
use crate::response::{decode_message, Response, ResponseKind};

/// Tolerance used when comparing a synthesized axis end with the declared one.
const END_TOLERANCE: f64 = 1e-3;

/// Extent and spacing of a regular lat/lon grid as declared on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GridExtent {
    pub start_lat: f64,
    pub start_lon: f64,
    pub end_lat: f64,
    pub end_lon: f64,
    pub lat_step: f64,
    pub lon_step: f64,
    pub lat_count: usize,
    pub lon_count: usize,
}

impl GridExtent {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_wire(
        start_lat: f32,
        start_lon: f32,
        end_lat: f32,
        end_lon: f32,
        lat_step: f32,
        lon_step: f32,
        lat_count: i32,
        lon_count: i32,
    ) -> ShapeResult<Self> {
        Ok(Self {
            start_lat: start_lat as f64,
            start_lon: start_lon as f64,
            end_lat: end_lat as f64,
            end_lon: end_lon as f64,
            lat_step: lat_step as f64,
            lon_step: lon_step as f64,
            lat_count: dimension(lat_count, "lat_count")?,
            lon_count: dimension(lon_count, "lon_count")?,
        })
    }

    pub fn latitude_spec(&self) -> AxisSpec {
        AxisSpec::new(self.start_lat, self.lat_step, self.lat_count)
    }

    pub fn longitude_spec(&self) -> AxisSpec {
        AxisSpec::new(self.start_lon, self.lon_step, self.lon_count)
    }

    /// Latitude axis from an explicit list, or synthesized when the list is empty.
    pub fn latitudes(&self, explicit: &[f32]) -> Vec<f64> {
        if explicit.is_empty() {
            self.log_end_mismatch("latitude", &self.latitude_spec(), self.end_lat);
        }
        reconstruct_axis(explicit, &self.latitude_spec())
    }

    /// Longitude axis from an explicit list, or synthesized when the list is empty.
    pub fn longitudes(&self, explicit: &[f32]) -> Vec<f64> {
        if explicit.is_empty() {
            self.log_end_mismatch("longitude", &self.longitude_spec(), self.end_lon);
        }
        reconstruct_axis(explicit, &self.longitude_spec())
    }

    fn log_end_mismatch(&self, axis: &str, spec: &AxisSpec, declared_end: f64) {
        if let Some(last) = spec.last() {
            if (last - declared_end).abs() > END_TOLERANCE {
                debug!(
                    axis,
                    synthesized_end = last,
                    declared_end,
                    "Synthesized axis does not end at the declared end coordinate"
                );
            }
        }
    }
}

/// A single scalar field on a lat/lon grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScalarGrid {
    pub values: Array2<f32>,
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
    pub extent: GridExtent,
    pub units: String,
    pub element_name: String,
}

impl ScalarGrid {
    pub fn decode_grid_array<B: Buf>(buf: B) -> DataResult<Response<Self>> {
        let message: RetGridArray2D = decode_message(ResponseKind::GridArray2D, buf)?;
        Self::from_grid_array(message)
    }

    pub fn decode_grid_scalar<B: Buf>(buf: B) -> DataResult<Response<Self>> {
        let message: RetGridScalar2D = decode_message(ResponseKind::GridScalar2D, buf)?;
        Self::from_grid_scalar(message)
    }

    /// Build from a `RetGridArray2D`.
    ///
    /// Values are laid out in `request.row_count` rows with the column count
    /// derived from the payload length, regardless of `lon_count`.
    pub fn from_grid_array(message: RetGridArray2D) -> DataResult<Response<Self>> {
        let metadata = ResponseMetadata::from_request(message.request.as_ref());

        Response::build(ResponseKind::GridArray2D, metadata, move |metadata| {
            let extent = GridExtent::from_wire(
                message.start_lat,
                message.start_lon,
                message.end_lat,
                message.end_lon,
                message.lat_step,
                message.lon_step,
                message.lat_count,
                message.lon_count,
            )?;

            let rows = dimension(metadata.row_count, "row_count")?;
            let values = reshape_rows(message.data, rows, None)?;

            Ok(Self::assemble(
                values,
                extent,
                &message.lats,
                &message.lons,
                message.units,
                message.user_ele_name,
            ))
        })
    }

    /// Build from a `RetGridScalar2D`, laid out as `lat_count x lon_count`.
    pub fn from_grid_scalar(message: RetGridScalar2D) -> DataResult<Response<Self>> {
        let metadata = ResponseMetadata::from_request(message.request.as_ref());

        Response::build(ResponseKind::GridScalar2D, metadata, move |_| {
            let extent = GridExtent::from_wire(
                message.start_lat,
                message.start_lon,
                message.end_lat,
                message.end_lon,
                message.lat_step,
                message.lon_step,
                message.lat_count,
                message.lon_count,
            )?;

            let values = reshape_exact(message.datas, extent.lat_count, extent.lon_count, "grid values")?;

            Ok(Self::assemble(
                values,
                extent,
                &message.lats,
                &message.lons,
                message.units,
                message.user_ele_name,
            ))
        })
    }

    fn assemble(
        values: Array2<f32>,
        extent: GridExtent,
        lats: &[f32],
        lons: &[f32],
        units: String,
        element_name: String,
    ) -> Self {
        let latitudes = extent.latitudes(lats);
        let longitudes = extent.longitudes(lons);

        debug!(
            element = %element_name,
            rows = values.nrows(),
            cols = values.ncols(),
            lat_count = latitudes.len(),
            lon_count = longitudes.len(),
            "Decoded scalar grid"
        );

        Self {
            values,
            latitudes,
            longitudes,
            extent,
            units,
            element_name,
        }
    }

    /// `(rows, cols)` of the value grid.
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use music_common::ShapeError;
    use test_utils::{encode, error_request, grid_array2d, grid_scalar2d};

    #[test]
    fn test_grid_array_synthesizes_axes() {
        let response = ScalarGrid::decode_grid_array(encode(&grid_array2d(20.0, 110.0, 3, 4))).unwrap();
        let grid = response.payload().unwrap();

        assert_eq!(grid.shape(), (3, 4));
        assert_eq!(grid.latitudes, vec![20.0, 21.0, 22.0]);
        assert_eq!(grid.longitudes, vec![110.0, 111.0, 112.0, 113.0]);
        assert_eq!(grid.units, "K");
        assert_eq!(grid.element_name, "TEM");
        // create_test_grid: value = col * 1000 + row
        assert_eq!(grid.values[[2, 3]], 3002.0);
    }

    #[test]
    fn test_grid_array_explicit_axes_take_priority() {
        let mut message = grid_array2d(0.0, 0.0, 2, 2);
        message.lats = vec![10.0, 20.5];
        message.lons = vec![100.0, 100.25];

        let grid = ScalarGrid::from_grid_array(message).unwrap().into_result().unwrap();
        assert_eq!(grid.latitudes, vec![10.0, 20.5]);
        assert_eq!(grid.longitudes, vec![100.0, 100.25]);
    }

    #[test]
    fn test_grid_array_each_axis_chosen_independently() {
        let mut message = grid_array2d(0.0, 50.0, 2, 3);
        message.lats = vec![-1.5, -3.0];

        let grid = ScalarGrid::from_grid_array(message).unwrap().into_result().unwrap();
        assert_eq!(grid.latitudes, vec![-1.5, -3.0]);
        assert_eq!(grid.longitudes, vec![50.0, 51.0, 52.0]);
    }

    #[test]
    fn test_grid_array_derives_columns_from_row_count() {
        let mut message = grid_array2d(0.0, 0.0, 3, 2);
        message.end_lat = 10.0;
        message.lat_step = 5.0;
        // lon_count disagrees with the payload; the derived column count wins
        message.lon_count = 7;

        let grid = ScalarGrid::from_grid_array(message).unwrap().into_result().unwrap();
        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid.latitudes, vec![0.0, 5.0, 10.0]);
        assert_eq!(grid.longitudes.len(), 7);
    }

    #[test]
    fn test_declared_end_does_not_override_step() {
        // end_lat says 50 but start/step/count give 0, 1, 2
        let mut message = grid_array2d(0.0, 0.0, 3, 2);
        message.end_lat = 50.0;
        message.end_lon = -7.0;

        let grid = ScalarGrid::from_grid_array(message).unwrap().into_result().unwrap();
        assert_eq!(grid.latitudes, vec![0.0, 1.0, 2.0]);
        assert_eq!(grid.longitudes, vec![0.0, 1.0]);
        assert_eq!(grid.extent.end_lat, 50.0);
    }

    #[test]
    fn test_extent_end_check_with_empty_axis() {
        let extent = GridExtent::from_wire(10.0, 20.0, 99.0, 99.0, 1.0, 1.0, 0, 2).unwrap();
        assert!(extent.latitudes(&[]).is_empty());
        assert_eq!(extent.longitudes(&[]), vec![20.0, 21.0]);
        assert_eq!(extent.latitude_spec().last(), None);
    }

    #[test]
    fn test_grid_array_not_divisible() {
        let mut message = grid_array2d(0.0, 0.0, 3, 2);
        message.data.push(1.0);

        let err = ScalarGrid::from_grid_array(message).unwrap_err();
        assert!(matches!(err, DataError::Shape(ShapeError::NotDivisible { len: 7, rows: 3 })));
    }

    #[test]
    fn test_grid_array_negative_count() {
        let mut message = grid_array2d(0.0, 0.0, 2, 2);
        message.lat_count = -2;

        let err = ScalarGrid::from_grid_array(message).unwrap_err();
        assert!(matches!(err, DataError::Shape(ShapeError::NegativeDimension { .. })));
    }

    #[test]
    fn test_grid_scalar_uses_declared_counts() {
        let response = ScalarGrid::decode_grid_scalar(encode(&grid_scalar2d(30.0, 100.0, 2, 3))).unwrap();
        let grid = response.payload().unwrap();

        assert_eq!(grid.shape(), (2, 3));
        assert_eq!(grid.units, "Pa");
        assert_eq!(grid.element_name, "PRS");
        assert_eq!(grid.latitudes, vec![30.0, 31.0]);
    }

    #[test]
    fn test_grid_scalar_length_mismatch() {
        let mut message = grid_scalar2d(30.0, 100.0, 2, 3);
        message.datas.truncate(5);

        let err = ScalarGrid::from_grid_scalar(message).unwrap_err();
        assert!(matches!(
            err,
            DataError::Shape(ShapeError::LengthMismatch { expected: 6, actual: 5, .. })
        ));
    }

    #[test]
    fn test_error_code_leaves_payload_empty() {
        let mut message = grid_array2d(0.0, 0.0, 3, 3);
        message.request = Some(error_request(500, "invalid params"));
        // A payload that would otherwise fail to reshape is never looked at
        message.data.push(1.0);

        let response = ScalarGrid::from_grid_array(message).unwrap();
        assert!(response.payload.is_none());
        assert_eq!(response.metadata.error_code, 500);
    }
}
