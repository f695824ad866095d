//! Vector grids (`RetGridVector2D`), e.g. u/v wind components.

use bytes::Buf;
use music_common::reshape_exact;
use music_proto::RetGridVector2D;
use ndarray::Array2;
use serde::Serialize;
use tracing::debug;

use crate::error::DataResult;
use crate::grid::GridExtent;
use crate::metadata::ResponseMetadata;
use crate::response::{decode_message, Response, ResponseKind};

/// Two co-registered components sharing one pair of lat/lon axes.
///
/// Both components are `lat_count x lon_count`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorGrid {
    pub u: Array2<f32>,
    pub v: Array2<f32>,
    pub latitudes: Vec<f64>,
    pub longitudes: Vec<f64>,
    pub extent: GridExtent,
    pub u_element_name: String,
    pub v_element_name: String,
}

impl VectorGrid {
    pub fn decode<B: Buf>(buf: B) -> DataResult<Response<Self>> {
        let message: RetGridVector2D = decode_message(ResponseKind::GridVector2D, buf)?;
        Self::from_message(message)
    }

    pub fn from_message(message: RetGridVector2D) -> DataResult<Response<Self>> {
        let metadata = ResponseMetadata::from_request(message.request.as_ref());

        Response::build(ResponseKind::GridVector2D, metadata, move |_| {
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

            let (rows, cols) = (extent.lat_count, extent.lon_count);
            let u = reshape_exact(message.u_datas, rows, cols, "u component")?;
            let v = reshape_exact(message.v_datas, rows, cols, "v component")?;

            let latitudes = extent.latitudes(&message.lats);
            let longitudes = extent.longitudes(&message.lons);

            debug!(
                u = %message.u_ele_name,
                v = %message.v_ele_name,
                rows,
                cols,
                "Decoded vector grid"
            );

            Ok(Self {
                u,
                v,
                latitudes,
                longitudes,
                extent,
                u_element_name: message.u_ele_name,
                v_element_name: message.v_ele_name,
            })
        })
    }

    /// `(lat_count, lon_count)` shared by both components.
    pub fn shape(&self) -> (usize, usize) {
        self.u.dim()
    }

    /// Magnitude of the vector at every grid point.
    pub fn magnitude(&self) -> Array2<f32> {
        ndarray::Zip::from(&self.u)
            .and(&self.v)
            .map_collect(|&u, &v| u.hypot(v))
    }
}
