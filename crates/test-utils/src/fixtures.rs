//! Common test fixtures for MUSIC response decoding.
//!
//! Each builder returns a wire message pre-filled for the common case;
//! tests tweak individual fields and call [`encode`] to get the bytes a
//! decoder would receive from the transport.

use bytes::Bytes;
use music_proto::{
    FileInfo, RequestInfo, RetArray2D, RetDataBlock, RetFilesInfo, RetGridArray2D,
    RetGridScalar2D, RetGridVector2D,
};
use prost::Message;

/// Error code and message used for service failure scenarios.
pub const SERVICE_ERROR: (i32, &str) = (500, "invalid params");

/// Encode a message to the bytes a decoder receives.
pub fn encode<M: Message>(message: &M) -> Bytes {
    Bytes::from(message.encode_to_vec())
}

/// Metadata block for a successful response with the given declared dimensions.
pub fn ok_request(row_count: i32, col_count: i32) -> RequestInfo {
    RequestInfo {
        error_code: 0,
        error_message: String::new(),
        request_elems: "Station_Id_C,Lat,Lon,TEM".to_string(),
        request_params: "dataCode=SURF_CHN_MUL_HOR&times=20240101000000".to_string(),
        request_time: "2024-01-01 00:00:05".to_string(),
        response_time: "2024-01-01 00:00:06".to_string(),
        row_count,
        take_time: 42,
        col_count,
    }
}

/// Metadata block for a failed request.
pub fn error_request(error_code: i32, error_message: &str) -> RequestInfo {
    RequestInfo {
        error_code,
        error_message: error_message.to_string(),
        ..ok_request(0, 0)
    }
}

/// A table response with `rows x cols` values and matching column names.
pub fn array2d(rows: usize, cols: usize) -> RetArray2D {
    RetArray2D {
        data: crate::create_station_table(rows, cols),
        request: Some(ok_request(rows as i32, cols as i32)),
        element_names: (0..cols).map(|c| format!("col{}", c)).collect(),
    }
}

/// A named data block.
pub fn data_block(name: &str, payload: &[u8]) -> RetDataBlock {
    RetDataBlock {
        request: Some(ok_request(0, 0)),
        data_name: name.to_string(),
        byte_array: Bytes::copy_from_slice(payload),
    }
}

/// A file entry with a numeric size.
pub fn file_info(name: &str, size: u64) -> FileInfo {
    FileInfo {
        file_name: name.to_string(),
        save_path: format!("/data/radar/{}", name),
        suffix: name.rsplit('.').next().unwrap_or_default().to_string(),
        size: size.to_string(),
        file_url: format!("http://example.invalid/files/{}", name),
        img_base64: String::new(),
        attributes: vec!["RADA".to_string(), "Z9010".to_string()],
    }
}

/// A file-list response.
pub fn files_info(names: &[&str]) -> RetFilesInfo {
    RetFilesInfo {
        file_infos: names
            .iter()
            .enumerate()
            .map(|(i, name)| file_info(name, 1024 * (i as u64 + 1)))
            .collect(),
        request: Some(ok_request(names.len() as i32, 0)),
    }
}

/// A grid-array response on an implicit axis starting at (start_lat, start_lon)
/// with 1 degree steps. `request.row_count` is set to `lat_count`.
pub fn grid_array2d(start_lat: f32, start_lon: f32, lat_count: i32, lon_count: i32) -> RetGridArray2D {
    let data = crate::create_test_grid(lon_count as usize, lat_count as usize);
    RetGridArray2D {
        data,
        request: Some(ok_request(lat_count, lon_count)),
        start_lat,
        start_lon,
        end_lat: start_lat + (lat_count - 1) as f32,
        end_lon: start_lon + (lon_count - 1) as f32,
        lat_count,
        lon_count,
        lon_step: 1.0,
        lat_step: 1.0,
        lats: Vec::new(),
        lons: Vec::new(),
        units: "K".to_string(),
        user_ele_name: "TEM".to_string(),
    }
}

/// A grid-scalar response on an implicit 1 degree axis.
pub fn grid_scalar2d(start_lat: f32, start_lon: f32, lat_count: i32, lon_count: i32) -> RetGridScalar2D {
    let g = grid_array2d(start_lat, start_lon, lat_count, lon_count);
    RetGridScalar2D {
        datas: g.data,
        request: g.request,
        start_lat: g.start_lat,
        start_lon: g.start_lon,
        end_lat: g.end_lat,
        end_lon: g.end_lon,
        lat_count: g.lat_count,
        lon_count: g.lon_count,
        lon_step: g.lon_step,
        lat_step: g.lat_step,
        lats: g.lats,
        lons: g.lons,
        units: "Pa".to_string(),
        user_ele_name: "PRS".to_string(),
    }
}

/// A wind vector response on an implicit 1 degree axis.
pub fn grid_vector2d(start_lat: f32, start_lon: f32, lat_count: i32, lon_count: i32) -> RetGridVector2D {
    let (u_datas, v_datas) = crate::create_wind_components(lon_count as usize, lat_count as usize);
    RetGridVector2D {
        u_datas,
        v_datas,
        request: Some(ok_request(lat_count, lon_count)),
        start_lat,
        start_lon,
        end_lat: start_lat + (lat_count - 1) as f32,
        end_lon: start_lon + (lon_count - 1) as f32,
        lat_count,
        lon_count,
        lon_step: 1.0,
        lat_step: 1.0,
        lats: Vec::new(),
        lons: Vec::new(),
        u_ele_name: "WIU".to_string(),
        v_ele_name: "WIV".to_string(),
    }
}
