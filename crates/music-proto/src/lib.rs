//! Protobuf messages returned by the MUSIC data interface.
//!
//! These mirror `apiinterface.proto` as published with the service client.
//! Every response message embeds a [`RequestInfo`] block carrying the error
//! code and the declared result dimensions.
//!
//! The structs are written by hand with `prost` derives instead of being
//! generated at build time, so the workspace builds without `protoc`.

use bytes::Bytes;

/// Per-response bookkeeping embedded in every message.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RequestInfo {
    /// 0 on success
    #[prost(int32, tag = "1")]
    pub error_code: i32,
    #[prost(string, tag = "2")]
    pub error_message: String,
    #[prost(string, tag = "3")]
    pub request_elems: String,
    #[prost(string, tag = "4")]
    pub request_params: String,
    #[prost(string, tag = "5")]
    pub request_time: String,
    #[prost(string, tag = "6")]
    pub response_time: String,
    #[prost(int32, tag = "7")]
    pub row_count: i32,
    /// Milliseconds spent server side
    #[prost(int32, tag = "8")]
    pub take_time: i32,
    #[prost(int32, tag = "9")]
    pub col_count: i32,
}

/// Flat table of values, `row_count x col_count` in row-major order.
///
/// `data` is modelled as numeric. Station tables that request string columns
/// such as `Station_Id_C` are not representable here.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RetArray2D {
    #[prost(double, repeated, tag = "1")]
    pub data: Vec<f64>,
    #[prost(message, optional, tag = "2")]
    pub request: Option<RequestInfo>,
    #[prost(string, repeated, tag = "3")]
    pub element_names: Vec<String>,
}

/// Regular lat/lon grid whose column count is derived from `request.row_count`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RetGridArray2D {
    #[prost(float, repeated, tag = "1")]
    pub data: Vec<f32>,
    #[prost(message, optional, tag = "2")]
    pub request: Option<RequestInfo>,
    #[prost(float, tag = "3")]
    pub start_lat: f32,
    #[prost(float, tag = "4")]
    pub start_lon: f32,
    #[prost(float, tag = "5")]
    pub end_lat: f32,
    #[prost(float, tag = "6")]
    pub end_lon: f32,
    #[prost(int32, tag = "7")]
    pub lat_count: i32,
    #[prost(int32, tag = "8")]
    pub lon_count: i32,
    #[prost(float, tag = "9")]
    pub lon_step: f32,
    #[prost(float, tag = "10")]
    pub lat_step: f32,
    #[prost(float, repeated, tag = "11")]
    pub lats: Vec<f32>,
    #[prost(float, repeated, tag = "12")]
    pub lons: Vec<f32>,
    #[prost(string, tag = "13")]
    pub units: String,
    #[prost(string, tag = "14")]
    pub user_ele_name: String,
}

/// Regular lat/lon grid laid out with its declared `lat_count x lon_count`.
#[derive(Clone, PartialEq, prost::Message)]
pub struct RetGridScalar2D {
    #[prost(float, repeated, tag = "1")]
    pub datas: Vec<f32>,
    #[prost(message, optional, tag = "2")]
    pub request: Option<RequestInfo>,
    #[prost(float, tag = "3")]
    pub start_lat: f32,
    #[prost(float, tag = "4")]
    pub start_lon: f32,
    #[prost(float, tag = "5")]
    pub end_lat: f32,
    #[prost(float, tag = "6")]
    pub end_lon: f32,
    #[prost(int32, tag = "7")]
    pub lat_count: i32,
    #[prost(int32, tag = "8")]
    pub lon_count: i32,
    #[prost(float, tag = "9")]
    pub lon_step: f32,
    #[prost(float, tag = "10")]
    pub lat_step: f32,
    #[prost(float, repeated, tag = "11")]
    pub lats: Vec<f32>,
    #[prost(float, repeated, tag = "12")]
    pub lons: Vec<f32>,
    #[prost(string, tag = "13")]
    pub units: String,
    #[prost(string, tag = "14")]
    pub user_ele_name: String,
}

/// Two co-registered grid components (e.g. wind u/v).
#[derive(Clone, PartialEq, prost::Message)]
pub struct RetGridVector2D {
    #[prost(float, repeated, tag = "1")]
    pub u_datas: Vec<f32>,
    #[prost(float, repeated, tag = "2")]
    pub v_datas: Vec<f32>,
    #[prost(message, optional, tag = "3")]
    pub request: Option<RequestInfo>,
    #[prost(float, tag = "4")]
    pub start_lat: f32,
    #[prost(float, tag = "5")]
    pub start_lon: f32,
    #[prost(float, tag = "6")]
    pub end_lat: f32,
    #[prost(float, tag = "7")]
    pub end_lon: f32,
    #[prost(int32, tag = "8")]
    pub lat_count: i32,
    #[prost(int32, tag = "9")]
    pub lon_count: i32,
    #[prost(float, tag = "10")]
    pub lon_step: f32,
    #[prost(float, tag = "11")]
    pub lat_step: f32,
    #[prost(float, repeated, tag = "12")]
    pub lats: Vec<f32>,
    #[prost(float, repeated, tag = "13")]
    pub lons: Vec<f32>,
    #[prost(string, tag = "14")]
    pub u_ele_name: String,
    #[prost(string, tag = "15")]
    pub v_ele_name: String,
}

/// Named opaque byte block (e.g. a raw product file).
#[derive(Clone, PartialEq, prost::Message)]
pub struct RetDataBlock {
    #[prost(message, optional, tag = "1")]
    pub request: Option<RequestInfo>,
    #[prost(string, tag = "2")]
    pub data_name: String,
    #[prost(bytes = "bytes", tag = "3")]
    pub byte_array: Bytes,
}

/// One file in a file-list response.
#[derive(Clone, PartialEq, prost::Message)]
pub struct FileInfo {
    #[prost(string, tag = "1")]
    pub file_name: String,
    #[prost(string, tag = "2")]
    pub save_path: String,
    #[prost(string, tag = "3")]
    pub suffix: String,
    /// Size as sent by the service, usually bytes in decimal
    #[prost(string, tag = "4")]
    pub size: String,
    #[prost(string, tag = "5")]
    pub file_url: String,
    #[prost(string, tag = "6")]
    pub img_base64: String,
    #[prost(string, repeated, tag = "7")]
    pub attributes: Vec<String>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct RetFilesInfo {
    #[prost(message, repeated, tag = "1")]
    pub file_infos: Vec<FileInfo>,
    #[prost(message, optional, tag = "2")]
    pub request: Option<RequestInfo>,
}
