//! Conversions from decoded responses to analysis-friendly forms.
//!
//! - [`to_tabular`] turns a table response into a [`Table`] with labelled columns
//! - [`to_grid_field`] turns a scalar or vector grid into a [`GridField`]
//!   whose data variables are tagged with latitude/longitude coordinates
//!
//! Both fail on response shapes they have no mapping for, and on responses
//! where the service reported an error.

use std::collections::BTreeMap;

use ndarray::{Array2, ArrayView1, Axis};
use serde::Serialize;

use crate::error::{DataError, DataResult};
use crate::grid::ScalarGrid;
use crate::response::{DecodedResponse, Response};
use crate::vector::VectorGrid;

/// Dimension names of every grid field, in data order.
pub const GRID_DIMS: [&str; 2] = ["latitude", "longitude"];

/// A table with named columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub values: Array2<f64>,
}

impl Table {
    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.column_index(name)
            .map(|index| self.values.index_axis(Axis(1), index))
    }

    pub fn row(&self, index: usize) -> Option<ArrayView1<'_, f64>> {
        (index < self.values.nrows()).then(|| self.values.row(index))
    }
}

/// A labelled coordinate axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coordinate {
    pub name: String,
    pub values: Vec<f64>,
    pub attrs: BTreeMap<String, String>,
}

impl Coordinate {
    fn geographic(name: &str, units: &str, values: Vec<f64>) -> Self {
        let attrs = BTreeMap::from([
            ("units".to_string(), units.to_string()),
            ("standard_name".to_string(), name.to_string()),
            ("long_name".to_string(), name.to_string()),
        ]);
        Self {
            name: name.to_string(),
            values,
            attrs,
        }
    }

    pub fn latitude(values: Vec<f64>) -> Self {
        Self::geographic("latitude", "degrees_north", values)
    }

    pub fn longitude(values: Vec<f64>) -> Self {
        Self::geographic("longitude", "degrees_east", values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A named 2D data variable on the field's (latitude, longitude) dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataVariable {
    pub name: String,
    pub data: Array2<f32>,
    pub attrs: BTreeMap<String, String>,
}

impl DataVariable {
    pub fn units(&self) -> Option<&str> {
        self.attrs.get("units").map(String::as_str)
    }
}

/// Grid data tagged with its latitude and longitude coordinates.
///
/// Scalar grids hold one variable, vector grids hold the u and v components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridField {
    pub dims: [&'static str; 2],
    pub latitude: Coordinate,
    pub longitude: Coordinate,
    pub variables: Vec<DataVariable>,
}

impl GridField {
    fn new(latitudes: &[f64], longitudes: &[f64], variables: Vec<DataVariable>) -> DataResult<Self> {
        for variable in &variables {
            let (rows, cols) = variable.data.dim();
            check_axis("latitude", latitudes.len(), rows)?;
            check_axis("longitude", longitudes.len(), cols)?;
        }

        Ok(Self {
            dims: GRID_DIMS,
            latitude: Coordinate::latitude(latitudes.to_vec()),
            longitude: Coordinate::longitude(longitudes.to_vec()),
            variables,
        })
    }

    pub fn variable(&self, name: &str) -> Option<&DataVariable> {
        self.variables.iter().find(|v| v.name == name)
    }

    /// Value of `variable` at (lat index, lon index).
    pub fn value(&self, variable: &str, lat: usize, lon: usize) -> Option<f32> {
        self.variable(variable)?.data.get((lat, lon)).copied()
    }
}

fn check_axis(axis: &'static str, axis_len: usize, data_len: usize) -> DataResult<()> {
    if axis_len != data_len {
        return Err(DataError::AxisMismatch {
            axis,
            axis_len,
            data_len,
        });
    }
    Ok(())
}

/// Payload of a response that must have succeeded before it can be converted.
fn successful<T>(response: &Response<T>) -> DataResult<&T> {
    response.metadata.check()?;
    response.payload().ok_or_else(|| DataError::Service {
        code: response.metadata.error_code,
        message: response.metadata.error_message.clone(),
    })
}

/// Convert a table response into a [`Table`].
pub fn to_tabular(response: &DecodedResponse) -> DataResult<Table> {
    let DecodedResponse::Array2D(inner) = response else {
        return Err(DataError::UnsupportedConversion {
            operation: "to_tabular",
            shape: response.shape_name(),
        });
    };

    let array = successful(inner)?;
    if array.column_names.len() != array.values.ncols() {
        return Err(DataError::ColumnLabelMismatch {
            labels: array.column_names.len(),
            columns: array.values.ncols(),
        });
    }

    Ok(Table {
        columns: array.column_names.clone(),
        values: array.values.clone(),
    })
}

/// Convert a scalar or vector grid response into a [`GridField`].
pub fn to_grid_field(response: &DecodedResponse) -> DataResult<GridField> {
    match response {
        DecodedResponse::ScalarGrid(inner) => scalar_field(successful(inner)?),
        DecodedResponse::VectorGrid(inner) => vector_field(successful(inner)?),
        other => Err(DataError::UnsupportedConversion {
            operation: "to_grid_field",
            shape: other.shape_name(),
        }),
    }
}

fn scalar_field(grid: &ScalarGrid) -> DataResult<GridField> {
    let variable = DataVariable {
        name: grid.element_name.clone(),
        data: grid.values.clone(),
        attrs: BTreeMap::from([("units".to_string(), grid.units.clone())]),
    };
    GridField::new(&grid.latitudes, &grid.longitudes, vec![variable])
}

fn vector_field(grid: &VectorGrid) -> DataResult<GridField> {
    let component = |name: &str, data: &Array2<f32>, label: &str| DataVariable {
        name: name.to_string(),
        data: data.clone(),
        attrs: BTreeMap::from([("component".to_string(), label.to_string())]),
    };

    GridField::new(
        &grid.latitudes,
        &grid.longitudes,
        vec![
            component(&grid.u_element_name, &grid.u, "u"),
            component(&grid.v_element_name, &grid.v, "v"),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::array::TabularArray;
    use crate::files::FileManifest;
    use crate::grid::ScalarGrid;
    use test_utils::{array2d, error_request, files_info, grid_array2d, grid_vector2d};

    fn table_response(rows: usize, cols: usize) -> DecodedResponse {
        DecodedResponse::Array2D(TabularArray::from_message(array2d(rows, cols)).unwrap())
    }

    #[test]
    fn test_to_tabular() {
        let table = to_tabular(&table_response(3, 4)).unwrap();
        assert_eq!(table.shape(), (3, 4));

        let col2: Vec<f64> = table.column("col2").unwrap().to_vec();
        assert_eq!(col2, vec![2.0, 102.0, 202.0]);
        assert_eq!(table.row(1).unwrap().to_vec(), vec![100.0, 101.0, 102.0, 103.0]);
        assert!(table.column("missing").is_none());
        assert!(table.row(3).is_none());
    }

    #[test]
    fn test_to_tabular_label_mismatch() {
        let mut message = array2d(2, 2);
        message.element_names.push("extra".to_string());
        let response = DecodedResponse::Array2D(TabularArray::from_message(message).unwrap());

        assert!(matches!(
            to_tabular(&response),
            Err(DataError::ColumnLabelMismatch { labels: 3, columns: 2 })
        ));
    }

    #[test]
    fn test_to_tabular_unsupported() {
        let response = DecodedResponse::FilesInfo(FileManifest::from_message(files_info(&["a"])).unwrap());
        let err = to_tabular(&response).unwrap_err();
        assert!(matches!(
            err,
            DataError::UnsupportedConversion { operation: "to_tabular", shape: "files info" }
        ));
    }

    #[test]
    fn test_to_tabular_service_error() {
        let mut message = array2d(2, 2);
        message.request = Some(error_request(500, "invalid params"));
        let response = DecodedResponse::Array2D(TabularArray::from_message(message).unwrap());

        assert!(to_tabular(&response).unwrap_err().is_service_error());
    }

    #[test]
    fn test_scalar_grid_field() {
        let grid = ScalarGrid::from_grid_array(grid_array2d(20.0, 110.0, 3, 4)).unwrap();
        let field = to_grid_field(&DecodedResponse::ScalarGrid(grid)).unwrap();

        assert_eq!(field.dims, ["latitude", "longitude"]);
        assert_eq!(field.latitude.values, vec![20.0, 21.0, 22.0]);
        assert_eq!(field.longitude.values, vec![110.0, 111.0, 112.0, 113.0]);
        assert_eq!(field.latitude.attrs["units"], "degrees_north");
        assert_eq!(field.longitude.attrs["units"], "degrees_east");
        assert_eq!(field.longitude.attrs["standard_name"], "longitude");
        assert_eq!(field.latitude.attrs["long_name"], "latitude");

        let variable = field.variable("TEM").unwrap();
        assert_eq!(variable.units(), Some("K"));
        assert_eq!(field.value("TEM", 1, 2), Some(2001.0));
    }

    #[test]
    fn test_longitude_coordinate_uses_longitudes() {
        let mut message = grid_array2d(0.0, 0.0, 2, 3);
        message.lats = vec![1.0, 2.0];
        message.lons = vec![7.0, 8.0, 9.0];
        let grid = ScalarGrid::from_grid_array(message).unwrap();

        let field = to_grid_field(&DecodedResponse::ScalarGrid(grid)).unwrap();
        assert_eq!(field.longitude.values, vec![7.0, 8.0, 9.0]);
    }

    #[test]
    fn test_grid_field_axis_mismatch() {
        // Derived column count (2) disagrees with lon_count (5)
        let mut message = grid_array2d(0.0, 0.0, 3, 2);
        message.lon_count = 5;
        let grid = ScalarGrid::from_grid_array(message).unwrap();

        let err = to_grid_field(&DecodedResponse::ScalarGrid(grid)).unwrap_err();
        assert!(matches!(
            err,
            DataError::AxisMismatch { axis: "longitude", axis_len: 5, data_len: 2 }
        ));
    }

    #[test]
    fn test_vector_grid_field() {
        let grid = VectorGrid::from_message(grid_vector2d(10.0, 100.0, 2, 3)).unwrap();
        let field = to_grid_field(&DecodedResponse::VectorGrid(grid)).unwrap();

        assert_eq!(field.variables.len(), 2);
        assert_eq!(field.variable("WIU").unwrap().attrs["component"], "u");
        assert_eq!(field.variable("WIV").unwrap().attrs["component"], "v");
        // The vector message has no units field
        assert_eq!(field.variable("WIU").unwrap().units(), None);
        assert!(!field.variable("WIV").unwrap().attrs.contains_key("units"));
        assert_eq!(field.value("WIU", 1, 2), Some(1.0));
        assert_eq!(field.value("WIV", 5, 0), None);
    }

    #[test]
    fn test_grid_field_unsupported() {
        let err = to_grid_field(&table_response(1, 1)).unwrap_err();
        assert!(matches!(err, DataError::UnsupportedConversion { operation: "to_grid_field", .. }));
    }
}
