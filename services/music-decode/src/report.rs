//! Input loading and summary output.

use std::path::Path;

use anyhow::{Context, Result};
use bytes::Bytes;
use music_data::{DecodedResponse, ResponseKind, ResponseMetadata};
use serde::Serialize;

/// Read a saved response body from disk.
pub fn load_input(path: &Path) -> Result<Bytes> {
    let body = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Bytes::from(body))
}

/// Metadata and dimensions of a decoded response, without the data itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub kind: ResponseKind,
    pub shape: &'static str,
    pub success: bool,
    pub metadata: ResponseMetadata,
    /// `[rows, cols]` for tables and grids
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dims: Option<[usize; 2]>,
    /// Column labels, element names, or file names
    pub names: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub byte_len: Option<usize>,
}

impl Summary {
    pub fn new(response: &DecodedResponse) -> Self {
        let mut summary = Self {
            kind: response.kind(),
            shape: response.shape_name(),
            success: response.is_success(),
            metadata: response.metadata().clone(),
            dims: None,
            names: Vec::new(),
            byte_len: None,
        };

        match response {
            DecodedResponse::Array2D(r) => {
                if let Some(table) = r.payload() {
                    summary.dims = Some([table.values.nrows(), table.values.ncols()]);
                    summary.names = table.column_names.clone();
                }
            }
            DecodedResponse::DataBlock(r) => {
                if let Some(block) = r.payload() {
                    summary.names = vec![block.name.clone()];
                    summary.byte_len = Some(block.len());
                }
            }
            DecodedResponse::FilesInfo(r) => {
                if let Some(manifest) = r.payload() {
                    summary.names = manifest.entries.iter().map(|e| e.file_name.clone()).collect();
                }
            }
            DecodedResponse::ScalarGrid(r) => {
                if let Some(grid) = r.payload() {
                    let (rows, cols) = grid.shape();
                    summary.dims = Some([rows, cols]);
                    summary.names = vec![grid.element_name.clone()];
                }
            }
            DecodedResponse::VectorGrid(r) => {
                if let Some(grid) = r.payload() {
                    let (rows, cols) = grid.shape();
                    summary.dims = Some([rows, cols]);
                    summary.names = vec![grid.u_element_name.clone(), grid.v_element_name.clone()];
                }
            }
        }

        summary
    }
}
