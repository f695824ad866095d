//! Test data generators for creating synthetic weather-like payloads.
//!
//! These generators create predictable, verifiable test data patterns
//! that can be used across the test suite.

/// Creates a flat grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that a payload was reshaped correctly
/// by checking that grid[[row, col]] == col * 1000 + row.
///
/// # Returns
///
/// A `Vec<f32>` in row-major order (row 0 first, then row 1, etc.)
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);   // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);  // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a flat table of station observations, `rows x cols`, row-major.
///
/// Cell value is `row * 100 + col`, so column `c` of row `r` is easy to check.
pub fn create_station_table(rows: usize, cols: usize) -> Vec<f64> {
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row * 100 + col) as f64))
        .collect()
}

/// Creates u/v wind components for a `height x width` grid.
///
/// u increases eastward, v increases northward (in m/s), both row-major.
pub fn create_wind_components(width: usize, height: usize) -> (Vec<f32>, Vec<f32>) {
    let mut u = Vec::with_capacity(width * height);
    let mut v = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            u.push(col as f32 * 0.5);
            v.push(row as f32 * -0.5);
        }
    }
    (u, v)
}
