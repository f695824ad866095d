//! Coordinate axis reconstruction for lat/lon grids.
//!
//! Grid responses carry each axis either as an explicit coordinate list or
//! implicitly as a first value, a step and a count.

use serde::Serialize;

/// Implicit description of a regular coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AxisSpec {
    /// First coordinate value
    pub start: f64,
    /// Spacing between adjacent coordinates (negative for descending axes)
    pub step: f64,
    /// Number of coordinates
    pub count: usize,
}

impl AxisSpec {
    pub fn new(start: f64, step: f64, count: usize) -> Self {
        Self { start, step, count }
    }

    /// Coordinate at index `i`.
    pub fn value_at(&self, i: usize) -> f64 {
        self.start + i as f64 * self.step
    }

    /// Last coordinate of the axis, or `None` for an empty axis.
    pub fn last(&self) -> Option<f64> {
        self.count.checked_sub(1).map(|i| self.value_at(i))
    }

    /// Generate all `count` coordinates.
    pub fn synthesize(&self) -> Vec<f64> {
        (0..self.count).map(|i| self.value_at(i)).collect()
    }
}

/// Build an axis, preferring a non-empty explicit list over synthesis.
pub fn reconstruct_axis(explicit: &[f32], spec: &AxisSpec) -> Vec<f64> {
    if explicit.is_empty() {
        spec.synthesize()
    } else {
        explicit.iter().map(|&v| v as f64).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::assert_approx_eq;

    #[test]
    fn test_synthesize_regular_axis() {
        let axis = AxisSpec::new(0.0, 5.0, 3).synthesize();
        assert_eq!(axis, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_synthesize_steps() {
        for (start, step, count) in [(70.0, -0.25, 161), (-180.0, 0.125, 2881), (12.5, 1.0, 1)] {
            let axis = AxisSpec::new(start, step, count).synthesize();
            assert_eq!(axis.len(), count);
            assert_eq!(axis[0], start);
            for pair in axis.windows(2) {
                assert_approx_eq!(pair[1] - pair[0], step, 1e-9);
            }
        }
    }

    #[test]
    fn test_synthesize_empty() {
        let spec = AxisSpec::new(10.0, 1.0, 0);
        assert!(spec.synthesize().is_empty());
        assert_eq!(spec.last(), None);
    }

    #[test]
    fn test_last() {
        assert_eq!(AxisSpec::new(0.0, 0.5, 21).last(), Some(10.0));
    }

    #[test]
    fn test_explicit_list_takes_priority() {
        let axis = reconstruct_axis(&[10.0, 20.5], &AxisSpec::new(0.0, 1.0, 5));
        assert_eq!(axis, vec![10.0, 20.5]);
    }

    #[test]
    fn test_empty_explicit_list_synthesizes() {
        let axis = reconstruct_axis(&[], &AxisSpec::new(0.0, 1.0, 5));
        assert_eq!(axis, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }
}
