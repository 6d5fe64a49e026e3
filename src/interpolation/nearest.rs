//! Nearest neighbor interpolation.
//!
//! This method selects the value of the nearest sample. A query exactly
//! halfway between two samples takes the left one.

use super::Interpolator;

/// Nearest neighbor interpolator
pub struct NearestInterpolator;

impl Interpolator for NearestInterpolator {
    fn interpolate(&self, x: &[f64], y: &[f64], i: usize, xq: f64) -> f64 {
        if xq - x[i] <= x[i + 1] - xq {
            y[i]
        } else {
            y[i + 1]
        }
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
