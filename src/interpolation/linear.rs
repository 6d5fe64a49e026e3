//! Linear interpolation.
//!
//! Joins neighbouring samples with straight lines.

use super::common;
use super::Interpolator;

/// Linear interpolator
pub struct LinearInterpolator;

impl Interpolator for LinearInterpolator {
    fn interpolate(&self, x: &[f64], y: &[f64], i: usize, xq: f64) -> f64 {
        let (w0, w1) = common::linear_weight(common::segment_fraction(x, i, xq));
        w0 * y[i] + w1 * y[i + 1]
    }

    fn name(&self) -> &str {
        "linear"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_interpolation() {
        let x = [0.0, 100.0, 300.0];
        let y = [10.0, 50.0, 150.0];
        let interpolator = LinearInterpolator;

        assert_eq!(interpolator.interpolate(&x, &y, 0, 0.0), 10.0);
        assert!((interpolator.interpolate(&x, &y, 0, 25.0) - 20.0).abs() < 1e-12);
        assert!((interpolator.interpolate(&x, &y, 1, 200.0) - 100.0).abs() < 1e-12);
    }
}
