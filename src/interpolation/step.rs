//! Step interpolation.
//!
//! Piecewise-constant profiles that hold either the previous or the next
//! sample across each segment.

use super::Interpolator;

/// Holds the sample at or before the query
pub struct PreviousInterpolator;

impl Interpolator for PreviousInterpolator {
    fn interpolate(&self, _x: &[f64], y: &[f64], i: usize, _xq: f64) -> f64 {
        y[i]
    }

    fn name(&self) -> &str {
        "previous"
    }
}

/// Holds the sample after the query
pub struct NextInterpolator;

impl Interpolator for NextInterpolator {
    fn interpolate(&self, _x: &[f64], y: &[f64], i: usize, _xq: f64) -> f64 {
        y[i + 1]
    }

    fn name(&self) -> &str {
        "next"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_interpolation() {
        let x = [0.0, 5.0, 10.0];
        let y = [1.0, 2.0, 3.0];

        assert_eq!(PreviousInterpolator.interpolate(&x, &y, 0, 4.9), 1.0);
        assert_eq!(PreviousInterpolator.interpolate(&x, &y, 1, 5.0), 2.0);
        assert_eq!(NextInterpolator.interpolate(&x, &y, 0, 0.1), 2.0);
        assert_eq!(NextInterpolator.interpolate(&x, &y, 1, 7.0), 3.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(PreviousInterpolator.name(), "previous");
        assert_eq!(NextInterpolator.name(), "next");
    }
}
