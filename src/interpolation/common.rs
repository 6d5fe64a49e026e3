//! Common utilities for interpolation algorithms.
//!
//! This module provides shared functionality used by the interpolation kinds.

use crate::error::{OceansError, Result};

/// Check that samples are usable: same length, non-empty, finite abscissa
/// in non-decreasing order
pub fn validate_samples(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(OceansError::invalid_input(format!(
            "Sample length mismatch: x has {} values but y has {}",
            x.len(),
            y.len()
        )));
    }
    if x.is_empty() {
        return Err(OceansError::invalid_input(
            "Cannot interpolate without samples",
        ));
    }
    if x.iter().any(|v| !v.is_finite()) {
        return Err(OceansError::invalid_input(
            "Interpolation abscissa must be finite",
        ));
    }
    if x.windows(2).any(|w| w[1] < w[0]) {
        return Err(OceansError::invalid_input(
            "Interpolation abscissa must be non-decreasing",
        ));
    }
    Ok(())
}

/// Index `i` of the segment holding `xq`, so that `x[i] <= xq < x[i + 1]`.
///
/// Callers must have checked `x[0] < xq < x[last]`; repeated abscissae are
/// skipped so the returned segment always has non-zero width.
pub fn bracket(x: &[f64], xq: f64) -> usize {
    let upper = x.partition_point(|&v| v <= xq);
    upper.saturating_sub(1).min(x.len().saturating_sub(2))
}

/// Get the weight for linear interpolation
pub fn linear_weight(fraction: f64) -> (f64, f64) {
    (1.0 - fraction, fraction)
}

/// Position of `xq` inside segment `i`, from 0 at `x[i]` to 1 at `x[i + 1]`
pub fn segment_fraction(x: &[f64], i: usize, xq: f64) -> f64 {
    (xq - x[i]) / (x[i + 1] - x[i])
}
