//! Assertion utilities for testing.
//!
//! Floating-point comparisons where a missing cell (NaN) only matches
//! another missing cell.

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

fn close(actual: f64, expected: f64, epsilon: f64) -> bool {
    (actual.is_nan() && expected.is_nan()) || (actual - expected).abs() <= epsilon
}

/// Assert that two values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference is greater than `epsilon`
/// (default 1e-9), or if exactly one of the values is NaN.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    assert!(
        close(actual, expected, epsilon),
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        (actual - expected).abs(),
        epsilon
    );
}

/// Assert that two series are approximately element-wise equal
pub fn assert_array_approx_eq(actual: &[f64], expected: &[f64], epsilon: Option<f64>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Arrays have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            close(a, e, eps),
            "Arrays differ at index {}: actual = {}, expected = {}, epsilon = {}",
            i,
            a,
            e,
            eps
        );
    }
}

/// Assert that a value lies in `[min, max]`
pub fn assert_in_range(actual: f64, min: f64, max: f64) {
    assert!(
        actual >= min && actual <= max,
        "Value not in range: actual = {}, min = {}, max = {}",
        actual,
        min,
        max
    );
}

/// Assert that a series never decreases
pub fn assert_non_decreasing(values: &[f64]) {
    for (i, pair) in values.windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "Series decreases at index {}: {} -> {}",
            i + 1,
            pair[0],
            pair[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
        assert_approx_eq(f64::NAN, f64::NAN, None);
    }

    #[test]
    #[should_panic]
    fn test_nan_does_not_match_number() {
        assert_approx_eq(f64::NAN, 1.0, None);
    }

    #[test]
    fn test_assert_array_approx_eq() {
        assert_array_approx_eq(&[1.0, f64::NAN, 3.0], &[1.0, f64::NAN, 3.0], None);
        assert_array_approx_eq(&[1.0, 2.0], &[1.001, 2.001], Some(0.01));
    }

    #[test]
    fn test_assert_in_range() {
        assert_in_range(5.0, 0.0, 10.0);
        assert_in_range(0.0, 0.0, 10.0);
        assert_in_range(10.0, 0.0, 10.0);
    }

    #[test]
    fn test_assert_non_decreasing() {
        assert_non_decreasing(&[0.0, 0.0, 1.0]);
    }
}
