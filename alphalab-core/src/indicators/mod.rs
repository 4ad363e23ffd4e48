//! Rolling indicator columns.
//!
//! Pure functions over a close-price slice, returning NaN-padded vectors
//! the same length as the input. A slot is NaN until every value in its
//! lookback window exists. No value at index t depends on data after t
//! (verified by the truncation tests in `tests/lookahead_test.rs`).

/// Rolling mean over `window` values.
///
/// First `window - 1` slots are NaN. Panics if `window == 0`.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "rolling window must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if n < window {
        return result;
    }
    for i in (window - 1)..n {
        let slice = &values[(i + 1 - window)..=i];
        result[i] = slice.iter().sum::<f64>() / window as f64;
    }
    result
}

/// Rolling sample standard deviation (n − 1 denominator) over `window` values.
///
/// First `window - 1` slots are NaN. A window of 1 yields NaN everywhere
/// (zero degrees of freedom). Panics if `window == 0`.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "rolling window must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    if n < window || window < 2 {
        return result;
    }
    for i in (window - 1)..n {
        let slice = &values[(i + 1 - window)..=i];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let var =
            slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window - 1) as f64;
        result[i] = var.sqrt();
    }
    result
}

/// N-period difference: `values[t] - values[t - period]`.
///
/// First `period` slots are NaN. Panics if `period == 0`.
pub fn diff(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "diff period must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    for i in period..n {
        result[i] = values[i] - values[i - period];
    }
    result
}

/// N-period percent change: `values[t] / values[t - period] - 1`.
///
/// First `period` slots are NaN. Panics if `period == 0`.
pub fn pct_change(values: &[f64], period: usize) -> Vec<f64> {
    assert!(period >= 1, "pct_change period must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    for i in period..n {
        result[i] = values[i] / values[i - period] - 1.0;
    }
    result
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
