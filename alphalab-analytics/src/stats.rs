//! Shared statistics helpers.
//!
//! Denominator conventions: standard deviations and covariances use
//! the sample (n − 1) denominator,
//! `population_variance` uses n. Degenerate inputs yield NaN rather
//! than a fabricated zero, so callers can surface "undefined" as a
//! sentinel instead of an error.

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator). NaN below 2 values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}

/// Sample covariance (n − 1 denominator). NaN below 2 pairs.
///
/// Panics if the slices differ in length (caller validates alignment).
pub fn sample_covariance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "covariance inputs must be aligned");
    if a.len() < 2 {
        return f64::NAN;
    }
    let mean_a = mean(a);
    let mean_b = mean(b);
    let sum: f64 = a
        .iter()
        .zip(b)
        .map(|(x, y)| (x - mean_a) * (y - mean_b))
        .sum();
    sum / (a.len() - 1) as f64
}

/// Population variance (n denominator). NaN on empty input.
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Linear-interpolation quantile, `q` in [0, 1].
///
/// Matches the usual table convention: the virtual index `q · (n − 1)`
/// interpolates between its two neighbors in the sorted data.
pub fn quantile(values: &[f64], q: f64) -> f64 {
    assert!((0.0..=1.0).contains(&q), "quantile q must lie in [0, 1]");
    if values.is_empty() {
        return f64::NAN;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let virtual_index = q * (sorted.len() - 1) as f64;
    let lo = virtual_index.floor() as usize;
    let hi = virtual_index.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let weight = virtual_index - lo as f64;
    sorted[lo] * (1.0 - weight) + sorted[hi] * weight
}
