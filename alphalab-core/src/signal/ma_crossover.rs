//! Moving average crossover strategy — short MA vs. long MA.
//!
//! Long while the short rolling mean sits strictly above the long one,
//! short otherwise. This is a level comparison, not edge detection: the
//! signal restates the regime on every bar. An exact tie resolves to
//! short (strict-greater-than comparison).

use crate::indicators::rolling_mean;

use super::Signal;

pub(super) fn columns(
    closes: &[f64],
    short_window: usize,
    long_window: usize,
) -> (Vec<(&'static str, Vec<f64>)>, Vec<Signal>) {
    let short_ma = rolling_mean(closes, short_window);
    let long_ma = rolling_mean(closes, long_window);

    let signals = short_ma
        .iter()
        .zip(&long_ma)
        .map(|(&s, &l)| if s > l { Signal::Long } else { Signal::Short })
        .collect();

    (vec![("short_ma", short_ma), ("long_ma", long_ma)], signals)
}
