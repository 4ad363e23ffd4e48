//! Mean reversion strategy — rolling z-score of close.
//!
//! `z[t] = (close[t] - rolling_mean[t]) / rolling_std[t]`. Short above
//! +1 (stretched high), long below -1 (stretched low), flat in between.
//! A zero rolling std makes the z-score undefined; those rows are
//! dropped during frame alignment rather than defaulted to flat.

use crate::indicators::{rolling_mean, rolling_std};

use super::Signal;

pub(super) fn columns(
    closes: &[f64],
    window: usize,
) -> (Vec<(&'static str, Vec<f64>)>, Vec<Signal>) {
    let mean = rolling_mean(closes, window);
    let std = rolling_std(closes, window);

    let z_score: Vec<f64> = closes
        .iter()
        .zip(mean.iter().zip(&std))
        .map(|(&c, (&m, &s))| (c - m) / s)
        .collect();

    let signals = z_score
        .iter()
        .map(|&z| {
            if z > 1.0 {
                Signal::Short
            } else if z < -1.0 {
                Signal::Long
            } else {
                Signal::Flat
            }
        })
        .collect();

    (vec![("z_score", z_score)], signals)
}
