//! Factor score strategy — volatility-scaled momentum.
//!
//! `factor_score[t] = pct_change(close, 5)[t] / rolling_std(close, 10)[t]`.
//! Long while the score is strictly positive, short otherwise (an exact
//! zero resolves to short). Both periods are fixed. A zero rolling std
//! makes the score non-finite; those rows are dropped during frame
//! alignment.

use crate::indicators::{pct_change, rolling_std};

use super::Signal;

/// Lookback for the percent-change momentum leg.
pub const MOMENTUM_PERIOD: usize = 5;

/// Window for the volatility (rolling std) leg.
pub const VOLATILITY_WINDOW: usize = 10;

pub(super) fn columns(closes: &[f64]) -> (Vec<(&'static str, Vec<f64>)>, Vec<Signal>) {
    let momentum = pct_change(closes, MOMENTUM_PERIOD);
    let volatility = rolling_std(closes, VOLATILITY_WINDOW);

    let factor_score: Vec<f64> = momentum
        .iter()
        .zip(&volatility)
        .map(|(&m, &v)| m / v)
        .collect();

    let signals = factor_score
        .iter()
        .map(|&f| if f > 0.0 { Signal::Long } else { Signal::Short })
        .collect();

    (vec![("factor_score", factor_score)], signals)
}
