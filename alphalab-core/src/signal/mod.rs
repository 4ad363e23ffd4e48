//! Signal generation — rule-based strategies mapping a price series to
//! directional signals.
//!
//! Each strategy is a pure function family: close prices in, named
//! indicator columns plus a {short, flat, long} signal column out,
//! restricted to rows where every rolling input is defined. Rows with
//! undefined rolling inputs are dropped, never defaulted to flat.
//!
//! Strategy selection is an explicit tagged enum; name-based routing
//! (for callers holding a string identifier) goes through
//! `Strategy::from_config`, which rejects unrecognized names.

pub mod factor;
pub mod ma_crossover;
pub mod mean_reversion;
pub mod momentum;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::PriceSeries;

// ─── Signal direction ────────────────────────────────────────────────

/// Directional trading decision for one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Signal {
    Short,
    Flat,
    Long,
}

impl Signal {
    /// Numeric encoding: short = -1, flat = 0, long = +1.
    pub fn value(&self) -> f64 {
        match self {
            Signal::Short => -1.0,
            Signal::Flat => 0.0,
            Signal::Long => 1.0,
        }
    }
}

// ─── Error type ──────────────────────────────────────────────────────

/// Errors that can occur during signal generation.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("Insufficient history: strategy requires {required} bars, series has {actual}")]
    InsufficientHistory { required: usize, actual: usize },
}

// ─── Strategy selection ──────────────────────────────────────────────

/// Rule-based signal strategy with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// `close[t] - close[t-window]`; long if positive, else short.
    Momentum { window: usize },
    /// Rolling z-score of close; short above +1, long below -1, else flat.
    MeanReversion { window: usize },
    /// Short MA vs. long MA; long while short MA is above, else short.
    MaCrossover {
        short_window: usize,
        long_window: usize,
    },
    /// 5-period percent change over 10-period rolling std; long if
    /// positive, else short. Periods are fixed.
    FactorModel,
}

impl Strategy {
    pub fn momentum(window: usize) -> Self {
        assert!(window >= 1, "momentum window must be >= 1");
        Strategy::Momentum { window }
    }

    pub fn mean_reversion(window: usize) -> Self {
        assert!(window >= 2, "mean reversion window must be >= 2");
        Strategy::MeanReversion { window }
    }

    pub fn ma_crossover(short_window: usize, long_window: usize) -> Self {
        assert!(short_window >= 1, "short_window must be >= 1");
        assert!(
            long_window > short_window,
            "long_window must be > short_window"
        );
        Strategy::MaCrossover {
            short_window,
            long_window,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Momentum { .. } => "momentum",
            Strategy::MeanReversion { .. } => "mean_reversion",
            Strategy::MaCrossover { .. } => "ma_crossover",
            Strategy::FactorModel => "factor_model",
        }
    }

    /// Minimum number of input rows: largest rolling window plus one.
    pub fn min_history(&self) -> usize {
        match self {
            Strategy::Momentum { window } => window + 1,
            Strategy::MeanReversion { window } => window + 1,
            Strategy::MaCrossover { long_window, .. } => long_window + 1,
            Strategy::FactorModel => factor::VOLATILITY_WINDOW + 1,
        }
    }

    /// Build a strategy from a name and a parameter map, falling back to
    /// per-strategy defaults for missing parameters.
    pub fn from_config(name: &str, params: &HashMap<String, f64>) -> Result<Self, SignalError> {
        match name {
            "momentum" => Ok(Self::momentum(param_usize(params, "window", 10))),
            "mean_reversion" => Ok(Self::mean_reversion(param_usize(params, "window", 10))),
            "ma_crossover" => Ok(Self::ma_crossover(
                param_usize(params, "short_window", 5),
                param_usize(params, "long_window", 20),
            )),
            "factor_model" => Ok(Strategy::FactorModel),
            other => Err(SignalError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Extract a named usize parameter, falling back to `default`.
fn param_usize(params: &HashMap<String, f64>, name: &str, default: usize) -> usize {
    params
        .get(name)
        .copied()
        .map(|v| v as usize)
        .unwrap_or(default)
}

// ─── Output frame ────────────────────────────────────────────────────

/// Aligned output of one strategy run: dates, closes, named indicator
/// columns, and signals, restricted to rows where every rolling input
/// is defined. All columns have equal length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyFrame {
    pub dates: Vec<NaiveDate>,
    pub closes: Vec<f64>,
    pub indicators: HashMap<String, Vec<f64>>,
    pub signals: Vec<Signal>,
    /// Number of input rows dropped for undefined rolling inputs.
    pub dropped: usize,
}

impl StrategyFrame {
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

// ─── Generation ──────────────────────────────────────────────────────

/// Run one strategy over a price series.
///
/// Fails with `InsufficientHistory` when the series is shorter than the
/// strategy's largest window plus one. Rows whose indicator values are
/// not finite (warmup rows, zero-variance z-scores and factor scores)
/// are dropped from the output frame.
pub fn generate_signal(
    series: &PriceSeries,
    strategy: &Strategy,
) -> Result<StrategyFrame, SignalError> {
    let required = strategy.min_history();
    if series.len() < required {
        return Err(SignalError::InsufficientHistory {
            required,
            actual: series.len(),
        });
    }

    let closes = series.closes();
    let (columns, signals) = match strategy {
        Strategy::Momentum { window } => momentum::columns(&closes, *window),
        Strategy::MeanReversion { window } => mean_reversion::columns(&closes, *window),
        Strategy::MaCrossover {
            short_window,
            long_window,
        } => ma_crossover::columns(&closes, *short_window, *long_window),
        Strategy::FactorModel => factor::columns(&closes),
    };

    let dates = series.dates();
    let n = closes.len();
    debug_assert!(signals.len() == n && columns.iter().all(|(_, c)| c.len() == n));

    // A row survives only if every indicator column is finite there.
    let keep: Vec<bool> = (0..n)
        .map(|i| columns.iter().all(|(_, col)| col[i].is_finite()))
        .collect();
    let kept = keep.iter().filter(|&&k| k).count();

    let select = |col: &[f64]| -> Vec<f64> {
        col.iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(&v, _)| v)
            .collect()
    };

    let indicators: HashMap<String, Vec<f64>> = columns
        .iter()
        .map(|(name, col)| (name.to_string(), select(col)))
        .collect();

    Ok(StrategyFrame {
        dates: dates
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(&d, _)| d)
            .collect(),
        closes: select(&closes),
        signals: signals
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(&s, _)| s)
            .collect(),
        indicators,
        dropped: n - kept,
    })
}
