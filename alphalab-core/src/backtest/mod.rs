//! Backtest simulator — turns an aligned (price, signal) frame into a
//! portfolio-value trajectory.
//!
//! The core invariant is no look-ahead: the position held during bar t
//! is the signal computed at bar t-1. A flat per-trade cost is charged
//! once whenever the realized position changes; position size plays no
//! role. Portfolio and buy-and-hold values compound from the same
//! initial capital over the same trajectory rows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::signal::{Signal, StrategyFrame};

/// Errors that can occur while running a backtest.
#[derive(Debug, thiserror::Error)]
pub enum BacktestError {
    #[error("Transaction cost rate must be non-negative, got {0}")]
    InvalidCostRate(f64),

    #[error("Close and signal columns differ in length: {closes} vs {signals}")]
    MismatchedLengths { closes: usize, signals: usize },

    #[error("Fewer than 2 trajectory rows survive alignment")]
    EmptySeries,
}

/// Simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BacktestConfig {
    /// Flat cost charged on every position change, in return units.
    pub transaction_cost: f64,
    pub initial_capital: f64,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            transaction_cost: 0.001,
            initial_capital: 100_000.0,
        }
    }
}

/// One bar of the simulated portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryRow {
    pub date: NaiveDate,
    pub close: f64,
    /// Raw per-bar return of the asset (percent change of close).
    pub market_return: f64,
    /// Position held during this bar: the signal of the previous bar.
    pub position: Signal,
    /// True when the position changed from the prior bar.
    pub trade: bool,
    /// position × market_return − cost on trade bars.
    pub strategy_return: f64,
    /// initial_capital × Π(1 + strategy_return) up to this bar.
    pub portfolio_value: f64,
    /// initial_capital × Π(1 + market_return) up to this bar.
    pub market_value: f64,
}

/// Immutable result of one simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    rows: Vec<TrajectoryRow>,
    initial_capital: f64,
}

impl Trajectory {
    pub fn rows(&self) -> &[TrajectoryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn initial_capital(&self) -> f64 {
        self.initial_capital
    }

    /// Strategy-return column as a fresh vector.
    pub fn strategy_returns(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.strategy_return).collect()
    }

    /// Portfolio-value column as a fresh vector.
    pub fn portfolio_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.portfolio_value).collect()
    }
}

/// Simulate a strategy over an aligned frame.
///
/// Trajectory rows start at the third frame row: the first row has no
/// raw return, and the second holds the first realized position, whose
/// trade flag would compare against a non-existent predecessor. That
/// first position bar is excluded entirely rather than given an
/// arbitrary trade flag (see `engine_test::first_position_bar_is_excluded`).
pub fn run_backtest(
    frame: &StrategyFrame,
    config: &BacktestConfig,
) -> Result<Trajectory, BacktestError> {
    if config.transaction_cost < 0.0 {
        return Err(BacktestError::InvalidCostRate(config.transaction_cost));
    }
    if frame.closes.len() != frame.signals.len() {
        return Err(BacktestError::MismatchedLengths {
            closes: frame.closes.len(),
            signals: frame.signals.len(),
        });
    }

    let n = frame.closes.len();
    if n < 4 {
        // Two leading rows are always dropped; at least 2 must remain.
        return Err(BacktestError::EmptySeries);
    }

    let mut rows = Vec::with_capacity(n - 2);
    let mut portfolio = config.initial_capital;
    let mut market = config.initial_capital;

    for t in 2..n {
        let market_return = frame.closes[t] / frame.closes[t - 1] - 1.0;
        let position = frame.signals[t - 1];
        let prior_position = frame.signals[t - 2];
        let trade = position != prior_position;

        let cost = if trade { config.transaction_cost } else { 0.0 };
        let strategy_return = position.value() * market_return - cost;

        portfolio *= 1.0 + strategy_return;
        market *= 1.0 + market_return;

        rows.push(TrajectoryRow {
            date: frame.dates[t],
            close: frame.closes[t],
            market_return,
            position,
            trade,
            strategy_return,
            portfolio_value: portfolio,
            market_value: market,
        });
    }

    Ok(Trajectory {
        rows,
        initial_capital: config.initial_capital,
    })
}
