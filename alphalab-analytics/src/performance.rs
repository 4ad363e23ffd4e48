//! Performance metrics — summary statistics for a backtest trajectory.
//!
//! Every metric is a pure function of the trajectory: recomputing on
//! the same input is bit-identical. A zero-volatility Sharpe ratio is
//! NaN, not an error — an undefined statistic in an otherwise valid
//! result.

use serde::{Deserialize, Serialize};

use alphalab_core::Trajectory;

use crate::stats::sample_std;

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Errors that can occur while computing performance metrics.
#[derive(Debug, thiserror::Error)]
pub enum PerformanceError {
    #[error("Trajectory contains no rows")]
    EmptyTrajectory,
}

/// Aggregate performance metrics for a single backtest run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub total_return: f64,
    pub annualized_return: f64,
    /// Annualized std of strategy returns (sample std × √252).
    pub volatility: f64,
    /// annualized_return / volatility; NaN when volatility is zero.
    pub sharpe_ratio: f64,
    /// Worst decline from the running portfolio peak, always ≤ 0.
    pub max_drawdown: f64,
}

impl PerformanceMetrics {
    /// Compute all metrics from a trajectory.
    pub fn compute(trajectory: &Trajectory) -> Result<Self, PerformanceError> {
        if trajectory.is_empty() {
            return Err(PerformanceError::EmptyTrajectory);
        }

        let values = trajectory.portfolio_values();
        let returns = trajectory.strategy_returns();
        let n = values.len() as f64;

        let total_return = values[values.len() - 1] / values[0] - 1.0;
        let annualized_return = (1.0 + total_return).powf(TRADING_DAYS_PER_YEAR / n) - 1.0;
        let volatility = sample_std(&returns) * TRADING_DAYS_PER_YEAR.sqrt();
        let sharpe_ratio = if volatility == 0.0 {
            f64::NAN
        } else {
            annualized_return / volatility
        };

        Ok(Self {
            total_return,
            annualized_return,
            volatility,
            sharpe_ratio,
            max_drawdown: max_drawdown(&values),
        })
    }
}

/// Maximum drawdown as a non-positive fraction of the running peak.
pub fn max_drawdown(values: &[f64]) -> f64 {
    let mut peak = f64::NEG_INFINITY;
    let mut max_dd = 0.0_f64;
    for &v in values {
        if v > peak {
            peak = v;
        }
        let dd = v / peak - 1.0;
        if dd < max_dd {
            max_dd = dd;
        }
    }
    max_dd
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphalab_core::{run_backtest, BacktestConfig, Signal, StrategyFrame};
    use chrono::NaiveDate;
    use std::collections::HashMap;

    fn make_frame(closes: &[f64], signals: &[Signal]) -> StrategyFrame {
        let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        StrategyFrame {
            dates: (0..closes.len() as i64)
                .map(|i| base + chrono::Duration::days(i))
                .collect(),
            closes: closes.to_vec(),
            indicators: HashMap::new(),
            signals: signals.to_vec(),
            dropped: 0,
        }
    }

    fn long_trajectory(closes: &[f64]) -> Trajectory {
        let signals = vec![Signal::Long; closes.len()];
        let config = BacktestConfig {
            transaction_cost: 0.0,
            ..Default::default()
        };
        run_backtest(&make_frame(closes, &signals), &config).unwrap()
    }

    #[test]
    fn total_return_matches_first_and_last_value() {
        // Trajectory rows carry +10% then -5%; total return is measured
        // from the first portfolio value, so only the -5% row moves it.
        let closes = [100.0, 100.0, 110.0, 104.5];
        let trajectory = long_trajectory(&closes);
        let m = PerformanceMetrics::compute(&trajectory).unwrap();
        let expected = 0.95 - 1.0;
        assert!((m.total_return - expected).abs() < 1e-12);
    }

    #[test]
    fn annualized_return_uses_252_day_convention() {
        let closes = [100.0, 100.0, 101.0, 102.01];
        let trajectory = long_trajectory(&closes);
        let m = PerformanceMetrics::compute(&trajectory).unwrap();
        let expected = (1.0 + m.total_return).powf(252.0 / 2.0) - 1.0;
        assert!((m.annualized_return - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_volatility_sharpe_is_nan() {
        // Identical strategy returns on every row → zero sample std.
        let closes = [100.0, 100.0, 101.0, 102.01];
        let trajectory = long_trajectory(&closes);
        let m = PerformanceMetrics::compute(&trajectory).unwrap();
        assert_eq!(m.volatility, 0.0);
        assert!(m.sharpe_ratio.is_nan());
    }

    #[test]
    fn nonzero_volatility_sharpe_is_finite() {
        let closes = [100.0, 100.0, 102.0, 101.0, 104.0, 103.0];
        let trajectory = long_trajectory(&closes);
        let m = PerformanceMetrics::compute(&trajectory).unwrap();
        assert!(m.volatility > 0.0);
        assert!(m.sharpe_ratio.is_finite());
    }

    #[test]
    fn max_drawdown_known_path() {
        let values = [100.0, 110.0, 90.0, 95.0];
        let expected = 90.0 / 110.0 - 1.0;
        assert!((max_drawdown(&values) - expected).abs() < 1e-12);
    }

    #[test]
    fn max_drawdown_non_decreasing_is_zero() {
        let values = [100.0, 100.0, 101.0, 105.0];
        assert_eq!(max_drawdown(&values), 0.0);
    }

    #[test]
    fn recompute_is_bit_identical() {
        let closes = [100.0, 100.0, 102.0, 101.0, 104.0, 103.0, 107.0];
        let trajectory = long_trajectory(&closes);
        let a = PerformanceMetrics::compute(&trajectory).unwrap();
        let b = PerformanceMetrics::compute(&trajectory).unwrap();
        assert_eq!(a.total_return.to_bits(), b.total_return.to_bits());
        assert_eq!(a.annualized_return.to_bits(), b.annualized_return.to_bits());
        assert_eq!(a.volatility.to_bits(), b.volatility.to_bits());
        assert_eq!(a.sharpe_ratio.to_bits(), b.sharpe_ratio.to_bits());
        assert_eq!(a.max_drawdown.to_bits(), b.max_drawdown.to_bits());
    }

    #[test]
    fn metrics_serialization_roundtrip() {
        let closes = [100.0, 100.0, 102.0, 101.0, 104.0];
        let m = PerformanceMetrics::compute(&long_trajectory(&closes)).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        let deser: PerformanceMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(m.total_return.to_bits(), deser.total_return.to_bits());
    }
}
