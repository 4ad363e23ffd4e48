//! Parameter sweep utilities — evaluate many strategies over one series.
//!
//! Each evaluation is signal generation → backtest → metrics, a pure
//! pipeline over a read-only `PriceSeries`, so the sweep fans out on a
//! rayon parallel iterator with no coordination. Strategies that fail
//! validation (for example, a window larger than the series) are
//! skipped rather than aborting the sweep.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use alphalab_core::{generate_signal, run_backtest, BacktestConfig, PriceSeries, Strategy};

use crate::performance::PerformanceMetrics;

/// Parameter grid specification.
///
/// Defines the window ranges to sweep per strategy family.
#[derive(Debug, Clone)]
pub struct ParamGrid {
    pub momentum_windows: Vec<usize>,
    pub mean_reversion_windows: Vec<usize>,
    pub crossover_short_windows: Vec<usize>,
    pub crossover_long_windows: Vec<usize>,
    pub include_factor_model: bool,
}

impl ParamGrid {
    /// A small default grid around the per-strategy default parameters.
    pub fn default_grid() -> Self {
        Self {
            momentum_windows: vec![5, 10, 20],
            mean_reversion_windows: vec![10, 20],
            crossover_short_windows: vec![5, 10],
            crossover_long_windows: vec![20, 50],
            include_factor_model: true,
        }
    }

    /// Expand the grid into concrete strategies, skipping crossover
    /// combinations where the short window is not below the long one.
    pub fn strategies(&self) -> Vec<Strategy> {
        let mut out = Vec::new();
        for &w in &self.momentum_windows {
            out.push(Strategy::momentum(w));
        }
        for &w in &self.mean_reversion_windows {
            out.push(Strategy::mean_reversion(w));
        }
        for &short in &self.crossover_short_windows {
            for &long in &self.crossover_long_windows {
                if short >= long {
                    continue;
                }
                out.push(Strategy::ma_crossover(short, long));
            }
        }
        if self.include_factor_model {
            out.push(Strategy::FactorModel);
        }
        out
    }
}

/// One sweep entry: the strategy evaluated and its metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepResult {
    pub strategy: Strategy,
    pub metrics: PerformanceMetrics,
}

/// Evaluate every strategy against the series in parallel.
///
/// Output order matches the input strategy order. Strategies whose
/// evaluation fails at any pipeline stage are omitted.
pub fn run_sweep(
    series: &PriceSeries,
    strategies: &[Strategy],
    config: &BacktestConfig,
) -> Vec<SweepResult> {
    strategies
        .par_iter()
        .filter_map(|strategy| {
            let frame = generate_signal(series, strategy).ok()?;
            let trajectory = run_backtest(&frame, config).ok()?;
            let metrics = PerformanceMetrics::compute(&trajectory).ok()?;
            Some(SweepResult {
                strategy: strategy.clone(),
                metrics,
            })
        })
        .collect()
}
