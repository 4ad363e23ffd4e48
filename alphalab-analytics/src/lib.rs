//! AlphaLab Analytics — performance metrics, risk model, parameter sweeps.
//!
//! Consumes trajectories and return series produced by `alphalab-core`
//! (or any other source of daily returns) and turns them into
//! standardized statistics:
//! - `performance`: total/annualized return, volatility, Sharpe, drawdown
//! - `risk`: Sharpe, CAPM beta/alpha, VaR, expected shortfall, drawdown
//! - `sweep`: rayon-parallel evaluation of strategy grids
//!
//! All metric snapshots are pure value objects, recomputed on demand.

pub mod performance;
pub mod risk;
pub mod stats;
pub mod sweep;

pub use performance::{PerformanceError, PerformanceMetrics};
pub use risk::{AssetReturns, RiskError, RiskMetrics, RiskModel};
pub use sweep::{run_sweep, ParamGrid, SweepResult};
