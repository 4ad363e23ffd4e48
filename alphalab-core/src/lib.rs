//! AlphaLab Core — domain types, rolling indicators, signal strategies,
//! backtest simulator.
//!
//! This crate contains the strategy-evaluation engine:
//! - Domain types (bars, validated price series)
//! - NaN-padded rolling indicator columns
//! - Four rule-based signal strategies behind a tagged `Strategy` enum
//! - Signal-lagged backtest simulator with flat per-trade costs
//!
//! Everything is a pure function over immutable inputs: no I/O, no
//! shared mutable state, no caching. Independent runs (parameter
//! sweeps, multiple symbols) can execute in parallel without
//! coordination.

pub mod backtest;
pub mod domain;
pub mod indicators;
pub mod signal;

pub use backtest::{run_backtest, BacktestConfig, BacktestError, Trajectory, TrajectoryRow};
pub use domain::{Bar, PriceSeries, SeriesError};
pub use signal::{generate_signal, Signal, SignalError, Strategy, StrategyFrame};
