//! Domain types: OHLCV bars and validated price series.

pub mod bar;

pub use bar::{Bar, PriceSeries, SeriesError};
