//! Bar — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// OHLCV bar for a single symbol on a single session.
///
/// All fields are plain f64; a bar is only accepted into a `PriceSeries`
/// if it passes `is_sane()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Returns true if any OHLCV field is non-finite.
    pub fn is_void(&self) -> bool {
        !(self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite())
    }

    /// Basic OHLCV sanity check: finite fields, high/low envelope, close > 0.
    pub fn is_sane(&self) -> bool {
        if self.is_void() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.open > 0.0
            && self.close > 0.0
    }
}

/// Validation errors raised by `PriceSeries::new`.
#[derive(Debug, thiserror::Error)]
pub enum SeriesError {
    #[error("Bar at index {0} has a duplicate or out-of-order date")]
    NonMonotonicDate(usize),

    #[error("Bar at index {0} fails OHLCV sanity checks")]
    InsaneBar(usize),
}

/// Ordered, validated series of daily bars for one symbol.
///
/// Invariants enforced at construction: dates are strictly increasing
/// (no duplicates), every bar passes `Bar::is_sane`. Gaps between
/// sessions are permitted; they simply leave fewer rolling-window-ready
/// rows downstream. The series is read-only after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    symbol: String,
    bars: Vec<Bar>,
}

impl PriceSeries {
    pub fn new(symbol: impl Into<String>, bars: Vec<Bar>) -> Result<Self, SeriesError> {
        for (i, bar) in bars.iter().enumerate() {
            if !bar.is_sane() {
                return Err(SeriesError::InsaneBar(i));
            }
            if i > 0 && bar.date <= bars[i - 1].date {
                return Err(SeriesError::NonMonotonicDate(i));
            }
        }
        Ok(Self {
            symbol: symbol.into(),
            bars,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Close column as a fresh vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Date column as a fresh vector.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }
}
