//! Risk model — Sharpe, CAPM beta/alpha, Value-at-Risk, Expected
//! Shortfall, and drawdown over realized return series.
//!
//! Operates on any daily return series, not just simulator output.
//! Per-asset computations are independent; the only shared input is the
//! optional market/benchmark series. Undefined statistics (empty
//! expected-shortfall tail) come back as NaN, not as errors.

use serde::{Deserialize, Serialize};

use crate::performance::max_drawdown;
use crate::stats::{mean, population_variance, quantile, sample_covariance, sample_std};

/// Trading days per year used to de-annualize the risk-free rate.
const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Errors that can occur while building or querying a risk model.
#[derive(Debug, thiserror::Error)]
pub enum RiskError {
    #[error("Return series '{name}' needs at least 2 observations, got {actual}")]
    InsufficientData { name: String, actual: usize },

    #[error("Return series '{name}' has {actual} observations, expected {expected} to match the market series")]
    MismatchedLengths {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("Confidence level must lie strictly between 0 and 1, got {0}")]
    InvalidConfidence(f64),
}

/// Named daily return series for one asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetReturns {
    pub name: String,
    pub returns: Vec<f64>,
}

impl AssetReturns {
    pub fn new(name: impl Into<String>, returns: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            returns,
        }
    }
}

/// Per-asset risk metric snapshot.
///
/// `beta` and `alpha` are present only when a market series was
/// supplied. `expected_shortfall` is NaN when no return falls below the
/// VaR threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskMetrics {
    pub name: String,
    pub sharpe: f64,
    pub beta: Option<f64>,
    pub alpha: Option<f64>,
    pub value_at_risk: f64,
    pub expected_shortfall: f64,
    pub max_drawdown: f64,
}

/// Risk model over one or more aligned return series.
#[derive(Debug, Clone)]
pub struct RiskModel {
    assets: Vec<AssetReturns>,
    risk_free_rate: f64,
}

impl RiskModel {
    pub const DEFAULT_RISK_FREE_RATE: f64 = 0.02;
    pub const DEFAULT_CONFIDENCE: f64 = 0.95;

    /// Build a model, validating that every series has at least 2
    /// observations.
    pub fn new(assets: Vec<AssetReturns>, risk_free_rate: f64) -> Result<Self, RiskError> {
        for asset in &assets {
            if asset.returns.len() < 2 {
                return Err(RiskError::InsufficientData {
                    name: asset.name.clone(),
                    actual: asset.returns.len(),
                });
            }
        }
        Ok(Self {
            assets,
            risk_free_rate,
        })
    }

    fn daily_risk_free(&self) -> f64 {
        self.risk_free_rate / TRADING_DAYS_PER_YEAR
    }

    fn check_market(&self, market: &[f64]) -> Result<(), RiskError> {
        if market.len() < 2 {
            return Err(RiskError::InsufficientData {
                name: "market".to_string(),
                actual: market.len(),
            });
        }
        for asset in &self.assets {
            if asset.returns.len() != market.len() {
                return Err(RiskError::MismatchedLengths {
                    name: asset.name.clone(),
                    expected: market.len(),
                    actual: asset.returns.len(),
                });
            }
        }
        Ok(())
    }

    /// Daily Sharpe ratio per asset: mean excess return over its std.
    /// Not annualized.
    pub fn sharpe(&self) -> Vec<(String, f64)> {
        let rf = self.daily_risk_free();
        self.assets
            .iter()
            .map(|asset| {
                let excess: Vec<f64> = asset.returns.iter().map(|r| r - rf).collect();
                (asset.name.clone(), mean(&excess) / sample_std(&excess))
            })
            .collect()
    }

    /// CAPM beta per asset: covariance with the market over market
    /// variance. Covariance uses the sample (n − 1) denominator, market
    /// variance the population (n) denominator.
    pub fn beta(&self, market: &[f64]) -> Result<Vec<(String, f64)>, RiskError> {
        self.check_market(market)?;
        let market_var = population_variance(market);
        Ok(self
            .assets
            .iter()
            .map(|asset| {
                let cov = sample_covariance(&asset.returns, market);
                (asset.name.clone(), cov / market_var)
            })
            .collect())
    }

    /// CAPM alpha per asset: mean return minus the CAPM-expected return.
    pub fn alpha(&self, market: &[f64]) -> Result<Vec<(String, f64)>, RiskError> {
        let betas = self.beta(market)?;
        let rf = self.daily_risk_free();
        let market_mean = mean(market);
        Ok(self
            .assets
            .iter()
            .zip(betas)
            .map(|(asset, (name, beta))| {
                let expected = rf + beta * (market_mean - rf);
                (name, mean(&asset.returns) - expected)
            })
            .collect())
    }

    /// Value-at-Risk per asset: the (1 − confidence) quantile of the
    /// return distribution (a negative number for loss-making tails).
    pub fn value_at_risk(&self, confidence: f64) -> Result<Vec<(String, f64)>, RiskError> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(RiskError::InvalidConfidence(confidence));
        }
        Ok(self
            .assets
            .iter()
            .map(|asset| {
                (
                    asset.name.clone(),
                    quantile(&asset.returns, 1.0 - confidence),
                )
            })
            .collect())
    }

    /// Expected shortfall per asset: mean of returns strictly below the
    /// VaR threshold; NaN when no return qualifies.
    pub fn expected_shortfall(&self, confidence: f64) -> Result<Vec<(String, f64)>, RiskError> {
        let var = self.value_at_risk(confidence)?;
        Ok(self
            .assets
            .iter()
            .zip(var)
            .map(|(asset, (name, threshold))| {
                let tail: Vec<f64> = asset
                    .returns
                    .iter()
                    .copied()
                    .filter(|r| *r < threshold)
                    .collect();
                (name, mean(&tail))
            })
            .collect())
    }

    /// Maximum drawdown per asset over the equity curve implied by
    /// compounding the returns.
    pub fn max_drawdown(&self) -> Vec<(String, f64)> {
        self.assets
            .iter()
            .map(|asset| {
                let mut equity = Vec::with_capacity(asset.returns.len());
                let mut value = 1.0;
                for r in &asset.returns {
                    value *= 1.0 + r;
                    equity.push(value);
                }
                (asset.name.clone(), max_drawdown(&equity))
            })
            .collect()
    }

    /// Aggregate per-asset snapshot. Beta and alpha are filled only
    /// when a market series is supplied.
    pub fn compute(
        &self,
        market: Option<&[f64]>,
        confidence: f64,
    ) -> Result<Vec<RiskMetrics>, RiskError> {
        let sharpe = self.sharpe();
        let var = self.value_at_risk(confidence)?;
        let shortfall = self.expected_shortfall(confidence)?;
        let drawdown = self.max_drawdown();

        let (betas, alphas) = match market {
            Some(m) => {
                let b = self.beta(m)?;
                let a = self.alpha(m)?;
                (Some(b), Some(a))
            }
            None => (None, None),
        };

        Ok((0..self.assets.len())
            .map(|i| RiskMetrics {
                name: self.assets[i].name.clone(),
                sharpe: sharpe[i].1,
                beta: betas.as_ref().map(|b| b[i].1),
                alpha: alphas.as_ref().map(|a| a[i].1),
                value_at_risk: var[i].1,
                expected_shortfall: shortfall[i].1,
                max_drawdown: drawdown[i].1,
            })
            .collect())
    }
}
