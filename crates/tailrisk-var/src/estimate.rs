//! Estimate types returned by the VaR and CVaR calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use tailrisk_core::Confidence;

/// The estimator that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VaRMethodKind {
    /// Historical simulation (empirical quantile).
    Historical,
    /// Parametric (variance-covariance, Gaussian).
    Parametric,
    /// Monte Carlo simulation.
    MonteCarlo,
}

impl fmt::Display for VaRMethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Historical => write!(f, "historical"),
            Self::Parametric => write!(f, "parametric"),
            Self::MonteCarlo => write!(f, "monte-carlo"),
        }
    }
}

/// A Value-at-Risk estimate.
///
/// `loss` is the estimated loss threshold as a fraction of portfolio value,
/// positive for a loss. A negative value means the return distribution sits
/// entirely in profit territory at this confidence; it is preserved rather
/// than clamped so that quantile arithmetic stays exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VaREstimate {
    /// Confidence level of the estimate.
    pub confidence: Confidence,
    /// Horizon in periods (scaled by the square root of time).
    pub horizon_periods: u32,
    /// Loss threshold as a fraction of portfolio value.
    pub loss: f64,
    /// Method used for calculation.
    pub method: VaRMethodKind,
    /// True when the parametric estimator saw zero sample dispersion and
    /// fell back to `VaR = -mean`.
    pub degenerate_variance: bool,
}

impl VaREstimate {
    /// Converts the fractional loss into a currency amount.
    pub fn dollar_loss(&self, portfolio_value: Decimal) -> Decimal {
        Decimal::from_f64_retain(self.loss).unwrap_or(Decimal::ZERO) * portfolio_value
    }
}

impl fmt::Display for VaREstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VaR({}, {}p, {}): {:.4}%",
            self.confidence,
            self.horizon_periods,
            self.method,
            self.loss * 100.0
        )
    }
}

/// A Conditional VaR (Expected Shortfall) estimate.
///
/// `expected_loss` is the mean loss conditional on exceeding the VaR
/// threshold; the threshold itself is carried alongside so the invariant
/// `expected_loss >= var` stays checkable on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CVaREstimate {
    /// Confidence level of the estimate.
    pub confidence: Confidence,
    /// Horizon in periods (scaled by the square root of time).
    pub horizon_periods: u32,
    /// Expected loss beyond the VaR threshold, as a fraction of portfolio value.
    pub expected_loss: f64,
    /// The VaR threshold this estimate conditions on.
    pub var: f64,
    /// Method used for calculation.
    pub method: VaRMethodKind,
}

impl CVaREstimate {
    /// Converts the fractional expected loss into a currency amount.
    pub fn dollar_loss(&self, portfolio_value: Decimal) -> Decimal {
        Decimal::from_f64_retain(self.expected_loss).unwrap_or(Decimal::ZERO) * portfolio_value
    }
}

impl fmt::Display for CVaREstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CVaR({}, {}p, {}): {:.4}%",
            self.confidence,
            self.horizon_periods,
            self.method,
            self.expected_loss * 100.0
        )
    }
}
