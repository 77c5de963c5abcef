//! High-level entry points: method dispatch and the all-metrics calculator.
//!
//! This module provides the function-level contract the dashboard consumes
//! ([`compute_var`] / [`compute_cvar`]) plus a [`RiskCalculator`] that holds
//! a series and confidence once and produces every metric of the summary
//! table, including dollar conversions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tailrisk_core::{Confidence, ReturnSeries, RiskResult};

use crate::cvar::{historical_cvar, monte_carlo_cvar};
use crate::estimate::{CVaREstimate, VaREstimate, VaRMethodKind};
use crate::historical::historical_var;
use crate::monte_carlo::{monte_carlo_var, SimulationConfig};
use crate::parametric::{parametric_cvar, parametric_var};

/// A VaR estimation method together with its parameters.
///
/// The method set is a small closed set, modeled as a tagged variant
/// rather than an open plugin hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum VaRMethod {
    /// Historical simulation.
    Historical,
    /// Parametric (variance-covariance).
    Parametric,
    /// Monte Carlo simulation with the given configuration.
    MonteCarlo(SimulationConfig),
}

impl VaRMethod {
    /// The label of this method, without parameters.
    #[must_use]
    pub fn kind(&self) -> VaRMethodKind {
        match self {
            Self::Historical => VaRMethodKind::Historical,
            Self::Parametric => VaRMethodKind::Parametric,
            Self::MonteCarlo(_) => VaRMethodKind::MonteCarlo,
        }
    }
}

/// Computes a one-period VaR estimate with the chosen method.
///
/// Multi-period horizons are available on the per-method functions
/// ([`historical_var`], [`parametric_var`], [`monte_carlo_var`]).
pub fn compute_var(
    series: &ReturnSeries,
    confidence: Confidence,
    method: &VaRMethod,
) -> RiskResult<VaREstimate> {
    match method {
        VaRMethod::Historical => historical_var(series, confidence, 1),
        VaRMethod::Parametric => parametric_var(series, confidence, 1),
        VaRMethod::MonteCarlo(config) => monte_carlo_var(series, confidence, 1, config),
    }
}

/// Computes a one-period CVaR estimate with the chosen method.
pub fn compute_cvar(
    series: &ReturnSeries,
    confidence: Confidence,
    method: &VaRMethod,
) -> RiskResult<CVaREstimate> {
    match method {
        VaRMethod::Historical => historical_cvar(series, confidence, 1),
        VaRMethod::Parametric => parametric_cvar(series, confidence, 1),
        VaRMethod::MonteCarlo(config) => monte_carlo_cvar(series, confidence, 1, config),
    }
}

/// Calculator bundling every VaR/CVaR metric for one series.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::prelude::*;
/// use tailrisk_var::{RiskCalculator, SimulationConfig};
///
/// let series = ReturnSeries::new(vec![
///     -0.02, 0.01, -0.03, 0.015, -0.01, 0.02, -0.025, 0.005, -0.015, 0.01,
/// ])?;
/// let calc = RiskCalculator::new(series, Confidence::P95);
/// let metrics = calc.all_metrics(&SimulationConfig::new(10_000, 42))?;
/// assert!(metrics.historical_cvar.expected_loss >= metrics.historical_var.loss);
/// # Ok::<(), tailrisk_core::RiskError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    series: ReturnSeries,
    confidence: Confidence,
}

impl RiskCalculator {
    /// Creates a calculator for a validated series and confidence level.
    #[must_use]
    pub fn new(series: ReturnSeries, confidence: Confidence) -> Self {
        Self { series, confidence }
    }

    /// The series under analysis.
    #[must_use]
    pub fn series(&self) -> &ReturnSeries {
        &self.series
    }

    /// The confidence level applied to every metric.
    #[must_use]
    pub fn confidence(&self) -> Confidence {
        self.confidence
    }

    /// One-period historical VaR.
    pub fn historical_var(&self) -> RiskResult<VaREstimate> {
        historical_var(&self.series, self.confidence, 1)
    }

    /// One-period historical CVaR.
    pub fn historical_cvar(&self) -> RiskResult<CVaREstimate> {
        historical_cvar(&self.series, self.confidence, 1)
    }

    /// One-period parametric VaR.
    pub fn parametric_var(&self) -> RiskResult<VaREstimate> {
        parametric_var(&self.series, self.confidence, 1)
    }

    /// One-period parametric CVaR.
    pub fn parametric_cvar(&self) -> RiskResult<CVaREstimate> {
        parametric_cvar(&self.series, self.confidence, 1)
    }

    /// One-period Monte Carlo VaR.
    pub fn monte_carlo_var(&self, config: &SimulationConfig) -> RiskResult<VaREstimate> {
        monte_carlo_var(&self.series, self.confidence, 1, config)
    }

    /// One-period Monte Carlo CVaR.
    pub fn monte_carlo_cvar(&self, config: &SimulationConfig) -> RiskResult<CVaREstimate> {
        monte_carlo_cvar(&self.series, self.confidence, 1, config)
    }

    /// Calculates all six metrics at once.
    ///
    /// The Monte Carlo VaR/CVaR pair shares `config`, so both read the same
    /// simulated batch. Any failing metric fails the whole call; a constant
    /// series, for example, surfaces `DegenerateTail` here.
    pub fn all_metrics(&self, config: &SimulationConfig) -> RiskResult<RiskMetrics> {
        Ok(RiskMetrics {
            historical_var: self.historical_var()?,
            historical_cvar: self.historical_cvar()?,
            parametric_var: self.parametric_var()?,
            parametric_cvar: self.parametric_cvar()?,
            monte_carlo_var: self.monte_carlo_var(config)?,
            monte_carlo_cvar: self.monte_carlo_cvar(config)?,
        })
    }
}

/// Every metric of the dashboard summary table, as fractions of portfolio
/// value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskMetrics {
    /// Historical VaR.
    pub historical_var: VaREstimate,
    /// Historical CVaR.
    pub historical_cvar: CVaREstimate,
    /// Parametric VaR.
    pub parametric_var: VaREstimate,
    /// Parametric CVaR.
    pub parametric_cvar: CVaREstimate,
    /// Monte Carlo VaR.
    pub monte_carlo_var: VaREstimate,
    /// Monte Carlo CVaR.
    pub monte_carlo_cvar: CVaREstimate,
}

impl RiskMetrics {
    /// Converts every metric into a currency amount.
    #[must_use]
    pub fn dollar(&self, portfolio_value: Decimal) -> DollarRiskMetrics {
        DollarRiskMetrics {
            historical_var: self.historical_var.dollar_loss(portfolio_value),
            historical_cvar: self.historical_cvar.dollar_loss(portfolio_value),
            parametric_var: self.parametric_var.dollar_loss(portfolio_value),
            parametric_cvar: self.parametric_cvar.dollar_loss(portfolio_value),
            monte_carlo_var: self.monte_carlo_var.dollar_loss(portfolio_value),
            monte_carlo_cvar: self.monte_carlo_cvar.dollar_loss(portfolio_value),
        }
    }
}

/// [`RiskMetrics`] converted to currency amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DollarRiskMetrics {
    /// Historical VaR in currency units.
    pub historical_var: Decimal,
    /// Historical CVaR in currency units.
    pub historical_cvar: Decimal,
    /// Parametric VaR in currency units.
    pub parametric_var: Decimal,
    /// Parametric CVaR in currency units.
    pub parametric_cvar: Decimal,
    /// Monte Carlo VaR in currency units.
    pub monte_carlo_var: Decimal,
    /// Monte Carlo CVaR in currency units.
    pub monte_carlo_cvar: Decimal,
}
