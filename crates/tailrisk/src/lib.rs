//! # Tailrisk
//!
//! Portfolio tail-risk analytics: Value-at-Risk, Expected Shortfall, and
//! statistical backtesting.
//!
//! This facade crate re-exports the public API of the Tailrisk workspace:
//!
//! - [`core`](tailrisk_core): return series, confidence levels, errors
//! - [`var`](tailrisk_var): historical, parametric, and Monte Carlo VaR,
//!   plus CVaR and the all-metrics calculator
//! - [`backtest`](tailrisk_backtest): rolling-window violation tracking
//!   and the Kupiec proportion-of-failures test
//! - [`portfolio`](tailrisk_portfolio): portfolio return construction and
//!   summary statistics
//!
//! ## Example
//!
//! ```rust
//! use tailrisk::prelude::*;
//!
//! // Portfolio returns from two asset series.
//! let weights = PortfolioWeights::new(vec![0.7, 0.3])?;
//! let series = weights.portfolio_returns(&[
//!     vec![-0.02, 0.01, -0.03, 0.015, -0.01, 0.02, -0.025, 0.005],
//!     vec![0.01, -0.005, 0.02, -0.01, 0.005, -0.015, 0.01, 0.0],
//! ])?;
//!
//! // One-period 95% VaR via historical simulation.
//! let var = compute_var(&series, Confidence::P95, &VaRMethod::Historical)?;
//! assert!(var.loss.is_finite());
//! # Ok::<(), tailrisk::RiskError>(())
//! ```

#![warn(missing_docs)]

pub use tailrisk_backtest as backtest;
pub use tailrisk_core as core;
pub use tailrisk_portfolio as portfolio;
pub use tailrisk_var as var;

pub use tailrisk_backtest::{
    kupiec_test, run_kupiec_backtest, BacktestReport, CalibrationVerdict, KupiecResult,
    ViolationRecord, DEFAULT_SIGNIFICANCE,
};
pub use tailrisk_core::{Confidence, ReturnSeries, RiskError, RiskResult};
pub use tailrisk_portfolio::{
    correlation_matrix, covariance_matrix, log_returns, simple_returns, summary_statistics,
    PortfolioStatistics, PortfolioWeights,
};
pub use tailrisk_var::{
    compute_cvar, compute_var, historical_cvar, historical_var, monte_carlo_cvar, monte_carlo_var,
    parametric_cvar, parametric_var, CVaREstimate, DollarRiskMetrics, RiskCalculator, RiskMetrics,
    SimulationConfig, SimulationDistribution, VaREstimate, VaRMethod, VaRMethodKind,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use tailrisk_backtest::prelude::*;
    pub use tailrisk_core::prelude::*;
    pub use tailrisk_portfolio::prelude::*;
    pub use tailrisk_var::prelude::*;
}
