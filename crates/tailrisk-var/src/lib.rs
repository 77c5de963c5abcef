//! # Tailrisk VaR
//!
//! Value-at-Risk and Expected Shortfall estimators for portfolio return
//! series.
//!
//! This crate provides the three estimators behind the risk dashboard:
//!
//! - **Historical**: empirical loss quantile of the observed returns
//! - **Parametric**: closed-form Gaussian quantile from sample moments
//! - **Monte Carlo**: seeded simulation from a fitted distribution
//!
//! plus Conditional VaR (Expected Shortfall) for each method and a
//! [`RiskCalculator`] that bundles every metric for a series the way the
//! dashboard summary table consumes them.
//!
//! ## Conventions
//!
//! Losses are positive numbers: VaR at confidence `c` is the loss magnitude
//! at the `1 - c` quantile of the return distribution. Multi-period
//! horizons scale the one-period estimate by the square root of time.
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::prelude::*;
//! use tailrisk_var::{compute_var, VaRMethod};
//!
//! let series = ReturnSeries::new(vec![
//!     -0.02, 0.01, -0.03, 0.015, -0.01, 0.02, -0.025, 0.005, -0.015, 0.01,
//! ])?;
//! let var = compute_var(&series, Confidence::P95, &VaRMethod::Historical)?;
//! assert!(var.loss > 0.0);
//! # Ok::<(), tailrisk_core::RiskError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod calculator;
pub mod cvar;
mod empirical;
pub mod estimate;
pub mod historical;
pub mod monte_carlo;
pub mod parametric;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::calculator::{compute_cvar, compute_var, RiskCalculator, RiskMetrics, VaRMethod};
    pub use crate::cvar::{historical_cvar, monte_carlo_cvar};
    pub use crate::estimate::{CVaREstimate, VaREstimate, VaRMethodKind};
    pub use crate::historical::historical_var;
    pub use crate::monte_carlo::{
        monte_carlo_var, SimulationBatch, SimulationConfig, SimulationDistribution,
    };
    pub use crate::parametric::{parametric_cvar, parametric_var};
    pub use tailrisk_core::{Confidence, ReturnSeries, RiskError, RiskResult};
}

pub use calculator::{
    compute_cvar, compute_var, DollarRiskMetrics, RiskCalculator, RiskMetrics, VaRMethod,
};
pub use cvar::{historical_cvar, monte_carlo_cvar};
pub use estimate::{CVaREstimate, VaREstimate, VaRMethodKind};
pub use historical::historical_var;
pub use monte_carlo::{
    monte_carlo_var, monte_carlo_var_with_params, SimulationBatch, SimulationConfig,
    SimulationDistribution, DEFAULT_SIMULATION_DRAWS,
};
pub use parametric::{parametric_cvar, parametric_var};
