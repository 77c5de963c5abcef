//! # Tailrisk Portfolio
//!
//! Portfolio return construction and descriptive statistics.
//!
//! The risk estimators in `tailrisk-var` consume a single portfolio return
//! series; this crate builds that series from the caller's cleaned market
//! data and summarises it for display:
//!
//! - **Returns**: simple and log returns from price series
//! - **Weights**: validated allocations and the weighted collapse of an
//!   asset return matrix into one [`ReturnSeries`]
//! - **Statistics**: annualised return/volatility, Sharpe ratio, higher
//!   moments
//! - **Correlation**: covariance and correlation matrices across assets
//!
//! Pure functions only: all inputs explicit, no I/O or caching. Fetching
//! prices is the caller's concern.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod correlation;
pub mod returns;
pub mod statistics;
pub mod weights;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::correlation::{correlation_matrix, covariance_matrix};
    pub use crate::returns::{log_returns, simple_returns};
    pub use crate::statistics::{summary_statistics, PortfolioStatistics};
    pub use crate::weights::PortfolioWeights;
    pub use tailrisk_core::{Confidence, ReturnSeries, RiskError, RiskResult};
}

pub use correlation::{correlation_matrix, covariance_matrix};
pub use returns::{log_returns, simple_returns};
pub use statistics::{summary_statistics, PortfolioStatistics};
pub use weights::PortfolioWeights;
