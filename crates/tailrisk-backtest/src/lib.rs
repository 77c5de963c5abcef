//! # Tailrisk Backtest
//!
//! Rolling-window validation of VaR models against realized returns.
//!
//! A backtest slides a window across a return series, re-estimates VaR from
//! the window alone, and checks whether the next unseen observation
//! breaches the estimate. The resulting violation sequence feeds the
//! Kupiec proportion-of-failures test, which asks whether the observed
//! breach rate is statistically compatible with the expected rate
//! `1 - confidence`.
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_backtest::{run_kupiec_backtest, DEFAULT_SIGNIFICANCE};
//! use tailrisk_core::prelude::*;
//! use tailrisk_var::VaRMethod;
//!
//! let values: Vec<f64> = (0..300)
//!     .map(|i| ((i * 37 % 100) as f64 - 49.5) / 2_000.0)
//!     .collect();
//! let series = ReturnSeries::new(values)?;
//!
//! let report = run_kupiec_backtest(
//!     &series,
//!     100,
//!     Confidence::P95,
//!     &VaRMethod::Historical,
//!     DEFAULT_SIGNIFICANCE,
//! )?;
//! assert_eq!(report.records.len(), 200);
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
#![allow(clippy::uninlined_format_args)]

pub mod kupiec;
pub mod report;
pub mod violation;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::kupiec::{
        kupiec_test, CalibrationVerdict, KupiecResult, DEFAULT_SIGNIFICANCE,
    };
    pub use crate::report::{run_kupiec_backtest, BacktestReport};
    pub use crate::violation::{average_exceedance, rolling_violations, ViolationRecord};
    pub use tailrisk_core::{Confidence, ReturnSeries, RiskError, RiskResult};
}

pub use kupiec::{
    kupiec_test, kupiec_test_from_records, CalibrationVerdict, KupiecResult, DEFAULT_SIGNIFICANCE,
};
pub use report::{run_kupiec_backtest, BacktestReport};
pub use violation::{average_exceedance, rolling_violations, ViolationRecord};
