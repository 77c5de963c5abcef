//! The full backtest entry point.

use serde::{Deserialize, Serialize};

use tailrisk_core::{Confidence, ReturnSeries, RiskResult};
use tailrisk_var::VaRMethod;

use crate::kupiec::{kupiec_test_from_records, KupiecResult};
use crate::violation::{average_exceedance, rolling_violations, ViolationRecord};

/// Everything a backtest run produces: the violation sequence, the Kupiec
/// result, and the breach summary the dashboard charts alongside them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestReport {
    /// One record per out-of-sample step, in step order.
    pub records: Vec<ViolationRecord>,
    /// The Kupiec POF test over the full violation sequence.
    pub kupiec: KupiecResult,
    /// Fraction of steps that breached their forecast.
    pub exception_rate: f64,
    /// Mean breach size beyond the forecast, `None` without breaches.
    pub average_exceedance: Option<f64>,
}

/// Runs a rolling-window VaR backtest and the Kupiec POF test on its
/// violation sequence.
///
/// At each step the chosen method is re-estimated from the trailing
/// `window` observations only and compared against the next realized
/// return; see [`rolling_violations`]. The calibration verdict is decided
/// at `significance` (conventionally
/// [`crate::DEFAULT_SIGNIFICANCE`]).
///
/// # Example
///
/// ```rust
/// use tailrisk_backtest::{run_kupiec_backtest, DEFAULT_SIGNIFICANCE};
/// use tailrisk_core::prelude::*;
/// use tailrisk_var::VaRMethod;
///
/// let values: Vec<f64> = (0..260)
///     .map(|i| ((i * 17 % 64) as f64 - 31.5) / 1_500.0)
///     .collect();
/// let series = ReturnSeries::new(values)?;
/// let report = run_kupiec_backtest(
///     &series,
///     64,
///     Confidence::P95,
///     &VaRMethod::Historical,
///     DEFAULT_SIGNIFICANCE,
/// )?;
/// assert_eq!(report.records.len(), 196);
/// assert_eq!(report.kupiec.observations, 196);
/// # Ok::<(), tailrisk_core::RiskError>(())
/// ```
pub fn run_kupiec_backtest(
    series: &ReturnSeries,
    window: usize,
    confidence: Confidence,
    method: &VaRMethod,
    significance: f64,
) -> RiskResult<BacktestReport> {
    let records = rolling_violations(series, window, confidence, method)?;
    let kupiec = kupiec_test_from_records(&records, confidence, significance)?;
    let breaches = records.iter().filter(|r| r.breached).count();

    Ok(BacktestReport {
        exception_rate: breaches as f64 / records.len() as f64,
        average_exceedance: average_exceedance(&records),
        records,
        kupiec,
    })
}
