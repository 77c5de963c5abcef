//! Rolling-window violation tracking.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tailrisk_core::{Confidence, ReturnSeries, RiskError, RiskResult};
use tailrisk_var::{
    historical_var, monte_carlo_var, parametric_var, SimulationConfig, VaRMethod,
};

/// Stride mixed into the Monte Carlo seed per backtest step, so each window
/// re-estimate draws from its own reproducible stream.
const STEP_SEED_STRIDE: u64 = 104_729;

/// One out-of-sample backtest step.
///
/// `predicted_var` was estimated from the trailing window only;
/// `realized_return` is the observation immediately after it. A breach is a
/// realized loss strictly exceeding the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// Out-of-sample step index, starting at 0.
    pub step: usize,
    /// Date of the realized observation, when the series carries dates.
    pub date: Option<NaiveDate>,
    /// VaR threshold predicted from the trailing window.
    pub predicted_var: f64,
    /// The realized return the prediction was tested against.
    pub realized_return: f64,
    /// True when the realized loss exceeded the prediction.
    pub breached: bool,
}

/// Slides a window of length `window` across the series and records one
/// violation check per step.
///
/// Each step estimates VaR from `values[step .. step + window]` alone and
/// compares it against `values[step + window]`. The output has exactly
/// `series.len() - window` records, in step order.
///
/// For the Monte Carlo method, every step derives its own stream seed from
/// the configured seed and the step index; a fixed configuration
/// reproduces the whole backtest.
///
/// # Errors
///
/// Returns [`RiskError::WindowTooLarge`] when `window >= series.len()`
/// (no out-of-sample observations remain) and
/// [`RiskError::InsufficientData`] when `window < 2`.
pub fn rolling_violations(
    series: &ReturnSeries,
    window: usize,
    confidence: Confidence,
    method: &VaRMethod,
) -> RiskResult<Vec<ViolationRecord>> {
    let observations = series.len();
    if window >= observations {
        return Err(RiskError::WindowTooLarge {
            window,
            observations,
        });
    }
    if window < ReturnSeries::MIN_OBSERVATIONS {
        return Err(RiskError::insufficient_data(
            ReturnSeries::MIN_OBSERVATIONS,
            window,
        ));
    }

    let values = series.values();
    let steps = observations - window;
    debug!(window, steps, "running rolling VaR backtest");

    let mut records = Vec::with_capacity(steps);
    for step in 0..steps {
        let window_series = ReturnSeries::new(values[step..step + window].to_vec())?;
        let estimate = match method {
            VaRMethod::Historical => historical_var(&window_series, confidence, 1)?,
            VaRMethod::Parametric => parametric_var(&window_series, confidence, 1)?,
            VaRMethod::MonteCarlo(config) => {
                let step_config = SimulationConfig {
                    seed: config.seed.wrapping_add(step as u64 * STEP_SEED_STRIDE),
                    ..*config
                };
                monte_carlo_var(&window_series, confidence, 1, &step_config)?
            }
        };

        let realized_return = values[step + window];
        records.push(ViolationRecord {
            step,
            date: series.date_at(step + window),
            predicted_var: estimate.loss,
            realized_return,
            breached: -realized_return > estimate.loss,
        });
    }

    Ok(records)
}

/// Mean size of the breaches beyond the predicted threshold, or `None`
/// when no step breached.
pub fn average_exceedance(records: &[ViolationRecord]) -> Option<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;
    for record in records.iter().filter(|r| r.breached) {
        sum += -record.realized_return - record.predicted_var;
        count += 1;
    }
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// 19 small distinct returns plus one large loss, repeated. With the
    /// window equal to the cycle length every window holds the same set,
    /// so the historical VaR forecast is constant and exactly one step in
    /// twenty breaches it.
    fn cyclic_series(cycles: usize) -> ReturnSeries {
        let mut values = Vec::with_capacity(cycles * 20);
        for _ in 0..cycles {
            for i in 0..19 {
                values.push((i as f64 - 9.0) * 0.001);
            }
            values.push(-0.05);
        }
        ReturnSeries::new(values).unwrap()
    }

    #[test]
    fn test_record_count_and_ordering() {
        let series = cyclic_series(3);
        let records =
            rolling_violations(&series, 20, Confidence::P95, &VaRMethod::Historical).unwrap();
        assert_eq!(records.len(), 40);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.step, i);
        }
    }

    #[test]
    fn test_breach_rate_matches_construction() {
        let series = cyclic_series(6);
        let records =
            rolling_violations(&series, 20, Confidence::P95, &VaRMethod::Historical).unwrap();
        let breaches = records.iter().filter(|r| r.breached).count();
        // One large loss per 20-step cycle, 100 out-of-sample steps.
        assert_eq!(records.len(), 100);
        assert_eq!(breaches, 5);
        for record in &records {
            assert_eq!(record.breached, record.realized_return == -0.05);
        }
    }

    #[test]
    fn test_window_too_large() {
        let series = cyclic_series(1);
        let err =
            rolling_violations(&series, 20, Confidence::P95, &VaRMethod::Historical).unwrap_err();
        assert_eq!(
            err,
            RiskError::WindowTooLarge {
                window: 20,
                observations: 20
            }
        );

        let err =
            rolling_violations(&series, 25, Confidence::P95, &VaRMethod::Historical).unwrap_err();
        assert!(matches!(err, RiskError::WindowTooLarge { .. }));
    }

    #[test]
    fn test_window_below_minimum() {
        let series = cyclic_series(2);
        let err =
            rolling_violations(&series, 1, Confidence::P95, &VaRMethod::Historical).unwrap_err();
        assert_eq!(err, RiskError::insufficient_data(2, 1));
    }

    #[test]
    fn test_average_exceedance() {
        let series = cyclic_series(6);
        let records =
            rolling_violations(&series, 20, Confidence::P95, &VaRMethod::Historical).unwrap();
        // Every breach realizes a 0.05 loss against the same forecast.
        let expected = 0.05 - records[19].predicted_var;
        assert_relative_eq!(
            average_exceedance(&records).unwrap(),
            expected,
            epsilon = 1e-12
        );

        // No breaches at all -> None.
        let calm: Vec<ViolationRecord> = records
            .iter()
            .map(|r| ViolationRecord {
                breached: false,
                ..*r
            })
            .collect();
        assert_eq!(average_exceedance(&calm), None);
    }

    #[test]
    fn test_dates_flow_into_records() {
        let values: Vec<f64> = (0..10).map(|i| (i as f64 - 4.5) * 0.01).collect();
        let dates: Vec<chrono::NaiveDate> = (1..=10)
            .map(|d| chrono::NaiveDate::from_ymd_opt(2024, 2, d).unwrap())
            .collect();
        let series = ReturnSeries::with_dates(dates, values).unwrap();
        let records =
            rolling_violations(&series, 5, Confidence::P95, &VaRMethod::Historical).unwrap();
        assert_eq!(records.len(), 5);
        assert_eq!(
            records[0].date,
            chrono::NaiveDate::from_ymd_opt(2024, 2, 6)
        );
    }
}
