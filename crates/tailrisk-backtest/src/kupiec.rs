//! Kupiec proportion-of-failures (POF) test.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::warn;

use tailrisk_core::{Confidence, RiskError, RiskResult};

use crate::violation::ViolationRecord;

/// Default significance level for the calibration decision.
///
/// The decision threshold is always a parameter of the test; this constant
/// is only the conventional default.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Outcome of the calibration decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalibrationVerdict {
    /// The observed violation rate is compatible with the model.
    Accept,
    /// The observed violation rate rejects the model at the stated
    /// significance.
    Reject,
    /// Every step (or no step) violated: the likelihood ratio is
    /// degenerate and no statistic is reported.
    InsufficientVariation,
}

/// Result of a Kupiec POF test.
///
/// `lr_statistic` and `p_value` are `None` exactly when the verdict is
/// [`CalibrationVerdict::InsufficientVariation`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KupiecResult {
    /// Number of out-of-sample observations.
    pub observations: usize,
    /// Number of observed violations.
    pub violations: usize,
    /// Expected violation rate `1 - confidence`.
    pub expected_rate: f64,
    /// Observed violation rate `violations / observations`.
    pub observed_rate: f64,
    /// Significance level the verdict was decided at.
    pub significance: f64,
    /// Likelihood-ratio statistic, asymptotically chi-squared with 1 df.
    pub lr_statistic: Option<f64>,
    /// p-value of the statistic under the null of correct calibration.
    pub p_value: Option<f64>,
    /// The calibration decision.
    pub verdict: CalibrationVerdict,
}

/// Runs the Kupiec POF test on a violation count.
///
/// The likelihood ratio
///
/// ```text
/// LR = -2 ln[ (1-p)^(n-x) p^x / ((1-q)^(n-x) q^x) ],   q = x / n
/// ```
///
/// compares the expected violation rate `p = 1 - c` against the observed
/// rate. Under correct calibration LR is asymptotically chi-squared with
/// one degree of freedom; the verdict rejects when the p-value falls below
/// `significance`.
///
/// # Errors
///
/// Returns [`RiskError::InsufficientData`] for zero observations,
/// [`RiskError::DimensionMismatch`] when `violations > observations`, and
/// [`RiskError::InvalidSignificance`] for a significance outside (0, 1).
pub fn kupiec_test(
    observations: usize,
    violations: usize,
    confidence: Confidence,
    significance: f64,
) -> RiskResult<KupiecResult> {
    if observations == 0 {
        return Err(RiskError::insufficient_data(1, 0));
    }
    if violations > observations {
        return Err(RiskError::DimensionMismatch {
            left: violations,
            right: observations,
        });
    }
    if !significance.is_finite() || significance <= 0.0 || significance >= 1.0 {
        return Err(RiskError::InvalidSignificance {
            value: significance,
        });
    }

    let n = observations as f64;
    let x = violations as f64;
    let expected_rate = confidence.alpha();
    let observed_rate = x / n;

    if violations == 0 || violations == observations {
        warn!(
            observations,
            violations, "kupiec statistic degenerate, no variation in the hit sequence"
        );
        return Ok(KupiecResult {
            observations,
            violations,
            expected_rate,
            observed_rate,
            significance,
            lr_statistic: None,
            p_value: None,
            verdict: CalibrationVerdict::InsufficientVariation,
        });
    }

    let p = expected_rate;
    let q = observed_rate;
    let ln_null = (n - x) * (1.0 - p).ln() + x * p.ln();
    let ln_alt = (n - x) * (1.0 - q).ln() + x * q.ln();
    let lr = (2.0 * (ln_alt - ln_null)).max(0.0);

    let chi = ChiSquared::new(1.0).expect("valid chi-square dof");
    let p_value = 1.0 - chi.cdf(lr);

    let verdict = if p_value < significance {
        CalibrationVerdict::Reject
    } else {
        CalibrationVerdict::Accept
    };

    Ok(KupiecResult {
        observations,
        violations,
        expected_rate,
        observed_rate,
        significance,
        lr_statistic: Some(lr),
        p_value: Some(p_value),
        verdict,
    })
}

/// Runs the Kupiec POF test on a recorded violation sequence.
pub fn kupiec_test_from_records(
    records: &[ViolationRecord],
    confidence: Confidence,
    significance: f64,
) -> RiskResult<KupiecResult> {
    let violations = records.iter().filter(|r| r.breached).count();
    kupiec_test(records.len(), violations, confidence, significance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_exact_rate_gives_zero_statistic() {
        // 20 violations in 400 steps at 95% is exactly the expected rate.
        let result = kupiec_test(400, 20, Confidence::P95, DEFAULT_SIGNIFICANCE).unwrap();
        assert_relative_eq!(result.lr_statistic.unwrap(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(result.p_value.unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(result.verdict, CalibrationVerdict::Accept);
    }

    #[test]
    fn test_reference_statistic() {
        // 10 violations in 250 observations at 99% (expected 2.5) gives
        // LR ~= 12.96 and a clear rejection at 5%.
        let result = kupiec_test(250, 10, Confidence::P99, DEFAULT_SIGNIFICANCE).unwrap();
        let lr = result.lr_statistic.unwrap();
        assert_relative_eq!(lr, 12.955, epsilon = 1e-2);
        assert!(result.p_value.unwrap() < 0.05);
        assert_eq!(result.verdict, CalibrationVerdict::Reject);
    }

    #[test]
    fn test_moderate_excess_is_accepted() {
        // 16 violations in 250 steps at 95% (expected 12.5) is within
        // sampling noise.
        let result = kupiec_test(250, 16, Confidence::P95, DEFAULT_SIGNIFICANCE).unwrap();
        assert!(result.p_value.unwrap() > 0.05);
        assert_eq!(result.verdict, CalibrationVerdict::Accept);
    }

    #[test]
    fn test_degenerate_counts() {
        let zero = kupiec_test(250, 0, Confidence::P95, DEFAULT_SIGNIFICANCE).unwrap();
        assert_eq!(zero.verdict, CalibrationVerdict::InsufficientVariation);
        assert_eq!(zero.lr_statistic, None);
        assert_eq!(zero.p_value, None);

        let all = kupiec_test(250, 250, Confidence::P95, DEFAULT_SIGNIFICANCE).unwrap();
        assert_eq!(all.verdict, CalibrationVerdict::InsufficientVariation);
    }

    #[test]
    fn test_input_validation() {
        assert!(kupiec_test(0, 0, Confidence::P95, 0.05).is_err());
        assert!(kupiec_test(10, 11, Confidence::P95, 0.05).is_err());
        assert!(kupiec_test(10, 1, Confidence::P95, 0.0).is_err());
        assert!(kupiec_test(10, 1, Confidence::P95, 1.0).is_err());
    }

    #[test]
    fn test_significance_threshold_is_respected() {
        // Same counts, different thresholds: the verdict flips with the
        // configured significance, not a hardcoded one.
        let borderline = kupiec_test(250, 19, Confidence::P95, 0.05).unwrap();
        let p = borderline.p_value.unwrap();
        assert!(p < 0.10 && p > 0.01, "p-value {} outside expected band", p);

        let strict = kupiec_test(250, 19, Confidence::P95, 0.10).unwrap();
        let lenient = kupiec_test(250, 19, Confidence::P95, 0.01).unwrap();
        assert_eq!(strict.verdict, CalibrationVerdict::Reject);
        assert_eq!(lenient.verdict, CalibrationVerdict::Accept);
    }
}
