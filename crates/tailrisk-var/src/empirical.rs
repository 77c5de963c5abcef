//! Shared internals: empirical quantiles, tail means, horizon scaling.

use tailrisk_core::{Confidence, RiskError, RiskResult};

/// Tolerance for tail membership comparisons against the VaR threshold.
const TAIL_EPS: f64 = 1.0e-12;

/// Loss at the `c` quantile of the loss distribution (`loss = -return`).
///
/// Uses linear interpolation between order statistics (type-7 rule:
/// `rank = p * (n - 1)` over the ascending sorted losses).
pub(crate) fn loss_quantile(returns: &[f64], confidence: Confidence) -> f64 {
    let mut losses: Vec<f64> = returns.iter().map(|r| -r).collect();
    losses.sort_by(|a, b| a.total_cmp(b));
    interpolated_quantile(&losses, confidence.value())
}

fn interpolated_quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p * (sorted.len() as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let w = rank - lo as f64;
        sorted[lo] + w * (sorted[hi] - sorted[lo])
    }
}

/// Mean of the losses at or beyond `var`.
///
/// Tail membership is `loss >= var` (within tolerance). Fails with
/// [`RiskError::DegenerateTail`] when no loss strictly exceeds the
/// threshold, i.e. the tail has zero width and the conditional mean would
/// collapse onto the threshold itself.
pub(crate) fn tail_mean_beyond(returns: &[f64], var: f64) -> RiskResult<f64> {
    let mut tail_sum = 0.0;
    let mut tail_count = 0usize;
    let mut strictly_beyond = false;

    for &r in returns {
        let loss = -r;
        if loss >= var - TAIL_EPS {
            tail_sum += loss;
            tail_count += 1;
        }
        if loss > var + TAIL_EPS {
            strictly_beyond = true;
        }
    }

    if !strictly_beyond {
        return Err(RiskError::DegenerateTail);
    }
    Ok(tail_sum / tail_count as f64)
}

/// Square-root-of-time scale for a multi-period horizon.
pub(crate) fn horizon_scale(periods: u32) -> RiskResult<f64> {
    if periods == 0 {
        return Err(RiskError::InvalidHorizon { periods });
    }
    Ok(f64::from(periods).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quantile_interpolates_between_order_statistics() {
        // Losses of the worked dashboard sample; 95th percentile sits at
        // rank 8.55 between 0.025 and 0.03.
        let returns = vec![
            -0.02, 0.01, -0.03, 0.015, -0.01, 0.02, -0.025, 0.005, -0.015, 0.01,
        ];
        let q = loss_quantile(&returns, Confidence::P95);
        assert_relative_eq!(q, 0.02775, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_exact_rank() {
        // p = 0.5 over five sorted points lands exactly on the median.
        let returns = vec![-0.05, -0.04, -0.03, -0.02, -0.01];
        let c = Confidence::new(0.5).unwrap();
        assert_relative_eq!(loss_quantile(&returns, c), 0.03, epsilon = 1e-15);
    }

    #[test]
    fn test_tail_mean_requires_strict_exceedance() {
        let flat = vec![-0.01; 6];
        assert_eq!(tail_mean_beyond(&flat, 0.01), Err(RiskError::DegenerateTail));
    }

    #[test]
    fn test_tail_mean_includes_threshold_observations() {
        // Losses: 0.04, 0.03, 0.02, 0.01. Threshold 0.03 keeps {0.04, 0.03}.
        let returns = vec![-0.04, -0.03, -0.02, -0.01];
        let mean = tail_mean_beyond(&returns, 0.03).unwrap();
        assert_relative_eq!(mean, 0.035, epsilon = 1e-12);
    }

    #[test]
    fn test_horizon_scale() {
        assert!(horizon_scale(0).is_err());
        assert_relative_eq!(horizon_scale(1).unwrap(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(horizon_scale(4).unwrap(), 2.0, epsilon = 1e-15);
    }
}
