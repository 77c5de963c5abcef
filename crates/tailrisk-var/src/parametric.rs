//! Parametric (variance-covariance) VaR and CVaR.
//!
//! Both estimators assume the returns are approximately normally
//! distributed. That assumption is a documented limitation of the method;
//! it is not validated here.

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use tailrisk_core::{Confidence, ReturnSeries, RiskError, RiskResult};

use crate::empirical::horizon_scale;
use crate::estimate::{CVaREstimate, VaREstimate, VaRMethodKind};

fn standard_normal() -> Normal {
    Normal::new(0.0, 1.0).expect("valid standard normal")
}

/// Calculates parametric VaR from sample moments.
///
/// `VaR = -(mu + z_alpha * sigma)` with `mu` the sample mean, `sigma` the
/// sample standard deviation (n - 1 denominator) and `z_alpha` the standard
/// normal quantile at `alpha = 1 - c` (negative at the confidence levels in
/// practical use).
///
/// A zero-dispersion series does not divide by anything: the estimator
/// returns `VaR = -mu` with `degenerate_variance` set on the estimate.
pub fn parametric_var(
    series: &ReturnSeries,
    confidence: Confidence,
    horizon_periods: u32,
) -> RiskResult<VaREstimate> {
    let scale = horizon_scale(horizon_periods)?;
    let mean = series.mean();
    let sigma = series.std_dev();

    if sigma == 0.0 {
        return Ok(VaREstimate {
            confidence,
            horizon_periods,
            loss: -mean * scale,
            method: VaRMethodKind::Parametric,
            degenerate_variance: true,
        });
    }

    let z = standard_normal().inverse_cdf(confidence.alpha());
    let loss = -(mean + z * sigma) * scale;

    Ok(VaREstimate {
        confidence,
        horizon_periods,
        loss,
        method: VaRMethodKind::Parametric,
        degenerate_variance: false,
    })
}

/// Calculates parametric CVaR with the closed-form Gaussian tail expectation.
///
/// `CVaR = -mu + sigma * phi(z_alpha) / alpha`, the expected loss
/// conditional on landing beyond the VaR threshold of [`parametric_var`].
///
/// # Errors
///
/// Returns [`RiskError::DegenerateTail`] for a zero-dispersion series: the
/// fitted distribution is a point mass and nothing lies beyond its VaR.
pub fn parametric_cvar(
    series: &ReturnSeries,
    confidence: Confidence,
    horizon_periods: u32,
) -> RiskResult<CVaREstimate> {
    let scale = horizon_scale(horizon_periods)?;
    let mean = series.mean();
    let sigma = series.std_dev();

    if sigma == 0.0 {
        return Err(RiskError::DegenerateTail);
    }

    let alpha = confidence.alpha();
    let normal = standard_normal();
    let z = normal.inverse_cdf(alpha);
    let var = -(mean + z * sigma);
    let expected_loss = -mean + sigma * normal.pdf(z) / alpha;

    Ok(CVaREstimate {
        confidence,
        horizon_periods,
        expected_loss: expected_loss * scale,
        var: var * scale,
        method: VaRMethodKind::Parametric,
    })
}
