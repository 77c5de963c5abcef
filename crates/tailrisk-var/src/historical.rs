//! Historical (empirical) VaR.

use tailrisk_core::{Confidence, ReturnSeries, RiskResult};

use crate::empirical::{horizon_scale, loss_quantile};
use crate::estimate::{VaREstimate, VaRMethodKind};

/// Calculates historical VaR from a return series.
///
/// The estimate is the loss magnitude at the `1 - c` empirical quantile of
/// the returns, computed with linear interpolation between order statistics
/// (`rank = c * (n - 1)` over ascending sorted losses). The interpolated
/// quantile is defined for any series of two or more observations, which
/// [`ReturnSeries`] already guarantees; shorter input is rejected at series
/// construction with `InsufficientData`.
///
/// Multi-period horizons scale the one-period estimate by `sqrt(horizon)`,
/// assuming independent per-period returns.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::prelude::*;
/// use tailrisk_var::historical_var;
///
/// let series = ReturnSeries::new(vec![
///     -0.02, 0.01, -0.03, 0.015, -0.01, 0.02, -0.025, 0.005, -0.015, 0.01,
/// ])?;
/// let var = historical_var(&series, Confidence::P95, 1)?;
/// assert!((var.loss - 0.02775).abs() < 1e-12);
/// # Ok::<(), tailrisk_core::RiskError>(())
/// ```
pub fn historical_var(
    series: &ReturnSeries,
    confidence: Confidence,
    horizon_periods: u32,
) -> RiskResult<VaREstimate> {
    let scale = horizon_scale(horizon_periods)?;
    let loss = loss_quantile(series.values(), confidence) * scale;

    Ok(VaREstimate {
        confidence,
        horizon_periods,
        loss,
        method: VaRMethodKind::Historical,
        degenerate_variance: false,
    })
}
