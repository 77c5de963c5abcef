//! Conditional VaR (Expected Shortfall) for the empirical estimators.
//!
//! The parametric closed form lives in [`crate::parametric`]; this module
//! covers the historical and Monte Carlo variants, both of which take the
//! conditional mean of the losses at or beyond the VaR threshold of the
//! same sample.

use tailrisk_core::{Confidence, ReturnSeries, RiskResult};

use crate::empirical::{horizon_scale, loss_quantile, tail_mean_beyond};
use crate::estimate::{CVaREstimate, VaRMethodKind};
use crate::monte_carlo::{SimulationBatch, SimulationConfig};

/// Calculates historical CVaR: the mean observed loss at or beyond the
/// historical VaR threshold.
///
/// # Errors
///
/// Returns `DegenerateTail` when no observed loss strictly exceeds the
/// threshold (for example a constant series), rather than reporting the
/// threshold itself as a conditional mean.
pub fn historical_cvar(
    series: &ReturnSeries,
    confidence: Confidence,
    horizon_periods: u32,
) -> RiskResult<CVaREstimate> {
    let scale = horizon_scale(horizon_periods)?;
    let var = loss_quantile(series.values(), confidence);
    let expected_loss = tail_mean_beyond(series.values(), var)?;

    Ok(CVaREstimate {
        confidence,
        horizon_periods,
        expected_loss: expected_loss * scale,
        var: var * scale,
        method: VaRMethodKind::Historical,
    })
}

/// Calculates Monte Carlo CVaR.
///
/// Simulates one batch (mean and volatility fitted from the series), then
/// reads both the VaR quantile and the conditional tail mean off that same
/// batch, so the pair is internally consistent for a given seed.
pub fn monte_carlo_cvar(
    series: &ReturnSeries,
    confidence: Confidence,
    horizon_periods: u32,
    config: &SimulationConfig,
) -> RiskResult<CVaREstimate> {
    let scale = horizon_scale(horizon_periods)?;
    let batch = SimulationBatch::generate(series.mean(), series.std_dev(), config)?;
    let var = loss_quantile(batch.returns(), confidence);
    let expected_loss = tail_mean_beyond(batch.returns(), var)?;

    Ok(CVaREstimate {
        confidence,
        horizon_periods,
        expected_loss: expected_loss * scale,
        var: var * scale,
        method: VaRMethodKind::MonteCarlo,
    })
}
