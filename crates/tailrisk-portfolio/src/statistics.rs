//! Descriptive statistics for a portfolio return series.

use serde::{Deserialize, Serialize};

use tailrisk_core::{ReturnSeries, RiskError, RiskResult};

/// The summary block the dashboard displays next to the risk metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioStatistics {
    /// Mean per-period return.
    pub periodic_mean: f64,
    /// Sample standard deviation of the per-period returns.
    pub periodic_volatility: f64,
    /// Mean return scaled to a year (`mean * periods_per_year`).
    pub annualized_return: f64,
    /// Volatility scaled to a year (`sigma * sqrt(periods_per_year)`).
    pub annualized_volatility: f64,
    /// Annualised Sharpe ratio against the supplied risk-free rate, or
    /// `None` for a zero-volatility series.
    pub sharpe_ratio: Option<f64>,
    /// Skewness of the per-period returns (population moments).
    pub skewness: f64,
    /// Excess kurtosis of the per-period returns (population moments).
    pub excess_kurtosis: f64,
    /// Worst per-period return.
    pub min_return: f64,
    /// Best per-period return.
    pub max_return: f64,
}

/// Summarises a return series at the given sampling frequency.
///
/// `periods_per_year` is the sampling frequency (252 for daily trading
/// data); `risk_free_rate` is annualised and only enters the Sharpe ratio.
///
/// Higher moments use population (biased) estimators and are reported as
/// zero for a zero-dispersion series.
///
/// # Errors
///
/// Returns [`RiskError::InvalidHorizon`] when `periods_per_year` is zero.
pub fn summary_statistics(
    series: &ReturnSeries,
    periods_per_year: u32,
    risk_free_rate: f64,
) -> RiskResult<PortfolioStatistics> {
    if periods_per_year == 0 {
        return Err(RiskError::InvalidHorizon { periods: 0 });
    }

    let values = series.values();
    let n = values.len() as f64;
    let mean = series.mean();
    let sigma = series.std_dev();

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for &x in values {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m2 /= n;
    m3 /= n;
    m4 /= n;

    let (skewness, excess_kurtosis) = if m2 <= 1.0e-16 {
        (0.0, 0.0)
    } else {
        (m3 / m2.powf(1.5), m4 / (m2 * m2) - 3.0)
    };

    let ppy = f64::from(periods_per_year);
    let annualized_return = mean * ppy;
    let annualized_volatility = sigma * ppy.sqrt();
    let sharpe_ratio = if annualized_volatility > 0.0 {
        Some((annualized_return - risk_free_rate) / annualized_volatility)
    } else {
        None
    };

    let min_return = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_return = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Ok(PortfolioStatistics {
        periodic_mean: mean,
        periodic_volatility: sigma,
        annualized_return,
        annualized_volatility,
        sharpe_ratio,
        skewness,
        excess_kurtosis,
        min_return,
        max_return,
    })
}
