//! Per-period returns from price series.

use tailrisk_core::{RiskError, RiskResult};

fn validate_prices(prices: &[f64]) -> RiskResult<()> {
    if prices.len() < 2 {
        return Err(RiskError::insufficient_data(2, prices.len()));
    }
    for (index, price) in prices.iter().enumerate() {
        if !price.is_finite() {
            return Err(RiskError::NonFiniteValue { index });
        }
        if *price <= 0.0 {
            return Err(RiskError::NonPositivePrice { index });
        }
    }
    Ok(())
}

/// Simple returns from a price series: `r_t = P_t / P_{t-1} - 1`.
///
/// The output has one fewer element than the input.
///
/// # Errors
///
/// Rejects fewer than two prices, non-finite prices, and prices <= 0.
pub fn simple_returns(prices: &[f64]) -> RiskResult<Vec<f64>> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| w[1] / w[0] - 1.0).collect())
}

/// Log returns from a price series: `r_t = ln(P_t / P_{t-1})`.
///
/// # Errors
///
/// Rejects fewer than two prices, non-finite prices, and prices <= 0.
pub fn log_returns(prices: &[f64]) -> RiskResult<Vec<f64>> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}
