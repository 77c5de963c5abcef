//! Portfolio weight vectors and the weighted return collapse.

use serde::{Deserialize, Serialize};

use tailrisk_core::{ReturnSeries, RiskError, RiskResult};

/// Tolerance for the weights-sum-to-one check.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// A validated portfolio allocation.
///
/// Weights are fractions of portfolio value and must sum to 1 within a
/// small tolerance. Negative weights (short positions) are allowed.
///
/// # Example
///
/// ```rust
/// use tailrisk_portfolio::PortfolioWeights;
///
/// let weights = PortfolioWeights::new(vec![0.6, 0.4])?;
/// let asset_returns = vec![
///     vec![0.01, -0.02, 0.005],
///     vec![-0.01, 0.03, 0.0],
/// ];
/// let series = weights.portfolio_returns(&asset_returns)?;
/// assert_eq!(series.len(), 3);
/// # Ok::<(), tailrisk_core::RiskError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioWeights {
    values: Vec<f64>,
}

impl PortfolioWeights {
    /// Creates a weight vector, validating that it is non-empty, finite,
    /// and sums to 1.
    pub fn new(values: Vec<f64>) -> RiskResult<Self> {
        if values.is_empty() {
            return Err(RiskError::invalid_weights("no weights provided"));
        }
        for (i, w) in values.iter().enumerate() {
            if !w.is_finite() {
                return Err(RiskError::invalid_weights(format!(
                    "weight {i} is not finite"
                )));
            }
        }
        let sum: f64 = values.iter().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(RiskError::invalid_weights(format!(
                "weights sum to {sum}, expected 1"
            )));
        }
        Ok(Self { values })
    }

    /// Creates an equal-weighted allocation across `n` assets.
    pub fn equal(n: usize) -> RiskResult<Self> {
        if n == 0 {
            return Err(RiskError::invalid_weights("no assets"));
        }
        Ok(Self {
            values: vec![1.0 / n as f64; n],
        })
    }

    /// The weight values.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty allocations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Collapses an asset-major return matrix into a single portfolio
    /// return series: `r_p[t] = sum_i w_i * r_i[t]`.
    ///
    /// `asset_returns[i]` holds the return series of asset `i`; every
    /// asset must have the same number of periods.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::DimensionMismatch`] when the asset count does
    /// not match the weight count or the per-asset series differ in
    /// length; series-level validation (length, finiteness) is performed
    /// by [`ReturnSeries::new`] on the collapsed result.
    pub fn portfolio_returns(&self, asset_returns: &[Vec<f64>]) -> RiskResult<ReturnSeries> {
        if asset_returns.len() != self.values.len() {
            return Err(RiskError::DimensionMismatch {
                left: self.values.len(),
                right: asset_returns.len(),
            });
        }

        let periods = asset_returns[0].len();
        for series in asset_returns {
            if series.len() != periods {
                return Err(RiskError::DimensionMismatch {
                    left: periods,
                    right: series.len(),
                });
            }
        }

        let mut collapsed = vec![0.0; periods];
        for (weight, series) in self.values.iter().zip(asset_returns) {
            for (acc, r) in collapsed.iter_mut().zip(series) {
                *acc += weight * r;
            }
        }

        ReturnSeries::new(collapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_must_sum_to_one() {
        assert!(PortfolioWeights::new(vec![0.5, 0.5]).is_ok());
        assert!(PortfolioWeights::new(vec![0.5, 0.4]).is_err());
        assert!(PortfolioWeights::new(vec![]).is_err());
        assert!(PortfolioWeights::new(vec![0.5, f64::NAN]).is_err());
        // Shorts are allowed as long as the allocation nets to 1.
        assert!(PortfolioWeights::new(vec![1.3, -0.3]).is_ok());
    }

    #[test]
    fn test_equal_weights() {
        let weights = PortfolioWeights::equal(4).unwrap();
        assert_eq!(weights.len(), 4);
        assert_relative_eq!(weights.values().iter().sum::<f64>(), 1.0, epsilon = 1e-12);
        assert!(PortfolioWeights::equal(0).is_err());
    }

    #[test]
    fn test_portfolio_returns_collapse() {
        let weights = PortfolioWeights::new(vec![0.6, 0.4]).unwrap();
        let asset_returns = vec![vec![0.01, -0.02], vec![-0.01, 0.03]];
        let series = weights.portfolio_returns(&asset_returns).unwrap();

        assert_relative_eq!(series.values()[0], 0.6 * 0.01 - 0.4 * 0.01, epsilon = 1e-12);
        assert_relative_eq!(
            series.values()[1],
            -0.6 * 0.02 + 0.4 * 0.03,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_dimension_checks() {
        let weights = PortfolioWeights::new(vec![0.5, 0.5]).unwrap();
        let err = weights.portfolio_returns(&[vec![0.01, 0.02]]).unwrap_err();
        assert_eq!(err, RiskError::DimensionMismatch { left: 2, right: 1 });

        let ragged = vec![vec![0.01, 0.02], vec![0.01]];
        let err = weights.portfolio_returns(&ragged).unwrap_err();
        assert_eq!(err, RiskError::DimensionMismatch { left: 2, right: 1 });
    }
}
