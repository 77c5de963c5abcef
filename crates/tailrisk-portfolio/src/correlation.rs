//! Covariance and correlation matrices across assets.

use nalgebra::DMatrix;

use tailrisk_core::{RiskError, RiskResult};

fn validate_matrix(asset_returns: &[Vec<f64>]) -> RiskResult<usize> {
    if asset_returns.is_empty() {
        return Err(RiskError::insufficient_data(1, 0));
    }
    let periods = asset_returns[0].len();
    if periods < 2 {
        return Err(RiskError::insufficient_data(2, periods));
    }
    for series in asset_returns {
        if series.len() != periods {
            return Err(RiskError::DimensionMismatch {
                left: periods,
                right: series.len(),
            });
        }
        for (index, value) in series.iter().enumerate() {
            if !value.is_finite() {
                return Err(RiskError::NonFiniteValue { index });
            }
        }
    }
    Ok(periods)
}

/// Sample covariance matrix (n - 1 denominator) of an asset-major return
/// matrix: `asset_returns[i]` is the return series of asset `i`.
///
/// The result is symmetric by construction, `assets x assets`.
pub fn covariance_matrix(asset_returns: &[Vec<f64>]) -> RiskResult<DMatrix<f64>> {
    let periods = validate_matrix(asset_returns)?;
    let assets = asset_returns.len();
    let n = periods as f64;

    let means: Vec<f64> = asset_returns
        .iter()
        .map(|series| series.iter().sum::<f64>() / n)
        .collect();

    let mut cov = DMatrix::zeros(assets, assets);
    for i in 0..assets {
        for j in i..assets {
            let mut sum = 0.0;
            for t in 0..periods {
                sum += (asset_returns[i][t] - means[i]) * (asset_returns[j][t] - means[j]);
            }
            let value = sum / (n - 1.0);
            cov[(i, j)] = value;
            cov[(j, i)] = value;
        }
    }
    Ok(cov)
}

/// Correlation matrix of an asset-major return matrix.
///
/// # Errors
///
/// In addition to the covariance checks, returns
/// [`RiskError::DegenerateVariance`] when any asset has zero variance:
/// its correlations are undefined.
pub fn correlation_matrix(asset_returns: &[Vec<f64>]) -> RiskResult<DMatrix<f64>> {
    let cov = covariance_matrix(asset_returns)?;
    let assets = cov.nrows();

    let mut std_devs = Vec::with_capacity(assets);
    for i in 0..assets {
        let variance = cov[(i, i)];
        if variance <= 0.0 {
            return Err(RiskError::DegenerateVariance);
        }
        std_devs.push(variance.sqrt());
    }

    let mut corr = DMatrix::zeros(assets, assets);
    for i in 0..assets {
        for j in 0..assets {
            corr[(i, j)] = if i == j {
                1.0
            } else {
                cov[(i, j)] / (std_devs[i] * std_devs[j])
            };
        }
    }
    Ok(corr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_assets() -> Vec<Vec<f64>> {
        vec![
            vec![0.01, -0.02, 0.03, 0.005, -0.015],
            vec![-0.005, 0.01, -0.02, 0.002, 0.012],
            vec![0.02, -0.01, 0.025, -0.004, -0.02],
        ]
    }

    #[test]
    fn test_covariance_diagonal_is_variance() {
        let assets = sample_assets();
        let cov = covariance_matrix(&assets).unwrap();

        let n = assets[0].len() as f64;
        let mean: f64 = assets[0].iter().sum::<f64>() / n;
        let variance: f64 =
            assets[0].iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
        assert_relative_eq!(cov[(0, 0)], variance, epsilon = 1e-15);
    }

    #[test]
    fn test_correlation_properties() {
        let corr = correlation_matrix(&sample_assets()).unwrap();

        for i in 0..3 {
            assert_relative_eq!(corr[(i, i)], 1.0, epsilon = 1e-15);
            for j in 0..3 {
                assert_relative_eq!(corr[(i, j)], corr[(j, i)], epsilon = 1e-15);
                assert!(corr[(i, j)].abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_perfectly_correlated_assets() {
        let a = vec![0.01, -0.02, 0.03, 0.005];
        let b: Vec<f64> = a.iter().map(|r| r * 2.0).collect();
        let corr = correlation_matrix(&[a, b]).unwrap();
        assert_relative_eq!(corr[(0, 1)], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_variance_asset_rejected() {
        let assets = vec![vec![0.01, -0.02, 0.03], vec![0.0, 0.0, 0.0]];
        assert_eq!(
            correlation_matrix(&assets).unwrap_err(),
            RiskError::DegenerateVariance
        );
        // Covariance itself is still defined.
        assert!(covariance_matrix(&assets).is_ok());
    }

    #[test]
    fn test_shape_validation() {
        let ragged = vec![vec![0.01, 0.02], vec![0.01]];
        assert!(covariance_matrix(&ragged).is_err());
        assert!(covariance_matrix(&[]).is_err());
    }
}
