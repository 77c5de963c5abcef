//! Time-ordered return series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

/// An ordered series of periodic portfolio returns.
///
/// Returns are fractional per-period values (e.g. `-0.01` for a 1% loss).
/// Construction validates the series once so downstream estimators can
/// assume: length >= 2, every value finite, and (when a date index is
/// attached) strictly increasing dates matching the value count.
///
/// The series is owned by the caller; estimators receive a read-only view
/// through [`ReturnSeries::values`].
///
/// # Example
///
/// ```rust
/// use tailrisk_core::ReturnSeries;
///
/// let series = ReturnSeries::new(vec![-0.02, 0.01, -0.03, 0.015])?;
/// assert_eq!(series.len(), 4);
/// assert!(series.dates().is_none());
/// # Ok::<(), tailrisk_core::RiskError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnSeries {
    /// Per-period fractional returns, oldest first.
    values: Vec<f64>,
    /// Optional observation dates, one per return.
    dates: Option<Vec<NaiveDate>>,
}

impl ReturnSeries {
    /// Minimum observations required to form a series.
    pub const MIN_OBSERVATIONS: usize = 2;

    /// Creates a return series without a date index.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InsufficientData`] for fewer than two values and
    /// [`RiskError::NonFiniteValue`] if any value is NaN or infinite.
    pub fn new(values: Vec<f64>) -> RiskResult<Self> {
        Self::validate_values(&values)?;
        Ok(Self {
            values,
            dates: None,
        })
    }

    /// Creates a return series with one date per observation.
    ///
    /// # Errors
    ///
    /// In addition to the checks in [`ReturnSeries::new`], returns
    /// [`RiskError::DimensionMismatch`] when `dates` and `values` differ in
    /// length and [`RiskError::UnorderedDates`] when dates are not strictly
    /// increasing.
    pub fn with_dates(dates: Vec<NaiveDate>, values: Vec<f64>) -> RiskResult<Self> {
        Self::validate_values(&values)?;
        if dates.len() != values.len() {
            return Err(RiskError::DimensionMismatch {
                left: dates.len(),
                right: values.len(),
            });
        }
        for (i, pair) in dates.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(RiskError::UnorderedDates { index: i + 1 });
            }
        }
        Ok(Self {
            values,
            dates: Some(dates),
        })
    }

    fn validate_values(values: &[f64]) -> RiskResult<()> {
        if values.len() < Self::MIN_OBSERVATIONS {
            return Err(RiskError::insufficient_data(
                Self::MIN_OBSERVATIONS,
                values.len(),
            ));
        }
        for (index, value) in values.iter().enumerate() {
            if !value.is_finite() {
                return Err(RiskError::NonFiniteValue { index });
            }
        }
        Ok(())
    }

    /// Read-only view of the return values, oldest first.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The date index, if one was attached.
    #[must_use]
    pub fn dates(&self) -> Option<&[NaiveDate]> {
        self.dates.as_deref()
    }

    /// Date of the observation at `index`, if a date index is attached.
    #[must_use]
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        self.dates.as_ref().and_then(|d| d.get(index).copied())
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction requires at least two observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample mean of the returns.
    #[must_use]
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Sample standard deviation (n - 1 denominator).
    #[must_use]
    pub fn std_dev(&self) -> f64 {
        let n = self.values.len() as f64;
        let mean = self.mean();
        let ss: f64 = self.values.iter().map(|r| (r - mean).powi(2)).sum();
        (ss / (n - 1.0)).sqrt()
    }
}
