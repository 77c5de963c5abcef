//! Confidence level type for VaR and backtest calculations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RiskError, RiskResult};

/// A confidence level in the open interval (0, 1).
///
/// VaR at confidence `c` is the loss threshold not expected to be exceeded
/// with probability `c` over the horizon. The complement `alpha = 1 - c` is
/// the expected violation rate used by backtests.
///
/// # Example
///
/// ```rust
/// use tailrisk_core::Confidence;
///
/// let c = Confidence::new(0.99)?;
/// assert!((c.value() - 0.99).abs() < 1e-12);
/// assert!((c.alpha() - 0.01).abs() < 1e-12);
/// # Ok::<(), tailrisk_core::RiskError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    /// The conventional 95% confidence level.
    pub const P95: Confidence = Confidence(0.95);

    /// The conventional 99% confidence level.
    pub const P99: Confidence = Confidence(0.99);

    /// Creates a confidence level, rejecting values outside (0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfidence`] if `value` is non-finite or
    /// not strictly between 0 and 1.
    pub fn new(value: f64) -> RiskResult<Self> {
        if !value.is_finite() || value <= 0.0 || value >= 1.0 {
            return Err(RiskError::InvalidConfidence { value });
        }
        Ok(Self(value))
    }

    /// Returns the confidence level as a plain `f64`.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the expected violation rate `1 - c`.
    #[must_use]
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

impl TryFrom<f64> for Confidence {
    type Error = RiskError;

    fn try_from(value: f64) -> RiskResult<Self> {
        Self::new(value)
    }
}
