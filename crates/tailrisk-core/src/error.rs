//! Error types for risk calculations.
//!
//! Every fallible operation in the workspace reports a [`RiskError`]. The
//! variants double as machine-readable reason codes (see [`RiskError::code`])
//! so the dashboard can branch on the failure kind without parsing messages.

use thiserror::Error;

/// A specialized Result type for risk calculations.
pub type RiskResult<T> = Result<T, RiskError>;

/// Errors that can occur during risk calculations.
///
/// All computation entry points fail fast with one of these variants rather
/// than substituting defaults or letting NaN/Inf escape.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Not enough observations for the requested calculation.
    #[error("insufficient data: need at least {required} observations, got {actual}")]
    InsufficientData {
        /// Minimum required observations.
        required: usize,
        /// Actual number of observations.
        actual: usize,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("invalid confidence level: {value} (must be in (0, 1))")]
    InvalidConfidence {
        /// The rejected confidence level.
        value: f64,
    },

    /// A return or price observation is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the offending observation.
        index: usize,
    },

    /// Sample standard deviation is zero where a spread is required.
    #[error("degenerate variance: series has zero dispersion")]
    DegenerateVariance,

    /// No observation lies strictly beyond the VaR threshold.
    #[error("degenerate tail: no losses beyond the VaR threshold")]
    DegenerateTail,

    /// Rolling window leaves no out-of-sample observations.
    #[error("window too large: window {window} >= {observations} observations")]
    WindowTooLarge {
        /// Requested window length.
        window: usize,
        /// Observations available.
        observations: usize,
    },

    /// Monte Carlo draw count must be at least 1.
    #[error("invalid simulation count: {count}")]
    InvalidSimulationCount {
        /// The rejected draw count.
        count: usize,
    },

    /// Simulation distribution parameters are not usable.
    #[error("invalid distribution: {reason}")]
    InvalidDistribution {
        /// Why the distribution was rejected.
        reason: String,
    },

    /// Horizon must cover at least one period.
    #[error("invalid horizon: {periods} periods")]
    InvalidHorizon {
        /// The rejected horizon length.
        periods: u32,
    },

    /// Significance level outside the open interval (0, 1).
    #[error("invalid significance level: {value} (must be in (0, 1))")]
    InvalidSignificance {
        /// The rejected significance level.
        value: f64,
    },

    /// Two inputs that must agree in length do not.
    #[error("dimension mismatch: {left} vs {right}")]
    DimensionMismatch {
        /// Length of the first input.
        left: usize,
        /// Length of the second input.
        right: usize,
    },

    /// Portfolio weights are not a valid allocation.
    #[error("invalid weights: {reason}")]
    InvalidWeights {
        /// Why the weights were rejected.
        reason: String,
    },

    /// A price observation is zero or negative.
    #[error("non-positive price at index {index}")]
    NonPositivePrice {
        /// Position of the offending price.
        index: usize,
    },

    /// Series dates are not strictly increasing.
    #[error("unordered dates at index {index}")]
    UnorderedDates {
        /// Position of the first out-of-order date.
        index: usize,
    },
}

impl RiskError {
    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates an invalid distribution error.
    #[must_use]
    pub fn invalid_distribution(reason: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            reason: reason.into(),
        }
    }

    /// Creates an invalid weights error.
    #[must_use]
    pub fn invalid_weights(reason: impl Into<String>) -> Self {
        Self::InvalidWeights {
            reason: reason.into(),
        }
    }

    /// Stable machine-readable reason code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InsufficientData { .. } => "insufficient_data",
            Self::InvalidConfidence { .. } => "invalid_confidence",
            Self::NonFiniteValue { .. } => "non_finite_value",
            Self::DegenerateVariance => "degenerate_variance",
            Self::DegenerateTail => "degenerate_tail",
            Self::WindowTooLarge { .. } => "window_too_large",
            Self::InvalidSimulationCount { .. } => "invalid_simulation_count",
            Self::InvalidHorizon { .. } => "invalid_horizon",
            Self::InvalidDistribution { .. } => "invalid_distribution",
            Self::InvalidSignificance { .. } => "invalid_significance",
            Self::DimensionMismatch { .. } => "dimension_mismatch",
            Self::InvalidWeights { .. } => "invalid_weights",
            Self::NonPositivePrice { .. } => "non_positive_price",
            Self::UnorderedDates { .. } => "unordered_dates",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RiskError::insufficient_data(2, 1);
        assert!(err.to_string().contains("at least 2"));

        let err = RiskError::WindowTooLarge {
            window: 252,
            observations: 100,
        };
        assert!(err.to_string().contains("252"));
        assert!(err.to_string().contains("100"));
    }

    #[test]
    fn test_reason_codes_are_stable() {
        assert_eq!(RiskError::DegenerateTail.code(), "degenerate_tail");
        assert_eq!(
            RiskError::InvalidConfidence { value: 1.5 }.code(),
            "invalid_confidence"
        );
        assert_eq!(
            RiskError::insufficient_data(2, 0).code(),
            "insufficient_data"
        );
    }

    #[test]
    fn test_error_clone_and_eq() {
        let err = RiskError::DegenerateVariance;
        assert_eq!(err.clone(), err);
    }
}
