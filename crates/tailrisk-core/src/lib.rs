//! # Tailrisk Core
//!
//! Core types and errors for the Tailrisk portfolio risk analytics library.
//!
//! This crate provides the foundational building blocks used throughout
//! Tailrisk:
//!
//! - **Types**: Domain-specific types like [`ReturnSeries`] and [`Confidence`]
//! - **Errors**: The shared [`RiskError`] enum with machine-readable reason
//!   codes
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing incompatible values
//! - **Validate at the Boundary**: A constructed value is a valid value
//! - **Explicit Over Implicit**: No silent defaults, no NaN propagation
//!
//! ## Example
//!
//! ```rust
//! use tailrisk_core::prelude::*;
//!
//! let series = ReturnSeries::new(vec![-0.02, 0.01, -0.03, 0.015])?;
//! let confidence = Confidence::new(0.95)?;
//!
//! assert_eq!(series.len(), 4);
//! assert!((confidence.alpha() - 0.05).abs() < 1e-12);
//! # Ok::<(), tailrisk_core::RiskError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::types::{Confidence, ReturnSeries};
}

// Re-export commonly used types at crate root
pub use error::{RiskError, RiskResult};
pub use types::{Confidence, ReturnSeries};
