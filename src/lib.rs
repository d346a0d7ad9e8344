//! # paygap
//!
//! Detect pay gaps and communication bias in tabular HR data.
//!
//! This crate provides the analytical core of a pay-equity tracker:
//! given an uploaded dataset, it reports
//! - Raw gap: per-group median outcome and relative gaps
//! - Adjusted gap: regression-controlled group effects with standard
//!   errors, p-values, and confidence intervals
//! - Communication bias: per-group medians of a communication metric
//!   after joining pseudonymized logs to HR records
//!
//! Every analysis is a pure function of its inputs: rows with missing
//! values are excluded and counted (never silently dropped), and
//! identical inputs produce bit-identical results.
//!
//! ## Interpreting the adjusted gap
//!
//! The coefficient reported for a group level is its outcome difference
//! versus the reference level *after* the control columns are held
//! constant, in outcome units. A raw gap that shrinks once controls are
//! added is (statistically) explained by those controls; the part that
//! remains is the adjusted gap. Neither number alone establishes
//! discrimination - the controls themselves may carry bias.
//!
//! ## Quick Start
//!
//! ```
//! use paygap::{AnalysisRequest, BiasEstimator, Dataset, Value};
//!
//! let dataset = Dataset::new(
//!     vec!["salary".into(), "gender".into(), "tenure".into()],
//!     vec![
//!         vec![Value::Number(52_000.0), Value::Text("M".into()), Value::Number(4.0)],
//!         vec![Value::Number(46_000.0), Value::Text("F".into()), Value::Number(3.0)],
//!         vec![Value::Number(54_000.0), Value::Text("M".into()), Value::Number(6.0)],
//!         vec![Value::Number(49_000.0), Value::Text("F".into()), Value::Number(5.0)],
//!         vec![Value::Number(51_000.0), Value::Text("M".into()), Value::Number(5.0)],
//!     ],
//! )
//! .unwrap();
//!
//! let request = AnalysisRequest::new("salary", "gender").with_controls(["tenure"]);
//! let estimate = BiasEstimator::new().estimate(&dataset, &request).unwrap();
//!
//! println!("{}", paygap::output::format_estimate(&estimate));
//! assert_eq!(estimate.reference_level, "M");
//! assert_eq!(estimate.rows_used + estimate.rows_excluded, 5);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod config;
mod error;
mod result;
mod types;

// Functional modules
pub mod analysis;
pub mod data;
pub mod model;
pub mod output;
pub mod statistics;

// Re-exports for public API
pub use analysis::{comm_bias, raw_gap, BiasEstimator};
pub use config::{AnalysisRequest, CommBiasRequest};
pub use data::{load_csv, read_csv, DataError, Dataset};
pub use error::EstimateError;
pub use result::{
    BiasEstimate, CommBiasReport, GroupEffect, GroupGap, GroupMedian, RawGapReport,
};
pub use types::{ColumnKind, Value};
