//! Output formatting for analysis results.
//!
//! This module provides formatters for the report types in two formats:
//! - Terminal: human-readable output with colors
//! - JSON: machine-readable serialization for a chart or table layer

mod json;
mod terminal;

pub use json::{to_json, to_json_pretty};
pub use terminal::{format_comm_bias, format_estimate, format_raw_gap};
