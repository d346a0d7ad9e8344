//! Error types for pay-gap analyses.

use std::fmt;

/// Error returned when an analysis request cannot be answered.
///
/// All variants are local validation failures detected before or during
/// the model fit. None are retried internally; the caller is expected to
/// surface the message and let the user adjust the request.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// A requested column name is absent from the dataset.
    ColumnNotFound {
        /// The column name that was requested but not found.
        column: String,
    },

    /// The outcome (or metric) column contains a non-numeric cell.
    ///
    /// The outcome of a gap analysis must be numeric in every row where
    /// it is present. The offending cell is reported so the user can fix
    /// the upload or pick a different column.
    NonNumericOutcome {
        /// The column that was expected to be numeric.
        column: String,
        /// The cell content that failed numeric interpretation.
        value: String,
        /// Data row of the offending cell (1-indexed, header excluded).
        row: usize,
    },

    /// Fewer than two distinct group levels remain after exclusions.
    ///
    /// A gap is a comparison between groups; with zero or one observed
    /// level there is nothing to compare against.
    DegenerateGrouping {
        /// The group column that was analyzed.
        column: String,
        /// Number of distinct non-missing levels that remained.
        levels_found: usize,
    },

    /// Too few complete observations to estimate the model.
    ///
    /// The fit needs at least one more observation than estimated
    /// coefficients; otherwise the residual degrees of freedom are zero
    /// and no uncertainty can be reported.
    InsufficientData {
        /// Complete observations remaining after missing-row exclusion.
        rows_remaining: usize,
        /// Minimum observations required for the requested model.
        required: usize,
    },

    /// A control column repeats the outcome column, the group column, or
    /// another control.
    DuplicateColumn {
        /// The column name that was requested more than once.
        column: String,
    },
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateError::ColumnNotFound { column } => {
                write!(f, "column '{}' not found in dataset", column)
            }
            EstimateError::NonNumericOutcome { column, value, row } => {
                write!(
                    f,
                    "column '{}' is not numeric: value '{}' at row {}",
                    column, value, row
                )
            }
            EstimateError::DegenerateGrouping {
                column,
                levels_found,
            } => {
                write!(
                    f,
                    "group column '{}' has {} distinct level(s) after exclusions; \
                     at least 2 are required",
                    column, levels_found
                )
            }
            EstimateError::InsufficientData {
                rows_remaining,
                required,
            } => {
                write!(
                    f,
                    "{} complete observation(s) remain but the model requires \
                     at least {}",
                    rows_remaining, required
                )
            }
            EstimateError::DuplicateColumn { column } => {
                write!(f, "column '{}' is requested more than once", column)
            }
        }
    }
}

impl std::error::Error for EstimateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_not_found_names_the_column() {
        let err = EstimateError::ColumnNotFound {
            column: "salarry".to_string(),
        };
        assert!(err.to_string().contains("'salarry'"));
    }

    #[test]
    fn insufficient_data_reports_counts() {
        let err = EstimateError::InsufficientData {
            rows_remaining: 3,
            required: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains('3'));
        assert!(msg.contains('5'));
    }
}
