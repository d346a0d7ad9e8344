//! Analysis request configuration.

use serde::{Deserialize, Serialize};

/// Identifies the columns of one pay-gap analysis.
///
/// The outcome column must be numeric, the group column categorical with
/// at least two observed levels, and every control column distinct from
/// the other requested columns. Validation happens when the request is
/// run against a dataset, so a request can be built before the upload
/// it will be applied to.
///
/// # Example
///
/// ```
/// use paygap::AnalysisRequest;
///
/// let request = AnalysisRequest::new("salary", "gender")
///     .with_controls(["tenure", "department"]);
/// assert_eq!(request.control_columns.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Numeric column whose gap across groups is estimated.
    pub outcome_column: String,

    /// Categorical column that defines the demographic groups.
    pub group_column: String,

    /// Columns held constant in the adjusted model.
    ///
    /// Numeric controls enter the model as-is; categorical controls are
    /// encoded against their own reference level. Empty for a raw
    /// (unadjusted) comparison.
    pub control_columns: Vec<String>,
}

impl AnalysisRequest {
    /// Create a request with no control columns.
    pub fn new(outcome_column: impl Into<String>, group_column: impl Into<String>) -> Self {
        Self {
            outcome_column: outcome_column.into(),
            group_column: group_column.into(),
            control_columns: Vec::new(),
        }
    }

    /// Add control columns to hold constant in the adjusted model.
    pub fn with_controls<I, S>(mut self, controls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.control_columns = controls.into_iter().map(Into::into).collect();
        self
    }
}

/// Identifies the columns of one communication-bias analysis.
///
/// The HR and communication datasets are joined on pseudonym key
/// columns, after which a numeric metric from the communication side
/// (typically response time) is compared across the HR group column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommBiasRequest {
    /// Pseudonym key column in the HR dataset (e.g. `pseud_id`).
    pub hr_key_column: String,

    /// Pseudonym key column in the communication dataset
    /// (e.g. `receiver_pseud`).
    pub comm_key_column: String,

    /// Categorical group column in the HR dataset.
    pub group_column: String,

    /// Numeric metric column in the communication dataset
    /// (e.g. `response_time_seconds`).
    pub metric_column: String,
}

impl CommBiasRequest {
    /// Create a request from the four column names.
    pub fn new(
        hr_key_column: impl Into<String>,
        comm_key_column: impl Into<String>,
        group_column: impl Into<String>,
        metric_column: impl Into<String>,
    ) -> Self {
        Self {
            hr_key_column: hr_key_column.into(),
            comm_key_column: comm_key_column.into(),
            group_column: group_column.into(),
            metric_column: metric_column.into(),
        }
    }
}
