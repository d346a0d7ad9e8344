//! Result values produced by the analyses.
//!
//! Every report carries its row accounting: `rows_used` plus
//! `rows_excluded` always equals the number of rows the analysis was
//! given, so silently dropped observations cannot hide. Results are
//! plain immutable values and serialize to JSON for downstream
//! presentation.

use serde::{Deserialize, Serialize};

/// Adjusted effect of one group level relative to the reference level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupEffect {
    /// The group level this effect describes.
    pub level: String,
    /// Adjusted gap versus the reference level, in outcome units.
    pub coefficient: f64,
    /// Standard error of the coefficient.
    pub std_error: f64,
    /// t statistic (coefficient / std_error).
    pub t_value: f64,
    /// Two-sided p-value from a Student's t distribution with the
    /// fit's residual degrees of freedom.
    pub p_value: f64,
    /// Lower bound of the confidence interval.
    pub ci_low: f64,
    /// Upper bound of the confidence interval.
    pub ci_high: f64,
}

/// Result of one covariate-adjusted pay-gap estimation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiasEstimate {
    /// Outcome column the gaps are measured in.
    pub outcome_column: String,
    /// Group column that defined the comparison.
    pub group_column: String,
    /// Control columns the estimate is adjusted for.
    pub control_columns: Vec<String>,
    /// Baseline level all effects are measured against.
    pub reference_level: String,
    /// One adjusted effect per non-reference group level, in
    /// first-observed order.
    pub effects: Vec<GroupEffect>,
    /// Confidence level of the reported intervals (e.g. 0.95).
    pub confidence_level: f64,
    /// Residual degrees of freedom of the fit.
    pub residual_df: usize,
    /// Complete observations the model was fit on.
    pub rows_used: usize,
    /// Rows excluded for a missing value in a requested column.
    pub rows_excluded: usize,
}

/// Median outcome of one group level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupMedian {
    /// The group level.
    pub level: String,
    /// Median of the outcome within the level.
    pub median: f64,
    /// Observations within the level.
    pub count: usize,
}

/// Unadjusted gap of one group level against the reference level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupGap {
    /// The group level this gap describes.
    pub level: String,
    /// Median difference versus the reference level, in outcome units.
    pub absolute_gap: f64,
    /// Relative shortfall versus the reference level:
    /// `1 - median(level) / median(reference)`. Positive means the
    /// level's median is below the reference's. Meaningful only when
    /// the reference median is nonzero.
    pub relative_gap: f64,
}

/// Result of a raw (unadjusted) pay-gap comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGapReport {
    /// Outcome column the medians are taken over.
    pub outcome_column: String,
    /// Group column that defined the comparison.
    pub group_column: String,
    /// Level the gaps are measured against.
    pub reference_level: String,
    /// Median and count per level, in first-observed order.
    pub medians: Vec<GroupMedian>,
    /// One gap per non-reference level, in first-observed order.
    pub gaps: Vec<GroupGap>,
    /// Complete observations used.
    pub rows_used: usize,
    /// Rows excluded for a missing outcome or group value.
    pub rows_excluded: usize,
}

/// Result of a communication-bias comparison across joined datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommBiasReport {
    /// Group column taken from the HR dataset.
    pub group_column: String,
    /// Numeric metric column taken from the communication dataset.
    pub metric_column: String,
    /// Level the gaps are measured against.
    pub reference_level: String,
    /// Median metric and count per level, in first-matched order.
    pub medians: Vec<GroupMedian>,
    /// One gap per non-reference level, in first-matched order.
    pub gaps: Vec<GroupGap>,
    /// Communication rows whose key matched an HR row.
    pub rows_matched: usize,
    /// Communication rows with a missing or unknown key.
    pub rows_unmatched: usize,
    /// Matched rows excluded for a missing metric value.
    pub rows_excluded: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_serializes_to_json() {
        let estimate = BiasEstimate {
            outcome_column: "salary".into(),
            group_column: "gender".into(),
            control_columns: vec!["tenure".into()],
            reference_level: "M".into(),
            effects: vec![GroupEffect {
                level: "F".into(),
                coefficient: -3200.0,
                std_error: 1100.0,
                t_value: -2.909,
                p_value: 0.004,
                ci_low: -5400.0,
                ci_high: -1000.0,
            }],
            confidence_level: 0.95,
            residual_df: 96,
            rows_used: 100,
            rows_excluded: 4,
        };

        let json = serde_json::to_string(&estimate).unwrap();
        assert!(json.contains("\"reference_level\":\"M\""));
        assert!(json.contains("\"rows_excluded\":4"));

        let back: BiasEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
    }
}
