//! Covariate-adjusted pay-gap estimation.
//!
//! The adjusted gap is the coefficient of each group indicator in an
//! ordinary least squares fit of the outcome on the group column plus
//! the requested controls, with an intercept. Controlling for
//! job-related factors (tenure, level, department) separates the gap
//! attributable to group membership from differences those factors
//! already explain.

use nalgebra::DVector;

use super::{require_numeric, resolve_column};
use crate::config::AnalysisRequest;
use crate::data::Dataset;
use crate::error::EstimateError;
use crate::model::design::DesignBuilder;
use crate::model::ols;
use crate::result::{BiasEstimate, GroupEffect};
use crate::statistics::{t_critical_value, two_sided_p_value};
use crate::types::ColumnKind;

/// Main entry point for adjusted pay-gap estimation.
///
/// Holds the inference configuration; each [`estimate`](Self::estimate)
/// call is an independent, side-effect-free computation over the given
/// dataset and request.
///
/// # Example
///
/// ```
/// use paygap::{AnalysisRequest, BiasEstimator, Dataset, Value};
///
/// let dataset = Dataset::new(
///     vec!["salary".into(), "gender".into()],
///     vec![
///         vec![Value::Number(100.0), Value::Text("A".into())],
///         vec![Value::Number(120.0), Value::Text("B".into())],
///         vec![Value::Number(110.0), Value::Text("A".into())],
///         vec![Value::Number(130.0), Value::Text("B".into())],
///     ],
/// )
/// .unwrap();
///
/// let request = AnalysisRequest::new("salary", "gender");
/// let estimate = BiasEstimator::new().estimate(&dataset, &request).unwrap();
///
/// assert_eq!(estimate.reference_level, "A");
/// assert!((estimate.effects[0].coefficient - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BiasEstimator {
    confidence_level: f64,
}

impl Default for BiasEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl BiasEstimator {
    /// Create an estimator reporting 95% confidence intervals.
    pub fn new() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }

    /// Set the confidence level of the reported intervals.
    ///
    /// # Panics
    ///
    /// Panics if `level` is outside (0, 1).
    pub fn confidence_level(mut self, level: f64) -> Self {
        assert!(
            level > 0.0 && level < 1.0,
            "confidence level must be in (0, 1)"
        );
        self.confidence_level = level;
        self
    }

    /// Estimate the adjusted gap of the outcome across group levels.
    ///
    /// Rows with a missing value in any requested column are excluded
    /// from the fit and counted in the result's `rows_excluded`. The
    /// reference level is the most frequent surviving group level, ties
    /// broken toward the first observed.
    ///
    /// # Errors
    ///
    /// - `ColumnNotFound` when a requested column is absent
    /// - `DuplicateColumn` when a column is requested more than once
    /// - `NonNumericOutcome` when the outcome column has a textual cell
    /// - `DegenerateGrouping` when fewer than two distinct group levels
    ///   survive the exclusions
    /// - `InsufficientData` when fewer observations survive than
    ///   estimated coefficients plus one
    pub fn estimate(
        &self,
        dataset: &Dataset,
        request: &AnalysisRequest,
    ) -> Result<BiasEstimate, EstimateError> {
        let outcome_idx = resolve_column(dataset, &request.outcome_column)?;
        let group_idx = resolve_column(dataset, &request.group_column)?;
        let mut control_idxs = Vec::with_capacity(request.control_columns.len());
        for name in &request.control_columns {
            control_idxs.push(resolve_column(dataset, name)?);
        }

        if request.group_column == request.outcome_column {
            return Err(EstimateError::DuplicateColumn {
                column: request.group_column.clone(),
            });
        }
        for (i, name) in request.control_columns.iter().enumerate() {
            if name == &request.outcome_column
                || name == &request.group_column
                || request.control_columns[..i].contains(name)
            {
                return Err(EstimateError::DuplicateColumn {
                    column: name.clone(),
                });
            }
        }

        require_numeric(dataset, outcome_idx, &request.outcome_column)?;

        // Complete-case filter over the requested columns
        let mut requested = vec![outcome_idx, group_idx];
        requested.extend_from_slice(&control_idxs);

        let mut used_rows = Vec::new();
        let mut rows_excluded = 0;
        for row in 0..dataset.row_count() {
            let complete = requested
                .iter()
                .all(|&col| !dataset.value(row, col).is_missing());
            if complete {
                used_rows.push(row);
            } else {
                rows_excluded += 1;
            }
        }

        let group_labels: Vec<String> = used_rows
            .iter()
            .map(|&row| {
                dataset
                    .value(row, group_idx)
                    .as_label()
                    .expect("incomplete rows were excluded")
            })
            .collect();

        let mut distinct: Vec<&String> = Vec::new();
        for label in &group_labels {
            if !distinct.contains(&label) {
                distinct.push(label);
            }
        }
        if distinct.len() < 2 {
            return Err(EstimateError::DegenerateGrouping {
                column: request.group_column.clone(),
                levels_found: distinct.len(),
            });
        }

        let n = used_rows.len();
        let y = DVector::from_iterator(
            n,
            used_rows.iter().map(|&row| {
                dataset
                    .value(row, outcome_idx)
                    .as_number()
                    .expect("outcome column was validated numeric")
            }),
        );

        let mut builder = DesignBuilder::new(n);
        let group_start = builder.term_count();
        let group_encoding = builder.categorical(&request.group_column, &group_labels);

        for (name, &col) in request.control_columns.iter().zip(&control_idxs) {
            match dataset.column_kind(col) {
                ColumnKind::Numeric => {
                    let values: Vec<f64> = used_rows
                        .iter()
                        .map(|&row| {
                            dataset
                                .value(row, col)
                                .as_number()
                                .expect("numeric column has no textual cells")
                        })
                        .collect();
                    builder.numeric(name, &values);
                }
                ColumnKind::Categorical => {
                    let labels: Vec<String> = used_rows
                        .iter()
                        .map(|&row| {
                            dataset
                                .value(row, col)
                                .as_label()
                                .expect("incomplete rows were excluded")
                        })
                        .collect();
                    builder.categorical(name, &labels);
                }
            }
        }

        let (x, _terms) = builder.build();
        let required = x.ncols() + 1;
        let insufficient = EstimateError::InsufficientData {
            rows_remaining: n,
            required,
        };
        if n < required {
            return Err(insufficient);
        }
        let fit = ols::fit(&x, &y).ok_or(insufficient)?;

        let df = fit.residual_df;
        let t_crit = t_critical_value(self.confidence_level, df);
        let effects = group_encoding
            .indicators
            .iter()
            .enumerate()
            .map(|(j, level)| {
                let idx = group_start + j;
                let coefficient = fit.coefficients[idx];
                let std_error = fit.std_errors[idx];
                let (t_value, p_value) = if std_error > 0.0 {
                    let t = coefficient / std_error;
                    (t, two_sided_p_value(t, df))
                } else if coefficient == 0.0 {
                    (0.0, 1.0)
                } else {
                    (f64::INFINITY.copysign(coefficient), 0.0)
                };
                GroupEffect {
                    level: level.clone(),
                    coefficient,
                    std_error,
                    t_value,
                    p_value,
                    ci_low: coefficient - t_crit * std_error,
                    ci_high: coefficient + t_crit * std_error,
                }
            })
            .collect();

        Ok(BiasEstimate {
            outcome_column: request.outcome_column.clone(),
            group_column: request.group_column.clone(),
            control_columns: request.control_columns.clone(),
            reference_level: group_encoding.reference,
            effects,
            confidence_level: self.confidence_level,
            residual_df: df,
            rows_used: n,
            rows_excluded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn dataset(columns: &[&str], rows: Vec<Vec<Value>>) -> Dataset {
        Dataset::new(columns.iter().map(|c| c.to_string()).collect(), rows).unwrap()
    }

    #[test]
    fn duplicate_control_is_rejected() {
        let ds = dataset(
            &["salary", "gender", "tenure"],
            vec![vec![
                Value::Number(1.0),
                Value::Text("A".into()),
                Value::Number(2.0),
            ]],
        );
        let request = AnalysisRequest::new("salary", "gender").with_controls(["tenure", "tenure"]);
        let err = BiasEstimator::new().estimate(&ds, &request).unwrap_err();
        assert_eq!(
            err,
            EstimateError::DuplicateColumn {
                column: "tenure".into()
            }
        );
    }

    #[test]
    fn control_repeating_group_is_rejected() {
        let ds = dataset(
            &["salary", "gender"],
            vec![vec![Value::Number(1.0), Value::Text("A".into())]],
        );
        let request = AnalysisRequest::new("salary", "gender").with_controls(["gender"]);
        let err = BiasEstimator::new().estimate(&ds, &request).unwrap_err();
        assert_eq!(
            err,
            EstimateError::DuplicateColumn {
                column: "gender".into()
            }
        );
    }

    #[test]
    fn numeric_group_column_is_grouped_by_display_label() {
        // Group coded 0/1 numerically still defines two levels
        let ds = dataset(
            &["salary", "group"],
            vec![
                vec![Value::Number(10.0), Value::Number(0.0)],
                vec![Value::Number(20.0), Value::Number(1.0)],
                vec![Value::Number(12.0), Value::Number(0.0)],
                vec![Value::Number(22.0), Value::Number(1.0)],
            ],
        );
        let request = AnalysisRequest::new("salary", "group");
        let estimate = BiasEstimator::new().estimate(&ds, &request).unwrap();
        assert_eq!(estimate.reference_level, "0");
        assert_eq!(estimate.effects[0].level, "1");
        assert!((estimate.effects[0].coefficient - 10.0).abs() < 1e-10);
    }
}
