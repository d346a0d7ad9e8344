//! Raw (unadjusted) pay-gap comparison.
//!
//! Median outcome per group level and the gap of each level against the
//! reference level, with no model. The raw gap answers "what is the
//! difference"; the adjusted estimate answers "how much of it remains
//! after controlling for job-related factors". Reading both side by
//! side is the point of the tracker.

use super::{require_numeric, resolve_column, GroupedValues};
use crate::data::Dataset;
use crate::error::EstimateError;
use crate::result::RawGapReport;

/// Compute per-group medians of the outcome and gaps versus the
/// reference level.
///
/// Rows with a missing outcome or group value are excluded and counted.
/// The reference level is the most populated surviving level, ties
/// broken toward the first observed. Each other level L is reported as
/// `absolute = median(L) - median(reference)` and
/// `relative = 1 - median(L) / median(reference)`.
///
/// # Errors
///
/// - `ColumnNotFound` when either column is absent
/// - `DuplicateColumn` when the outcome and group columns coincide
/// - `NonNumericOutcome` when the outcome column has a textual cell
/// - `DegenerateGrouping` when fewer than two levels survive
pub fn raw_gap(
    dataset: &Dataset,
    outcome_column: &str,
    group_column: &str,
) -> Result<RawGapReport, EstimateError> {
    let outcome_idx = resolve_column(dataset, outcome_column)?;
    let group_idx = resolve_column(dataset, group_column)?;
    if outcome_column == group_column {
        return Err(EstimateError::DuplicateColumn {
            column: group_column.to_string(),
        });
    }

    require_numeric(dataset, outcome_idx, outcome_column)?;

    let mut grouped = GroupedValues::default();
    let mut rows_excluded = 0;
    for row in 0..dataset.row_count() {
        let outcome = dataset.value(row, outcome_idx);
        let group = dataset.value(row, group_idx).as_label();
        match (outcome.as_number(), group) {
            (Some(value), Some(level)) => grouped.push(&level, value),
            _ => rows_excluded += 1,
        }
    }

    if grouped.level_count() < 2 {
        return Err(EstimateError::DegenerateGrouping {
            column: group_column.to_string(),
            levels_found: grouped.level_count(),
        });
    }

    let rows_used = grouped.total();
    let (reference_level, medians, gaps) = grouped.median_summary();

    Ok(RawGapReport {
        outcome_column: outcome_column.to_string(),
        group_column: group_column.to_string(),
        reference_level,
        medians,
        gaps,
        rows_used,
        rows_excluded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Value;

    fn salary_dataset() -> Dataset {
        Dataset::new(
            vec!["salary".into(), "gender".into()],
            vec![
                vec![Value::Number(90.0), Value::Text("F".into())],
                vec![Value::Number(100.0), Value::Text("M".into())],
                vec![Value::Number(94.0), Value::Text("F".into())],
                vec![Value::Number(104.0), Value::Text("M".into())],
                vec![Value::Number(102.0), Value::Text("M".into())],
            ],
        )
        .unwrap()
    }

    #[test]
    fn medians_and_relative_gap() {
        let report = raw_gap(&salary_dataset(), "salary", "gender").unwrap();

        // M is the most populated level and becomes the reference
        assert_eq!(report.reference_level, "M");
        let f = report.medians.iter().find(|m| m.level == "F").unwrap();
        let m = report.medians.iter().find(|m| m.level == "M").unwrap();
        assert_eq!(f.median, 92.0);
        assert_eq!(m.median, 102.0);

        assert_eq!(report.gaps.len(), 1);
        assert_eq!(report.gaps[0].level, "F");
        assert_eq!(report.gaps[0].absolute_gap, -10.0);
        assert!((report.gaps[0].relative_gap - (1.0 - 92.0 / 102.0)).abs() < 1e-12);
    }

    #[test]
    fn missing_rows_are_counted_not_dropped_silently() {
        let ds = Dataset::new(
            vec!["salary".into(), "gender".into()],
            vec![
                vec![Value::Number(90.0), Value::Text("F".into())],
                vec![Value::Missing, Value::Text("M".into())],
                vec![Value::Number(100.0), Value::Text("M".into())],
                vec![Value::Number(95.0), Value::Missing],
            ],
        )
        .unwrap();

        let report = raw_gap(&ds, "salary", "gender").unwrap();
        assert_eq!(report.rows_used, 2);
        assert_eq!(report.rows_excluded, 2);
        assert_eq!(report.rows_used + report.rows_excluded, ds.row_count());
    }

    #[test]
    fn one_level_is_degenerate() {
        let ds = Dataset::new(
            vec!["salary".into(), "gender".into()],
            vec![
                vec![Value::Number(90.0), Value::Text("F".into())],
                vec![Value::Number(95.0), Value::Text("F".into())],
            ],
        )
        .unwrap();

        let err = raw_gap(&ds, "salary", "gender").unwrap_err();
        assert_eq!(
            err,
            EstimateError::DegenerateGrouping {
                column: "gender".into(),
                levels_found: 1,
            }
        );
    }
}
