//! Communication-bias comparison across joined datasets.
//!
//! Communication logs carry pseudonymized receiver ids rather than
//! demographics, so the group label has to come from the HR dataset:
//! each communication row is joined to HR on the pseudonym key columns,
//! then the metric (typically response time) is compared across the HR
//! group column via per-group medians.

use std::collections::HashMap;

use super::{require_numeric, resolve_column, GroupedValues};
use crate::config::CommBiasRequest;
use crate::data::Dataset;
use crate::error::EstimateError;
use crate::result::CommBiasReport;

/// Compare a communication metric across HR group levels.
///
/// Join semantics: the first HR occurrence of a pseudonym wins; later
/// duplicates are ignored. Communication rows with a missing or unknown
/// key are counted as unmatched, matched rows with a missing metric as
/// excluded. `rows_matched + rows_unmatched` always equals the
/// communication dataset's row count.
///
/// # Errors
///
/// - `ColumnNotFound` when any of the four columns is absent from its
///   dataset
/// - `NonNumericOutcome` when the metric column has a textual cell
/// - `DegenerateGrouping` when fewer than two group levels receive any
///   matched metric value
pub fn comm_bias(
    hr: &Dataset,
    comm: &Dataset,
    request: &CommBiasRequest,
) -> Result<CommBiasReport, EstimateError> {
    let hr_key_idx = resolve_column(hr, &request.hr_key_column)?;
    let group_idx = resolve_column(hr, &request.group_column)?;
    let comm_key_idx = resolve_column(comm, &request.comm_key_column)?;
    let metric_idx = resolve_column(comm, &request.metric_column)?;

    require_numeric(comm, metric_idx, &request.metric_column)?;

    // Pseudonym -> group label, first occurrence wins
    let mut groups_by_key: HashMap<String, String> = HashMap::new();
    for row in 0..hr.row_count() {
        let key = hr.value(row, hr_key_idx).as_label();
        let group = hr.value(row, group_idx).as_label();
        if let (Some(key), Some(group)) = (key, group) {
            groups_by_key.entry(key).or_insert(group);
        }
    }

    let mut grouped = GroupedValues::default();
    let mut rows_matched = 0;
    let mut rows_unmatched = 0;
    let mut rows_excluded = 0;
    for row in 0..comm.row_count() {
        let group = comm
            .value(row, comm_key_idx)
            .as_label()
            .and_then(|key| groups_by_key.get(&key));
        match group {
            None => rows_unmatched += 1,
            Some(level) => {
                rows_matched += 1;
                match comm.value(row, metric_idx).as_number() {
                    Some(value) => grouped.push(level, value),
                    None => rows_excluded += 1,
                }
            }
        }
    }

    if grouped.level_count() < 2 {
        return Err(EstimateError::DegenerateGrouping {
            column: request.group_column.clone(),
            levels_found: grouped.level_count(),
        });
    }

    let (reference_level, medians, gaps) = grouped.median_summary();

    Ok(CommBiasReport {
        group_column: request.group_column.clone(),
        metric_column: request.metric_column.clone(),
        reference_level,
        medians,
        gaps,
        rows_matched,
        rows_unmatched,
        rows_excluded,
    })
}
