//! Pay-gap and communication-bias analyses.
//!
//! Three entry points, all pure functions of their inputs:
//!
//! 1. **Adjusted gap** ([`adjusted`]): regression-controlled estimate of
//!    the outcome gap between groups ([`BiasEstimator`])
//! 2. **Raw gap** ([`raw`]): unadjusted per-group medians and relative
//!    gaps ([`raw_gap`])
//! 3. **Communication bias** ([`comm`]): per-group medians of a
//!    communication metric after joining on pseudonym keys
//!    ([`comm_bias`])

pub mod adjusted;
pub mod comm;
pub mod raw;

pub use adjusted::BiasEstimator;
pub use comm::comm_bias;
pub use raw::raw_gap;

use crate::data::Dataset;
use crate::error::EstimateError;
use crate::model::design::reference_index;
use crate::result::{GroupGap, GroupMedian};
use crate::statistics::median;
use crate::types::Value;

/// Resolve a column name to its index.
pub(crate) fn resolve_column(dataset: &Dataset, name: &str) -> Result<usize, EstimateError> {
    dataset
        .column_index(name)
        .ok_or_else(|| EstimateError::ColumnNotFound {
            column: name.to_string(),
        })
}

/// Require that every present cell of a column is numeric.
///
/// The first textual cell fails the whole column; data rows are
/// reported 1-indexed (header excluded) to match the source file.
pub(crate) fn require_numeric(
    dataset: &Dataset,
    col: usize,
    name: &str,
) -> Result<(), EstimateError> {
    for (row, value) in dataset.column_values(col).enumerate() {
        if let Value::Text(s) = value {
            return Err(EstimateError::NonNumericOutcome {
                column: name.to_string(),
                value: s.clone(),
                row: row + 1,
            });
        }
    }
    Ok(())
}

/// Values bucketed by group level, in first-observed order.
///
/// First-observed ordering keeps reports deterministic and makes the
/// reference tie-break well defined.
#[derive(Debug, Default)]
pub(crate) struct GroupedValues {
    levels: Vec<String>,
    buckets: Vec<Vec<f64>>,
}

impl GroupedValues {
    pub(crate) fn push(&mut self, level: &str, value: f64) {
        match self.levels.iter().position(|l| l == level) {
            Some(i) => self.buckets[i].push(value),
            None => {
                self.levels.push(level.to_string());
                self.buckets.push(vec![value]);
            }
        }
    }

    pub(crate) fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub(crate) fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    /// Per-level median summary plus gaps against the reference level
    /// (most populated level, ties toward the first observed).
    pub(crate) fn median_summary(&self) -> (String, Vec<GroupMedian>, Vec<GroupGap>) {
        let counts: Vec<usize> = self.buckets.iter().map(Vec::len).collect();
        let ref_idx = reference_index(&counts);
        let reference = self.levels[ref_idx].clone();
        let ref_median = median(&self.buckets[ref_idx]);

        let medians: Vec<GroupMedian> = self
            .levels
            .iter()
            .zip(&self.buckets)
            .map(|(level, bucket)| GroupMedian {
                level: level.clone(),
                median: median(bucket),
                count: bucket.len(),
            })
            .collect();

        let gaps = medians
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != ref_idx)
            .map(|(_, m)| GroupGap {
                level: m.level.clone(),
                absolute_gap: m.median - ref_median,
                relative_gap: 1.0 - m.median / ref_median,
            })
            .collect();

        (reference, medians, gaps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_orders_levels_by_first_observation() {
        let mut grouped = GroupedValues::default();
        grouped.push("B", 100.0);
        grouped.push("A", 90.0);
        grouped.push("B", 110.0);
        grouped.push("A", 95.0);

        let (reference, medians, gaps) = grouped.median_summary();
        assert_eq!(reference, "B");
        assert_eq!(medians[0].level, "B");
        assert_eq!(medians[1].level, "A");
        assert_eq!(gaps.len(), 1);
        assert_eq!(gaps[0].level, "A");
    }

    #[test]
    fn gap_signs_follow_level_minus_reference() {
        let mut grouped = GroupedValues::default();
        grouped.push("ref", 100.0);
        grouped.push("ref", 100.0);
        grouped.push("low", 90.0);

        let (_, _, gaps) = grouped.median_summary();
        assert_eq!(gaps[0].absolute_gap, -10.0);
        assert!((gaps[0].relative_gap - 0.1).abs() < 1e-12);
    }
}
