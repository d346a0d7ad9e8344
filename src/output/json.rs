//! JSON serialization for analysis results.

use serde::Serialize;

/// Serialize a report to a compact JSON string.
///
/// Works for any of the report types ([`crate::BiasEstimate`],
/// [`crate::RawGapReport`], [`crate::CommBiasReport`]).
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// report types).
pub fn to_json<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string(report)
}

/// Serialize a report to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails (should not happen for the
/// report types).
pub fn to_json_pretty<T: Serialize>(report: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{GroupGap, GroupMedian, RawGapReport};

    fn report() -> RawGapReport {
        RawGapReport {
            outcome_column: "salary".into(),
            group_column: "gender".into(),
            reference_level: "M".into(),
            medians: vec![
                GroupMedian {
                    level: "M".into(),
                    median: 102.0,
                    count: 3,
                },
                GroupMedian {
                    level: "F".into(),
                    median: 92.0,
                    count: 2,
                },
            ],
            gaps: vec![GroupGap {
                level: "F".into(),
                absolute_gap: -10.0,
                relative_gap: 0.098,
            }],
            rows_used: 5,
            rows_excluded: 0,
        }
    }

    #[test]
    fn compact_json_round_trips() {
        let json = to_json(&report()).unwrap();
        let back: RawGapReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report());
    }

    #[test]
    fn pretty_json_is_indented() {
        let json = to_json_pretty(&report()).unwrap();
        assert!(json.contains('\n'));
        assert!(json.contains("\"reference_level\": \"M\""));
    }
}
