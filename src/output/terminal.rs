//! Terminal output formatting with colors.
//!
//! Renders each report as a compact text block for command-line use.
//! Gap magnitudes are colored by statistical significance (adjusted) or
//! direction (raw / communication) via ANSI escapes.

use colored::Colorize;

use crate::result::{BiasEstimate, CommBiasReport, GroupGap, GroupMedian, RawGapReport};

/// Format an adjusted estimate for human-readable terminal output.
///
/// One row per non-reference level with coefficient, standard error,
/// t value, p-value, and the confidence interval. Effects significant
/// at the estimate's confidence level are highlighted.
pub fn format_estimate(estimate: &BiasEstimate) -> String {
    let mut out = String::new();
    let sep = "\u{2500}".repeat(62);
    let alpha = 1.0 - estimate.confidence_level;

    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!(
        "  Adjusted gap: {} by {}\n",
        estimate.outcome_column.bold(),
        estimate.group_column.bold()
    ));
    if estimate.control_columns.is_empty() {
        out.push_str("  Controls:     (none)\n");
    } else {
        out.push_str(&format!(
            "  Controls:     {}\n",
            estimate.control_columns.join(", ")
        ));
    }
    out.push_str(&format!(
        "  Reference:    {}   Rows: {} used, {} excluded\n\n",
        estimate.reference_level, estimate.rows_used, estimate.rows_excluded
    ));

    out.push_str(&format!(
        "  {:<12} {:>12} {:>10} {:>8} {:>9}  {:>20}\n",
        "level", "coef", "std err", "t", "p", ci_header(estimate.confidence_level)
    ));
    for effect in &estimate.effects {
        let coef = format!("{:>12.3}", effect.coefficient);
        let coef = if effect.p_value < alpha {
            coef.red().bold().to_string()
        } else {
            coef
        };
        out.push_str(&format!(
            "  {:<12} {} {:>10.3} {:>8.3} {:>9.4}  [{:>8.3}, {:>8.3}]\n",
            effect.level,
            coef,
            effect.std_error,
            effect.t_value,
            effect.p_value,
            effect.ci_low,
            effect.ci_high
        ));
    }

    out.push_str(&format!(
        "\n  Residual df: {}\n",
        estimate.residual_df
    ));
    out.push_str(&sep);
    out
}

/// Format a raw gap report for human-readable terminal output.
pub fn format_raw_gap(report: &RawGapReport) -> String {
    let mut out = String::new();
    let sep = "\u{2500}".repeat(62);

    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!(
        "  Raw gap: median {} by {}\n",
        report.outcome_column.bold(),
        report.group_column.bold()
    ));
    out.push_str(&format!(
        "  Reference: {}   Rows: {} used, {} excluded\n\n",
        report.reference_level, report.rows_used, report.rows_excluded
    ));

    push_median_block(&mut out, &report.medians, &report.gaps);
    out.push_str(&sep);
    out
}

/// Format a communication-bias report for human-readable terminal
/// output.
pub fn format_comm_bias(report: &CommBiasReport) -> String {
    let mut out = String::new();
    let sep = "\u{2500}".repeat(62);

    out.push_str(&sep);
    out.push('\n');
    out.push_str(&format!(
        "  Communication bias: median {} by {}\n",
        report.metric_column.bold(),
        report.group_column.bold()
    ));
    out.push_str(&format!(
        "  Reference: {}   Rows: {} matched, {} unmatched, {} excluded\n\n",
        report.reference_level, report.rows_matched, report.rows_unmatched, report.rows_excluded
    ));

    push_median_block(&mut out, &report.medians, &report.gaps);
    out.push_str(&sep);
    out
}

fn ci_header(confidence_level: f64) -> String {
    format!("{:.0}% interval", confidence_level * 100.0)
}

fn push_median_block(out: &mut String, medians: &[GroupMedian], gaps: &[GroupGap]) {
    out.push_str(&format!(
        "  {:<12} {:>12} {:>8} {:>14} {:>12}\n",
        "level", "median", "n", "gap", "relative"
    ));
    for m in medians {
        let gap = gaps.iter().find(|g| g.level == m.level);
        match gap {
            None => {
                out.push_str(&format!(
                    "  {:<12} {:>12.3} {:>8} {:>14} {:>12}\n",
                    m.level, m.median, m.count, "(reference)", ""
                ));
            }
            Some(g) => {
                let relative = format!("{:>11.1}%", g.relative_gap * 100.0);
                let relative = if g.relative_gap > 0.0 {
                    relative.red().to_string()
                } else {
                    relative.green().to_string()
                };
                out.push_str(&format!(
                    "  {:<12} {:>12.3} {:>8} {:>14.3} {}\n",
                    m.level, m.median, m.count, g.absolute_gap, relative
                ));
            }
        }
    }
    out.push('\n');
}
