//! Student's t tail probabilities and quantiles.
//!
//! The adjusted model reports each coefficient with a two-sided p-value
//! and a confidence interval, both taken from a Student's t distribution
//! with the fit's residual degrees of freedom.

use statrs::distribution::{ContinuousCDF, StudentsT};

/// Two-sided p-value for a t statistic with `df` residual degrees of
/// freedom.
///
/// # Panics
///
/// Panics if `df` is zero; the model fit guarantees at least one
/// residual degree of freedom before inference runs.
pub fn two_sided_p_value(t: f64, df: usize) -> f64 {
    assert!(df > 0, "p-value requires at least 1 degree of freedom");
    let dist = StudentsT::new(0.0, 1.0, df as f64)
        .expect("standard t distribution with positive df is valid");
    2.0 * (1.0 - dist.cdf(t.abs()))
}

/// Critical t value for a two-sided interval at `confidence_level`
/// (e.g. 1.96-like values; 4.30 for 95% at 2 degrees of freedom).
///
/// # Panics
///
/// Panics if `df` is zero or `confidence_level` is outside (0, 1).
pub fn t_critical_value(confidence_level: f64, df: usize) -> f64 {
    assert!(df > 0, "critical value requires at least 1 degree of freedom");
    assert!(
        confidence_level > 0.0 && confidence_level < 1.0,
        "confidence level must be in (0, 1)"
    );
    let dist = StudentsT::new(0.0, 1.0, df as f64)
        .expect("standard t distribution with positive df is valid");
    dist.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_value_is_symmetric_in_sign() {
        let p_pos = two_sided_p_value(2.0, 10);
        let p_neg = two_sided_p_value(-2.0, 10);
        assert!((p_pos - p_neg).abs() < 1e-12);
    }

    #[test]
    fn zero_statistic_gives_p_of_one() {
        assert!((two_sided_p_value(0.0, 5) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_df2_tail() {
        // For df = 2 the CDF is closed-form: F(t) = 1/2 (1 + t/sqrt(t^2+2)).
        // At t = 2*sqrt(2): F = 0.947214, so the two-sided p is 0.105573.
        let p = two_sided_p_value(2.0 * std::f64::consts::SQRT_2, 2);
        assert!((p - 0.105573).abs() < 1e-4, "p = {}", p);
    }

    #[test]
    fn known_95_critical_values() {
        // Textbook two-sided 95% critical values.
        assert!((t_critical_value(0.95, 2) - 4.3027).abs() < 1e-3);
        assert!((t_critical_value(0.95, 10) - 2.2281).abs() < 1e-3);
    }

    #[test]
    fn critical_value_shrinks_with_df() {
        assert!(t_critical_value(0.95, 2) > t_critical_value(0.95, 30));
    }
}
