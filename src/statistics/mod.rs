//! Statistical primitives shared by the analyses.
//!
//! - Type 2 quantiles (inverse empirical CDF with averaging) for the
//!   median-based raw comparisons
//! - Descriptive moments (mean)
//! - Student's t tail probabilities and quantiles for the adjusted
//!   model's p-values and confidence intervals

mod inference;
mod quantile;

pub use inference::{t_critical_value, two_sided_p_value};
pub use quantile::{compute_quantile, median};

/// Arithmetic mean of a non-empty slice.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "cannot compute mean of empty slice");
    data.iter().sum::<f64>() / data.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_constant_slice() {
        assert_eq!(mean(&[5.0, 5.0, 5.0]), 5.0);
    }

    #[test]
    fn mean_of_two_values() {
        assert_eq!(mean(&[1.0, 3.0]), 2.0);
    }
}
