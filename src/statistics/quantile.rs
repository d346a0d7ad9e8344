//! Quantile computation using Type 2 quantiles (inverse empirical CDF
//! with averaging).
//!
//! Median salaries are the raw-gap building block, and Type 2 quantiles
//! (Hyndman & Fan 1996) give the familiar "average the two middle
//! values" median for even sample sizes without interpolation artifacts
//! on small HR datasets.
//!
//! **Type 2 formula** (for sorted sample x of size n at probability p):
//! ```text
//! h = n * p + 0.5
//! q = (x[floor(h)] + x[ceil(h)]) / 2
//! ```
//!
//! # Reference
//!
//! Hyndman, R. J. & Fan, Y. (1996). "Sample quantiles in statistical
//! packages." The American Statistician 50(4):361–365.

/// Compute a single quantile from a mutable slice using Type 2 quantiles.
///
/// Uses `select_nth_unstable_by()` for O(n) expected time. The slice is
/// partially reordered as a side effect; callers that need the original
/// order pass a scratch copy.
///
/// # Arguments
///
/// * `data` - Mutable slice of values (will be partially reordered)
/// * `p` - Quantile probability in [0, 1]
///
/// # Panics
///
/// Panics if `data` is empty or if `p` is outside [0, 1].
pub fn compute_quantile(data: &mut [f64], p: f64) -> f64 {
    assert!(!data.is_empty(), "cannot compute quantile of empty slice");
    assert!(
        (0.0..=1.0).contains(&p),
        "quantile probability must be in [0, 1]"
    );

    let n = data.len();
    if n == 1 {
        return data[0];
    }

    // Type 2 quantile: h = n * p + 0.5
    let h = n as f64 * p + 0.5;

    // Convert to 0-based indices with bounds checking
    let floor_idx = (h.floor() as usize).saturating_sub(1).min(n - 1);
    let ceil_idx = (h.ceil() as usize).saturating_sub(1).min(n - 1);

    if floor_idx == ceil_idx {
        let (_, &mut val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));
        return val;
    }

    // Select the larger index first; select_nth_unstable leaves all
    // smaller elements before the nth position, so the second selection
    // stays correct.
    let (_, &mut ceil_val, _) = data.select_nth_unstable_by(ceil_idx, |a, b| a.total_cmp(b));
    let (_, &mut floor_val, _) = data.select_nth_unstable_by(floor_idx, |a, b| a.total_cmp(b));

    (floor_val + ceil_val) / 2.0
}

/// Median of a slice, leaving the input untouched.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn median(data: &[f64]) -> f64 {
    let mut scratch = data.to_vec();
    compute_quantile(&mut scratch, 0.5)
}
