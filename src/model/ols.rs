//! Ordinary least squares over a dense design matrix.
//!
//! The model is: y = X*beta + epsilon, epsilon ~ N(0, sigma^2 I)
//!
//! The fit solves the normal equations (X^T X) beta = X^T y by Cholesky
//! decomposition, then recovers coefficient uncertainty from
//! sigma^2 (X^T X)^-1 with sigma^2 estimated as SSR / (n - k).

use nalgebra::{Cholesky, DMatrix, DVector};

/// Result of an ordinary least squares fit.
#[derive(Debug, Clone)]
pub struct OlsFit {
    /// Fitted coefficients, one per design column.
    pub coefficients: DVector<f64>,
    /// Standard error of each coefficient.
    pub std_errors: DVector<f64>,
    /// Estimated residual variance (SSR / residual_df).
    pub sigma2: f64,
    /// Residual degrees of freedom (n - k).
    pub residual_df: usize,
}

/// Fit ordinary least squares of `y` on the columns of `x`.
///
/// # Arguments
///
/// * `x` - Design matrix, n rows by k columns (intercept included)
/// * `y` - Outcome vector of length n
///
/// # Returns
///
/// `None` when the system cannot be solved: fewer than k + 1
/// observations, or a design whose normal equations stay singular even
/// after one tiny-ridge retry.
///
/// # Panics
///
/// Panics if `y`'s length differs from `x`'s row count.
pub fn fit(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<OlsFit> {
    let n = x.nrows();
    let k = x.ncols();
    assert_eq!(y.len(), n, "outcome length must match design rows");

    if n < k + 1 {
        return None;
    }

    let xtx = x.transpose() * x;
    let xty = x.transpose() * y;

    let chol = match Cholesky::new(xtx.clone()) {
        Some(c) => c,
        None => {
            // Collinear design: retry once with a tiny diagonal ridge
            let ridged = xtx + DMatrix::identity(k, k) * 1e-10;
            Cholesky::new(ridged)?
        }
    };

    let coefficients = chol.solve(&xty);
    let residuals = y - x * &coefficients;
    let ssr = residuals.dot(&residuals);
    let residual_df = n - k;
    let sigma2 = ssr / residual_df as f64;

    // Covariance of estimates: sigma^2 (X^T X)^-1. Rounding can push a
    // zero-variance diagonal entry slightly negative; clamp before sqrt.
    let xtx_inv = chol.inverse();
    let std_errors = DVector::from_iterator(
        k,
        (0..k).map(|i| (sigma2 * xtx_inv[(i, i)]).max(0.0).sqrt()),
    );

    Some(OlsFit {
        coefficients,
        std_errors,
        sigma2,
        residual_df,
    })
}
