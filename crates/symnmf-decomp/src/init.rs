//! Random initialization of the SymNMF factor matrix

use symnmf_core::{Matrix, MatrixError, MatrixResult};
use symnmf_kernels::mean;

/// Draw an initial factor for a normalized matrix `w` (n × n) at rank `k`
///
/// Entries are uniform on `[0, 2·sqrt(m / k))` where `m` is the mean entry of `w`,
/// from a `StdRng` seeded with `seed`. The scale matches `H·Hᵗ` to the magnitude of
/// `w` on average.
///
/// # Errors
///
/// - `ShapeMismatch` if `w` is not square
/// - `InvalidRank` if `k == 0`
/// - `InvalidConfig` if the mean of `w` is negative or not finite
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_decomp::initialize_factor;
///
/// let w = Matrix::from_rows(&[vec![0.0, 0.5], vec![0.5, 0.0]]).unwrap();
/// let h0 = initialize_factor(&w, 1, 0).unwrap();
/// assert_eq!(h0.shape(), (2, 1));
/// // upper bound 2·sqrt(0.25 / 1) = 1
/// assert!(h0.iter().all(|&v| (0.0..1.0).contains(&v)));
/// ```
pub fn initialize_factor(w: &Matrix, k: usize, seed: u64) -> MatrixResult<Matrix> {
    let n = w.rows();
    w.ensure_shape(n, n, "initialize_factor")?;
    if k == 0 {
        return Err(MatrixError::invalid_rank("initialize_factor", k, n));
    }

    let m = mean(w);
    if !m.is_finite() || m < 0.0 {
        return Err(MatrixError::invalid_config(format!(
            "normalized matrix mean must be finite and non-negative, got {}",
            m
        )));
    }

    let upper = 2.0 * (m / k as f64).sqrt();
    tracing::debug!(n, k, seed, upper, "initial factor drawn");
    Ok(Matrix::random_uniform(n, k, 0.0, upper, seed))
}
