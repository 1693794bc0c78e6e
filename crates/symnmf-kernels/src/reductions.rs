//! Reductions over whole matrices

use symnmf_core::Matrix;

/// Sum of each row
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_kernels::row_sums;
///
/// let a = Matrix::from_rows(&[vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap();
/// assert_eq!(row_sums(&a), vec![3.0, 12.0]);
/// ```
pub fn row_sums(a: &Matrix) -> Vec<f64> {
    a.as_array().outer_iter().map(|row| row.sum()).collect()
}

/// Total squared element-wise change `Σᵢⱼ (a[i][j] − b[i][j])²`
///
/// This is the convergence metric of the factorizer.
///
/// # Panics
///
/// Panics if the shapes differ
pub fn squared_change(a: &Matrix, b: &Matrix) -> f64 {
    assert_eq!(
        a.shape(),
        b.shape(),
        "Shapes must match for squared_change: {:?} vs {:?}",
        a.shape(),
        b.shape()
    );

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Arithmetic mean of all entries, `0.0` for an empty matrix
pub fn mean(a: &Matrix) -> f64 {
    if a.is_empty() {
        return 0.0;
    }
    a.iter().sum::<f64>() / a.len() as f64
}
