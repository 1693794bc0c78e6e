//! Gaussian-kernel similarity matrix
//!
//! Points close in the embedding get affinity near 1, far points approach 0.

use crate::validation::validate_points;
use symnmf_core::{Matrix, MatrixResult};
use symnmf_kernels::{allocate, squared_distance};

/// Build the similarity matrix `A` of a point set with declared shape `n × d`
///
/// `A[i][j] = exp(-‖xᵢ − xⱼ‖² / 2)` for `i ≠ j` and `A[i][i] = 0`.
///
/// # Errors
///
/// - `ShapeMismatch` if `points` is not `n × d`
/// - `AllocationFailed` if the `n × n` result cannot be allocated
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_graph::similarity;
///
/// let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
/// let a = similarity(&x, 2, 2).unwrap();
/// assert_eq!(a.get(0, 0), 0.0);
/// assert_eq!(a.get(0, 1), a.get(1, 0));
///
/// // Declared shape must match
/// assert!(similarity(&x, 3, 2).is_err());
/// ```
#[tracing::instrument(level = "debug", skip(points))]
pub fn similarity(points: &Matrix, n: usize, d: usize) -> MatrixResult<Matrix> {
    validate_points(points, n, d, "similarity")?;
    gaussian_affinity(points)
}

/// Similarity matrix of every row of `points`, without a declared shape
///
/// Only the upper triangle is evaluated; each value is mirrored, so the result is
/// exactly symmetric.
pub fn gaussian_affinity(points: &Matrix) -> MatrixResult<Matrix> {
    let n = points.rows();
    let mut affinity = allocate(n, n)?;

    for i in 0..n {
        affinity.set(i, i, 0.0);
        for j in (i + 1)..n {
            let value = (-squared_distance(&points.row(i), &points.row(j)) / 2.0).exp();
            affinity.set(i, j, value);
            affinity.set(j, i, value);
        }
    }

    tracing::trace!(n, "similarity matrix built");
    Ok(affinity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use symnmf_core::MatrixError;

    #[test]
    fn test_similarity_triangle() {
        let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let a = similarity(&x, 3, 2).unwrap();

        let near = (-0.5f64).exp();
        let far = (-1.0f64).exp();

        assert!((a.get(0, 1) - near).abs() < 1e-12);
        assert!((a.get(0, 2) - near).abs() < 1e-12);
        assert!((a.get(1, 2) - far).abs() < 1e-12);
        assert!((a.get(0, 1) - 0.6065).abs() < 1e-4);
        assert!((a.get(1, 2) - 0.3679).abs() < 1e-4);

        for i in 0..3 {
            assert_eq!(a.get(i, i), 0.0);
        }
        assert!(a.is_symmetric(0.0));
    }

    #[test]
    fn test_similarity_declared_rows_exceed_actual() {
        let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();

        let err = similarity(&x, 3, 2).unwrap_err();
        assert_eq!(err, MatrixError::shape_mismatch("similarity", (3, 2), (2, 2)));
    }

    #[test]
    fn test_similarity_declared_dimension_mismatch() {
        let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
        assert!(similarity(&x, 2, 3).is_err());
    }

    #[test]
    fn test_identical_points_have_unit_affinity() {
        let x = Matrix::from_rows(&[vec![2.0, 2.0], vec![2.0, 2.0]]).unwrap();
        let a = similarity(&x, 2, 2).unwrap();
        assert_eq!(a.get(0, 1), 1.0);
        assert_eq!(a.get(0, 0), 0.0);
    }

    #[test]
    fn test_single_point() {
        let x = Matrix::from_rows(&[vec![5.0]]).unwrap();
        let a = similarity(&x, 1, 1).unwrap();
        assert_eq!(a.to_rows(), vec![vec![0.0]]);
    }
}
