//! Normalized similarity matrix `D^{-1/2} A D^{-1/2}`

use crate::degree::degree_from_similarity;
use crate::similarity::gaussian_affinity;
use crate::validation::{validate_points, validate_square};
use symnmf_core::{Matrix, MatrixError, MatrixResult};
use symnmf_kernels::allocate;

/// Build the normalized similarity matrix `W` of a point set with declared shape `n × d`
///
/// `W[i][j] = A[i][j] / sqrt(D[i][i] · D[j][j])`. The similarity matrix is computed
/// once and reused for the degree.
///
/// Zero degrees are not guarded: the affected entries come out NaN or infinite.
///
/// # Errors
///
/// - `ShapeMismatch` if `points` is not `n × d`
/// - `AllocationFailed` if an `n × n` matrix cannot be allocated
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_graph::normalized;
///
/// let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
/// let w = normalized(&x, 3, 2).unwrap();
/// assert!(w.is_symmetric(0.0));
/// assert_eq!(w.get(0, 0), 0.0);
/// ```
#[tracing::instrument(level = "debug", skip(points))]
pub fn normalized(points: &Matrix, n: usize, d: usize) -> MatrixResult<Matrix> {
    validate_points(points, n, d, "normalized")?;
    let affinity = gaussian_affinity(points)?;
    let degree = degree_from_similarity(&affinity)?;
    normalize_similarity(&affinity, &degree)
}

/// Normalize a similarity matrix by its degree matrix
///
/// # Errors
///
/// Returns `ShapeMismatch` if `affinity` is not square or `degree` has a different
/// shape.
pub fn normalize_similarity(affinity: &Matrix, degree: &Matrix) -> MatrixResult<Matrix> {
    validate_square(affinity, "normalize_similarity")?;
    if degree.shape() != affinity.shape() {
        return Err(MatrixError::shape_mismatch(
            "normalize_similarity",
            affinity.shape(),
            degree.shape(),
        ));
    }

    let n = affinity.rows();
    let diag: Vec<f64> = (0..n).map(|i| degree.get(i, i)).collect();

    let isolated = diag.iter().filter(|&&v| v == 0.0).count();
    if isolated > 0 {
        tracing::warn!(
            isolated,
            "points with zero degree; normalized matrix will contain non-finite values"
        );
    }

    let mut normalized = allocate(n, n)?;
    for i in 0..n {
        for j in 0..n {
            normalized.set(i, j, affinity.get(i, j) / (diag[i] * diag[j]).sqrt());
        }
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::degree::degree;
    use crate::similarity::similarity;

    fn triangle() -> Matrix {
        Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap()
    }

    #[test]
    fn test_normalized_matches_formula() {
        let x = triangle();
        let a = similarity(&x, 3, 2).unwrap();
        let d = degree(&x, 3, 2).unwrap();
        let w = normalized(&x, 3, 2).unwrap();

        for i in 0..3 {
            for j in 0..3 {
                let expected = a.get(i, j) / (d.get(i, i) * d.get(j, j)).sqrt();
                assert!((w.get(i, j) - expected).abs() < 1e-15);
            }
        }
        assert!(w.is_symmetric(0.0));
    }

    #[test]
    fn test_normalized_single_point_is_nan() {
        // A lone point has zero degree: 0 / sqrt(0) is NaN, not an error
        let x = Matrix::from_rows(&[vec![1.0, 1.0]]).unwrap();
        let w = normalized(&x, 1, 2).unwrap();
        assert!(w.get(0, 0).is_nan());
    }

    #[test]
    fn test_normalize_shape_mismatch() {
        let a = Matrix::zeros(3, 3);
        let d = Matrix::zeros(2, 2);
        assert!(normalize_similarity(&a, &d).is_err());
    }

    #[test]
    fn test_normalized_rejects_declared_shape() {
        assert!(normalized(&triangle(), 2, 2).is_err());
    }
}
