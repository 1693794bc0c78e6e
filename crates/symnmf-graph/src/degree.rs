//! Diagonal degree matrix

use crate::similarity::gaussian_affinity;
use crate::validation::{validate_points, validate_square};
use symnmf_core::{Matrix, MatrixResult};
use symnmf_kernels::{allocate, row_sums};

/// Build the degree matrix `D` of a point set with declared shape `n × d`
///
/// Computes the similarity matrix internally, then `D[i][i] = Σⱼ A[i][j]`. Every
/// off-diagonal entry is exactly zero.
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
/// use symnmf_graph::degree;
///
/// let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
/// let d = degree(&x, 3, 2).unwrap();
/// assert!(d.is_diagonal());
/// assert!((d.get(1, 1) - 0.9744).abs() < 1e-4);
/// ```
#[tracing::instrument(level = "debug", skip(points))]
pub fn degree(points: &Matrix, n: usize, d: usize) -> MatrixResult<Matrix> {
    validate_points(points, n, d, "degree")?;
    let affinity = gaussian_affinity(points)?;
    degree_from_similarity(&affinity)
}

/// Degree matrix of an already built similarity matrix
///
/// The result is allocated zero-filled and only the diagonal is written.
///
/// # Errors
///
/// Returns `ShapeMismatch` if `affinity` is not square.
pub fn degree_from_similarity(affinity: &Matrix) -> MatrixResult<Matrix> {
    validate_square(affinity, "degree_from_similarity")?;

    let n = affinity.rows();
    let mut degree = allocate(n, n)?;
    for (i, sum) in row_sums(affinity).into_iter().enumerate() {
        degree.set(i, i, sum);
    }

    Ok(degree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::similarity::similarity;

    #[test]
    fn test_degree_triangle() {
        let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let d = degree(&x, 3, 2).unwrap();

        let near = (-0.5f64).exp();
        let far = (-1.0f64).exp();

        assert!((d.get(0, 0) - 2.0 * near).abs() < 1e-12);
        assert!((d.get(1, 1) - (near + far)).abs() < 1e-12);
        assert!((d.get(2, 2) - (near + far)).abs() < 1e-12);

        assert!((d.get(0, 0) - 1.2131).abs() < 1e-4);
        assert!((d.get(1, 1) - 0.9744).abs() < 1e-4);
        assert!((d.get(2, 2) - 0.9744).abs() < 1e-4);
        assert!(d.is_diagonal());
    }

    #[test]
    fn test_degree_matches_row_sums() {
        let x = Matrix::from_rows(&[
            vec![0.0, 0.0, 1.0],
            vec![0.5, 0.1, 0.0],
            vec![2.0, 1.0, 1.0],
            vec![0.2, 0.2, 0.2],
        ])
        .unwrap();
        let a = similarity(&x, 4, 3).unwrap();
        let d = degree(&x, 4, 3).unwrap();

        for (i, sum) in row_sums(&a).into_iter().enumerate() {
            assert_eq!(d.get(i, i), sum);
        }
        assert!(d.is_diagonal());
    }

    #[test]
    fn test_degree_rejects_non_square() {
        assert!(degree_from_similarity(&Matrix::zeros(2, 3)).is_err());
    }

    #[test]
    fn test_degree_shape_mismatch() {
        let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0]]).unwrap();
        assert!(degree(&x, 3, 2).is_err());
    }
}
