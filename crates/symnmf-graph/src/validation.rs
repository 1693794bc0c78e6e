//! Input validation shared by the graph operations

use symnmf_core::{Matrix, MatrixError, MatrixResult};

/// Check that the point set is exactly `n × d`
pub(crate) fn validate_points(
    points: &Matrix,
    n: usize,
    d: usize,
    operation: &str,
) -> MatrixResult<()> {
    points.ensure_shape(n, d, operation)
}

/// Check that `matrix` is square
pub(crate) fn validate_square(matrix: &Matrix, operation: &str) -> MatrixResult<()> {
    if !matrix.is_square() {
        let n = matrix.rows();
        return Err(MatrixError::shape_mismatch(operation, (n, n), matrix.shape()));
    }
    Ok(())
}
