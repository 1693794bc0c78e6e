//! Allocation helpers shared by the kernels

use symnmf_core::{Matrix, MatrixResult};

/// Allocate a `rows × cols` matrix
///
/// The contents are zero-filled. Callers that need zeros (the degree matrix, the
/// accumulators in [`multiply`](crate::multiply)) may rely on that; no other initial
/// value is promised.
///
/// # Errors
///
/// Returns [`MatrixError::AllocationFailed`](symnmf_core::MatrixError::AllocationFailed)
/// if the buffer cannot be reserved. No partial matrix is returned.
///
/// # Examples
///
/// ```
/// use symnmf_kernels::allocate;
///
/// let m = allocate(4, 2).unwrap();
/// assert_eq!(m.shape(), (4, 2));
/// ```
pub fn allocate(rows: usize, cols: usize) -> MatrixResult<Matrix> {
    Matrix::try_zeros(rows, cols)
}
