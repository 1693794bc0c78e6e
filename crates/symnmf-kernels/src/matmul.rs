//! Matrix product and transpose
//!
//! Both operations allocate a fresh result and never touch their inputs.

use crate::utils::allocate;
use symnmf_core::{Matrix, MatrixResult};

/// Compute the matrix product `A · B`
///
/// For `A` with shape (n, m) and `B` with shape (m, k), returns the (n, k) matrix
/// with `c[i][j] = Σₚ a[i][p] · b[p][j]`.
///
/// # Panics
///
/// Panics if the inner dimensions differ. Callers validate shapes at their own
/// boundary, so a mismatch here is a programming error.
///
/// # Errors
///
/// Returns `AllocationFailed` if the result cannot be allocated.
///
/// # Complexity
///
/// Time: O(n · m · k)
/// Space: O(n · k)
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_kernels::multiply;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
/// let c = multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19.0, 22.0], vec![43.0, 50.0]]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> MatrixResult<Matrix> {
    let (n, m) = a.shape();
    let (inner, k) = b.shape();
    assert_eq!(
        m, inner,
        "Inner dimensions must match for multiply: {:?} x {:?}",
        a.shape(),
        b.shape()
    );

    let mut result = allocate(n, k)?;
    let (av, bv) = (a.view(), b.view());
    let mut out = result.view_mut();

    for i in 0..n {
        for j in 0..k {
            let mut sum = 0.0;
            for p in 0..m {
                sum += av[[i, p]] * bv[[p, j]];
            }
            out[[i, j]] = sum;
        }
    }

    Ok(result)
}

/// Return a new matrix with rows and columns swapped
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_kernels::transpose;
///
/// let a = Matrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
/// let t = transpose(&a).unwrap();
/// assert_eq!(t.shape(), (3, 1));
/// assert_eq!(t.get(2, 0), 3.0);
/// ```
pub fn transpose(a: &Matrix) -> MatrixResult<Matrix> {
    let (rows, cols) = a.shape();
    let mut result = allocate(cols, rows)?;
    let av = a.view();
    let mut out = result.view_mut();

    for i in 0..rows {
        for j in 0..cols {
            out[[j, i]] = av[[i, j]];
        }
    }

    Ok(result)
}
