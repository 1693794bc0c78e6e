//! Structural checks and element-wise comparisons

use super::types::Matrix;

impl Matrix {
    /// Whether the matrix has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Whether `|a[i][j] - a[j][i]| <= tol` for every pair
    ///
    /// Non-square matrices are never symmetric. NaN entries make the check fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use symnmf_core::Matrix;
    ///
    /// let m = Matrix::from_rows(&[vec![0.0, 0.5], vec![0.5, 0.0]]).unwrap();
    /// assert!(m.is_symmetric(0.0));
    /// ```
    pub fn is_symmetric(&self, tol: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let n = self.rows();
        (0..n).all(|i| ((i + 1)..n).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol))
    }

    /// Whether every off-diagonal entry is exactly zero
    pub fn is_diagonal(&self) -> bool {
        self.is_square()
            && self
                .data
                .indexed_iter()
                .all(|((i, j), &v)| i == j || v == 0.0)
    }

    /// Whether every entry is `>= 0`
    pub fn is_nonnegative(&self) -> bool {
        self.iter().all(|&v| v >= 0.0)
    }

    /// Largest absolute element-wise difference, `None` if the shapes differ
    pub fn max_abs_diff(&self, other: &Matrix) -> Option<f64> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.iter()
                .zip(other.iter())
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }

    /// Element-wise comparison within `tol`
    pub fn approx_eq(&self, other: &Matrix, tol: f64) -> bool {
        self.max_abs_diff(other).is_some_and(|d| d <= tol)
    }
}
