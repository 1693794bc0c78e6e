//! Matrix creation and initialization methods

use super::types::Matrix;
use crate::error::{MatrixError, MatrixResult};
use scirs2_core::ndarray_ext::Array2;
use scirs2_core::random::{rngs::StdRng, Rng, SeedableRng};

impl Matrix {
    /// Create a zero-filled matrix
    ///
    /// Aborts on allocation failure like any other `Vec` allocation. Use
    /// [`Matrix::try_zeros`] where exhaustion must be reported as an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use symnmf_core::Matrix;
    ///
    /// let m = Matrix::zeros(2, 3);
    /// assert_eq!(m.shape(), (2, 3));
    /// assert!(m.iter().all(|&v| v == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: Array2::zeros((rows, cols)),
        }
    }

    /// Create a zero-filled matrix, reporting allocation failure
    ///
    /// The buffer is reserved up front with `try_reserve_exact`; if that fails
    /// nothing has been handed out and [`MatrixError::AllocationFailed`] is returned.
    pub fn try_zeros(rows: usize, cols: usize) -> MatrixResult<Self> {
        let failed = MatrixError::AllocationFailed { rows, cols };
        let len = rows.checked_mul(cols).ok_or_else(|| failed.clone())?;

        let mut buffer: Vec<f64> = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| failed)?;
        buffer.resize(len, 0.0);

        Self::from_vec(buffer, rows, cols)
    }

    /// Create a matrix from a flat buffer in row-major order
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if `data.len() != rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use symnmf_core::Matrix;
    ///
    /// let m = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.get(1, 0), 4.0);
    ///
    /// assert!(Matrix::from_vec(vec![1.0, 2.0], 2, 3).is_err());
    /// ```
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> MatrixResult<Self> {
        let actual = data.len();
        let array = Array2::from_shape_vec((rows, cols), data).map_err(|_| {
            MatrixError::shape_mismatch("from_vec", (rows, cols), (1, actual))
        })?;
        Ok(Self { data: array })
    }

    /// Create a matrix from nested rows
    ///
    /// # Errors
    ///
    /// - [`MatrixError::EmptyInput`] if there are no rows or the first row is empty
    /// - [`MatrixError::RaggedRows`] if any row length differs from the first
    pub fn from_rows(rows: &[Vec<f64>]) -> MatrixResult<Self> {
        let first = rows
            .first()
            .ok_or_else(|| MatrixError::empty_input("from_rows", "rows"))?;
        let cols = first.len();
        if cols == 0 {
            return Err(MatrixError::empty_input("from_rows", "columns"));
        }

        let mut data = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            data.extend_from_slice(values);
        }

        Self::from_vec(data, rows.len(), cols)
    }

    /// Create a matrix with values drawn uniformly from `[low, high)`
    ///
    /// Uses a `StdRng` seeded with `seed`, so equal seeds give equal matrices.
    ///
    /// # Examples
    ///
    /// ```
    /// use symnmf_core::Matrix;
    ///
    /// let a = Matrix::random_uniform(4, 2, 0.0, 1.0, 7);
    /// let b = Matrix::random_uniform(4, 2, 0.0, 1.0, 7);
    /// assert_eq!(a, b);
    /// assert!(a.iter().all(|&v| (0.0..1.0).contains(&v)));
    /// ```
    pub fn random_uniform(rows: usize, cols: usize, low: f64, high: f64, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let range = high - low;
        let data = Array2::from_shape_fn((rows, cols), |_| low + rng.random::<f64>() * range);
        Self { data }
    }
}
