//! Dense matrix type definition and basic accessors
//!
//! This module defines the core [`Matrix`] type. Creation routines live in
//! `creation`, structural checks in `comparison`.

use crate::error::{MatrixError, MatrixResult};
use scirs2_core::ndarray_ext::{Array2, ArrayView1, ArrayView2, ArrayViewMut2};

/// Dense row-major matrix of `f64` backed by scirs2_core's ndarray
///
/// The shape is fixed at creation; values are mutable. Storage is always a single
/// contiguous buffer in C (row-major) order, so there is no per-row allocation.
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
/// assert_eq!(m.shape(), (3, 2));
/// assert_eq!(m.get(2, 1), 6.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array2<f64>,
}

impl Matrix {
    /// Wrap an existing array
    ///
    /// Non-standard layouts (e.g. a transposed view turned owned) are copied into
    /// row-major order so the contiguity guarantee holds.
    pub fn from_array(array: Array2<f64>) -> Self {
        let data = if array.is_standard_layout() {
            array
        } else {
            array.as_standard_layout().into_owned()
        };
        Self { data }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Whether the matrix has no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Element at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[[i, j]]
    }

    /// Overwrite the element at `(i, j)`
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[[i, j]] = value;
    }

    /// View of row `i`
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.data.row(i)
    }

    /// Read-only view of the whole matrix
    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.data.view()
    }

    /// Mutable view of the whole matrix
    pub fn view_mut(&mut self) -> ArrayViewMut2<'_, f64> {
        self.data.view_mut()
    }

    /// Borrow the underlying array
    pub fn as_array(&self) -> &Array2<f64> {
        &self.data
    }

    /// Consume the matrix, returning the underlying array
    pub fn into_array(self) -> Array2<f64> {
        self.data
    }

    /// Iterate over all elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &f64> + '_ {
        self.data.iter()
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Check that this matrix is exactly `rows × cols`
    ///
    /// This is the dimension check every boundary operation runs before touching
    /// data, so a wrong declared shape is reported rather than read out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use symnmf_core::Matrix;
    ///
    /// let x = Matrix::zeros(2, 2);
    /// assert!(x.ensure_shape(2, 2, "similarity").is_ok());
    /// assert!(x.ensure_shape(3, 2, "similarity").is_err());
    /// ```
    pub fn ensure_shape(&self, rows: usize, cols: usize, operation: &str) -> MatrixResult<()> {
        if self.shape() != (rows, cols) {
            return Err(MatrixError::shape_mismatch(
                operation,
                (rows, cols),
                self.shape(),
            ));
        }
        Ok(())
    }
}

impl From<Array2<f64>> for Matrix {
    fn from(array: Array2<f64>) -> Self {
        Self::from_array(array)
    }
}

impl std::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self.data[[i, j]]
    }
}

impl std::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self.data[[i, j]]
    }
}
