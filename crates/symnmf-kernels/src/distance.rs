//! Point-to-point distances
//!
//! Points are rows of a point-set matrix, passed as 1-D views.

use scirs2_core::ndarray_ext::ArrayView1;

/// Squared Euclidean distance `Σᵢ (a[i] − b[i])²`
///
/// Symmetric in its arguments.
///
/// # Panics
///
/// Panics if the two points have different dimensions
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_kernels::squared_distance;
///
/// let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(squared_distance(&x.row(0), &x.row(1)), 25.0);
/// ```
pub fn squared_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "Points must have the same dimension: {} vs {}",
        a.len(),
        b.len()
    );

    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let diff = x - y;
            diff * diff
        })
        .sum()
}

/// Euclidean distance, the square root of [`squared_distance`]
pub fn euclidean_distance(a: &ArrayView1<f64>, b: &ArrayView1<f64>) -> f64 {
    squared_distance(a, b).sqrt()
}
