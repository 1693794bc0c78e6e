//! Hard cluster assignment from a soft membership matrix

use symnmf_core::Matrix;

/// Column index of the largest entry in each row
///
/// Ties go to the lowest column. NaN entries never win against a number.
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_decomp::assign_clusters;
///
/// let h = Matrix::from_rows(&[
///     vec![0.9, 0.1],
///     vec![0.2, 0.7],
///     vec![0.5, 0.5],
/// ]).unwrap();
/// assert_eq!(assign_clusters(&h), vec![0, 1, 0]);
/// ```
pub fn assign_clusters(factor: &Matrix) -> Vec<usize> {
    factor
        .as_array()
        .outer_iter()
        .map(|row| {
            let mut best = 0;
            let mut best_value = f64::NEG_INFINITY;
            for (j, &value) in row.iter().enumerate() {
                if value > best_value {
                    best = j;
                    best_value = value;
                }
            }
            best
        })
        .collect()
}
