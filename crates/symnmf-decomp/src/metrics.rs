//! Cluster quality metrics

use symnmf_core::{Matrix, MatrixError, MatrixResult};
use symnmf_kernels::euclidean_distance;

/// Per-point silhouette coefficients with Euclidean distance
///
/// For point `i` with mean intra-cluster distance `a` and smallest mean distance
/// to another cluster `b`, `s(i) = (b − a) / max(a, b)`. Points alone in their
/// cluster score 0.
///
/// # Errors
///
/// - `ShapeMismatch` if `labels.len()` differs from the number of points
/// - `InvalidConfig` unless the number of distinct labels is in `2..=n-1`
pub fn silhouette_samples(points: &Matrix, labels: &[usize]) -> MatrixResult<Vec<f64>> {
    let n = points.rows();
    if labels.len() != n {
        return Err(MatrixError::shape_mismatch(
            "silhouette",
            (n, 1),
            (labels.len(), 1),
        ));
    }

    let n_labels = labels.iter().max().map_or(0, |&m| m + 1);
    let mut sizes = vec![0usize; n_labels];
    for &label in labels {
        sizes[label] += 1;
    }
    let distinct = sizes.iter().filter(|&&s| s > 0).count();
    if distinct < 2 || distinct > n.saturating_sub(1) {
        return Err(MatrixError::invalid_config(format!(
            "silhouette requires 2..={} distinct labels, got {}",
            n.saturating_sub(1),
            distinct
        )));
    }

    let mut scores = Vec::with_capacity(n);
    let mut totals = vec![0.0; n_labels];
    for i in 0..n {
        totals.iter_mut().for_each(|t| *t = 0.0);
        for j in 0..n {
            if i != j {
                totals[labels[j]] += euclidean_distance(&points.row(i), &points.row(j));
            }
        }

        let own = labels[i];
        if sizes[own] == 1 {
            scores.push(0.0);
            continue;
        }

        let a = totals[own] / (sizes[own] - 1) as f64;
        let b = (0..n_labels)
            .filter(|&c| c != own && sizes[c] > 0)
            .map(|c| totals[c] / sizes[c] as f64)
            .fold(f64::INFINITY, f64::min);

        let denom = a.max(b);
        scores.push(if denom > 0.0 { (b - a) / denom } else { 0.0 });
    }

    Ok(scores)
}

/// Mean silhouette coefficient over all points, in `[-1, 1]`
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_decomp::silhouette_score;
///
/// let x = Matrix::from_rows(&[
///     vec![0.0, 0.0], vec![0.0, 1.0],
///     vec![10.0, 0.0], vec![10.0, 1.0],
/// ]).unwrap();
/// let score = silhouette_score(&x, &[0, 0, 1, 1]).unwrap();
/// assert!(score > 0.8);
/// ```
pub fn silhouette_score(points: &Matrix, labels: &[usize]) -> MatrixResult<f64> {
    let samples = silhouette_samples(points, labels)?;
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}
