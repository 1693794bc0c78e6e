//! K-Means (Lloyd's algorithm with k-means++ seeding)
//!
//! Used as the baseline SymNMF is compared against. Deterministic for a fixed seed.

use scirs2_core::random::{rngs::StdRng, Rng, SeedableRng};
use symnmf_core::{Matrix, MatrixError, MatrixResult};
use symnmf_kernels::{allocate, squared_change, squared_distance};

/// Options for K-Means clustering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KMeansOptions {
    /// Number of clusters
    pub n_clusters: usize,
    /// Maximum Lloyd iterations
    pub max_iter: usize,
    /// Stop once the total squared centroid shift falls below this value
    pub tol: f64,
    /// Seed for k-means++ seeding
    pub seed: u64,
}

impl Default for KMeansOptions {
    fn default() -> Self {
        Self {
            n_clusters: 8,
            max_iter: 300,
            tol: 1e-4,
            seed: 0,
        }
    }
}

impl KMeansOptions {
    /// Options for `n_clusters` clusters, other fields at their defaults
    pub fn new(n_clusters: usize) -> Self {
        Self {
            n_clusters,
            ..Default::default()
        }
    }
}

/// Result of K-Means clustering
#[derive(Debug, Clone)]
pub struct KMeansResult {
    /// Cluster centroids (k × d)
    pub centroids: Matrix,
    /// Cluster assignment of each point
    pub labels: Vec<usize>,
    /// Sum of squared distances to the assigned centroid
    pub inertia: f64,
    /// Number of iterations run
    pub n_iter: usize,
}

/// Cluster the rows of `points` (n × d)
///
/// # Errors
///
/// - `EmptyInput` if `points` has no rows
/// - `InvalidRank` if `n_clusters == 0` or exceeds the number of points
/// - `InvalidConfig` if `max_iter == 0` or `tol` is negative
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_decomp::{kmeans, KMeansOptions};
///
/// let x = Matrix::from_rows(&[
///     vec![0.0, 0.0], vec![0.1, 0.1],
///     vec![9.0, 9.0], vec![9.1, 9.1],
/// ]).unwrap();
/// let result = kmeans(&x, &KMeansOptions::new(2)).unwrap();
/// assert_eq!(result.labels[0], result.labels[1]);
/// assert_ne!(result.labels[0], result.labels[2]);
/// ```
#[tracing::instrument(level = "debug", skip(points))]
pub fn kmeans(points: &Matrix, options: &KMeansOptions) -> MatrixResult<KMeansResult> {
    let (n, d) = points.shape();
    let k = options.n_clusters;

    if n == 0 {
        return Err(MatrixError::empty_input("kmeans", "points"));
    }
    if k == 0 || k > n {
        return Err(MatrixError::invalid_rank("kmeans", k, n));
    }
    if options.max_iter == 0 || options.tol.is_nan() || options.tol < 0.0 {
        return Err(MatrixError::invalid_config(
            "kmeans requires max_iter > 0 and tol >= 0",
        ));
    }

    let mut centroids = plus_plus_seeds(points, k, options.seed)?;
    let mut labels = vec![0usize; n];
    let mut n_iter = 0;

    for iter in 0..options.max_iter {
        n_iter = iter + 1;
        assign_nearest(points, &centroids, &mut labels);

        let mut updated = allocate(k, d)?;
        let mut counts = vec![0usize; k];
        for (i, &label) in labels.iter().enumerate() {
            counts[label] += 1;
            for j in 0..d {
                updated[(label, j)] += points.get(i, j);
            }
        }
        for (c, &count) in counts.iter().enumerate() {
            for j in 0..d {
                if count == 0 {
                    // Empty cluster keeps its previous centroid
                    updated[(c, j)] = centroids.get(c, j);
                } else {
                    updated[(c, j)] /= count as f64;
                }
            }
        }

        let shift = squared_change(&updated, &centroids);
        centroids = updated;
        if shift < options.tol {
            break;
        }
    }

    assign_nearest(points, &centroids, &mut labels);
    let inertia: f64 = labels
        .iter()
        .enumerate()
        .map(|(i, &c)| squared_distance(&points.row(i), &centroids.row(c)))
        .sum();

    tracing::debug!(n_iter, inertia, "kmeans finished");
    Ok(KMeansResult {
        centroids,
        labels,
        inertia,
        n_iter,
    })
}

/// k-means++: first seed uniform, each next seed with probability ∝ D(x)²
fn plus_plus_seeds(points: &Matrix, k: usize, seed: u64) -> MatrixResult<Matrix> {
    let (n, d) = points.shape();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids = allocate(k, d)?;

    let mut chosen = vec![rng.random_range(0..n)];
    let mut closest: Vec<f64> = (0..n)
        .map(|i| squared_distance(&points.row(i), &points.row(chosen[0])))
        .collect();

    while chosen.len() < k {
        let total: f64 = closest.iter().sum();
        let next = if total > 0.0 {
            let target = rng.random::<f64>() * total;
            let mut acc = 0.0;
            let mut pick = n - 1;
            for (i, &dist) in closest.iter().enumerate() {
                acc += dist;
                if acc > target {
                    pick = i;
                    break;
                }
            }
            pick
        } else {
            // All remaining points coincide with a seed
            (0..n).find(|i| !chosen.contains(i)).unwrap_or(0)
        };

        for (i, best) in closest.iter_mut().enumerate() {
            let dist = squared_distance(&points.row(i), &points.row(next));
            if dist < *best {
                *best = dist;
            }
        }
        chosen.push(next);
    }

    for (c, &i) in chosen.iter().enumerate() {
        for j in 0..d {
            centroids.set(c, j, points.get(i, j));
        }
    }
    Ok(centroids)
}

fn assign_nearest(points: &Matrix, centroids: &Matrix, labels: &mut [usize]) {
    for (i, label) in labels.iter_mut().enumerate() {
        let mut best = 0;
        let mut best_dist = f64::INFINITY;
        for c in 0..centroids.rows() {
            let dist = squared_distance(&points.row(i), &centroids.row(c));
            if dist < best_dist {
                best = c;
                best_dist = dist;
            }
        }
        *label = best;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_blobs() -> Matrix {
        let mut rows = Vec::new();
        for &(cx, cy) in &[(0.0, 0.0), (10.0, 0.0), (0.0, 10.0)] {
            for &(dx, dy) in &[(0.0, 0.0), (0.2, 0.1), (-0.1, 0.2), (0.1, -0.2)] {
                rows.push(vec![cx + dx, cy + dy]);
            }
        }
        Matrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_kmeans_three_blobs() {
        let x = three_blobs();
        let result = kmeans(&x, &KMeansOptions::new(3)).unwrap();

        assert_eq!(result.labels.len(), 12);
        assert_eq!(result.centroids.shape(), (3, 2));
        for blob in 0..3 {
            let first = result.labels[blob * 4];
            for offset in 1..4 {
                assert_eq!(result.labels[blob * 4 + offset], first);
            }
        }
        assert_ne!(result.labels[0], result.labels[4]);
        assert_ne!(result.labels[0], result.labels[8]);
        assert_ne!(result.labels[4], result.labels[8]);
        assert!(result.inertia < 1.0);
    }

    #[test]
    fn test_kmeans_is_deterministic() {
        let x = three_blobs();
        let options = KMeansOptions {
            seed: 17,
            ..KMeansOptions::new(3)
        };
        let a = kmeans(&x, &options).unwrap();
        let b = kmeans(&x, &options).unwrap();
        assert_eq!(a.labels, b.labels);
        assert_eq!(a.centroids, b.centroids);
    }

    #[test]
    fn test_kmeans_k_equals_n() {
        let x = Matrix::from_rows(&[vec![0.0], vec![1.0], vec![2.0]]).unwrap();
        let result = kmeans(&x, &KMeansOptions::new(3)).unwrap();
        assert!(result.inertia.abs() < 1e-12);
    }

    #[test]
    fn test_kmeans_duplicate_points() {
        let x = Matrix::from_rows(&[vec![1.0, 1.0], vec![1.0, 1.0], vec![1.0, 1.0]]).unwrap();
        let result = kmeans(&x, &KMeansOptions::new(2)).unwrap();
        assert_eq!(result.labels.len(), 3);
        assert_eq!(result.inertia, 0.0);
    }

    #[test]
    fn test_kmeans_invalid_options() {
        let x = three_blobs();
        assert!(kmeans(&x, &KMeansOptions::new(0)).is_err());
        assert!(kmeans(&x, &KMeansOptions::new(13)).is_err());
        let options = KMeansOptions {
            max_iter: 0,
            ..KMeansOptions::new(2)
        };
        assert!(kmeans(&x, &options).is_err());
    }
}
