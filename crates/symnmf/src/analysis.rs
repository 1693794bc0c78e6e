//! SymNMF against k-means on the same point set

use symnmf_core::{Matrix, MatrixResult};
use symnmf_decomp::{
    initialize_factor, kmeans, silhouette_score, symnmf, KMeansOptions, SymNmfConfig,
};
use symnmf_graph::normalized;

/// Silhouette scores of both clusterings
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Labels from the argmax of the SymNMF factor
    pub nmf_labels: Vec<usize>,
    /// Labels from k-means
    pub kmeans_labels: Vec<usize>,
    /// Silhouette score of the SymNMF clustering
    pub nmf: f64,
    /// Silhouette score of the k-means clustering
    pub kmeans: f64,
}

/// Cluster `points` into `k` groups with SymNMF and with k-means, then score both
///
/// `seed` drives both the initial factor and k-means++ seeding.
///
/// # Errors
///
/// Any validation error of the pipeline. A clustering that collapses to a single label
/// cannot be scored and yields `InvalidConfig`.
#[tracing::instrument(level = "info", skip(points, config))]
pub fn analyze(
    points: &Matrix,
    k: usize,
    seed: u64,
    config: &SymNmfConfig,
) -> MatrixResult<Analysis> {
    let (n, d) = points.shape();

    let w = normalized(points, n, d)?;
    let h0 = initialize_factor(&w, k, seed)?;
    let nmf_labels = symnmf(&w, &h0, n, k, config)?.labels();

    let options = KMeansOptions {
        seed,
        ..KMeansOptions::new(k)
    };
    let kmeans_labels = kmeans(points, &options)?.labels;

    let nmf = silhouette_score(points, &nmf_labels)?;
    let kmeans = silhouette_score(points, &kmeans_labels)?;
    tracing::info!(nmf, kmeans, "silhouette scores");

    Ok(Analysis {
        nmf_labels,
        kmeans_labels,
        nmf,
        kmeans,
    })
}
