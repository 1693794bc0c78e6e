//! All three graph matrices from one similarity computation

use crate::degree::degree_from_similarity;
use crate::normalized::normalize_similarity;
use crate::similarity::gaussian_affinity;
use crate::validation::validate_points;
use symnmf_core::{Matrix, MatrixResult};

/// Similarity, degree and normalized matrices of one point set
#[derive(Debug, Clone)]
pub struct GraphMatrices {
    /// `A`, symmetric with zero diagonal
    pub similarity: Matrix,
    /// `D`, diagonal row sums of `A`
    pub degree: Matrix,
    /// `W = D^{-1/2} A D^{-1/2}`
    pub normalized: Matrix,
}

impl GraphMatrices {
    /// Number of points
    pub fn len(&self) -> usize {
        self.similarity.rows()
    }

    /// Whether the graph has no points
    pub fn is_empty(&self) -> bool {
        self.similarity.is_empty()
    }
}

/// Build every graph matrix for a point set with declared shape `n × d`
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_graph::{build_graph, normalized};
///
/// let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
/// let graph = build_graph(&x, 3, 2).unwrap();
/// assert_eq!(graph.len(), 3);
/// assert_eq!(graph.normalized, normalized(&x, 3, 2).unwrap());
/// ```
#[tracing::instrument(level = "debug", skip(points))]
pub fn build_graph(points: &Matrix, n: usize, d: usize) -> MatrixResult<GraphMatrices> {
    validate_points(points, n, d, "build_graph")?;

    let similarity = gaussian_affinity(points)?;
    let degree = degree_from_similarity(&similarity)?;
    let normalized = normalize_similarity(&similarity, &degree)?;

    Ok(GraphMatrices {
        similarity,
        degree,
        normalized,
    })
}
