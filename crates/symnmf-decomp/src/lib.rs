//! # symnmf-decomp
//!
//! Symmetric non-negative matrix factorization and the clustering built on it.
//!
//! ## Overview
//!
//! Given the normalized similarity matrix `W` of a point set (see `symnmf-graph`),
//! SymNMF finds a non-negative `H` (n × k) with `W ≈ H·Hᵗ`. Row `i` of `H` holds the
//! soft membership weights of point `i`; its largest entry is the point's cluster.
//!
//! **Algorithms:**
//! - [`symnmf`] / [`factorize`]: damped multiplicative updates with an iteration cap
//! - [`initialize_factor`]: seeded uniform initialization scaled to `mean(W)`
//! - [`assign_clusters`]: hard labels from a factor matrix
//! - [`kmeans`]: k-means++ seeded Lloyd iterations, the comparison baseline
//! - [`silhouette_score`]: cluster quality
//!
//! ## Quick Start
//!
//! ```
//! use symnmf_core::Matrix;
//! use symnmf_decomp::{initialize_factor, symnmf, SymNmfConfig};
//!
//! // Normalized similarity of two well separated pairs
//! let w = Matrix::from_rows(&[
//!     vec![0.0, 1.0, 0.0, 0.0],
//!     vec![1.0, 0.0, 0.0, 0.0],
//!     vec![0.0, 0.0, 0.0, 1.0],
//!     vec![0.0, 0.0, 1.0, 0.0],
//! ])?;
//!
//! let h0 = initialize_factor(&w, 2, 0)?;
//! let result = symnmf(&w, &h0, 4, 2, &SymNmfConfig::default())?;
//!
//! println!("iterations: {}, converged: {}", result.iters, result.converged);
//! let labels = result.labels();
//! assert_eq!(labels.len(), 4);
//! # Ok::<(), symnmf_core::MatrixError>(())
//! ```
//!
//! ## Policy
//!
//! The iteration cap (300), tolerance (1e-4) and damping (β = 0.5) are fields of
//! [`SymNmfConfig`], not global state.
//!
//! ## References
//!
//! - Kuang, Ding & Park (2012), "Symmetric Nonnegative Matrix Factorization for Graph Clustering"
//! - Lee & Seung (2001), "Algorithms for Non-negative Matrix Factorization"

#![deny(warnings)]

pub mod assign;
pub mod init;
pub mod kmeans;
pub mod metrics;
pub mod symnmf;

#[cfg(test)]
mod property_tests;

// Re-exports
pub use assign::*;
pub use init::*;
pub use kmeans::*;
pub use metrics::*;
pub use symnmf::*;
