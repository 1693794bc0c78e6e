//! # symnmf-graph
//!
//! Builds the three graph matrices of the SymNMF pipeline from a point set
//! `X` of shape `n × d`:
//!
//! ```text
//! A[i][j] = exp(-‖xᵢ − xⱼ‖² / 2)   (i ≠ j),   A[i][i] = 0
//! D[i][i] = Σⱼ A[i][j]              (off-diagonal exactly 0)
//! W[i][j] = A[i][j] / sqrt(D[i][i] · D[j][j])
//! ```
//!
//! The three boundary operations [`similarity`], [`degree`] and [`normalized`] take
//! the point set with its declared shape and reject a mismatch with
//! [`MatrixError::ShapeMismatch`](symnmf_core::MatrixError::ShapeMismatch).
//! [`build_graph`] returns all three from a single similarity computation.
//!
//! ## Degenerate inputs
//!
//! A point whose affinity to every other point underflows to zero has degree zero.
//! Normalization then divides by zero and yields NaN/∞ entries in its row and column.
//! This is a numeric edge case, not an error; it is logged at `warn` level.
//!
//! ## Quick Start
//!
//! ```
//! use symnmf_core::Matrix;
//! use symnmf_graph::{degree, normalized, similarity};
//!
//! let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]])?;
//!
//! let a = similarity(&x, 3, 2)?;
//! assert!((a.get(0, 1) - (-0.5f64).exp()).abs() < 1e-12);
//!
//! let d = degree(&x, 3, 2)?;
//! assert!(d.is_diagonal());
//!
//! let w = normalized(&x, 3, 2)?;
//! assert!(w.is_symmetric(0.0));
//! # Ok::<(), symnmf_core::MatrixError>(())
//! ```

#![deny(warnings)]

pub mod degree;
pub mod normalized;
pub mod pipeline;
pub mod similarity;
mod validation;

#[cfg(test)]
mod property_tests;

// Re-exports
pub use degree::{degree, degree_from_similarity};
pub use normalized::{normalize_similarity, normalized};
pub use pipeline::{build_graph, GraphMatrices};
pub use similarity::{gaussian_affinity, similarity};
