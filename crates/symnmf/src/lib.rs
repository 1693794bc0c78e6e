//! # symnmf - Graph clustering by Symmetric Non-negative Matrix Factorization
//!
//! This is the **meta crate** that re-exports every SymNMF component and adds the
//! goal-driven entry points used by the command line host.
//!
//! ## Quick Start
//!
//! ```
//! use symnmf::prelude::*;
//!
//! let x = Matrix::from_rows(&[
//!     vec![0.0, 0.0], vec![0.2, 0.1],
//!     vec![5.0, 5.0], vec![5.1, 4.9],
//! ])?;
//! let (n, d) = x.shape();
//!
//! let w = normalized(&x, n, d)?;
//! let h0 = initialize_factor(&w, 2, 0)?;
//! let h = factorize(&w, &h0, n, 2)?;
//! let labels = assign_clusters(&h);
//! assert_eq!(labels.len(), 4);
//! # Ok::<(), MatrixError>(())
//! ```
//!
//! ## Components
//!
//! - [`core`]: the dense [`Matrix`](core::Matrix) type and [`MatrixError`](core::MatrixError)
//! - [`kernels`]: product, transpose, distances and reductions
//! - [`graph`]: similarity, degree and normalized similarity matrices
//! - [`decomp`]: SymNMF, initialization, cluster assignment, k-means and silhouette
//!
//! ## Goals
//!
//! [`Goal`] names the matrix a run produces; [`run_goal`] computes it from a point set.
//!
//! ```
//! use symnmf::{run_goal, Goal, RunOptions};
//! use symnmf::core::Matrix;
//!
//! let x = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
//! let goal: Goal = "ddg".parse().unwrap();
//! let d = run_goal(goal, &x, &RunOptions::default()).unwrap();
//! assert!(d.is_diagonal());
//! ```

#![deny(warnings)]

pub use symnmf_core as core;
pub use symnmf_decomp as decomp;
pub use symnmf_graph as graph;
pub use symnmf_kernels as kernels;

pub mod analysis;
pub mod goal;

pub use analysis::{analyze, Analysis};
pub use goal::{run_goal, Goal, GoalError, RunOptions};

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! ```
    //! use symnmf::prelude::*;
    //!
    //! let m = Matrix::zeros(2, 2);
    //! assert!(m.is_symmetric(0.0));
    //! ```

    // Core types
    pub use crate::core::{Matrix, MatrixError, MatrixResult};

    // Graph construction
    pub use crate::graph::{build_graph, degree, normalized, similarity, GraphMatrices};

    // Factorization and clustering
    //
    // The `symnmf` function stays under `decomp`: a glob import of it would be
    // ambiguous with the crate name.
    pub use crate::decomp::{
        assign_clusters, factorize, initialize_factor, kmeans, silhouette_score,
        KMeansOptions, SymNmfConfig, SymNmfResult,
    };

    // Goals
    pub use crate::{analyze, run_goal, Goal, RunOptions};
}
