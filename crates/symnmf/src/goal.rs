//! Goal selection: which matrix a run produces

use std::fmt;
use std::str::FromStr;

use symnmf_core::{Matrix, MatrixError, MatrixResult};
use symnmf_decomp::{initialize_factor, symnmf, SymNmfConfig};
use symnmf_graph::{degree, normalized, similarity};
use thiserror::Error;

/// The matrix a run produces from a point set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Gaussian similarity matrix `A`
    Sym,
    /// Diagonal degree matrix `D`
    Ddg,
    /// Normalized similarity matrix `W`
    Norm,
    /// SymNMF factor `H` of the normalized matrix
    SymNmf,
}

impl Goal {
    /// Every goal, in command line order
    pub const ALL: [Goal; 4] = [Goal::Sym, Goal::Ddg, Goal::Norm, Goal::SymNmf];

    /// Command line name of the goal
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Sym => "sym",
            Goal::Ddg => "ddg",
            Goal::Norm => "norm",
            Goal::SymNmf => "symnmf",
        }
    }

    /// Whether the goal needs a cluster count
    pub fn requires_rank(&self) -> bool {
        matches!(self, Goal::SymNmf)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized goal name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid goal '{0}', expected one of: sym, ddg, norm, symnmf")]
pub struct GoalError(pub String);

impl FromStr for Goal {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Goal::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| GoalError(s.to_string()))
    }
}

/// Parameters for the factorization goal
///
/// Ignored by the graph goals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunOptions {
    /// Number of clusters, required by [`Goal::SymNmf`]
    pub k: Option<usize>,
    /// Seed for the initial factor
    pub seed: u64,
    /// Iteration policy
    pub config: SymNmfConfig,
}

impl RunOptions {
    /// Options for a factorization into `k` clusters
    pub fn with_k(k: usize) -> Self {
        Self {
            k: Some(k),
            ..Self::default()
        }
    }
}

/// Compute the matrix for `goal` from `points` (n × d)
///
/// For [`Goal::SymNmf`] the normalized matrix is factorized from a seeded random
/// initial factor, so equal options give equal output.
///
/// # Errors
///
/// Any error of the underlying operation, and `InvalidConfig` if [`Goal::SymNmf`] is
/// requested without `k`.
#[tracing::instrument(level = "info", skip(points, options), fields(n = points.rows(), d = points.cols()))]
pub fn run_goal(goal: Goal, points: &Matrix, options: &RunOptions) -> MatrixResult<Matrix> {
    let (n, d) = points.shape();
    match goal {
        Goal::Sym => similarity(points, n, d),
        Goal::Ddg => degree(points, n, d),
        Goal::Norm => normalized(points, n, d),
        Goal::SymNmf => {
            let k = options.k.ok_or_else(|| {
                MatrixError::invalid_config("goal 'symnmf' requires a cluster count k")
            })?;
            let w = normalized(points, n, d)?;
            let h0 = initialize_factor(&w, k, options.seed)?;
            symnmf(&w, &h0, n, k, &options.config).map(|result| result.factor)
        }
    }
}
