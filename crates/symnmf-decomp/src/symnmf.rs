//! SymNMF (Symmetric Non-negative Matrix Factorization via multiplicative updates)
//!
//! Approximates a symmetric non-negative matrix `W` (n × n) as `H · Hᵗ` with a
//! non-negative factor `H` (n × k), minimizing `‖W − H·Hᵗ‖²_F`.
//!
//! Each iteration applies the damped multiplicative update
//!
//! ```text
//! H ← H ∘ (1 − β + β · (W·H) ⊘ (H·(Hᵗ·H)))
//! ```
//!
//! Entries whose denominator is exactly zero are left unchanged. Iteration stops when
//! the total squared change `Σ (H − H_prev)²` drops below the tolerance, or when the
//! iteration budget runs out. Both outcomes return the current `H`.
//!
//! With a non-negative initial factor and `β ∈ (0, 1]` every multiplier is
//! non-negative, so `H` stays non-negative throughout. A factor with negative entries
//! is accepted and iterated the same way, without that guarantee.
//!
//! The rank `k` may exceed `n`; only the shapes of `W` and `H_init` are checked.

use crate::assign::assign_clusters;
use symnmf_core::{Matrix, MatrixError, MatrixResult};
use symnmf_kernels::{multiply, squared_change, transpose};

/// Default iteration budget
pub const DEFAULT_MAX_ITER: usize = 300;

/// Default convergence threshold on the total squared change between iterates
pub const DEFAULT_TOL: f64 = 1e-4;

/// Default damping factor β
pub const DEFAULT_BETA: f64 = 0.5;

/// Iteration policy for SymNMF
///
/// A plain value: independent factorizations can run with different policies.
///
/// # Examples
///
/// ```
/// use symnmf_decomp::SymNmfConfig;
///
/// let config = SymNmfConfig::default().with_max_iter(50).with_tol(1e-6);
/// assert_eq!(config.max_iter, 50);
/// assert_eq!(config.beta, 0.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymNmfConfig {
    /// Maximum number of update iterations (> 0)
    pub max_iter: usize,

    /// Stop once the total squared change falls strictly below this value (≥ 0)
    pub tol: f64,

    /// Damping factor β ∈ (0, 1]
    /// β = 1 is the undamped update; smaller values move H more cautiously
    pub beta: f64,
}

impl Default for SymNmfConfig {
    fn default() -> Self {
        Self {
            max_iter: DEFAULT_MAX_ITER,
            tol: DEFAULT_TOL,
            beta: DEFAULT_BETA,
        }
    }
}

impl SymNmfConfig {
    /// Set the iteration budget
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence threshold
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Set the damping factor
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Check every field is in range
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidConfig`] naming the offending field.
    pub fn validate(&self) -> MatrixResult<()> {
        if self.max_iter == 0 {
            return Err(MatrixError::invalid_config("max_iter must be positive"));
        }
        if !self.tol.is_finite() || self.tol < 0.0 {
            return Err(MatrixError::invalid_config(format!(
                "tol must be finite and non-negative, got {}",
                self.tol
            )));
        }
        if !(self.beta > 0.0 && self.beta <= 1.0) {
            return Err(MatrixError::invalid_config(format!(
                "beta must be in (0, 1], got {}",
                self.beta
            )));
        }
        Ok(())
    }
}

/// SymNMF result
#[derive(Debug, Clone)]
pub struct SymNmfResult {
    /// Final factor matrix `H` (n × k)
    pub factor: Matrix,

    /// Number of iterations performed (1 ..= max_iter)
    pub iters: usize,

    /// Whether the last change fell below the tolerance
    /// Diagnostics only; an exhausted budget is not an error
    pub converged: bool,

    /// Total squared change of every iteration, in order
    pub changes: Vec<f64>,
}

impl SymNmfResult {
    /// Total squared change of the final iteration
    pub fn last_change(&self) -> f64 {
        self.changes.last().copied().unwrap_or(0.0)
    }

    /// Cluster label of each point: the column of its largest factor entry
    pub fn labels(&self) -> Vec<usize> {
        assign_clusters(&self.factor)
    }
}

/// Factorize a normalized similarity matrix with the default policy
///
/// `w` must be `n × n` and `h_init` `n × k`. Returns the final `H`, whether the run
/// converged or used up its 300 iterations.
///
/// # Errors
///
/// - `ShapeMismatch` if `w` or `h_init` disagree with `n` and `k`
/// - `InvalidRank` if `k == 0`
/// - `AllocationFailed` if an intermediate cannot be allocated
///
/// # Examples
///
/// ```
/// use symnmf_core::Matrix;
/// use symnmf_decomp::factorize;
///
/// let w = Matrix::from_rows(&[
///     vec![0.0, 0.9, 0.1],
///     vec![0.9, 0.0, 0.1],
///     vec![0.1, 0.1, 0.0],
/// ]).unwrap();
/// let h0 = Matrix::random_uniform(3, 2, 0.0, 1.0, 0);
///
/// let h = factorize(&w, &h0, 3, 2).unwrap();
/// assert_eq!(h.shape(), (3, 2));
/// assert!(h.is_nonnegative());
/// ```
pub fn factorize(w: &Matrix, h_init: &Matrix, n: usize, k: usize) -> MatrixResult<Matrix> {
    symnmf(w, h_init, n, k, &SymNmfConfig::default()).map(|result| result.factor)
}

/// Factorize with an explicit policy, returning diagnostics alongside `H`
///
/// `h_init` is copied; the caller's matrix is not modified.
///
/// # Errors
///
/// As [`factorize`], plus `InvalidConfig` if `config` fails validation.
///
/// # Complexity
///
/// Time: O(n² · k) per iteration
/// Space: O(n · k) beyond the inputs
#[tracing::instrument(level = "debug", skip(w, h_init, config))]
pub fn symnmf(
    w: &Matrix,
    h_init: &Matrix,
    n: usize,
    k: usize,
    config: &SymNmfConfig,
) -> MatrixResult<SymNmfResult> {
    config.validate()?;
    validate_inputs(w, h_init, n, k)?;

    let beta = config.beta;
    let mut h = h_init.clone();
    let mut changes = Vec::new();
    let mut converged = false;

    for iter in 0..config.max_iter {
        let h_prev = h.clone();

        let numerator = multiply(w, &h)?;
        let gram = multiply(&transpose(&h)?, &h)?;
        let denominator = multiply(&h, &gram)?;

        for i in 0..n {
            for j in 0..k {
                let denom = denominator.get(i, j);
                if denom != 0.0 {
                    let scale = 1.0 - beta + beta * numerator.get(i, j) / denom;
                    h.set(i, j, h.get(i, j) * scale);
                }
            }
        }

        let change = squared_change(&h, &h_prev);
        changes.push(change);
        tracing::debug!(iteration = iter + 1, change, "symnmf iteration");

        if change < config.tol {
            converged = true;
            break;
        }
    }

    let iters = changes.len();
    let last_change = changes.last().copied().unwrap_or(0.0);
    if converged {
        tracing::info!(iters, last_change, "symnmf converged");
    } else {
        tracing::info!(
            iters,
            last_change,
            tol = config.tol,
            "symnmf reached iteration limit"
        );
    }

    Ok(SymNmfResult {
        factor: h,
        iters,
        converged,
        changes,
    })
}

fn validate_inputs(w: &Matrix, h_init: &Matrix, n: usize, k: usize) -> MatrixResult<()> {
    if k == 0 {
        return Err(MatrixError::invalid_rank("symnmf", k, n));
    }
    w.ensure_shape(n, n, "symnmf (normalized matrix)")?;
    h_init.ensure_shape(n, k, "symnmf (initial factor)")?;
    Ok(())
}
