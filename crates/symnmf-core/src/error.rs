//! Error types for matrix construction and the SymNMF pipeline
//!
//! Every fallible operation in the stack returns [`MatrixResult`]. There are two
//! tiers of failure:
//!
//! - **Resource exhaustion** ([`MatrixError::AllocationFailed`]): the backing buffer
//!   for a matrix could not be reserved. No partially built matrix is ever returned.
//! - **Validation** (every other variant): shapes, ranks or configuration values that
//!   do not describe a valid computation.
//!
//! Numeric degeneracies (zero degree during normalization, zero denominator during a
//! multiplicative update) are *not* errors and never surface here.
//!
//! # Examples
//!
//! ```
//! use symnmf_core::{MatrixError, MatrixResult};
//!
//! fn check_square(rows: usize, cols: usize) -> MatrixResult<()> {
//!     if rows != cols {
//!         return Err(MatrixError::shape_mismatch("check_square", (rows, rows), (rows, cols)));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_square(3, 3).is_ok());
//! assert!(check_square(3, 2).is_err());
//! ```

use thiserror::Error;

/// Error type for matrix operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    /// An operand did not have the shape the operation declared for it
    #[error("{operation}: shape mismatch - expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        operation: String,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Row-wise input where rows disagree on their length
    #[error("ragged rows: row {row} has {actual} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Empty input not allowed
    #[error("{operation}: empty input not allowed for parameter '{parameter}'")]
    EmptyInput {
        operation: String,
        parameter: String,
    },

    /// Factorization rank outside `1..=rows`
    #[error("{operation}: invalid rank {rank} for {rows} rows")]
    InvalidRank {
        operation: String,
        rank: usize,
        rows: usize,
    },

    /// Configuration or argument value out of its valid range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The backing buffer could not be allocated
    #[error("allocation failed for {rows}x{cols} matrix")]
    AllocationFailed { rows: usize, cols: usize },
}

/// Result type for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: impl Into<String>,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        MatrixError::ShapeMismatch {
            operation: operation.into(),
            expected,
            actual,
        }
    }

    /// Create an empty input error
    pub fn empty_input(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        MatrixError::EmptyInput {
            operation: operation.into(),
            parameter: parameter.into(),
        }
    }

    /// Create an invalid rank error
    pub fn invalid_rank(operation: impl Into<String>, rank: usize, rows: usize) -> Self {
        MatrixError::InvalidRank {
            operation: operation.into(),
            rank,
            rows,
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        MatrixError::InvalidConfig(message.into())
    }

    /// Whether this error belongs to the resource-exhaustion tier
    pub fn is_fatal(&self) -> bool {
        matches!(self, MatrixError::AllocationFailed { .. })
    }
}
