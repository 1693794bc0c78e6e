//! Errors raised by the command line host
//!
//! Library failures arrive as [`MatrixError`] and are wrapped unchanged. Every
//! variant maps to exit status 1.

use std::path::PathBuf;

use symnmf::core::MatrixError;
use symnmf::{Goal, GoalError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Input file could not be read
    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A field is not a finite number (1-based line and column)
    #[error("line {line}, column {column}: '{value}' is not a finite number")]
    Parse {
        line: usize,
        column: usize,
        value: String,
    },

    /// A row disagrees with the first row on its number of values
    #[error("line {line}: expected {expected} values, found {actual}")]
    Ragged {
        line: usize,
        expected: usize,
        actual: usize,
    },

    /// The input holds no points
    #[error("input contains no points")]
    Empty,

    #[error(transparent)]
    Goal(#[from] GoalError),

    /// Goal needs `--k`
    #[error("goal '{0}' requires --k")]
    MissingRank(Goal),

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

pub type CliResult<T> = Result<T, CliError>;
