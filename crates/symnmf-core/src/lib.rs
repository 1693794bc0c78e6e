//! # symnmf-core
//!
//! Core matrix type and error model for the SymNMF clustering stack.
//!
//! This crate provides the foundational building blocks the other crates share:
//!
//! - **Dense matrix representation** ([`Matrix`]): a fixed-shape, row-major,
//!   contiguous `f64` matrix wrapping `scirs2_core::ndarray_ext::Array2`
//! - **Error model** ([`MatrixError`], [`MatrixResult`]): typed validation and
//!   allocation failures; nothing in the stack terminates the process
//!
//! ## Core Principles
//!
//! ### SciRS2 Integration
//!
//! Array storage and random number generation come from `scirs2-core`
//! (`ndarray_ext`, `random`). Direct use of `ndarray` or `rand` is avoided.
//!
//! ### Ownership
//!
//! A matrix is owned by whoever created it and moves on return. Shapes never change
//! after creation; only values do.
//!
//! ## Quick Start
//!
//! ```
//! use symnmf_core::Matrix;
//!
//! let points = Matrix::from_rows(&[vec![0.0, 0.0], vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
//! assert_eq!(points.shape(), (3, 2));
//!
//! let zeros = Matrix::zeros(3, 3);
//! assert!(zeros.is_diagonal());
//!
//! let h0 = Matrix::random_uniform(3, 2, 0.0, 1.0, 0);
//! assert!(h0.is_nonnegative());
//! ```

#![deny(warnings)]

pub mod dense;
pub mod error;


pub use dense::Matrix;
pub use error::{MatrixError, MatrixResult};
