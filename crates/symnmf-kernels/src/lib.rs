//! # symnmf-kernels
//!
//! Dense matrix algebra primitives used by the graph builder and the factorizer.
//!
//! - [`allocate`]: fallible, zero-filled matrix allocation
//! - [`multiply`], [`transpose`]: plain O(n·m·k) product and axis swap
//! - [`squared_distance`]: squared Euclidean distance between two points
//! - Reductions: [`row_sums`], [`squared_change`], [`mean`]
//!
//! None of these tile, block or parallelize. The target problem sizes (clustering a
//! modest point set) do not need it.
//!
//! ```
//! use symnmf_core::Matrix;
//! use symnmf_kernels::{multiply, transpose};
//!
//! let h = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
//! let ht = transpose(&h).unwrap();
//! let gram = multiply(&ht, &h).unwrap();
//! assert_eq!(gram.shape(), (2, 2));
//! assert_eq!(gram.get(0, 0), 35.0);
//! ```

#![deny(warnings)]

pub mod distance;
pub mod matmul;
pub mod reductions;
pub mod utils;


// Re-exports
pub use distance::*;
pub use matmul::*;
pub use reductions::*;
pub use utils::*;
