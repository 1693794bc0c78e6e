//! Dense matrix implementation and operations
//!
//! Organized into the type definition, creation routines, and structural checks.

pub mod types;

mod comparison;
mod creation;

pub use types::Matrix;
