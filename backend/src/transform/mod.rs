//! Transformation module.
//!
//! - Matrix: pure transforms (transpose, flatten, sum, product)
//! - Operations: the operation catalogue exposed as routes
//! - Pipeline: request checks, validation and dispatch

pub mod matrix;
pub mod operations;
pub mod pipeline;

pub use matrix::{flatten, product, sum, transpose};
pub use operations::{operations_description, Operation};
pub use pipeline::*;
