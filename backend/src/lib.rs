//! # csv-matrix - square matrix operations over CSV uploads
//!
//! Accepts a CSV file holding a square integer matrix and returns it
//! unchanged, transposed, flattened, summed or multiplied.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Upload     │────▶│   Parser    │────▶│  Validator  │────▶│  Operation  │
//! │ (multipart) │     │ (\n and ,)  │     │ (int, NxN)  │     │ (→ text)    │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use csv_matrix::{process_upload, Operation, UploadRequest, UploadedFile};
//!
//! let request = UploadRequest::post(UploadedFile::new("m.csv", "1,2\n3,4"));
//! let result = process_upload(&request, Operation::Invert).unwrap();
//! assert_eq!(result.render(), "1,3\n2,4\n");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Server configuration
//! - [`models`] - Raw and validated matrices, operation results
//! - [`parser`] - Text to token grid
//! - [`validation`] - Integer, column and squareness checks
//! - [`transform`] - Matrix transforms, operation catalogue, pipeline
//! - [`api`] - HTTP API server

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Parsing
pub mod parser;

// Validation
pub mod validation;

// Transformation
pub mod transform;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::ServerConfig;
pub use error::{MatrixError, MatrixResult, ServerError, ServerResult};
pub use models::{Cell, OperationResult, RawMatrix, ValidatedMatrix};
pub use parser::{decode_content, parse_bytes, parse_matrix};
pub use validation::{parse_integer, validate};
pub use transform::{
    flatten, operations_description, process_upload, product, request_validations,
    run_validations, sum, transpose, Operation, UploadRequest, UploadedFile,
};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server, AppState};
}
