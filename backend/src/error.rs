//! Error types for the matrix upload pipeline.
//!
//! - [`MatrixError`] - every way an upload can be rejected, request checks
//!   and matrix checks alike. Its `Display` output is the exact plain-text
//!   body returned to the client.
//! - [`ServerError`] - failures while starting or running the HTTP server.

use thiserror::Error;

// =============================================================================
// Upload / Matrix Errors
// =============================================================================

/// Reasons an upload is rejected.
///
/// The pipeline stops at the first violation it finds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Request was not a POST.
    #[error("Only http POST verb supported")]
    BadMethod,

    /// No multipart part named `file` carrying a filename.
    #[error("No file uploaded")]
    MissingFile,

    /// Filename does not end with `.csv`.
    #[error("Invalid file format, only CSV files are allowed")]
    BadExtension,

    /// Request body exceeded the configured upload cap.
    #[error("File too large, maximum upload size is {limit} bytes")]
    UploadTooLarge { limit: usize },

    /// File content is not valid UTF-8.
    #[error("Invalid file encoding, only UTF-8 text is allowed")]
    InvalidEncoding,

    /// A token is not an integer-valued number.
    #[error("Invalid matrix element at row:{row}, col:{col} => \"{value}\", only integers allowed")]
    NonIntegerElement { row: usize, col: usize, value: String },

    /// Rows differ in length.
    #[error("Invalid matrix: unequal number of columns across rows")]
    UnequalColumns,

    /// Uniform rows, but row count differs from column count.
    #[error("Invalid matrix dimension: {rows} x {cols}, only square matrices allowed")]
    NonSquare { rows: usize, cols: usize },
}

impl MatrixError {
    /// HTTP status code for this rejection.
    pub fn status_code(&self) -> u16 {
        match self {
            MatrixError::UploadTooLarge { .. } => 413,
            _ => 400,
        }
    }
}

// =============================================================================
// Server Errors
// =============================================================================

/// HTTP server errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Failed to bind or serve.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for upload and matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
