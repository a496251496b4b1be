//! Upload pipeline: request checks, parsing, validation, dispatch.
//!
//! Works on a plain [`UploadRequest`] so it can be driven by the HTTP
//! adapter, the CLI, or tests alike.
//!
//! # Example
//!
//! ```
//! use csv_matrix::{process_upload, Operation, UploadRequest, UploadedFile};
//!
//! let request = UploadRequest::post(UploadedFile::new("matrix.csv", "1,2\n3,4"));
//! let result = process_upload(&request, Operation::Sum).unwrap();
//! assert_eq!(result.render(), "10");
//! ```

use std::path::Path;

use super::operations::Operation;
use crate::error::MatrixError;
use crate::models::{OperationResult, ValidatedMatrix};
use crate::parser::parse_bytes;
use crate::validation::validate;

/// Required filename suffix (case-sensitive).
pub const CSV_EXTENSION: &str = ".csv";

/// An uploaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk, keeping its file name.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self { filename, bytes })
    }
}

/// What the pipeline needs to know about an incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// HTTP method, uppercase.
    pub method: String,
    /// The `file` part, if one was sent.
    pub file: Option<UploadedFile>,
}

impl UploadRequest {
    pub fn new(method: impl Into<String>, file: Option<UploadedFile>) -> Self {
        Self {
            method: method.into(),
            file,
        }
    }

    /// A POST carrying `file`.
    pub fn post(file: UploadedFile) -> Self {
        Self::new("POST", Some(file))
    }
}

/// Request-level checks: method, presence of the file, extension.
pub fn request_validations(request: &UploadRequest) -> Result<&UploadedFile, MatrixError> {
    if request.method != "POST" {
        return Err(MatrixError::BadMethod);
    }

    let file = request.file.as_ref().ok_or(MatrixError::MissingFile)?;

    if !file.filename.ends_with(CSV_EXTENSION) {
        return Err(MatrixError::BadExtension);
    }

    Ok(file)
}

/// Request checks, then parse and validate the uploaded matrix.
pub fn run_validations(request: &UploadRequest) -> Result<ValidatedMatrix, MatrixError> {
    let file = request_validations(request)?;
    let raw = parse_bytes(&file.bytes)?;
    validate(raw)
}

/// Full pipeline for one request.
pub fn process_upload(
    request: &UploadRequest,
    operation: Operation,
) -> Result<OperationResult, MatrixError> {
    let matrix = run_validations(request)?;
    Ok(operation.apply(&matrix))
}
