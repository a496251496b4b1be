//! Domain models for the matrix pipeline.
//!
//! - [`RawMatrix`] - tokens exactly as split from the upload
//! - [`Cell`] - one validated token together with its integer value
//! - [`ValidatedMatrix`] - square, integer-valued matrix of cells
//! - [`OperationResult`] - what an operation produces, ready to render

use num_bigint::BigInt;
use std::fmt;

// =============================================================================
// Raw Matrix
// =============================================================================

/// Rows of unparsed tokens, in upload order.
pub type RawMatrix = Vec<Vec<String>>;

// =============================================================================
// Validated Matrix
// =============================================================================

/// A single matrix element.
///
/// `token` keeps the uploaded text verbatim (`"1.0"` stays `"1.0"`), `value`
/// is its integer interpretation used by the arithmetic operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub token: String,
    pub value: BigInt,
}

impl Cell {
    pub fn new(token: impl Into<String>, value: impl Into<BigInt>) -> Self {
        Self {
            token: token.into(),
            value: value.into(),
        }
    }
}

/// A matrix that passed every validation check.
///
/// Only built by [`crate::validation::validate`] or by transforms that keep
/// the matrix square, so every row has exactly `dimension()` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedMatrix {
    rows: Vec<Vec<Cell>>,
}

impl ValidatedMatrix {
    pub(crate) fn from_square_rows(rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == rows.len()));
        Self { rows }
    }

    /// Number of rows (equal to the number of columns).
    pub fn dimension(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Original tokens, row by row.
    pub fn tokens(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.token.clone()).collect())
            .collect()
    }
}

// =============================================================================
// Operation Result
// =============================================================================

/// Output of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationResult {
    /// Rows of tokens (echo, invert, flatten).
    Matrix(Vec<Vec<String>>),
    /// Single integer (sum, multiply).
    Scalar(BigInt),
}

impl OperationResult {
    /// Render as response text.
    ///
    /// Matrices: cells joined by `,`, rows joined by `\n`, trailing `\n`.
    /// Scalars: decimal digits, no trailing newline.
    pub fn render(&self) -> String {
        match self {
            OperationResult::Matrix(rows) => {
                let mut out = String::new();
                for row in rows {
                    out.push_str(&row.join(","));
                    out.push('\n');
                }
                out
            }
            OperationResult::Scalar(value) => value.to_string(),
        }
    }
}

impl fmt::Display for OperationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ValidatedMatrix {
        ValidatedMatrix::from_square_rows(vec![
            vec![Cell::new("1", 1), Cell::new("2.0", 2)],
            vec![Cell::new("3", 3), Cell::new("-4", -4)],
        ])
    }

    #[test]
    fn test_cells_row_major() {
        let matrix = sample();
        let values: Vec<i64> = vec![1, 2, 3, -4];
        let cells: Vec<BigInt> = matrix.cells().map(|c| c.value.clone()).collect();
        assert_eq!(cells, values.into_iter().map(BigInt::from).collect::<Vec<_>>());
        assert_eq!(matrix.dimension(), 2);
    }

    #[test]
    fn test_tokens_keep_original_text() {
        let tokens = sample().tokens();
        assert_eq!(tokens, vec![vec!["1", "2.0"], vec!["3", "-4"]]);
    }

    #[test]
    fn test_render_matrix() {
        let result = OperationResult::Matrix(vec![
            vec!["1".into(), "2".into()],
            vec!["3".into(), "4".into()],
        ]);
        assert_eq!(result.render(), "1,2\n3,4\n");
        assert_eq!(result.to_string(), "1,2\n3,4\n");
    }

    #[test]
    fn test_render_scalar() {
        assert_eq!(OperationResult::Scalar(BigInt::from(45)).render(), "45");
        assert_eq!(OperationResult::Scalar(BigInt::from(-7)).render(), "-7");
    }
}
