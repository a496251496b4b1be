//! Pure matrix transforms.
//!
//! Grid-shaped transforms are generic over the cell type so they work on
//! validated cells and plain tokens alike.

use num_bigint::BigInt;

use crate::models::ValidatedMatrix;

/// `output[i][j] = input[j][i]`.
///
/// Expects a square grid.
pub fn transpose<T: Clone>(grid: &[Vec<T>]) -> Vec<Vec<T>> {
    let dimension = grid.len();
    (0..dimension)
        .map(|row| (0..dimension).map(|col| grid[col][row].clone()).collect())
        .collect()
}

/// All cells in row-major order, as a single row.
pub fn flatten<T: Clone>(grid: &[Vec<T>]) -> Vec<Vec<T>> {
    vec![grid.iter().flatten().cloned().collect()]
}

/// Sum of every element.
pub fn sum(matrix: &ValidatedMatrix) -> BigInt {
    matrix
        .cells()
        .fold(BigInt::from(0), |total, cell| total + &cell.value)
}

/// Product of every element.
pub fn product(matrix: &ValidatedMatrix) -> BigInt {
    matrix
        .cells()
        .fold(BigInt::from(1), |total, cell| total * &cell.value)
}

impl ValidatedMatrix {
    /// Transposed copy; cells keep their original tokens.
    pub fn transpose(&self) -> ValidatedMatrix {
        ValidatedMatrix::from_square_rows(transpose(self.rows()))
    }
}
