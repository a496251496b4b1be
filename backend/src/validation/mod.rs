//! Matrix validation.
//!
//! Three checks run in a fixed order and the first failure is returned:
//!
//! 1. every token is an integer-valued number (scanned row-major)
//! 2. every row has as many tokens as row 0
//! 3. row count equals column count
//!
//! # Integer rule
//!
//! A token is integer-valued when, ignoring surrounding whitespace, it is
//! either a plain integer (`"7"`, `"-3"`, `"+4"`, arbitrarily long) or a
//! finite decimal/scientific number without fractional part (`"1.0"`,
//! `"1e3"`), parsed exactly. `"1.2"`, `""`, `"abc"`, `"inf"` and `"nan"` are
//! rejected, as are exponents beyond `1e308`.
//!
//! # Example
//!
//! ```
//! use csv_matrix::{parse_matrix, validate, MatrixError};
//!
//! let matrix = validate(parse_matrix("1,2\n3,4")).unwrap();
//! assert_eq!(matrix.dimension(), 2);
//!
//! let err = validate(parse_matrix("1,2,3\n4,5,6")).unwrap_err();
//! assert_eq!(err, MatrixError::NonSquare { rows: 2, cols: 3 });
//! ```

use bigdecimal::BigDecimal;
use num_bigint::BigInt;

use crate::error::MatrixError;
use crate::models::{Cell, RawMatrix, ValidatedMatrix};

/// Largest power of ten an exponent may scale a token by, either way.
const MAX_EXPONENT: i64 = 308;

/// Interpret a token as an integer, if it is integer-valued.
///
/// Decimal and scientific forms are parsed exactly, so `"99999999999999999999.0"`
/// keeps every digit.
pub fn parse_integer(token: &str) -> Option<BigInt> {
    let trimmed = token.trim();
    if let Ok(value) = trimmed.parse::<BigInt>() {
        return Some(value);
    }

    let decimal = trimmed.parse::<BigDecimal>().ok()?;
    let (_, scale) = decimal.as_bigint_and_exponent();
    if scale < -MAX_EXPONENT || scale > trimmed.len() as i64 + MAX_EXPONENT {
        return None;
    }
    if !decimal.is_integer() {
        return None;
    }
    Some(decimal.with_scale(0).into_bigint_and_exponent().0)
}

/// Validate a raw grid and convert it into a [`ValidatedMatrix`].
pub fn validate(raw: RawMatrix) -> Result<ValidatedMatrix, MatrixError> {
    if raw.is_empty() {
        return Err(MatrixError::NonIntegerElement {
            row: 0,
            col: 0,
            value: String::new(),
        });
    }

    // 1. Elements
    let mut rows = Vec::with_capacity(raw.len());
    for (row, tokens) in raw.into_iter().enumerate() {
        let mut cells = Vec::with_capacity(tokens.len());
        for (col, token) in tokens.into_iter().enumerate() {
            match parse_integer(&token) {
                Some(value) => cells.push(Cell { token, value }),
                None => {
                    return Err(MatrixError::NonIntegerElement {
                        row,
                        col,
                        value: token,
                    })
                }
            }
        }
        rows.push(cells);
    }

    // 2. Column uniformity
    let num_cols = rows[0].len();
    if rows.iter().any(|row| row.len() != num_cols) {
        return Err(MatrixError::UnequalColumns);
    }

    // 3. Squareness
    let num_rows = rows.len();
    if num_rows != num_cols {
        return Err(MatrixError::NonSquare {
            rows: num_rows,
            cols: num_cols,
        });
    }

    Ok(ValidatedMatrix::from_square_rows(rows))
}
