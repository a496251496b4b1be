//! Splits uploaded CSV text into a grid of raw tokens.
//!
//! Deliberately permissive: no trimming, no quote handling, no numeric
//! conversion. Whatever the client sent is kept so validation errors can
//! quote it back verbatim.

use crate::error::MatrixError;
use crate::models::RawMatrix;

/// Decode upload bytes as UTF-8.
pub fn decode_content(bytes: &[u8]) -> Result<&str, MatrixError> {
    std::str::from_utf8(bytes).map_err(|_| MatrixError::InvalidEncoding)
}

/// Split text into rows on `\n`, then each row into tokens on `,`.
///
/// A trailing newline produces a trailing row holding one empty token, and
/// empty input produces a single row with one empty token.
///
/// # Example
/// ```
/// use csv_matrix::parse_matrix;
///
/// let grid = parse_matrix("1,2\n3,4");
/// assert_eq!(grid, vec![vec!["1", "2"], vec!["3", "4"]]);
/// ```
pub fn parse_matrix(content: &str) -> RawMatrix {
    content
        .split('\n')
        .map(|line| line.split(',').map(str::to_string).collect())
        .collect()
}

/// Decode and split in one step.
pub fn parse_bytes(bytes: &[u8]) -> Result<RawMatrix, MatrixError> {
    decode_content(bytes).map(parse_matrix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_grid() {
        let grid = parse_matrix("1,2,3\n4,5,6\n7,8,9");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[1], vec!["4", "5", "6"]);
    }

    #[test]
    fn test_trailing_newline_adds_empty_row() {
        let grid = parse_matrix("1,2\n3,4\n");
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[2], vec![""]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_matrix(""), vec![vec![""]]);
    }

    #[test]
    fn test_whitespace_preserved() {
        let grid = parse_matrix(" 1, 2\r\n3 ,4");
        assert_eq!(grid[0], vec![" 1", " 2\r"]);
        assert_eq!(grid[1], vec!["3 ", "4"]);
    }

    #[test]
    fn test_quotes_not_interpreted() {
        let grid = parse_matrix("\"1,2\",3");
        assert_eq!(grid[0], vec!["\"1", "2\"", "3"]);
    }

    #[test]
    fn test_invalid_utf8() {
        let bytes: &[u8] = &[0x31, 0x2C, 0xFF, 0xFE];
        assert_eq!(parse_bytes(bytes), Err(MatrixError::InvalidEncoding));
    }

    #[test]
    fn test_parse_bytes_utf8() {
        let grid = parse_bytes("1,2\n3,4".as_bytes()).unwrap();
        assert_eq!(grid, vec![vec!["1", "2"], vec!["3", "4"]]);
    }
}
