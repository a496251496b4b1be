//! Operations a client can request on a validated matrix.
//!
//! Each operation is exposed as one HTTP route and one CLI value.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::matrix::{flatten, product, sum};
use crate::models::{OperationResult, ValidatedMatrix};

/// All available matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Return the matrix unchanged
    Echo,

    /// Transpose rows and columns
    Invert,

    /// All elements on a single row
    Flatten,

    /// Sum of all elements
    Sum,

    /// Product of all elements
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Echo,
        Operation::Invert,
        Operation::Flatten,
        Operation::Sum,
        Operation::Multiply,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Echo => "echo",
            Operation::Invert => "invert",
            Operation::Flatten => "flatten",
            Operation::Sum => "sum",
            Operation::Multiply => "multiply",
        }
    }

    /// HTTP route serving this operation.
    pub fn path(&self) -> &'static str {
        match self {
            Operation::Echo => "/echo",
            Operation::Invert => "/invert",
            Operation::Flatten => "/flatten",
            Operation::Sum => "/sum",
            Operation::Multiply => "/multiply",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Operation::Echo => "Return the matrix exactly as uploaded",
            Operation::Invert => "Return the transposed matrix",
            Operation::Flatten => "Return all elements on one row, row-major order",
            Operation::Sum => "Return the sum of all elements",
            Operation::Multiply => "Return the product of all elements",
        }
    }

    /// Apply the operation.
    ///
    /// Matrix-shaped results reuse the original tokens; scalars are computed
    /// from the integer values.
    pub fn apply(&self, matrix: &ValidatedMatrix) -> OperationResult {
        match self {
            Operation::Echo => OperationResult::Matrix(matrix.tokens()),
            Operation::Invert => OperationResult::Matrix(matrix.transpose().tokens()),
            Operation::Flatten => OperationResult::Matrix(flatten(&matrix.tokens())),
            Operation::Sum => OperationResult::Scalar(sum(matrix)),
            Operation::Multiply => OperationResult::Scalar(product(matrix)),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('/');
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unknown operation: {}", s))
    }
}

/// Human-readable catalogue of operations and their routes.
pub fn operations_description() -> String {
    let mut out = String::from(
        "Available matrix operations (POST multipart/form-data, field \"file\", *.csv):\n\n\
         | Route | Description |\n\
         |-------|-------------|\n",
    );
    for op in Operation::ALL {
        out.push_str(&format!("| {} | {} |\n", op.path(), op.description()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_matrix;
    use crate::validation::validate;

    fn sample() -> ValidatedMatrix {
        validate(parse_matrix("1,2,3\n4,5,6\n7,8,9")).unwrap()
    }

    #[test]
    fn test_apply_all_operations() {
        let m = sample();
        assert_eq!(Operation::Echo.apply(&m).render(), "1,2,3\n4,5,6\n7,8,9\n");
        assert_eq!(Operation::Invert.apply(&m).render(), "1,4,7\n2,5,8\n3,6,9\n");
        assert_eq!(Operation::Flatten.apply(&m).render(), "1,2,3,4,5,6,7,8,9\n");
        assert_eq!(Operation::Sum.apply(&m).render(), "45");
        assert_eq!(Operation::Multiply.apply(&m).render(), "362880");
    }

    #[test]
    fn test_echo_preserves_formatting() {
        let m = validate(parse_matrix("1.0,+2\n3,4")).unwrap();
        assert_eq!(Operation::Echo.apply(&m).render(), "1.0,+2\n3,4\n");
        assert_eq!(Operation::Sum.apply(&m).render(), "10");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("sum".parse::<Operation>(), Ok(Operation::Sum));
        assert_eq!("/invert".parse::<Operation>(), Ok(Operation::Invert));
        assert_eq!("MULTIPLY".parse::<Operation>(), Ok(Operation::Multiply));
        assert!("divide".parse::<Operation>().is_err());
    }

    #[test]
    fn test_paths_match_names() {
        for op in Operation::ALL {
            assert_eq!(op.path(), format!("/{}", op));
        }
    }

    #[test]
    fn test_description_lists_every_route() {
        let text = operations_description();
        for op in Operation::ALL {
            assert!(text.contains(op.path()));
        }
    }
}
