//! Errors raised by the linear algebra routines.

use thiserror::Error;

/// Failure of a linear algebra operation.
///
/// Every routine in [crate::linalg] reports precondition violations through this type; none of
/// them return a partial matrix or a `NaN` determinant in place of an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Incompatible dimensions: LHS has {lhs_cols} columns but RHS has {rhs_rows} rows")]
    IncompatibleDimensions { lhs_cols: usize, rhs_rows: usize },

    #[error("Singular matrix: no usable pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error("Matrix must be square, got {rows} x {cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("RHS must have {expected} rows to match the LHS, got {got}")]
    RowMismatch { expected: usize, got: usize },

    #[error("Row {row} has length {got}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Matrix contains a non-finite value")]
    NonFinite,

    /// Finite inputs produced a determinant or solution outside the range of f64.
    #[error("Result overflowed the range of f64")]
    Overflow,

    #[error("Pivot tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
}
