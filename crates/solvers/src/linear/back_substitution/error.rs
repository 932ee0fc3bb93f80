use thiserror::Error;

/// Errors that can occur during back-substitution.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("diagonal entry a[{row}, {row}] is zero, division impossible")]
    SingularMatrix { row: usize },

    #[error("matrix is not square: {rows} rows, {cols} columns")]
    NotSquare { rows: usize, cols: usize },

    #[error("right-hand side has length {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}
