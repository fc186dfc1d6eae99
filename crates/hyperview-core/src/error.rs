use thiserror::Error;

/// All errors returned by `hyperview-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Operand shapes do not match the required layout, or a value list does
    /// not fill whole rows.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// A `(row, column)` index lies outside the matrix.
    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },

    /// A vector-only operation was invoked on a matrix of the wrong shape,
    /// or on a vector that is too short.
    #[error("invalid operation: {reason}")]
    InvalidOperation { reason: &'static str },

    /// An argument is outside the range the operation accepts.
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    /// LU factorization hit a zero pivot.
    #[error("singular matrix")]
    SingularMatrix,

    /// QR factorization found a zero on the diagonal of `R`.
    #[error("matrix is rank deficient")]
    RankDeficient,
}

/// Convenience alias used throughout `hyperview-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
