use thiserror::Error;

/// Error type returned by matrix assembly operations.
#[derive(Error, Debug)]
pub enum MatrixFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// An index value exceeds the matrix dimension on the minor axis
    #[error("Index value exceeds the matrix minor dimension")]
    BadIndex,
    /// Pointer array is not monotonic starting from zero
    #[error("Bad row/column pointer values")]
    BadPointers,
}

/// Error type returned by the dense Cholesky factorization.
#[derive(Error, Debug)]
pub enum FactorizationError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    /// A non-positive pivot was encountered at the given column
    #[error("Cholesky breakdown: non-positive pivot at column {0}")]
    NotPositiveDefinite(usize),
}
