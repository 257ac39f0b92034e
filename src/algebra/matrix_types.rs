// Common marker types shared by the dense and compressed
// matrix representations.

/// Matrix orientation marker
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    /// Normal matrix orientation
    N,
    /// Transposed matrix orientation
    T,
}

/// Storage order marker for dense matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixLayout {
    /// Row major storage
    RowMajor,
    /// Column major storage
    ColMajor,
}

/// Compression axis marker for sparse matrices
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompressedFormat {
    /// Compressed sparse row storage
    Csr,
    /// Compressed sparse column storage
    Csc,
}

/// Side marker selecting which gram product of an operator to form
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum GramSide {
    /// The n-by-n product AᵀA
    Normal,
    /// The m-by-m product AAᵀ
    Transpose,
}
