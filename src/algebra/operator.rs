#![allow(non_snake_case)]
use super::*;
use enum_dispatch::*;

/// Operations required of a linear operator by the solver.
///
/// Both concrete representations implement this capability set, and no
/// other component of the solver depends on the storage format.
#[enum_dispatch]
pub trait MatrixOp<T>
where
    T: FloatT,
{
    /// number of rows
    fn nrows(&self) -> usize;

    /// number of columns
    fn ncols(&self) -> usize;

    /// number of stored entries
    fn nnz(&self) -> usize;

    /// BLAS-like matrix-vector multiply, `y = a * op(A) * x + b * y`
    /// with `op` selected by `shape`.
    ///
    /// Dimension mismatch is a caller bug and panics.
    fn gemv(&self, shape: MatrixShape, y: &mut [T], x: &[T], a: T, b: T);

    /// rowwise infinity norms
    fn row_norms(&self, norms: &mut [T]);

    /// columnwise infinity norms
    fn col_norms(&self, norms: &mut [T]);

    /// left multiply in place by `Diagonal(l)`
    fn lscale(&mut self, l: &[T]);

    /// right multiply in place by `Diagonal(r)`
    fn rscale(&mut self, r: &[T]);

    /// dense gram product `AᵀA` or `AAᵀ`
    fn gram(&self, side: GramSide) -> DenseMatrix<T>;

    /// true if all stored entries are finite
    fn is_finite(&self) -> bool;
}

/// A linear operator in one of the four supported representations:
/// dense row/column major, or compressed sparse row/column.
///
/// The operator is immutable for the duration of a solve; the solver
/// takes an internal copy at setup and attaches its equilibration
/// scalings to that copy only.
#[enum_dispatch(MatrixOp<T>)]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinearOperator<T: FloatT = f64> {
    /// dense storage, row or column major
    Dense(DenseMatrix<T>),
    /// compressed sparse storage, by rows or columns
    Sparse(CompressedMatrix<T>),
}

impl<T> MatrixOp<T> for DenseMatrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn nnz(&self) -> usize {
        self.m * self.n
    }
    fn gemv(&self, shape: MatrixShape, y: &mut [T], x: &[T], a: T, b: T) {
        self.gemv_shaped(shape, y, x, a, b);
    }
    fn row_norms(&self, norms: &mut [T]) {
        self.row_norms_inf(norms);
    }
    fn col_norms(&self, norms: &mut [T]) {
        self.col_norms_inf(norms);
    }
    fn lscale(&mut self, l: &[T]) {
        self.lscale_diag(l);
    }
    fn rscale(&mut self, r: &[T]) {
        self.rscale_diag(r);
    }
    fn gram(&self, side: GramSide) -> DenseMatrix<T> {
        self.gram_product(side)
    }
    fn is_finite(&self) -> bool {
        self.data.is_finite()
    }
}

impl<T> MatrixOp<T> for CompressedMatrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.m
    }
    fn ncols(&self) -> usize {
        self.n
    }
    fn nnz(&self) -> usize {
        self.nzval.len()
    }
    fn gemv(&self, shape: MatrixShape, y: &mut [T], x: &[T], a: T, b: T) {
        self.gemv_shaped(shape, y, x, a, b);
    }
    fn row_norms(&self, norms: &mut [T]) {
        self.row_norms_inf(norms);
    }
    fn col_norms(&self, norms: &mut [T]) {
        self.col_norms_inf(norms);
    }
    fn lscale(&mut self, l: &[T]) {
        self.lscale_diag(l);
    }
    fn rscale(&mut self, r: &[T]) {
        self.rscale_diag(r);
    }
    fn gram(&self, side: GramSide) -> DenseMatrix<T> {
        self.gram_product(side)
    }
    fn is_finite(&self) -> bool {
        self.nzval.is_finite()
    }
}
