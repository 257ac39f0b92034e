#![allow(non_snake_case)]
use super::*;

/// Dense matrix in row or column major storage.
///
/// The `data` field holds `m * n` entries in the order given
/// by `layout`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DenseMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// matrix entries in `layout` order
    pub data: Vec<T>,
    /// storage order
    pub layout: MatrixLayout,
}

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    /// Construct from a data vector of length `m * n`.
    pub fn new(
        m: usize,
        n: usize,
        data: Vec<T>,
        layout: MatrixLayout,
    ) -> Result<Self, MatrixFormatError> {
        if data.len() != m * n {
            return Err(MatrixFormatError::IncompatibleDimension);
        }
        Ok(Self { m, n, data, layout })
    }

    /// An all-zeros matrix in column major order.
    pub fn zeros(m: usize, n: usize) -> Self {
        Self {
            m,
            n,
            data: vec![T::zero(); m * n],
            layout: MatrixLayout::ColMajor,
        }
    }

    /// The identity, in column major order.
    pub fn identity(n: usize) -> Self {
        let mut out = Self::zeros(n, n);
        for i in 0..n {
            let idx = out.index(i, i);
            out.data[idx] = T::one();
        }
        out
    }

    #[inline]
    pub(crate) fn index(&self, i: usize, j: usize) -> usize {
        match self.layout {
            MatrixLayout::RowMajor => i * self.n + j,
            MatrixLayout::ColMajor => j * self.m + i,
        }
    }

    /// Element access.  Used by tests and equilibration checks; the
    /// hot paths all go through `gemv`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[self.index(i, j)]
    }

    #[inline]
    pub(crate) fn set_entry(&mut self, i: usize, j: usize, v: T) {
        let idx = self.index(i, j);
        self.data[idx] = v;
    }

    pub(crate) fn gemv_shaped(&self, shape: MatrixShape, y: &mut [T], x: &[T], a: T, b: T) {
        let (rows, cols) = match shape {
            MatrixShape::N => (self.m, self.n),
            MatrixShape::T => (self.n, self.m),
        };
        assert_eq!(x.len(), cols);
        assert_eq!(y.len(), rows);

        y.scale(b);

        for r in 0..rows {
            let mut acc = T::zero();
            for c in 0..cols {
                let v = match shape {
                    MatrixShape::N => self.get(r, c),
                    MatrixShape::T => self.get(c, r),
                };
                acc += v * x[c];
            }
            y[r] += a * acc;
        }
    }

    pub(crate) fn row_norms_inf(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.m);
        norms.set(T::zero());
        for i in 0..self.m {
            for j in 0..self.n {
                norms[i] = T::max(norms[i], T::abs(self.get(i, j)));
            }
        }
    }

    pub(crate) fn col_norms_inf(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.n);
        norms.set(T::zero());
        for j in 0..self.n {
            for i in 0..self.m {
                norms[j] = T::max(norms[j], T::abs(self.get(i, j)));
            }
        }
    }

    /// Left multiply in place by `Diagonal(l)`
    pub(crate) fn lscale_diag(&mut self, l: &[T]) {
        assert_eq!(l.len(), self.m);
        for i in 0..self.m {
            for j in 0..self.n {
                let idx = self.index(i, j);
                self.data[idx] *= l[i];
            }
        }
    }

    /// Right multiply in place by `Diagonal(r)`
    pub(crate) fn rscale_diag(&mut self, r: &[T]) {
        assert_eq!(r.len(), self.n);
        for i in 0..self.m {
            for j in 0..self.n {
                let idx = self.index(i, j);
                self.data[idx] *= r[j];
            }
        }
    }

    /// Form the gram product `AᵀA` (Normal) or `AAᵀ` (Transpose) as a
    /// full symmetric dense matrix.
    pub(crate) fn gram_product(&self, side: GramSide) -> DenseMatrix<T> {
        let dim = match side {
            GramSide::Normal => self.n,
            GramSide::Transpose => self.m,
        };
        let inner = match side {
            GramSide::Normal => self.m,
            GramSide::Transpose => self.n,
        };
        let mut out = DenseMatrix::zeros(dim, dim);
        for r in 0..dim {
            for c in 0..=r {
                let mut acc = T::zero();
                for k in 0..inner {
                    let (u, v) = match side {
                        GramSide::Normal => (self.get(k, r), self.get(k, c)),
                        GramSide::Transpose => (self.get(r, k), self.get(c, k)),
                    };
                    acc += u * v;
                }
                out.set_entry(r, c, acc);
                out.set_entry(c, r, acc);
            }
        }
        out
    }
}
