#![allow(non_snake_case)]
use super::*;

/// Sparse matrix in compressed row (CSR) or compressed column (CSC)
/// storage.
///
/// The `ptr` field has length `major + 1` where `major` is `m` for CSR
/// and `n` for CSC.  `ptr` must be monotonic with `ptr[0] == 0` and
/// `ptr[major] == nnz`, and every entry of `idx` must be a valid index
/// on the minor axis.  Indices within a major slice are not required to
/// be sorted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressedMatrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// major axis pointer array
    pub ptr: Vec<usize>,
    /// minor axis indices
    pub idx: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
    /// compression axis
    pub format: CompressedFormat,
}

impl<T> CompressedMatrix<T>
where
    T: FloatT,
{
    /// Construct from raw compressed arrays, validating the storage
    /// invariants.
    pub fn new(
        m: usize,
        n: usize,
        ptr: Vec<usize>,
        idx: Vec<usize>,
        nzval: Vec<T>,
        format: CompressedFormat,
    ) -> Result<Self, MatrixFormatError> {
        let (major, minor) = match format {
            CompressedFormat::Csr => (m, n),
            CompressedFormat::Csc => (n, m),
        };

        if ptr.len() != major + 1 || idx.len() != nzval.len() {
            return Err(MatrixFormatError::IncompatibleDimension);
        }
        if ptr[0] != 0 || *ptr.last().unwrap() != nzval.len() {
            return Err(MatrixFormatError::BadPointers);
        }
        if ptr.windows(2).any(|w| w[0] > w[1]) {
            return Err(MatrixFormatError::BadPointers);
        }
        if idx.iter().any(|&i| i >= minor) {
            return Err(MatrixFormatError::BadIndex);
        }

        Ok(Self {
            m,
            n,
            ptr,
            idx,
            nzval,
            format,
        })
    }

    /// number of structural nonzeros
    pub fn nnz(&self) -> usize {
        self.nzval.len()
    }

    // length of the major (compressed) axis
    fn major_dim(&self) -> usize {
        match self.format {
            CompressedFormat::Csr => self.m,
            CompressedFormat::Csc => self.n,
        }
    }

    fn minor_dim(&self) -> usize {
        match self.format {
            CompressedFormat::Csr => self.n,
            CompressedFormat::Csc => self.m,
        }
    }

    // y += a * M * x where M maps minor -> major (i.e. gather
    // along each major slice)
    fn gather_mv(&self, y: &mut [T], x: &[T], a: T) {
        for s in 0..self.major_dim() {
            let rng = self.ptr[s]..self.ptr[s + 1];
            let mut acc = T::zero();
            for k in rng {
                acc += self.nzval[k] * x[self.idx[k]];
            }
            y[s] += a * acc;
        }
    }

    // y += a * M * x where M maps major -> minor (i.e. scatter
    // each major slice)
    fn scatter_mv(&self, y: &mut [T], x: &[T], a: T) {
        for s in 0..self.major_dim() {
            let rng = self.ptr[s]..self.ptr[s + 1];
            let xs = a * x[s];
            for k in rng {
                y[self.idx[k]] += self.nzval[k] * xs;
            }
        }
    }

    pub(crate) fn gemv_shaped(&self, shape: MatrixShape, y: &mut [T], x: &[T], a: T, b: T) {
        let (rows, cols) = match shape {
            MatrixShape::N => (self.m, self.n),
            MatrixShape::T => (self.n, self.m),
        };
        assert_eq!(x.len(), cols);
        assert_eq!(y.len(), rows);

        y.scale(b);

        // a CSR matrix gathers on N and scatters on T;
        // a CSC matrix is the mirror image
        let gather = match (self.format, shape) {
            (CompressedFormat::Csr, MatrixShape::N) => true,
            (CompressedFormat::Csr, MatrixShape::T) => false,
            (CompressedFormat::Csc, MatrixShape::N) => false,
            (CompressedFormat::Csc, MatrixShape::T) => true,
        };

        if gather {
            self.gather_mv(y, x, a);
        } else {
            self.scatter_mv(y, x, a);
        }
    }

    // infinity norms along the major axis
    fn major_norms(&self, norms: &mut [T]) {
        norms.set(T::zero());
        for s in 0..self.major_dim() {
            for k in self.ptr[s]..self.ptr[s + 1] {
                norms[s] = T::max(norms[s], T::abs(self.nzval[k]));
            }
        }
    }

    // infinity norms along the minor axis
    fn minor_norms(&self, norms: &mut [T]) {
        norms.set(T::zero());
        for (&i, &v) in std::iter::zip(&self.idx, &self.nzval) {
            norms[i] = T::max(norms[i], T::abs(v));
        }
    }

    pub(crate) fn row_norms_inf(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.m);
        match self.format {
            CompressedFormat::Csr => self.major_norms(norms),
            CompressedFormat::Csc => self.minor_norms(norms),
        }
    }

    pub(crate) fn col_norms_inf(&self, norms: &mut [T]) {
        assert_eq!(norms.len(), self.n);
        match self.format {
            CompressedFormat::Csr => self.minor_norms(norms),
            CompressedFormat::Csc => self.major_norms(norms),
        }
    }

    // scale entries by d indexed on the major axis
    fn major_scale(&mut self, d: &[T]) {
        for s in 0..self.major_dim() {
            for k in self.ptr[s]..self.ptr[s + 1] {
                self.nzval[k] *= d[s];
            }
        }
    }

    // scale entries by d indexed on the minor axis
    fn minor_scale(&mut self, d: &[T]) {
        for (&i, v) in std::iter::zip(&self.idx, &mut self.nzval) {
            *v *= d[i];
        }
    }

    /// Left multiply in place by `Diagonal(l)`
    pub(crate) fn lscale_diag(&mut self, l: &[T]) {
        assert_eq!(l.len(), self.m);
        match self.format {
            CompressedFormat::Csr => self.major_scale(l),
            CompressedFormat::Csc => self.minor_scale(l),
        }
    }

    /// Right multiply in place by `Diagonal(r)`
    pub(crate) fn rscale_diag(&mut self, r: &[T]) {
        assert_eq!(r.len(), self.n);
        match self.format {
            CompressedFormat::Csr => self.minor_scale(r),
            CompressedFormat::Csc => self.major_scale(r),
        }
    }

    // minor-by-minor gram from pairwise products within each
    // major slice.  CSR: AᵀA.  CSC: AAᵀ.
    fn pair_gram(&self) -> DenseMatrix<T> {
        let dim = self.minor_dim();
        let mut out = DenseMatrix::zeros(dim, dim);
        for s in 0..self.major_dim() {
            let rng = self.ptr[s]..self.ptr[s + 1];
            for k in rng.clone() {
                let (ik, vk) = (self.idx[k], self.nzval[k]);
                for l in rng.clone() {
                    let idx = out.index(ik, self.idx[l]);
                    out.data[idx] += vk * self.nzval[l];
                }
            }
        }
        out
    }

    // major-by-major gram from sparse dot products of major slices,
    // using a dense scatter workspace.  CSR: AAᵀ.  CSC: AᵀA.
    fn dot_gram(&self) -> DenseMatrix<T> {
        let dim = self.major_dim();
        let mut out = DenseMatrix::zeros(dim, dim);
        let mut work = vec![T::zero(); self.minor_dim()];

        for s1 in 0..dim {
            let rng1 = self.ptr[s1]..self.ptr[s1 + 1];
            for k in rng1.clone() {
                work[self.idx[k]] = self.nzval[k];
            }
            for s2 in 0..=s1 {
                let mut acc = T::zero();
                for k in self.ptr[s2]..self.ptr[s2 + 1] {
                    acc += self.nzval[k] * work[self.idx[k]];
                }
                out.set_entry(s1, s2, acc);
                out.set_entry(s2, s1, acc);
            }
            for k in rng1 {
                work[self.idx[k]] = T::zero();
            }
        }
        out
    }

    /// Form the gram product `AᵀA` (Normal) or `AAᵀ` (Transpose) as a
    /// full symmetric dense matrix.
    pub(crate) fn gram_product(&self, side: GramSide) -> DenseMatrix<T> {
        match (self.format, side) {
            (CompressedFormat::Csr, GramSide::Normal) => self.pair_gram(),
            (CompressedFormat::Csr, GramSide::Transpose) => self.dot_gram(),
            (CompressedFormat::Csc, GramSide::Normal) => self.dot_gram(),
            (CompressedFormat::Csc, GramSide::Transpose) => self.pair_gram(),
        }
    }
}
