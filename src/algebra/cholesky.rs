#![allow(non_snake_case)]
use super::*;

/// Dense Cholesky factorization `A = L Lᵀ` of a symmetric positive
/// definite matrix, with in-place triangular solves.
///
/// The factor is recomputable from a new matrix of the same dimension
/// without reallocation, which is what the projection cache relies on
/// when the penalty parameter changes.
#[derive(Debug, Clone)]
pub struct CholeskyFactor<T = f64> {
    n: usize,
    // lower triangular factor, column major, upper part unused
    L: Vec<T>,
}

impl<T> CholeskyFactor<T>
where
    T: FloatT,
{
    /// Factor a symmetric positive definite matrix.  Only the lower
    /// triangle of `A` is referenced.
    pub fn new(A: &DenseMatrix<T>) -> Result<Self, FactorizationError> {
        let mut out = Self {
            n: A.n,
            L: vec![T::zero(); A.n * A.n],
        };
        out.refactor(A)?;
        Ok(out)
    }

    /// dimension of the factored matrix
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn idx(&self, i: usize, j: usize) -> usize {
        j * self.n + i
    }

    /// Recompute the factor from a new matrix of the same dimension.
    pub fn refactor(&mut self, A: &DenseMatrix<T>) -> Result<(), FactorizationError> {
        if A.m != self.n || A.n != self.n {
            return Err(FactorizationError::IncompatibleDimension);
        }
        let n = self.n;

        for j in 0..n {
            // diagonal pivot
            let mut djj = A.get(j, j);
            for k in 0..j {
                let ljk = self.L[self.idx(j, k)];
                djj -= ljk * ljk;
            }
            if !(djj > T::zero()) || !djj.is_finite() {
                return Err(FactorizationError::NotPositiveDefinite(j));
            }
            let ljj = T::sqrt(djj);
            let jj = self.idx(j, j);
            self.L[jj] = ljj;

            // subdiagonal column
            for i in (j + 1)..n {
                let mut lij = A.get(i, j);
                for k in 0..j {
                    lij -= self.L[self.idx(i, k)] * self.L[self.idx(j, k)];
                }
                let ij = self.idx(i, j);
                self.L[ij] = lij / ljj;
            }
        }
        Ok(())
    }

    /// Solve `A x = b` in place, overwriting `b` with the solution.
    pub fn solve(&self, b: &mut [T]) {
        assert_eq!(b.len(), self.n);
        let n = self.n;

        // forward substitution, L z = b
        for i in 0..n {
            let mut acc = b[i];
            for k in 0..i {
                acc -= self.L[self.idx(i, k)] * b[k];
            }
            b[i] = acc / self.L[self.idx(i, i)];
        }

        // back substitution, Lᵀ x = z
        for i in (0..n).rev() {
            let mut acc = b[i];
            for k in (i + 1)..n {
                acc -= self.L[self.idx(k, i)] * b[k];
            }
            b[i] = acc / self.L[self.idx(i, i)];
        }
    }
}
