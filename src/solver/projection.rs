#![allow(non_snake_case)]
use crate::algebra::*;

/// Cached direct method for the graph projection
///
/// ```text
/// minimize ‖x − cx‖² + ρ‖y − cy‖²   s.t.  y = A·x
/// ```
///
/// whose normal equations are `(I + ρAᵀA)·x = cx + ρAᵀcy`, `y = Ax`.
///
/// The dense gram matrix of the smaller dimension is formed once per
/// operator and cached; only the Cholesky factor depends on ρ and is
/// rebuilt when the committed penalty moves.  For wide operators
/// (n > m) the solve goes through the matrix inversion lemma against
/// `(1/ρ)I + AAᵀ`, so the factored system is always `min(m, n)` square.
pub(crate) struct DirectProjector<T> {
    side: GramSide,
    gram: Option<DenseMatrix<T>>,
    factor: Option<CholeskyFactor<T>>,
    rho_factor: T,
    work_m: Vec<T>,
}

impl<T: FloatT> DirectProjector<T> {
    pub fn new(m: usize, n: usize) -> Self {
        let side = if n <= m {
            GramSide::Normal
        } else {
            GramSide::Transpose
        };
        Self {
            side,
            gram: None,
            factor: None,
            rho_factor: T::nan(),
            work_m: vec![T::zero(); m],
        }
    }

    pub fn is_allocated(&self) -> bool {
        self.factor.is_some()
    }

    /// Form the gram matrix if not already cached and factor at the
    /// given penalty.
    pub fn allocate(
        &mut self,
        A: &LinearOperator<T>,
        rho: T,
    ) -> Result<(), FactorizationError> {
        if self.gram.is_none() {
            self.gram = Some(A.gram(self.side));
        }
        self.refresh(rho)
    }

    /// Refactor from the cached gram at a new penalty.  The gram is
    /// reused untouched.
    pub fn refresh(&mut self, rho: T) -> Result<(), FactorizationError> {
        let gram = self.gram.as_ref().ok_or(FactorizationError::IncompatibleDimension)?;

        let mut K = gram.clone();
        match self.side {
            // K = I + ρ·AᵀA
            GramSide::Normal => {
                K.data.scale(rho);
                for i in 0..K.n {
                    let kii = K.get(i, i) + T::one();
                    K.set_entry(i, i, kii);
                }
            }
            // K = (1/ρ)·I + AAᵀ
            GramSide::Transpose => {
                for i in 0..K.n {
                    let kii = K.get(i, i) + rho.recip();
                    K.set_entry(i, i, kii);
                }
            }
        }

        match self.factor.as_mut() {
            Some(factor) => factor.refactor(&K)?,
            None => self.factor = Some(CholeskyFactor::new(&K)?),
        }
        self.rho_factor = rho;
        Ok(())
    }

    /// Drop the factor and the cached gram.
    pub fn release(&mut self) {
        self.gram = None;
        self.factor = None;
        self.rho_factor = T::nan();
    }

    /// The penalty baked into the current factor.
    pub fn rho(&self) -> T {
        self.rho_factor
    }

    /// Project `(cx, cy)` onto the graph `y = Ax`, writing into
    /// `x` and `y`.  Requires an allocated factor.
    pub fn project(
        &mut self,
        A: &LinearOperator<T>,
        x: &mut [T],
        y: &mut [T],
        cx: &[T],
        cy: &[T],
    ) {
        let factor = self.factor.as_ref().unwrap();
        let rho = self.rho_factor;

        // rhs b = cx + ρ·Aᵀcy
        x.copy_from(cx);
        A.gemv(MatrixShape::T, x, cy, rho, T::one());

        match self.side {
            GramSide::Normal => {
                factor.solve(x);
            }
            GramSide::Transpose => {
                // x = b − Aᵀ·(K⁻¹·(A·b))
                A.gemv(MatrixShape::N, &mut self.work_m, x, T::one(), T::zero());
                factor.solve(&mut self.work_m);
                A.gemv(MatrixShape::T, x, &self.work_m, -T::one(), T::one());
            }
        }

        A.gemv(MatrixShape::N, y, x, T::one(), T::zero());
    }
}
