#![allow(non_snake_case)]
use crate::algebra::*;
use crate::solver::Settings;

/// Iterates of the ADMM engine, all in the equilibrated space.
///
/// `x`/`y` are the projected (graph feasible) pair, `xt`/`yt` the
/// scaled duals, and `xh`/`yh` the proximal half-iterates that are
/// reported as the solution.  `cx`/`cy` hold the over-relaxed
/// projection inputs between steps.  The struct persists across
/// `solve()` calls so a warm start is simply not resetting it.
#[derive(Debug, Clone)]
pub struct Variables<T> {
    pub x: Vec<T>,
    pub y: Vec<T>,
    pub xt: Vec<T>,
    pub yt: Vec<T>,
    pub xh: Vec<T>,
    pub yh: Vec<T>,
    pub(crate) cx: Vec<T>,
    pub(crate) cy: Vec<T>,
}

impl<T: FloatT> Variables<T> {
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            y: vec![T::zero(); m],
            xt: vec![T::zero(); n],
            yt: vec![T::zero(); m],
            xh: vec![T::zero(); n],
            yh: vec![T::zero(); m],
            cx: vec![T::zero(); n],
            cy: vec![T::zero(); m],
        }
    }

    /// Cold start.
    pub fn reset(&mut self) {
        self.x.set(T::zero());
        self.y.set(T::zero());
        self.xt.set(T::zero());
        self.yt.set(T::zero());
        self.xh.set(T::zero());
        self.yh.set(T::zero());
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.xt.is_finite() && self.yt.is_finite()
    }
}

/// Residual bookkeeping for the convergence test.
///
/// The dual residual compares `Aᵀν` between consecutive iterations
/// with `ν = ρ·yt`, so the previous product is cached here rather than
/// recomputed.
pub(crate) struct Residuals<T> {
    pub r_prim: T,
    pub r_dual: T,
    pub eps_prim: T,
    pub eps_dual: T,
    atnu: Vec<T>,
    atnu_prev: Vec<T>,
    work_m: Vec<T>,
    work_n: Vec<T>,
}

impl<T: FloatT> Residuals<T> {
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            r_prim: T::infinity(),
            r_dual: T::infinity(),
            eps_prim: T::zero(),
            eps_dual: T::zero(),
            atnu: vec![T::zero(); n],
            atnu_prev: vec![T::zero(); n],
            work_m: vec![T::zero(); m],
            work_n: vec![T::zero(); n],
        }
    }

    pub fn reset(&mut self) {
        self.r_prim = T::infinity();
        self.r_dual = T::infinity();
        self.atnu_prev.set(T::zero());
    }

    /// Compute `r_prim = ‖A·x½ − y½‖`, `r_dual = ‖Aᵀ(ν − ν_prev)‖` and
    /// the mixed absolute/relative tolerances they are tested against.
    pub fn update(
        &mut self,
        A: &LinearOperator<T>,
        variables: &Variables<T>,
        rho: T,
        settings: &Settings<T>,
    ) {
        // primal: A·x½ against y½, scaled by the larger of the two
        A.gemv(MatrixShape::N, &mut self.work_m, &variables.xh, T::one(), T::zero());
        let scale_prim = T::max(self.work_m.norm(), variables.yh.norm());
        self.work_m.axpby(-T::one(), &variables.yh, T::one());
        self.r_prim = self.work_m.norm();
        self.eps_prim = T::max(settings.tol_abs, settings.tol_rel * scale_prim);

        // dual: change in Aᵀν across iterations, scaled by ‖Aᵀν‖
        A.gemv(MatrixShape::T, &mut self.atnu, &variables.yt, rho, T::zero());
        let scale_dual = self.atnu.norm();
        self.work_n.waxpby(T::one(), &self.atnu, -T::one(), &self.atnu_prev);
        self.r_dual = self.work_n.norm();
        self.atnu_prev.copy_from(&self.atnu);
        self.eps_dual = T::max(settings.tol_abs, settings.tol_rel * scale_dual);
    }

    pub fn is_finite(&self) -> bool {
        self.r_prim.is_finite() && self.r_dual.is_finite()
    }

    pub fn converged(&self) -> bool {
        self.r_prim <= self.eps_prim && self.r_dual <= self.eps_dual
    }
}
