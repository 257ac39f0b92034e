#![allow(non_snake_case)]
use crate::algebra::*;
use crate::prox::*;
use crate::solver::projection::DirectProjector;
use crate::solver::variables::Residuals;
use crate::solver::{
    ConfigError, DataUpdateError, ProblemData, Settings, SolveInfo, Solution, SolverStatus,
    Variables,
};
use crate::timers::*;
use std::time::Instant;

/// Graph form ADMM solver for `minimize f(Ax) + g(x)` with separable
/// f and g.
///
/// A solver instance owns its problem data, iterates and cached
/// factorization, so it is `Send` but deliberately not shareable: one
/// solve at a time per instance, with independent instances free to
/// run in parallel.
///
/// ```
/// use graphform::prox::{Kernel, ProxFn};
/// use graphform::solver::{Settings, Solver};
/// use graphform::algebra::{DenseMatrix, LinearOperator, MatrixLayout};
///
/// // minimize ½‖x − 1‖² over the 2x2 identity
/// let A: LinearOperator<f64> = DenseMatrix::identity(2).into();
/// let f = vec![ProxFn::new(Kernel::Square).with_offset(1.0); 2];
/// let g = vec![ProxFn::new(Kernel::Zero); 2];
///
/// let mut solver = Solver::new(&A, &f, &g, Settings::default()).unwrap();
/// solver.solve();
/// assert!(solver.solution.status.is_solved());
/// ```
pub struct Solver<T: FloatT = f64> {
    pub problem: ProblemData<T>,
    pub variables: Variables<T>,
    pub info: SolveInfo<T>,
    pub solution: Solution<T>,
    pub settings: Settings<T>,
    pub timers: Timers,
    projector: DirectProjector<T>,
    residuals: Residuals<T>,
    rho: T,
    rho_pending: T,
    rho_updates: u32,
}

impl<T: FloatT> Solver<T> {
    /// Validate and take an internal copy of the problem
    /// `minimize Σᵢ fᵢ((Ax)ᵢ) + Σⱼ gⱼ(xⱼ)`, with one f term per row
    /// and one g term per column.
    pub fn new(
        A: &LinearOperator<T>,
        f: &[ProxFn<T>],
        g: &[ProxFn<T>],
        settings: Settings<T>,
    ) -> Result<Self, ConfigError> {
        settings.validate()?;
        let problem = ProblemData::new(A, f, g, &settings)?;
        let (m, n) = (problem.m, problem.n);
        let rho = settings.rho;

        Ok(Self {
            problem,
            variables: Variables::new(m, n),
            info: SolveInfo::default(),
            solution: Solution::new(m, n),
            settings,
            timers: Timers::default(),
            projector: DirectProjector::new(m, n),
            residuals: Residuals::new(m, n),
            rho,
            rho_pending: rho,
            rho_updates: 0,
        })
    }

    /// Build and cache the projection factorization ahead of the
    /// first solve.  Optional; `solve()` allocates lazily when this
    /// was not called.  The cache survives across solves and
    /// parametric updates until [`Solver::release_factors`].
    pub fn allocate_factors(&mut self) -> Result<(), FactorizationError> {
        self.projector.allocate(&self.problem.A, self.rho)
    }

    /// Free the cached gram matrix and factorization.
    pub fn release_factors(&mut self) {
        self.projector.release();
    }

    /// Replace the f objective terms between solves.  The operator and
    /// factorization cache are untouched.
    pub fn update_f(&mut self, f: &[ProxFn<T>]) -> Result<(), DataUpdateError> {
        self.problem.update_f(f)
    }

    /// Replace the g objective terms between solves.
    pub fn update_g(&mut self, g: &[ProxFn<T>]) -> Result<(), DataUpdateError> {
        self.problem.update_g(g)
    }

    /// Set a uniform weight on every g term (a regularization path
    /// step).
    pub fn scale_g_weights(&mut self, c: T) -> Result<(), DataUpdateError> {
        self.problem.scale_g_weights(c)
    }

    /// Run the ADMM iteration to a terminal status.  Always returns
    /// with `self.solution` fully written; numerical trouble is
    /// reported through [`SolverStatus`], never as a panic or `Err`.
    pub fn solve(&mut self) {
        let start = Instant::now();
        let mut timers = std::mem::take(&mut self.timers);
        timers.reset();

        timeit! {timers => "solve"; {
            self.prepare(&mut timers);

            timers.start_as_current("factorization");
            let factored = self.refresh_factors();
            timers.stop_current();

            match factored {
                Ok(()) => {
                    timeit! {timers => "iteration"; {
                        self.iterate(&start);
                    }}
                }
                Err(_) => self.info.status = SolverStatus::NumericalError,
            }
        }}

        self.info.solve_time = start.elapsed().as_secs_f64();
        self.solution
            .finalize(&self.variables, &self.problem, &self.info);
        self.info.print_footer(&self.settings);
        self.timers = timers;
    }

    fn prepare(&mut self, timers: &mut Timers) {
        self.info.reset();
        if !self.settings.warm_start {
            self.variables.reset();
            self.residuals.reset();
            self.rho = self.settings.rho;
        }
        self.rho_pending = self.rho;
        self.rho_updates = 0;
        self.info.rho = self.rho;

        notimeit! {timers; {
            self.info.print_banner(&self.settings, &self.problem);
        }}
    }

    // allocate lazily, or refactor when the committed penalty moved
    // past the one baked into the cached factor
    fn refresh_factors(&mut self) -> Result<(), FactorizationError> {
        if !self.projector.is_allocated() {
            self.projector.allocate(&self.problem.A, self.rho)
        } else if self.projector.rho() != self.rho {
            self.projector.refresh(self.rho)
        } else {
            Ok(())
        }
    }

    fn iterate(&mut self, start: &Instant) {
        let one = T::one();
        let alpha = self.settings.relaxation;
        let mut status = SolverStatus::MaxIterations;

        for iter in 1..=self.settings.max_iter {
            let rho = self.rho;
            let problem = &self.problem;
            let v = &mut self.variables;

            // proximal half step at the dual shifted points
            v.cx.waxpby(one, &v.x, -one, &v.xt);
            v.cy.waxpby(one, &v.y, -one, &v.yt);
            prox_all(&problem.g, &mut v.xh, &v.cx, one);
            prox_all(&problem.f, &mut v.yh, &v.cy, rho);

            // over-relaxed projection input
            v.cx.waxpby(alpha, &v.xh, one - alpha, &v.x);
            v.cx.axpby(one, &v.xt, one);
            v.cy.waxpby(alpha, &v.yh, one - alpha, &v.y);
            v.cy.axpby(one, &v.yt, one);

            // graph projection through the cached factorization
            self.projector
                .project(&problem.A, &mut v.x, &mut v.y, &v.cx, &v.cy);

            // dual update with the projection mismatch
            v.xt.waxpby(one, &v.cx, -one, &v.x);
            v.yt.waxpby(one, &v.cy, -one, &v.y);

            self.residuals.update(&problem.A, v, rho, &self.settings);

            self.info.iterations = iter;
            self.info.rho = rho;
            self.info.obj_val = problem.objective(&v.xh, &v.yh);
            self.info.save_residuals(&self.residuals);
            self.info.print_status(&self.settings, &self.residuals);

            if !self.residuals.is_finite() || !self.variables.is_finite() {
                status = SolverStatus::NumericalError;
                break;
            }
            if self.residuals.converged() {
                status = SolverStatus::Solved;
                break;
            }
            if start.elapsed().as_secs_f64() > self.settings.time_limit {
                break;
            }

            if self.settings.adaptive_rho_enable
                && self.rho_updates < self.settings.adaptive_rho_max_updates
                && self.adapt_rho().is_err()
            {
                status = SolverStatus::NumericalError;
                break;
            }
        }

        self.info.status = status;
    }

    // Scale the pending penalty whenever one residual dominates the
    // other, but only commit (rescale duals, refactor) once the
    // pending value has drifted far enough from the committed one.
    fn adapt_rho(&mut self) -> Result<(), FactorizationError> {
        let settings = &self.settings;
        let res = &self.residuals;

        let nr_prim = res.r_prim / T::max(res.eps_prim, T::epsilon());
        let nr_dual = res.r_dual / T::max(res.eps_dual, T::epsilon());

        if nr_prim > settings.adaptive_rho_ratio * nr_dual {
            self.rho_pending *= settings.adaptive_rho_scaling;
        } else if nr_dual > settings.adaptive_rho_ratio * nr_prim {
            self.rho_pending /= settings.adaptive_rho_scaling;
        } else {
            return Ok(());
        }

        let drift = self.rho_pending / self.rho;
        if drift >= settings.adaptive_rho_drift || drift <= settings.adaptive_rho_drift.recip() {
            // ν = ρ·yt stays continuous across the commit
            self.variables.yt.scale(self.rho / self.rho_pending);
            self.rho = self.rho_pending;
            self.rho_updates += 1;
            self.projector.refresh(self.rho)?;
        }
        Ok(())
    }
}
