use crate::algebra::*;
use crate::solver::variables::Residuals;
use crate::solver::{ProblemData, Settings};
use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terminal (and pre-terminal) solver states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SolverStatus {
    /// Problem is not solved (solver hasn't run, or is mid-solve)
    #[default]
    Unsolved,
    /// Solved to the configured tolerances
    Solved,
    /// Iteration or time limit reached before convergence
    MaxIterations,
    /// Solve terminated on non-finite iterates or a factorization breakdown
    NumericalError,
}

impl SolverStatus {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolverStatus::Solved)
    }
}

impl Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Progress of the most recent solve.
#[derive(Debug, Clone)]
pub struct SolveInfo<T> {
    pub iterations: u32,
    pub obj_val: T,
    pub r_prim: T,
    pub r_dual: T,
    pub rho: T,
    pub status: SolverStatus,
    pub solve_time: f64,
}

impl<T: FloatT> Default for SolveInfo<T> {
    fn default() -> Self {
        Self {
            iterations: 0,
            obj_val: T::nan(),
            r_prim: T::infinity(),
            r_dual: T::infinity(),
            rho: T::nan(),
            status: SolverStatus::Unsolved,
            solve_time: 0.,
        }
    }
}

impl<T: FloatT> SolveInfo<T> {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn save_residuals(&mut self, residuals: &Residuals<T>) {
        self.r_prim = residuals.r_prim;
        self.r_dual = residuals.r_dual;
    }

    pub(crate) fn print_banner(&self, settings: &Settings<T>, problem: &ProblemData<T>) {
        if !settings.verbose {
            return;
        }
        println!("-------------------------------------------------------------");
        println!(
            "      graphform v{}  -  graph form ADMM solver",
            crate::VERSION
        );
        println!("-------------------------------------------------------------");
        println!(
            "problem:  rows (m) = {}, cols (n) = {}, nnz = {}",
            problem.m,
            problem.n,
            problem.A.nnz()
        );
        println!(
            "settings: rho = {:.1e}, relaxation = {}, tol_abs = {:.1e}, tol_rel = {:.1e},",
            settings.rho, settings.relaxation, settings.tol_abs, settings.tol_rel
        );
        println!(
            "          max_iter = {}, equilibrate = {}, adaptive_rho = {}",
            settings.max_iter, settings.equilibrate_enable, settings.adaptive_rho_enable
        );
        println!();
        println!("iter      objective     r_prim      eps_prim    r_dual      eps_dual    rho");
        println!("-------------------------------------------------------------------------------");
    }

    pub(crate) fn print_status(&self, settings: &Settings<T>, residuals: &Residuals<T>) {
        if !settings.verbose {
            return;
        }
        println!(
            "{:>5}  {:>12.4e}  {:>10.2e}  {:>10.2e}  {:>10.2e}  {:>10.2e}  {:>8.2e}",
            self.iterations,
            self.obj_val,
            residuals.r_prim,
            residuals.eps_prim,
            residuals.r_dual,
            residuals.eps_dual,
            self.rho
        );
    }

    pub(crate) fn print_footer(&self, settings: &Settings<T>) {
        if !settings.verbose {
            return;
        }
        println!("-------------------------------------------------------------------------------");
        println!(
            "status = {}, iterations = {}, objective = {:.6e}",
            self.status, self.iterations, self.obj_val
        );
        println!("solve time = {:.2e}s", self.solve_time);
        println!();
    }
}
