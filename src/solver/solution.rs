use crate::algebra::*;
use crate::solver::{ProblemData, SolveInfo, SolverStatus, Variables};

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Result of a solve, in the caller's original scaling.
///
/// Written in full at the end of every `solve()` call regardless of
/// how it terminated, so `x`/`y` always hold the best available
/// iterate even on `MaxIterations` or `NumericalError`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
pub struct Solution<T> {
    pub x: Vec<T>,
    pub y: Vec<T>,
    pub obj_val: T,
    pub iterations: u32,
    pub status: SolverStatus,
    pub r_prim: T,
    pub r_dual: T,
    pub solve_time: f64,
}

impl<T: FloatT> Solution<T> {
    pub(crate) fn new(m: usize, n: usize) -> Self {
        Self {
            x: vec![T::zero(); n],
            y: vec![T::zero(); m],
            obj_val: T::nan(),
            iterations: 0,
            status: SolverStatus::Unsolved,
            r_prim: T::infinity(),
            r_dual: T::infinity(),
            solve_time: 0.,
        }
    }

    /// Unscale the half-iterates through the equilibration diagonals
    /// (`x = D·x̂`, `y = E⁻¹·ŷ`) and copy over the solve statistics.
    pub(crate) fn finalize(
        &mut self,
        variables: &Variables<T>,
        problem: &ProblemData<T>,
        info: &SolveInfo<T>,
    ) {
        let eq = &problem.equilibration;
        self.x.copy_from(&variables.xh).hadamard(&eq.d);
        self.y.copy_from(&variables.yh).hadamard(&eq.einv);

        self.obj_val = info.obj_val;
        self.iterations = info.iterations;
        self.status = info.status;
        self.r_prim = info.r_prim;
        self.r_dual = info.r_dual;
        self.solve_time = info.solve_time;
    }
}
