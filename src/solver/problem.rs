#![allow(non_snake_case)]
use crate::algebra::*;
use crate::prox::*;
use crate::solver::equilibration::{self, EquilibrationData};
use crate::solver::{ConfigError, DataUpdateError, Settings};
use itertools::izip;

/// Internal problem data: the (possibly equilibrated) operator copy
/// and the objective terms rescaled to match it.
///
/// The operator passed by the caller is borrowed read-only at
/// construction; the solver iterates on its own scaled copy so the
/// caller's data is never mutated.  Objective terms absorb the
/// scalings through their `a` parameter, which keeps function values
/// at scaled iterates equal to the true objective at unscaled ones.
pub struct ProblemData<T: FloatT> {
    pub A: LinearOperator<T>,
    pub f: Vec<ProxFn<T>>,
    pub g: Vec<ProxFn<T>>,
    pub equilibration: EquilibrationData<T>,
    pub m: usize,
    pub n: usize,
}

impl<T: FloatT> ProblemData<T> {
    pub fn new(
        A: &LinearOperator<T>,
        f: &[ProxFn<T>],
        g: &[ProxFn<T>],
        settings: &Settings<T>,
    ) -> Result<Self, ConfigError> {
        let (m, n) = (A.nrows(), A.ncols());

        if n == 0 {
            return Err(ConfigError::EmptyOperator);
        }
        if !A.is_finite() {
            return Err(ConfigError::NonFiniteOperator);
        }
        validate_terms(f, m).map_err(ConfigError::BadObjectiveF)?;
        validate_terms(g, n).map_err(ConfigError::BadObjectiveG)?;

        let mut A = A.clone();
        let mut equilibration = EquilibrationData::new(m, n);
        if settings.equilibrate_enable {
            equilibration::equilibrate(&mut A, &mut equilibration, settings);
        }

        let mut problem = Self {
            A,
            f: Vec::with_capacity(m),
            g: Vec::with_capacity(n),
            equilibration,
            m,
            n,
        };
        problem.rescale_f(f);
        problem.rescale_g(g);
        Ok(problem)
    }

    // the scaled operator is E·A·D, so f sees ŷ = E·y and g sees
    // x̂ = D⁻¹·x.  Folding e⁻¹ and d into each term's scale keeps the
    // scaled problem equivalent to the original.
    fn rescale_f(&mut self, raw: &[ProxFn<T>]) {
        self.f.clear();
        for (term, &einv) in izip!(raw, &self.equilibration.einv) {
            let mut t = *term;
            t.a *= einv;
            self.f.push(t);
        }
    }

    fn rescale_g(&mut self, raw: &[ProxFn<T>]) {
        self.g.clear();
        for (term, &d) in izip!(raw, &self.equilibration.d) {
            let mut t = *term;
            t.a *= d;
            self.g.push(t);
        }
    }

    /// Replace the objective terms for f.  The operator and its
    /// factorization are untouched.
    pub fn update_f(&mut self, f: &[ProxFn<T>]) -> Result<(), DataUpdateError> {
        validate_terms(f, self.m).map_err(DataUpdateError::BadObjectiveF)?;
        self.rescale_f(f);
        Ok(())
    }

    /// Replace the objective terms for g.
    pub fn update_g(&mut self, g: &[ProxFn<T>]) -> Result<(), DataUpdateError> {
        validate_terms(g, self.n).map_err(DataUpdateError::BadObjectiveG)?;
        self.rescale_g(g);
        Ok(())
    }

    /// Set a uniform weight on every g term, as in a regularization
    /// path sweep.  Weights are unaffected by equilibration so this
    /// writes through to the scaled terms directly.
    pub fn scale_g_weights(&mut self, c: T) -> Result<(), DataUpdateError> {
        if !(c >= T::zero() && c.is_finite()) {
            return Err(DataUpdateError::BadWeight);
        }
        for term in self.g.iter_mut() {
            term.c = c;
        }
        Ok(())
    }

    /// True objective `Σf(y) + Σg(x)` evaluated at scaled iterates.
    pub fn objective(&self, x: &[T], y: &[T]) -> T {
        eval_all(&self.f, y) + eval_all(&self.g, x)
    }
}
