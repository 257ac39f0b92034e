use super::Kernel;
use crate::algebra::*;
use thiserror::Error;

/// Reasons a separable objective description is rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxFnError {
    #[error("expected {expected} objective terms but {actual} were supplied")]
    WrongCount { expected: usize, actual: usize },
    #[error("term {0} has a negative weight")]
    NegativeWeight(usize),
    #[error("term {0} has a zero scale")]
    ZeroScale(usize),
    #[error("term {0} has a non-finite parameter")]
    NonFiniteParameter(usize),
    #[error("term {0} has lower bound above its upper bound")]
    InvalidBounds(usize),
}

/// One separable objective term `c·h(a·x − b)`, with `h` drawn from the
/// [`Kernel`] catalogue and interval bounds for [`Kernel::IndBox`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProxFn<T = f64> {
    pub kernel: Kernel,
    pub a: T,
    pub b: T,
    pub c: T,
    pub lower: T,
    pub upper: T,
}

impl<T: FloatT> Default for ProxFn<T> {
    fn default() -> Self {
        Self::new(Kernel::Zero)
    }
}

impl<T: FloatT> ProxFn<T> {
    /// A plain kernel term `h(x)`, i.e. `a = c = 1` and `b = 0`.
    pub fn new(kernel: Kernel) -> Self {
        Self {
            kernel,
            a: T::one(),
            b: T::zero(),
            c: T::one(),
            lower: T::neg_infinity(),
            upper: T::infinity(),
        }
    }

    pub fn with_scale(mut self, a: T) -> Self {
        self.a = a;
        self
    }

    pub fn with_offset(mut self, b: T) -> Self {
        self.b = b;
        self
    }

    pub fn with_weight(mut self, c: T) -> Self {
        self.c = c;
        self
    }

    /// Interval for the [`Kernel::IndBox`] kernel, applied to the
    /// kernel argument `a·x − b`.
    pub fn with_bounds(mut self, lower: T, upper: T) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// `argmin_x c·h(a·x − b) + (ρ/2)(x − v)²`.
    ///
    /// The affine parameters fold into the unit kernel prox through
    /// the change of variable `z = a·x − b`, which rescales the
    /// penalty to `ρ/(c·a²)`.  A zero weight degenerates to the
    /// identity map.
    pub fn prox(&self, v: T, rho: T) -> T {
        if self.c == T::zero() {
            return v;
        }
        let rho_k = rho / (self.c * self.a * self.a);
        let z = self
            .kernel
            .prox_unit(self.a * v - self.b, rho_k, self.lower, self.upper);
        (z + self.b) / self.a
    }

    /// `c·h(a·x − b)`.
    pub fn eval(&self, x: T) -> T {
        self.c * self.kernel.eval_unit(self.a * x - self.b)
    }

    fn validate(&self, index: usize) -> Result<(), ProxFnError> {
        if !(self.a.is_finite() && self.b.is_finite() && self.c.is_finite()) {
            return Err(ProxFnError::NonFiniteParameter(index));
        }
        if self.c < T::zero() {
            return Err(ProxFnError::NegativeWeight(index));
        }
        if self.a == T::zero() {
            return Err(ProxFnError::ZeroScale(index));
        }
        if !(self.lower <= self.upper) {
            return Err(ProxFnError::InvalidBounds(index));
        }
        Ok(())
    }
}

/// Check a full objective description against its expected dimension.
pub fn validate_terms<T: FloatT>(
    terms: &[ProxFn<T>],
    expected: usize,
) -> Result<(), ProxFnError> {
    if terms.len() != expected {
        return Err(ProxFnError::WrongCount {
            expected,
            actual: terms.len(),
        });
    }
    for (i, term) in terms.iter().enumerate() {
        term.validate(i)?;
    }
    Ok(())
}

/// Elementwise proximal pass `out[i] = prox_{terms[i]}(v[i], ρ)`.
pub fn prox_all<T: FloatT>(terms: &[ProxFn<T>], out: &mut [T], v: &[T], rho: T) {
    debug_assert_eq!(terms.len(), out.len());
    debug_assert_eq!(terms.len(), v.len());
    map_indexed(out, |i| terms[i].prox(v[i], rho));
}

/// Objective value `Σᵢ cᵢ·hᵢ(aᵢ·x[i] − bᵢ)`.
pub fn eval_all<T: FloatT>(terms: &[ProxFn<T>], x: &[T]) -> T {
    debug_assert_eq!(terms.len(), x.len());
    reduce_sum(terms.len(), |i| terms[i].eval(x[i]))
}
