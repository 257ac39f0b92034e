use crate::algebra::*;

/// Closed catalogue of scalar convex kernels `h`.
///
/// Each kernel comes with a closed form proximal operator.  The
/// exponential is the one exception and uses a guarded Newton
/// iteration on its optimality condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kernel {
    /// `h(z) = 0`
    Zero,
    /// `h(z) = |z|`
    Abs,
    /// `h(z) = z²/2`
    Square,
    /// `h(z) = eᶻ`
    Exp,
    /// `h(z) = z²/2` for `|z| ≤ 1`, `|z| − 1/2` otherwise
    Huber,
    /// `h(z) = −ln z`
    NegLog,
    /// `h(z) = max(z, 0)`
    MaxPos,
    /// indicator of `z ∈ [lower, upper]`
    IndBox,
    /// indicator of `z = 0`
    IndEq0,
    /// indicator of `z ≥ 0`
    IndGe0,
    /// indicator of `z ≤ 0`
    IndLe0,
}

impl Kernel {
    /// `argmin_z h(z) + (ρ/2)(z − v)²` for the unit kernel.  The
    /// interval bounds are only consulted by [`Kernel::IndBox`].
    pub(crate) fn prox_unit<T: FloatT>(&self, v: T, rho: T, lower: T, upper: T) -> T {
        match self {
            Kernel::Zero => v,
            Kernel::Abs => {
                let k = rho.recip();
                if v > k {
                    v - k
                } else if v < -k {
                    v + k
                } else {
                    T::zero()
                }
            }
            Kernel::Square => v * rho / (rho + T::one()),
            Kernel::Exp => prox_exp(v, rho),
            Kernel::Huber => {
                let k = rho.recip();
                if v.abs() <= T::one() + k {
                    v * rho / (rho + T::one())
                } else {
                    v - v.signum() * k
                }
            }
            Kernel::NegLog => {
                let four: T = (4.0).as_T();
                (v + T::sqrt(v * v + four / rho)) / (2.0).as_T()
            }
            Kernel::MaxPos => {
                let k = rho.recip();
                if v < T::zero() {
                    v
                } else if v > k {
                    v - k
                } else {
                    T::zero()
                }
            }
            Kernel::IndBox => T::min(T::max(v, lower), upper),
            Kernel::IndEq0 => T::zero(),
            Kernel::IndGe0 => T::max(v, T::zero()),
            Kernel::IndLe0 => T::min(v, T::zero()),
        }
    }

    /// `h(z)` for the unit kernel.  Indicators evaluate to zero since
    /// the solver only evaluates them at points produced by their own
    /// proximal operator.
    pub(crate) fn eval_unit<T: FloatT>(&self, z: T) -> T {
        match self {
            Kernel::Zero => T::zero(),
            Kernel::Abs => z.abs(),
            Kernel::Square => z * z / (2.0).as_T(),
            Kernel::Exp => z.exp(),
            Kernel::Huber => {
                let half: T = (0.5).as_T();
                if z.abs() <= T::one() {
                    z * z * half
                } else {
                    z.abs() - half
                }
            }
            Kernel::NegLog => {
                if z > T::zero() {
                    -z.ln()
                } else {
                    T::infinity()
                }
            }
            Kernel::MaxPos => T::max(z, T::zero()),
            Kernel::IndBox | Kernel::IndEq0 | Kernel::IndGe0 | Kernel::IndLe0 => T::zero(),
        }
    }
}

// Newton iteration on φ(z) = eᶻ + ρ(z − v), which is strictly
// increasing with the unique root at the prox point.  Starting from
// min(v, 1) keeps every iterate on the concave side of the root so the
// iteration is monotone.
fn prox_exp<T: FloatT>(v: T, rho: T) -> T {
    let mut z = T::min(v, T::one());
    let tol = T::epsilon() * (10.0).as_T();
    for _ in 0..100 {
        let ez = z.exp();
        let step = (ez + rho * (z - v)) / (ez + rho);
        z -= step;
        if step.abs() <= tol * T::max(T::one(), z.abs()) {
            break;
        }
    }
    z
}
