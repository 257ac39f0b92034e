//! Proximal function library.
//!
//! A separable objective term is a [`ProxFn`]: a scalar convex kernel
//! from the closed [`Kernel`] catalogue together with an affine
//! reparameterization `c·h(a·x − b)` and optional interval bounds for
//! the indicator kernel.  Every kernel evaluates its proximal operator
//! in closed form (or a short guarded Newton iteration for the
//! exponential), so the elementwise prox pass in the solver is a single
//! branch-predictable dispatch per entry.

mod function;
mod kernels;

pub use function::*;
pub use kernels::*;
