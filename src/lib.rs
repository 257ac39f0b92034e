//! __graphform__ is a solver for graph-form convex optimization problems
//!
//! $$
//! \begin{array}{rl}
//! \text{minimize} & f(y) + g(x)\\\\\[1ex\]
//!  \text{subject to} & y = Ax
//!  \end{array}
//! $$
//!
//! where $f$ and $g$ are separable sums of simple scalar convex functions
//! applied elementwise, i.e. $f(y) = \sum_i f_i(y_i)$ and
//! $g(x) = \sum_j g_j(x_j)$, and $A$ is a fixed dense or sparse linear
//! operator.  Each scalar term is drawn from a closed catalogue of convex
//! kernels (square loss, absolute value, huber, indicator constraints, ...)
//! with affine reparameterization, which covers lasso, robust regression,
//! box-constrained least squares, and similar problems.
//!
//! The solver is an ADMM splitting method: it alternates elementwise
//! proximal updates of $f$ and $g$ with a projection onto the graph
//! $\\{(x,y) : y = Ax\\}$ computed through a cached direct factorization.
//! The factorization is reused across repeated solves against the same
//! operator, which makes parameter sweeps (e.g. a lasso regularization
//! path with warm starts) cheap after the first solve.
//!
//! All floating point computation is generic over [`FloatT`](crate::algebra::FloatT),
//! implemented for `f32` and `f64`.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod prox;
pub mod solver;
pub mod timers;
