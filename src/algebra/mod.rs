//! Vector and matrix algebra for the solver's internal math.
//!
//! All numeric work in the crate goes through the traits defined here,
//! implemented generically for floats satisfying [`FloatT`].

mod cholesky;
mod dense;
mod error_types;
mod floats;
mod math_traits;
mod matrix_types;
mod operator;
mod reductions;
mod sparse;
mod vecmath;

pub use cholesky::*;
pub use dense::*;
pub use error_types::*;
pub use floats::*;
pub use math_traits::*;
pub use matrix_types::*;
pub use operator::*;
pub use reductions::*;
pub use sparse::*;

//configure tests of internals
#[cfg(test)]
mod tests;
