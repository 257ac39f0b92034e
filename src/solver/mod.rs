//! The ADMM solver itself: settings, problem data, equilibration,
//! the cached graph projection and the iteration engine.

mod equilibration;
mod errors;
mod info;
#[cfg(feature = "serde")]
mod json;
mod problem;
mod projection;
mod settings;
mod solution;
#[allow(clippy::module_inception)]
mod solver;
mod variables;

pub use equilibration::EquilibrationData;
pub use errors::*;
pub use info::*;
pub use problem::*;
pub use settings::*;
pub use solution::*;
pub use solver::*;
pub use variables::Variables;
