use crate::prox::ProxFnError;
use thiserror::Error;

/// Bad user settings.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Bad value for field \"{0}\"")]
    BadFieldValue(&'static str),
}

/// Problem construction failures.  These fail fast from
/// [`Solver::new`](crate::solver::Solver::new) and are never retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("operator has no columns")]
    EmptyOperator,
    #[error("operator contains non-finite entries")]
    NonFiniteOperator,
    #[error("invalid objective for f: {0}")]
    BadObjectiveF(ProxFnError),
    #[error("invalid objective for g: {0}")]
    BadObjectiveG(ProxFnError),
    #[error(transparent)]
    BadSettings(#[from] SettingsError),
}

/// Parametric update failures.  A rejected update leaves the solver
/// state untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataUpdateError {
    #[error("invalid objective for f: {0}")]
    BadObjectiveF(ProxFnError),
    #[error("invalid objective for g: {0}")]
    BadObjectiveG(ProxFnError),
    #[error("weight must be nonnegative and finite")]
    BadWeight,
}
