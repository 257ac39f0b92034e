use crate::algebra::*;
use crate::solver::SettingsError;
use derive_builder::Builder;

#[cfg(feature = "serde")]
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Solver settings.
///
/// Defaults are provided through [`SettingsBuilder`], so partial
/// configuration reads as
/// ```
/// use graphform::solver::SettingsBuilder;
/// let settings = SettingsBuilder::<f64>::default()
///     .max_iter(5000)
///     .verbose(true)
///     .build()
///     .unwrap();
/// ```
#[derive(Builder, Debug, Clone)]
#[builder(build_fn(validate = "Self::validate"))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: Serialize + DeserializeOwned"))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings<T: FloatT> {
    ///maximum number of iterations
    #[builder(default = "2500")]
    pub max_iter: u32,

    ///maximum run time (seconds)
    #[builder(default = "f64::INFINITY")]
    pub time_limit: f64,

    ///verbose printing
    #[builder(default = "false")]
    pub verbose: bool,

    ///reuse the previous solution and duals as the starting point
    #[builder(default = "false")]
    pub warm_start: bool,

    ///over-relaxation parameter α ∈ (0, 2)
    #[builder(default = "(1.5).as_T()")]
    pub relaxation: T,

    ///initial ADMM penalty parameter
    #[builder(default = "T::one()")]
    pub rho: T,

    ///absolute convergence tolerance
    #[builder(default = "(1e-4).as_T()")]
    pub tol_abs: T,

    ///relative convergence tolerance
    #[builder(default = "(1e-3).as_T()")]
    pub tol_rel: T,

    ///enable data equilibration pre-scaling
    #[builder(default = "true")]
    pub equilibrate_enable: bool,

    ///maximum equilibration scaling iterations
    #[builder(default = "10")]
    pub equilibrate_max_iter: u32,

    ///minimum equilibration scaling allowed
    #[builder(default = "(1e-4).as_T()")]
    pub equilibrate_min_scaling: T,

    ///maximum equilibration scaling allowed
    #[builder(default = "(1e+4).as_T()")]
    pub equilibrate_max_scaling: T,

    ///enable adaptive rescaling of the penalty parameter
    #[builder(default = "true")]
    pub adaptive_rho_enable: bool,

    ///residual imbalance ratio that triggers a penalty adjustment
    #[builder(default = "(10.0).as_T()")]
    pub adaptive_rho_ratio: T,

    ///multiplicative step applied to the pending penalty
    #[builder(default = "(2.0).as_T()")]
    pub adaptive_rho_scaling: T,

    ///pending/committed penalty ratio past which the factorization
    ///is refreshed at the new penalty
    #[builder(default = "(2.0).as_T()")]
    pub adaptive_rho_drift: T,

    ///maximum number of committed penalty updates per solve
    #[builder(default = "20")]
    pub adaptive_rho_max_updates: u32,
}

impl<T: FloatT> Default for Settings<T> {
    fn default() -> Settings<T> {
        SettingsBuilder::<T>::default().build().unwrap()
    }
}

impl<T: FloatT> Settings<T> {
    /// Sanity check numerical field values.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let zero = T::zero();
        let one = T::one();
        let two: T = (2.0).as_T();

        if !(self.relaxation > zero && self.relaxation < two) {
            return Err(SettingsError::BadFieldValue("relaxation"));
        }
        if !(self.rho > zero && self.rho.is_finite()) {
            return Err(SettingsError::BadFieldValue("rho"));
        }
        if !(self.tol_abs >= zero && self.tol_rel >= zero) {
            return Err(SettingsError::BadFieldValue("tol_abs/tol_rel"));
        }
        if !(self.equilibrate_min_scaling > zero
            && self.equilibrate_min_scaling <= self.equilibrate_max_scaling)
        {
            return Err(SettingsError::BadFieldValue("equilibrate_min/max_scaling"));
        }
        if !(self.adaptive_rho_ratio > one) {
            return Err(SettingsError::BadFieldValue("adaptive_rho_ratio"));
        }
        if !(self.adaptive_rho_scaling > one) {
            return Err(SettingsError::BadFieldValue("adaptive_rho_scaling"));
        }
        if !(self.adaptive_rho_drift >= one) {
            return Err(SettingsError::BadFieldValue("adaptive_rho_drift"));
        }
        Ok(())
    }
}

// pre build checker (for auto-validation when using the builder)

impl From<SettingsError> for SettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        SettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation.  Only explicitly set
/// fields are checked here; the defaults are always valid.
impl<T: FloatT> SettingsBuilder<T> {
    fn validate(&self) -> Result<(), SettingsError> {
        let zero = T::zero();
        let one = T::one();

        if let Some(relaxation) = self.relaxation {
            if !(relaxation > zero && relaxation < (2.0).as_T()) {
                return Err(SettingsError::BadFieldValue("relaxation"));
            }
        }
        if let Some(rho) = self.rho {
            if !(rho > zero && rho.is_finite()) {
                return Err(SettingsError::BadFieldValue("rho"));
            }
        }
        if let Some(tol_abs) = self.tol_abs {
            if !(tol_abs >= zero) {
                return Err(SettingsError::BadFieldValue("tol_abs"));
            }
        }
        if let Some(tol_rel) = self.tol_rel {
            if !(tol_rel >= zero) {
                return Err(SettingsError::BadFieldValue("tol_rel"));
            }
        }
        let min_scaling = self.equilibrate_min_scaling.unwrap_or((1e-4).as_T());
        let max_scaling = self.equilibrate_max_scaling.unwrap_or((1e+4).as_T());
        if !(min_scaling > zero && min_scaling <= max_scaling) {
            return Err(SettingsError::BadFieldValue("equilibrate_min/max_scaling"));
        }
        if let Some(ratio) = self.adaptive_rho_ratio {
            if !(ratio > one) {
                return Err(SettingsError::BadFieldValue("adaptive_rho_ratio"));
            }
        }
        if let Some(scaling) = self.adaptive_rho_scaling {
            if !(scaling > one) {
                return Err(SettingsError::BadFieldValue("adaptive_rho_scaling"));
            }
        }
        if let Some(drift) = self.adaptive_rho_drift {
            if !(drift >= one) {
                return Err(SettingsError::BadFieldValue("adaptive_rho_drift"));
            }
        }
        Ok(())
    }
}

#[test]
fn test_settings_validate() {
    // all standard settings
    SettingsBuilder::<f64>::default().build().unwrap();

    // relaxation outside (0, 2)
    assert!(SettingsBuilder::<f64>::default()
        .relaxation(2.5)
        .build()
        .is_err());

    // non-positive rho
    assert!(SettingsBuilder::<f64>::default().rho(0.).build().is_err());

    // inverted equilibration clip range
    assert!(SettingsBuilder::<f64>::default()
        .equilibrate_min_scaling(10.)
        .equilibrate_max_scaling(0.1)
        .build()
        .is_err());

    // directly constructed bad settings are caught by validate()
    let settings = Settings::<f64> {
        adaptive_rho_ratio: 0.5,
        ..Settings::default()
    };
    assert!(settings.validate().is_err());
}
