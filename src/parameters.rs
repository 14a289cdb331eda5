use yaml_rust::Yaml;

use crate::{
    errors::ConfigError,
    physical_constants::{DRY_TOLERANCE, GRAVITY_IN_SI, ZERO_TOLERANCE},
    scalar::Scalar,
    utils::yaml_f64,
};

/// Fixed parameters of the F-Wave kernel.
///
/// A solver owns one of these for its whole lifetime, so different solvers (or tests) can run
/// with different tolerances side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverParameters<T: Scalar> {
    gravity: T,
    half_gravity: T,
    zero_tol: T,
    dry_tol: T,
}

impl<T: Scalar> Default for SolverParameters<T> {
    fn default() -> Self {
        Self::from_f64(GRAVITY_IN_SI, ZERO_TOLERANCE, DRY_TOLERANCE)
    }
}

impl<T: Scalar> SolverParameters<T> {
    /// Checked constructor: gravity must be strictly positive and both tolerances non-negative.
    pub fn new(gravity: f64, zero_tol: f64, dry_tol: f64) -> Result<Self, ConfigError> {
        if !(gravity > 0.) || !gravity.is_finite() {
            return Err(ConfigError::invalid("solver:gravity", format!("must be positive, found {gravity}")));
        }
        if !(zero_tol >= 0.) || !zero_tol.is_finite() {
            return Err(ConfigError::invalid("solver:zero_tol", format!("must be non-negative, found {zero_tol}")));
        }
        if !(dry_tol >= 0.) || !dry_tol.is_finite() {
            return Err(ConfigError::invalid("solver:dry_tol", format!("must be non-negative, found {dry_tol}")));
        }
        Ok(Self::from_f64(gravity, zero_tol, dry_tol))
    }

    /// Reads the `solver` section of a configuration. Missing values fall back to the defaults.
    pub fn init(cfg: &Yaml) -> Result<Self, ConfigError> {
        Self::new(
            yaml_f64(cfg, "gravity").unwrap_or(GRAVITY_IN_SI),
            yaml_f64(cfg, "zero_tol").unwrap_or(ZERO_TOLERANCE),
            yaml_f64(cfg, "dry_tol").unwrap_or(DRY_TOLERANCE),
        )
    }

    fn from_f64(gravity: f64, zero_tol: f64, dry_tol: f64) -> Self {
        Self {
            gravity: T::val_from_f64(gravity),
            half_gravity: T::val_from_f64(0.5 * gravity),
            zero_tol: T::val_from_f64(zero_tol),
            dry_tol: T::val_from_f64(dry_tol),
        }
    }

    pub fn gravity(&self) -> T {
        self.gravity
    }

    /// g / 2, the prefactor of the hydrostatic pressure term.
    pub fn half_gravity(&self) -> T {
        self.half_gravity
    }

    pub fn zero_tol(&self) -> T {
        self.zero_tol
    }

    pub fn dry_tol(&self) -> T {
        self.dry_tol
    }

    pub fn is_dry(&self, height: T) -> bool {
        height < self.dry_tol
    }
}
