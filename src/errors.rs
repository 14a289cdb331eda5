use std::fmt::Display;

use thiserror::Error;

/// Which side of an interface a quantity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Failures of a single interface evaluation or of the time stepping built on top of it.
///
/// Values are reported in `f64` regardless of the working precision.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SolverError {
    #[error("Wet cell on the {side} side has height {height}, which does not exceed the zero tolerance {zero_tol}")]
    HeightBelowZeroTolerance {
        side: Side,
        height: f64,
        zero_tol: f64,
    },
    #[error("Wave speeds {lambda1} and {lambda2} (nearly) coincide, the eigensystem is singular")]
    SingularEigensystem { lambda1: f64, lambda2: f64 },
    #[error("Net updates overflowed the working precision (max wave speed {max_wave_speed})")]
    NonFiniteUpdates { max_wave_speed: f64 },
    #[error("Computed an invalid timestep: {dt}")]
    InvalidTimestep { dt: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Missing required parameter in configuration: {0}")]
    MissingParameter(String),
    #[error("Invalid value for parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
    #[error("Unknown type of Riemann solver configured: {0}")]
    UnknownRiemannSolver(String),
    #[error("Unknown floating point precision configured: {0}")]
    UnknownPrecision(String),
    #[error("Unknown type of scenario configured: {0}")]
    UnknownScenario(String),
    #[error("Unknown type of boundary condition configured: {0}")]
    UnknownBoundaryConditions(String),
}

impl ConfigError {
    pub(crate) fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
