//! F-Wave approximate Riemann solver for the one-dimensional shallow water equations.
//!
//! The core of the library is [`FWaveSolver`], which computes the net updates of the two cells
//! adjacent to an interface, including bathymetry source terms and wet/dry (shoreline) handling.
//! A simple first order finite volume [`Engine`] and a set of benchmark [`Scenario`]s are provided
//! to drive the solver on a uniform grid.

pub use engine::{Engine, RunSummary};
pub use errors::{ConfigError, Side, SolverError};
pub use initial_conditions::{create_scenario, DamBreak, Scenario, SubCriticalFlow, SuperCriticalFlow};
pub use parameters::SolverParameters;
pub use riemann_solver::{CellType, FWaveSolver, Interface, RiemannSolver, RiemannSolverKind};
pub use scalar::Scalar;
pub use space::{Boundary, Space};

mod engine;
mod errors;
mod initial_conditions;
mod parameters;
pub mod physical_constants;
pub mod physical_quantities;
pub mod riemann_solver;
mod scalar;
mod space;
mod utils;
