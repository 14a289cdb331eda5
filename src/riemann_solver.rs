use crate::{
    errors::{ConfigError, SolverError},
    physical_quantities::NetUpdates,
    scalar::Scalar,
};

mod fwave;
mod interface;

pub use fwave::FWaveSolver;
pub use interface::{CellType, Interface};

/// An approximate Riemann solver producing net updates for the two cells adjacent to an interface.
///
/// Implementations hold no mutable state, so a single instance can serve every interface of a
/// grid.
pub trait RiemannSolver<T: Scalar>: Send + Sync {
    fn compute_net_updates(&self, interface: &Interface<T>) -> Result<NetUpdates<T>, SolverError>;

    /// Name used in configuration files and log output.
    fn name(&self) -> &'static str;
}

/// The Riemann solvers that can be selected from a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiemannSolverKind {
    FWave,
}

impl RiemannSolverKind {
    pub fn parse(kind: &str) -> Result<Self, ConfigError> {
        match kind {
            "FWave" | "fwave" | "f-wave" => Ok(Self::FWave),
            _ => Err(ConfigError::UnknownRiemannSolver(kind.to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_kind() {
        assert_eq!(RiemannSolverKind::parse("FWave"), Ok(RiemannSolverKind::FWave));
        assert_eq!(
            RiemannSolverKind::parse("HLLC"),
            Err(ConfigError::UnknownRiemannSolver("HLLC".to_string()))
        );
    }
}
