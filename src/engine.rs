use yaml_rust::Yaml;

use crate::{
    errors::{ConfigError, SolverError},
    riemann_solver::RiemannSolver,
    scalar::Scalar,
    space::Space,
    utils::{required_f64, yaml_f64},
};

/// Summary of a finished (or aborted) simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    pub time: f64,
    pub max_wave_speed: f64,
}

/// Drives the explicit first order time stepping of a [`Space`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Engine {
    cfl: f64,
    t_end: f64,
    dt_status: f64,
    max_steps: Option<usize>,
}

impl Engine {
    pub fn new(cfl: f64, t_end: f64, dt_status: f64, max_steps: Option<usize>) -> Result<Self, ConfigError> {
        if !(cfl > 0. && cfl <= 1.) {
            return Err(ConfigError::invalid("engine:cfl", format!("must lie in (0, 1], found {cfl}")));
        }
        if !(t_end >= 0.) || !t_end.is_finite() {
            return Err(ConfigError::invalid("engine:t_end", format!("must be non-negative, found {t_end}")));
        }
        if !(dt_status > 0.) {
            return Err(ConfigError::invalid("engine:dt_status", format!("must be positive, found {dt_status}")));
        }
        Ok(Self {
            cfl,
            t_end,
            dt_status,
            max_steps,
        })
    }

    /// Reads the `engine` section of a configuration file.
    pub fn init(cfg: &Yaml) -> Result<Self, ConfigError> {
        let t_end = required_f64(cfg, "t_end", "engine")?;
        let cfl = yaml_f64(cfg, "cfl").unwrap_or(0.4);
        let dt_status = yaml_f64(cfg, "dt_status")
            .unwrap_or(if t_end > 0. { t_end / 10. } else { f64::INFINITY });
        let max_steps = match cfg["max_steps"].as_i64() {
            Some(steps) if steps < 0 => {
                return Err(ConfigError::invalid("engine:max_steps", "cannot be negative"))
            }
            Some(steps) => Some(steps as usize),
            None => None,
        };
        Self::new(cfl, t_end, dt_status, max_steps)
    }

    pub fn cfl(&self) -> f64 {
        self.cfl
    }

    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    /// Advances `space` until `t_end` (or `max_steps`) is reached.
    ///
    /// Every step solves all Riemann problems, picks `dt = cfl * dx / max_wave_speed` (clipped to
    /// end exactly at `t_end`) and applies the net updates.
    pub fn run<T: Scalar, R: RiemannSolver<T>>(
        &self,
        space: &mut Space<T>,
        solver: &R,
    ) -> Result<RunSummary, SolverError> {
        log::info!(
            "Starting run: {} cells of size {}, {} Riemann solver, boundary {:?}, t_end = {}",
            space.num_cells(),
            space.cell_size(),
            solver.name(),
            space.boundary(),
            self.t_end
        );
        let initial_mass = space.total_mass().val_to_f64();
        let dx = space.cell_size().val_to_f64();

        let mut time = 0.;
        let mut steps = 0;
        let mut max_wave_speed = 0.;
        let mut next_status = self.dt_status;
        while time < self.t_end {
            if self.max_steps.map_or(false, |max| steps >= max) {
                log::warn!("Reached the maximal number of steps ({steps}) at t = {time}");
                break;
            }

            space.set_ghost_cells();
            let step_max_ws = space.compute_net_updates(solver)?.val_to_f64();
            max_wave_speed = step_max_ws;
            if step_max_ws == 0. {
                log::warn!("All wave speeds vanish at t = {time}, nothing left to do");
                break;
            }

            let dt = (self.cfl * dx / step_max_ws).min(self.t_end - time);
            if !(dt > 0.) || !dt.is_finite() {
                return Err(SolverError::InvalidTimestep { dt });
            }
            space.update_unknowns(T::val_from_f64(dt));
            time += dt;
            steps += 1;
            log::debug!("Step {steps}: t = {time}, dt = {dt}, max wave speed = {step_max_ws}");

            if time >= next_status {
                log::info!(
                    "t = {time:.4}, step {steps}, total mass {:.6}",
                    space.total_mass().val_to_f64()
                );
                while next_status <= time {
                    next_status += self.dt_status;
                }
            }
        }

        let final_mass = space.total_mass().val_to_f64();
        log::info!(
            "Finished after {steps} steps at t = {time}. Mass changed by {:e}",
            final_mass - initial_mass
        );
        Ok(RunSummary {
            steps,
            time,
            max_wave_speed,
        })
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;
    use yaml_rust::YamlLoader;

    use super::*;
    use crate::{
        initial_conditions::DamBreak,
        parameters::SolverParameters,
        riemann_solver::FWaveSolver,
        space::Boundary,
    };

    #[test]
    fn test_init() {
        let docs = YamlLoader::load_from_str("t_end: 2\ncfl: 0.5\nmax_steps: 10").unwrap();
        let engine = Engine::init(&docs[0]).unwrap();
        assert_approx_eq!(f64, engine.t_end(), 2.);
        assert_approx_eq!(f64, engine.cfl(), 0.5);
        assert_eq!(engine.max_steps, Some(10));
        assert_approx_eq!(f64, engine.dt_status, 0.2);

        let docs = YamlLoader::load_from_str("cfl: 0.5").unwrap();
        assert_eq!(
            Engine::init(&docs[0]),
            Err(ConfigError::MissingParameter("engine:t_end".to_string()))
        );
        let docs = YamlLoader::load_from_str("t_end: 1\ndt_status: 0").unwrap();
        assert!(matches!(
            Engine::init(&docs[0]),
            Err(ConfigError::InvalidParameter { .. })
        ));
        let docs = YamlLoader::load_from_str("t_end: 0").unwrap();
        assert!(Engine::init(&docs[0]).is_ok());
        assert!(Engine::new(1.5, 1., 0.1, None).is_err());
        assert!(Engine::new(0., 1., 0.1, None).is_err());
    }

    #[test]
    fn test_run_reaches_t_end() {
        let scenario = DamBreak::new(50, 10., 5., 10., 5.);
        let mut space = Space::<f64>::from_scenario(&scenario, Boundary::Reflective).unwrap();
        let mass = space.total_mass();
        let engine = Engine::new(0.4, 0.25, 0.1, None).unwrap();
        let summary = engine.run(&mut space, &FWaveSolver::default()).unwrap();

        assert_approx_eq!(f64, summary.time, 0.25);
        assert!(summary.steps > 0);
        assert!(summary.max_wave_speed > (9.81f64 * 5.).sqrt());
        assert_approx_eq!(f64, space.total_mass(), mass, epsilon = 1e-9);
    }

    #[test]
    fn test_run_respects_max_steps() {
        let scenario = DamBreak::new(20, 10., 5., 3., 1.);
        let mut space = Space::<f32>::from_scenario(&scenario, Boundary::Open).unwrap();
        let engine = Engine::new(0.9, 100., 1., Some(3)).unwrap();
        let summary = engine.run(&mut space, &FWaveSolver::default()).unwrap();
        assert_eq!(summary.steps, 3);
        assert!(summary.time < 100.);
    }

    #[test]
    fn test_run_dry_domain() {
        let scenario = DamBreak::new(10, 10., 5., 0., 0.);
        let mut space = Space::<f64>::from_scenario(&scenario, Boundary::Reflective).unwrap();
        let engine = Engine::new(0.4, 1., 0.5, None).unwrap();
        let summary = engine.run(&mut space, &FWaveSolver::default()).unwrap();
        assert_eq!(summary.steps, 0);
        assert_eq!(summary.time, 0.);
    }

    #[test]
    fn test_run_propagates_solver_errors() {
        // Wet cells thinner than the zero tolerance
        let params = SolverParameters::new(9.81, 1e-3, 0.).unwrap();
        let scenario = DamBreak::new(10, 10., 5., 1e-4, 1e-4);
        let mut space = Space::<f64>::from_scenario(&scenario, Boundary::Open).unwrap();
        let engine = Engine::new(0.4, 1., 0.5, None).unwrap();
        assert!(matches!(
            engine.run(&mut space, &FWaveSolver::new(params)),
            Err(SolverError::HeightBelowZeroTolerance { .. })
        ));
    }
}
