use yaml_rust::Yaml;

use crate::{
    errors::{ConfigError, SolverError},
    initial_conditions::Scenario,
    physical_quantities::CellState,
    riemann_solver::{Interface, RiemannSolver},
    scalar::Scalar,
};

/// How the ghost cells at both ends of the domain are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Wrap around to the other end of the domain.
    Periodic,
    /// Solid wall: the neighbouring cell mirrored with opposite momentum.
    Reflective,
    /// Outflow: the neighbouring cell copied.
    Open,
    /// A dry cell, so that the solver's wet/dry handling acts as a wall.
    Vacuum,
}

impl Boundary {
    pub fn parse(kind: &str) -> Result<Self, ConfigError> {
        match kind {
            "periodic" => Ok(Boundary::Periodic),
            "reflective" => Ok(Boundary::Reflective),
            "open" => Ok(Boundary::Open),
            "vacuum" => Ok(Boundary::Vacuum),
            _ => Err(ConfigError::UnknownBoundaryConditions(kind.to_string())),
        }
    }
}

/// A uniform 1D grid of cells with one ghost cell on either side.
///
/// Cell `i` of the domain lives at index `i + 1` of the internal arrays; the net updates of the
/// interface between array cells `j` and `j + 1` are stored at index `j`.
pub struct Space<T: Scalar> {
    h: Vec<T>,
    hu: Vec<T>,
    b: Vec<T>,
    h_net_left: Vec<T>,
    hu_net_left: Vec<T>,
    h_net_right: Vec<T>,
    hu_net_right: Vec<T>,
    cell_size: T,
    boundary: Boundary,
}

impl<T: Scalar> Space<T> {
    /// Constructs a space from the cell values of the domain (without ghost cells).
    pub fn new(h: Vec<T>, hu: Vec<T>, b: Vec<T>, cell_size: T, boundary: Boundary) -> Result<Self, ConfigError> {
        if h.is_empty() {
            return Err(ConfigError::invalid("space", "cannot construct a space without cells"));
        }
        if h.len() != hu.len() || h.len() != b.len() {
            return Err(ConfigError::invalid(
                "space",
                format!(
                    "height, momentum and bathymetry arrays differ in length ({}, {}, {})",
                    h.len(),
                    hu.len(),
                    b.len()
                ),
            ));
        }
        if !(cell_size > T::zero()) || !cell_size.is_finite() {
            return Err(ConfigError::invalid("space", format!("cell size must be positive, found {cell_size}")));
        }

        let pad = |values: Vec<T>| {
            let mut padded = Vec::with_capacity(values.len() + 2);
            padded.push(T::zero());
            padded.extend(values);
            padded.push(T::zero());
            padded
        };
        let num_interfaces = h.len() + 1;
        let mut space = Self {
            h: pad(h),
            hu: pad(hu),
            b: pad(b),
            h_net_left: vec![T::zero(); num_interfaces],
            hu_net_left: vec![T::zero(); num_interfaces],
            h_net_right: vec![T::zero(); num_interfaces],
            hu_net_right: vec![T::zero(); num_interfaces],
            cell_size,
            boundary,
        };
        space.set_ghost_cells();
        Ok(space)
    }

    /// Samples the scenario's profiles at the cell centres.
    pub fn from_scenario(scenario: &dyn Scenario, boundary: Boundary) -> Result<Self, ConfigError> {
        let num_cells = scenario.num_cells();
        let dx = scenario.cell_size();
        let centres = (0..num_cells).map(|i| (i as f64 + 0.5) * dx);

        let h = centres.clone().map(|x| T::val_from_f64(scenario.height(x))).collect();
        let hu = centres
            .clone()
            .map(|x| T::val_from_f64(scenario.height(x) * scenario.velocity(x)))
            .collect();
        let b = centres.map(|x| T::val_from_f64(scenario.bathymetry(x))).collect();

        Self::new(h, hu, b, T::val_from_f64(dx), boundary)
    }

    /// Reads the `space` section of a configuration file.
    pub fn init(scenario: &dyn Scenario, cfg: &Yaml) -> Result<Self, ConfigError> {
        let boundary = Boundary::parse(cfg["boundary"].as_str().unwrap_or("open"))?;
        Self::from_scenario(scenario, boundary)
    }

    pub fn num_cells(&self) -> usize {
        self.h.len() - 2
    }

    pub fn cell_size(&self) -> T {
        self.cell_size
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn heights(&self) -> &[T] {
        &self.h[1..=self.num_cells()]
    }

    pub fn momenta(&self) -> &[T] {
        &self.hu[1..=self.num_cells()]
    }

    pub fn bathymetry(&self) -> &[T] {
        &self.b[1..=self.num_cells()]
    }

    /// Total water volume per unit width in the domain.
    pub fn total_mass(&self) -> T {
        self.heights().iter().fold(T::zero(), |acc, &h| acc + h) * self.cell_size
    }

    /// Fills the two ghost cells according to the boundary conditions.
    pub fn set_ghost_cells(&mut self) {
        let n = self.num_cells();
        let (left_src, right_src) = match self.boundary {
            Boundary::Periodic => (n, 1),
            _ => (1, n),
        };
        let left = CellState::new(self.h[left_src], self.hu[left_src]);
        let right = CellState::new(self.h[right_src], self.hu[right_src]);
        let (left, right) = match self.boundary {
            Boundary::Periodic | Boundary::Open => (left, right),
            Boundary::Reflective => (left.reflect(), right.reflect()),
            Boundary::Vacuum => (CellState::zero(), CellState::zero()),
        };

        self.h[0] = left.h;
        self.hu[0] = left.hu;
        self.b[0] = self.b[left_src];
        self.h[n + 1] = right.h;
        self.hu[n + 1] = right.hu;
        self.b[n + 1] = self.b[right_src];
    }

    fn interface(&self, idx: usize) -> Interface<T> {
        Interface::new(
            CellState::new(self.h[idx], self.hu[idx]),
            CellState::new(self.h[idx + 1], self.hu[idx + 1]),
            self.b[idx],
            self.b[idx + 1],
        )
    }

    /// Solves the Riemann problem at every interface (including the two boundary interfaces)
    /// and returns the maximal wave speed.
    pub fn compute_net_updates<R: RiemannSolver<T>>(&mut self, solver: &R) -> Result<T, SolverError> {
        let mut max_wave_speed = T::zero();
        for idx in 0..self.h_net_left.len() {
            let updates = solver.compute_net_updates(&self.interface(idx))?;
            self.h_net_left[idx] = updates.h_left;
            self.hu_net_left[idx] = updates.hu_left;
            self.h_net_right[idx] = updates.h_right;
            self.hu_net_right[idx] = updates.hu_right;
            max_wave_speed = max_wave_speed.max(updates.max_wave_speed);
        }
        Ok(max_wave_speed)
    }

    /// Applies the net updates of the last call to `compute_net_updates` over a timestep `dt`.
    ///
    /// Each cell receives the right-going fluctuation of its left interface and the left-going
    /// fluctuation of its right interface.
    pub fn update_unknowns(&mut self, dt: T) {
        let dt_over_dx = dt / self.cell_size;
        for i in 1..=self.num_cells() {
            self.h[i] -= dt_over_dx * (self.h_net_right[i - 1] + self.h_net_left[i]);
            self.hu[i] -= dt_over_dx * (self.hu_net_right[i - 1] + self.hu_net_left[i]);
        }
    }
}

#[cfg(test)]
mod test {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::{
        initial_conditions::{DamBreak, SubCriticalFlow},
        riemann_solver::FWaveSolver,
    };

    fn space(boundary: Boundary) -> Space<f64> {
        Space::new(vec![1., 2., 3.], vec![-1., 0., 4.], vec![-5., -6., -7.], 0.5, boundary).unwrap()
    }

    #[test]
    fn test_ghost_cells() {
        let s = space(Boundary::Open);
        assert_eq!(s.h, vec![1., 1., 2., 3., 3.]);
        assert_eq!(s.hu, vec![-1., -1., 0., 4., 4.]);
        assert_eq!(s.b, vec![-5., -5., -6., -7., -7.]);

        let s = space(Boundary::Reflective);
        assert_eq!(s.h, vec![1., 1., 2., 3., 3.]);
        assert_eq!(s.hu, vec![1., -1., 0., 4., -4.]);

        let s = space(Boundary::Periodic);
        assert_eq!(s.h, vec![3., 1., 2., 3., 1.]);
        assert_eq!(s.hu, vec![4., -1., 0., 4., -1.]);
        assert_eq!(s.b, vec![-7., -5., -6., -7., -5.]);

        let s = space(Boundary::Vacuum);
        assert_eq!(s.h, vec![0., 1., 2., 3., 0.]);
        assert_eq!(s.hu, vec![0., -1., 0., 4., 0.]);

        assert_eq!(s.heights(), &[1., 2., 3.]);
        assert_eq!(s.momenta(), &[-1., 0., 4.]);
        assert_eq!(s.bathymetry(), &[-5., -6., -7.]);
        assert_approx_eq!(f64, s.total_mass(), 3.);
    }

    #[test]
    fn test_from_scenario() {
        let scenario = SubCriticalFlow::new(25);
        let s = Space::<f64>::from_scenario(&scenario, Boundary::Open).unwrap();
        assert_eq!(s.num_cells(), 25);
        assert_approx_eq!(f64, s.cell_size(), 1.);
        // Cell 10 sits half a metre right of the top of the bump
        assert_approx_eq!(f64, s.bathymetry()[10], -1.8 - 0.05 * 0.25);
        assert_approx_eq!(f64, s.heights()[10] + s.bathymetry()[10], 0.);
        for &hu in s.momenta() {
            assert_approx_eq!(f64, hu, SubCriticalFlow::DISCHARGE);
        }
    }

    #[test]
    fn test_lake_at_rest_stays_at_rest() {
        let bump = SubCriticalFlow::new(50);
        let b: Vec<f64> = (0..50)
            .map(|i| bump.bathymetry((i as f64 + 0.5) * bump.cell_size()))
            .collect();
        let h = b.iter().map(|b| -b).collect();
        let mut s = Space::new(h, vec![0.; 50], b, bump.cell_size(), Boundary::Reflective).unwrap();
        let solver = FWaveSolver::default();
        let max_ws = s.compute_net_updates(&solver).unwrap();
        assert!(max_ws > 0.);
        s.update_unknowns(0.01);
        for (h, b) in s.heights().iter().zip(s.bathymetry()) {
            assert_approx_eq!(f64, h + b, 0., epsilon = 1e-12);
        }
        for &hu in s.momenta() {
            assert_approx_eq!(f64, hu, 0., epsilon = 1e-12);
        }
    }

    #[test]
    fn test_dambreak_step_conserves_mass() {
        let scenario = DamBreak::new(20, 10., 5., 10., 5.);
        let mut s = Space::<f64>::from_scenario(&scenario, Boundary::Reflective).unwrap();
        let mass = s.total_mass();
        let solver = FWaveSolver::default();
        let max_ws = s.compute_net_updates(&solver).unwrap();
        s.update_unknowns(0.4 * s.cell_size() / max_ws);

        assert_approx_eq!(f64, s.total_mass(), mass, epsilon = 1e-10);
        // Water starts moving to the right at the dam and nowhere else yet
        assert!(s.heights()[9] < 10.);
        assert!(s.heights()[10] > 5.);
        assert!(s.momenta()[9] > 0.);
        assert!(s.momenta()[10] > 0.);
        assert_eq!(s.heights()[0], 10.);
        assert_eq!(s.heights()[19], 5.);
    }

    #[test]
    fn test_invalid_spaces() {
        let empty = SubCriticalFlow::new(0);
        assert!(matches!(
            Space::<f64>::from_scenario(&empty, Boundary::Open),
            Err(ConfigError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Space::<f64>::new(vec![1., 2.], vec![0.], vec![0., 0.], 1., Boundary::Open),
            Err(ConfigError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Space::<f64>::new(vec![1.], vec![0.], vec![0.], 0., Boundary::Open),
            Err(ConfigError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_parse_boundary() {
        assert_eq!(Boundary::parse("vacuum"), Ok(Boundary::Vacuum));
        assert_eq!(
            Boundary::parse("absorbing"),
            Err(ConfigError::UnknownBoundaryConditions("absorbing".to_string()))
        );
    }
}
