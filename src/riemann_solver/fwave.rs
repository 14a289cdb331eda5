use crate::{
    errors::{Side, SolverError},
    parameters::SolverParameters,
    physical_quantities::{CellState, NetUpdates, Wave},
    scalar::Scalar,
};

use super::{CellType, Interface, RiemannSolver};

/// F-Wave approximate Riemann solver for the 1D shallow water equations.
///
/// The jump in the flux, including the bathymetry source term, is decomposed directly into two
/// waves along the Roe-linearized eigenvectors `[1, lambda_1]` and `[1, lambda_2]`. Dry cells
/// are handled by reflecting the wet neighbour at a wall and discarding the updates for the dry
/// side afterwards.
///
/// See Bale, LeVeque, Mitran & Rossmanith (2002) and George (2008).
#[derive(Debug, Clone, Copy, Default)]
pub struct FWaveSolver<T: Scalar> {
    params: SolverParameters<T>,
}

impl<T: Scalar> FWaveSolver<T> {
    pub fn new(params: SolverParameters<T>) -> Self {
        Self { params }
    }

    /// Net updates for the flat argument list `(hl, hr, hul, hur, bl, br)`.
    pub fn solve(&self, hl: T, hr: T, hul: T, hur: T, bl: T, br: T) -> Result<NetUpdates<T>, SolverError> {
        self.compute_net_updates(&Interface::from_values(hl, hr, hul, hur, bl, br))
    }

    /// Every side that is not dry must have a height we can safely divide by.
    fn check_wet_heights(&self, interface: &Interface<T>, cell_type: CellType) -> Result<(), SolverError> {
        let check = |side: Side, h: T| {
            if h > self.params.zero_tol() {
                Ok(())
            } else {
                Err(SolverError::HeightBelowZeroTolerance {
                    side,
                    height: h.val_to_f64(),
                    zero_tol: self.params.zero_tol().val_to_f64(),
                })
            }
        };
        match cell_type {
            CellType::WetWet => {
                check(Side::Left, interface.left.h)?;
                check(Side::Right, interface.right.h)
            }
            CellType::WetDry => check(Side::Left, interface.left.h),
            CellType::DryWet => check(Side::Right, interface.right.h),
            CellType::DryDry => Ok(()),
        }
    }

    /// h_Roe = (h_l + h_r) / 2
    fn roe_height(left: &CellState<T>, right: &CellState<T>) -> T {
        T::half() * (left.h + right.h)
    }

    /// u_Roe = (u_l sqrt(h_l) + u_r sqrt(h_r)) / (sqrt(h_l) + sqrt(h_r))
    fn roe_velocity(left: &CellState<T>, right: &CellState<T>) -> T {
        let sqrt_h_l = left.h.sqrt();
        let sqrt_h_r = right.h.sqrt();
        (left.velocity() * sqrt_h_l + right.velocity() * sqrt_h_r) / (sqrt_h_l + sqrt_h_r)
    }

    /// Roe eigenvalues `u_Roe -/+ sqrt(g h_Roe)`.
    ///
    /// When both waves travel in the same direction, the slower one is set to zero so that no
    /// update leaks into the upwind cell.
    fn wave_speeds(&self, interface: &Interface<T>) -> (T, T) {
        let h_roe = Self::roe_height(&interface.left, &interface.right);
        let u_roe = Self::roe_velocity(&interface.left, &interface.right);
        let c_roe = (self.params.gravity() * h_roe).sqrt();

        let mut lambda1 = u_roe - c_roe;
        let mut lambda2 = u_roe + c_roe;
        if lambda1 < T::zero() && lambda2 < T::zero() {
            lambda2 = T::zero();
        } else if lambda1 > T::zero() && lambda2 > T::zero() {
            lambda1 = T::zero();
        }
        (lambda1, lambda2)
    }

    /// Flux difference `f(q_r) - f(q_l)` minus the bathymetry source term
    /// `[0, -g (b_r - b_l) (h_l + h_r) / 2]`.
    fn flux_jump(&self, interface: &Interface<T>) -> CellState<T> {
        let half_gravity = self.params.half_gravity();
        let delta_flux = interface.right.flux(half_gravity) - interface.left.flux(half_gravity);
        let source = -self.params.gravity()
            * (interface.b_right - interface.b_left)
            * Self::roe_height(&interface.left, &interface.right);
        CellState::new(delta_flux.h, delta_flux.hu - source)
    }

    /// Solves `[[1, 1], [lambda1, lambda2]] a = delta_f` for the eigencoefficients.
    fn eigencoefficients(&self, delta_flux: CellState<T>, lambda1: T, lambda2: T) -> Result<[T; 2], SolverError> {
        let det = lambda2 - lambda1;
        if !(det.abs() > self.params.zero_tol()) {
            return Err(SolverError::SingularEigensystem {
                lambda1: lambda1.val_to_f64(),
                lambda2: lambda2.val_to_f64(),
            });
        }
        let det_inv = T::one() / det;
        Ok([
            det_inv * (lambda2 * delta_flux.h - delta_flux.hu),
            det_inv * (delta_flux.hu - lambda1 * delta_flux.h),
        ])
    }
}

impl<T: Scalar> RiemannSolver<T> for FWaveSolver<T> {
    fn compute_net_updates(&self, interface: &Interface<T>) -> Result<NetUpdates<T>, SolverError> {
        let cell_type = CellType::classify(
            self.params.is_dry(interface.left.h),
            self.params.is_dry(interface.right.h),
        );
        // No water, nothing happens
        if cell_type == CellType::DryDry {
            return Ok(NetUpdates::zero());
        }
        self.check_wet_heights(interface, cell_type)?;

        let interface = interface.effective(cell_type);
        let (lambda1, lambda2) = self.wave_speeds(&interface);
        let [a1, a2] = self.eigencoefficients(self.flux_jump(&interface), lambda1, lambda2)?;

        let mut updates = NetUpdates::zero();
        updates.add_wave(&Wave::new(a1, lambda1));
        updates.add_wave(&Wave::new(a2, lambda2));
        updates.max_wave_speed = lambda1.abs().max(lambda2.abs());

        // Dry cells stay dry
        match cell_type {
            CellType::WetDry => updates.set_right(CellState::zero()),
            CellType::DryWet => updates.set_left(CellState::zero()),
            CellType::WetWet | CellType::DryDry => (),
        }

        if !updates.is_finite() {
            return Err(SolverError::NonFiniteUpdates {
                max_wave_speed: updates.max_wave_speed.val_to_f64(),
            });
        }
        Ok(updates)
    }

    fn name(&self) -> &'static str {
        "FWave"
    }
}
