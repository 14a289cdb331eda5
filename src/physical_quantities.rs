use std::ops::{Add, Sub};

use crate::scalar::Scalar;

/// Height and momentum (per unit width) on one side of an interface.
///
/// The same pair is used for flux vectors `[hu, hu u + g h^2 / 2]`.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct CellState<T: Scalar> {
    pub h: T,
    pub hu: T,
}

impl<T: Scalar> CellState<T> {
    pub fn new(h: T, hu: T) -> Self {
        Self { h, hu }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    /// Particle velocity. Only meaningful for wet states.
    pub fn velocity(&self) -> T {
        self.hu / self.h
    }

    /// The same water column moving in the opposite direction (wall reflection).
    pub fn reflect(&self) -> Self {
        Self::new(self.h, -self.hu)
    }

    /// Physical flux of the shallow water equations `f(q) = [hu, hu u + 1/2 g h^2]`.
    pub fn flux(&self, half_gravity: T) -> Self {
        let u = self.velocity();
        Self::new(self.hu, self.hu * u + half_gravity * self.h * self.h)
    }

    pub fn is_finite(&self) -> bool {
        self.h.is_finite() && self.hu.is_finite()
    }
}

impl<T: Scalar> Add for CellState<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.h + rhs.h, self.hu + rhs.hu)
    }
}

impl<T: Scalar> Sub for CellState<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.h - rhs.h, self.hu - rhs.hu)
    }
}

/// A single f-wave: the eigencoefficient `a` times the eigenvector `[1, lambda]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wave<T: Scalar> {
    pub h: T,
    pub hu: T,
    pub speed: T,
}

impl<T: Scalar> Wave<T> {
    pub fn new(eigencoefficient: T, speed: T) -> Self {
        Self {
            h: eigencoefficient,
            hu: eigencoefficient * speed,
            speed,
        }
    }

    fn as_state(&self) -> CellState<T> {
        CellState::new(self.h, self.hu)
    }
}

/// Net updates for the two cells adjacent to an interface.
///
/// `h_left`/`hu_left` are the left-going fluctuations, to be subtracted from the left cell;
/// `h_right`/`hu_right` are the right-going fluctuations for the right cell.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct NetUpdates<T: Scalar> {
    pub h_left: T,
    pub hu_left: T,
    pub h_right: T,
    pub hu_right: T,
    /// Magnitude of the fastest (linearized) wave, for the CFL condition.
    pub max_wave_speed: T,
}

impl<T: Scalar> NetUpdates<T> {
    pub fn zero() -> Self {
        Self {
            h_left: T::zero(),
            hu_left: T::zero(),
            h_right: T::zero(),
            hu_right: T::zero(),
            max_wave_speed: T::zero(),
        }
    }

    pub fn left(&self) -> CellState<T> {
        CellState::new(self.h_left, self.hu_left)
    }

    pub fn right(&self) -> CellState<T> {
        CellState::new(self.h_right, self.hu_right)
    }

    /// Attributes a wave to the side it travels to. Standing waves are dropped.
    pub(crate) fn add_wave(&mut self, wave: &Wave<T>) {
        if wave.speed > T::zero() {
            self.set_right(self.right() + wave.as_state());
        } else if wave.speed < T::zero() {
            self.set_left(self.left() + wave.as_state());
        }
    }

    pub(crate) fn set_left(&mut self, state: CellState<T>) {
        self.h_left = state.h;
        self.hu_left = state.hu;
    }

    pub(crate) fn set_right(&mut self, state: CellState<T>) {
        self.h_right = state.h;
        self.hu_right = state.hu;
    }

    pub fn is_finite(&self) -> bool {
        self.left().is_finite() && self.right().is_finite() && self.max_wave_speed.is_finite()
    }
}
