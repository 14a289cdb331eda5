use crate::{physical_quantities::CellState, scalar::Scalar};

/// Wet/dry state of an interface, left side first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellType {
    WetWet,
    DryDry,
    WetDry,
    DryWet,
}

impl CellType {
    pub fn classify(left_dry: bool, right_dry: bool) -> Self {
        match (left_dry, right_dry) {
            (true, true) => CellType::DryDry,
            (true, false) => CellType::DryWet,
            (false, true) => CellType::WetDry,
            (false, false) => CellType::WetWet,
        }
    }
}

/// The data of one Riemann problem: the states and bathymetry on both sides of an edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interface<T: Scalar> {
    pub left: CellState<T>,
    pub right: CellState<T>,
    pub b_left: T,
    pub b_right: T,
}

impl<T: Scalar> Interface<T> {
    pub fn new(left: CellState<T>, right: CellState<T>, b_left: T, b_right: T) -> Self {
        Self {
            left,
            right,
            b_left,
            b_right,
        }
    }

    /// Builds an interface from the flat argument list `(hl, hr, hul, hur, bl, br)`.
    pub fn from_values(hl: T, hr: T, hul: T, hur: T, bl: T, br: T) -> Self {
        Self::new(CellState::new(hl, hul), CellState::new(hr, hur), bl, br)
    }

    /// The interface seen from the other side: left and right swapped and momenta negated.
    pub fn mirror(&self) -> Self {
        Self::new(self.right.reflect(), self.left.reflect(), self.b_right, self.b_left)
    }

    /// The interface the wave decomposition runs on.
    ///
    /// A dry side is replaced by the reflection of the wet side (wall boundary), so that the
    /// wave hitting the shore bounces back. Wet-wet and dry-dry interfaces are returned as is.
    pub fn effective(&self, cell_type: CellType) -> Self {
        match cell_type {
            CellType::DryWet => Self::new(self.right.reflect(), self.right, self.b_right, self.b_right),
            CellType::WetDry => Self::new(self.left, self.left.reflect(), self.b_left, self.b_left),
            CellType::WetWet | CellType::DryDry => *self,
        }
    }
}
