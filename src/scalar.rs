use std::fmt::{Debug, Display};

use num_traits::{Float, NumAssign};

/// The floating point types the solver kernel can run in.
///
/// Configuration values (gravity, tolerances, scenario profiles) are kept in `f64` and converted
/// into the working precision with [`Scalar::val_from_f64`].
pub trait Scalar: Float + NumAssign + Debug + Display + Default + Send + Sync + 'static {
    fn val_from_f64(v: f64) -> Self;
    fn val_to_f64(self) -> f64;

    fn half() -> Self {
        Self::val_from_f64(0.5)
    }
}

impl Scalar for f64 {
    fn val_from_f64(v: f64) -> Self {
        v
    }

    fn val_to_f64(self) -> f64 {
        self
    }
}

impl Scalar for f32 {
    fn val_from_f64(v: f64) -> Self {
        v as f32
    }

    fn val_to_f64(self) -> f64 {
        self as f64
    }
}
