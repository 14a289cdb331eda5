/// @brief Gravitational acceleration g (in m s^-2).
pub const GRAVITY_IN_SI: f64 = 9.81;

/// @brief Numerical zero: heights and determinants at or below this value are never inverted.
pub const ZERO_TOLERANCE: f64 = 1e-7;

/// @brief Water heights strictly below this value (in m) are treated as dry.
pub const DRY_TOLERANCE: f64 = 0.01;
