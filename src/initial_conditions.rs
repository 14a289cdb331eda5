use yaml_rust::Yaml;

use crate::{
    errors::ConfigError,
    utils::{required_str, required_usize, yaml_f64},
};

/// Default length (in m) of the channel used by the flow-over-a-bump scenarios.
pub const DEFAULT_DOMAIN_LENGTH: f64 = 25.;

/// Initial bathymetry, height and velocity profiles of a simulation.
///
/// All profiles are pure functions of the position `x` in `[0, domain_length]`.
pub trait Scenario {
    fn bathymetry(&self, x: f64) -> f64;

    /// Still water reaches elevation zero by default.
    fn height(&self, x: f64) -> f64 {
        -self.bathymetry(x)
    }

    fn velocity(&self, x: f64) -> f64;

    fn num_cells(&self) -> usize;

    fn domain_length(&self) -> f64;

    fn cell_size(&self) -> f64 {
        self.domain_length() / self.num_cells() as f64
    }

    fn name(&self) -> &'static str;
}

/// Subcritical flow over a parabolic bump (Froude number below one everywhere).
pub struct SubCriticalFlow {
    num_cells: usize,
    domain_length: f64,
}

impl SubCriticalFlow {
    /// Constant discharge hu (in m^2/s).
    pub const DISCHARGE: f64 = 4.42;

    pub fn new(num_cells: usize) -> Self {
        Self::with_domain_length(num_cells, DEFAULT_DOMAIN_LENGTH)
    }

    pub fn with_domain_length(num_cells: usize, domain_length: f64) -> Self {
        Self {
            num_cells,
            domain_length,
        }
    }
}

impl Scenario for SubCriticalFlow {
    fn bathymetry(&self, x: f64) -> f64 {
        if x > 8. && x < 12. {
            -1.8 - 0.05 * (x - 10.) * (x - 10.)
        } else {
            -2.
        }
    }

    fn velocity(&self, x: f64) -> f64 {
        Self::DISCHARGE / self.height(x)
    }

    fn num_cells(&self) -> usize {
        self.num_cells
    }

    fn domain_length(&self) -> f64 {
        self.domain_length
    }

    fn name(&self) -> &'static str {
        "subcritical"
    }
}

/// Supercritical flow over a parabolic bump (Froude number above one over the bump).
pub struct SuperCriticalFlow {
    num_cells: usize,
    domain_length: f64,
}

impl SuperCriticalFlow {
    /// Constant discharge hu (in m^2/s).
    pub const DISCHARGE: f64 = 0.18;

    pub fn new(num_cells: usize) -> Self {
        Self::with_domain_length(num_cells, DEFAULT_DOMAIN_LENGTH)
    }

    pub fn with_domain_length(num_cells: usize, domain_length: f64) -> Self {
        Self {
            num_cells,
            domain_length,
        }
    }
}

impl Scenario for SuperCriticalFlow {
    fn bathymetry(&self, x: f64) -> f64 {
        if (8. ..=12.).contains(&x) {
            -0.13 - 0.05 * (x - 10.) * (x - 10.)
        } else {
            -0.33
        }
    }

    fn velocity(&self, x: f64) -> f64 {
        Self::DISCHARGE / self.height(x)
    }

    fn num_cells(&self) -> usize {
        self.num_cells
    }

    fn domain_length(&self) -> f64 {
        self.domain_length
    }

    fn name(&self) -> &'static str {
        "supercritical"
    }
}

/// Water at rest on a flat bottom with a discontinuity in height at `dam_position`.
///
/// A `height_right` below the dry tolerance turns this into a dam break onto a dry bed.
pub struct DamBreak {
    num_cells: usize,
    domain_length: f64,
    dam_position: f64,
    height_left: f64,
    height_right: f64,
}

impl DamBreak {
    pub fn new(
        num_cells: usize,
        domain_length: f64,
        dam_position: f64,
        height_left: f64,
        height_right: f64,
    ) -> Self {
        Self {
            num_cells,
            domain_length,
            dam_position,
            height_left,
            height_right,
        }
    }
}

impl Scenario for DamBreak {
    fn bathymetry(&self, _x: f64) -> f64 {
        0.
    }

    fn height(&self, x: f64) -> f64 {
        if x < self.dam_position {
            self.height_left
        } else {
            self.height_right
        }
    }

    fn velocity(&self, _x: f64) -> f64 {
        0.
    }

    fn num_cells(&self) -> usize {
        self.num_cells
    }

    fn domain_length(&self) -> f64 {
        self.domain_length
    }

    fn name(&self) -> &'static str {
        "dambreak"
    }
}

/// Builds a scenario from the `scenario` section of a configuration file.
pub fn create_scenario(cfg: &Yaml) -> Result<Box<dyn Scenario>, ConfigError> {
    let kind = required_str(cfg, "kind", "scenario")?;
    let num_cells = required_usize(cfg, "num_cells", "scenario")?;
    if num_cells == 0 {
        return Err(ConfigError::invalid("scenario:num_cells", "need at least one cell"));
    }
    let domain_length = yaml_f64(cfg, "domain_length").unwrap_or(DEFAULT_DOMAIN_LENGTH);
    if !(domain_length > 0.) {
        return Err(ConfigError::invalid(
            "scenario:domain_length",
            format!("must be positive, found {domain_length}"),
        ));
    }

    match kind {
        "subcritical" => Ok(Box::new(SubCriticalFlow::with_domain_length(num_cells, domain_length))),
        "supercritical" => Ok(Box::new(SuperCriticalFlow::with_domain_length(num_cells, domain_length))),
        "dambreak" => {
            let dam_position = yaml_f64(cfg, "dam_position").unwrap_or(0.5 * domain_length);
            let height_left = yaml_f64(cfg, "height_left").unwrap_or(10.);
            let height_right = yaml_f64(cfg, "height_right").unwrap_or(5.);
            if height_left < 0. || height_right < 0. {
                return Err(ConfigError::invalid(
                    "scenario:height_left/height_right",
                    "water heights cannot be negative",
                ));
            }
            Ok(Box::new(DamBreak::new(
                num_cells,
                domain_length,
                dam_position,
                height_left,
                height_right,
            )))
        }
        _ => Err(ConfigError::UnknownScenario(kind.to_string())),
    }
}
