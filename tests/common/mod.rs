#![allow(dead_code)]

use swe_fwave::{create_scenario, Engine, FWaveSolver, Scalar, SolverParameters, Space};
use yaml_rust::{Yaml, YamlLoader};

pub const SOLVER_CONFIG: &'static str = r##"
kind: "FWave"
gravity: 9.81
zero_tol: 1e-7
dry_tol: 0.01
"##;

pub const SUBCRITICAL_CONFIG: &'static str = r##"
kind: "subcritical"
num_cells: 100
"##;

pub const SUPERCRITICAL_CONFIG: &'static str = r##"
kind: "supercritical"
num_cells: 100
"##;

pub const DAMBREAK_CONFIG: &'static str = r##"
kind: "dambreak"
num_cells: 200
domain_length: 50.
dam_position: 25.
height_left: 10.
height_right: 5.
"##;

pub const DRY_DAMBREAK_CONFIG: &'static str = r##"
kind: "dambreak"
num_cells: 200
domain_length: 50.
dam_position: 20.
height_left: 3.
height_right: 0.
"##;

pub const OPEN_SPACE_CONFIG: &'static str = r##"
boundary: "open"
"##;

pub const REFLECTIVE_SPACE_CONFIG: &'static str = r##"
boundary: "reflective"
"##;

pub const ENGINE_CONFIG: &'static str = r##"
cfl: 0.4
t_end: 1.
dt_status: 0.25
"##;

fn load(cfg: &str) -> Yaml {
    YamlLoader::load_from_str(cfg).expect("Error loading cfg!").swap_remove(0)
}

pub fn get_solver<T: Scalar>(cfg: &str) -> FWaveSolver<T> {
    FWaveSolver::new(SolverParameters::init(&load(cfg)).expect("Error creating solver parameters!"))
}

pub fn get_space<T: Scalar>(scenario_cfg: &str, space_cfg: &str) -> Space<T> {
    let scenario = create_scenario(&load(scenario_cfg)).expect("Error creating scenario!");
    Space::init(scenario.as_ref(), &load(space_cfg)).expect("Error creating Space")
}

pub fn get_engine(cfg: &str) -> Engine {
    Engine::init(&load(cfg)).expect("Error initializing engine!")
}
