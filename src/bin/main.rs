use std::{error::Error, fs, path::PathBuf};

use clap::Parser;
use swe_fwave::{
    create_scenario, ConfigError, Engine, FWaveSolver, RiemannSolverKind, Scalar, Scenario,
    SolverParameters, Space,
};
use yaml_rust::{Yaml, YamlLoader};

#[derive(Parser)]
pub struct Cli {
    /// The path to the config file to read
    #[clap(parse(from_os_str))]
    pub config: PathBuf,
    /// Log filter passed to env_logger, e.g. "debug" or "swe_fwave=trace"
    #[clap(long, default_value = "info")]
    pub log_level: String,
}

enum Precision {
    Single,
    Double,
}

struct SolverCfg {
    kind: RiemannSolverKind,
    precision: Precision,
}

impl SolverCfg {
    fn parse(yaml: &Yaml) -> Result<Self, ConfigError> {
        let kind = RiemannSolverKind::parse(yaml["kind"].as_str().unwrap_or("FWave"))?;
        let precision = match yaml["precision"].as_str().unwrap_or("f64") {
            "f32" => Precision::Single,
            "f64" => Precision::Double,
            other => return Err(ConfigError::UnknownPrecision(other.to_string())),
        };
        Ok(Self { kind, precision })
    }
}

struct Config {
    solver: SolverCfg,
    scenario: Box<dyn Scenario>,
    engine: Engine,
    yaml: Yaml,
}

impl Config {
    fn parse(file: PathBuf) -> Result<Self, Box<dyn Error>> {
        let mut docs = YamlLoader::load_from_str(&fs::read_to_string(file)?)?;
        if docs.is_empty() {
            return Err(Box::new(ConfigError::MissingParameter("scenario".to_string())));
        }
        let yaml = docs.swap_remove(0);

        Ok(Self {
            solver: SolverCfg::parse(&yaml["solver"])?,
            scenario: create_scenario(&yaml["scenario"])?,
            engine: Engine::init(&yaml["engine"])?,
            yaml,
        })
    }
}

fn simulate<T: Scalar>(config: &Config) -> Result<(), Box<dyn Error>> {
    let params = SolverParameters::<T>::init(&config.yaml["solver"])?;
    let solver = match config.solver.kind {
        RiemannSolverKind::FWave => FWaveSolver::new(params),
    };
    let mut space = Space::<T>::init(config.scenario.as_ref(), &config.yaml["space"])?;
    log::info!(
        "Scenario {}: domain length {}, {} cells",
        config.scenario.name(),
        config.scenario.domain_length(),
        config.scenario.num_cells()
    );

    let summary = config.engine.run(&mut space, &solver)?;
    log::info!(
        "Done! {} steps, t = {}, last max wave speed {}",
        summary.steps,
        summary.time,
        summary.max_wave_speed
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // parse command line parameters
    let args = Cli::parse();
    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .format_timestamp_millis()
        .init();

    // read configuration
    let config = Config::parse(args.config)?;

    // run
    match config.solver.precision {
        Precision::Single => simulate::<f32>(&config),
        Precision::Double => simulate::<f64>(&config),
    }
}
