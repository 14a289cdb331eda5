use yaml_rust::Yaml;

use crate::errors::ConfigError;

/// Reads a real number from a yaml mapping, also accepting integer literals.
pub fn yaml_f64(yaml: &Yaml, key: &str) -> Option<f64> {
    match &yaml[key] {
        Yaml::Real(_) => yaml[key].as_f64(),
        Yaml::Integer(i) => Some(*i as f64),
        _ => None,
    }
}

pub fn required_f64(yaml: &Yaml, key: &str, section: &str) -> Result<f64, ConfigError> {
    yaml_f64(yaml, key).ok_or_else(|| ConfigError::MissingParameter(format!("{section}:{key}")))
}

pub fn required_str<'a>(yaml: &'a Yaml, key: &str, section: &str) -> Result<&'a str, ConfigError> {
    yaml[key]
        .as_str()
        .ok_or_else(|| ConfigError::MissingParameter(format!("{section}:{key}")))
}

pub fn required_usize(yaml: &Yaml, key: &str, section: &str) -> Result<usize, ConfigError> {
    let value = yaml[key]
        .as_i64()
        .ok_or_else(|| ConfigError::MissingParameter(format!("{section}:{key}")))?;
    usize::try_from(value).map_err(|_| {
        ConfigError::invalid(&format!("{section}:{key}"), format!("expected a non-negative integer, found {value}"))
    })
}
