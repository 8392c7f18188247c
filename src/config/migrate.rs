use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys every configuration file is expected to carry.
pub const EXPECTED_KEYS: [&str; 5] = [
    "api_base_url",
    "storage_file",
    "default_page_size",
    "request_timeout_secs",
    "log_level",
];

/// Return the expected keys that are absent from a parsed YAML document.
/// A document that is not a mapping is missing everything.
pub fn missing_fields(yaml: &Value) -> Vec<&'static str> {
    match yaml.as_mapping() {
        Some(map) => EXPECTED_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect(),
        None => EXPECTED_KEYS.to_vec(),
    }
}

/// Read the file at `path` and report missing keys.
pub fn check_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    Ok(missing_fields(&yaml))
}

/// Add every missing key with its default value, preserving the values (and
/// any unknown keys) already present. Returns the keys that were added.
pub fn migrate_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    let mut yaml: Value = serde_yaml::from_str(&content)?;

    let missing = missing_fields(&yaml);
    if missing.is_empty() {
        return Ok(missing);
    }

    let defaults = serde_yaml::to_value(Config::default())?;
    let mut map = yaml.as_mapping().cloned().unwrap_or_else(Mapping::new);

    for key in &missing {
        let k = Value::String((*key).to_string());
        if let Some(v) = defaults.get(*key) {
            map.insert(k, v.clone());
        }
    }

    yaml = Value::Mapping(map);
    fs::write(path, serde_yaml::to_string(&yaml)?)?;

    Ok(missing)
}
