//! Settings file source (TOML, YAML or JSON, picked by extension).

use super::SettingSource;
use crate::config::ConfigError;
use config::{Config, File, Value};
use std::collections::HashMap;
use std::path::Path;

/// Flat settings loaded from a file, e.g.
///
/// ```toml
/// GLIF_API_TOKEN = "glif_..."
/// GLIF_STRICT_MODE = true
/// ```
///
/// Keys match case-insensitively. Scalar values of any type are kept in their
/// string form, so `true` and `"true"` read the same.
#[derive(Debug, Clone, Default)]
pub struct FileSettings {
    values: HashMap<String, String>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).required(true))
            .build()
            .map_err(|e| {
                ConfigError::Source(format!(
                    "Failed to load settings file {}: {}",
                    path.display(),
                    e
                ))
            })?;

        let table: HashMap<String, Value> = settings.try_deserialize().map_err(|e| {
            ConfigError::Source(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut values = HashMap::new();
        for (key, value) in table {
            let value = value.into_string().map_err(|e| {
                ConfigError::Source(format!(
                    "Setting {} in {} must be a scalar value: {}",
                    key,
                    path.display(),
                    e
                ))
            })?;
            values.insert(key.to_ascii_uppercase(), value);
        }

        tracing::debug!(path = %path.display(), keys = values.len(), "Loaded settings file");
        Ok(Self { values })
    }
}

impl SettingSource for FileSettings {
    fn get_setting(&self, name: &str) -> Option<String> {
        self.values.get(&name.to_ascii_uppercase()).cloned()
    }
}
