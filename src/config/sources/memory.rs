use super::SettingSource;
use std::collections::HashMap;

/// In-memory settings, for hosts that already hold their settings in a map.
#[derive(Debug, Clone, Default)]
pub struct MapSettings {
    values: HashMap<String, String>,
}

impl MapSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }
}

impl SettingSource for MapSettings {
    fn get_setting(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}
