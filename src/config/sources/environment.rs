//! Process environment source, used as the fallback behind host settings.

use super::SettingSource;

/// Reads settings from the process environment under their literal names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentSettings;

impl SettingSource for EnvironmentSettings {
    fn get_setting(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
