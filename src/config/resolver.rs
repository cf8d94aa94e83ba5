//! Glif configuration resolution: host settings first, then the fallback source.

use super::sources::{EnvironmentSettings, SettingSource};
use super::validation::{ConfigError, FieldIssue};
use super::{
    DEFAULT_API_URL, DEFAULT_STRICT_MODE, GLIF_API_TOKEN, GLIF_API_URL, GLIF_STRICT_MODE,
};
use serde::Serialize;

/// Resolved connection settings for one invocation.
#[derive(Clone, PartialEq, Eq)]
pub struct GlifConfig {
    pub api_token: String,
    pub api_url: String,
    pub strict_mode: bool,
}

/// Printable view of a [`GlifConfig`] with the token hidden.
#[derive(Debug, Clone, Serialize)]
pub struct GlifConfigSummary {
    pub api_token: &'static str,
    pub api_url: String,
    pub strict_mode: bool,
}

impl GlifConfig {
    pub fn summary(&self) -> GlifConfigSummary {
        GlifConfigSummary {
            api_token: "<redacted>",
            api_url: self.api_url.clone(),
            strict_mode: self.strict_mode,
        }
    }
}

impl std::fmt::Debug for GlifConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlifConfig")
            .field("api_token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("strict_mode", &self.strict_mode)
            .finish()
    }
}

/// Builds a [`GlifConfig`] from host settings, falling back to a second source
/// (the process environment unless overridden).
pub struct ConfigResolver {
    fallback: Box<dyn SettingSource>,
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self::with_fallback(EnvironmentSettings)
    }

    pub fn with_fallback(fallback: impl SettingSource + 'static) -> Self {
        Self {
            fallback: Box::new(fallback),
        }
    }

    /// Resolve the configuration, collecting every field issue before failing.
    pub fn resolve(&self, host: &dyn SettingSource) -> Result<GlifConfig, ConfigError> {
        let mut issues = Vec::new();

        let api_token = self.lookup(host, GLIF_API_TOKEN);
        if api_token.is_none() {
            issues.push(FieldIssue::required(GLIF_API_TOKEN));
        }

        let api_url = self
            .lookup(host, GLIF_API_URL)
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let strict_mode = self.flag(host, GLIF_STRICT_MODE, DEFAULT_STRICT_MODE);

        match api_token {
            Some(api_token) if issues.is_empty() => Ok(GlifConfig {
                api_token,
                api_url,
                strict_mode,
            }),
            _ => Err(ConfigError::Validation(issues)),
        }
    }

    /// Host value wins; empty strings count as unset in both sources.
    fn lookup(&self, host: &dyn SettingSource, name: &str) -> Option<String> {
        host.get_setting(name)
            .filter(|value| !value.is_empty())
            .or_else(|| self.fallback.get_setting(name).filter(|value| !value.is_empty()))
    }

    /// True when either source holds exactly `"true"`.
    fn flag(&self, host: &dyn SettingSource, name: &str, default: bool) -> bool {
        let host_value = host.get_setting(name);
        let fallback_value = self.fallback.get_setting(name);
        if host_value.is_none() && fallback_value.is_none() {
            return default;
        }
        host_value.as_deref() == Some("true") || fallback_value.as_deref() == Some("true")
    }
}
