//! Configuration
//!
//! Resolves the Glif connection settings from the host's named settings with a
//! process environment fallback. Resolution happens on every invocation; nothing
//! is cached.

pub mod resolver;
pub mod sources;
pub mod validation;

pub use resolver::{ConfigResolver, GlifConfig};
pub use sources::{EnvironmentSettings, FileSettings, MapSettings, SettingSource};
pub use validation::{ConfigError, FieldIssue};

/// Bearer token for the Glif API. Required.
pub const GLIF_API_TOKEN: &str = "GLIF_API_TOKEN";

/// Base URL runs are posted to.
pub const GLIF_API_URL: &str = "GLIF_API_URL";

/// Asks the Glif API to validate inputs strictly.
pub const GLIF_STRICT_MODE: &str = "GLIF_STRICT_MODE";

pub const DEFAULT_API_URL: &str = "https://simple-api.glif.app";

pub const DEFAULT_STRICT_MODE: bool = false;
