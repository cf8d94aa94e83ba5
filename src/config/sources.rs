//! Setting sources the resolver reads raw values from.

pub mod environment;
pub mod file;
pub mod memory;

pub use environment::EnvironmentSettings;
pub use file::FileSettings;
pub use memory::MapSettings;

/// Read-only lookup of a named setting.
///
/// `None` means the source does not know the key at all.
pub trait SettingSource: Send + Sync {
    fn get_setting(&self, name: &str) -> Option<String>;
}
