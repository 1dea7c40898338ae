//! Settings management for CLI set/unset commands.
//!
//! Each configuration key has a [`SettingHandler`]; the [`SettingRegistry`]
//! maps keys to handlers and fixes the order used when printing.

pub mod error;
pub mod handlers;
pub mod registry;

pub use error::SettingError;
pub use registry::SettingRegistry;

use crate::core::config::data::Config;

/// Trait for handling a configuration setting.
pub trait SettingHandler: Send + Sync {
    /// Returns the configuration key this handler manages.
    fn key(&self) -> &'static str;

    /// Apply `args` to `config`, returning a success message to display.
    fn set(&self, args: &[String], config: &mut Config) -> Result<String, SettingError>;

    /// Clear the value from `config`, returning a success message to display.
    fn unset(&self, config: &mut Config) -> Result<String, SettingError>;

    /// Format the current value for display in `dastur config` output.
    fn format(&self, config: &Config) -> String;
}

pub(crate) fn success_set(key: &str, value: &str) -> String {
    format!("✅ Set {key} to: {value}")
}

pub(crate) fn success_unset(key: &str) -> String {
    format!("✅ Unset {key}")
}
