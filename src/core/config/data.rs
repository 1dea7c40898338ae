use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{DEFAULT_ENDPOINT, DEFAULT_TOAST_SECS};
use crate::utils::url::parse_endpoint;

/// On-disk configuration. Every field is optional; unset means built-in default.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Full URL of the chat endpoint (e.g., "http://127.0.0.1:8000/api/chat")
    pub endpoint: Option<String>,
    /// Give up on a request after this many seconds; unset or 0 waits forever
    pub request_timeout_secs: Option<u64>,
    /// How long toasts stay on screen, in seconds
    pub toast_duration_secs: Option<u64>,
}

/// Runtime settings after flags, environment and config have been merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub request_timeout: Option<Duration>,
    pub toast_duration: Duration,
}

impl Config {
    /// Merge this config with an endpoint override from the command line or
    /// environment. The override wins; otherwise the config, then the default.
    pub fn resolve(&self, endpoint_override: Option<&str>) -> Result<ClientSettings, String> {
        let raw_endpoint = endpoint_override
            .or(self.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT);

        Ok(ClientSettings {
            endpoint: parse_endpoint(raw_endpoint)?,
            request_timeout: self.request_timeout(),
            toast_duration: self.toast_duration(),
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.toast_duration_secs.unwrap_or(DEFAULT_TOAST_SECS))
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
///
/// # Examples
/// - Unix: `/home/user/.config/dastur/config.toml` → `~/.config/dastur/config.toml`
/// - macOS: `/Users/user/Library/Application Support/...` → `~/Library/Application Support/...`
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
