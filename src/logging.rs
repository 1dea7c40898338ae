//! Tracing subscriber setup.
//!
//! Output goes to the `--log-file` when one is given. Without one, the
//! interactive UI stays silent (stderr would corrupt the screen) and the
//! line-oriented commands log warnings to stderr.

use std::error::Error;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::core::constants::LOG_FILTER_ENV_VAR;

/// Where tracing output should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Disabled,
}

impl<'a> LogTarget<'a> {
    /// Pick a target from the optional log file and whether the TUI will run.
    pub fn select(log_file: Option<&'a Path>, interactive: bool) -> Self {
        match (log_file, interactive) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Disabled,
            (None, false) => LogTarget::Stderr,
        }
    }

    fn default_directive(self) -> &'static str {
        match self {
            LogTarget::File(_) => "info",
            LogTarget::Stderr | LogTarget::Disabled => "warn",
        }
    }
}

/// Build the filter from `DASTUR_LOG`, falling back to the target's default.
pub fn build_filter(target: LogTarget<'_>) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(target.default_directive()))
}

pub fn init_logging(target: LogTarget<'_>) -> Result<(), Box<dyn Error>> {
    let filter = build_filter(target);

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|err| -> Box<dyn Error> { err.to_string().into() })
}
