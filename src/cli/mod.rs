//! Command-line interface parsing and handling
//!
//! This module parses command-line arguments, prepares logging and settings,
//! and dispatches to the chat UI or one of the line-oriented commands.

pub mod say;
pub mod settings;

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::cli::say::{run_say, EXIT_USAGE};
use crate::cli::settings::{SettingError, SettingRegistry};
use crate::core::config::data::{path_display, Config};
use crate::core::constants::ENDPOINT_ENV_VAR;
use crate::logging::{init_logging, LogTarget};
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "dastur")]
#[command(version)]
#[command(about = "A terminal chat client for a Pakistan Constitution assistant")]
#[command(
    long_about = "Dastur is a full-screen terminal chat client that sends each question to a \
chat endpoint and shows the reply as a conversation.\n\n\
Environment Variables:\n\
  DASTUR_ENDPOINT   Chat endpoint URL (overrides the config file)\n\
  DASTUR_LOG        Tracing filter, e.g. 'debug' or 'dastur=trace'\n\n\
Controls:\n\
  Enter             Send the message\n\
  Alt+Enter         Insert a new line\n\
  Tab               Switch between the input and the sidebar\n\
  Up/Down           Scroll the conversation (or move in the sidebar)\n\
  PageUp/PageDown   Scroll a page at a time\n\
  Ctrl+N            Start a new chat\n\
  Ctrl+L            Clear the chat\n\
  Ctrl+C            Quit the application"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Chat endpoint URL
    #[arg(long, global = true, env = ENDPOINT_ENV_VAR, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Write tracing output to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send one prompt and print the reply without starting the UI
    Say {
        /// The prompt; multiple words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set
        key: String,
        /// Value to set for the key
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Unset a configuration value
    Unset {
        /// Configuration key to unset
        key: String,
    },
    /// Show the current configuration
    Config,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.unwrap_or(Commands::Chat);

    let interactive = command == Commands::Chat;
    init_logging(LogTarget::select(args.log_file.as_deref(), interactive))?;
    debug!(?command, "dispatching command");

    match command {
        Commands::Chat => {
            let config = Config::load()?;
            let settings = config.resolve(args.endpoint.as_deref())?;
            run_chat(settings).await
        }
        Commands::Say { prompt } => {
            if prompt.is_empty() {
                eprintln!("Usage: dastur say <prompt>");
                std::process::exit(EXIT_USAGE);
            }
            let config = Config::load()?;
            let settings = config.resolve(args.endpoint.as_deref())?;
            run_say(prompt, settings).await
        }
        Commands::Set { key, value } => {
            run_setting_command(|registry, config| apply_set(registry, config, &key, &value))
        }
        Commands::Unset { key } => {
            run_setting_command(|registry, config| apply_unset(registry, config, &key))
        }
        Commands::Config => print_config(),
    }
}

/// Load the config, apply `change`, and save only when it succeeds.
fn run_setting_command<F>(change: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&SettingRegistry, &mut Config) -> Result<String, SettingError>,
{
    let registry = SettingRegistry::new();
    let outcome = Config::load()
        .map_err(|err| SettingError::ConfigError(err.to_string()))
        .and_then(|mut config| {
            let message = change(&registry, &mut config)?;
            config
                .save()
                .map_err(|err| SettingError::ConfigError(err.to_string()))?;
            Ok(message)
        });

    match outcome {
        Ok(message) => {
            println!("{message}");
            Ok(())
        }
        Err(err) => {
            err.print();
            std::process::exit(err.exit_code());
        }
    }
}

pub(crate) fn apply_set(
    registry: &SettingRegistry,
    config: &mut Config,
    key: &str,
    value: &[String],
) -> Result<String, SettingError> {
    registry.get(key)?.set(value, config)
}

pub(crate) fn apply_unset(
    registry: &SettingRegistry,
    config: &mut Config,
    key: &str,
) -> Result<String, SettingError> {
    registry.get(key)?.unset(config)
}

fn print_config() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let registry = SettingRegistry::new();

    match Config::get_config_path() {
        Ok(path) => println!("Configuration ({}):", path_display(path)),
        Err(_) => println!("Configuration:"),
    }
    for line in registry.format_all(&config) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests;
