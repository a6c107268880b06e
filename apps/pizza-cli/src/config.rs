//! Console app configuration.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--menu`, `--json`)
//! 2. Environment variables (`PIZZA_*`)
//! 3. Defaults (this file)

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default log filter when neither `PIZZA_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const USAGE: &str = "\
Pizza Builder

Usage: pizza-builder [OPTIONS]

Options:
  -m, --menu <PATH>    Load the menu from a JSON file instead of the built-in one
  -j, --json           Print the order summary as JSON
  -h, --help           Show this help message

Environment:
  PIZZA_MENU_PATH      Same as --menu
  PIZZA_OUTPUT         text | json (default: text)
  PIZZA_LOG            Log filter, e.g. info or pizza_cli=debug (default: warn)";

/// How the final order summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("PIZZA_OUTPUT".to_string())),
        }
    }
}

/// Console app configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Menu file; `None` uses the built-in catalog
    pub menu_path: Option<PathBuf>,

    /// `tracing` filter directive
    pub log_filter: String,

    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            menu_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::Text,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Take an order with this configuration.
    Order(AppConfig),
    /// Print usage and exit.
    Help,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|key| env::var(key).ok())
    }

    /// Load configuration through a variable lookup (tests pass a map).
    pub fn load_from<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();

        let menu_path = lookup("PIZZA_MENU_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = lookup("PIZZA_LOG")
            .or_else(|| lookup("RUST_LOG"))
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let output = match lookup("PIZZA_OUTPUT") {
            Some(value) => value.parse()?,
            None => defaults.output,
        };

        Ok(AppConfig {
            menu_path,
            log_filter,
            output,
        })
    }

    /// Apply command-line flags on top of this configuration.
    ///
    /// `args` excludes the program name.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_ref() {
                "--menu" | "-m" => {
                    let path = args
                        .next()
                        .ok_or_else(|| ConfigError::MissingRequired("--menu <PATH>".to_string()))?;
                    self.menu_path = Some(PathBuf::from(path.as_ref()));
                }
                "--json" | "-j" => self.output = OutputFormat::Json,
                "--help" | "-h" => return Ok(Command::Help),
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }
        Ok(Command::Order(self))
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}
