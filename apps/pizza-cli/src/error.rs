//! Error types for the console app.

use std::io;
use std::path::PathBuf;

use pizza_core::CoreError;

use crate::config::ConfigError;

/// Everything that can end an ordering session early.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Business rule rejected the selection.
    #[error("{0}")]
    Order(#[from] CoreError),

    #[error("Cannot read menu {path}: {source}")]
    MenuRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid menu {path}: {source}")]
    MenuParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid menu {path}: {source}")]
    MenuInvalid {
        path: PathBuf,
        #[source]
        source: CoreError,
    },

    /// Input ended before the order was complete.
    #[error("Input closed before the order was complete")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
