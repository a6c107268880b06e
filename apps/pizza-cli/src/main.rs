//! # Pizza Builder
//!
//! Interactive console ordering over pizza-core.
//!
//! ## Usage
//! ```bash
//! # Built-in menu
//! cargo run -p pizza-cli
//!
//! # Custom menu, JSON summary
//! cargo run -p pizza-cli -- --menu ./menu.json --json
//!
//! # Verbose logs (written to stderr)
//! PIZZA_LOG=debug cargo run -p pizza-cli
//! ```

use std::env;
use std::io;

use pizza_cli::config::{AppConfig, Command, ConfigError, USAGE};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match AppConfig::load()?.with_args(env::args().skip(1))? {
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Order(config) => config,
    };

    // Logs go to stderr so prompts and JSON on stdout stay clean
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|_| ConfigError::InvalidValue("PIZZA_LOG".to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();

    info!(
        menu = ?config.menu_path,
        output = ?config.output,
        "Configuration loaded"
    );

    let stdin = io::stdin();
    match pizza_cli::run(&config, stdin.lock(), io::stdout()) {
        Ok(summary) => {
            info!(order_id = %summary.order_id, "Session complete");
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Session failed");
            Err(e.into())
        }
    }
}
