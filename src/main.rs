//! Triage CLI entrypoint for the application review screen.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use triage::{TriageConfig, TriageError};

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), TriageError> {
    let config = load_config()?;

    if let Some(path) = config.log_path() {
        triage::logging::init_file_logging(path)?;
    }

    cli::review_tui::run(&config).await
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`TriageError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TriageConfig, TriageError> {
    TriageConfig::load().map_err(|error| TriageError::Configuration {
        message: error.to_string(),
    })
}
