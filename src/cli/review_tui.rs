//! TUI mode for reviewing applications.
//!
//! This module provides the entry point for the interactive terminal user
//! interface that lets operators triage incoming applications.

use std::io::{self, Write};

use bubbletea_rs::Program;

use triage::tui::{ReviewApp, set_initial_records, set_screen_settings};
use triage::{TriageConfig, TriageError};

/// Runs the review screen over the configured records.
///
/// # Errors
///
/// Returns an error if:
/// - The screen variant is unknown
/// - The seed file cannot be read or is invalid
/// - The TUI fails to initialise
pub async fn run(config: &TriageConfig) -> Result<(), TriageError> {
    let settings = config.screen_settings()?;
    let records = config.load_records()?;
    tracing::info!(
        "starting {} screen with {} records",
        settings.variant,
        records.len()
    );

    // Store startup data for Model::init() to retrieve. If already set,
    // this is a no-op and the existing data remains.
    let _ = set_initial_records(records);
    let _ = set_screen_settings(settings);

    run_tui().await.map_err(|error| TriageError::Tui {
        message: error.to_string(),
    })?;

    Ok(())
}

/// Runs the bubbletea-rs program with the `ReviewApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    // ReviewApp::init() retrieves data from module-level storage.
    let program = Program::<ReviewApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    // Ensure stdout is flushed
    io::stdout().flush().ok();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_app_can_be_created_empty() {
        let app = ReviewApp::empty();
        assert!(app.rows().is_empty());
    }
}
