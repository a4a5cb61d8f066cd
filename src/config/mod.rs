//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.triage.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `TRIAGE_VARIANT`, `TRIAGE_SEED_FILE`, and
//!    so on
//! 4. **Command-line arguments** – `--variant`/`-v`, `--seed-file`/`-s`,
//!    `--log-file`/`-l`
//!
//! # Configuration File
//!
//! ```toml
//! variant = "classic"
//! seed_file = "applications.json"
//! notification_ttl_ms = 3000
//! enrich_delay_ms = 2000
//! log_file = "triage.log"
//! ```

use std::time::Duration;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::error::TriageError;
use crate::review::{self, Record};
use crate::tui::ScreenSettings;
use crate::tui::state::ScreenVariant;

/// Default notification lifetime, in milliseconds.
const DEFAULT_NOTIFICATION_TTL_MS: u64 = 3_000;

/// Default enrich-all completion delay, in milliseconds.
const DEFAULT_ENRICH_DELAY_MS: u64 = 2_000;

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `TRIAGE_VARIANT` or `--variant`: Screen variant
/// - `TRIAGE_SEED_FILE` or `--seed-file`: JSON seed file
/// - `TRIAGE_NOTIFICATION_TTL_MS` or `--notification-ttl-ms`
/// - `TRIAGE_ENRICH_DELAY_MS` or `--enrich-delay-ms`
/// - `TRIAGE_LOG_FILE` or `--log-file`: Diagnostic log destination
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use triage::TriageConfig;
///
/// let config = TriageConfig::load().expect("failed to load configuration");
/// let records = config.load_records().expect("seed data should load");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "TRIAGE",
    discovery(
        dotfile_name = ".triage.toml",
        config_file_name = "triage.toml",
        app_name = "triage"
    )
)]
pub struct TriageConfig {
    /// Screen variant: `classic`, `streamlined`, or `enrichment`.
    ///
    /// Can be provided via:
    /// - CLI: `--variant <NAME>` or `-v <NAME>`
    /// - Environment: `TRIAGE_VARIANT`
    /// - Config file: `variant = "..."`
    ///
    /// Defaults to `enrichment` when unset.
    #[ortho_config(cli_short = 'v')]
    pub variant: Option<String>,

    /// Path to a JSON array of records to review instead of the built-in
    /// seed set.
    ///
    /// Can be provided via:
    /// - CLI: `--seed-file <PATH>` or `-s <PATH>`
    /// - Environment: `TRIAGE_SEED_FILE`
    /// - Config file: `seed_file = "..."`
    #[ortho_config(cli_short = 's')]
    pub seed_file: Option<String>,

    /// How long a notification stays visible, in milliseconds.
    #[ortho_config()]
    pub notification_ttl_ms: u64,

    /// Delay before an enrich-all run reports completion, in milliseconds.
    #[ortho_config()]
    pub enrich_delay_ms: u64,

    /// File receiving diagnostic logs. Logging is off when unset, since
    /// the terminal belongs to the TUI.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>` or `-l <PATH>`
    /// - Environment: `TRIAGE_LOG_FILE`
    /// - Config file: `log_file = "..."`
    #[ortho_config(cli_short = 'l')]
    pub log_file: Option<String>,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            variant: None,
            seed_file: None,
            notification_ttl_ms: DEFAULT_NOTIFICATION_TTL_MS,
            enrich_delay_ms: DEFAULT_ENRICH_DELAY_MS,
            log_file: None,
        }
    }
}

impl TriageConfig {
    /// Resolves the configured screen variant.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Configuration`] when the name is not a known
    /// variant.
    pub fn resolve_variant(&self) -> Result<ScreenVariant, TriageError> {
        self.variant
            .as_deref()
            .map_or_else(|| Ok(ScreenVariant::default()), str::parse)
    }

    /// Notification lifetime as a [`Duration`].
    #[must_use]
    pub const fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }

    /// Enrich-all completion delay as a [`Duration`].
    #[must_use]
    pub const fn enrich_delay(&self) -> Duration {
        Duration::from_millis(self.enrich_delay_ms)
    }

    /// Returns the seed file path, if one is configured.
    #[must_use]
    pub fn seed_path(&self) -> Option<&Utf8Path> {
        self.seed_file.as_deref().map(Utf8Path::new)
    }

    /// Returns the log file path, if one is configured.
    #[must_use]
    pub fn log_path(&self) -> Option<&Utf8Path> {
        self.log_file.as_deref().map(Utf8Path::new)
    }

    /// Builds the screen settings described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::Configuration`] when the variant is unknown.
    pub fn screen_settings(&self) -> Result<ScreenSettings, TriageError> {
        Ok(ScreenSettings {
            variant: self.resolve_variant()?,
            notification_ttl: self.notification_ttl(),
            enrich_delay: self.enrich_delay(),
        })
    }

    /// Loads the records to review: the seed file when configured,
    /// otherwise the built-in set.
    ///
    /// # Errors
    ///
    /// Returns any error from [`review::load_records`].
    pub fn load_records(&self) -> Result<Vec<Record>, TriageError> {
        self.seed_path()
            .map_or_else(|| Ok(review::default_records()), review::load_records)
    }
}

#[cfg(test)]
mod tests;
