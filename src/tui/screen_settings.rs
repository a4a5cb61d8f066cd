//! Screen settings storage and defaults for TUI startup.

use std::sync::OnceLock;
use std::time::Duration;

use super::state::{DEFAULT_NOTIFICATION_TTL, ScreenVariant};

/// Default delay between triggering enrich-all and its completion notice.
pub const DEFAULT_ENRICH_DELAY: Duration = Duration::from_millis(2_000);

/// Global storage for screen settings.
///
/// This is set before TUI startup from CLI/config sources. When not provided,
/// the application falls back to built-in defaults.
static SCREEN_SETTINGS: OnceLock<ScreenSettings> = OnceLock::new();

/// Presentation and timing settings for the review screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSettings {
    /// Which screen variant to present.
    pub variant: ScreenVariant,
    /// How long each notification stays visible.
    pub notification_ttl: Duration,
    /// Delay before an enrich-all run reports completion.
    pub enrich_delay: Duration,
}

impl Default for ScreenSettings {
    fn default() -> Self {
        Self {
            variant: ScreenVariant::default(),
            notification_ttl: DEFAULT_NOTIFICATION_TTL,
            enrich_delay: DEFAULT_ENRICH_DELAY,
        }
    }
}

impl ScreenSettings {
    /// Returns the settings with a different variant.
    #[must_use]
    pub const fn with_variant(self, variant: ScreenVariant) -> Self {
        Self { variant, ..self }
    }
}

/// Sets screen settings for TUI startup.
///
/// Returns `true` when the value is set for the first time, or `false` when a
/// prior value already exists.
pub fn set_screen_settings(settings: ScreenSettings) -> bool {
    SCREEN_SETTINGS.set(settings).is_ok()
}

/// Gets screen settings, falling back to defaults.
pub(crate) fn get_screen_settings() -> ScreenSettings {
    SCREEN_SETTINGS.get().copied().unwrap_or_default()
}
