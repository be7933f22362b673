//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use debounce::{DebounceSettings, Mode};
use rp_core::config;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Command-line overrides for the `[debounce]` config section
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub cooldown_ms: Option<i64>,
    pub mode: Option<Mode>,
    pub extend: bool,
}

impl SettingsOverrides {
    /// Apply overrides on top of configured settings
    pub fn apply(&self, mut settings: DebounceSettings) -> DebounceSettings {
        if let Some(cooldown_ms) = self.cooldown_ms {
            settings.cooldown_ms = cooldown_ms;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if self.extend {
            settings.extend_leading_window = true;
        }
        settings
    }
}

/// Load config and resolve the effective, validated debounce settings
pub fn resolve_settings(overrides: &SettingsOverrides) -> Result<DebounceSettings> {
    let config = config::load().context("Failed to load configuration")?;
    let settings = overrides.apply(config.debounce);
    settings.validate().context("Invalid debounce settings")?;
    Ok(settings)
}

/// Format a duration as whole milliseconds ("160ms")
pub fn format_ms(duration: Duration) -> String {
    format!("{}ms", duration.as_millis())
}

/// Trigger times must never go backwards
pub fn check_non_decreasing(times: &[u64]) -> Result<()> {
    if let Some(pair) = times.windows(2).find(|w| w[1] < w[0]) {
        anyhow::bail!(
            "Trigger times must be non-decreasing ({}ms comes after {}ms)",
            pair[1],
            pair[0]
        );
    }
    Ok(())
}
