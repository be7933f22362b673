//! Debounce firing policy and its settings

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Largest accepted cooldown (10 minutes)
pub const MAX_COOLDOWN_MS: i64 = 600_000;

/// Which edge of a trigger burst fires the action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fire on the first trigger, then suppress for the cooldown window
    Leading,
    /// Fire once the burst has been quiet for the cooldown window
    #[default]
    Trailing,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Leading => "leading",
            Mode::Trailing => "trailing",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "leading" => Ok(Mode::Leading),
            "trailing" => Ok(Mode::Trailing),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Debounce configuration as read from the `[debounce]` table
///
/// `cooldown_ms` is signed so that a negative value in a config file is
/// reported as a configuration error instead of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebounceSettings {
    /// Debounce window in milliseconds (default: 200)
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: i64,

    /// Firing policy (default: trailing)
    #[serde(default)]
    pub mode: Mode,

    /// Re-arm the leading suppression window on every suppressed trigger
    /// (default: false)
    #[serde(default)]
    pub extend_leading_window: bool,
}

impl Default for DebounceSettings {
    fn default() -> Self {
        Self {
            cooldown_ms: default_cooldown_ms(),
            mode: Mode::default(),
            extend_leading_window: false,
        }
    }
}

impl DebounceSettings {
    pub fn new(cooldown_ms: i64, mode: Mode) -> Self {
        Self {
            cooldown_ms,
            mode,
            extend_leading_window: false,
        }
    }

    /// Validated cooldown as a `Duration`
    pub fn cooldown(&self) -> Result<Duration, ConfigError> {
        if self.cooldown_ms < 0 {
            return Err(ConfigError::NegativeCooldown(self.cooldown_ms));
        }
        if self.cooldown_ms > MAX_COOLDOWN_MS {
            return Err(ConfigError::CooldownOutOfRange {
                value: self.cooldown_ms,
                max: MAX_COOLDOWN_MS,
            });
        }
        Ok(Duration::from_millis(self.cooldown_ms as u64))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.cooldown().map(|_| ())
    }
}

fn default_cooldown_ms() -> i64 {
    200
}
