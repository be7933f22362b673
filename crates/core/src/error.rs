//! Error types for configuration and construction

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading configuration
///
/// These are always reported eagerly (at construction or load time), never
/// deferred to the first use of a debouncer.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cooldown must be non-negative, got {0}ms")]
    NegativeCooldown(i64),

    #[error("cooldown of {value}ms exceeds the maximum of {max}ms")]
    CooldownOutOfRange { value: i64, max: i64 },

    #[error("unrecognized debounce mode '{0}' (expected 'leading' or 'trailing')")]
    UnknownMode(String),

    #[error("invalid option `{field}`: {reason}")]
    InvalidOption { field: String, reason: String },

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    #[error("invalid value '{value}' for `{key}`: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("could not determine the user config directory")]
    NoConfigDir,

    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl ConfigError {
    pub(crate) fn invalid_option(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
