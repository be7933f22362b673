//! Config file management
//!
//! The config lives at `$RANGEPICK_CONFIG` when set, otherwise at
//! `<user config dir>/rangepick/config.toml`. A missing file means defaults.
//!
//! ```toml
//! [debounce]
//! cooldown_ms = 200
//! mode = "trailing"
//!
//! [datepicker]
//! sundayFirst = false
//!
//! [datepicker.colors]
//! selectedText = "#fff"
//! ```

use crate::error::ConfigError;
use crate::mode::DebounceSettings;
use crate::options::DatepickerOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "RANGEPICK_CONFIG";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub debounce: DebounceSettings,

    #[serde(default)]
    pub datepicker: DatepickerOptions,
}

impl PickerConfig {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.debounce.validate()?;
        self.datepicker.validate()
    }

    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: PickerConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Read a single value by dotted key (e.g. `datepicker.colors.selected`)
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let root = toml::Value::try_from(self)?;
        let value = lookup(&root, key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        Ok(match value {
            toml::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a scalar value by dotted key
    ///
    /// The new value is parsed as the type of the current one, and the
    /// resulting config is validated before it replaces `self`.
    pub fn set(&mut self, key: &str, raw: &str) -> Result<(), ConfigError> {
        let mut root = toml::Value::try_from(&*self)?;
        let slot = lookup_mut(&mut root, key).ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;

        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            value: raw.to_string(),
            reason: reason.to_string(),
        };

        *slot = match slot {
            toml::Value::String(_) => toml::Value::String(raw.to_string()),
            toml::Value::Integer(_) => toml::Value::Integer(
                raw.trim()
                    .parse()
                    .map_err(|_| invalid("must be an integer"))?,
            ),
            toml::Value::Boolean(_) => toml::Value::Boolean(
                raw.trim()
                    .parse()
                    .map_err(|_| invalid("must be 'true' or 'false'"))?,
            ),
            _ => return Err(invalid("only scalar values can be set")),
        };

        let updated: PickerConfig = root.try_into()?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Dotted keys of every settable scalar
    pub fn scalar_keys(&self) -> Result<Vec<String>, ConfigError> {
        let root = toml::Value::try_from(self)?;
        let mut keys = Vec::new();
        collect_scalar_keys(&root, String::new(), &mut keys);
        Ok(keys)
    }
}

fn lookup<'a>(root: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(root, |value, part| value.as_table()?.get(part))
}

fn lookup_mut<'a>(root: &'a mut toml::Value, key: &str) -> Option<&'a mut toml::Value> {
    key.split('.')
        .try_fold(root, |value, part| value.as_table_mut()?.get_mut(part))
}

fn collect_scalar_keys(value: &toml::Value, prefix: String, out: &mut Vec<String>) {
    match value {
        toml::Value::Table(table) => {
            for (name, child) in table {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                collect_scalar_keys(child, key, out);
            }
        }
        toml::Value::Array(_) => {}
        _ => out.push(prefix),
    }
}

/// Resolve the config file location
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("rangepick").join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}

/// Load config from the default location
pub fn load() -> Result<PickerConfig, ConfigError> {
    load_from(&config_file_path()?)
}

/// Load config from a specific file (defaults when the file does not exist)
pub fn load_from(path: &Path) -> Result<PickerConfig, ConfigError> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(PickerConfig::default());
    }

    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Loaded config from {}", path.display());
    PickerConfig::from_toml(&text)
}

/// Save config to the default location
pub fn save(config: &PickerConfig) -> Result<(), ConfigError> {
    save_to(config, &config_file_path()?)
}

/// Validate and write config to a specific file
pub fn save_to(config: &PickerConfig, path: &Path) -> Result<(), ConfigError> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, config.to_toml()?).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a default config file if none exists, returning its path
pub fn init_if_missing() -> Result<PathBuf, ConfigError> {
    let path = config_file_path()?;
    if !path.exists() {
        save_to(&PickerConfig::default(), &path)?;
    }
    Ok(path)
}

/// Annotated default config
pub fn example_config() -> Result<String, ConfigError> {
    let body = PickerConfig::default().to_toml()?;
    Ok(format!(
        "# rangepick configuration\n\
         #\n\
         # debounce.cooldown_ms: 0-600000\n\
         # debounce.mode: \"leading\" or \"trailing\"\n\
         # debounce.extend_leading_window: re-arm leading suppression on every trigger\n\
         \n{}",
        body
    ))
}
