//! Rangepick Core - shared types for the rangepick date-range picker
//!
//! This crate provides:
//! - Configuration error taxonomy
//! - Debounce settings (firing mode + cooldown)
//! - The picker's public options model and its defaults
//! - Config file management (TOML)

pub mod error;
pub mod mode;
pub mod options;
pub mod config;

// Re-export main types for convenience
pub use error::ConfigError;
pub use mode::{DebounceSettings, Mode, MAX_COOLDOWN_MS};
pub use options::{Colors, DatepickerOptions, KeyboardShortcut, Keys, Texts};
pub use config::PickerConfig;

/// Common result type used throughout rangepick-core
pub type Result<T> = std::result::Result<T, ConfigError>;
