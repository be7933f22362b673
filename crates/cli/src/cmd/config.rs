//! Configuration management command
//!
//! Provides CLI interface to view and edit the rangepick configuration.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rp_core::config::{self, PickerConfig};
use rp_core::MAX_COOLDOWN_MS;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// List all configuration values
pub async fn run_list() -> Result<()> {
    let config = config::load()?;
    let config_path = config::config_file_path()
        .context("Could not determine config file path")?;

    println!("{}", "Rangepick Configuration".bold());
    println!("{}: {}\n", "Location".dimmed(), config_path.display().dimmed());

    let mut sections: BTreeMap<String, Vec<(String, String)>> = BTreeMap::new();
    for key in config.scalar_keys()? {
        let value = config.get(&key)?;
        let (section, name) = key.rsplit_once('.').unwrap_or(("", key.as_str()));
        sections
            .entry(section.to_string())
            .or_default()
            .push((name.to_string(), value));
    }

    for (i, (section, entries)) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format!("[{}]", section).yellow());
        for (name, value) in entries {
            println!("  {} = {}", name.cyan(), value);
        }
    }

    let options = &config.datepicker;
    println!(
        "\n  {} {}",
        "monthNames, days, daysShort, keyboardShortcuts:".dimmed(),
        format!(
            "{} / {} / {} / {} entries",
            options.month_names.len(),
            options.days.len(),
            options.days_short.len(),
            options.keyboard_shortcuts.len()
        )
        .dimmed()
    );

    println!("\n{}", "Valid Ranges:".bold());
    println!("  debounce.cooldown_ms: 0-{}", MAX_COOLDOWN_MS);
    println!("  debounce.mode: leading | trailing");
    println!("  datepicker.keys.*: distinct, non-zero key codes");

    Ok(())
}

/// Get a single configuration value
pub async fn run_get(key: &str) -> Result<()> {
    let config = config::load()?;
    let value = config.get(key).with_context(|| {
        format!("Use 'rangepick config list' to see available keys (got '{}')", key)
    })?;

    println!("{}", value);
    Ok(())
}

/// Set a configuration value
pub async fn run_set(key: &str, value: &str) -> Result<()> {
    let mut config = config::load()?;

    // Validated before it replaces the loaded config
    config.set(key, value)
        .with_context(|| format!("Invalid configuration value for {}", key))?;

    config::save(&config)?;

    println!("{} {} = {}", "✓".green(), key.cyan(), value);
    Ok(())
}

/// Show the config file path and optionally create it
pub async fn run_path(create: bool) -> Result<()> {
    let config_path = config::config_file_path()
        .context("Could not determine config file path")?;

    if create && !config_path.exists() {
        config::init_if_missing()?;
        println!("{} Created config file at: {}", "✓".green(), config_path.display());
    } else if config_path.exists() {
        println!("{}", config_path.display());
    } else {
        println!("{}", config_path.display());
        println!("{}", "File does not exist. Use --create to create it.".yellow());
    }

    Ok(())
}

/// Show example configuration
pub async fn run_example() -> Result<()> {
    let example = config::example_config()?;
    println!("{}", example);
    Ok(())
}

/// Validate a config file (the configured one by default)
pub async fn run_validate(file: Option<PathBuf>) -> Result<()> {
    let path = match file {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path
        }
        None => config::config_file_path()
            .context("Could not determine config file path")?,
    };

    let config: PickerConfig = config::load_from(&path)
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;

    println!("{} {} is valid", "✓".green(), path.display());
    tracing::debug!(mode = %config.debounce.mode, cooldown_ms = config.debounce.cooldown_ms, "Validated config");
    Ok(())
}
