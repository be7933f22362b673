//! Print the resolved date picker options

use anyhow::{Context, Result};
use rp_core::config;

/// Print `[datepicker]` options merged over the defaults
pub async fn run(json: bool) -> Result<()> {
    let config = config::load()?;

    let output = if json {
        serde_json::to_string_pretty(&config.datepicker)
            .context("Failed to serialize options as JSON")?
    } else {
        toml::to_string_pretty(&config.datepicker)
            .context("Failed to serialize options as TOML")?
    };

    println!("{}", output.trim_end());
    Ok(())
}
