//! Rangepick CLI - rangepick command

use anyhow::Result;
use clap::{Parser, Subcommand};
use cli_lib::{cmd, util};
use debounce::Mode;
use std::path::PathBuf;

/// Rangepick - debounce engine and options for the date-range picker
#[derive(Parser)]
#[command(name = "rangepick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// View and edit configuration
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Print the resolved date picker options
    Options {
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
    /// Replay trigger times (ms) on a virtual clock and report invocations
    Simulate {
        /// Cooldown in milliseconds (default: from config)
        #[arg(long, allow_negative_numbers = true)]
        cooldown_ms: Option<i64>,
        /// Firing mode: leading or trailing (default: from config)
        #[arg(long)]
        mode: Option<Mode>,
        /// Re-arm the leading window on suppressed triggers
        #[arg(long)]
        extend: bool,
        /// Trigger times in milliseconds, non-decreasing
        #[arg(required = true)]
        times: Vec<u64>,
    },
    /// Debounce stdin lines in real time; each line is a trigger
    Watch {
        /// Cooldown in milliseconds (default: from config)
        #[arg(long, allow_negative_numbers = true)]
        cooldown_ms: Option<i64>,
        /// Firing mode: leading or trailing (default: from config)
        #[arg(long)]
        mode: Option<Mode>,
        /// Re-arm the leading window on suppressed triggers
        #[arg(long)]
        extend: bool,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// List all configuration values
    List,
    /// Get a single value
    Get {
        /// Dotted key, e.g. debounce.cooldown_ms
        key: String,
    },
    /// Set a single value
    Set {
        /// Dotted key, e.g. datepicker.colors.selected
        key: String,
        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Show the config file path
    Path {
        /// Create the file with defaults if missing
        #[arg(long)]
        create: bool,
    },
    /// Print an annotated default configuration
    Example,
    /// Validate the config file
    Validate {
        /// Validate this file instead of the configured one
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_logging(cli.verbose);

    match cli.command {
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::List => cmd::config::run_list().await,
            ConfigCommands::Get { key } => cmd::config::run_get(&key).await,
            ConfigCommands::Set { key, value } => cmd::config::run_set(&key, &value).await,
            ConfigCommands::Path { create } => cmd::config::run_path(create).await,
            ConfigCommands::Example => cmd::config::run_example().await,
            ConfigCommands::Validate { file } => cmd::config::run_validate(file).await,
        },
        Commands::Options { json } => cmd::options::run(json).await,
        Commands::Simulate { cooldown_ms, mode, extend, times } => {
            let overrides = util::SettingsOverrides { cooldown_ms, mode, extend };
            cmd::simulate::run(overrides, &times).await
        }
        Commands::Watch { cooldown_ms, mode, extend } => {
            let overrides = util::SettingsOverrides { cooldown_ms, mode, extend };
            cmd::watch::run(overrides).await
        }
    }
}
