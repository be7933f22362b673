//! CLI command implementations

pub mod config;
pub mod options;
pub mod simulate;
pub mod watch;
