//! Workflow integration tests
//!
//! Tests for complete workflows that exercise multiple commands
//! and validate end-to-end behavior.

pub mod config_roundtrip;
pub mod options_output;
pub mod watch_stdin;
