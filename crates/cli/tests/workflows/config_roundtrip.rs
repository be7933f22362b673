//! Config file management through the CLI

use crate::common::TestEnv;
use anyhow::Result;
use std::fs;

#[test]
fn test_path_reports_missing_file() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env.cmd(&["config", "path"]).assert_success()?;
    assert!(result.contains_stdout(&env.config_path().display().to_string()));
    assert!(result.contains_stdout("does not exist"));
    assert!(!env.config_path().exists());

    Ok(())
}

#[test]
fn test_path_create_writes_defaults() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd(&["config", "path", "--create"]).assert_success()?;
    assert!(env.config_path().exists());

    let text = fs::read_to_string(env.config_path())?;
    assert!(text.contains("[debounce]"));
    assert!(text.contains("cooldown_ms = 200"));

    env.cmd(&["config", "validate"]).assert_success()?;
    Ok(())
}

#[test]
fn test_get_defaults_without_file() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env.cmd(&["config", "get", "debounce.cooldown_ms"]).assert_success()?;
    assert_eq!(result.stdout.trim(), "200");

    let result = env.cmd(&["config", "get", "datepicker.texts.apply"]).assert_success()?;
    assert_eq!(result.stdout.trim(), "Apply");

    Ok(())
}

#[test]
fn test_set_then_get() -> Result<()> {
    let env = TestEnv::new()?;

    env.cmd(&["config", "set", "debounce.mode", "leading"]).assert_success()?;
    env.cmd(&["config", "set", "datepicker.sundayFirst", "true"]).assert_success()?;

    let result = env.cmd(&["config", "get", "debounce.mode"]).assert_success()?;
    assert_eq!(result.stdout.trim(), "leading");

    let result = env.cmd(&["config", "get", "datepicker.sundayFirst"]).assert_success()?;
    assert_eq!(result.stdout.trim(), "true");

    let text = fs::read_to_string(env.config_path())?;
    assert!(text.contains("mode = \"leading\""));

    Ok(())
}

#[test]
fn test_set_rejects_negative_cooldown() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .cmd(&["config", "set", "debounce.cooldown_ms", "-5"])
        .assert_failure()?;
    assert!(result.contains_stderr("non-negative"));

    // Nothing was written
    assert!(!env.config_path().exists());
    Ok(())
}

#[test]
fn test_unknown_key() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env.cmd(&["config", "get", "debounce.nope"]).assert_failure()?;
    assert!(result.contains_stderr("unknown config key"));

    env.cmd(&["config", "set", "nope", "1"]).assert_failure()?;
    Ok(())
}

#[test]
fn test_validate_explicit_file() -> Result<()> {
    let env = TestEnv::new()?;

    let good = env.path().join("good.toml");
    fs::write(&good, "[debounce]\ncooldown_ms = 10\nmode = \"leading\"\n")?;
    env.cmd(&["config", "validate", "--file", good.to_str().unwrap()])
        .assert_success()?;

    let bad = env.path().join("bad.toml");
    fs::write(&bad, "[debounce]\ncooldown_ms = -1\n")?;
    let result = env
        .cmd(&["config", "validate", "--file", bad.to_str().unwrap()])
        .assert_failure()?;
    assert!(result.contains_stderr("non-negative"));

    let missing = env.path().join("missing.toml");
    env.cmd(&["config", "validate", "--file", missing.to_str().unwrap()])
        .assert_failure()?;

    Ok(())
}

#[test]
fn test_invalid_config_file_fails_fast() -> Result<()> {
    let env = TestEnv::new()?;
    env.write_config("[debounce]\nmode = \"sideways\"\n")?;

    env.cmd(&["config", "get", "debounce.mode"]).assert_failure()?;
    env.cmd(&["simulate", "0"]).assert_failure()?;
    Ok(())
}

#[test]
fn test_example_and_list() -> Result<()> {
    let env = TestEnv::new()?;

    let example = env.cmd(&["config", "example"]).assert_success()?;
    assert!(example.contains_stdout("[debounce]"));
    assert!(example.contains_stdout("[datepicker.colors]"));

    let list = env.cmd(&["config", "list"]).assert_success()?;
    assert!(list.contains_stdout("cooldown_ms"));
    assert!(list.contains_stdout("inRangeBorder"));
    Ok(())
}
