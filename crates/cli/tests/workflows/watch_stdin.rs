//! Real-time debouncing of stdin through `rangepick watch`

use crate::common::TestEnv;
use anyhow::Result;
use std::time::Duration;

#[test]
fn test_trailing_reports_last_line_once() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .cmd(&["watch", "--cooldown-ms", "200", "--mode", "trailing"])
        .stdin("first\nsecond\nthird\n")
        .assert_success()?;

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {}", result.stdout);
    assert!(lines[0].ends_with("\tthird"));

    // Exit waited for the trailing window
    assert!(result.duration >= Duration::from_millis(200));
    Ok(())
}

#[test]
fn test_leading_reports_first_line_once() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .cmd(&["watch", "--cooldown-ms", "10000", "--mode", "leading"])
        .stdin("first\nsecond\nthird\n")
        .assert_success()?;

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {}", result.stdout);
    assert!(lines[0].ends_with("\tfirst"));

    // Leading mode does not wait out the suppression window
    assert!(result.duration < Duration::from_secs(10));
    Ok(())
}

#[test]
fn test_empty_stdin() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .cmd(&["watch", "--cooldown-ms", "50"])
        .assert_success()?;

    assert!(result.stdout.is_empty());
    Ok(())
}

#[test]
fn test_trailing_zero_cooldown() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .cmd(&["watch", "--cooldown-ms", "0", "--mode", "trailing"])
        .stdin("only\n")
        .assert_success()?;

    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 1, "stdout: {}", result.stdout);
    assert!(lines[0].ends_with("\tonly"));
    Ok(())
}

#[test]
fn test_trailing_exit_follows_deadline() -> Result<()> {
    let env = TestEnv::new()?;

    let result = env
        .cmd(&["watch", "--cooldown-ms", "300", "--mode", "trailing"])
        .stdin("x\n")
        .assert_success()?;

    assert_eq!(result.stdout.lines().count(), 1);
    assert!(result.duration >= Duration::from_millis(300));
    // No polling interval stacked on top of the cooldown
    assert!(result.duration < Duration::from_millis(3_000), "took {:?}", result.duration);
    Ok(())
}
