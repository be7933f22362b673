//! Deterministic replay of a trigger schedule
//!
//! Triggers are applied at the given virtual times on a `ManualTimer`, then
//! the clock runs one more cooldown so a trailing invocation can land.

use crate::util::{self, SettingsOverrides};
use anyhow::Result;
use debounce::{DebouncedInvoker, ManualTimer};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Replay `times` and return the virtual times of each invocation
pub fn replay(settings: &debounce::DebounceSettings, times: &[u64]) -> Result<Vec<u64>> {
    util::check_non_decreasing(times)?;

    let timer = ManualTimer::new();
    let fired = Arc::new(Mutex::new(Vec::new()));

    let clock = timer.clone();
    let log = Arc::clone(&fired);
    let invoker = DebouncedInvoker::from_settings(timer.clone(), settings, move || {
        log.lock().push(clock.now().as_millis() as u64);
        Ok(())
    })?;

    for &t in times {
        timer.advance_to(Duration::from_millis(t))?;
        invoker.trigger()?;
    }
    timer.advance(invoker.cooldown())?;

    let fired = fired.lock().clone();
    Ok(fired)
}

pub async fn run(overrides: SettingsOverrides, times: &[u64]) -> Result<()> {
    let settings = util::resolve_settings(&overrides)?;
    let fired = replay(&settings, times)?;

    for t in &fired {
        println!("fired at {}ms", t);
    }
    println!(
        "{} trigger(s) -> {} invocation(s) ({}, {}ms)",
        times.len(),
        fired.len(),
        settings.mode,
        settings.cooldown_ms
    );

    Ok(())
}
