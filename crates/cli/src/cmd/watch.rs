//! Real-time debouncing of stdin
//!
//! Every stdin line is a trigger. Each invocation prints the elapsed time and
//! the most recent line. At EOF a pending trailing invocation is allowed to
//! fire; Ctrl-C cancels it instead.

use crate::util::{self, SettingsOverrides};
use anyhow::{Context, Result};
use debounce::{DebouncedInvoker, Mode, TokioTimer};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

pub async fn run(overrides: SettingsOverrides) -> Result<()> {
    let settings = util::resolve_settings(&overrides)?;
    let timer = TokioTimer::try_current()?;
    let started = Instant::now();

    let latest = Arc::new(Mutex::new(String::new()));
    let shown = Arc::clone(&latest);
    let (fired_tx, mut fired_rx) = tokio::sync::watch::channel(0u64);

    let invoker = DebouncedInvoker::from_settings(timer, &settings, move || {
        fired_tx.send_modify(|count| *count += 1);
        let line = shown.lock().clone();
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}\t{}", util::format_ms(started.elapsed()), line)?;
        stdout.flush()?;
        Ok(())
    })?;

    info!(mode = %settings.mode, cooldown_ms = settings.cooldown_ms, "Watching stdin");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut triggers = 0u64;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line.context("Failed to read stdin")? {
                    Some(line) => {
                        *latest.lock() = line;
                        triggers += 1;
                        invoker.trigger()?;
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                invoker.cancel();
                info!(triggers, "Interrupted, pending invocation dropped");
                return Ok(());
            }
        }
    }

    // Single-threaded runtime: a wakeup here means the action has finished
    if settings.mode == Mode::Trailing {
        fired_rx.borrow_and_update();
        while invoker.is_pending() {
            tokio::select! {
                changed = fired_rx.changed() => {
                    changed.context("Invocation channel closed")?;
                }
                _ = tokio::signal::ctrl_c() => {
                    invoker.cancel();
                    info!(triggers, "Interrupted, pending invocation dropped");
                    return Ok(());
                }
            }
        }
    }

    info!(triggers, "stdin closed");
    Ok(())
}
