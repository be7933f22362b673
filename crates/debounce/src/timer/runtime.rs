//! Tokio-backed timer
//!
//! Each scheduled callback is a spawned task that sleeps until its deadline
//! and then runs the callback. The deadline is fixed when the callback is
//! scheduled, so a busy runtime that polls the task late still fires it in
//! deadline order. Cancel aborts the task.

use super::{Timer, TimerCallback, TimerHandle};
use anyhow::{Context, Result};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::warn;

/// Timer running callbacks on a tokio runtime
#[derive(Clone, Debug)]
pub struct TokioTimer {
    runtime: Handle,
}

impl TokioTimer {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Timer bound to the runtime of the calling context
    pub fn try_current() -> Result<Self> {
        let runtime = Handle::try_current().context("TokioTimer requires a tokio runtime")?;
        Ok(Self::new(runtime))
    }
}

impl Timer for TokioTimer {
    type Handle = TokioHandle;

    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> TokioHandle {
        let deadline = Instant::now() + delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep_until(deadline).await;

            // The task is the firing context, so its failure ends here
            if let Err(e) = callback() {
                warn!("Scheduled callback failed: {:#}", e);
            }
        });

        TokioHandle { task }
    }
}

/// Handle to a callback scheduled on a `TokioTimer`
#[derive(Debug)]
pub struct TokioHandle {
    task: JoinHandle<()>,
}

impl TimerHandle for TokioHandle {
    fn cancel(self) {
        self.task.abort();
    }
}
