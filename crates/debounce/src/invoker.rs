//! Debounced invoker
//!
//! Wraps a zero-argument action so that a burst of `trigger()` calls collapses
//! into at most one invocation.
//!
//! - `Mode::Trailing`: every trigger replaces the pending timer; the action
//!   runs once the burst has been quiet for the cooldown.
//! - `Mode::Leading`: the first trigger runs the action immediately and arms
//!   a suppression timer; triggers while suppressed are dropped. By default
//!   a dropped trigger does not restart the window (see
//!   `DebounceSettings::extend_leading_window`).
//!
//! At most one timer is pending per invoker. Every armed timer carries a
//! generation number and its expiry is ignored unless that generation is
//! still the pending one, so once `cancel()` returns the canceled timer can
//! never reach the action, even if its host task is already running.
//!
//! The action may call back into its own invoker. A LEADING trigger issued
//! from inside the running action on the same thread is ignored instead of
//! invoking the action recursively.

use crate::timer::{Timer, TimerHandle};
use anyhow::Result;
use parking_lot::Mutex;
use rp_core::{ConfigError, DebounceSettings, Mode};
use std::sync::{Arc, Weak};
use std::thread::{self, ThreadId};
use std::time::Duration;
use tracing::{debug, trace};

type Action = Box<dyn FnMut() -> Result<()> + Send + 'static>;

/// Collapses bursts of triggers into single action invocations
pub struct DebouncedInvoker<T: Timer> {
    shared: Arc<Shared<T>>,
}

struct Shared<T: Timer> {
    timer: T,
    cooldown: Duration,
    mode: Mode,
    extend_leading_window: bool,
    state: Mutex<State<T::Handle>>,
    action: Mutex<Action>,
}

struct State<H> {
    pending: Option<Pending<H>>,
    generation: u64,
    /// Thread currently holding the action lock
    invoking: Option<ThreadId>,
}

struct Pending<H> {
    generation: u64,
    handle: H,
}

impl<T: Timer> DebouncedInvoker<T> {
    /// Create an invoker with the given cooldown and mode
    pub fn new<F>(timer: T, cooldown: Duration, mode: Mode, action: F) -> Self
    where
        F: FnMut() -> Result<()> + Send + 'static,
    {
        Self::build(timer, cooldown, mode, false, action)
    }

    /// Create an invoker from config settings
    ///
    /// Fails on a negative or out-of-range cooldown.
    pub fn from_settings<F>(
        timer: T,
        settings: &DebounceSettings,
        action: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut() -> Result<()> + Send + 'static,
    {
        let cooldown = settings.cooldown()?;
        Ok(Self::build(
            timer,
            cooldown,
            settings.mode,
            settings.extend_leading_window,
            action,
        ))
    }

    pub(crate) fn build<F>(
        timer: T,
        cooldown: Duration,
        mode: Mode,
        extend_leading_window: bool,
        action: F,
    ) -> Self
    where
        F: FnMut() -> Result<()> + Send + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                timer,
                cooldown,
                mode,
                extend_leading_window,
                state: Mutex::new(State {
                    pending: None,
                    generation: 0,
                    invoking: None,
                }),
                action: Mutex::new(Box::new(action)),
            }),
        }
    }

    /// Request an invocation
    ///
    /// Never waits on the timer. In leading mode the action may run inside
    /// this call, and its error is returned as is; otherwise this returns
    /// `Ok(())`. A LEADING trigger made by the action itself, while it runs,
    /// is a no-op.
    pub fn trigger(&self) -> Result<()> {
        let shared = &self.shared;
        let mut state = shared.state.lock();

        match shared.mode {
            Mode::Trailing => {
                Shared::arm(shared, &mut state);
                Ok(())
            }
            Mode::Leading => {
                if state.pending.is_some() {
                    if shared.extend_leading_window {
                        Shared::arm(shared, &mut state);
                    } else {
                        debug!("Trigger suppressed (leading window open)");
                    }
                    return Ok(());
                }

                if state.invoking == Some(thread::current().id()) {
                    debug!("Re-entrant trigger from the running action ignored");
                    return Ok(());
                }

                Shared::arm(shared, &mut state);
                drop(state);
                shared.invoke()
            }
        }
    }

    /// Drop the pending timer without invoking the action
    ///
    /// Idempotent. In leading mode this also ends the suppression window.
    pub fn cancel(&self) {
        let pending = self.shared.state.lock().pending.take();
        if let Some(pending) = pending {
            debug!(generation = pending.generation, "Debounce timer canceled");
            pending.handle.cancel();
        }
    }

    /// Whether a timer is outstanding
    pub fn is_pending(&self) -> bool {
        self.shared.state.lock().pending.is_some()
    }

    pub fn mode(&self) -> Mode {
        self.shared.mode
    }

    pub fn cooldown(&self) -> Duration {
        self.shared.cooldown
    }
}

impl<T: Timer> Drop for DebouncedInvoker<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<T: Timer> Shared<T> {
    /// Replace any pending timer with a fresh one for the full cooldown
    fn arm(this: &Arc<Self>, state: &mut State<T::Handle>) {
        if let Some(previous) = state.pending.take() {
            previous.handle.cancel();
        }

        state.generation += 1;
        let generation = state.generation;
        let weak = Arc::downgrade(this);

        let handle = this.timer.schedule_after(
            this.cooldown,
            Box::new(move || Self::expire(&weak, generation)),
        );

        debug!(generation, cooldown = ?this.cooldown, "Debounce timer armed");
        state.pending = Some(Pending { generation, handle });
    }

    /// Timer expiry; stale generations are ignored
    fn expire(this: &Weak<Self>, generation: u64) -> Result<()> {
        let Some(shared) = this.upgrade() else {
            return Ok(());
        };

        {
            let mut state = shared.state.lock();
            match &state.pending {
                Some(pending) if pending.generation == generation => {}
                _ => return Ok(()),
            }
            // Cleared before the action runs so a failure cannot wedge us
            state.pending = None;
        }

        match shared.mode {
            Mode::Trailing => {
                debug!(generation, "Debounce window elapsed, invoking action");
                shared.invoke()
            }
            Mode::Leading => {
                trace!(generation, "Leading suppression window closed");
                Ok(())
            }
        }
    }

    fn invoke(&self) -> Result<()> {
        let mut action = self.action.lock();
        let _running = Running::enter(self);
        (*action)()
    }
}

/// Marks the action as running on this thread until dropped
struct Running<'a, T: Timer> {
    shared: &'a Shared<T>,
}

impl<'a, T: Timer> Running<'a, T> {
    fn enter(shared: &'a Shared<T>) -> Self {
        shared.state.lock().invoking = Some(thread::current().id());
        Self { shared }
    }
}

impl<T: Timer> Drop for Running<'_, T> {
    fn drop(&mut self) {
        self.shared.state.lock().invoking = None;
    }
}
