//! Virtual-clock timer
//!
//! Time only moves when `advance`/`advance_to` is called, and due callbacks
//! run synchronously inside that call. Used for deterministic tests and for
//! replaying trigger schedules.

use super::{Timer, TimerCallback, TimerHandle};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::{Arc, Weak};
use std::time::Duration;

/// Deadline plus insertion sequence, so equal deadlines fire FIFO
type Slot = (Duration, u64);

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<Slot, TimerCallback>,
}

/// Timer driven by an explicit virtual clock starting at zero
#[derive(Clone, Default)]
pub struct ManualTimer {
    state: Arc<Mutex<ManualState>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation
    pub fn now(&self) -> Duration {
        self.state.lock().now
    }

    /// Number of scheduled, not yet fired callbacks
    pub fn pending(&self) -> usize {
        self.state.lock().queue.len()
    }

    /// Move the clock forward by `by`, firing every callback that falls due
    pub fn advance(&self, by: Duration) -> anyhow::Result<usize> {
        let target = self.now() + by;
        self.advance_to(target)
    }

    /// Move the clock to `target`, firing due callbacks in deadline order
    ///
    /// Returns the number of callbacks fired. The first callback error stops
    /// the advance at that callback's deadline and is returned; later
    /// callbacks stay queued for the next call. A `target` in the past is a
    /// no-op for the clock but still fires anything already due.
    pub fn advance_to(&self, target: Duration) -> anyhow::Result<usize> {
        let mut fired = 0;

        loop {
            let callback = {
                let mut state = self.state.lock();
                let due = state
                    .queue
                    .keys()
                    .next()
                    .copied()
                    .filter(|(deadline, _)| *deadline <= target);

                match due {
                    Some(slot) => {
                        state.now = state.now.max(slot.0);
                        state.queue.remove(&slot)
                    }
                    None => {
                        state.now = state.now.max(target);
                        break;
                    }
                }
            };

            // Lock released: callbacks may schedule or cancel timers
            if let Some(callback) = callback {
                fired += 1;
                callback()?;
            }
        }

        Ok(fired)
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> ManualHandle {
        let mut state = self.state.lock();
        let slot = (state.now + delay, state.next_seq);
        state.next_seq += 1;
        state.queue.insert(slot, callback);

        ManualHandle {
            slot,
            state: Arc::downgrade(&self.state),
        }
    }
}

/// Handle to a callback scheduled on a `ManualTimer`
pub struct ManualHandle {
    slot: Slot,
    state: Weak<Mutex<ManualState>>,
}

impl ManualHandle {
    /// Virtual time at which the callback is due
    pub fn deadline(&self) -> Duration {
        self.slot.0
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state.lock().queue.remove(&self.slot);
        }
    }
}
