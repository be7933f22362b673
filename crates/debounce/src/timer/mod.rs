//! Timer capability consumed by the debouncers
//!
//! A timer schedules a callback after a delay and hands back an owned handle
//! that can cancel it. Callbacks of one timer fire in non-decreasing order of
//! their deadlines, and a canceled callback never fires.

mod manual;
mod runtime;

pub use manual::{ManualHandle, ManualTimer};
pub use runtime::{TokioHandle, TokioTimer};

use std::time::Duration;

/// Deferred work handed to a timer
///
/// The error, if any, belongs to whoever drives the timer: `ManualTimer`
/// returns it from `advance`, `TokioTimer` logs it.
pub type TimerCallback = Box<dyn FnOnce() -> anyhow::Result<()> + Send + 'static>;

/// Host timer facility
pub trait Timer: Send + Sync + 'static {
    type Handle: TimerHandle;

    /// Run `callback` once `delay` has elapsed
    ///
    /// Must not invoke `callback` before returning.
    fn schedule_after(&self, delay: Duration, callback: TimerCallback) -> Self::Handle;
}

/// Owned handle to one scheduled callback
///
/// Dropping a handle without calling `cancel` leaves the callback scheduled.
pub trait TimerHandle: Send + 'static {
    fn cancel(self);
}
