//! Debounced invocation for Rangepick
//!
//! This crate provides:
//! - A timer capability (`Timer`) with owned, cancelable handles
//! - Host timers: `TokioTimer` (runtime-backed) and `ManualTimer` (virtual clock)
//! - `DebouncedInvoker`: leading/trailing debouncing of a single action
//! - `KeyedDebouncer`: independent per-key debouncing sharing one action

pub mod timer;
pub mod invoker;
pub mod keyed;

pub use invoker::DebouncedInvoker;
pub use keyed::KeyedDebouncer;
pub use timer::{ManualTimer, Timer, TimerCallback, TimerHandle, TokioTimer};

pub use rp_core::{ConfigError, DebounceSettings, Mode};
