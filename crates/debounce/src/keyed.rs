//! Per-key debouncing
//!
//! Each key gets its own `DebouncedInvoker`, so a burst on one key never
//! delays or suppresses another. All keys share one action, which receives
//! the key that fired.

use crate::invoker::DebouncedInvoker;
use crate::timer::Timer;
use anyhow::Result;
use dashmap::DashMap;
use parking_lot::Mutex;
use rp_core::{ConfigError, DebounceSettings, Mode};
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

type KeyedAction<K> = Box<dyn FnMut(&K) -> Result<()> + Send + 'static>;

/// Independent debouncing per key
///
/// The shared action is serialized behind a lock, so it must not trigger a
/// leading-mode key of the same debouncer from inside itself.
pub struct KeyedDebouncer<K, T>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    T: Timer + Clone,
{
    timer: T,
    cooldown: Duration,
    mode: Mode,
    extend_leading_window: bool,
    action: Arc<Mutex<KeyedAction<K>>>,
    invokers: DashMap<K, Arc<DebouncedInvoker<T>>, ahash::RandomState>,
}

impl<K, T> KeyedDebouncer<K, T>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    T: Timer + Clone,
{
    pub fn new<F>(timer: T, cooldown: Duration, mode: Mode, action: F) -> Self
    where
        F: FnMut(&K) -> Result<()> + Send + 'static,
    {
        Self {
            timer,
            cooldown,
            mode,
            extend_leading_window: false,
            action: Arc::new(Mutex::new(Box::new(action))),
            invokers: DashMap::with_hasher(ahash::RandomState::new()),
        }
    }

    pub fn from_settings<F>(
        timer: T,
        settings: &DebounceSettings,
        action: F,
    ) -> Result<Self, ConfigError>
    where
        F: FnMut(&K) -> Result<()> + Send + 'static,
    {
        let mut debouncer = Self::new(timer, settings.cooldown()?, settings.mode, action);
        debouncer.extend_leading_window = settings.extend_leading_window;
        Ok(debouncer)
    }

    /// Trigger the invoker for `key`, creating it on first use
    pub fn trigger(&self, key: K) -> Result<()> {
        let invoker = self
            .invokers
            .entry(key.clone())
            .or_insert_with(|| Arc::new(self.invoker_for(key.clone())))
            .clone();

        // Shard lock released before a leading action can run
        let result = invoker.trigger();

        // A concurrent prune or cancel may have dropped the entry meanwhile
        if invoker.is_pending() && !self.invokers.contains_key(&key) {
            self.invokers.entry(key).or_insert_with(|| Arc::clone(&invoker));
        }

        result
    }

    /// Cancel and forget `key`; returns whether it had a pending timer
    pub fn cancel(&self, key: &K) -> bool {
        match self.invokers.remove(key) {
            Some((_, invoker)) => {
                let was_pending = invoker.is_pending();
                invoker.cancel();
                was_pending
            }
            None => false,
        }
    }

    /// Cancel every key
    pub fn cancel_all(&self) {
        for entry in self.invokers.iter() {
            entry.value().cancel();
        }
        self.invokers.clear();
        debug!("Canceled all keyed debounce timers");
    }

    pub fn is_pending(&self, key: &K) -> bool {
        self.invokers
            .get(key)
            .map(|invoker| invoker.is_pending())
            .unwrap_or(false)
    }

    /// Keys with an outstanding timer
    pub fn pending_keys(&self) -> Vec<K> {
        self.invokers
            .iter()
            .filter(|entry| entry.value().is_pending())
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Forget keys that have nothing pending; returns how many were dropped
    pub fn prune(&self) -> usize {
        let before = self.invokers.len();
        // An entry shared with an in-flight trigger is kept
        self.invokers
            .retain(|_, invoker| invoker.is_pending() || Arc::strong_count(invoker) > 1);
        before - self.invokers.len()
    }

    /// Number of keys currently tracked
    pub fn len(&self) -> usize {
        self.invokers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.invokers.is_empty()
    }

    fn invoker_for(&self, key: K) -> DebouncedInvoker<T> {
        let action = Arc::clone(&self.action);
        DebouncedInvoker::build(
            self.timer.clone(),
            self.cooldown,
            self.mode,
            self.extend_leading_window,
            move || {
                let mut action = action.lock();
                (*action)(&key)
            },
        )
    }
}
