//! Single-writer holder for a screen's current state snapshot.

use parking_lot::Mutex;
use tokio::sync::watch;

use super::reducer::Reducer;

/// Holds exactly one state value and publishes every replacement.
///
/// Reduction and publication happen under one lock, so two concurrent
/// dispatches are applied one after the other and the view never sees a
/// mix of both. Receivers are only woken when the snapshot actually
/// changes.
pub struct StateStore<R: Reducer> {
    sender: watch::Sender<R::State>,
    write_lock: Mutex<()>,
}

impl<R: Reducer> StateStore<R> {
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(R::State::default());
        Self {
            sender,
            write_lock: Mutex::new(()),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> R::State {
        self.sender.borrow().clone()
    }

    /// Receiver for the view layer.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.sender.subscribe()
    }

    /// Reduce `intent` against the current snapshot and publish the result.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        let _guard = self.write_lock.lock();
        self.apply(intent)
    }

    /// Like [`dispatch`](Self::dispatch), but only if `accept` still holds
    /// once the write lock is taken. Returns `None` when the intent was
    /// dropped.
    pub fn dispatch_if(
        &self,
        accept: impl FnOnce() -> bool,
        intent: R::Intent,
    ) -> Option<R::State> {
        let _guard = self.write_lock.lock();
        if !accept() {
            return None;
        }
        Some(self.apply(intent))
    }

    fn apply(&self, intent: R::Intent) -> R::State {
        let current = self.sender.borrow().clone();
        let next = R::reduce(current, intent);
        self.sender.send_if_modified(|state| {
            if *state == next {
                return false;
            }
            *state = next.clone();
            true
        });
        next
    }
}

impl<R: Reducer> Default for StateStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
