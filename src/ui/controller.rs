//! Screen state holder.
//!
//! A [`Controller`] owns one [`StateStore`] and turns asynchronous
//! repository results into reducer intents. Every subscription runs on a
//! background task and is tagged with a per-slot generation. Starting a
//! new subscription in a slot supersedes the previous one, so a slow
//! stale result can never overwrite a newer one.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::{Stream, StreamExt};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::PresentationConfig;
use crate::data::TriStateResult;
use crate::messages::MessageChannel;
use crate::repository::RepoError;
use crate::ui::mvi::{Emission, Reducer, StateStore};

/// How long the loading presentation is held before a fast result is
/// accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresentationPolicy {
    pub min_loading: Duration,
}

impl PresentationPolicy {
    pub fn immediate() -> Self {
        Self::default()
    }

    pub fn with_min_loading(min_loading: Duration) -> Self {
        Self { min_loading }
    }
}

impl From<&PresentationConfig> for PresentationPolicy {
    fn from(config: &PresentationConfig) -> Self {
        Self {
            min_loading: Duration::from_millis(config.min_loading_ms),
        }
    }
}

pub struct Controller<R: Reducer> {
    inner: Arc<Inner<R>>,
}

struct Inner<R: Reducer> {
    store: StateStore<R>,
    messages: MessageChannel,
    policy: PresentationPolicy,
    slots: Mutex<Slots>,
}

#[derive(Default)]
struct Slots {
    next_generation: u64,
    active: HashMap<&'static str, ActiveSlot>,
    closed: bool,
}

struct ActiveSlot {
    generation: u64,
    handle: Option<JoinHandle<()>>,
}

impl<R: Reducer> Controller<R> {
    pub fn new(messages: MessageChannel, policy: PresentationPolicy) -> Self {
        Self {
            inner: Arc::new(Inner {
                store: StateStore::new(),
                messages,
                policy,
                slots: Mutex::new(Slots::default()),
            }),
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> R::State {
        self.inner.store.state()
    }

    /// Receiver the view renders from.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.inner.store.subscribe()
    }

    /// Apply a user intent synchronously.
    pub fn dispatch(&self, intent: R::Intent) -> R::State {
        self.inner.store.dispatch(intent)
    }

    /// Subscribe to `stream` in `slot`, superseding whatever ran there.
    ///
    /// `Emission::Started` is dispatched before this returns. Each element
    /// is then dispatched from a background task; failed elements also
    /// publish one error message.
    pub fn collect<T, S, F>(&self, slot: &'static str, stream: S, to_intent: F)
    where
        T: Send + 'static,
        S: Stream<Item = TriStateResult<T>> + Send + 'static,
        F: Fn(Emission<T>) -> R::Intent + Send + Sync + 'static,
    {
        let Some(generation) = self.inner.begin(slot) else {
            tracing::debug!(slot, "Controller closed, ignoring subscription");
            return;
        };

        let started = Instant::now();
        self.inner.store.dispatch(to_intent(Emission::Started));

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            let mut stream = std::pin::pin!(stream);
            while let Some(result) = stream.next().await {
                inner.deliver(slot, generation, started, result, &to_intent).await;
            }
            tracing::trace!(slot, generation, "Subscription finished");
        });

        self.inner.attach(slot, generation, handle);
    }

    /// One-shot variant of [`collect`](Self::collect).
    pub fn fetch<T, Fut, F>(&self, slot: &'static str, fetch: Fut, to_intent: F)
    where
        T: Send + 'static,
        Fut: Future<Output = TriStateResult<T>> + Send + 'static,
        F: Fn(Emission<T>) -> R::Intent + Send + Sync + 'static,
    {
        self.collect(slot, futures::stream::once(fetch), to_intent);
    }

    /// Cancel whatever runs in `slot` without starting anything new.
    pub fn cancel(&self, slot: &'static str) {
        let mut slots = self.inner.slots.lock();
        if let Some(active) = slots.active.remove(slot) {
            if let Some(handle) = active.handle {
                handle.abort();
            }
        }
    }

    /// Run a side-effecting write.
    ///
    /// The state is never touched; callers re-fetch or update
    /// optimistically. A failure publishes one error message. No retry.
    pub async fn write<Fut>(&self, operation: Fut) -> Result<(), RepoError>
    where
        Fut: Future<Output = Result<(), RepoError>>,
    {
        let result = operation.await;

        if self.inner.slots.lock().closed {
            return Err(RepoError::Cancelled);
        }

        if let Err(err) = &result {
            tracing::warn!(error = %err, "Write failed");
            self.inner.messages.error(err.to_string());
        }
        result
    }

    /// [`write`](Self::write), publishing `notice` as a success message.
    pub async fn write_with_notice<Fut>(&self, operation: Fut, notice: &str) -> Result<(), RepoError>
    where
        Fut: Future<Output = Result<(), RepoError>>,
    {
        self.write(operation).await?;
        self.inner.messages.success(notice);
        Ok(())
    }

    /// Cancel every subscription; late results are discarded.
    pub fn close(&self) {
        let mut slots = self.inner.slots.lock();
        if slots.closed {
            return;
        }
        slots.closed = true;
        for (slot, active) in slots.active.drain() {
            if let Some(handle) = active.handle {
                handle.abort();
            }
            tracing::trace!(slot, generation = active.generation, "Subscription cancelled");
        }
        tracing::debug!("Controller closed");
    }
}

impl<R: Reducer> Drop for Controller<R> {
    fn drop(&mut self) {
        self.close();
    }
}

impl<R: Reducer> Inner<R> {
    /// Open a new generation in `slot`, aborting the previous task.
    fn begin(&self, slot: &'static str) -> Option<u64> {
        let mut slots = self.slots.lock();
        if slots.closed {
            return None;
        }
        slots.next_generation += 1;
        let generation = slots.next_generation;
        let previous = slots.active.insert(
            slot,
            ActiveSlot {
                generation,
                handle: None,
            },
        );
        if let Some(handle) = previous.and_then(|p| p.handle) {
            tracing::debug!(slot, generation, "Superseding previous subscription");
            handle.abort();
        }
        Some(generation)
    }

    fn attach(&self, slot: &'static str, generation: u64, handle: JoinHandle<()>) {
        let mut slots = self.slots.lock();
        match slots.active.get_mut(slot) {
            Some(active) if active.generation == generation => active.handle = Some(handle),
            _ => handle.abort(),
        }
    }

    fn is_current(&self, slot: &'static str, generation: u64) -> bool {
        let slots = self.slots.lock();
        !slots.closed
            && slots
                .active
                .get(slot)
                .is_some_and(|active| active.generation == generation)
    }

    async fn deliver<T, F>(
        &self,
        slot: &'static str,
        generation: u64,
        started: Instant,
        result: TriStateResult<T>,
        to_intent: &F,
    ) where
        F: Fn(Emission<T>) -> R::Intent,
    {
        if result.is_terminal() && !self.policy.min_loading.is_zero() {
            tokio::time::sleep_until(started + self.policy.min_loading).await;
        }

        let error = result.error.as_ref().map(|e| e.message.clone());
        let applied = self.store.dispatch_if(
            || self.is_current(slot, generation),
            to_intent(Emission::Result(result)),
        );

        if applied.is_none() {
            tracing::debug!(slot, generation, "Discarded stale emission");
            return;
        }
        if let Some(message) = error {
            tracing::warn!(slot, error = %message, "Fetch failed");
            self.messages.error(message);
        }
    }
}
