//! Transient user-facing messages.
//!
//! A single-slot, overwrite-on-write channel: any component may publish a
//! success or error text, one presentation surface shows it and then
//! takes it out of the slot. A message that was never shown is replaced
//! by the next one.

use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransientMessage {
    pub message: String,
    pub kind: MessageKind,
}

impl TransientMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: MessageKind::Error,
        }
    }
}

/// Cloneable handle to the process-wide message slot.
///
/// Construct one at startup and hand clones to every controller.
#[derive(Clone)]
pub struct MessageChannel {
    slot: watch::Sender<Option<TransientMessage>>,
}

impl MessageChannel {
    pub fn new() -> Self {
        let (slot, _receiver) = watch::channel(None);
        Self { slot }
    }

    /// Put `message` in the slot, replacing anything still pending.
    pub fn publish(&self, message: TransientMessage) {
        tracing::debug!(kind = ?message.kind, message = %message.message, "Transient message");
        self.slot.send_replace(Some(message));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.publish(TransientMessage::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.publish(TransientMessage::error(message));
    }

    /// Pending message, if any, without consuming it.
    pub fn current(&self) -> Option<TransientMessage> {
        self.slot.borrow().clone()
    }

    /// Remove and return the pending message.
    pub fn take(&self) -> Option<TransientMessage> {
        let mut taken = None;
        self.slot.send_if_modified(|slot| {
            taken = slot.take();
            taken.is_some()
        });
        taken
    }

    /// Reset the slot to empty.
    pub fn clear(&self) {
        self.take();
    }

    /// Receiver for the presentation surface.
    pub fn subscribe(&self) -> watch::Receiver<Option<TransientMessage>> {
        self.slot.subscribe()
    }
}

impl Default for MessageChannel {
    fn default() -> Self {
        Self::new()
    }
}
