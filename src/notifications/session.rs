//! Current push-registration credential of this process.

use std::sync::Arc;

use parking_lot::RwLock;

/// Shared store for the push-registration token and the channel it was
/// registered for.
///
/// Cloning is cheap and every clone sees writes immediately. Construct
/// one at startup and inject it; call [`clear`](Self::clear) on logout.
/// Nothing is persisted: after a restart the platform re-issues the token.
#[derive(Clone, Default)]
pub struct NotificationSession {
    inner: Arc<RwLock<SessionInner>>,
}

#[derive(Default)]
struct SessionInner {
    token: Option<String>,
    channel: Option<String>,
}

impl NotificationSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored token.
    pub fn set_token(&self, token: Option<String>) {
        let mut inner = self.inner.write();
        let changed = inner.token != token;
        inner.token = token;
        if changed {
            tracing::info!(present = inner.token.is_some(), "Push token updated");
        }
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn clear_token(&self) {
        self.set_token(None);
    }

    /// Record the notification channel the token is registered for.
    pub fn set_channel(&self, channel: Option<String>) {
        self.inner.write().channel = channel;
    }

    pub fn channel(&self) -> Option<String> {
        self.inner.read().channel.clone()
    }

    /// Logout: forget token and channel.
    pub fn clear(&self) {
        let mut inner = self.inner.write();
        inner.token = None;
        inner.channel = None;
        tracing::info!("Notification session cleared");
    }
}
