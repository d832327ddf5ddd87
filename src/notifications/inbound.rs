//! Handling of push messages delivered by the platform.

use serde::{Deserialize, Serialize};

use crate::notifications::session::NotificationSession;

/// Payload delivered by the push platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundPush {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub channel_id: Option<String>,
    #[serde(default)]
    pub data: PushData,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushData {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub channel_name: String,
    #[serde(default)]
    pub timestamp: String,
    /// Sender of the notification.
    #[serde(default)]
    pub user_id: String,
}

/// What the platform surface is asked to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub slot_id: i32,
    pub title: String,
    pub body: String,
    pub channel_id: Option<String>,
    pub channel_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Displayed { slot_id: i32 },
    /// The current user sent it.
    Suppressed,
}

/// Platform surface that posts notifications.
pub trait NotificationDisplay: Send + Sync {
    fn show(&self, notification: &Notification);
}

/// Numeric slot for a payload id such as `event-123`.
///
/// Takes the part after the last `-`. Ids without a separator or with a
/// non-numeric suffix get `fallback`.
pub fn notification_slot_id(id: &str, fallback: i32) -> i32 {
    id.rsplit_once('-')
        .and_then(|(_, suffix)| suffix.trim().parse::<i32>().ok())
        .unwrap_or(fallback)
}

pub struct PushReceiver<D> {
    display: D,
    session: NotificationSession,
    fallback_slot_id: i32,
}

impl<D: NotificationDisplay> PushReceiver<D> {
    pub fn new(display: D, session: NotificationSession, fallback_slot_id: i32) -> Self {
        Self {
            display,
            session,
            fallback_slot_id,
        }
    }

    /// Token-issuance callback from the platform.
    pub fn on_new_token(&self, token: String) {
        self.session.set_token(Some(token));
    }

    /// Show `push` unless `current_user_id` sent it.
    pub fn handle(&self, push: &InboundPush, current_user_id: Option<&str>) -> Delivery {
        if current_user_id.is_some_and(|user| user == push.data.user_id) {
            tracing::debug!(id = %push.data.id, "Suppressing self-notification");
            return Delivery::Suppressed;
        }

        let slot_id = notification_slot_id(&push.data.id, self.fallback_slot_id);
        let notification = Notification {
            slot_id,
            title: push.title.clone(),
            body: push.body.clone(),
            channel_id: push.channel_id.clone(),
            channel_name: push.data.channel_name.clone(),
        };
        self.display.show(&notification);
        tracing::debug!(slot_id, channel = %notification.channel_name, "Notification displayed");
        Delivery::Displayed { slot_id }
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
