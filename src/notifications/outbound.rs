//! Sending push messages through the backend send endpoint.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use thiserror::Error;

use crate::config::PushConfig;
use crate::notifications::session::NotificationSession;

#[derive(Debug, Error)]
pub enum PushError {
    #[error("No push token registered for this device")]
    NoToken,

    #[error("Push sending is not configured (missing server key)")]
    NotConfigured,

    #[error("Push request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Push rejected: {status} - {body}")]
    Rejected { status: u16, body: String },
}

/// Who receives an outbound push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushTarget {
    Topic(String),
    Token(String),
}

impl PushTarget {
    fn address(&self) -> String {
        match self {
            PushTarget::Topic(topic) => format!("/topics/{}", topic),
            PushTarget::Token(token) => token.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OutboundPush {
    pub target: PushTarget,
    pub title: String,
    pub body: String,
    pub data: BTreeMap<String, String>,
    /// Falls back to the configured default channel when unset.
    pub channel_id: Option<String>,
}

#[derive(Serialize)]
struct Envelope<'a> {
    to: String,
    notification: EnvelopeNotification<'a>,
    data: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
struct EnvelopeNotification<'a> {
    title: &'a str,
    body: &'a str,
    android_channel_id: &'a str,
}

impl OutboundPush {
    pub fn new(target: PushTarget, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            target,
            title: title.into(),
            body: body.into(),
            data: BTreeMap::new(),
            channel_id: None,
        }
    }

    /// Address this device using the token currently held by `session`.
    pub fn to_session_device(
        session: &NotificationSession,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, PushError> {
        let token = session.token().ok_or(PushError::NoToken)?;
        let mut push = Self::new(PushTarget::Token(token), title, body);
        push.channel_id = session.channel();
        Ok(push)
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn with_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// JSON body submitted to the send endpoint.
    pub fn envelope(&self, default_channel_id: &str) -> serde_json::Value {
        let envelope = Envelope {
            to: self.target.address(),
            notification: EnvelopeNotification {
                title: &self.title,
                body: &self.body,
                android_channel_id: self.channel_id.as_deref().unwrap_or(default_channel_id),
            },
            data: &self.data,
        };
        serde_json::to_value(envelope).unwrap_or(serde_json::Value::Null)
    }
}

/// HTTP client for the push send endpoint.
///
/// Only success or failure is reported; delivery is not tracked.
pub struct PushClient {
    client: Client,
    config: PushConfig,
}

impl PushClient {
    pub fn new(config: PushConfig) -> Result<Self, PushError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.request_timeout_seconds)))
            .build()?;
        Ok(Self { client, config })
    }

    pub async fn send(&self, push: &OutboundPush) -> Result<(), PushError> {
        let Some(server_key) = self.config.server_key.as_deref().filter(|k| !k.is_empty()) else {
            return Err(PushError::NotConfigured);
        };

        let body = push.envelope(&self.config.default_channel_id);
        let response = self
            .client
            .post(&self.config.endpoint)
            .header("Authorization", format!("key={}", server_key))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Push send rejected");
            return Err(PushError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let target_kind = match push.target {
            PushTarget::Topic(_) => "topic",
            PushTarget::Token(_) => "token",
        };
        tracing::info!(target_kind, "Push sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn topic_envelope() {
        let push = OutboundPush::new(PushTarget::Topic("events".to_string()), "Hi", "There")
            .with_data("id", "event-5")
            .with_channel("events");
        assert_eq!(
            push.envelope("general"),
            json!({
                "to": "/topics/events",
                "notification": {"title": "Hi", "body": "There", "android_channel_id": "events"},
                "data": {"id": "event-5"}
            })
        );
    }

    #[test]
    fn token_envelope_uses_default_channel() {
        let push = OutboundPush::new(PushTarget::Token("tok".to_string()), "a", "b");
        let envelope = push.envelope("general");
        assert_eq!(envelope["to"], "tok");
        assert_eq!(envelope["notification"]["android_channel_id"], "general");
    }

    #[test]
    fn session_device_requires_token() {
        let session = NotificationSession::new();
        assert!(matches!(
            OutboundPush::to_session_device(&session, "a", "b"),
            Err(PushError::NoToken)
        ));

        session.set_token(Some("tok".to_string()));
        session.set_channel(Some("chat".to_string()));
        let push = OutboundPush::to_session_device(&session, "a", "b").unwrap();
        assert_eq!(push.target, PushTarget::Token("tok".to_string()));
        assert_eq!(push.channel_id.as_deref(), Some("chat"));
    }

    #[tokio::test]
    async fn send_without_server_key_is_not_configured() {
        let client = PushClient::new(PushConfig::default()).unwrap();
        let push = OutboundPush::new(PushTarget::Topic("t".to_string()), "a", "b");
        assert!(matches!(client.send(&push).await, Err(PushError::NotConfigured)));
    }
}
