use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub push: PushConfig,
}

/// Loading-indicator presentation policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Minimum time the loading state is shown before a fast result is
    /// accepted, in milliseconds (default: 0).
    #[serde(default)]
    pub min_loading_ms: u64,
}

/// Push-messaging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushConfig {
    /// Send endpoint of the push backend.
    #[serde(default = "default_push_endpoint")]
    pub endpoint: String,
    /// Server key sent as `Authorization: key=<server_key>`.
    #[serde(default)]
    pub server_key: Option<String>,
    /// Channel used when an outbound push does not name one.
    #[serde(default = "default_channel_id")]
    pub default_channel_id: String,
    /// Notification slot used when the payload id carries no numeric suffix.
    #[serde(default)]
    pub fallback_notification_id: i32,
    /// Send request timeout in seconds (default: 10).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u32,
}

fn default_push_endpoint() -> String {
    "https://fcm.googleapis.com/fcm/send".to_string()
}

fn default_channel_id() -> String {
    "general".to_string()
}

fn default_request_timeout() -> u32 {
    10
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            endpoint: default_push_endpoint(),
            server_key: None,
            default_channel_id: default_channel_id(),
            fallback_notification_id: 0,
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl PushConfig {
    /// True when outbound pushes can be sent.
    pub fn is_configured(&self) -> bool {
        self.server_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}
