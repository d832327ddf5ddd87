//! Push-notification lifecycle: registration token, inbound display
//! rules and outbound sends.

pub mod inbound;
pub mod outbound;
pub mod session;

pub use inbound::{
    notification_slot_id, Delivery, InboundPush, Notification, NotificationDisplay, PushData,
    PushReceiver,
};
pub use outbound::{OutboundPush, PushClient, PushError, PushTarget};
pub use session::NotificationSession;
