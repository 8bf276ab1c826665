//! Notification DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::Notification;

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationDto {
    pub id: String,
    pub recipient_id: String,
    pub content: String,
    pub category: String,
    pub created_at: String,
    /// RFC 3339 timestamp; absent while unread
    pub read_at: Option<String>,
    /// RFC 3339 timestamp; absent while not cancelled
    pub cancelled_at: Option<String>,
}

impl From<&Notification> for NotificationDto {
    fn from(n: &Notification) -> Self {
        Self {
            id: n.id().to_string(),
            recipient_id: n.recipient_id().to_string(),
            content: n.content().as_str().to_string(),
            category: n.category().to_string(),
            created_at: n.created_at().to_rfc3339(),
            read_at: n.read_at().time().map(|d| d.to_rfc3339()),
            cancelled_at: n.cancelled_at().time().map(|d| d.to_rfc3339()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendNotificationRequest {
    pub recipient_id: String,
    pub content: String,
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct NotificationCountDto {
    pub recipient_id: String,
    pub count: u64,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListNotificationsParams {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}
fn default_page_size() -> u32 {
    20
}
