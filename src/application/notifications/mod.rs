//! Notification use cases

pub mod service;

pub use service::{NotificationService, SendNotificationInput};
