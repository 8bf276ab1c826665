//! Notification aggregate
//!
//! Contains the notification entity, its construction guards, and the
//! repository interface.

pub mod model;
pub mod repository;

pub use model::{CreateNotificationProps, Mark, Notification, NotificationContent};
pub use repository::NotificationRepository;
