pub mod error;
pub mod guard;
pub mod notification;

// Re-export commonly used types
pub use error::{DomainError, DomainResult};
pub use notification::{
    CreateNotificationProps, Mark, Notification, NotificationContent, NotificationRepository,
};
