pub mod notifications;

// Re-export key types for convenience
pub use notifications::{NotificationService, SendNotificationInput};
